//! `direction` swap, scoped to the `body` selector

use crate::janus::patterns::{always, BODY_DIRECTION_LTR_RE, BODY_DIRECTION_RTL_RE};
use crate::janus::substitute::{swap, Kept, SwapSide};
use tracing::debug;

/// Swap `direction: ltr` and `direction: rtl` inside `body { ... }` only.
///
/// `body { direction: ltr }` becomes `body { direction: rtl }`; the same
/// declaration under any other selector is left alone.
pub fn fix_body_direction(text: &str) -> String {
    let out = swap(
        text,
        &SwapSide {
            pattern: &BODY_DIRECTION_LTR_RE,
            keep: Kept::Group(1),
            value: "ltr",
        },
        &SwapSide {
            pattern: &BODY_DIRECTION_RTL_RE,
            keep: Kept::Group(1),
            value: "rtl",
        },
        always,
    );
    debug!(output = %out, "fix_body_direction");
    out
}
