//! Resize cursors

use crate::janus::patterns::{not_after_letter, CURSOR_EAST_RE, CURSOR_WEST_RE};
use crate::janus::substitute::{swap, Kept, SwapSide};
use tracing::debug;

/// Swap east and west resize cursors, keeping any `n`/`s` prefix:
/// `ne-resize` becomes `nw-resize`, `w-resize` becomes `e-resize`.
pub fn fix_cursor(text: &str) -> String {
    let out = swap(
        text,
        &SwapSide {
            pattern: &CURSOR_EAST_RE,
            keep: Kept::Lowercased(1),
            value: "e-resize",
        },
        &SwapSide {
            pattern: &CURSOR_WEST_RE,
            keep: Kept::Lowercased(1),
            value: "w-resize",
        },
        not_after_letter,
    );
    debug!(output = %out, "fix_cursor");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_compass_points() {
        for (from, to) in [
            ("e-resize", "w-resize"),
            ("w-resize", "e-resize"),
            ("ne-resize", "nw-resize"),
            ("nw-resize", "ne-resize"),
            ("se-resize", "sw-resize"),
            ("sw-resize", "se-resize"),
        ] {
            assert_eq!(fix_cursor(&format!("cursor: {from}")), format!("cursor: {to}"));
        }
    }

    #[test]
    fn test_unrelated_resize_untouched() {
        assert_eq!(fix_cursor("cursor: ns-resize"), "cursor: ns-resize");
        assert_eq!(fix_cursor("cursor: col-resize"), "cursor: col-resize");
    }

    #[test]
    fn test_upper_case_is_written_lower() {
        assert_eq!(fix_cursor("CURSOR: NE-RESIZE"), "CURSOR: nw-resize");
        assert_eq!(fix_cursor("cursor: Sw-Resize"), "cursor: se-resize");
    }
}
