//! Corner order of `border-radius`
//!
//! Corners run top-left, top-right, bottom-right, bottom-left, so mirroring
//! swaps corners pairwise rather than swapping the second and fourth value:
//!
//! | values    | mirrored     |
//! |-----------|--------------|
//! | `A B C D` | `B A D C`    |
//! | `A B C`   | `B A B C`    |
//! | `A B`     | `B A`        |
//! | `A`       | `A`          |
//!
//! The horizontal radii and the optional vertical radii after the `/` are
//! reordered independently.

use crate::janus::patterns::BORDER_RADIUS_RE;
use regex::Captures;
use tracing::debug;

/// Reorder one group of zero to four corner radii.
pub fn reorder_radii(parts: &[&str]) -> String {
    match parts {
        [a, b, c, d] => format!("{b} {a} {d} {c}"),
        [a, b, c] => format!("{b} {a} {b} {c}"),
        [a, b] => format!("{b} {a}"),
        [a] => a.to_string(),
        _ => String::new(),
    }
}

fn group<'t>(caps: &Captures<'t>, indices: std::ops::RangeInclusive<usize>) -> Vec<&'t str> {
    indices
        .filter_map(|index| caps.get(index).map(|m| m.as_str()))
        .collect()
}

/// `border-radius: 1px 2px 3px 4px / 5px 6px 7px` becomes
/// `border-radius: 2px 1px 4px 3px / 6px 5px 6px 7px`.
pub fn fix_border_radius(text: &str) -> String {
    let out = BORDER_RADIUS_RE.replace_all(text, |caps: &Captures<'_>| {
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let colon = caps.get(2).map_or("", |m| m.as_str());
        let horizontal = reorder_radii(&group(caps, 3..=6));
        let vertical = reorder_radii(&group(caps, 7..=10));

        if vertical.is_empty() {
            format!("{prefix}border-radius{colon}{horizontal}")
        } else {
            format!("{prefix}border-radius{colon}{horizontal} / {vertical}")
        }
    });
    debug!(output = %out, "fix_border_radius");
    out.into_owned()
}
