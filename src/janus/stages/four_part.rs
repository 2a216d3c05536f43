//! Four-part shorthand notation (top, right, bottom, left)
//!
//! Only the right and left values move: `A B C D` becomes `A D C B`. Shorter
//! forms are symmetric and stay as they are.

use crate::janus::error::MirrorError;
use crate::janus::patterns::{FOUR_NOTATION_COLOR_RE, FOUR_NOTATION_QUANTITY_RE};
use crate::janus::tokenizer::{shielded, TokenKind};
use tracing::debug;

/// Swap the second and fourth of four quantities or colours.
///
/// `border-radius` declarations are tokenized for the duration of the swap,
/// since their four values follow a different corner order.
pub fn fix_four_part_notation(text: &str) -> Result<String, MirrorError> {
    let finder = TokenKind::BorderRadius.finder();
    let out = shielded(TokenKind::BorderRadius, text, finder.as_ref(), |text| {
        Ok(swap_second_and_fourth(text))
    })?;
    debug!(output = %out, "fix_four_part_notation");
    Ok(out)
}

fn swap_second_and_fourth(text: &str) -> String {
    let text = FOUR_NOTATION_QUANTITY_RE.replace_all(text, "${1} ${4} ${3} ${2}");
    FOUR_NOTATION_COLOR_RE
        .replace_all(&text, "${1}${2} ${5} ${4} ${3}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(text: &str) -> String {
        fix_four_part_notation(text).unwrap()
    }

    #[test]
    fn test_quantities() {
        assert_eq!(fix("padding: .25em 15px 0pt 0ex"), "padding: .25em 0ex 0pt 15px");
        assert_eq!(fix("margin: 1px -4px 3px 2px"), "margin: 1px 2px 3px -4px");
        assert_eq!(fix("padding:0 15px .25em 0"), "padding:0 0 .25em 15px");
        assert_eq!(fix("padding: 1px 4.1grad 3px 2%"), "padding: 1px 2% 3px 4.1grad");
        assert_eq!(fix("padding: 1px inherit 3px auto"), "padding: 1px auto 3px inherit");
    }

    #[test]
    fn test_shorter_forms_untouched() {
        assert_eq!(fix("margin: 1em 0 .25em"), "margin: 1em 0 .25em");
        assert_eq!(fix("padding: 1px 2px"), "padding: 1px 2px");
        assert_eq!(fix("padding: 1px"), "padding: 1px");
        assert_eq!(fix("#settings td p strong"), "#settings td p strong");
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            fix("border-color: red green blue white"),
            "border-color: red white blue green"
        );
        assert_eq!(
            fix("border-color: #f00 #0f0 #00f #fff"),
            "border-color: #f00 #fff #00f #0f0"
        );
    }

    #[test]
    fn test_border_radius_is_shielded() {
        assert_eq!(
            fix("border-radius: 1px 2px 3px 4px; margin: 1px 2px 3px 4px"),
            "border-radius: 1px 2px 3px 4px; margin: 1px 4px 3px 2px"
        );
    }
}
