//! `left`/`right` and `ltr`/`rtl` swaps
//!
//! Outside URLs, `left` and `right` are swapped wherever they are a value or
//! part of a property name, but not inside words (`bright`), selectors
//! (`.column-left {`) or `url(...)` bodies. Inside URLs the swap only happens
//! when asked for.

use crate::janus::patterns::{
    inside_url, outside_url_and_selector, LEFT_IN_URL_RE, LEFT_RE, LTR_IN_URL_RE, RIGHT_IN_URL_RE,
    RIGHT_RE, RTL_IN_URL_RE,
};
use crate::janus::substitute::{swap, Kept, SwapSide};
use tracing::debug;

const LEFT: &str = "left";
const RIGHT: &str = "right";
const LTR: &str = "ltr";
const RTL: &str = "rtl";

/// `padding-left: 2px; margin-right: 1px` becomes
/// `padding-right: 2px; margin-left: 1px`.
pub fn fix_left_right(text: &str) -> String {
    let out = swap(
        text,
        &SwapSide {
            pattern: &LEFT_RE,
            keep: Kept::Lowercased(1),
            value: LEFT,
        },
        &SwapSide {
            pattern: &RIGHT_RE,
            keep: Kept::Lowercased(1),
            value: RIGHT,
        },
        outside_url_and_selector,
    );
    debug!(output = %out, "fix_left_right");
    out
}

/// `background:url(right.png)` becomes `background:url(left.png)`.
pub fn fix_left_right_in_url(text: &str) -> String {
    let out = swap(
        text,
        &SwapSide {
            pattern: &LEFT_IN_URL_RE,
            keep: Kept::Nothing,
            value: LEFT,
        },
        &SwapSide {
            pattern: &RIGHT_IN_URL_RE,
            keep: Kept::Nothing,
            value: RIGHT,
        },
        inside_url,
    );
    debug!(output = %out, "fix_left_right_in_url");
    out
}

/// `background:url(rtl.png)` becomes `background:url(ltr.png)`.
pub fn fix_ltr_rtl_in_url(text: &str) -> String {
    let out = swap(
        text,
        &SwapSide {
            pattern: &LTR_IN_URL_RE,
            keep: Kept::Nothing,
            value: LTR,
        },
        &SwapSide {
            pattern: &RTL_IN_URL_RE,
            keep: Kept::Nothing,
            value: RTL,
        },
        inside_url,
    );
    debug!(output = %out, "fix_ltr_rtl_in_url");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_and_values() {
        assert_eq!(
            fix_left_right("padding-left: 2px; margin-right: 1px;"),
            "padding-right: 2px; margin-left: 1px;"
        );
        assert_eq!(fix_left_right("float: left"), "float: right");
        assert_eq!(fix_left_right("border-left-color: red"), "border-right-color: red");
    }

    #[test]
    fn test_words_are_not_split() {
        assert_eq!(fix_left_right("alright: 10px"), "alright: 10px");
        assert_eq!(fix_left_right("alleft: 10px"), "alleft: 10px");
    }

    #[test]
    fn test_glued_vertical_prefix_is_kept() {
        assert_eq!(fix_left_right("topleft"), "topright");
        assert_eq!(fix_left_right("bottomright"), "bottomleft");
        assert_eq!(fix_left_right("TOPLEFT"), "topright");
    }

    #[test]
    fn test_selectors_are_not_touched() {
        assert_eq!(
            fix_left_right(".column-left { float: left }"),
            ".column-left { float: right }"
        );
        assert_eq!(
            fix_left_right("div.left > span.right+span.left { float: left }"),
            "div.left > span.right+span.left { float: right }"
        );
    }

    #[test]
    fn test_urls_need_the_flag() {
        let css = "background: url(/foo/bar-left.png); left: 1px";
        assert_eq!(
            fix_left_right(css),
            "background: url(/foo/bar-left.png); right: 1px"
        );
        assert_eq!(
            fix_left_right_in_url(css),
            "background: url(/foo/bar-right.png); left: 1px"
        );
        assert_eq!(
            fix_left_right_in_url("background: url(/foo/bright.png)"),
            "background: url(/foo/bright.png)"
        );
    }

    #[test]
    fn test_ltr_rtl_in_url() {
        assert_eq!(
            fix_ltr_rtl_in_url("url('http://www.blogger.com/img/triangle_ltr.gif'  )"),
            "url('http://www.blogger.com/img/triangle_rtl.gif'  )"
        );
        assert_eq!(fix_ltr_rtl_in_url("direction: ltr"), "direction: ltr");
    }
}
