//! Balanced-parenthesis scanner for gradient function calls
//!
//! Gradient arguments may nest parentheses (`-webkit-gradient(linear, ...,
//! from(#fff), to(#000))`), which no regular pattern can delimit. The scanner
//! finds the head of the call with a pattern and then walks forward counting
//! parenthesis depth until the call closes.

use crate::janus::error::MirrorError;
use crate::janus::patterns::GRADIENT_RE;
use crate::janus::tokenizer::SpanFinder;
use std::ops::Range;

/// Finds whole gradient calls, from the function name to its closing `)`
#[derive(Debug, Default, Clone, Copy)]
pub struct GradientScanner;

impl GradientScanner {
    pub fn new() -> Self {
        Self
    }
}

impl SpanFinder for GradientScanner {
    fn find_spans(&self, text: &str) -> Result<Vec<Range<usize>>, MirrorError> {
        let bytes = text.as_bytes();
        let mut spans = Vec::new();
        let mut pos = 0;

        while let Some(head) = GRADIENT_RE.find_at(text, pos) {
            let mut depth = 1usize;
            let mut index = head.end();

            while depth > 0 {
                match bytes.get(index) {
                    Some(b'(') => depth += 1,
                    Some(b')') => depth -= 1,
                    Some(_) => {}
                    None => {
                        return Err(MirrorError::UnbalancedParentheses {
                            function: head.as_str().to_string(),
                            offset: head.start(),
                        })
                    }
                }
                index += 1;
            }

            spans.push(head.start()..index);
            pos = index;
        }

        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<&str> {
        GradientScanner::new()
            .find_spans(text)
            .unwrap()
            .into_iter()
            .map(|span| &text[span])
            .collect()
    }

    #[test]
    fn test_simple_gradient() {
        assert_eq!(
            spans("background-image: -moz-linear-gradient(#326cc1, #234e8c)"),
            vec!["-moz-linear-gradient(#326cc1, #234e8c)"]
        );
    }

    #[test]
    fn test_nested_parentheses() {
        let text = "a: -webkit-gradient(linear, 100% 0%, from(#666), to(#fff)); b: left";
        assert_eq!(
            spans(text),
            vec!["-webkit-gradient(linear, 100% 0%, from(#666), to(#fff))"]
        );
    }

    #[test]
    fn test_multiple_gradients() {
        let text = "linear-gradient(left, red) , radial-gradient(circle, rgb(0,0,0))";
        assert_eq!(
            spans(text),
            vec!["linear-gradient(left, red)", "radial-gradient(circle, rgb(0,0,0))"]
        );
    }

    #[test]
    fn test_unbalanced_is_an_error() {
        let result = GradientScanner::new().find_spans("x: linear-gradient(left, rgb(0,0,0)");
        match result {
            Err(MirrorError::UnbalancedParentheses { function, offset }) => {
                assert_eq!(function, "linear-gradient(");
                assert_eq!(offset, 3);
            }
            other => panic!("expected unbalanced error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_gradient() {
        assert!(spans("float: left; background: url(a.png)").is_empty());
    }
}
