//! Conversion pipeline
//!
//! A conversion runs in three phases over a single workspace string:
//!
//! 1. Protection: spans that must not be rewritten are replaced by
//!    placeholders, in this order: `@noflip` declarations, `@noflip` rule
//!    blocks, comments, gradient calls.
//! 2. Rewriting: every enabled [`Stage`] in [`Stage::ALL`] order.
//! 3. Restoration: the protected spans are put back in the reverse order of
//!    their protection.
//!
//! Input lines are joined with [`TOKEN_LINES`] so that patterns can see across
//! line breaks (selectors split over lines, `body` blocks), and the result is
//! split on the same marker so every input line maps to one output line.

use crate::janus::error::{Diagnostic, MirrorError};
use crate::janus::options::MirrorOptions;
use crate::janus::patterns::TOKEN_LINES;
use crate::janus::stages::{Stage, StageContext};
use crate::janus::tokenizer::{TokenKind, Tokenizer};
use tracing::debug;

/// Spans protected before any rewrite, in protection order.
pub const PROTECTED: [TokenKind; 4] = [
    TokenKind::NoflipSingle,
    TokenKind::NoflipClass,
    TokenKind::Comment,
    TokenKind::Gradient,
];

/// Result of a conversion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// One output line per input line
    pub lines: Vec<String>,
    /// Unmirrorable values that were left unchanged
    pub diagnostics: Vec<Diagnostic>,
}

/// An ordered set of stages configured for one set of options
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: MirrorOptions,
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(options: MirrorOptions) -> Self {
        let stages = Stage::ALL
            .into_iter()
            .filter(|stage| stage.enabled(&options))
            .collect();
        Self { options, stages }
    }

    /// The rewrite stages this pipeline runs, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Mirror `lines`.
    pub fn run<S: AsRef<str>>(&self, lines: &[S]) -> Result<Conversion, MirrorError> {
        if lines.is_empty() {
            return Ok(Conversion {
                lines: Vec::new(),
                diagnostics: Vec::new(),
            });
        }

        debug!(lines = lines.len(), options = ?self.options, "starting conversion");
        let joined = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(TOKEN_LINES);

        let mut text = joined;
        let mut tokenizers = Vec::with_capacity(PROTECTED.len());
        for kind in PROTECTED {
            let (tokenized, tokenizer) = Tokenizer::tokenize(kind, &text, kind.finder().as_ref())?;
            debug!(kind = kind.label(), protected = tokenizer.len(), "tokenized");
            tokenizers.push(tokenizer);
            text = tokenized;
        }

        let mut ctx = StageContext::new(&self.options);
        for stage in &self.stages {
            text = stage.apply(&text, &mut ctx)?;
            debug!(stage = stage.name(), "stage applied");
        }

        for tokenizer in tokenizers.iter().rev() {
            text = tokenizer.detokenize(&text);
        }

        Ok(Conversion {
            lines: text.split(TOKEN_LINES).map(str::to_string).collect(),
            diagnostics: ctx.into_diagnostics(),
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(MirrorOptions::default())
    }
}

/// Mirror `lines`, returning the converted lines and any diagnostics.
pub fn convert<S: AsRef<str>>(
    lines: &[S],
    options: &MirrorOptions,
) -> Result<Conversion, MirrorError> {
    Pipeline::new(*options).run(lines)
}

/// Mirror `lines`, returning only the converted lines.
pub fn flip_lines<S: AsRef<str>>(
    lines: &[S],
    options: &MirrorOptions,
) -> Result<Vec<String>, MirrorError> {
    convert(lines, options).map(|conversion| conversion.lines)
}

/// Mirror a whole stylesheet.
///
/// The text is split into lines that keep their terminators, so the output
/// has exactly the same line structure as the input.
pub fn flip_str(css: &str, options: &MirrorOptions) -> Result<String, MirrorError> {
    let lines: Vec<&str> = css.split_inclusive('\n').collect();
    Ok(flip_lines(&lines, options)?.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip(line: &str) -> String {
        flip_lines(&[line], &MirrorOptions::default()).unwrap().remove(0)
    }

    #[test]
    fn test_line_count_is_preserved() {
        let lines = ["#bright-left,", ".test-me { float: left }"];
        let out = flip_lines(&lines, &MirrorOptions::default()).unwrap();
        assert_eq!(out, vec!["#bright-left,", ".test-me { float: right }"]);
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert!(flip_lines(&lines, &MirrorOptions::default()).unwrap().is_empty());
        assert_eq!(flip_str("", &MirrorOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_comments_survive() {
        assert_eq!(
            flip("/* Going right is cool */\n#test {left: 10px}"),
            "/* Going right is cool */\n#test {right: 10px}"
        );
    }

    #[test]
    fn test_gradients_are_protected() {
        let css = "background-image: -webkit-gradient(linear, 100% 0%, 0% 0%, from(#666666), to(#ffffff))";
        assert_eq!(flip(css), css);
    }

    #[test]
    fn test_nested_noflip_restores_fully() {
        let css = "/* @noflip */ div { float: left; /* @noflip */ margin-left: 1px; }";
        assert_eq!(flip(css), css);
    }

    #[test]
    fn test_url_stages_only_when_enabled() {
        assert_eq!(Pipeline::default().stages().len(), 6);
        let options = MirrorOptions::default()
            .with_swap_left_right_in_url(true)
            .with_swap_ltr_rtl_in_url(true);
        assert_eq!(Pipeline::new(options).stages(), &Stage::ALL);
    }

    #[test]
    fn test_unbalanced_gradient_fails() {
        let result = flip_lines(
            &["background: linear-gradient(left, red"],
            &MirrorOptions::default(),
        );
        assert!(matches!(result, Err(MirrorError::UnbalancedParentheses { .. })));
    }

    #[test]
    fn test_flip_str_keeps_terminators() {
        let css = "a { float: left; }\r\nb { padding-right: 0 }\n";
        assert_eq!(
            flip_str(css, &MirrorOptions::default()).unwrap(),
            "a { float: right; }\r\nb { padding-left: 0 }\n"
        );
    }
}
