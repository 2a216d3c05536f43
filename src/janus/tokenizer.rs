//! Protection of spans that must survive the rewrite stages verbatim
//!
//! A [`Tokenizer`] replaces every span found by a [`SpanFinder`] with a
//! placeholder of the form `~<KIND>_<n>~` and keeps the originals, in document
//! order, so that [`Tokenizer::detokenize`] can put them back byte for byte.
//!
//! Tokenizers are plain values created per conversion call; nothing is shared
//! between calls.

use crate::janus::error::MirrorError;
use crate::janus::gradient::GradientScanner;
use crate::janus::patterns::{
    always, annotates_declaration, Guard, BORDER_RADIUS_TOKENIZER_RE, COMMENT_RE,
    NOFLIP_CLASS_RE, NOFLIP_SINGLE_RE, TOKEN_DELIMITER,
};
use crate::janus::substitute::guarded_captures;
use regex::Regex;
use std::ops::Range;
use tracing::trace;

/// What a placeholder stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    NoflipSingle,
    NoflipClass,
    Gradient,
    BorderRadius,
}

impl TokenKind {
    /// The keyword written between the placeholder delimiters.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Comment => "C",
            TokenKind::NoflipSingle => "NOFLIP_SINGLE",
            TokenKind::NoflipClass => "NOFLIP_CLASS",
            TokenKind::Gradient => "GRADIENT",
            TokenKind::BorderRadius => "BORDER_RADIUS",
        }
    }

    /// The placeholder for the `sequence`-th span (1-based).
    pub fn placeholder(self, sequence: usize) -> String {
        format!(
            "{d}{}_{}{d}",
            self.label(),
            sequence,
            d = TOKEN_DELIMITER
        )
    }

    /// The finder that locates spans of this kind.
    pub fn finder(self) -> Box<dyn SpanFinder> {
        match self {
            TokenKind::Comment => Box::new(PatternFinder::new(&COMMENT_RE, always)),
            TokenKind::NoflipSingle => {
                Box::new(PatternFinder::new(&NOFLIP_SINGLE_RE, annotates_declaration))
            }
            TokenKind::NoflipClass => Box::new(PatternFinder::new(&NOFLIP_CLASS_RE, always)),
            TokenKind::Gradient => Box::new(GradientScanner::new()),
            TokenKind::BorderRadius => {
                Box::new(PatternFinder::new(&BORDER_RADIUS_TOKENIZER_RE, always))
            }
        }
    }
}

/// Finds the spans a tokenizer should protect.
///
/// Spans must be returned in ascending order and must not overlap.
pub trait SpanFinder {
    fn find_spans(&self, text: &str) -> Result<Vec<Range<usize>>, MirrorError>;
}

/// A span finder driven by a compiled pattern and a context guard
pub struct PatternFinder<'a> {
    pattern: &'a Regex,
    guard: Guard,
}

impl<'a> PatternFinder<'a> {
    pub fn new(pattern: &'a Regex, guard: Guard) -> Self {
        Self { pattern, guard }
    }
}

impl SpanFinder for PatternFinder<'_> {
    fn find_spans(&self, text: &str) -> Result<Vec<Range<usize>>, MirrorError> {
        Ok(guarded_captures(self.pattern, text, self.guard)
            .iter()
            .filter_map(|caps| caps.get(0).map(|m| m.range()))
            .collect())
    }
}

/// Replaces protected spans with placeholders and restores them later
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    kind: TokenKind,
    originals: Vec<String>,
}

impl Tokenizer {
    /// Protect every span `finder` reports in `text`.
    ///
    /// Returns the tokenized text together with the tokenizer holding the
    /// originals needed to restore it.
    pub fn tokenize(
        kind: TokenKind,
        text: &str,
        finder: &dyn SpanFinder,
    ) -> Result<(String, Tokenizer), MirrorError> {
        let spans = finder.find_spans(text)?;
        let mut originals = Vec::with_capacity(spans.len());
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for span in spans {
            let original = &text[span.clone()];
            out.push_str(&text[last..span.start]);
            originals.push(original.to_string());
            out.push_str(&kind.placeholder(originals.len()));
            trace!(kind = kind.label(), sequence = originals.len(), original, "protected span");
            last = span.end;
        }
        out.push_str(&text[last..]);

        Ok((out, Tokenizer { kind, originals }))
    }

    /// Put every original back in place of its placeholder, in ascending
    /// sequence order.
    pub fn detokenize(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (index, original) in self.originals.iter().enumerate() {
            text = text.replace(&self.kind.placeholder(index + 1), original);
        }
        text
    }

    pub fn originals(&self) -> &[String] {
        &self.originals
    }

    pub fn len(&self) -> usize {
        self.originals.len()
    }
}

/// Run `rewrite` on `text` with the spans of `kind` protected, restoring them
/// on the way out.
///
/// The rewrite never observes the protected text. If it fails, the error is
/// returned and the partially rewritten text is discarded.
pub fn shielded<F>(
    kind: TokenKind,
    text: &str,
    finder: &dyn SpanFinder,
    rewrite: F,
) -> Result<String, MirrorError>
where
    F: FnOnce(&str) -> Result<String, MirrorError>,
{
    let (tokenized, tokenizer) = Tokenizer::tokenize(kind, text, finder)?;
    let rewritten = rewrite(&tokenized)?;
    Ok(tokenizer.detokenize(&rewritten))
}
