//! Guarded substitution over the workspace
//!
//! Matches are collected left to right without overlap. A candidate rejected by
//! its guard does not consume any text: the search resumes one character after
//! the candidate's start, so a later candidate may begin inside it.

use crate::janus::error::MirrorError;
use crate::janus::patterns::{Guard, TMP_TOKEN};
use regex::{Captures, Regex};

/// Collect the accepted, non-overlapping matches of `re` in `text`.
pub fn guarded_captures<'t>(re: &Regex, text: &'t str, guard: Guard) -> Vec<Captures<'t>> {
    let mut accepted = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if guard(text, &caps) {
            pos = if whole.end() > whole.start() {
                whole.end()
            } else {
                next_boundary(text, whole.end())
            };
            accepted.push(caps);
        } else {
            pos = next_boundary(text, whole.start());
        }
    }

    accepted
}

fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Replace every accepted match with the result of `replacement`.
///
/// The first error returned by `replacement` aborts the substitution.
pub fn try_replace<F>(
    re: &Regex,
    text: &str,
    guard: Guard,
    mut replacement: F,
) -> Result<String, MirrorError>
where
    F: FnMut(&Captures<'_>) -> Result<String, MirrorError>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in guarded_captures(re, text, guard) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        out.push_str(&replacement(&caps)?);
        last = whole.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}

/// Replace every accepted match with the result of `replacement`.
pub fn replace_with<F>(re: &Regex, text: &str, guard: Guard, mut replacement: F) -> String
where
    F: FnMut(&Captures<'_>) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in guarded_captures(re, text, guard) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        out.push_str(&replacement(&caps));
        last = whole.end();
    }

    out.push_str(&text[last..]);
    out
}

/// What a swap keeps from the match in front of the new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kept {
    Nothing,
    /// A capture group, copied as matched.
    Group(usize),
    /// A capture group, lower-cased to agree with the value written after it.
    Lowercased(usize),
}

impl Kept {
    fn render(self, caps: &Captures<'_>) -> String {
        let group = |index: usize| caps.get(index).map_or("", |m| m.as_str());
        match self {
            Kept::Nothing => String::new(),
            Kept::Group(index) => group(index).to_string(),
            Kept::Lowercased(index) => group(index).to_ascii_lowercase(),
        }
    }
}

/// One side of a two-way swap.
pub struct SwapSide<'a> {
    pub pattern: &'a Regex,
    pub keep: Kept,
    /// The literal value this side stands for.
    pub value: &'a str,
}

/// Swap `a` and `b` so that each original occurrence ends at the opposite
/// value exactly once: `a` becomes a temporary marker, `b` becomes `a`, and
/// the marker becomes `b`.
pub fn swap(text: &str, a: &SwapSide<'_>, b: &SwapSide<'_>, guard: Guard) -> String {
    let marked = replace_with(a.pattern, text, guard, |caps| {
        format!("{}{}", a.keep.render(caps), TMP_TOKEN)
    });
    let swapped = replace_with(b.pattern, &marked, guard, |caps| {
        format!("{}{}", b.keep.render(caps), a.value)
    });
    swapped.replace(TMP_TOKEN, b.value)
}
