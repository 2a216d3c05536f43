//! Pattern library for the CSS constructs the mirror understands
//!
//! Patterns are assembled from small lexical fragments (numbers, identifiers,
//! whitespace, URL characters) following the CSS 2.1 tokenization grammar, and
//! compiled once on first use.
//!
//! The `regex` crate guarantees linear-time matching but has no look-around.
//! Where a rule needs to look at the text surrounding a candidate match
//! ("not preceded by a letter", "not followed by an opening brace", "inside a
//! `url(...)`"), the candidate is matched by the compiled pattern and then
//! accepted or rejected by one of the guards at the bottom of this file. The
//! substitution engine resumes the search one character after a rejected
//! candidate, which is how a failing look-around behaves.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Synthetic delimiter used by every generated marker.
pub const TOKEN_DELIMITER: char = '~';

/// Joins the input lines into a single workspace.
pub const TOKEN_LINES: &str = "~J~";

/// Temporary marker used while swapping two values.
pub const TMP_TOKEN: &str = "~TMP~";

// --- Lexical fragments -------------------------------------------------------

pub const NUM: &str = r"(?:[0-9]*\.[0-9]+|[0-9]+)";
pub const SPACE: &str = r"[ \t\r\n\f]";
pub const WHITESPACE: &str = r"[ \t\r\n\f]*";
pub const NONASCII: &str = r"[^\x00-\x7F]";
pub const UNICODE: &str = r"(?:\\[0-9a-f]{1,6}(?:\r\n|[ \n\r\t\f])?)";
pub const UNIT: &str = r"(?:em|ex|px|cm|mm|in|pt|pc|deg|rad|grad|ms|s|hz|khz|%)";
pub const COMMENT: &str = r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/";

/// Units that make a non-percentage length.
pub const LENGTH_UNIT: &str = r"(?:em|ex|px|cm|mm|in|pt|pc)";

pub static ESCAPE: Lazy<String> = Lazy::new(|| format!(r"(?:{UNICODE}|\\[^\r\n\f0-9a-f])"));

pub static NMSTART: Lazy<String> =
    Lazy::new(|| format!(r"(?:[_a-z]|{NONASCII}|{})", ESCAPE.as_str()));

pub static NMCHAR: Lazy<String> =
    Lazy::new(|| format!(r"(?:[_a-z0-9-]|{NONASCII}|{})", ESCAPE.as_str()));

pub static IDENT: Lazy<String> =
    Lazy::new(|| format!(r"-?{}{}*", NMSTART.as_str(), NMCHAR.as_str()));

pub static NAME: Lazy<String> = Lazy::new(|| format!(r"{}+", NMCHAR.as_str()));

pub static HASH: Lazy<String> = Lazy::new(|| format!(r"#{}", NAME.as_str()));

/// A number with an optional unit (or any identifier glued to it).
pub static QUANTITY: Lazy<String> =
    Lazy::new(|| format!(r"{NUM}(?:{WHITESPACE}{UNIT}|{})?", IDENT.as_str()));

/// Characters allowed in an unquoted `url(...)` body: printable ASCII without
/// quotes, parentheses or spaces.
pub static URL_CHARS: Lazy<String> =
    Lazy::new(|| format!(r"(?:[!#$%\&*-~]|{NONASCII}|{})*", ESCAPE.as_str()));

/// A quantity that may be negative, or one of the keywords `inherit`/`auto`.
pub static POSSIBLY_NEGATIVE_QUANTITY: Lazy<String> =
    Lazy::new(|| format!(r"(?:-?{}|inherit|auto)", QUANTITY.as_str()));

/// A possibly negative quantity captured in its own group, then whitespace.
static PNQ_SPACE: Lazy<String> = Lazy::new(|| {
    format!(
        r"({}){SPACE}{WHITESPACE}",
        POSSIBLY_NEGATIVE_QUANTITY.as_str()
    )
});

pub static COLOR: Lazy<String> = Lazy::new(|| format!(r"(?:{}|{})", NAME.as_str(), HASH.as_str()));

/// A length with a unit, or a bare run of zeros.
pub static LENGTH: Lazy<String> =
    Lazy::new(|| format!(r"(?:-?{NUM}(?:{WHITESPACE}{LENGTH_UNIT})|0+)"));

static NOFLIP_ANNOTATION: Lazy<String> =
    Lazy::new(|| format!(r"/\*{WHITESPACE}@noflip{WHITESPACE}\*/"));

// --- Compiled patterns -------------------------------------------------------

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

pub static COMMENT_RE: Lazy<Regex> = Lazy::new(|| compile(&format!(r"(?i){COMMENT}")));

/// Group 1 is the annotation itself; the rest is the protected declaration.
pub static NOFLIP_SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)({})[^;}}]+;?", NOFLIP_ANNOTATION.as_str())));

pub static NOFLIP_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i){}[^}}]*?\}}", NOFLIP_ANNOTATION.as_str())));

/// The head of a gradient function call, up to and including its `(`.
pub static GRADIENT_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i){}[.-]gradient{WHITESPACE}\(",
        IDENT.as_str()
    ))
});

pub static BORDER_RADIUS_TOKENIZER_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)(?:{})?border-radius{WHITESPACE}:[^;}}]+;?",
        IDENT.as_str()
    ))
});

fn body_direction(value: &str) -> Regex {
    compile(&format!(
        r"(?i)(body{WHITESPACE}\{{{WHITESPACE}[^}}]*?direction{WHITESPACE}:{WHITESPACE}){value}"
    ))
}

pub static BODY_DIRECTION_LTR_RE: Lazy<Regex> = Lazy::new(|| body_direction("ltr"));
pub static BODY_DIRECTION_RTL_RE: Lazy<Regex> = Lazy::new(|| body_direction("rtl"));

/// Group 1 keeps an optional glued `top`/`bottom` prefix.
pub static LEFT_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)((?:top|bottom)?)left"));
pub static RIGHT_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)((?:top|bottom)?)right"));

pub static LEFT_IN_URL_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)left"));
pub static RIGHT_IN_URL_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)right"));
pub static LTR_IN_URL_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)ltr"));
pub static RTL_IN_URL_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)rtl"));

/// Group 1 keeps the optional `n`/`s` compass prefix.
pub static CURSOR_EAST_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)([ns]?)e-resize"));
pub static CURSOR_WEST_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)([ns]?)w-resize"));

/// Groups: 1 vendor prefix, 2 colon with its whitespace, 3-6 horizontal radii,
/// 7-10 vertical radii.
pub static BORDER_RADIUS_RE: Lazy<Regex> = Lazy::new(|| {
    let s = PNQ_SPACE.as_str();
    let q = POSSIBLY_NEGATIVE_QUANTITY.as_str();
    compile(&format!(
        r"(?i)((?:{ident})?)border-radius({WHITESPACE}:{WHITESPACE})(?:{s})?(?:{s})?(?:{s})?({q})(?:{WHITESPACE}/{WHITESPACE}(?:{s})?(?:{s})?(?:{s})?({q}))?",
        ident = IDENT.as_str(),
    ))
});

/// Four whitespace separated quantities, each in its own group.
pub static FOUR_NOTATION_QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    let s = PNQ_SPACE.as_str();
    compile(&format!(
        r"(?i){s}{s}{s}({q})",
        q = POSSIBLY_NEGATIVE_QUANTITY.as_str()
    ))
});

/// Groups: 1 the `-color:` head, 2-5 the four colours.
pub static FOUR_NOTATION_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    let c = COLOR.as_str();
    compile(&format!(
        r"(?i)(-color{WHITESPACE}:{WHITESPACE})({c}){SPACE}({c}){SPACE}({c}){SPACE}({c})"
    ))
});

static BG_SECOND_VALUE: Lazy<String> = Lazy::new(|| {
    format!(
        r"(?:{}|top|center|bottom)",
        POSSIBLY_NEGATIVE_QUANTITY.as_str()
    )
});

pub static BG_HORIZONTAL_PERCENTAGE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"background(?P<position>-position)?(?P<colon>{WHITESPACE}:{WHITESPACE})(?P<prefix>[^%]*?)(?P<value>{NUM})%(?P<suffix>{WHITESPACE}{})",
        BG_SECOND_VALUE.as_str()
    ))
});

pub static BG_HORIZONTAL_PERCENTAGE_X_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"background-position-x(?P<colon>{WHITESPACE}:{WHITESPACE})(?P<value>{NUM})%"
    ))
});

pub static BG_HORIZONTAL_LENGTH_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"background(?P<position>-position)?(?P<colon>{WHITESPACE}:{WHITESPACE})(?P<prefix>(?:.+?{SPACE}+)??)(?P<length>{length})(?P<suffix>{SPACE}+{second})",
        length = LENGTH.as_str(),
        second = BG_SECOND_VALUE.as_str(),
    ))
});

pub static BG_HORIZONTAL_LENGTH_X_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"background-position-x(?P<colon>{WHITESPACE}:{WHITESPACE})(?P<length>{})",
        LENGTH.as_str()
    ))
});

/// A length whose value is zero, with or without a unit.
pub static ZERO_LENGTH_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"^-?(?:0+(?:\.0+)?|\.0+)(?:{WHITESPACE}{LENGTH_UNIT})?$"
    ))
});

static BARE_ZEROS_RE: Lazy<Regex> = Lazy::new(|| compile(r"^0+$"));

/// The remainder of a `url(...)` body: URL characters, an optional closing
/// quote, whitespace, then the closing parenthesis.
static CLOSING_PAREN_AHEAD_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r#"(?i)^{}['"]?{WHITESPACE}\)"#,
        URL_CHARS.as_str()
    ))
});

/// Selector characters (including joined line breaks) up to an opening brace.
static OPEN_BRACE_AHEAD_RE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)^(?:{}|{TOKEN_LINES}|{SPACE}|[#:.,+>])*\{{",
        NMCHAR.as_str()
    ))
});

static BARE_ZERO_FOLLOWER_RE: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"^(?:[0-9]|{WHITESPACE}%)")));

// --- Guards --------------------------------------------------------------------

/// Accepts or rejects a candidate match by looking at the text around it.
pub type Guard = fn(&str, &Captures<'_>) -> bool;

fn span(caps: &Captures<'_>) -> (usize, usize) {
    caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0))
}

/// True if the character right before `pos` is an ASCII letter.
pub fn preceded_by_letter(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// True if `rest` finishes the body of a `url(...)`.
pub fn closes_url(rest: &str) -> bool {
    CLOSING_PAREN_AHEAD_RE.is_match(rest)
}

/// True if `rest` is still part of a selector, i.e. reaches a `{` through
/// selector characters only.
pub fn opens_block(rest: &str) -> bool {
    OPEN_BRACE_AHEAD_RE.is_match(rest)
}

/// Accepts every candidate.
pub fn always(_text: &str, _caps: &Captures<'_>) -> bool {
    true
}

/// A directional keyword used as a value, outside URLs and selectors.
pub fn outside_url_and_selector(text: &str, caps: &Captures<'_>) -> bool {
    let (start, end) = span(caps);
    let rest = &text[end..];
    !preceded_by_letter(text, start) && !closes_url(rest) && !opens_block(rest)
}

/// A directional keyword inside the body of a `url(...)`.
pub fn inside_url(text: &str, caps: &Captures<'_>) -> bool {
    let (start, end) = span(caps);
    !preceded_by_letter(text, start) && closes_url(&text[end..])
}

/// A keyword that does not continue a word, e.g. `e-resize` but not `the-resize`.
pub fn not_after_letter(text: &str, caps: &Captures<'_>) -> bool {
    !preceded_by_letter(text, span(caps).0)
}

/// A noflip annotation in front of a declaration rather than a selector.
pub fn annotates_declaration(text: &str, caps: &Captures<'_>) -> bool {
    match caps.get(1) {
        Some(annotation) => !opens_block(&text[annotation.end()..]),
        None => false,
    }
}

/// A bare zero length must not start a longer number or a percentage.
pub fn ends_length(text: &str, caps: &Captures<'_>) -> bool {
    match caps.name("length") {
        Some(length) if BARE_ZEROS_RE.is_match(length.as_str()) => {
            !BARE_ZERO_FOLLOWER_RE.is_match(&text[length.end()..])
        }
        Some(_) => true,
        None => false,
    }
}
