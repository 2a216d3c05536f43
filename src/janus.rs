//! Mirroring engine for left-to-right stylesheets
//!
//! The engine works on a single workspace string per call. Spans that must
//! not be touched are swapped for placeholders by a [`tokenizer::Tokenizer`],
//! the directional [`stages`] rewrite what is left, and the placeholders are
//! restored afterwards. See [`pipeline`] for the exact phase order.

pub mod error;
pub mod gradient;
pub mod options;
pub mod patterns;
pub mod pipeline;
pub mod stages;
pub mod substitute;
pub mod tokenizer;

pub use error::{Diagnostic, MirrorError};
pub use options::{Flag, Loader, MirrorOptions};
pub use pipeline::{convert, flip_lines, flip_str, Conversion, Pipeline};
pub use stages::Stage;
pub use tokenizer::{TokenKind, Tokenizer};
