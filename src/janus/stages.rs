//! Directional rewrite stages
//!
//! Each stage is a pure function from workspace text to workspace text. The
//! order of [`Stage::ALL`] is significant: later patterns are written against
//! the output of earlier ones, and the four-part notation stage must never see
//! un-tokenized border-radius declarations.

pub mod background;
pub mod border_radius;
pub mod cursor;
pub mod direction;
pub mod four_part;
pub mod left_right;

use crate::janus::error::{Diagnostic, MirrorError};
use crate::janus::options::MirrorOptions;
use tracing::warn;

/// One rewrite pass over the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `direction: ltr`/`rtl` inside a `body { ... }` block
    BodyDirection,
    /// `left`/`right` inside `url(...)`, only when enabled
    LeftRightInUrl,
    /// `ltr`/`rtl` inside `url(...)`, only when enabled
    LtrRtlInUrl,
    /// `left`/`right` everywhere else
    LeftRight,
    /// `e-resize`/`w-resize` cursors
    Cursor,
    /// Corner order of `border-radius`
    BorderRadius,
    /// Second and fourth values of four-part shorthands
    FourPartNotation,
    /// Horizontal `background-position`
    BackgroundPosition,
}

impl Stage {
    /// Every stage in pipeline order.
    pub const ALL: [Stage; 8] = [
        Stage::BodyDirection,
        Stage::LeftRightInUrl,
        Stage::LtrRtlInUrl,
        Stage::LeftRight,
        Stage::Cursor,
        Stage::BorderRadius,
        Stage::FourPartNotation,
        Stage::BackgroundPosition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::BodyDirection => "body-direction",
            Stage::LeftRightInUrl => "left-right-in-url",
            Stage::LtrRtlInUrl => "ltr-rtl-in-url",
            Stage::LeftRight => "left-right",
            Stage::Cursor => "cursor",
            Stage::BorderRadius => "border-radius",
            Stage::FourPartNotation => "four-part-notation",
            Stage::BackgroundPosition => "background-position",
        }
    }

    /// Whether this stage runs under `options`.
    pub fn enabled(self, options: &MirrorOptions) -> bool {
        match self {
            Stage::LeftRightInUrl => options.swap_left_right_in_url,
            Stage::LtrRtlInUrl => options.swap_ltr_rtl_in_url,
            _ => true,
        }
    }

    pub fn apply(self, text: &str, ctx: &mut StageContext<'_>) -> Result<String, MirrorError> {
        match self {
            Stage::BodyDirection => Ok(direction::fix_body_direction(text)),
            Stage::LeftRightInUrl => Ok(left_right::fix_left_right_in_url(text)),
            Stage::LtrRtlInUrl => Ok(left_right::fix_ltr_rtl_in_url(text)),
            Stage::LeftRight => Ok(left_right::fix_left_right(text)),
            Stage::Cursor => Ok(cursor::fix_cursor(text)),
            Stage::BorderRadius => Ok(border_radius::fix_border_radius(text)),
            Stage::FourPartNotation => four_part::fix_four_part_notation(text),
            Stage::BackgroundPosition => background::fix_background_position(text, ctx),
        }
    }
}

/// Per-call state shared by the stages: the options and the diagnostics
/// collected so far.
#[derive(Debug)]
pub struct StageContext<'a> {
    options: &'a MirrorOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> StageContext<'a> {
    pub fn new(options: &'a MirrorOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Report a horizontal length that cannot be mirrored.
    ///
    /// Fails unless the options ask for such values to be left alone, in which
    /// case the value is logged and recorded as a diagnostic.
    pub fn unmirrorable(&mut self, length: &str, declaration: &str) -> Result<(), MirrorError> {
        let diagnostic = Diagnostic {
            length: length.to_string(),
            declaration: declaration.to_string(),
        };
        if !self.options.ignore_unmirrorable_background_position {
            return Err(diagnostic.into());
        }
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
        Ok(())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
