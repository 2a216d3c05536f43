//! Horizontal `background-position`
//!
//! Percentages are mirrored around the centre (`X%` becomes `(100 - X)%`).
//! A zero length becomes `100%`. Any other length depends on the width of the
//! element and cannot be mirrored; see [`StageContext::unmirrorable`].

use crate::janus::error::MirrorError;
use crate::janus::patterns::{
    always, ends_length, BG_HORIZONTAL_LENGTH_RE, BG_HORIZONTAL_LENGTH_X_RE,
    BG_HORIZONTAL_PERCENTAGE_RE, BG_HORIZONTAL_PERCENTAGE_X_RE, ZERO_LENGTH_RE,
};
use crate::janus::stages::StageContext;
use crate::janus::substitute::try_replace;
use regex::Captures;
use tracing::debug;

/// Compute `100 - value` keeping the number of decimals of `value`.
///
/// Returns `None` when the value does not fit the arithmetic.
pub fn mirror_percentage(value: &str) -> Option<String> {
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    let scale = 10i128.checked_pow(u32::try_from(fraction.len()).ok()?)?;
    let units: i128 = format!("{whole}{fraction}").parse().ok()?;
    let flipped = 100i128.checked_mul(scale)?.checked_sub(units)?;

    let sign = if flipped < 0 { "-" } else { "" };
    let magnitude = flipped.unsigned_abs();
    if fraction.is_empty() {
        return Some(format!("{sign}{magnitude}"));
    }
    let scale = scale.unsigned_abs();
    Some(format!(
        "{sign}{}.{:0width$}",
        magnitude / scale,
        magnitude % scale,
        width = fraction.len()
    ))
}

fn named<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn whole<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(0).map_or("", |m| m.as_str())
}

/// Mirror every horizontal background position in `text`.
pub fn fix_background_position(
    text: &str,
    ctx: &mut StageContext<'_>,
) -> Result<String, MirrorError> {
    let text = try_replace(&BG_HORIZONTAL_PERCENTAGE_RE, text, always, |caps| {
        Ok(match mirror_percentage(named(caps, "value")) {
            Some(x) => format!(
                "background{}{}{}{}%{}",
                named(caps, "position"),
                named(caps, "colon"),
                named(caps, "prefix"),
                x,
                named(caps, "suffix")
            ),
            None => whole(caps).to_string(),
        })
    })?;

    let text = try_replace(&BG_HORIZONTAL_PERCENTAGE_X_RE, &text, always, |caps| {
        Ok(match mirror_percentage(named(caps, "value")) {
            Some(x) => format!("background-position-x{}{}%", named(caps, "colon"), x),
            None => whole(caps).to_string(),
        })
    })?;

    let text = try_replace(&BG_HORIZONTAL_LENGTH_RE, &text, always, |caps| {
        let length = named(caps, "length");
        if !ZERO_LENGTH_RE.is_match(length) {
            ctx.unmirrorable(length, whole(caps))?;
            return Ok(whole(caps).to_string());
        }
        Ok(format!(
            "background{}{}{}100%{}",
            named(caps, "position"),
            named(caps, "colon"),
            named(caps, "prefix"),
            named(caps, "suffix")
        ))
    })?;

    let text = try_replace(&BG_HORIZONTAL_LENGTH_X_RE, &text, ends_length, |caps| {
        let length = named(caps, "length");
        if !ZERO_LENGTH_RE.is_match(length) {
            ctx.unmirrorable(length, whole(caps))?;
            return Ok(whole(caps).to_string());
        }
        Ok(format!("background-position-x{}100%", named(caps, "colon")))
    })?;

    debug!(output = %text, "fix_background_position");
    Ok(text)
}
