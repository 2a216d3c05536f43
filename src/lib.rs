//! # cssjanus
//!
//! Converts a left-to-right stylesheet into its right-to-left mirror (and
//! back, since the conversion is its own inverse for everything it touches).
//!
//! Horizontal properties, values and selectors are swapped (`left`/`right`,
//! `ltr`/`rtl`, `e-resize`/`w-resize`), four-part shorthands and corner radii
//! are reordered, and horizontal background positions are reflected.
//! Comments, gradients and anything annotated with `/* @noflip */` are left
//! byte for byte as they were.
//!
//! The whole engine lives in [`janus`]; the most common entry points are
//! re-exported here.

pub mod janus;

pub use janus::{
    convert, flip_lines, flip_str, Conversion, Diagnostic, Flag, Loader, MirrorError,
    MirrorOptions, Pipeline, Stage,
};
