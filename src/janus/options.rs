//! Options for a conversion call
//!
//! [`MirrorOptions`] is an explicit value handed to every conversion; there is
//! no process-wide state. `defaults/cssjanus.default.toml` is embedded into the
//! binary and acts as the base layer for [`Loader`], which lets applications
//! layer option files and switch on individual [`Flag`]s (e.g. from the
//! command line) on top.

use crate::janus::error::MirrorError;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/cssjanus.default.toml");

/// A boolean option that callers can switch on over the file layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    SwapLeftRightInUrl,
    SwapLtrRtlInUrl,
    IgnoreUnmirrorableBackgroundPosition,
}

impl Flag {
    pub const ALL: [Flag; 3] = [
        Flag::SwapLeftRightInUrl,
        Flag::SwapLtrRtlInUrl,
        Flag::IgnoreUnmirrorableBackgroundPosition,
    ];

    /// The option's key in TOML files.
    pub fn key(self) -> &'static str {
        match self {
            Flag::SwapLeftRightInUrl => "swap_left_right_in_url",
            Flag::SwapLtrRtlInUrl => "swap_ltr_rtl_in_url",
            Flag::IgnoreUnmirrorableBackgroundPosition => {
                "ignore_unmirrorable_background_position"
            }
        }
    }
}

/// Flags that change how a stylesheet is mirrored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MirrorOptions {
    /// Also swap `left`/`right` inside `url(...)`.
    pub swap_left_right_in_url: bool,
    /// Also swap `ltr`/`rtl` inside `url(...)`.
    pub swap_ltr_rtl_in_url: bool,
    /// Leave unmirrorable background positions unchanged with a warning
    /// instead of failing the conversion.
    pub ignore_unmirrorable_background_position: bool,
}

impl MirrorOptions {
    pub fn with_swap_left_right_in_url(mut self, value: bool) -> Self {
        self.swap_left_right_in_url = value;
        self
    }

    pub fn with_swap_ltr_rtl_in_url(mut self, value: bool) -> Self {
        self.swap_ltr_rtl_in_url = value;
        self
    }

    pub fn with_ignore_unmirrorable_background_position(mut self, value: bool) -> Self {
        self.ignore_unmirrorable_background_position = value;
        self
    }
}

/// Resolves [`MirrorOptions`] from the embedded defaults, then every file
/// added with [`Loader::with_file`] in order, then the enabled flags.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    files: Vec<PathBuf>,
    enabled: Vec<Flag>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer a TOML options file. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Switch `flag` on, whatever the files say.
    pub fn enable(mut self, flag: Flag) -> Self {
        self.enabled.push(flag);
        self
    }

    pub fn build(&self) -> Result<MirrorOptions, MirrorError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        for path in &self.files {
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }
        for flag in &self.enabled {
            builder = builder.set_override(flag.key(), true)?;
        }
        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn options_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn embedded_defaults_are_all_off() {
        assert_eq!(Loader::new().build().unwrap(), MirrorOptions::default());
    }

    #[test]
    fn enabled_flag_is_set() {
        let options = Loader::new().enable(Flag::SwapLtrRtlInUrl).build().unwrap();
        assert!(options.swap_ltr_rtl_in_url);
        assert!(!options.swap_left_right_in_url);
    }

    #[test]
    fn flags_win_over_files() {
        let file = options_file(&[
            "swap_left_right_in_url = true",
            "ignore_unmirrorable_background_position = false",
        ]);
        let options = Loader::new()
            .with_file(file.path())
            .enable(Flag::IgnoreUnmirrorableBackgroundPosition)
            .build()
            .unwrap();
        assert!(options.swap_left_right_in_url);
        assert!(options.ignore_unmirrorable_background_position);
    }

    #[test]
    fn later_files_win() {
        let first = options_file(&["swap_ltr_rtl_in_url = true"]);
        let second = options_file(&["swap_ltr_rtl_in_url = false"]);
        let options = Loader::new()
            .with_file(first.path())
            .with_file(second.path())
            .build()
            .unwrap();
        assert!(!options.swap_ltr_rtl_in_url);
    }

    #[test]
    fn flag_keys_match_field_names() {
        for flag in Flag::ALL {
            let options = Loader::new().enable(flag).build().unwrap();
            let set = [
                options.swap_left_right_in_url,
                options.swap_ltr_rtl_in_url,
                options.ignore_unmirrorable_background_position,
            ];
            assert_eq!(set.iter().filter(|on| **on).count(), 1, "{}", flag.key());
        }
    }

    #[test]
    fn missing_file_fails() {
        let result = Loader::new().with_file("/nonexistent/cssjanus.toml").build();
        assert!(matches!(result, Err(MirrorError::Config(_))));
    }

    #[test]
    fn mistyped_value_fails() {
        let file = options_file(&["swap_left_right_in_url = [1, 2]"]);
        assert!(Loader::new().with_file(file.path()).build().is_err());
    }
}
