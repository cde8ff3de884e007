//! Procedurally drawn mock-up screenshots of the Preset Engine plugin UI.
//!
//! A [`Context`] loads the fonts, and then renders any of the [`Scene`]s to a PNG file.  The only
//! non-trivial geometry lives in [`knob`] (rotary indicators) and [`slider`]; everything else is
//! drawing calls against fixed layout constants.

use std::{ffi::OsString, path::PathBuf};

pub mod canvas;
pub mod chain;
pub mod code;
pub mod context;
mod error;
pub mod fonts;
pub mod knob;
pub mod scenes;
pub mod slider;
pub mod spectrum;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use context::Context;
pub use error::{Error, Result};
pub use scenes::Scene;

/// The directory into which screenshots are written: the first positional argument, or the
/// working directory if none is given.  `args` should include the program name, as
/// [`std::env::args_os`] does.
pub fn output_dir(mut args: impl Iterator<Item = OsString>) -> PathBuf {
    args.nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = OsString> {
        list.iter()
            .map(OsString::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn output_dir_defaults_to_working_dir() {
        assert_eq!(output_dir(args(&["preset-views"])), PathBuf::from("."));
        assert_eq!(output_dir(args(&[])), PathBuf::from("."));
    }

    #[test]
    fn output_dir_from_first_arg() {
        let dir = output_dir(args(&["preset-views", "shots", "ignored"]));
        assert_eq!(dir, PathBuf::from("shots"));
    }
}
