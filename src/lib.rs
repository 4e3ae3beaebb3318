//! Folio library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Theme override from the `--theme` CLI flag. Absent means "use the saved
/// preference"; the flag itself is never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}
