//! Report renderers for classification results.
//!
//! - [`text`] - the plain banner-delimited listing, written to any [`std::io::Write`].
//! - [`terminal`] - colored summary box and tables with reference URLs;
//!   respects `--verbose` / `--quiet`.

pub mod terminal;
pub mod text;
