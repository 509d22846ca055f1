//! UI-agnostic view models for the matrix surface.
//!
//! These types carry presentation structure without depending on a rendering
//! framework; the TUI maps them to ratatui lines, another frontend would map
//! them to its own cells.

mod matrix;

pub use matrix::{HeaderColumn, MatrixCell, MatrixRow, MatrixView, build_matrix_view};
