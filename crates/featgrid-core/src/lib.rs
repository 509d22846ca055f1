//! featgrid-core — shared library for the featgrid matrix viewer.
//!
//! Provides:
//! - `model` — support document model and the loaded registry
//! - `load` — one-shot document loading (file path or HTTP URL)
//! - `score` — per-exporter aggregate support scores
//! - `filter` — filter descriptor, matching, visibility, transitions
//! - `view` — UI-agnostic table structure built from (registry, filter)
//!
//! With `tui` feature (default):
//! - `tui` — terminal frontend (ratatui/crossterm): state, input, widgets

pub mod filter;
pub mod load;
pub mod model;
pub mod score;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;
