//! Transmission-loss comparison of acoustic panels.
//!
//! NarrowBand files (`<panel>_NarrowBands.txt`, tab-separated
//! `Frequency (Hz)` / `TL (dB)` columns at a 1 Hz step) are loaded, smoothed
//! with a 50-sample centered moving average and drawn against a logarithmic
//! frequency axis, either into a PNG ([`render::png`]) or by the
//! `tl-compare` dashboard.

pub mod catalog;
pub mod color;
pub mod compare;
pub mod config;
pub mod data;
pub mod error;
pub mod render;

pub use error::{Result, TlError};
