//! Platform frontends
//!
//! Each frontend owns the real render surface, stats readout and key source,
//! and drives a `GameLoop` at the display rate:
//! - `terminal`: native, crossterm raster of the play-field
//! - `web`: browser canvas + DOM labels, `requestAnimationFrame` scheduling

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub mod web;
