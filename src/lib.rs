//! Freeform and straight-line marquee selection for raster layer editors
//!
//! The user draws a closed path over a bounded canvas, optionally adds
//! or subtracts sub-regions, and the resulting combined region masks
//! downstream erase/fill operations. Events go into
//! [`marquee::MarqueeTool`], an ordered effect list comes out, and
//! [`host::apply_effects`] carries the effects to the surrounding
//! application and the overlay renderer.

pub mod config;
pub mod domain;
pub mod host;
pub mod kernel;
pub mod marquee;
pub mod render;

pub use marquee::MarqueeTool;
