//! Selection overlay rendering
//!
//! Draws the in-progress and finalized region as a marching-ants
//! outline into an offscreen surface and pushes it to the host's
//! composite layer whenever geometry changes.

pub mod outline;

pub use outline::OutlineRenderer;
