//! WebGPU rendering module
//!
//! Draws the hero field as instanced, billboarded point sprites with a soft
//! radial glow.

pub mod pipeline;
pub mod sprite;

pub use pipeline::SceneRenderState;
