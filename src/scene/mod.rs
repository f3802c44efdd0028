//! Deterministic scene animation module
//!
//! All hero-scene motion lives here. This module must be pure and
//! deterministic:
//! - Elapsed time and pointer offset are the only frame inputs
//! - Seeded RNG only (initialization, never per-frame)
//! - Displayed state is recomputed from scratch each frame
//! - No rendering or platform dependencies

pub mod field;
pub mod palette;
pub mod pointer;
pub mod rig;

pub use field::{Particle, ParticleField, Sprite};
pub use palette::PaletteBucket;
pub use pointer::PointerOffset;
pub use rig::{banner_float, camera_position, group_tilt};
