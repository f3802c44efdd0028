//! Technova - interactive landing experience for a techno-cultural festival
//!
//! Core modules:
//! - `scene`: Deterministic animation core (particle field, pointer, camera rig)
//! - `renderer`: WebGPU instanced sprite pipeline
//! - `countdown`: Event countdown arithmetic
//! - `cursor`: Spring-smoothed custom cursor state
//! - `settings`: Persisted visitor preferences
//! - `platform`: Browser scheduling/time glue
//! - `audio`: Procedural hover/click sound feedback

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod countdown;
pub mod cursor;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use countdown::CountdownState;
pub use settings::{QualityPreset, Settings};

/// Page configuration constants
pub mod consts {
    /// Festival opening: 2026-03-15T10:00:00Z, in Unix epoch milliseconds
    pub const EVENT_DATE_MS: u64 = 1_773_568_800_000;

    /// Half-width of the cube the particle origins are scattered in
    pub const FIELD_BOUNDS: f32 = 10.0;
    /// Base sprite scale range
    pub const SCALE_MIN: f32 = 0.05;
    pub const SCALE_MAX: f32 = 0.25;
    /// How strongly the pointer drags the field
    pub const POINTER_STRENGTH: f32 = 0.05;

    /// Viewports at or below this width get no custom cursor
    pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

    /// Countdown refresh period
    pub const COUNTDOWN_PERIOD_MS: i32 = 1000;
}
