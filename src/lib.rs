//! Mountain Bounce - a ball bouncing over random terrain
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, wall bounces, terrain collisions)
//!
//! Rendering, input handling, and session policy (score display, run timer)
//! are host concerns. The library exposes a seeded terrain generator and a
//! fixed-timestep `tick` entry point; the bundled binary is a headless host
//! that drives a two-minute run and logs hits-per-minute.

pub mod sim;

pub use sim::{
    Ball, Bounds, CollisionSegment, ConfigError, HitEvent, SimConfig, SimState, TerrainConfig,
    TerrainProfile, TickResult, tick,
};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep in seconds (1 kHz physics)
    pub const SIM_DT: f32 = 0.001;

    /// Arena dimensions (y grows downward, origin at top-left)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 300.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 4.0;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY_Y: f32 = 300.0;

    /// Velocity scale applied on wall rebounds
    pub const WALL_RESTITUTION: f32 = 0.8;
    /// Horizontal velocity scale after a terrain bounce (amplifies)
    pub const BOUNCE_SPEEDUP_X: f32 = 1.1;
    /// Vertical velocity scale after a terrain bounce (damps)
    pub const BOUNCE_DAMPING_Y: f32 = 0.95;

    /// Terrain generator defaults (whole pixels, like the step sizes)
    pub const TERRAIN_MIN_STEP: i32 = 15;
    pub const TERRAIN_MAX_STEP: i32 = 28;
    pub const TERRAIN_MIN_HEIGHT_OFFSET: i32 = 0;
    pub const TERRAIN_MAX_HEIGHT_OFFSET: i32 = 120;
}
