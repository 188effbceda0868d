//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (terrain generation)
//! - No rendering or platform dependencies
//!
//! The host drives the sim by calling [`tick`] at a fixed cadence; the core
//! has no innate stopping condition and no knowledge of score or elapsed
//! time beyond the [`HitEvent`]s it reports.

pub mod collision;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{
    CollisionSegment, detect_terrain, reflect_velocity, resolve_terrain, resolve_walls,
};
pub use state::{Ball, Bounds, ConfigError, HitEvent, SimConfig, SimState};
pub use terrain::{TerrainConfig, TerrainProfile};
pub use tick::{TickResult, integrate, tick};
