//! Simulation state and configuration
//!
//! All state that must be serialized for save/replay lives here. The ball
//! is owned exclusively by the [`SimState`] and mutated only inside
//! [`tick`](super::tick::tick); the terrain profile is read-only after
//! construction and safe to share with any number of rendering consumers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::terrain::{TerrainConfig, TerrainProfile};
use crate::consts::*;

/// The single moving body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn at the top center of the arena with zero velocity.
    pub fn spawn(width: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(width / 2.0, 0.0),
            vel: Vec2::ZERO,
            radius,
        }
    }
}

/// Static arena extents for one simulation instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Emitted when the ball strikes the top wall. The sole scoring trigger;
/// the host owns any counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitEvent;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width in pixels
    pub width: f32,
    /// Arena height in pixels
    pub height: f32,
    /// Constant acceleration (y grows downward, so gravity is positive y)
    pub gravity: Vec2,
    /// Fixed timestep in seconds
    pub dt: f32,
    /// Ball radius in pixels
    pub ball_radius: f32,
    /// Flip terrain normals that point into the ground so reported normals
    /// face away from the surface. Off by default: the stock behavior keeps
    /// the raw rotated-tangent normal. Reflection is invariant under the
    /// flip, so this affects the normal's reported direction only.
    pub upward_normals: bool,
    /// Terrain generator parameters
    pub terrain: TerrainConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            gravity: Vec2::new(0.0, GRAVITY_Y),
            dt: SIM_DT,
            ball_radius: BALL_RADIUS,
            upward_normals: false,
            terrain: TerrainConfig::default(),
        }
    }
}

/// Configuration rejected at construction time
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("arena width must be positive, got {0}")]
    NonPositiveWidth(f32),

    #[error("arena height must be positive, got {0}")]
    NonPositiveHeight(f32),

    #[error("ball radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("timestep must be positive, got {0}")]
    NonPositiveDt(f32),

    #[error("arena width {width} must exceed ball diameter {diameter}")]
    ArenaTooNarrow { width: f32, diameter: f32 },

    #[error("terrain step range invalid: min {min}, max {max}")]
    InvalidStepRange { min: i32, max: i32 },

    #[error("terrain height offsets invalid: min {min}, max {max}")]
    InvalidHeightOffsets { min: i32, max: i32 },

    #[error("terrain profile has no walkable segments")]
    EmptyTerrain,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub ball: Ball,
    pub terrain: TerrainProfile,
    pub bounds: Bounds,
    pub gravity: Vec2,
    pub dt: f32,
    pub upward_normals: bool,
}

impl SimState {
    /// Create a simulation with freshly generated terrain.
    ///
    /// Fails fast on unusable configuration; once constructed, ticks never
    /// error (degenerate geometry is handled by fallback math).
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        validate(config)?;
        let terrain = TerrainProfile::generate(config.width, config.height, &config.terrain, seed);
        Self::with_terrain(config, terrain)
    }

    /// Create a simulation over a caller-supplied terrain profile.
    pub fn with_terrain(config: &SimConfig, terrain: TerrainProfile) -> Result<Self, ConfigError> {
        validate(config)?;
        if terrain.walkable_points().len() < 2 {
            return Err(ConfigError::EmptyTerrain);
        }
        Ok(Self {
            ball: Ball::spawn(config.width, config.ball_radius),
            terrain,
            bounds: Bounds {
                width: config.width,
                height: config.height,
            },
            gravity: config.gravity,
            dt: config.dt,
            upward_normals: config.upward_normals,
        })
    }
}

fn validate(config: &SimConfig) -> Result<(), ConfigError> {
    if config.width <= 0.0 {
        return Err(ConfigError::NonPositiveWidth(config.width));
    }
    if config.height <= 0.0 {
        return Err(ConfigError::NonPositiveHeight(config.height));
    }
    if config.ball_radius <= 0.0 {
        return Err(ConfigError::NonPositiveRadius(config.ball_radius));
    }
    if config.dt <= 0.0 {
        return Err(ConfigError::NonPositiveDt(config.dt));
    }
    if config.width <= 2.0 * config.ball_radius {
        return Err(ConfigError::ArenaTooNarrow {
            width: config.width,
            diameter: 2.0 * config.ball_radius,
        });
    }
    let t = &config.terrain;
    if t.min_step <= 0 || t.max_step < t.min_step {
        return Err(ConfigError::InvalidStepRange {
            min: t.min_step,
            max: t.max_step,
        });
    }
    if t.min_height_offset < 0 || t.max_height_offset < t.min_height_offset {
        return Err(ConfigError::InvalidHeightOffsets {
            min: t.min_height_offset,
            max: t.max_height_offset,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let state = SimState::new(&SimConfig::default(), 1).unwrap();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 0.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.ball.radius, 4.0);
        assert_eq!(state.bounds.width, 800.0);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let config = SimConfig {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            SimState::new(&config, 1),
            Err(ConfigError::NonPositiveWidth(_))
        ));

        let config = SimConfig {
            height: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            SimState::new(&config, 1),
            Err(ConfigError::NonPositiveHeight(_))
        ));

        let config = SimConfig {
            ball_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            SimState::new(&config, 1),
            Err(ConfigError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn test_rejects_bad_terrain_ranges() {
        let mut config = SimConfig::default();
        config.terrain.min_step = 30;
        config.terrain.max_step = 15;
        assert!(matches!(
            SimState::new(&config, 1),
            Err(ConfigError::InvalidStepRange { .. })
        ));

        let mut config = SimConfig::default();
        config.terrain.min_height_offset = 200;
        config.terrain.max_height_offset = 120;
        assert!(matches!(
            SimState::new(&config, 1),
            Err(ConfigError::InvalidHeightOffsets { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_terrain() {
        let config = SimConfig::default();
        let empty = TerrainProfile::from_walkable(Vec::new(), 800.0, 300.0);
        assert!(matches!(
            SimState::with_terrain(&config, empty),
            Err(ConfigError::EmptyTerrain)
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, config.width);
        assert_eq!(back.gravity, config.gravity);
        assert_eq!(back.terrain.max_step, config.terrain.max_step);
    }

    #[test]
    fn test_partial_config_json() {
        // Missing fields fall back to defaults
        let config: SimConfig = serde_json::from_str(r#"{"ball_radius": 6.0}"#).unwrap();
        assert_eq!(config.ball_radius, 6.0);
        assert_eq!(config.width, 800.0);
        assert_eq!(config.dt, crate::consts::SIM_DT);
    }
}
