//! Wall and terrain collision handling
//!
//! Walls are resolved by clamping plus a 0.8 restitution on the offending
//! velocity component; the top wall additionally reports a [`HitEvent`].
//! Terrain collisions are detected per walkable segment and resolved by
//! reflecting the velocity across the segment normal, then correcting
//! penetration vertically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Bounds, HitEvent};
use super::terrain::{TerrainProfile, height_on_segment};
use crate::consts::*;

/// The first walkable segment found overlapping the ball this tick.
///
/// Transient: recomputed every tick and discarded after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionSegment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl CollisionSegment {
    /// Unit normal used for reflection: the segment tangent rotated a
    /// quarter turn. NOT guaranteed to point away from the terrain; with
    /// `upward` set, a downward-pointing normal is flipped.
    pub fn normal(&self, upward: bool) -> Vec2 {
        let d = self.p2 - self.p1;
        let length = d.length();
        if length == 0.0 {
            // Zero-length segment has no tangent; treat as flat ground.
            return Vec2::new(0.0, -1.0);
        }
        let normal = Vec2::new(-d.y, d.x) / length;
        if upward && normal.y > 0.0 {
            -normal
        } else {
            normal
        }
    }

    /// Interpolated terrain height at `x` along this segment.
    pub fn height_at(&self, x: f32) -> f32 {
        height_on_segment(self.p1, self.p2, x)
    }
}

/// Resolve collisions with the left, right, and top walls.
///
/// Left and right are mutually exclusive per tick; the top check runs
/// independently and is the sole scoring trigger. There is no bottom wall,
/// the terrain bounds the arena from below.
pub fn resolve_walls(ball: &mut Ball, bounds: Bounds) -> Option<HitEvent> {
    let r = ball.radius;

    if ball.pos.x - r <= 0.0 {
        ball.pos.x = r;
        ball.vel.x = -ball.vel.x * WALL_RESTITUTION;
    } else if ball.pos.x + r >= bounds.width {
        ball.pos.x = bounds.width - r;
        ball.vel.x = -ball.vel.x * WALL_RESTITUTION;
    }

    if ball.pos.y - r <= 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y * WALL_RESTITUTION;
        return Some(HitEvent);
    }

    None
}

/// Find the terrain segment the ball currently overlaps, if any.
///
/// Segments are tested in ascending index order and the first match wins,
/// not the deepest. Where segments overlap in x at a terrain discontinuity
/// this can pick an earlier, shallower segment; that selection rule is
/// load-bearing for reproducibility and must not be "improved".
pub fn detect_terrain(ball: &Ball, profile: &TerrainProfile) -> Option<CollisionSegment> {
    let x = ball.pos.x;

    for (p1, p2) in profile.walkable_segments() {
        let (lo, hi) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
        if x < lo || x > hi {
            continue;
        }
        let y_terrain = height_on_segment(p1, p2, x);
        if ball.pos.y + ball.radius >= y_terrain {
            return Some(CollisionSegment { p1, p2 });
        }
    }

    None
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Resolve a terrain collision in place.
///
/// Reflects the velocity across the segment normal, applies the asymmetric
/// energy scaling (horizontal speeds up, vertical damps), then moves the
/// ball straight up by any remaining penetration depth. No horizontal
/// correction is applied.
pub fn resolve_terrain(ball: &mut Ball, segment: &CollisionSegment, upward_normals: bool) {
    let normal = segment.normal(upward_normals);

    ball.vel = reflect_velocity(ball.vel, normal);
    ball.vel.x *= BOUNCE_SPEEDUP_X;
    ball.vel.y *= BOUNCE_DAMPING_Y;

    let y_terrain = segment.height_at(ball.pos.x);
    let overlap = (ball.pos.y + ball.radius) - y_terrain;
    if overlap > 0.0 {
        ball.pos.y -= overlap;
    }
}
