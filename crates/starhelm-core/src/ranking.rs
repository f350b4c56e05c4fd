//! Nearest-neighbour ranking of tracked entities.
//!
//! Pull-based and pure: callers pass an observer position and get back a
//! fresh ordered list; nothing is cached. A linear scan with a stable sort
//! is plenty at star-system entity counts, so ties keep world iteration
//! order.

use hecs::{Entity, World};

use crate::components::{Position, Vec2};

/// One ranked entity: who, and how far in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntity {
    pub entity: Entity,
    pub distance_m: f32,
}

/// Rank every entity holding a `Position` by distance from `observer`,
/// nearest first.
pub fn rank_by_distance(world: &World, observer: Vec2) -> Vec<RankedEntity> {
    rank_by_distance_excluding(world, observer, None)
}

/// Same as [`rank_by_distance`], optionally leaving one entity out
/// (typically the observer itself).
pub fn rank_by_distance_excluding(
    world: &World,
    observer: Vec2,
    exclude: Option<Entity>,
) -> Vec<RankedEntity> {
    let mut ranked: Vec<RankedEntity> = world
        .query::<&Position>()
        .iter()
        .filter(|(entity, _)| Some(*entity) != exclude)
        .map(|(entity, pos)| RankedEntity {
            entity,
            distance_m: observer.distance(&pos.meters),
        })
        .collect();

    // Stable sort: equal distances keep iteration order
    ranked.sort_by(|a, b| {
        a.distance_m
            .partial_cmp(&b.distance_m)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
