//! Movement domain: avian-backed contact probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactProbe, GameLayer};

/// Answers probe queries with avian spatial queries, hitting only colliders
/// on the Ground layer.
pub(crate) struct SpatialProbe<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub(crate) fn new(query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground),
        }
    }

    fn ray_hits(&self, origin: Vec2, direction: Dir2, distance: f32) -> bool {
        self.query
            .cast_ray(origin, direction, distance, true, &self.filter)
            .is_some()
    }
}

impl ContactProbe for SpatialProbe<'_, '_, '_> {
    fn is_grounded(&self, point: Vec2, radius: f32) -> bool {
        !self
            .query
            .shape_intersections(&Collider::circle(radius), point, 0.0, &self.filter)
            .is_empty()
    }

    fn is_touching_wall(&self, chest: Vec2, direction: Dir2, distance: f32) -> bool {
        self.ray_hits(chest, direction, distance)
    }

    fn is_touching_ledge(&self, head: Vec2, direction: Dir2, distance: f32) -> bool {
        self.ray_hits(head, direction, distance)
    }
}
