//! Animated particle background.
//!
//! A [`ParticleField`] is generated once (points plus a bounded proximity
//! graph) and then only rotated: the [`RotationClock`] accumulates angles per
//! frame and the [`FieldAnimator`] drives it from a background task.

mod animator;
mod generate;
mod rotation;

pub use animator::FieldAnimator;
pub use generate::{
    FieldParams, ParticleField, MAX_EDGE_COUNT, MAX_PER_SOURCE, MAX_POINT_COUNT, MAX_SOURCE_NODES,
};
pub use rotation::RotationClock;
