use serde::{Deserialize, Serialize};

/// A particle position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Point3D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// Connection between two particles, stored as indices into the owning
/// field's point list. Always `source < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// Accumulated rotation in radians around the x and y axes. Grows without
/// bound; renderers should use [`Rotation::normalized`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    pub fn normalized(&self) -> Rotation {
        Rotation {
            x: self.x.rem_euclid(std::f64::consts::TAU),
            y: self.y.rem_euclid(std::f64::consts::TAU),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Point3D::new(0.0, 0.0, 0.0);
        let b = Point3D::new(1.0, 2.0, 2.0);
        assert!((a.distance_to(&b) - 3.0).abs() < 1e-6);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_normalized_rotation_stays_in_one_turn() {
        let rotation = Rotation { x: -7.0, y: 13.0 };
        let normalized = rotation.normalized();
        assert!((0.0..std::f64::consts::TAU).contains(&normalized.x));
        assert!((0.0..std::f64::consts::TAU).contains(&normalized.y));
        assert!((normalized.x - (-7.0 + 2.0 * std::f64::consts::TAU)).abs() < 1e-9);
    }
}
