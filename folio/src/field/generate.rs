use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FolioError, Result};
use crate::models::{Edge, Point3D};

/// Largest field the service will generate on request.
pub const MAX_POINT_COUNT: usize = 100_000;
/// Upper limit for `max_connections`.
pub const MAX_EDGE_COUNT: usize = 10_000;
/// Upper limit for `max_source_nodes`. Each source scans every later point,
/// so this bounds the search to `MAX_SOURCE_NODES * count` distance checks.
pub const MAX_SOURCE_NODES: usize = 1_000;
/// Upper limit for `max_per_source`.
pub const MAX_PER_SOURCE: usize = 100;

/// Shape of a particle field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldParams {
    /// Number of particles
    pub count: usize,
    /// Edge length of the cube the particles are scattered in, centred on the origin
    pub bounds: f32,
    /// Particles closer than this are connected
    pub connection_distance: f32,
    /// Global cap on edges
    pub max_connections: usize,
    /// Only the first `max_source_nodes` particles may start an edge
    pub max_source_nodes: usize,
    /// Cap on edges started by a single particle
    pub max_per_source: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: 3000,
            bounds: 15.0,
            connection_distance: 2.0,
            max_connections: 800,
            max_source_nodes: 150,
            max_per_source: 5,
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_POINT_COUNT {
            return Err(FolioError::Validation(format!(
                "count must be at most {MAX_POINT_COUNT}, got {}",
                self.count
            )));
        }
        let caps = [
            ("maxConnections", self.max_connections, MAX_EDGE_COUNT),
            ("maxSourceNodes", self.max_source_nodes, MAX_SOURCE_NODES),
            ("maxPerSource", self.max_per_source, MAX_PER_SOURCE),
        ];
        for (name, value, limit) in caps {
            if value > limit {
                return Err(FolioError::Validation(format!(
                    "{name} must be at most {limit}, got {value}"
                )));
            }
        }
        if !self.bounds.is_finite() || self.bounds < 0.0 {
            return Err(FolioError::Validation(
                "bounds must be a finite, non-negative number".to_string(),
            ));
        }
        if !self.connection_distance.is_finite() || self.connection_distance < 0.0 {
            return Err(FolioError::Validation(
                "connectionDistance must be a finite, non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Particle positions and the proximity graph between them. Immutable once
/// generated; edges index into `points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleField {
    params: FieldParams,
    points: Vec<Point3D>,
    edges: Vec<Edge>,
}

impl ParticleField {
    /// Scatter points uniformly in the bounds cube and connect nearby ones.
    ///
    /// Edge search is deliberately bounded: only the first
    /// `max_source_nodes` points act as sources, each source scans only
    /// higher-indexed targets and stops after `max_per_source` hits, and the
    /// whole search stops at `max_connections`.
    pub fn generate<R: Rng>(params: FieldParams, rng: &mut R) -> Self {
        let half = params.bounds / 2.0;
        let mut sample = || {
            if half > 0.0 {
                rng.gen_range(-half..=half)
            } else {
                0.0
            }
        };

        let points: Vec<Point3D> = (0..params.count)
            .map(|_| {
                let x = sample();
                let y = sample();
                let z = sample();
                Point3D::new(x, y, z)
            })
            .collect();

        let edges = connect(&points, &params);

        debug!(
            points = points.len(),
            edges = edges.len(),
            "Generated particle field"
        );

        Self {
            params,
            points,
            edges,
        }
    }

    /// Reproducible generation: the same seed always yields the same field.
    pub fn seeded(params: FieldParams, seed: u64) -> Self {
        Self::generate(params, &mut StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: FieldParams) -> Self {
        Self::generate(params, &mut StdRng::from_entropy())
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Endpoint positions of every edge, for renderers that draw line segments.
    pub fn segments(&self) -> impl Iterator<Item = (Point3D, Point3D)> + '_ {
        self.edges
            .iter()
            .map(|edge| (self.points[edge.source], self.points[edge.target]))
    }
}

fn connect(points: &[Point3D], params: &FieldParams) -> Vec<Edge> {
    let mut edges = Vec::new();
    let sources = points.len().min(params.max_source_nodes);

    'sources: for i in 0..sources {
        let mut from_source = 0;
        for j in (i + 1)..points.len() {
            if from_source >= params.max_per_source {
                break;
            }
            if edges.len() >= params.max_connections {
                break 'sources;
            }
            if points[i].distance_to(&points[j]) < params.connection_distance {
                edges.push(Edge::new(i, j));
                from_source += 1;
            }
        }
    }

    edges
}
