//! Particle field DTOs.

use serde::{Deserialize, Serialize};

use crate::field::{FieldParams, ParticleField};
use crate::models::Rotation;

/// Generation parameters as seen on the wire.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldParamsResponse {
    pub count: usize,
    pub bounds: f32,
    pub connection_distance: f32,
    pub max_connections: usize,
    pub max_source_nodes: usize,
    pub max_per_source: usize,
}

impl From<FieldParams> for FieldParamsResponse {
    fn from(p: FieldParams) -> Self {
        Self {
            count: p.count,
            bounds: p.bounds,
            connection_distance: p.connection_distance,
            max_connections: p.max_connections,
            max_source_nodes: p.max_source_nodes,
            max_per_source: p.max_per_source,
        }
    }
}

/// Point cloud plus proximity graph, in a compact renderer-friendly layout.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldResponse {
    pub params: FieldParamsResponse,
    /// `[x, y, z]` per particle.
    #[schema(value_type = Vec<Vec<f32>>)]
    pub points: Vec<[f32; 3]>,
    /// `[i, j]` index pairs into `points`, always `i < j`.
    #[schema(value_type = Vec<Vec<u64>>)]
    pub edges: Vec<[usize; 2]>,
}

impl From<&ParticleField> for FieldResponse {
    fn from(field: &ParticleField) -> Self {
        Self {
            params: (*field.params()).into(),
            points: field.points().iter().map(|p| p.to_array()).collect(),
            edges: field
                .edges()
                .iter()
                .map(|e| [e.source, e.target])
                .collect(),
        }
    }
}

/// Request body for `POST /api/v1/field:generate`. Omitted fields take the
/// reference values.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFieldRequest {
    pub count: Option<usize>,
    pub bounds: Option<f32>,
    pub connection_distance: Option<f32>,
    pub max_connections: Option<usize>,
    pub max_source_nodes: Option<usize>,
    pub max_per_source: Option<usize>,
    /// Fixed seed for reproducible output; random when absent.
    pub seed: Option<u64>,
}

impl GenerateFieldRequest {
    pub fn params(&self) -> FieldParams {
        let defaults = FieldParams::default();
        FieldParams {
            count: self.count.unwrap_or(defaults.count),
            bounds: self.bounds.unwrap_or(defaults.bounds),
            connection_distance: self
                .connection_distance
                .unwrap_or(defaults.connection_distance),
            max_connections: self.max_connections.unwrap_or(defaults.max_connections),
            max_source_nodes: self.max_source_nodes.unwrap_or(defaults.max_source_nodes),
            max_per_source: self.max_per_source.unwrap_or(defaults.max_per_source),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, utoipa::ToSchema)]
pub struct AnglesResponse {
    pub x: f64,
    pub y: f64,
}

impl From<Rotation> for AnglesResponse {
    fn from(r: Rotation) -> Self {
        Self { x: r.x, y: r.y }
    }
}

/// Current field rotation in radians.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotationResponse {
    /// Accumulated angles, unbounded.
    pub x: f64,
    pub y: f64,
    /// Same angles reduced to `[0, 2π)`.
    pub normalized: AnglesResponse,
}

impl From<Rotation> for RotationResponse {
    fn from(r: Rotation) -> Self {
        Self {
            x: r.x,
            y: r.y,
            normalized: r.normalized().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_fills_defaults() {
        let req: GenerateFieldRequest =
            serde_json::from_str(r#"{"count":10,"maxPerSource":2}"#).expect("deserialize");
        let params = req.params();
        assert_eq!(params.count, 10);
        assert_eq!(params.max_per_source, 2);
        assert_eq!(params.bounds, 15.0);
        assert_eq!(params.max_connections, 800);
        assert!(req.seed.is_none());
    }

    #[test]
    fn field_response_is_compact() {
        let field = ParticleField::seeded(
            FieldParams {
                count: 3,
                ..FieldParams::default()
            },
            1,
        );
        let json = serde_json::to_value(FieldResponse::from(&field)).expect("serialize");
        assert_eq!(json["points"].as_array().unwrap().len(), 3);
        assert_eq!(json["points"][0].as_array().unwrap().len(), 3);
        assert_eq!(json["params"]["maxSourceNodes"], 150);
    }
}
