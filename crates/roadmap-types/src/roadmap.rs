//! Roadmap records as sent to and returned by `/api/roadmaps`
//!
//! Field names follow the service's JSON exactly (Spanish domain names
//! included), so no renaming happens on the wire except `createdAt`.

use serde::{Deserialize, Serialize};

/// A strategic axis grouping initiatives
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EjeEstrategico {
    /// Eje identifier, referenced by `Iniciativa::eje`
    pub id: String,

    /// Display name
    pub nombre: String,

    /// Free-form description
    pub descripcion: String,

    /// Display color (CSS hex, e.g. `#667eea`)
    pub color: String,
}

/// An initiative belonging to one eje
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Iniciativa {
    /// Initiative identifier
    pub id: String,

    /// Display name
    pub nombre: String,

    /// Owning eje (`EjeEstrategico::id`)
    pub eje: String,

    /// Kind of work (e.g. `Feature`)
    pub tipo: String,

    /// Case file reference
    pub expediente: String,

    /// Start period (e.g. `2026-T1`)
    pub inicio: String,

    /// End period
    pub fin: String,

    pub objetivo: String,

    pub impacto_principal: String,

    pub usuarios_afectados: String,

    /// Ids of initiatives this one depends on
    pub dependencias: Vec<String>,

    /// Commitment level (e.g. `comprometido`)
    pub certeza: String,
}

/// Body of `PUT /api/roadmaps/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapUpdate {
    pub title: String,

    pub description: String,

    pub ejes_estrategicos: Vec<EjeEstrategico>,

    pub iniciativas: Vec<Iniciativa>,
}

/// Body of `POST /api/roadmaps`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoadmapRequest {
    pub title: String,

    pub description: String,
}

/// A roadmap as returned by the service
///
/// The service only guarantees `title`; everything else is optional so that a
/// freshly created roadmap (no collections yet) still deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Creation timestamp as reported by the service (ISO-8601)
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,

    #[serde(default)]
    pub ejes_estrategicos: Vec<EjeEstrategico>,

    #[serde(default)]
    pub iniciativas: Vec<Iniciativa>,
}
