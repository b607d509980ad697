//! Built-in update payload used by the prober

use crate::roadmap::{EjeEstrategico, Iniciativa, RoadmapUpdate};

/// The hand-authored update sent by `roadmap-probe update`
///
/// Two ejes and one initiative; the initiative hangs off `EJE1`.
pub fn sample_update() -> RoadmapUpdate {
    RoadmapUpdate {
        title: "Test Roadmap Updated".to_string(),
        description: "Now with ejes and iniciativas".to_string(),
        ejes_estrategicos: vec![
            EjeEstrategico {
                id: "EJE1".to_string(),
                nombre: "Transformación Digital".to_string(),
                descripcion: "Modernizar sistemas".to_string(),
                color: "#667eea".to_string(),
            },
            EjeEstrategico {
                id: "EJE2".to_string(),
                nombre: "Eficiencia".to_string(),
                descripcion: "Optimizar procesos".to_string(),
                color: "#48bb78".to_string(),
            },
        ],
        iniciativas: vec![Iniciativa {
            id: "INIT1".to_string(),
            nombre: "API REST".to_string(),
            eje: "EJE1".to_string(),
            tipo: "Feature".to_string(),
            expediente: "EXP001".to_string(),
            inicio: "2026-T1".to_string(),
            fin: "2026-T2".to_string(),
            objetivo: "Crear APIs REST".to_string(),
            impacto_principal: "Alta".to_string(),
            usuarios_afectados: "Todos".to_string(),
            dependencias: Vec::new(),
            certeza: "comprometido".to_string(),
        }],
    }
}
