//! Roadmap listing, lookup and creation

use crate::client::RoadmapClient;
use crate::error::CliResult;
use crate::output::{self, print_info, print_success, OutputFormat};
use chrono::{DateTime, Utc};
use roadmap_types::{CreateRoadmapRequest, Roadmap};
use serde::Serialize;
use tabled::Tabled;

/// Table row for roadmap display
#[derive(Debug, Serialize, Tabled)]
pub struct RoadmapRow {
    /// Roadmap ID (short form)
    id: String,
    /// Title
    title: String,
    /// Number of ejes estratégicos
    ejes: usize,
    /// Number of iniciativas
    iniciativas: usize,
    /// Age
    age: String,
}

impl RoadmapRow {
    fn from_roadmap(roadmap: Roadmap, now: DateTime<Utc>) -> Self {
        let age = roadmap
            .created_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|created| humanize_duration(now - created.with_timezone(&Utc)))
            .unwrap_or_else(|| "-".to_string());

        Self {
            id: roadmap
                .id
                .as_deref()
                .map(truncate_id)
                .unwrap_or_else(|| "-".to_string()),
            title: roadmap.title,
            ejes: roadmap.ejes_estrategicos.len(),
            iniciativas: roadmap.iniciativas.len(),
            age,
        }
    }
}

fn truncate_id(id: &str) -> String {
    match id.char_indices().nth(8) {
        Some((idx, _)) => id[..idx].to_string(),
        None => id.to_string(),
    }
}

fn humanize_duration(duration: chrono::Duration) -> String {
    if duration.num_days() > 0 {
        format!("{}d", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m", duration.num_minutes())
    } else {
        format!("{}s", duration.num_seconds().max(0))
    }
}

/// `list`: every roadmap the service knows about
pub async fn list(client: &RoadmapClient, format: OutputFormat) -> CliResult<()> {
    let now = Utc::now();
    let roadmaps = client.list_roadmaps().await?;
    let rows: Vec<RoadmapRow> = roadmaps
        .into_iter()
        .map(|r| RoadmapRow::from_roadmap(r, now))
        .collect();
    output::print_output(rows, format)
}

/// `get`: one roadmap in full
pub async fn get(client: &RoadmapClient, roadmap_id: &str, format: OutputFormat) -> CliResult<()> {
    let roadmap = client.get_roadmap(roadmap_id).await?;
    output::print_single(&roadmap, format)
}

/// `create`: a new, empty roadmap
pub async fn create(
    client: &RoadmapClient,
    title: String,
    description: String,
    format: OutputFormat,
) -> CliResult<()> {
    print_info(&format!("Creating roadmap \"{}\"...", title));
    let created = client
        .create_roadmap(&CreateRoadmapRequest { title, description })
        .await?;

    match format {
        OutputFormat::Table => {
            let label = created.id.as_deref().unwrap_or(created.title.as_str());
            print_success(&format!("Created roadmap: {}", label));
            Ok(())
        }
        _ => output::print_single(&created, format),
    }
}
