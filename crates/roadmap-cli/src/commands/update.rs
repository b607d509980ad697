//! Fixture-driven roadmap update
//!
//! Reads the fixture, takes the first roadmap's id, sends one `PUT` with the
//! update payload and prints a summary of what the server stored. An empty
//! fixture is not an error: nothing is sent and the command succeeds.

use crate::client::RoadmapClient;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::fixture::{load_fixture, load_payload};
use crate::report::{render_update_summary, NO_ROADMAPS};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use roadmap_types::{sample_update, Roadmap};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Arguments for `update`
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    /// Roadmap fixture to take the target id from
    #[arg(short, long, env = "ROADMAP_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Update this roadmap id instead of the fixture's first entry
    #[arg(long)]
    pub id: Option<String>,

    /// Payload file (JSON, or YAML by extension) to send instead of the built-in one
    #[arg(short, long)]
    pub payload: Option<PathBuf>,
}

/// What a single update run ended with
#[derive(Debug)]
pub enum UpdateOutcome {
    /// The fixture listed no roadmaps; no request was sent
    NoRoadmaps,
    /// The server accepted the update and returned this roadmap
    Updated(Roadmap),
}

/// Run one update, writing progress and the summary to `out`
///
/// The fixture is read before anything touches the network, so a missing or
/// malformed fixture never produces a request.
pub async fn run<W: Write>(
    client: &RoadmapClient,
    fixture: &Path,
    id: Option<&str>,
    payload: Option<&Path>,
    out: &mut W,
) -> CliResult<UpdateOutcome> {
    let roadmap_id = match id {
        Some(id) => id.to_string(),
        None => {
            let document = load_fixture(fixture)?;
            match document.first_roadmap_id() {
                Some(id) => id.to_string(),
                None => {
                    info!(fixture = %fixture.display(), "Fixture lists no roadmaps");
                    writeln!(out, "{}", NO_ROADMAPS)?;
                    return Ok(UpdateOutcome::NoRoadmaps);
                }
            }
        }
    };

    writeln!(out, "Testing with roadmap ID: {}\n", roadmap_id)?;

    let update = match payload {
        Some(path) => load_payload(path)?,
        None => sample_update(),
    };

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("PUT {}", client.roadmap_url(&roadmap_id)));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = client.update_roadmap(&roadmap_id, &update).await;
    pb.finish_and_clear();
    let roadmap = result?;

    write!(out, "{}", render_update_summary(&roadmap))?;
    Ok(UpdateOutcome::Updated(roadmap))
}

/// Execute the update command against stdout
pub async fn execute(args: UpdateArgs, client: &RoadmapClient, config: &CliConfig) -> CliResult<()> {
    let fixture = config.resolve_fixture(args.fixture);
    let mut out = std::io::stdout();
    run(
        client,
        &fixture,
        args.id.as_deref(),
        args.payload.as_deref(),
        &mut out,
    )
    .await?;
    Ok(())
}
