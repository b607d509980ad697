use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary with a private, absent config file and no ambient env overrides
fn cli_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roadmap-probe").unwrap();
    cmd.current_dir(dir)
        .env_remove("ROADMAP_ENDPOINT")
        .env_remove("ROADMAP_FIXTURE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(dir.join("config.toml"));
    cmd
}

#[test]
fn empty_fixture_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let fixture = dir.path().join("roadmaps.json");
    std::fs::write(&fixture, r#"{"roadmaps": []}"#).unwrap();

    cli_cmd(dir.path())
        .args(["--endpoint", "http://127.0.0.1:9"])
        .arg("update")
        .arg("--fixture")
        .arg(&fixture)
        .assert()
        .success()
        .stdout("No roadmaps found!\n");
}

#[test]
fn default_command_reads_default_fixture_location() {
    let dir = TempDir::new().unwrap();
    let datos = dir.path().join("frontend").join("DATOS");
    std::fs::create_dir_all(&datos).unwrap();
    std::fs::write(datos.join("roadmap_angular_mvp.json"), r#"{"roadmaps": []}"#).unwrap();

    cli_cmd(dir.path())
        .assert()
        .success()
        .stdout("No roadmaps found!\n");
}

#[test]
fn fixture_from_environment() {
    let dir = TempDir::new().unwrap();
    let fixture = dir.path().join("env.json");
    std::fs::write(&fixture, r#"{"roadmaps": []}"#).unwrap();

    cli_cmd(dir.path())
        .env("ROADMAP_FIXTURE", &fixture)
        .arg("update")
        .assert()
        .success()
        .stdout("No roadmaps found!\n");
}

#[test]
fn default_command_takes_fixture_from_environment() {
    let dir = TempDir::new().unwrap();
    let fixture = dir.path().join("env.json");
    std::fs::write(&fixture, r#"{"roadmaps": [{"id": ""}]}"#).unwrap();

    cli_cmd(dir.path())
        .env("ROADMAP_FIXTURE", &fixture)
        .args(["--endpoint", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stdout("No roadmaps found!\n");
}

#[test]
fn default_command_accepts_fixture_flag() {
    let dir = TempDir::new().unwrap();
    let fixture = dir.path().join("flag.json");
    std::fs::write(&fixture, r#"{"roadmaps": null}"#).unwrap();

    cli_cmd(dir.path())
        .arg("--fixture")
        .arg(&fixture)
        .assert()
        .success()
        .stdout("No roadmaps found!\n");
}

#[test]
fn missing_fixture_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(dir.path())
        .arg("update")
        .arg("--fixture")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn payload_command_prints_builtin_update() {
    let dir = TempDir::new().unwrap();

    cli_cmd(dir.path())
        .args(["--output", "json", "payload"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"EJE1\""))
        .stdout(predicate::str::contains("\"comprometido\""));
}

#[test]
fn config_command_shows_defaults() {
    let dir = TempDir::new().unwrap();

    cli_cmd(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Endpoint: http://localhost:8081"))
        .stdout(predicate::str::contains(
            "Fixture: frontend/DATOS/roadmap_angular_mvp.json",
        ));
}

#[test]
fn config_file_sets_endpoint() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "endpoint = \"http://roadmaps.internal:9000\"\n",
    )
    .unwrap();

    cli_cmd(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Endpoint: http://roadmaps.internal:9000",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_against_server_prints_summary() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/roadmaps/R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "R1",
            "title": "Test Roadmap Updated",
            "ejes_estrategicos": [
                {"id": "EJE1", "nombre": "Transformación Digital", "color": "#667eea"}
            ],
            "iniciativas": [
                {"id": "INIT1", "nombre": "API REST", "eje": "EJE1", "certeza": "comprometido"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let fixture = dir.path().join("roadmaps.json");
    std::fs::write(&fixture, r#"{"roadmaps": [{"id": "R1"}]}"#).unwrap();

    cli_cmd(dir.path())
        .args(["--endpoint", server.uri().as_str()])
        .arg("update")
        .arg("--fixture")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Testing with roadmap ID: R1"))
        .stdout(predicate::str::contains("✓ SUCCESS! Roadmap updated with:"))
        .stdout(predicate::str::contains("  - Ejes: 1 ejes"))
        .stdout(predicate::str::contains(
            "  ✓ API REST (Eje: EJE1, Certeza: comprometido)",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_rejected_by_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let fixture = dir.path().join("roadmaps.json");
    std::fs::write(&fixture, r#"{"roadmaps": [{"id": "R1"}]}"#).unwrap();

    cli_cmd(dir.path())
        .args(["--endpoint", server.uri().as_str()])
        .arg("update")
        .arg("--fixture")
        .arg(&fixture)
        .assert()
        .failure()
        .stdout(predicate::str::contains("SUCCESS").not())
        .stderr(predicate::str::contains("HTTP error: 500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_renders_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/roadmaps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "R1", "title": "Plan Digital", "createdAt": "2026-01-15T09:30:00Z"},
            {"id": "R2", "title": "Plan Eficiencia"}
        ])))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();

    cli_cmd(dir.path())
        .args(["--endpoint", server.uri().as_str(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan Digital"))
        .stdout(predicate::str::contains("Plan Eficiencia"));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_roadmap_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();

    cli_cmd(dir.path())
        .args(["--endpoint", server.uri().as_str(), "get", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found: /api/roadmaps/nope"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_reports_new_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/roadmaps"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "c0ffee00-0000-4000-8000-000000000000",
            "title": "Nuevo",
            "description": "Plan 2027"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();

    cli_cmd(dir.path())
        .args(["--endpoint", server.uri().as_str(), "create", "--title", "Nuevo"])
        .args(["--description", "Plan 2027"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created roadmap: c0ffee00-0000-4000-8000-000000000000",
        ));
}
