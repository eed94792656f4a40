use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GRAPH: &str = r#"{
    "name": "chain",
    "attributes": { "rankdir": "LR" },
    "nodes": [
        { "id": "a", "attributes": { "shape": "box" } },
        { "id": "b" },
        { "id": "c" },
        { "id": "d" }
    ],
    "edges": [
        { "from": "a", "to": "b" },
        { "from": "a", "to": "c" },
        { "from": "b", "to": "c" }
    ]
}"#;

/// `trellis` with an isolated config file inside `dir`
fn trellis(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("TRELLIS_CONFIG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_build_prints_dot() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "graph.json", GRAPH);

    trellis(&dir)
        .arg("build")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph chain {\n"))
        .stdout(predicate::str::contains("  rankdir=\"LR\";\n"))
        .stdout(predicate::str::contains("  a [shape=\"box\"];\n"))
        .stdout(predicate::str::contains("  d;\n"))
        .stdout(predicate::str::contains("  b -> c;\n"));
}

#[test]
fn test_build_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "graph.json", GRAPH);
    let out = dir.path().join("graph.gv");

    trellis(&dir)
        .args(["build", "-o"])
        .arg(&out)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(read(&out).contains("a -> b;"));
}

#[test]
fn test_build_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "graph.json", r#"{ "nodes": [{"id": "x"}, {"id": "y"}], "edges": [{"from": "x", "to": "y"}] }"#);
    write(&dir, "config.toml", "[graph]\ndirected = false\n");

    trellis(&dir)
        .arg("build")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph {\n"))
        .stdout(predicate::str::contains("x -- y;"));
}

#[test]
fn test_build_rejects_unknown_endpoint() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "graph.json", r#"{ "nodes": [{"id": "a"}], "edges": [{"from": "a", "to": "ghost"}] }"#);

    trellis(&dir)
        .arg("build")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node not found: ghost"));
}

#[test]
fn test_bfs_decorates_reachable_part() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "graph.json", GRAPH);

    trellis(&dir)
        .args(["bfs", "--start", "a", "--node-attr", "color=red", "--edge-attr", "style=dashed"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("  a [shape=\"box\"];\n"))
        .stdout(predicate::str::contains("  b [color=\"red\"];\n"))
        .stdout(predicate::str::contains("  a -> c [style=\"dashed\"];\n"))
        .stdout(predicate::str::contains("  b -> c [style=\"dashed\"];\n"))
        .stdout(predicate::str::contains("\n  d").not());
}

#[test]
fn test_bfs_logs_visited_set() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "graph.json", GRAPH);

    trellis(&dir)
        .args(["-v", "bfs", "--start", "b"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Visited 1 nodes: c"));
}

#[test]
fn test_bfs_rejects_malformed_attribute() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "graph.json", GRAPH);

    trellis(&dir)
        .args(["bfs", "--start", "a", "--node-attr", "color"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_render_dry_run_shows_renderer_input() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "in.gv", "digraph { a -> b; }\n");

    trellis(&dir)
        .args(["--dry-run", "-f", "svg", "render"])
        .arg(&file)
        .assert()
        .success()
        .stdout("digraph { a -> b; }\n");
}

#[test]
fn test_render_reports_missing_renderer() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "in.gv", "digraph { a -> b; }\n");
    write(&dir, "config.toml", "[render]\nprogram = \"/nonexistent/trellis-dot\"\n");

    trellis(&dir)
        .args(["-f", "png", "render"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Renderer unavailable"));
}

#[test]
fn test_config_set_get_list() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["config", "set", "output.format", "svg"])
        .assert()
        .success()
        .stdout("Set output.format = svg\n");

    trellis(&dir)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("svg\n");

    trellis(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("render.program = dot"))
        .stdout(predicate::str::contains("output.format = svg"));

    trellis(&dir)
        .args(["config", "set", "output.format", "bmp"])
        .assert()
        .failure();
}

#[test]
fn test_config_init_requires_force_to_overwrite() {
    let dir = TempDir::new().unwrap();

    trellis(&dir).args(["config", "init"]).assert().success();
    assert!(read(&dir.path().join("config.toml")).contains("program = \"dot\""));

    trellis(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    trellis(&dir).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    trellis(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trellis"));
}
