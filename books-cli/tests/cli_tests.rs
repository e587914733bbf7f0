//! Integration tests for the Books CLI

use assert_cmd::Command;
use books_server::routes::create_router;
use books_server::state::AppState;
use predicates::prelude::*;
use std::net::SocketAddr;
use tempfile::TempDir;

/// Start a server on an ephemeral port in a background thread
fn spawn_server() -> (String, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("books.db");
    let (tx, rx) = std::sync::mpsc::channel::<SocketAddr>();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
        runtime.block_on(async move {
            let state = AppState::open(&db_path).await;
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, create_router(state)).await.unwrap();
        });
    });

    let addr = rx.recv().expect("Server failed to start");
    (format!("http://{}", addr), temp_dir)
}

fn books_cmd(base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("books-cli").unwrap();
    cmd.env_remove("BOOKS_BASE_URL").args(["--base-url", base_url]);
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("books-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("smoke"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("books-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("books"));
}

#[test]
fn test_add_help() {
    let mut cmd = Command::cargo_bin("books-cli").unwrap();
    cmd.args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--author"))
        .stdout(predicate::str::contains("--year"));
}

#[test]
fn test_get_requires_integer_id() {
    let mut cmd = Command::cargo_bin("books-cli").unwrap();
    cmd.args(["get", "abc"]).assert().failure();
}

#[test]
fn test_unreachable_server_fails() {
    books_cmd("http://127.0.0.1:1")
        .arg("list")
        .assert()
        .failure();
}

#[test]
fn test_list_empty() {
    let (base_url, _temp_dir) = spawn_server();

    books_cmd(&base_url)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: 200"))
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_add_without_year_prints_bad_request() {
    let (base_url, _temp_dir) = spawn_server();

    books_cmd(&base_url)
        .args(["add", "--title", "Python Guide", "--author", "Guido van Rossum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: 400"))
        .stdout(predicate::str::contains("Missing required fields"));
}

#[test]
fn test_add_update_get_delete() {
    let (base_url, _temp_dir) = spawn_server();

    books_cmd(&base_url)
        .args(["add", "--title", "T1", "--author", "A1", "--year", "2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: 201"))
        .stdout(predicate::str::contains("\"id\": 1"));

    books_cmd(&base_url)
        .args(["update", "1", "--year", "2021"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"year\": 2021"))
        .stdout(predicate::str::contains("\"author\": \"A1\""));

    books_cmd(&base_url)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book deleted successfully"));

    books_cmd(&base_url)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: 404"));
}

#[test]
fn test_health() {
    let (base_url, _temp_dir) = spawn_server();

    books_cmd(&base_url)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("healthy"));
}

#[test]
fn test_smoke_passes_against_server() {
    let (base_url, _temp_dir) = spawn_server();

    books_cmd(&base_url)
        .args(["smoke", "--title", "Smoke Book"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found book id=1"))
        .stdout(predicate::str::contains("Status: 404"))
        .stdout(predicate::str::contains("Done"));
}
