//! Login/logout session lifecycle against a mock API.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_persists_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"message": "Login successful", "username": "alice"}),
        ))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    cargo_bin_cmd!("vitrine")
        .env("VITRINE_HOME", dir.path())
        .env("VITRINE_API_URL", server.uri())
        .args(["login", "--username", "alice", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as alice"));

    let session = std::fs::read_to_string(dir.path().join("session")).unwrap();
    assert_eq!(session.trim(), "alice");
}

#[tokio::test]
async fn test_login_invalid_credentials_leaves_no_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    cargo_bin_cmd!("vitrine")
        .env("VITRINE_HOME", dir.path())
        .env("VITRINE_API_URL", server.uri())
        .args(["login", "--username", "alice", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    assert!(!dir.path().join("session").exists());
}

#[tokio::test]
async fn test_register_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(serde_json::json!({"message": "Username already exists"})),
        )
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    cargo_bin_cmd!("vitrine")
        .env("VITRINE_HOME", dir.path())
        .env("VITRINE_API_URL", server.uri())
        .args(["register", "--username", "alice", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Username already exists"));
}

#[test]
fn test_logout_removes_session() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("session"), "alice\n").unwrap();

    cargo_bin_cmd!("vitrine")
        .env("VITRINE_HOME", dir.path())
        .arg("logout")
        .assert()
        .success();

    assert!(!dir.path().join("session").exists());
}

#[test]
fn test_logout_without_session_is_noop() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("vitrine")
        .env("VITRINE_HOME", dir.path())
        .arg("logout")
        .assert()
        .success();
}

#[test]
fn test_whoami() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("vitrine")
        .env("VITRINE_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));

    std::fs::write(dir.path().join("session"), "alice\n").unwrap();

    cargo_bin_cmd!("vitrine")
        .env("VITRINE_HOME", dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));
}
