use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("capita"));
    cmd.env("HOME", home)
        .env_remove("CAPITA_ADDR")
        .env_remove("CAPITA_TOKEN");
    cmd
}

fn envelope(message: &str) -> serde_json::Value {
    json!({
        "timeStamp": "2024-05-01T10:00:00.000000001",
        "statusCode": 200,
        "status": "OK",
        "message": message
    })
}

#[test]
fn login_rejection_prints_server_reason() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("POST", "/user/login")
        .match_body(Matcher::PartialJson(json!({"email": "ada@example.com"})))
        .with_status(401)
        .with_body(
            json!({
                "timeStamp": "2024-05-01T10:00:00",
                "statusCode": 401,
                "status": "BAD_REQUEST",
                "reason": "Bad credentials"
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "login",
            "--email",
            "ada@example.com",
            "--password",
            "wrong",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad credentials"));

    assert!(!home_dir.path().join(".capita").join("config.json").exists());
}

#[test]
fn login_network_failure_is_reported_as_client_error() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args([
            "--addr",
            "http://127.0.0.1:1",
            "login",
            "--email",
            "ada@example.com",
            "--password",
            "secret",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A client error occurred"));
}

#[test]
fn profile_command_uses_token_flag() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let mut body = envelope("Profile Retrieved");
    body["data"] = json!({
        "user": {
            "id": 3,
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "roleName": "ROLE_ADMIN"
        }
    });
    server
        .mock("GET", "/user/profile")
        .match_header("authorization", "Bearer token-1")
        .with_status(200)
        .with_body(body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "--token", "token-1", "profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grace@example.com"))
        .stdout(predicate::str::contains("ROLE_ADMIN"));
}

#[test]
fn profile_without_context_or_token_fails() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args(["profile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("context not set"));
}

#[test]
fn register_prints_server_message() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let mut body = envelope("User created");
    body["statusCode"] = json!(201);
    body["status"] = json!("CREATED");
    body["data"] = json!({
        "user": {
            "id": 9,
            "firstName": "Alan",
            "lastName": "Turing",
            "email": "alan@example.com"
        }
    });
    server
        .mock("POST", "/user/register")
        .match_body(Matcher::Json(json!({
            "firstName": "Alan",
            "lastName": "Turing",
            "email": "alan@example.com",
            "password": "enigma"
        })))
        .with_status(201)
        .with_body(body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "register",
            "--first-name",
            "Alan",
            "--last-name",
            "Turing",
            "--email",
            "alan@example.com",
            "--password",
            "enigma",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("User created"))
        .stdout(predicate::str::contains("Alan Turing <alan@example.com>"));
}

#[test]
fn reset_password_encodes_email() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock(
            "GET",
            Matcher::Regex(r"^/user/resetpassword/ada(%40|@)example\.com$".to_string()),
        )
        .with_status(200)
        .with_body(envelope("Email sent. Please check your email to reset your password.").to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "reset-password",
            "--email",
            "ada@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email sent"));
}

#[test]
fn verify_password_prints_key_owner() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let mut body = envelope("Please enter a new password");
    body["data"] = json!({
        "user": {
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }
    });
    server
        .mock(
            "GET",
            Matcher::Regex(r"^/user/verify/password/key(%2B|\+)1$".to_string()),
        )
        .with_status(200)
        .with_body(body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "verify-password", "--key", "key+1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a new password"))
        .stdout(predicate::str::contains("ada@example.com"));
}

#[test]
fn renew_password_encodes_path_segments() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock(
            "POST",
            Matcher::Regex(
                r"^/user/resetpassword/key-1/n3w(%40|@)pass/n3w(%40|@)pass$".to_string(),
            ),
        )
        .with_status(200)
        .with_body(envelope("Password reset successfully").to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "renew-password",
            "--key",
            "key-1",
            "--password",
            "n3w@pass",
            "--confirm-password",
            "n3w@pass",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password reset successfully"));
}

#[test]
fn verify_account_reports_status_when_reason_missing() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/user/verify/account/abc123")
        .with_status(500)
        .with_body("{}")
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "verify-account", "--key", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error status 500"));
}

#[test]
fn remote_http_requires_insecure() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args([
            "--addr",
            "http://invoices.example.com",
            "--token",
            "token",
            "profile",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to use http://"));
}

#[test]
fn config_contexts_are_persisted() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args([
            "config",
            "set-context",
            "staging",
            "--addr",
            "https://staging.example.com",
        ])
        .assert()
        .success();

    base_cmd(home_dir.path())
        .args(["config", "current-context"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staging"));

    let contents = fs::read_to_string(home_dir.path().join(".capita").join("config.json"))
        .expect("config file");
    let config: serde_json::Value = serde_json::from_str(&contents).expect("config json");
    assert_eq!(config["current_context"], "staging");
    assert_eq!(
        config["contexts"]["staging"]["addr"],
        "https://staging.example.com"
    );
}
