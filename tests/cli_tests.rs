mod common;

use assert_cmd::prelude::*;
use common::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The binary with a private configuration directory and no inherited
/// connection settings.
fn bocli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bocli").unwrap();
    cmd.env("BOCLI_CONFIG_DIR", config_dir.path())
        .env_remove("BOCLI_HOST")
        .env_remove("BOCLI_USERNAME")
        .env_remove("BOCLI_PASSWORD")
        .env_remove("BOCLI_FORMAT")
        .env_remove("BOCLI_HEADERS")
        .env_remove("RUST_LOG");
    cmd
}

fn connect_to(cmd: &mut Command, mock_server: &MockServer) {
    let address = mock_server.address();
    cmd.arg("--host")
        .arg(address.ip().to_string())
        .arg("--port")
        .arg(address.port().to_string())
        .arg("--username")
        .arg(USERNAME)
        .arg("--password")
        .arg(PASSWORD);
}

async fn mount_logoff(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("{}/v1/logoff", PLATFORM)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[test]
fn test_help_lists_commands() {
    let config_dir = TempDir::new().unwrap();
    bocli(&config_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("folder"))
        .stdout(predicate::str::contains("document"))
        .stdout(predicate::str::contains("dataprovider"))
        .stdout(predicate::str::contains("universe"))
        .stdout(predicate::str::contains("sweep"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_subcommand_help() {
    let config_dir = TempDir::new().unwrap();
    bocli(&config_dir)
        .args(["document", "purge", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--id"))
        .stdout(predicate::str::contains("--no-save"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_missing_id_is_a_usage_error() {
    let config_dir = TempDir::new().unwrap();
    bocli(&config_dir)
        .args(["document", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn test_config_path_honours_environment() {
    let config_dir = TempDir::new().unwrap();
    let expected = config_dir.path().join("config.yml");
    bocli(&config_dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}

#[test]
fn test_config_init_then_show() {
    let config_dir = TempDir::new().unwrap();
    bocli(&config_dir)
        .args(["--host", "bi.example.com", "--port", "6405", "config", "init"])
        .assert()
        .success();
    assert!(config_dir.path().join("config.yml").exists());

    bocli(&config_dir)
        .args(["config", "show", "--format", "csv", "--headers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROTOCOL,HOST,PORT"))
        .stdout(predicate::str::contains("http,bi.example.com,6405,false"));
}

#[test]
fn test_zero_page_size_is_a_configuration_error() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("config.yml"), "page_size: 0\n").unwrap();

    bocli(&config_dir)
        .args(["config", "show"])
        .assert()
        .code(78)
        .stderr(predicate::str::contains("page_size"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reports_of_universe_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_logon(&mock_server).await;
    mount_logoff(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/universes/5551", DOCUMENTS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "universe": { "type": "unx", "name": "eFashion", "cuid": "AQB2GBuI7nJNiHvHqbCbAtQ" }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{}/v1/cmsquery", PLATFORM)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [{
                "SI_ID": 5551,
                "SI_NAME": "eFashion",
                "SI_SL_DOCUMENTS": { "1": 7001, "2": 7002, "SI_TOTAL": 2 }
            }]
        })))
        .mount(&mock_server)
        .await;

    let config_dir = TempDir::new().unwrap();
    let mut cmd = bocli(&config_dir);
    connect_to(&mut cmd, &mock_server);
    cmd.args(["universe", "reports", "--id", "5551", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5551,eFashion,7001\n5551,eFashion,7002"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_logon_exit_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/logon/long", PLATFORM)))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let config_dir = TempDir::new().unwrap();
    let mut cmd = bocli(&config_dir);
    connect_to(&mut cmd, &mock_server);
    cmd.args(["universe", "list"])
        .assert()
        .code(100)
        .stderr(predicate::str::contains("Could not log on"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_failure_still_logs_off() {
    let mock_server = MockServer::start().await;
    mount_logon(&mock_server).await;
    mount_logoff(&mock_server).await;

    let config_dir = TempDir::new().unwrap();
    let mut cmd = bocli(&config_dir);
    connect_to(&mut cmd, &mock_server);
    cmd.args(["universe", "get", "--id", "404"])
        .assert()
        .code(67)
        .stderr(predicate::str::contains("Check the universe id again"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_delete_exits_non_zero() {
    let mock_server = MockServer::start().await;
    mount_logon(&mock_server).await;
    mount_logoff(&mock_server).await;

    let config_dir = TempDir::new().unwrap();
    let mut cmd = bocli(&config_dir);
    connect_to(&mut cmd, &mock_server);
    cmd.args(["document", "delete", "--id", "9001"])
        .assert()
        .code(102)
        .stdout(predicate::str::contains("\"success\":false"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sweep_skips_non_webi_objects() {
    let mock_server = MockServer::start().await;
    mount_logon(&mock_server).await;
    mount_logoff(&mock_server).await;

    mount_children(&mock_server, 1, "Folder", &[]).await;
    mount_children(&mock_server, 1, "Webi", &[9001, 9002]).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/documents/9001", DOCUMENTS)))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "error_code": "WSR 00999" }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/documents/9001/dataproviders", DOCUMENTS)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/documents/9002", DOCUMENTS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": { "state": "Original" }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/documents/9002/dataproviders", DOCUMENTS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dataproviders": { "dataprovider": [{ "id": "DP0" }] }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("{}/documents/9002/dataproviders/DP0", DOCUMENTS)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config_dir = TempDir::new().unwrap();
    let mut cmd = bocli(&config_dir);
    connect_to(&mut cmd, &mock_server);
    cmd.args(["sweep", "purge", "--folder", "1", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"[{"document_id":"9002","purged":["DP0"],"failed":[],"saved":false}]"#,
        ));
}
