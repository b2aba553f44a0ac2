//! Shared fixtures for the wiremock based integration tests.

#![allow(dead_code)]

use bocli::configuration::ServerSettings;
use bocli::BoClient;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "COMMANDCENTER:6400@{3&2=5595;U3&2v=COMMANDCENTER:6400}";
pub const USERNAME: &str = "Administrator";
pub const PASSWORD: &str = "secret";

pub const PLATFORM: &str = "/biprws";
pub const DOCUMENTS: &str = "/biprws/raylight/v1";

pub fn settings_for(server: &MockServer) -> ServerSettings {
    let address = server.address();
    ServerSettings {
        host: address.ip().to_string(),
        port: address.port(),
        ..ServerSettings::default()
    }
}

pub fn client_for(server: &MockServer) -> BoClient {
    BoClient::new(&settings_for(server)).unwrap()
}

/// Mount the two requests of the enterprise logon flow.
pub async fn mount_logon(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("{}/logon/long", PLATFORM)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userName": "",
            "password": "",
            "auth": "secEnterprise"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{}/logon/long", PLATFORM)))
        .and(body_partial_json(json!({
            "userName": USERNAME,
            "password": PASSWORD,
            "auth": "secEnterprise"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "logonToken": TOKEN })))
        .mount(server)
        .await;
}

pub async fn logged_on_client(server: &MockServer) -> BoClient {
    mount_logon(server).await;
    let mut client = client_for(server);
    client.logon(USERNAME, PASSWORD).await.unwrap();
    client
}

/// Answer an infostore children listing of one kind with the given ids.
pub async fn mount_children(server: &MockServer, folder_id: u64, kind: &str, children: &[u64]) {
    let entries: Vec<Value> = children
        .iter()
        .map(|id| json!({ "id": id, "name": format!("object {}", id) }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("{}/infostore/{}/children", PLATFORM, folder_id)))
        .and(query_param("type", kind))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "entries": entries })))
        .mount(server)
        .await;
}
