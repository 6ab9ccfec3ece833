/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use bytes::Bytes;
use dotenvy::dotenv;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Mutex;
use url::form_urlencoded;
use vimeo::v3::{ApiRequest, ApiResponse, Client, ClientConfig, Creds, Transport, VimeoError};
use wiremock::MockServer;

pub(crate) const TEST_TOKEN: &str = "test-token";

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn fixture(name: &str) -> Value {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let data = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path}: {e}"));
    serde_json::from_str(&data).unwrap()
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer) -> Client {
    init_logging();
    let config = ClientConfig {
        api_origin: server.uri(),
        ..Default::default()
    };
    Client::with_config(Creds::from_token(TEST_TOKEN), config).unwrap()
}

/// Client for a real account, configured from the environment or a `.env` file
#[allow(dead_code)]
pub(crate) fn live_client() -> anyhow::Result<Client> {
    init_logging();
    dotenv().ok();
    let creds = Creds::from_env()?;
    Ok(Client::with_config(creds, ClientConfig::from_env())?)
}

/// Keeps Albums in memory and answers the Album endpoints the way the API does
#[allow(dead_code)]
#[derive(Debug, Default)]
pub(crate) struct InMemoryAlbums {
    state: Mutex<AlbumsState>,
}

#[derive(Debug, Default)]
struct AlbumsState {
    next_id: u64,
    albums: BTreeMap<u64, Value>,
}

#[allow(dead_code)]
impl InMemoryAlbums {
    pub(crate) fn len(&self) -> usize {
        self.state.lock().unwrap().albums.len()
    }

    fn respond(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state.lock().unwrap();
        let fields: Vec<(String, String)> = request
            .body
            .as_deref()
            .map(|b| form_urlencoded::parse(b.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        let album_id = request
            .path
            .rsplit('/')
            .next()
            .and_then(|s| s.parse::<u64>().ok());

        match (request.method.as_str(), album_id) {
            ("GET", None) => {
                let data: Vec<Value> = state.albums.values().cloned().collect();
                let first = format!("{}?page=1", request.path);
                json_response(
                    200,
                    json!({
                        "total": data.len(),
                        "page": 1,
                        "per_page": 25,
                        "paging": {"next": null, "previous": null, "first": first, "last": first},
                        "data": data,
                    }),
                )
            }
            ("POST", None) => {
                state.next_id += 1;
                let id = 10_000_000 + state.next_id;
                let mut album = json!({
                    "uri": format!("{}/{}", request.path, id),
                    "name": "",
                    "description": null,
                    "privacy": {"view": "anybody"},
                    "sort": "arranged",
                });
                apply_fields(&mut album, &fields);
                state.albums.insert(id, album.clone());
                json_response(201, album)
            }
            ("GET", Some(id)) => match state.albums.get(&id) {
                Some(album) => json_response(200, album.clone()),
                None => not_found(),
            },
            ("PATCH", Some(id)) => match state.albums.get_mut(&id) {
                Some(album) => {
                    apply_fields(album, &fields);
                    json_response(200, album.clone())
                }
                None => not_found(),
            },
            ("DELETE", Some(id)) => match state.albums.remove(&id) {
                Some(_) => ApiResponse::new(204, Bytes::new()),
                None => not_found(),
            },
            _ => ApiResponse::new(405, Bytes::new()),
        }
    }
}

impl Transport for InMemoryAlbums {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, VimeoError> {
        Ok(self.respond(&request))
    }
}

fn apply_fields(album: &mut Value, fields: &[(String, String)]) {
    for (key, value) in fields {
        match key.as_str() {
            "privacy" => album["privacy"]["view"] = json!(value),
            "password" => album["privacy"]["password"] = json!(value),
            _ => album[key.as_str()] = json!(value),
        }
    }
}

fn json_response(status: u16, body: Value) -> ApiResponse {
    ApiResponse::new(status, serde_json::to_vec(&body).unwrap())
}

fn not_found() -> ApiResponse {
    json_response(
        404,
        json!({"error": "The requested album couldn't be found.", "error_code": 5000}),
    )
}
