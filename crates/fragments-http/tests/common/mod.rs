//! In-memory fragments service for stateful client tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use fragments_core::{AccessToken, ApiUrl, IdToken, Session};
use serde_json::{Value, json};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const GOOD_TOKEN: &str = "good-id-token";
pub const OWNER: &str = "11d4c22e42c8f61feaba154683dea407b101cfd90987dda9e342843263ca420a";
const CREATED: &str = "2024-03-01T10:00:00.000Z";
const UPDATED: &str = "2024-03-02T12:30:00.000Z";

struct Stored {
    media_type: String,
    data: Vec<u8>,
    updated: &'static str,
}

/// Responds like a fragments server holding one user's fragments.
#[derive(Default)]
pub struct FakeFragments {
    fragments: Mutex<BTreeMap<String, Stored>>,
    next_id: AtomicU64,
}

impl FakeFragments {
    fn metadata(id: &str, stored: &Stored) -> Value {
        json!({
            "id": id,
            "ownerId": OWNER,
            "created": CREATED,
            "updated": stored.updated,
            "type": stored.media_type,
            "size": stored.data.len(),
        })
    }

    fn error(code: u16, message: &str) -> ResponseTemplate {
        ResponseTemplate::new(code).set_body_json(json!({
            "status": "error",
            "error": { "code": code, "message": message }
        }))
    }

    fn content_type(request: &Request) -> Option<String> {
        request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

impl Respond for FakeFragments {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let authorized = request
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some(format!("Bearer {}", GOOD_TOKEN).as_str());
        if !authorized {
            return Self::error(401, "unauthorized");
        }

        let segments: Vec<String> = request
            .url
            .path_segments()
            .map(|s| s.map(str::to_string).collect())
            .unwrap_or_default();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        let mut fragments = self.fragments.lock().unwrap();

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", ["v1", "fragments"]) => {
                let expand = request
                    .url
                    .query_pairs()
                    .any(|(k, v)| k == "expand" && v == "1");
                let list: Vec<Value> = fragments
                    .iter()
                    .map(|(id, stored)| {
                        if expand {
                            Self::metadata(id, stored)
                        } else {
                            json!(id)
                        }
                    })
                    .collect();
                ResponseTemplate::new(200).set_body_json(json!({
                    "status": "ok",
                    "fragments": list
                }))
            }
            ("POST", ["v1", "fragments"]) => {
                let Some(media_type) = Self::content_type(request) else {
                    return Self::error(415, "missing content type");
                };
                let id = format!("frag-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
                let stored = Stored {
                    media_type,
                    data: request.body.clone(),
                    updated: CREATED,
                };
                let body = json!({ "status": "ok", "fragment": Self::metadata(&id, &stored) });
                fragments.insert(id.clone(), stored);
                ResponseTemplate::new(201)
                    .insert_header(
                        "location",
                        format!(
                            "{}/v1/fragments/{}",
                            request.url.origin().ascii_serialization(),
                            id
                        ),
                    )
                    .set_body_json(body)
            }
            ("GET", ["v1", "fragments", id, "info"]) => match fragments.get(*id) {
                Some(stored) => ResponseTemplate::new(200).set_body_json(json!({
                    "status": "ok",
                    "fragment": Self::metadata(id, stored)
                })),
                None => Self::error(404, "fragment not found"),
            },
            ("GET", ["v1", "fragments", id]) => match fragments.get(*id) {
                Some(stored) => ResponseTemplate::new(200)
                    .set_body_raw(stored.data.clone(), &stored.media_type),
                None => Self::error(404, "fragment not found"),
            },
            ("PUT", ["v1", "fragments", id]) => {
                let media_type = Self::content_type(request);
                match fragments.get_mut(*id) {
                    Some(stored) => {
                        if let Some(media_type) = media_type
                            && media_type != stored.media_type
                        {
                            return Self::error(400, "fragment type cannot change");
                        }
                        stored.data = request.body.clone();
                        stored.updated = UPDATED;
                        ResponseTemplate::new(200).set_body_json(json!({
                            "status": "ok",
                            "fragment": Self::metadata(id, stored)
                        }))
                    }
                    None => Self::error(404, "fragment not found"),
                }
            }
            ("DELETE", ["v1", "fragments", id]) => match fragments.remove(*id) {
                Some(_) => ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })),
                None => Self::error(404, "fragment not found"),
            },
            _ => Self::error(404, "not found"),
        }
    }
}

/// Start a mock server backed by an empty [`FakeFragments`].
pub async fn start_fake() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(path_regex("^/v1/fragments"))
        .respond_with(FakeFragments::default())
        .mount(&server)
        .await;
    server
}

/// API URL of a mock server.
pub fn api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(server.uri()).unwrap()
}

/// A session carrying the given identity token.
pub fn session_with(id_token: &str) -> Session {
    Session::new("alice", IdToken::new(id_token), AccessToken::new("access-token"))
}

/// A session the fake accepts.
pub fn session() -> Session {
    session_with(GOOD_TOKEN)
}
