//! Test fixtures: a recording transport and canned API payloads.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::api::{ApiClient, Transport, Url};
use crate::error::ApiError;

pub(crate) const BASE: &str = "https://rickandmortyapi.com/api";

pub(crate) enum Reply {
    Json(Value),
    NotFound,
    Fail,
}

/// Canned responses keyed by full URL; records every request.
#[derive(Default)]
pub(crate) struct StubTransport {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<Url>>,
}

impl StubTransport {
    pub(crate) fn reply(mut self, url: &str, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(url.clone());
        match self.replies.get(url.as_str()) {
            Some(Reply::Json(v)) => Ok(v.clone()),
            Some(Reply::NotFound) | None => Err(ApiError::NotFound {
                url: url.to_string(),
            }),
            Some(Reply::Fail) => Err(ApiError::Transport("connection reset".into())),
        }
    }
}

pub(crate) fn character_json(id: u32, name: &str, episodes: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {"name": "Earth (C-137)", "url": ""},
        "location": {"name": "Earth (Replacement Dimension)", "url": ""},
        "image": format!("{BASE}/character/avatar/{id}.jpeg"),
        "episode": episodes,
        "url": format!("{BASE}/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub(crate) fn page(results: Vec<Value>) -> Value {
    json!({
        "info": {"count": results.len(), "pages": 1, "next": null, "prev": null},
        "results": results
    })
}

pub(crate) fn client(stub: StubTransport) -> ApiClient<StubTransport> {
    ApiClient::new(BASE, stub).unwrap()
}
