//! REST client for the character, location and episode endpoints.
//!
//! HTTP itself sits behind [`Transport`] so the same client runs on reqwest
//! natively and on the browser's fetch in the WASM front end.

use std::future::Future;

use serde_json::Value;
use tracing::{debug, warn};

pub use url::Url;

use crate::error::ApiError;
use crate::filters::FilterState;
use crate::types::{Character, Episode, Location, Page};
use crate::view::ModalView;

/// Shown when a character's last episode can't be resolved.
pub const NO_LAST_SEEN: &str = "N/A";

/// GET a URL and return its JSON body.
///
/// Implementations map a 404 to [`ApiError::NotFound`] and any other non-2xx
/// status to [`ApiError::Status`].
pub trait Transport {
    fn get_json(&self, url: &Url) -> impl Future<Output = Result<Value, ApiError>>;
}

// ── Native transport ──

#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    pub fn new(config: &crate::config::Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(std::time::Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self { client })
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, ApiError> {
        debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.json::<Value>().await?)
    }
}

// ── Client ──

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base: Url,
    pub(crate) transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Result<Self, ApiError> {
        // `Url::join` replaces the last segment unless the base ends in '/'.
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self { base, transport })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    /// Fetch one page of characters matching `filters`.
    ///
    /// A location name is first resolved to its canonical URL (first match
    /// only). When nothing matches, location filtering is dropped from the
    /// query. A query that matches no characters yields an empty list.
    pub async fn get_characters(&self, filters: &FilterState) -> Result<Vec<Character>, ApiError> {
        let location_url = if filters.location.is_empty() {
            None
        } else {
            self.resolve_location(&filters.location).await?
        };

        let mut url = self.endpoint("character")?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in filters.query_pairs() {
                query.append_pair(key, value);
            }
            if let Some(location) = &location_url {
                query.append_pair("location", location);
            }
            query.append_pair("page", &filters.page.to_string());
        }

        match self.transport.get_json(&url).await {
            Ok(body) => {
                let page: Page<Character> = serde_json::from_value(body)?;
                debug!(count = page.results.len(), page = filters.page, "characters fetched");
                Ok(page.results)
            }
            Err(e) if e.is_not_found() => {
                debug!(%url, "no characters match");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Canonical URL of the first location named like `name`, if any.
    async fn resolve_location(&self, name: &str) -> Result<Option<String>, ApiError> {
        let mut url = self.endpoint("location")?;
        url.query_pairs_mut().append_pair("name", name);

        let body = match self.transport.get_json(&url).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };
        let page: Page<Location> = serde_json::from_value(body)?;
        let resolved = page.results.into_iter().next().map(|l| l.url);
        if resolved.is_none() {
            debug!(location = name, "location lookup matched nothing; dropping filter");
        }
        Ok(resolved)
    }

    /// Names on the first page of the location list. Does not paginate.
    pub async fn get_locations(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("location")?;
        let body = self.transport.get_json(&url).await?;
        let page: Page<Location> = serde_json::from_value(body)?;
        Ok(page.results.into_iter().map(|l| l.name).collect())
    }

    /// Air date of the character's last listed episode, or `"N/A"`.
    pub async fn get_last_seen(&self, character: &Character) -> String {
        let Some(last_episode) = character.last_episode() else {
            return NO_LAST_SEEN.to_string();
        };

        match self.fetch_air_date(last_episode).await {
            Ok(Some(air_date)) => air_date,
            Ok(None) => {
                warn!(episode = last_episode, "episode has no air_date");
                NO_LAST_SEEN.to_string()
            }
            Err(e) => {
                warn!(episode = last_episode, error = %e, "failed to fetch last seen");
                NO_LAST_SEEN.to_string()
            }
        }
    }

    async fn fetch_air_date(&self, episode_url: &str) -> Result<Option<String>, ApiError> {
        let url = Url::parse(episode_url)?;
        let body = self.transport.get_json(&url).await?;
        let episode: Episode = serde_json::from_value(body)?;
        Ok(episode.air_date)
    }

    /// Everything the detail modal shows, including the last-seen lookup.
    pub async fn character_details(&self, character: &Character) -> ModalView {
        let last_seen = self.get_last_seen(character).await;
        ModalView::new(character, last_seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::filters::FilterField;
    use crate::testing::{character_json, client, page, Reply, StubTransport, BASE};

    #[tokio::test]
    async fn test_status_only_query() {
        let url = format!("{BASE}/character?status=Alive&page=1");
        let stub = StubTransport::default().reply(
            &url,
            Reply::Json(page(vec![character_json(1, "Rick Sanchez", &[])])),
        );
        let api = client(stub);

        let mut filters = FilterState::default();
        filters.set(FilterField::Status, "Alive");
        let characters = api.get_characters(&filters).await.unwrap();

        assert_eq!(characters.len(), 1);
        let calls = api.transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path(), "/api/character");
        assert_eq!(calls[0].query(), Some("status=Alive&page=1"));
    }

    #[tokio::test]
    async fn test_unmatched_location_is_dropped() {
        let stub = StubTransport::default()
            .reply(&format!("{BASE}/location?name=Nowhere"), Reply::NotFound)
            .reply(
                &format!("{BASE}/character?page=2"),
                Reply::Json(page(vec![])),
            );
        let api = client(stub);

        let mut filters = FilterState::default();
        filters.set(FilterField::Location, "Nowhere");
        filters.next_page();
        api.get_characters(&filters).await.unwrap();

        let calls = api.transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].query(), Some("page=2"));
        assert!(!calls[1].query_pairs().any(|(k, _)| k == "location"));
    }

    #[tokio::test]
    async fn test_empty_location_results_are_dropped() {
        let stub = StubTransport::default()
            .reply(&format!("{BASE}/location?name=Nowhere"), Reply::Json(page(vec![])))
            .reply(&format!("{BASE}/character?page=1"), Reply::Json(page(vec![])));
        let api = client(stub);

        let mut filters = FilterState::default();
        filters.set(FilterField::Location, "Nowhere");
        api.get_characters(&filters).await.unwrap();

        assert_eq!(api.transport.calls()[1].query(), Some("page=1"));
    }

    #[tokio::test]
    async fn test_location_resolves_to_first_match_url() {
        let locations = page(vec![
            json!({"id": 1, "name": "Earth (C-137)", "type": "Planet", "dimension": "C-137", "url": format!("{BASE}/location/1")}),
            json!({"id": 20, "name": "Earth (Replacement Dimension)", "type": "Planet", "dimension": "Replacement", "url": format!("{BASE}/location/20")}),
        ]);
        let stub = StubTransport::default()
            .reply(&format!("{BASE}/location?name=Earth"), Reply::Json(locations));
        let api = client(stub);

        let mut filters = FilterState::default();
        filters.set(FilterField::Name, "rick sanchez");
        filters.set(FilterField::Location, "Earth");
        // Character URL isn't stubbed: the 404 comes back as an empty list.
        let characters = api.get_characters(&filters).await.unwrap();
        assert!(characters.is_empty());

        let calls = api.transport.calls();
        let pairs: Vec<(String, String)> = calls[1]
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), "rick sanchez".to_string()),
                ("location".to_string(), format!("{BASE}/location/1")),
                ("page".to_string(), "1".to_string()),
            ]
        );
        assert!(calls[1].as_str().contains("name=rick+sanchez"));
    }

    #[tokio::test]
    async fn test_character_fetch_failure_propagates() {
        let stub = StubTransport::default().reply(&format!("{BASE}/character?page=1"), Reply::Fail);
        let api = client(stub);

        let result = api.get_characters(&FilterState::default()).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_get_locations_first_page_names() {
        let locations = page(vec![
            json!({"id": 1, "name": "Earth (C-137)", "url": format!("{BASE}/location/1")}),
            json!({"id": 2, "name": "Abadango", "url": format!("{BASE}/location/2")}),
        ]);
        let stub = StubTransport::default().reply(&format!("{BASE}/location"), Reply::Json(locations));
        let api = client(stub);

        assert_eq!(
            api.get_locations().await.unwrap(),
            vec!["Earth (C-137)", "Abadango"]
        );
        assert_eq!(api.transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_last_seen_empty_episode_list() {
        let api = client(StubTransport::default());
        let character: Character =
            serde_json::from_value(character_json(5, "Jerry Smith", &[])).unwrap();

        assert_eq!(api.get_last_seen(&character).await, NO_LAST_SEEN);
        assert!(api.transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_last_seen_uses_last_episode() {
        let first = format!("{BASE}/episode/1");
        let last = format!("{BASE}/episode/51");
        let stub = StubTransport::default().reply(
            &last,
            Reply::Json(json!({"id": 51, "name": "Rickmurai Jack", "air_date": "September 5, 2021", "episode": "S05E10"})),
        );
        let api = client(stub);
        let character: Character =
            serde_json::from_value(character_json(1, "Rick Sanchez", &[first.as_str(), last.as_str()])).unwrap();

        assert_eq!(api.get_last_seen(&character).await, "September 5, 2021");
    }

    #[tokio::test]
    async fn test_last_seen_falls_back_on_failure() {
        let last = format!("{BASE}/episode/3");
        let stub = StubTransport::default().reply(&last, Reply::Fail);
        let api = client(stub);
        let character: Character =
            serde_json::from_value(character_json(2, "Morty Smith", &[last.as_str()])).unwrap();

        assert_eq!(api.get_last_seen(&character).await, NO_LAST_SEEN);
    }

    #[tokio::test]
    async fn test_character_details_builds_modal() {
        let api = client(StubTransport::default());
        let character: Character =
            serde_json::from_value(character_json(3, "Summer Smith", &["not a url"])).unwrap();

        let modal = api.character_details(&character).await;
        assert_eq!(modal.name, "Summer Smith");
        assert_eq!(modal.last_seen, NO_LAST_SEEN);
        assert_eq!(modal.episodes, vec!["not a url"]);
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let api = client(StubTransport::default());
        assert_eq!(
            api.endpoint("character").unwrap().as_str(),
            "https://rickandmortyapi.com/api/character"
        );
    }
}
