//! HTTP client for the profile backend.
//!
//! One method per operation of the backend contract. Requests are plain
//! HTTP/JSON with no retries, timeouts, or cancellation: each call resolves
//! to exactly one terminal outcome and the caller decides whether to try
//! again. Click accounting is deliberately *not* a method here — it happens
//! through a full-page navigation to [`ApiClient::redirect_url`], never a
//! fetch, so the backend can count the click while redirecting.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::error::{ApiError, ErrorBody};
use crate::models::{CreateProfile, Profile, UpdateProfile};

/// Typed client over the backend's HTTP contract.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /api/profiles` — every profile, in backend order.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        let url = self.config.url("/api/profiles");
        debug!(%url, "listing profiles");
        let response = self.http.get(&url).send().await.map_err(map_transport)?;
        decode(response).await
    }

    /// `GET /api/profiles/{slug}` — a single profile, links sorted ascending
    /// by position so callers always see display order.
    pub async fn get_profile(&self, slug: &str) -> Result<Profile, ApiError> {
        let url = self.config.url(&format!("/api/profiles/{slug}"));
        debug!(%url, "fetching profile");
        let response = self.http.get(&url).send().await.map_err(map_transport)?;
        let mut profile: Profile = decode(response).await?;
        profile.links.sort_by_key(|l| l.position);
        Ok(profile)
    }

    /// `POST /api/profiles` — create a profile. Slug uniqueness is the
    /// backend's call; a rejection comes back as [`ApiError::Status`].
    pub async fn create_profile(&self, body: &CreateProfile) -> Result<Profile, ApiError> {
        let url = self.config.url("/api/profiles");
        debug!(%url, slug = %body.slug, "creating profile");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_transport)?;
        decode(response).await
    }

    /// `PUT /api/profiles/{slug}` — full replace of the profile's scalar
    /// fields and its entire link collection.
    pub async fn update_profile(
        &self,
        slug: &str,
        body: &UpdateProfile,
    ) -> Result<Profile, ApiError> {
        let url = self.config.url(&format!("/api/profiles/{slug}"));
        debug!(%url, "updating profile");
        let response = self
            .http
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(map_transport)?;
        decode(response).await
    }

    /// Click-accounting URL for `(slug, position)`; see [`ApiConfig::redirect_url`].
    pub fn redirect_url(&self, slug: &str, position: i32) -> String {
        self.config.redirect_url(slug, position)
    }
}

fn map_transport(err: reqwest::Error) -> ApiError {
    error!(error = %err, "request failed");
    ApiError::Network(err.to_string())
}

/// Turn a response into the expected value, or into the error the backend
/// described. Error bodies are `{"detail": "..."}` when the backend has
/// something to say.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let detail = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|b| b.detail),
        Err(_) => None,
    };
    error!(status = status.as_u16(), ?detail, "backend returned error");
    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::models::{LinkPayload, Theme};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(server.uri()))
    }

    fn profile_json(slug: &str) -> serde_json::Value {
        json!({
            "id": 1,
            "slug": slug,
            "name": "Alice",
            "bio": null,
            "avatar_url": null,
            "theme": "light",
            "links": []
        })
    }

    #[tokio::test]
    async fn list_profiles_returns_backend_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profiles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                profile_json("zed"),
                profile_json("alice"),
            ])))
            .mount(&server)
            .await;

        let profiles = client_for(&server).list_profiles().await.unwrap();
        let slugs: Vec<&str> = profiles.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["zed", "alice"]);
    }

    #[tokio::test]
    async fn get_profile_sorts_links_by_position() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profiles/alice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "slug": "alice",
                "name": "Alice",
                "bio": "hi",
                "avatar_url": null,
                "theme": "dark",
                "links": [
                    {"id": 3, "title": "third", "url": "https://c", "position": 2, "click_count": 5},
                    {"id": 1, "title": "first", "url": "https://a", "position": 0, "click_count": 0},
                    {"id": 2, "title": "second", "url": "https://b", "position": 1, "click_count": 1}
                ]
            })))
            .mount(&server)
            .await;

        let profile = client_for(&server).get_profile("alice").await.unwrap();
        assert_eq!(profile.theme, Theme::Dark);
        let titles: Vec<&str> = profile.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn error_detail_is_parsed_from_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profiles/ghost"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Profile not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).get_profile("ghost").await.unwrap_err();
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 404);
                assert_eq!(detail.as_deref(), Some("Profile not found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_without_detail_body_still_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/profiles/alice"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let body = UpdateProfile {
            name: "Alice".into(),
            bio: None,
            avatar_url: None,
            theme: Theme::Light,
            password: None,
            links: vec![],
        };
        let err = client_for(&server)
            .update_profile("alice", &body)
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 500);
                assert!(detail.is_none());
                assert_eq!(
                    ApiError::Status { status, detail }.user_message("Failed to save profile"),
                    "Failed to save profile"
                );
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_sends_null_for_blank_optionals() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/profiles"))
            .and(body_partial_json(json!({
                "slug": "alice",
                "name": "Alice",
                "bio": null,
                "avatar_url": null,
                "password": null,
                "theme": "light",
                "links": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("alice")))
            .mount(&server)
            .await;

        let body = CreateProfile {
            slug: "alice".into(),
            name: "Alice".into(),
            bio: None,
            avatar_url: None,
            theme: Theme::Light,
            password: None,
            links: vec![],
        };
        let created = client_for(&server).create_profile(&body).await.unwrap();
        assert_eq!(created.slug, "alice");
    }

    #[tokio::test]
    async fn update_resends_the_entire_link_collection() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/profiles/alice"))
            .and(body_partial_json(json!({
                "links": [
                    {"title": "Blog", "url": "https://blog.example", "position": 0},
                    {"title": "Shop", "url": "https://shop.example", "position": 1}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("alice")))
            .mount(&server)
            .await;

        let body = UpdateProfile {
            name: "Alice".into(),
            bio: Some("hi".into()),
            avatar_url: None,
            theme: Theme::Dark,
            password: None,
            links: vec![
                LinkPayload {
                    title: "Blog".into(),
                    url: "https://blog.example".into(),
                    position: 0,
                },
                LinkPayload {
                    title: "Shop".into(),
                    url: "https://shop.example".into(),
                    position: 1,
                },
            ],
        };
        let updated = client_for(&server).update_profile("alice", &body).await;
        assert!(updated.is_ok());
    }
}
