//! # Wire-format models for the profile backend
//!
//! Defines the JSON shapes exchanged with the backend over the HTTP contract:
//! fetched entities ([`Profile`], [`Link`]) and outbound request bodies
//! ([`CreateProfile`], [`UpdateProfile`], [`LinkPayload`]).
//!
//! Two rules the backend contract imposes on these types:
//!
//! - Optional scalars (`bio`, `avatar_url`, `password`) are `Option<String>`
//!   and must serialize as `null` when absent, never as `""`. The form layer
//!   is responsible for mapping blank inputs to `None` before building a
//!   payload.
//! - `id` and `click_count` are server-owned. They appear only on fetched
//!   entities and are never sent back; [`LinkPayload`] carries just
//!   `{title, url, position}`.

use serde::{Deserialize, Serialize};

/// Visual theme of a profile page. Crosses the wire as `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// String form matching the wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// A persisted link as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Server-assigned identifier. Opaque to the client; only used as a
    /// display key after a fetch.
    pub id: i64,
    pub title: String,
    pub url: String,
    /// Zero-based rank defining display and redirect-addressing order.
    pub position: i32,
    /// Maintained by the backend's click accounting, read-only here.
    #[serde(default)]
    pub click_count: i64,
}

/// A public profile with its ordered link collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    /// Unique routing key, immutable after creation.
    pub slug: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Profile {
    /// Links in display order: ascending by `position`.
    pub fn sorted_links(&self) -> Vec<Link> {
        let mut links = self.links.clone();
        links.sort_by_key(|l| l.position);
        links
    }
}

/// Outbound link entry for create/update bodies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkPayload {
    pub title: String,
    pub url: String,
    pub position: i32,
}

/// Body of `POST /api/profiles`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateProfile {
    pub slug: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub theme: Theme,
    /// Write-only: presence toggles protection, never read back.
    pub password: Option<String>,
    pub links: Vec<LinkPayload>,
}

/// Body of `PUT /api/profiles/{slug}`. Replaces the profile's scalar fields
/// and the entire link collection; there is no partial update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub theme: Theme,
    pub password: Option<String>,
    pub links: Vec<LinkPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let t: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(t, Theme::Dark);
    }

    #[test]
    fn profile_defaults_for_missing_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"id":1,"slug":"alice","name":"Alice","bio":null,"avatar_url":null}"#,
        )
        .unwrap();
        assert_eq!(profile.theme, Theme::Light);
        assert!(profile.links.is_empty());
    }

    #[test]
    fn sorted_links_orders_by_position() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "id": 1, "slug": "a", "name": "A", "bio": null, "avatar_url": null,
                "theme": "light",
                "links": [
                    {"id": 10, "title": "c", "url": "u", "position": 2, "click_count": 0},
                    {"id": 11, "title": "a", "url": "u", "position": 0, "click_count": 0},
                    {"id": 12, "title": "b", "url": "u", "position": 1, "click_count": 0}
                ]
            }"#,
        )
        .unwrap();
        let sorted = profile.sorted_links();
        let positions: Vec<i32> = sorted.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(sorted[0].title, "a");
    }

    #[test]
    fn optional_scalars_serialize_as_null() {
        let body = UpdateProfile {
            name: "Alice".into(),
            bio: None,
            avatar_url: None,
            theme: Theme::Light,
            password: None,
            links: vec![],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["bio"], serde_json::Value::Null);
        assert_eq!(json["password"], serde_json::Value::Null);
        assert_eq!(json["links"], serde_json::json!([]));
    }
}
