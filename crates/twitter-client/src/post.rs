//! Search response mapping
//!
//! The search endpoint returns `{"statuses": [...]}`. Each status carries the
//! post text and a nested `user` object. Every field below is required: one
//! bad entry fails the whole response, so callers never see a partial list.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single search result, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Display name of the author
    pub author: String,
    /// Screen name, as returned by the API
    pub handle: String,
    pub body: String,
    /// HTTPS profile image URL
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    statuses: Vec<Status>,
}

#[derive(Debug, Deserialize)]
struct Status {
    text: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct User {
    name: String,
    screen_name: String,
    profile_image_url_https: String,
}

impl From<Status> for Post {
    fn from(status: Status) -> Self {
        Self {
            author: status.user.name,
            handle: status.user.screen_name,
            body: status.text,
            avatar_url: status.user.profile_image_url_https,
        }
    }
}

/// Parse a search response body into posts, preserving API order.
pub fn parse_search_response(body: &str) -> Result<Vec<Post>> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("invalid search response: {e}")))?;
    Ok(response.statuses.into_iter().map(Post::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_fields_onto_post() {
        let body = r#"{"statuses":[{"text":"hi","user":{"name":"A","screen_name":"@a","profile_image_url_https":"http://x"}}]}"#;
        let posts = parse_search_response(body).unwrap();
        assert_eq!(
            posts,
            vec![Post {
                author: "A".into(),
                handle: "@a".into(),
                body: "hi".into(),
                avatar_url: "http://x".into(),
            }]
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{
            "statuses": [{
                "id": 1,
                "text": "hello",
                "lang": "en",
                "user": {
                    "id": 2,
                    "name": "Nick",
                    "screen_name": "nick",
                    "profile_image_url": "http://img",
                    "profile_image_url_https": "https://img"
                }
            }],
            "search_metadata": {"count": 15}
        }"#;
        let posts = parse_search_response(body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].avatar_url, "https://img");
    }

    #[test]
    fn empty_statuses_is_empty_list() {
        let posts = parse_search_response(r#"{"statuses":[]}"#).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn missing_statuses_is_malformed() {
        let result = parse_search_response("{}");
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn missing_nested_field_fails_whole_response() {
        let body = r#"{"statuses":[
            {"text":"ok","user":{"name":"A","screen_name":"a","profile_image_url_https":"https://a"}},
            {"text":"bad","user":{"name":"B","screen_name":"b"}}
        ]}"#;
        let result = parse_search_response(body);
        assert!(
            matches!(result, Err(Error::MalformedResponse(ref msg)) if msg.contains("profile_image_url_https")),
            "missing avatar must fail the whole call, got: {result:?}"
        );
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let entry = |text: &str| {
            format!(
                r#"{{"text":"{text}","user":{{"name":"n","screen_name":"s","profile_image_url_https":"u"}}}}"#
            )
        };
        let body = format!(
            r#"{{"statuses":[{},{},{}]}}"#,
            entry("first"),
            entry("second"),
            entry("first")
        );
        let bodies: Vec<String> = parse_search_response(&body)
            .unwrap()
            .into_iter()
            .map(|p| p.body)
            .collect();
        assert_eq!(bodies, vec!["first", "second", "first"]);
    }
}
