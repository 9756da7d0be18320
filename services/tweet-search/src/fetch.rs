//! Background fetch: token then search, off the foreground task
//!
//! Both calls run sequentially inside one spawned task. The outcome is handed
//! back over a oneshot channel so the foreground only renders.

use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use twitter_client::{Post, TwitterClient};

use crate::config::Credentials;

/// Acquire a token and search around the given point.
///
/// An empty token is not treated as an error here: the search still runs and
/// the endpoint's rejection surfaces as an empty list.
pub async fn fetch_posts(
    client: &TwitterClient,
    credentials: &Credentials,
    latitude: f64,
    longitude: f64,
) -> twitter_client::Result<Vec<Post>> {
    let token = client
        .acquire_token(
            credentials.api_key.expose(),
            credentials.api_secret.expose(),
        )
        .await?;
    if token.is_empty() {
        warn!("token endpoint returned no token, search will likely return nothing");
    }

    let posts = client
        .search_by_location(&token, latitude, longitude)
        .await?;
    info!(count = posts.len(), latitude, longitude, "fetched posts");
    Ok(posts)
}

/// Spawn `fetch_posts` on the runtime and return a receiver for its outcome.
pub fn spawn_fetch(
    client: TwitterClient,
    credentials: Credentials,
    latitude: f64,
    longitude: f64,
) -> oneshot::Receiver<twitter_client::Result<Vec<Post>>> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = fetch_posts(&client, &credentials, latitude, longitude).await;
        if tx.send(outcome).is_err() {
            debug!("fetch result dropped, receiver gone");
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Secret;
    use twitter_client::ClientConfig;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials {
            api_key: Secret::new("key".into()),
            api_secret: Secret::new("secret".into()),
        }
    }

    fn client_for(base_url: String) -> TwitterClient {
        TwitterClient::with_config(ClientConfig {
            base_url,
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn spawned_fetch_delivers_posts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"access_token":"T1"}"#),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/1.1/search/tweets.json"))
            .and(header("authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"statuses":[{"text":"hi","user":{"name":"A","screen_name":"a","profile_image_url_https":"https://x"}}]}"#,
            ))
            .mount(&server)
            .await;

        let rx = spawn_fetch(client_for(server.uri()), credentials(), 38.9, -77.05);
        let posts = rx.await.unwrap().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, "A");
    }

    #[tokio::test]
    async fn rejected_credentials_yield_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/1.1/search/tweets.json"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let posts = fetch_posts(&client_for(server.uri()), &credentials(), 0.0, 0.0)
            .await
            .unwrap();
        assert!(posts.is_empty(), "soft failures must not become errors");
    }

    #[tokio::test]
    async fn malformed_token_response_stops_before_search() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/1.1/search/tweets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"statuses":[]}"#))
            .expect(0)
            .mount(&server)
            .await;

        let result = fetch_posts(&client_for(server.uri()), &credentials(), 0.0, 0.0).await;
        assert!(matches!(
            result,
            Err(twitter_client::Error::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let rx = spawn_fetch(
            client_for(format!("http://{addr}")),
            credentials(),
            0.0,
            0.0,
        );
        let result = rx.await.unwrap();
        assert!(matches!(result, Err(twitter_client::Error::Transport(_))));
    }
}
