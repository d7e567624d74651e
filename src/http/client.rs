use super::ResponseHandler;
use crate::error::Result;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Serialize;
use serde_json::Value;

const USER_AGENT_VALUE: &str = "open-pr";

#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Client {
        Client(reqwest::Client::new())
    }

    /// Single POST with a JSON body and bearer auth. No retries.
    pub async fn post_json<T>(&self, url: &str, token: &str, body: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .0
            .post(url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .json(body)
            .send()
            .await?;

        response.handle().await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn should_post_json_with_bearer_token() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/items")
            .match_header("authorization", "Bearer token")
            .match_header("content-type", "application/json")
            .match_header("user-agent", "open-pr")
            .match_body(Matcher::Json(json!({ "name": "value" })))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let url = format!("{}/items", server.url());
        let response = Client::new()
            .post_json(&url, "token", &json!({ "name": "value" }))
            .await?;

        mock.assert_async().await;
        assert_eq!(response, json!({ "ok": true }));
        Ok(())
    }

    #[tokio::test]
    async fn should_report_status_without_error_body() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/items")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let url = format!("{}/items", server.url());
        let result = Client::new().post_json(&url, "token", &json!({})).await;

        match result {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Unknown Error 500");
            }
            other => panic!("expected api error, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn should_accept_empty_success_body() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/items")
            .with_status(204)
            .create_async()
            .await;

        let url = format!("{}/items", server.url());
        let response = Client::new().post_json(&url, "token", &json!({})).await?;

        assert_eq!(response, Value::Null);
        Ok(())
    }

    #[tokio::test]
    async fn should_reject_non_json_success_body() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/items")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let url = format!("{}/items", server.url());
        let result = Client::new().post_json(&url, "token", &json!({})).await;

        assert!(matches!(result, Err(Error::InvalidResponse(_))));
        Ok(())
    }
}
