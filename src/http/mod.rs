pub mod client;

pub use client::Client;

use crate::error::{Error, Result};
use serde_json::Value;

pub trait ResponseHandler {
    /// Turns a response into its JSON body, or an `Error::Api` for any
    /// status outside 2xx.
    async fn handle(self) -> Result<Value>;
}

impl ResponseHandler for reqwest::Response {
    async fn handle(self) -> Result<Value> {
        let status = self.status().as_u16();
        let text = self.text().await?;

        if !(200..300).contains(&status) {
            let message =
                error_message(&text).unwrap_or_else(|| format!("Unknown Error {}", status));
            return Err(Error::Api { status, message });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Extracts `errors[0].message` from an error body.
pub fn error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;

    value
        .pointer("/errors/0/message")?
        .as_str()
        .map(str::to_owned)
}
