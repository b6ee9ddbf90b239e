use eyre::{Result, WrapErr};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use types::{Book, ListEnvelope, User};
use url::Url;

use crate::config::Config;

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?.error_for_status()?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::debug!(?error, bytes = body.len(), "failed to parse response");
            error.into()
        })
    }
}

/// Client for the fake-record API.
#[derive(Clone)]
pub struct FakerClient {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl FakerClient {
    pub fn new(mut base_url: Url, token: Option<SecretString>) -> Self {
        // `Url::join` drops the last path segment unless it ends in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone(), config.api_token.clone())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .wrap_err_with(|| format!("invalid endpoint path: {path}"))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let request = self
            .client
            .request(method, self.endpoint(path)?)
            .header(CONTENT_TYPE, "application/json");

        Ok(match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        })
    }

    fn get(&self, path: impl AsRef<str>) -> Result<RequestBuilder> {
        self.request(Method::GET, path.as_ref())
    }

    pub async fn list_users(&self, quantity: u32) -> Result<ListEnvelope<User>> {
        self.get(format!("users?_quantity={quantity}"))?
            .try_send()
            .await
            .wrap_err("failed to list users")
    }

    pub async fn list_books(&self, quantity: u32) -> Result<ListEnvelope<Book>> {
        self.get(format!("books?_quantity={quantity}"))?
            .try_send()
            .await
            .wrap_err("failed to list books")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> FakerClient {
        FakerClient::new(Url::parse(base).unwrap(), None)
    }

    #[test]
    fn joins_onto_base_path() {
        let url = client("https://fakerapi.it/api/v2/")
            .endpoint("users?_quantity=50")
            .unwrap();

        assert_eq!(url.as_str(), "https://fakerapi.it/api/v2/users?_quantity=50");
    }

    #[test]
    fn base_without_trailing_slash_keeps_last_segment() {
        let url = client("http://localhost:8080/api/v2")
            .endpoint("books?_quantity=5")
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/api/v2/books?_quantity=5");
    }

    #[test]
    fn request_carries_json_content_type_and_token() {
        let client = FakerClient::new(
            Url::parse("https://fakerapi.it/api/v2/").unwrap(),
            Some("abc123".to_string().into()),
        );
        let request = client.get("users").unwrap().build().unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()["authorization"], "Bearer abc123");
    }

    #[test]
    fn anonymous_request_has_no_authorization() {
        let request = client("https://fakerapi.it/api/v2/")
            .get("users")
            .unwrap()
            .build()
            .unwrap();

        assert!(request.headers().get("authorization").is_none());
    }
}
