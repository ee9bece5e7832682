use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result, UpstreamError};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Client is a wrapper around `reqwest::Client` which provides automatically
/// prepending the base url.
#[derive(Debug, Clone)]
pub(crate) struct Client {
    base_url: Url,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a new client.
    pub(crate) fn new<U>(base_url: U, timeout: Duration) -> Result<Self>
    where
        U: AsRef<str>,
    {
        let base_url = Url::parse(base_url.as_ref()).map_err(Error::InvalidUrl)?;

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(Error::HttpClientSetup)?;

        Ok(Self {
            base_url,
            inner: http_client,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a single GET request. There is no retry: a failed request is
    /// reported to the caller as is.
    pub(crate) async fn get<S, Q>(&self, path: S, query: &Q) -> Result<Response>
    where
        S: AsRef<str>,
        Q: Serialize,
    {
        let mut url = self
            .base_url
            .join(path.as_ref().trim_start_matches('/'))
            .map_err(Error::InvalidUrl)?;
        let query_string = serde_qs::to_string(query)?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }

        let res = self
            .inner
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Http)?;

        Ok(Response::new(res, http::Method::GET, url.path().to_string()))
    }
}

#[derive(Debug)]
pub(crate) struct Response {
    inner: reqwest::Response,
    method: http::Method,
    path: String,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response, method: http::Method, path: String) -> Self {
        Self {
            inner,
            method,
            path,
        }
    }

    pub(crate) async fn json<T: DeserializeOwned>(self) -> Result<T> {
        self.check_error()
            .await?
            .inner
            .json::<T>()
            .await
            .map_err(Error::Deserialize)
    }

    pub(crate) async fn check_error(self) -> Result<Response> {
        let status = self.inner.status();
        if !status.is_success() {
            // Try to decode the error
            let e = match self.inner.json::<UpstreamError>().await {
                Ok(mut e) => {
                    e.status = status.as_u16();
                    e.method = self.method;
                    e.path = self.path;
                    e
                }
                // Decoding failed, we still want an UpstreamError
                Err(_e) => UpstreamError::new(status.as_u16(), self.method, self.path, None),
            };
            return Err(Error::Upstream(e));
        }

        Ok(self)
    }
}
