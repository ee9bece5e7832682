use tracing::{debug, instrument, warn};

use crate::{
    employees::{
        model::{Employee, FetchOptions},
        source::{Page, Query},
    },
    error::{Error, Result, UpstreamError},
    http,
};

/// Provides methods to fetch employees from the random-user API.
///
/// Nothing is cached: every call goes upstream and returns a fresh batch.
/// Without a seed, two calls return different people.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
    defaults: FetchOptions,
}

impl Client {
    pub(crate) fn new(http_client: http::Client, defaults: FetchOptions) -> Self {
        Self {
            http_client,
            defaults,
        }
    }

    /// The options used by [`Client::fetch`].
    pub fn defaults(&self) -> &FetchOptions {
        &self.defaults
    }

    /// Fetch a batch of employees using the configured options.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<Employee>> {
        self.fetch_with(&self.defaults).await
    }

    /// Fetch a batch of employees, overriding the configured options for
    /// this call only.
    #[instrument(skip(self))]
    pub async fn fetch_with(&self, opts: &FetchOptions) -> Result<Vec<Employee>> {
        opts.validate()?;

        let page = self.fetch_page(opts).await.map_err(|e| {
            warn!(error = %e, "failed to fetch employees");
            e
        })?;

        let employees: Vec<Employee> = page.results.into_iter().map(Employee::from).collect();
        debug!(count = employees.len(), "fetched employees");
        Ok(employees)
    }

    async fn fetch_page(&self, opts: &FetchOptions) -> Result<Page> {
        let mut page: Page = self
            .http_client
            .get("", &Query::from(opts))
            .await?
            .json()
            .await?;

        if let Some(message) = page.error.take() {
            return Err(Error::Upstream(UpstreamError::new(
                200,
                ::http::Method::GET,
                self.http_client.base_url().path().to_string(),
                Some(message),
            )));
        }

        Ok(page)
    }
}
