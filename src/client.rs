//! The top-level client of the employee directory.
use std::{env, time::Duration};

use crate::{
    employees::{self, FetchOptions, DEFAULT_RESULTS, MAX_RESULTS},
    error::{Error, Result},
    http, notes,
};

/// The public random-user API.
static RANDOM_USER_URL: &str = "https://randomuser.me/api/";

/// How long a request to the random-user API may take.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The client is the entrypoint of the whole crate. It bundles the
/// employee source with the notes store, which is what an API layer hands
/// out to its request handlers.
///
/// You can create it using [`Client::builder`] or [`Client::new`].
///
/// # Examples
/// ```
/// use staffdir::{Client, Error};
///
/// fn main() -> Result<(), Error> {
///     // Create a new client and read the configuration from the
///     // environment variables STAFFDIR_URL, STAFFDIR_RESULTS, STAFFDIR_SEED
///     // and STAFFDIR_NAT.
///     let client = Client::new()?;
///
///     // Set all available options. Unset options fall back to environment
///     // variables.
///     let client = Client::builder()
///         .with_results(10)
///         .with_seed("abc")
///         .with_nationalities(["gb", "us"])
///         .build()?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    employees: employees::Client,
    notes: notes::Store,
}

impl Client {
    /// Creates a new client. If you want to configure it, use [`Client::builder`].
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client using a builder.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Get the url of the random-user API (cloned).
    pub fn url(&self) -> String {
        self.url.clone()
    }

    /// Fetch employees.
    pub fn employees(&self) -> &employees::Client {
        &self.employees
    }

    /// Read and add notes.
    pub fn notes(&self) -> &notes::Store {
        &self.notes
    }
}

/// This builder is used to create a new client.
pub struct Builder {
    env_fallback: bool,
    url: Option<String>,
    results: Option<u32>,
    seed: Option<String>,
    nationalities: Option<Vec<String>>,
    timeout: Duration,
    notes: Option<notes::Store>,
}

impl Builder {
    /// Create a new builder.
    fn new() -> Self {
        Self {
            env_fallback: true,
            url: None,
            results: None,
            seed: None,
            nationalities: None,
            timeout: DEFAULT_TIMEOUT,
            notes: None,
        }
    }

    /// Don't fall back to environment variables.
    pub fn no_env(mut self) -> Self {
        self.env_fallback = false;
        self
    }

    /// Set the URL of the random-user API. If this is not set, the URL will
    /// be read from the environment variable `STAFFDIR_URL`, falling back to
    /// the public API.
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set how many employees are fetched. If this is not set, it will be
    /// read from the environment variable `STAFFDIR_RESULTS`, falling back
    /// to 50.
    pub fn with_results(mut self, results: u32) -> Self {
        self.results = Some(results);
        self
    }

    /// Set a seed so every fetch returns the same employees. If this is not
    /// set, the seed will be read from the environment variable
    /// `STAFFDIR_SEED`.
    pub fn with_seed<S: Into<String>>(mut self, seed: S) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Restrict employees to the given nationalities. If this is not set,
    /// they will be read from the comma separated environment variable
    /// `STAFFDIR_NAT`.
    pub fn with_nationalities<I, S>(mut self, nationalities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nationalities = Some(nationalities.into_iter().map(Into::into).collect());
        self
    }

    /// Set the timeout of requests to the random-user API. Defaults to 10
    /// seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use an existing notes store instead of creating a new one.
    pub fn with_notes(mut self, store: notes::Store) -> Self {
        self.notes = Some(store);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let env_fallback = self.env_fallback;

        let mut url = self.url.unwrap_or_default();
        if url.is_empty() && env_fallback {
            url = env::var("STAFFDIR_URL").unwrap_or_default();
        }
        if url.is_empty() {
            url = RANDOM_USER_URL.to_string();
        }

        let results = match self.results {
            Some(results) => results,
            None => match env::var("STAFFDIR_RESULTS") {
                Ok(raw) if env_fallback && !raw.trim().is_empty() => raw
                    .trim()
                    .parse()
                    .map_err(|_e| Error::InvalidResults(raw.clone()))?,
                _ => DEFAULT_RESULTS,
            },
        };
        if results == 0 || results > MAX_RESULTS {
            return Err(Error::InvalidResults(results.to_string()));
        }

        let mut seed = self.seed.unwrap_or_default();
        if seed.is_empty() && env_fallback {
            seed = env::var("STAFFDIR_SEED").unwrap_or_default();
        }

        let nationalities = match self.nationalities {
            Some(nationalities) => nationalities,
            None if env_fallback => env::var("STAFFDIR_NAT")
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|nat| !nat.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        let defaults = FetchOptions {
            results,
            seed: if seed.is_empty() { None } else { Some(seed) },
            nationalities,
        };

        let http_client = http::Client::new(&url, self.timeout)?;

        Ok(Client {
            url,
            employees: employees::Client::new(http_client, defaults),
            notes: self.notes.unwrap_or_default(),
        })
    }
}
