use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The number of employees fetched when nothing else is configured.
pub const DEFAULT_RESULTS: u32 = 50;

/// The largest batch the random-user API hands out in one request.
pub const MAX_RESULTS: u32 = 5000;

/// An employee of the directory.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// The login UUID of the source record.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// URL of the large profile picture.
    pub picture: String,
    pub address: Address,
}

/// The postal address of an employee.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// House number and street name, separated by a single space.
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Always a string, even when the source sent a number. Empty if the
    /// source had none.
    pub postal_code: String,
}

/// Sets the options for fetching employees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// How many employees to fetch, between 1 and [`MAX_RESULTS`].
    pub results: u32,
    /// The same seed always produces the same employees.
    pub seed: Option<String>,
    /// Restrict the generated people to these nationalities (e.g. `"gb"`).
    pub nationalities: Vec<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            results: DEFAULT_RESULTS,
            seed: None,
            nationalities: Vec::new(),
        }
    }
}

impl FetchOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.results == 0 || self.results > MAX_RESULTS {
            return Err(Error::InvalidResults(self.results.to_string()));
        }
        Ok(())
    }
}
