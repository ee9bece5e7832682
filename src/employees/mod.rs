//! Fetch employees from the random-user API.
//!
//! You're probably looking for the [`Client`].
//!
//! # Examples
//! ```no_run
//! use staffdir::{Client, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::builder().with_results(10).with_seed("abc").build()?;
//!
//!     for employee in client.employees().fetch().await? {
//!         println!("{} {} <{}>", employee.first_name, employee.last_name, employee.email);
//!     }
//!
//!     Ok(())
//! }
//! ```
mod client;
mod model;
mod source;

pub use client::Client;
pub use model::{Address, Employee, FetchOptions, DEFAULT_RESULTS, MAX_RESULTS};
