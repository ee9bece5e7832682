//! The backend of an employee directory.
//!
//! Employees come from a random-user API and are mapped into [`Employee`]
//! records; notes about them live in an in-memory [`notes::Store`]. If
//! you're just getting started, take a look at the [`Client`].
//!
//! # Examples
//! ```no_run
//! use staffdir::{Client, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::builder().with_results(5).with_seed("abc").build()?;
//!
//!     // Fetch a batch of employees
//!     let employees = client.employees().fetch().await?;
//!
//!     // Attach a note to the first one
//!     let employee = &employees[0];
//!     client.notes().add(&employee.id, "Met at the onboarding session")?;
//!
//!     // Notes are listed newest first
//!     for note in client.notes().list(&employee.id) {
//!         println!("{}: {}", note.created_at, note.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
pub mod client;
pub mod error;
mod http;
mod serde;

pub mod employees;
pub mod notes;

pub use client::Client;
pub use employees::Employee;
pub use error::Error;
pub use notes::Note;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

#[cfg(all(feature = "default-tls", feature = "native-tls"))]
compile_error!("Feature \"default-tls\" and \"native-tls\" cannot be enabled at the same time");

#[cfg(all(feature = "native-tls", feature = "rustls-tls"))]
compile_error!("Feature \"native-tls\" and \"rustls-tls\" cannot be enabled at the same time");

#[cfg(all(feature = "rustls-tls", feature = "default-tls"))]
compile_error!("Feature \"rustls-tls\" and \"default-tls\" cannot be enabled at the same time");
