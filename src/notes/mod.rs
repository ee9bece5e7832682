//! Keep free-text notes per employee.
//!
//! You're probably looking for the [`Store`].
//!
//! # Examples
//! ```
//! use staffdir::notes::Store;
//!
//! let store = Store::new();
//! store.add("7a0eed16", "Prefers email over phone").unwrap();
//! store.add("7a0eed16", "Out of office next week").unwrap();
//!
//! let notes = store.list("7a0eed16");
//! assert_eq!(notes[0].content, "Out of office next week");
//! assert!(store.list("someone-else").is_empty());
//! ```
mod model;
pub mod requests;
mod store;

pub use model::Note;
pub use store::{collection_path, Store};
