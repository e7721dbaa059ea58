//! Source-control API interface.
//!
//! Types consumed by the notifier core, the `ApiService` trait implemented by drivers,
//! and the raw webhook payloads delivered to a run.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
pub mod types;

pub use errors::{ApiError, Result};
pub use interface::ApiService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
