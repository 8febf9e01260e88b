//! # herald-publish
//!
//! The boundary callers talk to: generation by page category, previews,
//! persistence with a revalidation ping, and re-validation of stored output.
//!
//! Builder failures come back as a [`GenerationResponse`] with
//! `success: false`; validation findings are data inside the report.

mod error;
mod input;
mod publisher;
mod record;
mod response;
pub mod revalidate;
pub mod store;
mod target;

pub use error::{PublishError, StoreError};
pub use input::GenerationInput;
pub use publisher::{Publisher, Revalidation};
pub use record::{Generated, SeoRecord};
pub use response::GenerationResponse;
pub use revalidate::{HttpRevalidator, NoopRevalidator, Revalidator, revalidator_from_config};
pub use store::{FileStore, MemoryStore, SeoStore};
pub use target::PublishTarget;
