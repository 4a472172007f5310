//! scholarank-ingestion — Getting paper metadata into typed records.
//! - Paper discovery (Semantic Scholar Graph API)
//! - Local corpus files (JSON list, or `{ "data": [...] }`)
//! - Coercion of dirty metadata into `PaperRecord`

pub mod corpus;
pub mod models;
pub mod sources;

pub use models::{Author, PaperRecord};
