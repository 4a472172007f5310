//! scholarank-common — Shared error type and the capped HTTP client used by every scholarank crate.

pub mod error;
pub mod sandbox;

pub use error::{Result, ScholarankError};
pub use sandbox::SandboxClient;
