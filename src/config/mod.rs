//! Request construction and validation subsystem.
//!
//! # Data Flow
//! ```text
//! CLI args + environment fallbacks (raw strings)
//!     → validation.rs (parse, trim, bounds, defaults)
//!     → SnapshotRequest (validated, immutable)
//!     → handed to the engine; never touched again
//! ```
//!
//! # Design Decisions
//! - The request is immutable once built; there is no reload path
//! - Required fields (repository id, branch, endpoint) are never silently
//!   defaulted — a missing value is a fatal configuration error
//! - Validation is pure so it can be tested exhaustively without any
//!   network or environment mocking

pub mod request;
pub mod validation;

pub use request::SnapshotRequest;
pub use validation::{build_request, EnvFallbacks, RawInputs, ValidationError};
