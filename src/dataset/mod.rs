//! Launch Records Dataset
//!
//! The read-only table every chart is computed from.
//!
//! # Architecture
//!
//! ```text
//! CSV file ──► loader (validate every row) ──► Dataset (Arc, never mutated)
//!                                                   │
//!                                                   ▼
//!                                             filter::* (per request)
//! ```
//!
//! # Invariants
//!
//! - Every record has all four attributes populated
//! - `payload_mass_kg` is finite and non-negative
//! - `outcome` is class 0 or 1
//! - Record order is the file order

mod error;
mod loader;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::REQUIRED_COLUMNS;
pub use types::{Dataset, LaunchRecord, Outcome};
