// Student Registry - Core Library
// In-memory students, enrollments and tuition balances for one session.
// The interactive shell in main.rs is the only caller that formats output.

pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod ids;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use catalog::{course_fee, total_fee, Bracket, GradeLevel};
pub use config::{AppConfig, Cli, Command};
pub use entities::{title_case, Enrollment, Payment, Student, StudentRegistry};
pub use error::{RegistryError, RegistryResult};
pub use ids::{IdSource, SequentialIds};
pub use report::{catalog_text, BracketListing, SessionSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
