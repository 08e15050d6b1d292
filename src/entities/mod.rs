// Entity Models
//
// Each entity has:
// - Stable identity (integer id) that NEVER changes
// - Values that change only through registry operations
// - Registry for creation, lookups and removal

pub mod student;

pub use student::{title_case, Enrollment, Payment, Student, StudentRegistry};
