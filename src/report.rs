// 🧾 Reports - catalog listing and end-of-session summary
//
// Plain data structs with a text rendering; `--json` prints the same structs
// through serde_json instead.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Bracket;
use crate::entities::{Student, StudentRegistry};
use crate::ids::IdSource;

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BracketListing {
    pub bracket: Bracket,
    pub ages: &'static str,
    pub levels: Vec<&'static str>,
    pub courses: Vec<&'static str>,
    pub fee_per_course: i64,
}

pub fn catalog() -> Vec<BracketListing> {
    Bracket::ALL
        .iter()
        .map(|bracket| BracketListing {
            bracket: *bracket,
            ages: match bracket {
                Bracket::Junior => "up to 15",
                Bracket::Secondary => "16 to 20",
                Bracket::Tertiary => "over 20",
            },
            levels: bracket.levels().iter().map(|l| l.as_str()).collect(),
            courses: bracket.courses().to_vec(),
            fee_per_course: bracket.fee(),
        })
        .collect()
}

pub fn catalog_text(currency: &str) -> String {
    let mut out = String::new();
    for listing in catalog() {
        out.push_str(&format!(
            "{} (age {}) - {} {} per course\n",
            listing.bracket.as_str(),
            listing.ages,
            currency,
            listing.fee_per_course
        ));
        out.push_str(&format!("  Levels:  {}\n", listing.levels.join(", ")));
        out.push_str(&format!("  Courses: {}\n", listing.courses.join(", ")));
    }
    out
}

// ============================================================================
// SESSION SUMMARY
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub student_count: usize,
    pub with_balance: usize,
    pub total_outstanding: i64,
    pub students: Vec<Student>,
    pub closed_at: DateTime<Utc>,
}

impl SessionSummary {
    pub fn from_registry<I: IdSource>(registry: &StudentRegistry<I>) -> Self {
        let students = registry.students().to_vec();
        SessionSummary {
            student_count: students.len(),
            with_balance: students.iter().filter(|s| s.has_outstanding_balance()).count(),
            total_outstanding: registry.total_outstanding(),
            students,
            closed_at: Utc::now(),
        }
    }

    pub fn summary(&self, currency: &str) -> String {
        format!(
            "Session closed: {} students, {} with outstanding fees, {} {} outstanding",
            self.student_count, self.with_balance, currency, self.total_outstanding
        )
    }
}
