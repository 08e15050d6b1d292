// 📚 Course Catalog - Brackets, grade levels and the fee table
//
// Age picks a bracket, the user picks a level inside it, and the level decides
// which courses are offered. Fees are a flat rate per bracket.
//
// Everything here is static data: no state, no I/O.

use serde::Serialize;
use std::fmt;

// ============================================================================
// FEE TABLE
// ============================================================================

pub const JUNIOR_FEE: i64 = 10_000;
pub const SECONDARY_FEE: i64 = 15_000;
pub const TERTIARY_FEE: i64 = 20_000;

pub const JUNIOR_COURSES: &[&str] = &[
    "Mathematics",
    "Pakistan Studies",
    "English",
    "Science",
    "Islamiat",
];

pub const SECONDARY_COURSES: &[&str] = &[
    "Intermediate Math",
    "Chemistry",
    "Physics",
    "History",
    "Functional English",
];

pub const TERTIARY_COURSES: &[&str] = &["Python Programming", "C++", "SQL", "Java", "React.js"];

/// Fee for a single course. Unknown names cost nothing.
///
/// Matching is exact, so "mathematics" is not "Mathematics".
pub fn course_fee(course: &str) -> i64 {
    Bracket::ALL
        .iter()
        .find(|bracket| bracket.courses().contains(&course))
        .map(|bracket| bracket.fee())
        .unwrap_or(0)
}

/// Sum of `course_fee` over the list, duplicates counted every time.
///
/// `None` if the sum does not fit in an `i64`.
pub fn total_fee<S: AsRef<str>>(courses: &[S]) -> Option<i64> {
    courses
        .iter()
        .try_fold(0i64, |sum, c| sum.checked_add(course_fee(c.as_ref())))
}

// ============================================================================
// BRACKET
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bracket {
    /// Up to 15 years
    Junior,

    /// 16 to 20 years
    Secondary,

    /// Over 20 years
    Tertiary,
}

impl Bracket {
    pub const ALL: [Bracket; 3] = [Bracket::Junior, Bracket::Secondary, Bracket::Tertiary];

    pub fn for_age(age: i32) -> Self {
        if age <= 15 {
            Bracket::Junior
        } else if age <= 20 {
            Bracket::Secondary
        } else {
            Bracket::Tertiary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Bracket::Junior => "Junior",
            Bracket::Secondary => "Secondary",
            Bracket::Tertiary => "Tertiary",
        }
    }

    /// Levels the user may choose from
    pub fn levels(&self) -> &'static [GradeLevel] {
        match self {
            Bracket::Junior => &[GradeLevel::Grade7, GradeLevel::Grade8, GradeLevel::Grade9],
            Bracket::Secondary => &[GradeLevel::Matriculation, GradeLevel::Intermediate],
            Bracket::Tertiary => &[GradeLevel::Undergraduate],
        }
    }

    pub fn courses(&self) -> &'static [&'static str] {
        match self {
            Bracket::Junior => JUNIOR_COURSES,
            Bracket::Secondary => SECONDARY_COURSES,
            Bracket::Tertiary => TERTIARY_COURSES,
        }
    }

    /// Fee charged per course in this bracket
    pub fn fee(&self) -> i64 {
        match self {
            Bracket::Junior => JUNIOR_FEE,
            Bracket::Secondary => SECONDARY_FEE,
            Bracket::Tertiary => TERTIARY_FEE,
        }
    }
}

// ============================================================================
// GRADE LEVEL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GradeLevel {
    #[serde(rename = "7th Grade")]
    Grade7,
    #[serde(rename = "8th Grade")]
    Grade8,
    #[serde(rename = "9th Grade")]
    Grade9,
    #[serde(rename = "Matriculation")]
    Matriculation,
    #[serde(rename = "Intermediate")]
    Intermediate,
    #[serde(rename = "Undergraduate Student")]
    Undergraduate,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 6] = [
        GradeLevel::Grade7,
        GradeLevel::Grade8,
        GradeLevel::Grade9,
        GradeLevel::Matriculation,
        GradeLevel::Intermediate,
        GradeLevel::Undergraduate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Grade7 => "7th Grade",
            GradeLevel::Grade8 => "8th Grade",
            GradeLevel::Grade9 => "9th Grade",
            GradeLevel::Matriculation => "Matriculation",
            GradeLevel::Intermediate => "Intermediate",
            GradeLevel::Undergraduate => "Undergraduate Student",
        }
    }

    pub fn bracket(&self) -> Bracket {
        match self {
            GradeLevel::Grade7 | GradeLevel::Grade8 | GradeLevel::Grade9 => Bracket::Junior,
            GradeLevel::Matriculation | GradeLevel::Intermediate => Bracket::Secondary,
            GradeLevel::Undergraduate => Bracket::Tertiary,
        }
    }

    /// Courses offered to students at this level
    pub fn courses(&self) -> &'static [&'static str] {
        self.bracket().courses()
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(Bracket::for_age(-3), Bracket::Junior);
        assert_eq!(Bracket::for_age(7), Bracket::Junior);
        assert_eq!(Bracket::for_age(15), Bracket::Junior);
        assert_eq!(Bracket::for_age(16), Bracket::Secondary);
        assert_eq!(Bracket::for_age(20), Bracket::Secondary);
        assert_eq!(Bracket::for_age(21), Bracket::Tertiary);
        assert_eq!(Bracket::for_age(64), Bracket::Tertiary);
    }

    #[test]
    fn test_levels_belong_to_their_bracket() {
        for bracket in Bracket::ALL {
            for level in bracket.levels() {
                assert_eq!(level.bracket(), bracket);
            }
        }
        let total: usize = Bracket::ALL.iter().map(|b| b.levels().len()).sum();
        assert_eq!(total, GradeLevel::ALL.len());
    }

    #[test]
    fn test_course_fees() {
        assert_eq!(course_fee("Mathematics"), 10_000);
        assert_eq!(course_fee("Pakistan Studies"), 10_000);
        assert_eq!(course_fee("Functional English"), 15_000);
        assert_eq!(course_fee("Chemistry"), 15_000);
        assert_eq!(course_fee("React.js"), 20_000);
        assert_eq!(course_fee("C++"), 20_000);
    }

    #[test]
    fn test_unknown_course_is_free() {
        assert_eq!(course_fee("Art"), 0);
        assert_eq!(course_fee(""), 0);
        assert_eq!(course_fee("mathematics"), 0);
    }

    #[test]
    fn test_total_fee() {
        assert_eq!(total_fee(&["Mathematics", "Science"]), Some(20_000));
        assert_eq!(total_fee(&["Mathematics", "Mathematics"]), Some(20_000));
        assert_eq!(total_fee(&["SQL", "Physics", "Art"]), Some(35_000));
        assert_eq!(total_fee::<&str>(&[]), Some(0));
    }

    #[test]
    fn test_level_courses() {
        assert_eq!(GradeLevel::Grade8.courses(), JUNIOR_COURSES);
        assert_eq!(GradeLevel::Intermediate.courses(), SECONDARY_COURSES);
        assert_eq!(GradeLevel::Undergraduate.courses(), TERTIARY_COURSES);
    }

    #[test]
    fn test_grade_level_serde_uses_display_names() {
        let json = serde_json::to_string(&GradeLevel::Grade7).unwrap();
        assert_eq!(json, "\"7th Grade\"");
        let json = serde_json::to_string(&GradeLevel::Undergraduate).unwrap();
        assert_eq!(json, "\"Undergraduate Student\"");
    }
}
