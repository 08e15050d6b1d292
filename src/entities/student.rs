// 🎓 Student Entity - Identity, demographics, courses and tuition balance
//
// The id is the identity: assigned once by the registry's id source and never
// changed. Name, age and level are fixed at creation; courses only grow;
// balance moves up with enrollment and down with payment.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{self, GradeLevel};
use crate::error::{RegistryError, RegistryResult};
use crate::ids::{IdSource, SequentialIds};

// ============================================================================
// STUDENT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    /// Stable identity - NEVER changes
    pub id: u64,

    /// Title-cased display name
    pub name: String,

    /// Age as entered; range checks belong to the caller
    pub age: i32,

    pub level: GradeLevel,

    /// Enrolled course names in enrollment order (duplicates allowed)
    pub courses: Vec<String>,

    /// Outstanding tuition in whole currency units
    pub balance: i64,

    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Create a new student with an empty course list and zero balance
    pub fn new(id: u64, name: &str, age: i32, level: GradeLevel) -> Self {
        Student {
            id,
            name: title_case(name),
            age,
            level,
            courses: Vec::new(),
            balance: 0,
            created_at: Utc::now(),
        }
    }

    /// Append one course name. Fees are charged separately.
    pub fn enroll_course(&mut self, course: &str) {
        self.courses.push(course.to_string());
    }

    /// Add fees to the outstanding balance, refusing amounts that overflow it
    pub fn charge(&mut self, amount: i64) -> RegistryResult<i64> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(RegistryError::AmountOutOfRange {
                amount,
                balance: self.balance,
            })?;
        Ok(self.balance)
    }

    /// Apply a payment if it fits inside the balance.
    ///
    /// A payment larger than the balance is refused whole; nothing partial is
    /// applied.
    pub fn pay_tuition(&mut self, amount: i64) -> RegistryResult<i64> {
        if amount > self.balance {
            return Err(RegistryError::Insufficient {
                requested: amount,
                balance: self.balance,
            });
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(RegistryError::AmountOutOfRange {
                amount,
                balance: self.balance,
            })?;
        Ok(self.balance)
    }

    pub fn has_outstanding_balance(&self) -> bool {
        self.balance > 0
    }
}

/// Uppercase the first word character of every word, leave the rest alone.
///
/// "john doe" → "John Doe", "mary-ann o'neil" → "Mary-Ann O'Neil",
/// "mcDonald" → "McDonald".
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }

    out
}

// ============================================================================
// OPERATION RESULTS
// ============================================================================

/// Outcome of a successful enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    pub student_id: u64,
    /// Courses added by this call, in the order given
    pub courses: Vec<String>,
    /// Fees charged by this call
    pub total_fee: i64,
    /// Balance after charging
    pub balance: i64,
}

/// Outcome of a successful payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub student_id: u64,
    pub amount: i64,
    /// Balance left after the payment
    pub balance: i64,
}

// ============================================================================
// STUDENT REGISTRY
// ============================================================================

/// All students of the current session, in insertion order.
///
/// Lives in memory only. The registry owns its id source, so two registries
/// never share hidden counter state.
pub struct StudentRegistry<I: IdSource = SequentialIds> {
    students: Vec<Student>,
    ids: I,
}

impl StudentRegistry<SequentialIds> {
    /// Empty registry with a randomly seeded id sequence
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::random())
    }
}

impl Default for StudentRegistry<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> StudentRegistry<I> {
    /// Empty registry drawing ids from `ids`
    pub fn with_ids(ids: I) -> Self {
        StudentRegistry {
            students: Vec::new(),
            ids,
        }
    }

    /// Create a student and return the stored record
    pub fn add(&mut self, name: &str, age: i32, level: GradeLevel) -> RegistryResult<&Student> {
        let id = self.ids.next_id().ok_or(RegistryError::IdsExhausted)?;
        let student = Student::new(id, name, age, level);
        info!(id, name = %student.name, age, level = %level, "student added");

        self.students.push(student);
        let last = self.students.len() - 1;
        Ok(&self.students[last])
    }

    /// Read-only lookup
    pub fn find(&self, id: u64) -> RegistryResult<&Student> {
        debug!(id, "student lookup");
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound { id })
    }

    fn find_mut(&mut self, id: u64) -> RegistryResult<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound { id })
    }

    /// Current balance of one student
    pub fn balance(&self, id: u64) -> RegistryResult<i64> {
        self.find(id).map(|s| s.balance)
    }

    /// Append every course (known or not) and charge the sum of their fees.
    ///
    /// Fees are charged before any course is appended, so a charge that would
    /// overflow the balance leaves the student untouched.
    pub fn enroll<S: AsRef<str>>(&mut self, id: u64, courses: &[S]) -> RegistryResult<Enrollment> {
        let student = self.find_mut(id)?;

        let added: Vec<String> = courses.iter().map(|c| c.as_ref().to_string()).collect();
        let total_fee = catalog::total_fee(added.as_slice()).ok_or(RegistryError::AmountOutOfRange {
            amount: i64::MAX,
            balance: student.balance,
        })?;
        student.charge(total_fee)?;

        for course in &added {
            student.enroll_course(course);
        }
        info!(id, courses = added.len(), total_fee, balance = student.balance, "student enrolled");

        Ok(Enrollment {
            student_id: id,
            courses: added,
            total_fee,
            balance: student.balance,
        })
    }

    /// Pay `amount` off the balance, or refuse if it exceeds it
    pub fn pay(&mut self, id: u64, amount: i64) -> RegistryResult<Payment> {
        let student = self.find_mut(id)?;

        if amount <= 0 {
            // Accepted as-is: it always fits inside a non-negative balance.
            warn!(id, amount, "non-positive payment accepted");
        }

        match student.pay_tuition(amount) {
            Ok(balance) => {
                info!(id, amount, balance, "tuition paid");
                Ok(Payment {
                    student_id: id,
                    amount,
                    balance,
                })
            }
            Err(err) => {
                info!(id, amount, balance = student.balance, "payment refused");
                Err(err)
            }
        }
    }

    /// Remove a student, keeping the others in order
    pub fn remove(&mut self, id: u64) -> RegistryResult<Student> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(RegistryError::NotFound { id })?;

        let removed = self.students.remove(index);
        info!(id, name = %removed.name, "student removed");
        Ok(removed)
    }

    /// All students in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Sum of all balances
    /// Sum of all balances, clamped at `i64::MAX`
    pub fn total_outstanding(&self) -> i64 {
        self.students
            .iter()
            .fold(0i64, |sum, s| sum.saturating_add(s.balance))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_test_registry() -> StudentRegistry {
        StudentRegistry::with_ids(SequentialIds::starting_at(10_000))
    }

    #[test]
    fn test_student_creation() {
        let student = Student::new(7, "john doe", 14, GradeLevel::Grade8);

        assert_eq!(student.id, 7);
        assert_eq!(student.name, "John Doe");
        assert_eq!(student.age, 14);
        assert_eq!(student.level, GradeLevel::Grade8);
        assert!(student.courses.is_empty());
        assert_eq!(student.balance, 0);
        assert!(!student.has_outstanding_balance());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("john doe"), "John Doe");
        assert_eq!(title_case("JOHN doe"), "JOHN Doe");
        assert_eq!(title_case("mcDonald"), "McDonald");
        assert_eq!(title_case("mary-ann o'neil"), "Mary-Ann O'Neil");
        assert_eq!(title_case("  ali   khan "), "  Ali   Khan ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_student_pay_tuition() {
        let mut student = Student::new(1, "Ayesha", 17, GradeLevel::Intermediate);
        assert_eq!(student.charge(15_000), Ok(15_000));

        assert_eq!(student.pay_tuition(5_000), Ok(10_000));
        assert_eq!(
            student.pay_tuition(20_000),
            Err(RegistryError::Insufficient {
                requested: 20_000,
                balance: 10_000
            })
        );
        assert_eq!(student.balance, 10_000);
    }

    #[test]
    fn test_registry_add_assigns_unique_ids() {
        let mut registry = create_test_registry();

        let mut seen = HashSet::new();
        for i in 0..50 {
            let id = registry.add(&format!("student {}", i), 12, GradeLevel::Grade7).unwrap().id;
            assert!(seen.insert(id), "duplicate id {}", id);
        }
        assert_eq!(registry.len(), 50);
    }

    #[test]
    fn test_registry_add_normalizes_name() {
        let mut registry = create_test_registry();
        let student = registry.add("john doe", 14, GradeLevel::Grade8).unwrap();

        assert_eq!(student.id, 10_000);
        assert_eq!(student.name, "John Doe");
        assert_eq!(student.level, GradeLevel::Grade8);
    }

    #[test]
    fn test_registry_accepts_any_age() {
        let mut registry = create_test_registry();
        let student = registry.add("edge case", -4, GradeLevel::Grade7).unwrap();
        assert_eq!(student.age, -4);
    }

    #[test]
    fn test_enroll_known_courses() {
        let mut registry = create_test_registry();
        let id = registry.add("john doe", 14, GradeLevel::Grade8).unwrap().id;

        let enrollment = registry.enroll(id, &["Mathematics", "Science"]).unwrap();
        assert_eq!(enrollment.total_fee, 20_000);
        assert_eq!(enrollment.balance, 20_000);
        assert_eq!(registry.balance(id), Ok(20_000));

        // A second enrollment accumulates
        let enrollment = registry.enroll(id, &["English"]).unwrap();
        assert_eq!(enrollment.total_fee, 10_000);
        assert_eq!(registry.balance(id), Ok(30_000));

        let student = registry.find(id).unwrap();
        assert_eq!(student.courses, vec!["Mathematics", "Science", "English"]);
    }

    #[test]
    fn test_enroll_unknown_course_is_recorded_free() {
        let mut registry = create_test_registry();
        let id = registry.add("sara", 22, GradeLevel::Undergraduate).unwrap().id;

        let enrollment = registry.enroll(id, &["Art"]).unwrap();
        assert_eq!(enrollment.total_fee, 0);
        assert_eq!(registry.balance(id), Ok(0));
        assert_eq!(registry.find(id).unwrap().courses, vec!["Art"]);
    }

    #[test]
    fn test_enroll_keeps_duplicates() {
        let mut registry = create_test_registry();
        let id = registry.add("sara", 22, GradeLevel::Undergraduate).unwrap().id;

        let enrollment = registry.enroll(id, &["SQL", "SQL"]).unwrap();
        assert_eq!(enrollment.total_fee, 40_000);
        assert_eq!(registry.find(id).unwrap().courses, vec!["SQL", "SQL"]);
    }

    #[test]
    fn test_pay_full_balance() {
        let mut registry = create_test_registry();
        let id = registry.add("bilal", 18, GradeLevel::Matriculation).unwrap().id;
        registry.enroll(id, &["Physics", "Chemistry"]).unwrap();

        let payment = registry.pay(id, 30_000).unwrap();
        assert_eq!(payment.amount, 30_000);
        assert_eq!(payment.balance, 0);
        assert_eq!(registry.balance(id), Ok(0));
    }

    #[test]
    fn test_pay_more_than_balance() {
        let mut registry = create_test_registry();
        let id = registry.add("bilal", 18, GradeLevel::Matriculation).unwrap().id;
        registry.enroll(id, &["Physics"]).unwrap();

        let result = registry.pay(id, 15_001);
        assert_eq!(
            result,
            Err(RegistryError::Insufficient {
                requested: 15_001,
                balance: 15_000
            })
        );
        assert_eq!(registry.balance(id), Ok(15_000));
    }

    #[test]
    fn test_pay_non_positive_amount_is_accepted() {
        let mut registry = create_test_registry();
        let id = registry.add("bilal", 18, GradeLevel::Matriculation).unwrap().id;
        registry.enroll(id, &["Physics"]).unwrap();

        assert_eq!(registry.pay(id, 0).unwrap().balance, 15_000);
        assert_eq!(registry.pay(id, -500).unwrap().balance, 15_500);
    }

    #[test]
    fn test_remove_then_find() {
        let mut registry = create_test_registry();
        let first = registry.add("first", 10, GradeLevel::Grade7).unwrap().id;
        let second = registry.add("second", 16, GradeLevel::Intermediate).unwrap().id;
        let third = registry.add("third", 30, GradeLevel::Undergraduate).unwrap().id;

        let removed = registry.remove(second).unwrap();
        assert_eq!(removed.name, "Second");
        assert_eq!(registry.find(second), Err(RegistryError::NotFound { id: second }));

        let remaining: Vec<u64> = registry.students().iter().map(|s| s.id).collect();
        assert_eq!(remaining, vec![first, third]);
    }

    #[test]
    fn test_unknown_id_is_not_found_and_mutates_nothing() {
        let mut registry = create_test_registry();
        let id = registry.add("john doe", 14, GradeLevel::Grade8).unwrap().id;
        registry.enroll(id, &["Mathematics"]).unwrap();
        let before = registry.find(id).unwrap().clone();

        let missing = 424_242;
        let not_found = RegistryError::NotFound { id: missing };
        assert_eq!(registry.find(missing), Err(not_found.clone()));
        assert_eq!(registry.balance(missing), Err(not_found.clone()));
        assert_eq!(registry.pay(missing, 100), Err(not_found.clone()));
        assert_eq!(registry.enroll(missing, &["Science"]), Err(not_found.clone()));
        assert_eq!(registry.remove(missing), Err(not_found));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find(id).unwrap(), &before);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut registry = create_test_registry();
        let id = registry.add("john doe", 14, GradeLevel::Grade8).unwrap().id;
        registry.enroll(id, &["Mathematics", "Islamiat"]).unwrap();

        let first = registry.find(id).unwrap().clone();
        for _ in 0..5 {
            assert_eq!(registry.find(id).unwrap(), &first);
        }
    }

    #[test]
    fn test_total_outstanding() {
        let mut registry = create_test_registry();
        assert!(registry.is_empty());
        assert_eq!(registry.total_outstanding(), 0);

        let a = registry.add("a", 12, GradeLevel::Grade7).unwrap().id;
        let b = registry.add("b", 25, GradeLevel::Undergraduate).unwrap().id;
        registry.enroll(a, &["English"]).unwrap();
        registry.enroll(b, &["Java", "SQL"]).unwrap();
        registry.pay(b, 5_000).unwrap();

        assert_eq!(registry.total_outstanding(), 45_000);
    }

    #[test]
    fn test_pay_extreme_amounts_never_overflow() {
        let mut registry = create_test_registry();
        let id = registry.add("bilal", 18, GradeLevel::Matriculation).unwrap().id;
        registry.enroll(id, &["Physics"]).unwrap();

        assert_eq!(
            registry.pay(id, i64::MIN),
            Err(RegistryError::AmountOutOfRange {
                amount: i64::MIN,
                balance: 15_000
            })
        );
        assert_eq!(
            registry.pay(id, i64::MAX),
            Err(RegistryError::Insufficient {
                requested: i64::MAX,
                balance: 15_000
            })
        );
        assert_eq!(
            registry.pay(id, -i64::MAX),
            Err(RegistryError::AmountOutOfRange {
                amount: -i64::MAX,
                balance: 15_000
            })
        );
        assert_eq!(registry.balance(id), Ok(15_000));
    }

    #[test]
    fn test_enroll_after_large_negative_payment() {
        let mut registry = create_test_registry();
        let id = registry.add("bilal", 18, GradeLevel::Matriculation).unwrap().id;

        assert_eq!(registry.pay(id, -i64::MAX).unwrap().balance, i64::MAX);

        let result = registry.enroll(id, &["Mathematics"]);
        assert_eq!(
            result,
            Err(RegistryError::AmountOutOfRange {
                amount: 10_000,
                balance: i64::MAX
            })
        );

        // Nothing appended, nothing charged
        let student = registry.find(id).unwrap();
        assert!(student.courses.is_empty());
        assert_eq!(student.balance, i64::MAX);
    }

    #[test]
    fn test_student_charge_overflow() {
        let mut student = Student::new(1, "Ayesha", 17, GradeLevel::Intermediate);
        student.balance = i64::MAX - 5;

        assert_eq!(
            student.charge(10),
            Err(RegistryError::AmountOutOfRange {
                amount: 10,
                balance: i64::MAX - 5
            })
        );
        assert_eq!(student.balance, i64::MAX - 5);
        assert_eq!(student.charge(5), Ok(i64::MAX));
    }

    #[test]
    fn test_total_outstanding_clamps_huge_balances() {
        let mut registry = create_test_registry();
        let a = registry.add("a", 12, GradeLevel::Grade7).unwrap().id;
        let b = registry.add("b", 12, GradeLevel::Grade7).unwrap().id;
        registry.pay(a, -(i64::MAX - 1)).unwrap();
        registry.pay(b, -(i64::MAX - 1)).unwrap();

        assert_eq!(registry.total_outstanding(), i64::MAX);
    }

    #[test]
    fn test_add_stops_when_ids_run_out() {
        let mut registry = StudentRegistry::with_ids(SequentialIds::starting_at(u64::MAX));

        let first = registry.add("first", 10, GradeLevel::Grade7).unwrap().id;
        assert_eq!(first, u64::MAX);

        assert_eq!(
            registry.add("second", 10, GradeLevel::Grade7),
            Err(RegistryError::IdsExhausted)
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find(first).unwrap().name, "First");
    }

    #[test]
    fn test_student_serializes_level_name() {
        let student = Student::new(3, "zara", 19, GradeLevel::Intermediate);
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(json["level"], "Intermediate");
        assert_eq!(json["name"], "Zara");
    }
}
