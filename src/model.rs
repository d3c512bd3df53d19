use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque record key. Assigned once at creation and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Kept as entered; see `age_years` for the numeric reading.
    pub age: String,
}

impl Student {
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
        }
    }

    pub fn age_years(&self) -> Option<u32> {
        self.age.trim().parse().ok()
    }
}

/// Where new record ids come from. Ids are a caller convention; the store
/// never mints them.
#[derive(Debug, Clone)]
pub enum IdSource {
    Uuid,
    Counter { next: u64 },
}

impl IdSource {
    pub fn counter() -> Self {
        IdSource::Counter { next: 1 }
    }

    pub fn next_id(&mut self) -> StudentId {
        match self {
            IdSource::Uuid => StudentId(Uuid::new_v4().to_string()),
            IdSource::Counter { next } => {
                let id = *next;
                *next += 1;
                StudentId(id.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counter_ids_are_monotonic() {
        let mut ids = IdSource::counter();
        assert_eq!(ids.next_id().as_str(), "1");
        assert_eq!(ids.next_id().as_str(), "2");
        assert_eq!(ids.next_id().as_str(), "3");
    }

    #[test]
    fn uuid_ids_do_not_collide() {
        let mut ids = IdSource::Uuid;
        let seen: HashSet<_> = (0..64).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn age_years_reads_integer_text() {
        assert_eq!(Student::new("1", "Ann", "20").age_years(), Some(20));
        assert_eq!(Student::new("1", "Ann", " 21 ").age_years(), Some(21));
        assert_eq!(Student::new("1", "Ann", "twenty").age_years(), None);
    }
}
