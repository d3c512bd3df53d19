use crate::model::{Student, StudentId};
use tracing::info;

/// A single state transition on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentAction {
    Add(Student),
    Update(Student),
    Delete(StudentId),
    ClearAll,
}

/// Authoritative, insertion-ordered collection of student records.
///
/// Every operation is total. Update and delete on an id that is not present
/// leave the collection untouched; the returned flag only reports whether a
/// record matched.
#[derive(Debug, Default, Clone)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &StudentId) -> bool {
        self.get(id).is_some()
    }

    /// Appends as-is. Callers own id uniqueness and field presence.
    pub fn add(&mut self, student: Student) {
        info!(id = %student.id, "student added");
        self.students.push(student);
    }

    pub fn update(&mut self, student: Student) -> bool {
        let Some(existing) = self.students.iter_mut().find(|s| s.id == student.id) else {
            info!(id = %student.id, "update ignored, no matching student");
            return false;
        };
        existing.name = student.name;
        existing.age = student.age;
        info!(id = %existing.id, "student updated");
        true
    }

    pub fn delete(&mut self, id: &StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|s| &s.id != id);
        let removed = self.students.len() != before;
        if removed {
            info!(%id, "student deleted");
        } else {
            info!(%id, "delete ignored, no matching student");
        }
        removed
    }

    pub fn clear_all(&mut self) -> usize {
        let n = self.students.len();
        self.students.clear();
        info!(cleared = n, "students cleared");
        n
    }

    /// Applies one action. Returns true when the collection changed.
    pub fn dispatch(&mut self, action: StudentAction) -> bool {
        match action {
            StudentAction::Add(s) => {
                self.add(s);
                true
            }
            StudentAction::Update(s) => self.update(s),
            StudentAction::Delete(id) => self.delete(&id),
            StudentAction::ClearAll => {
                let changed = !self.is_empty();
                self.clear_all();
                changed
            }
        }
    }
}
