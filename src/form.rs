//! View-side state for the roster screen: the edit buffer behind the
//! add/edit modal, presence checks on save, and the render model the host
//! UI draws from.

use crate::model::{Student, StudentId};
use crate::store::{StudentAction, StudentStore};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

pub const PAGE_TITLE: &str = "Student Management";
pub const MISSING_FIELDS_NOTICE: &str = "Please fill out all fields";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{}", MISSING_FIELDS_NOTICE)]
    MissingField,
    #[error("no add/edit dialog is open")]
    ModalClosed,
    #[error("student not found: {0}")]
    NotFound(StudentId),
    #[error("a student with id {0} already exists")]
    DuplicateId(StudentId),
}

impl FormError {
    pub fn code(&self) -> &'static str {
        match self {
            FormError::MissingField => "missing_field",
            FormError::ModalClosed => "modal_closed",
            FormError::NotFound(_) => "not_found",
            FormError::DuplicateId(_) => "duplicate_id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
}

impl Field {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(Field::Name),
            "age" => Some(Field::Age),
            _ => None,
        }
    }
}

/// Candidate record while the modal is open. Fields may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentDraft {
    pub id: StudentId,
    pub name: String,
    pub age: String,
}

impl From<&Student> for StudentDraft {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            age: s.age.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    Updated,
    /// Edit target vanished while the dialog was open; the store ignored it.
    Unmatched,
}

#[derive(Debug, Default)]
pub struct FormView {
    modal_open: bool,
    edit_mode: bool,
    current: Option<StudentDraft>,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn current(&self) -> Option<&StudentDraft> {
        self.current.as_ref()
    }

    /// Starts a blank draft under an id the caller has already minted.
    pub fn open_create(&mut self, id: StudentId) {
        self.current = Some(StudentDraft {
            id,
            name: String::new(),
            age: String::new(),
        });
        self.edit_mode = false;
        self.modal_open = true;
    }

    pub fn open_edit(&mut self, store: &StudentStore, id: &StudentId) -> Result<(), FormError> {
        let student = store
            .get(id)
            .ok_or_else(|| FormError::NotFound(id.clone()))?;
        self.current = Some(StudentDraft::from(student));
        self.edit_mode = true;
        self.modal_open = true;
        Ok(())
    }

    /// Moves an open create draft onto a new id, keeping what was typed.
    pub fn rekey_draft(&mut self, id: StudentId) -> Result<(), FormError> {
        self.open_draft_mut()?.id = id;
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let draft = self.open_draft_mut()?;
        match field {
            Field::Name => draft.name = value.into(),
            Field::Age => draft.age = value.into(),
        }
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.modal_open = false;
    }

    /// Commits the buffer with exactly one store call. An empty name or age
    /// blocks the save and leaves both the store and the dialog as they were.
    /// A create draft whose id was taken meanwhile is refused with
    /// `DuplicateId`; the dialog stays open.
    pub fn save(&mut self, store: &mut StudentStore) -> Result<SaveOutcome, FormError> {
        let edit_mode = self.edit_mode;
        let draft = self.open_draft_mut()?;
        if draft.name.is_empty() || draft.age.is_empty() {
            info!(id = %draft.id, "save blocked, missing field");
            return Err(FormError::MissingField);
        }
        if !edit_mode && store.contains(&draft.id) {
            info!(id = %draft.id, "save blocked, id already taken");
            return Err(FormError::DuplicateId(draft.id.clone()));
        }
        let student = Student::new(draft.id.clone(), draft.name.clone(), draft.age.clone());

        let outcome = if edit_mode {
            if store.dispatch(StudentAction::Update(student)) {
                SaveOutcome::Updated
            } else {
                SaveOutcome::Unmatched
            }
        } else {
            store.dispatch(StudentAction::Add(student));
            SaveOutcome::Added
        };
        self.modal_open = false;
        Ok(outcome)
    }

    pub fn delete(&mut self, store: &mut StudentStore, id: &StudentId) -> bool {
        store.dispatch(StudentAction::Delete(id.clone()))
    }

    /// Returns how many records were dropped.
    pub fn clear_all(&mut self, store: &mut StudentStore) -> usize {
        let n = store.len();
        store.dispatch(StudentAction::ClearAll);
        n
    }

    pub fn snapshot(&self, store: &StudentStore) -> FormSnapshot {
        let title = if self.is_edit_mode() {
            "Edit Student"
        } else {
            "Add Student"
        };
        let open = self.is_modal_open();
        FormSnapshot {
            title: PAGE_TITLE,
            cards: store.students().iter().map(StudentCard::from).collect(),
            modal: ModalSnapshot {
                open,
                edit_mode: self.is_edit_mode(),
                title,
                current: self.current().filter(|_| open).cloned(),
            },
        }
    }

    fn open_draft_mut(&mut self) -> Result<&mut StudentDraft, FormError> {
        if !self.modal_open {
            return Err(FormError::ModalClosed);
        }
        self.current.as_mut().ok_or(FormError::ModalClosed)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCard {
    pub id: StudentId,
    pub name: String,
    pub age_label: String,
    pub age_years: Option<u32>,
}

impl From<&Student> for StudentCard {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            age_label: format!("Age: {}", s.age),
            age_years: s.age_years(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalSnapshot {
    pub open: bool,
    pub edit_mode: bool,
    pub title: &'static str,
    pub current: Option<StudentDraft>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub title: &'static str,
    pub cards: Vec<StudentCard>,
    pub modal: ModalSnapshot,
}
