use serde_json::json;
use tracing::warn;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{optional_id, required_id, required_str, text_or_int, ParamResult};
use crate::ipc::types::{AppState, Request};
use crate::model::Student;
use crate::store::StudentAction;

fn handle_list(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    Ok(ok(&req.id, json!({ "students": state.store.students() })))
}

fn handle_add(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let name = required_str(req, "name")?.to_string();
    let age = text_or_int(req, "age")?;
    if name.is_empty() || age.is_empty() {
        return Err(err(
            &req.id,
            "bad_params",
            "name/age must not be empty",
            None,
        ));
    }

    let student_id = match optional_id(req, "id")? {
        Some(id) => {
            if state.store.contains(&id) {
                warn!(%id, "rejected add with duplicate id");
                return Err(err(
                    &req.id,
                    "duplicate_id",
                    "a student with this id already exists",
                    Some(json!({ "studentId": id })),
                ));
            }
            id
        }
        None => state.fresh_id(),
    };

    let student = Student::new(student_id, name, age);
    state.store.dispatch(StudentAction::Add(student.clone()));
    Ok(ok(&req.id, json!({ "student": student })))
}

fn handle_update(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let student_id = required_id(req, "id")?;
    let name = required_str(req, "name")?.to_string();
    let age = text_or_int(req, "age")?;

    let updated = state
        .store
        .dispatch(StudentAction::Update(Student::new(student_id, name, age)));
    Ok(ok(&req.id, json!({ "updated": updated })))
}

fn handle_delete(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let student_id = required_id(req, "id")?;
    let deleted = state.store.dispatch(StudentAction::Delete(student_id));
    Ok(ok(&req.id, json!({ "deleted": deleted })))
}

fn handle_clear_all(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let cleared = state.store.len();
    state.store.dispatch(StudentAction::ClearAll);
    Ok(ok(&req.id, json!({ "cleared": cleared })))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let resp = match req.method.as_str() {
        "students.list" => handle_list(state, req),
        "students.add" => handle_add(state, req),
        "students.update" => handle_update(state, req),
        "students.delete" => handle_delete(state, req),
        "students.clearAll" => handle_clear_all(state, req),
        _ => return None,
    };
    Some(resp.unwrap_or_else(|e| e))
}
