use tracing::debug;

use crate::form::{Field, FormError};
use crate::ipc::error::{err, form_err, ok};
use crate::ipc::helpers::{required_id, required_str, text_or_int, ParamResult};
use crate::ipc::types::{AppState, Request};

fn snapshot(state: &AppState, req: &Request) -> serde_json::Value {
    match serde_json::to_value(state.form.snapshot(&state.store)) {
        Ok(v) => ok(&req.id, v),
        Err(e) => err(&req.id, "render_failed", e.to_string(), None),
    }
}

fn handle_open_create(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let id = state.fresh_id();
    debug!(%id, "create dialog opened");
    state.form.open_create(id);
    Ok(snapshot(state, req))
}

fn handle_open_edit(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let student_id = required_id(req, "id")?;
    state
        .form
        .open_edit(&state.store, &student_id)
        .map_err(|e| form_err(&req.id, &e))?;
    Ok(snapshot(state, req))
}

fn handle_set_field(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let raw = required_str(req, "field")?;
    let Some(field) = Field::parse(raw) else {
        return Err(err(
            &req.id,
            "bad_params",
            format!("unknown field: {raw}"),
            Some(serde_json::json!({ "allowed": ["name", "age"] })),
        ));
    };
    let value = text_or_int(req, "value")?;
    state
        .form
        .set_field(field, value)
        .map_err(|e| form_err(&req.id, &e))?;
    Ok(snapshot(state, req))
}

fn handle_save(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let outcome = match state.form.save(&mut state.store) {
        Err(FormError::DuplicateId(taken)) => {
            // Another caller claimed the draft's id; move the draft and retry once.
            let id = state.fresh_id();
            debug!(%taken, %id, "create draft re-keyed");
            state
                .form
                .rekey_draft(id)
                .and_then(|()| state.form.save(&mut state.store))
        }
        other => other,
    }
    .map_err(|e| form_err(&req.id, &e))?;
    debug!(?outcome, "form saved");
    Ok(snapshot(state, req))
}

fn handle_delete(state: &mut AppState, req: &Request) -> ParamResult<serde_json::Value> {
    let student_id = required_id(req, "id")?;
    state.form.delete(&mut state.store, &student_id);
    Ok(snapshot(state, req))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let resp = match req.method.as_str() {
        "form.view" => Ok(snapshot(state, req)),
        "form.openCreate" => handle_open_create(state, req),
        "form.openEdit" => handle_open_edit(state, req),
        "form.setField" => handle_set_field(state, req),
        "form.cancel" => {
            state.form.cancel();
            Ok(snapshot(state, req))
        }
        "form.save" => handle_save(state, req),
        "form.delete" => handle_delete(state, req),
        "form.clearAll" => {
            state.form.clear_all(&mut state.store);
            Ok(snapshot(state, req))
        }
        _ => return None,
    };
    Some(resp.unwrap_or_else(|e| e))
}
