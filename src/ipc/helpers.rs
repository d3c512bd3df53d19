use crate::ipc::error::err;
use crate::ipc::types::Request;
use crate::model::StudentId;

pub type ParamResult<T> = Result<T, serde_json::Value>;

pub fn required_str<'a>(req: &'a Request, key: &str) -> ParamResult<&'a str> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {key}"), None))
}

pub fn required_id(req: &Request, key: &str) -> ParamResult<StudentId> {
    optional_id(req, key)?
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {key}"), None))
}

/// Ids may arrive as strings or bare integers; both become opaque text.
pub fn optional_id(req: &Request, key: &str) -> ParamResult<Option<StudentId>> {
    match req.params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(StudentId::new(s.as_str()))),
        Some(serde_json::Value::Number(n)) => Ok(Some(StudentId::new(n.to_string()))),
        Some(_) => Err(err(
            &req.id,
            "bad_params",
            format!("{key} must be a string or integer"),
            None,
        )),
    }
}

/// Age is stored as text. Accepts a string or a JSON integer.
pub fn text_or_int(req: &Request, key: &str) -> ParamResult<String> {
    match req.params.get(key) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(serde_json::Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        Some(_) => Err(err(
            &req.id,
            "bad_params",
            format!("{key} must be a string or integer"),
            None,
        )),
        None => Err(err(&req.id, "bad_params", format!("missing {key}"), None)),
    }
}
