use std::fmt;

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::http::ResponseBody;

/// Identifier of a remote object. Most resources use numbers, contacts and suppressions use
/// strings (UUIDs or email addresses).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, From)]
#[serde(untagged)]
pub enum ObjectId {
    Number(u64),
    String(String),
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::Number(id) => write!(f, "{id}"),
            ObjectId::String(id) => f.write_str(id),
        }
    }
}

/// Confirmation of a delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedObject {
    pub id: ObjectId,
}

impl DeletedObject {
    /// Use the `id` echoed by the service when there is one, the requested id otherwise
    /// (e.g. `204 No Content`).
    pub(crate) fn from_response(body: &ResponseBody, requested: impl Into<ObjectId>) -> Self {
        let echoed = body
            .get("id")
            .and_then(|id| ObjectId::deserialize(id).ok());

        DeletedObject {
            id: echoed.unwrap_or_else(|| requested.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DeletedObject, ObjectId};
    use crate::http::ResponseBody;

    #[test]
    fn object_id_accepts_numbers_and_strings() {
        assert_eq!(
            serde_json::from_value::<ObjectId>(json!(42)).unwrap(),
            ObjectId::Number(42)
        );
        assert_eq!(
            serde_json::from_value::<ObjectId>(json!("018dd5e3")).unwrap(),
            ObjectId::from("018dd5e3")
        );
        assert_eq!(ObjectId::from(7u64).to_string(), "7");
    }

    #[test]
    fn deleted_object_falls_back_to_requested_id() {
        let deleted = DeletedObject::from_response(&ResponseBody::Empty, "a@b.com");

        assert_eq!(deleted.id, ObjectId::from("a@b.com"));
    }

    #[test]
    fn deleted_object_prefers_echoed_id() {
        let body = ResponseBody::Json(json!({"id": 123, "name": "gone"}));

        assert_eq!(DeletedObject::from_response(&body, 999u64).id, ObjectId::Number(123));
    }
}
