use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub tags: Option<String>,
    pub content: String,
    #[serde(rename = "createdAt")]
    #[sqlx(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "updatedAt")]
    #[sqlx(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

/// Insert payload; timestamps are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: String,
    pub title: String,
    pub tags: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

/// Form state echoed back while the client is still editing the tag list.
#[derive(Debug, Serialize)]
pub struct EditingSubmission {
    pub title: String,
    pub tags: Vec<String>,
    pub intent: String,
}

/// Form state echoed back when a `submit` fails validation.
#[derive(Debug, Serialize)]
pub struct RejectedSubmission {
    pub title: String,
    pub tags: Vec<String>,
    pub content: String,
}

#[derive(Debug, Default, Serialize)]
pub struct FieldErrors {
    pub title: Vec<String>,
    pub tags: Vec<String>,
    pub content: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct ValidationErrorReport {
    #[serde(rename = "formErrors")]
    pub form_errors: Vec<String>,
    #[serde(rename = "fieldErrors")]
    pub field_errors: FieldErrors,
}

impl ValidationErrorReport {
    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty()
            && self.field_errors.title.is_empty()
            && self.field_errors.tags.is_empty()
            && self.field_errors.content.is_empty()
    }
}

/// Every outcome of a form POST, serialized with a `status` discriminant.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormState {
    Idle {
        #[serde(skip_serializing_if = "Option::is_none")]
        submission: Option<EditingSubmission>,
    },
    Success,
    Error {
        errors: ValidationErrorReport,
        submission: RejectedSubmission,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_state_serializes_to_status_only() {
        let value = serde_json::to_value(FormState::Success).unwrap();
        assert_eq!(value, json!({ "status": "success" }));
    }

    #[test]
    fn idle_state_without_submission_omits_the_key() {
        let value = serde_json::to_value(FormState::Idle { submission: None }).unwrap();
        assert_eq!(value, json!({ "status": "idle" }));
    }

    #[test]
    fn idle_state_echoes_the_submission() {
        let state = FormState::Idle {
            submission: Some(EditingSubmission {
                title: "T".to_string(),
                tags: vec![String::new()],
                intent: "list-insert".to_string(),
            }),
        };
        let value = serde_json::to_value(state).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "idle",
                "submission": { "title": "T", "tags": [""], "intent": "list-insert" },
            })
        );
    }

    #[test]
    fn error_state_keeps_all_three_field_keys() {
        let state = FormState::Error {
            errors: ValidationErrorReport::default(),
            submission: RejectedSubmission {
                title: String::new(),
                tags: vec![],
                content: "x".to_string(),
            },
        };
        let value = serde_json::to_value(state).unwrap();
        assert_eq!(
            value["errors"],
            json!({
                "formErrors": [],
                "fieldErrors": { "title": [], "tags": [], "content": [] },
            })
        );
        assert_eq!(
            value["submission"],
            json!({ "title": "", "tags": [], "content": "x" })
        );
    }
}
