use uuid::Uuid;

/// Generate an opaque unique identifier for a new post
pub fn generate_post_id() -> String {
    Uuid::new_v4().simple().to_string()
}
