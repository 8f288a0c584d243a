use crate::utils::error::CustomError;

/// Largest tag index accepted from a form. The editor only ever grows the
/// list one slot at a time, so anything past this bound is a hostile form,
/// and an unchecked index would size the tag list to it.
pub const MAX_TAG_INDEX: usize = 255;

/// The three operations a form POST can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ListInsert,
    ListRemove(usize),
    Submit,
}

impl Intent {
    /// Parse the client-supplied `intent` field. Anything outside the three
    /// known shapes is a client error.
    pub fn parse(intent: &str) -> Result<Self, CustomError> {
        if intent.starts_with("list-insert") {
            return Ok(Intent::ListInsert);
        }

        if intent.starts_with("list-remove") {
            let index = intent
                .split('/')
                .nth(1)
                .ok_or_else(|| {
                    CustomError::BadRequestError(format!("missing index in intent '{intent}'"))
                })?
                .parse::<usize>()
                .map_err(|_| {
                    CustomError::BadRequestError(format!("malformed index in intent '{intent}'"))
                })?;
            return Ok(Intent::ListRemove(index));
        }

        if intent == "submit" {
            return Ok(Intent::Submit);
        }

        Err(CustomError::BadRequestError(format!(
            "unknown intent '{intent}'"
        )))
    }
}

/// First value submitted under `name`, if any.
pub fn field_value(fields: &[(String, String)], name: &str) -> Option<String> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

/// Reassemble the tag list from its sparse indexed form fields.
///
/// The client addresses each tag independently as `tags[<n>]`. Values are
/// placed at their numeric index and the list is sized to the largest index
/// seen, with unsent slots defaulting to the empty string, so
/// non-contiguous indices still produce a dense ordered list.
pub fn collect_tags(fields: &[(String, String)]) -> Result<Vec<String>, CustomError> {
    let mut tags: Vec<String> = Vec::new();

    for (key, value) in fields {
        let Some(index) = key.strip_prefix("tags[").and_then(|k| k.strip_suffix(']')) else {
            continue;
        };
        let index = index.parse::<usize>().map_err(|_| {
            CustomError::BadRequestError(format!("malformed tag field '{key}'"))
        })?;
        if index > MAX_TAG_INDEX {
            return Err(CustomError::BadRequestError(format!(
                "tag index {index} exceeds the maximum of {MAX_TAG_INDEX}"
            )));
        }

        if index >= tags.len() {
            tags.resize(index + 1, String::new());
        }
        tags[index] = value.clone();
    }

    Ok(tags)
}

/// Remove the tag at `index`, rejecting out-of-range indices instead of
/// panicking.
pub fn remove_tag(tags: &mut Vec<String>, index: usize) -> Result<(), CustomError> {
    if index >= tags.len() {
        return Err(CustomError::BadRequestError(format!(
            "tag index {index} out of range for {} tag(s)",
            tags.len()
        )));
    }
    tags.remove(index);
    Ok(())
}
