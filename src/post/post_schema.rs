use crate::post::post_model::ValidationErrorReport;

pub const TITLE_MAX_LENGTH: usize = 100;
pub const TAG_MAX_LENGTH: usize = 25;
pub const CONTENT_MAX_LENGTH: usize = 10000;

/// A post draft as reassembled from the form, before any constraint has
/// been checked. `None` means the field was absent from the request.
#[derive(Debug, Clone)]
pub struct PostCandidate {
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub content: Option<String>,
}

/// Check every field independently and collect all violations, keyed by
/// field name in the order they were encountered.
pub fn validate(candidate: &PostCandidate) -> Result<(), ValidationErrorReport> {
    let mut report = ValidationErrorReport::default();

    check_string(
        &mut report.field_errors.title,
        candidate.title.as_deref(),
        TITLE_MAX_LENGTH,
    );

    for tag in &candidate.tags {
        check_string(&mut report.field_errors.tags, Some(tag.as_str()), TAG_MAX_LENGTH);
    }

    check_string(
        &mut report.field_errors.content,
        candidate.content.as_deref(),
        CONTENT_MAX_LENGTH,
    );

    if report.is_empty() { Ok(()) } else { Err(report) }
}

fn check_string(errors: &mut Vec<String>, value: Option<&str>, max: usize) {
    let Some(value) = value else {
        errors.push("Required".to_string());
        return;
    };

    // Lengths are measured in characters, not bytes.
    let length = value.chars().count();
    if length < 1 {
        errors.push("String must contain at least 1 character(s)".to_string());
    }
    if length > max {
        errors.push(format!("String must contain at most {max} character(s)"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, tags: &[&str], content: &str) -> PostCandidate {
        PostCandidate {
            title: Some(title.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: Some(content.to_string()),
        }
    }

    #[test]
    fn accepts_a_candidate_within_bounds() {
        assert!(validate(&candidate("Hello", &["rust", "web"], "Lorem ipsum")).is_ok());
    }

    #[test]
    fn accepts_boundary_lengths() {
        let c = candidate(
            &"t".repeat(TITLE_MAX_LENGTH),
            &["x".repeat(TAG_MAX_LENGTH).as_str()],
            &"c".repeat(CONTENT_MAX_LENGTH),
        );
        assert!(validate(&c).is_ok());
    }

    #[test]
    fn rejects_an_empty_title() {
        let report = validate(&candidate("", &[], "x")).unwrap_err();
        assert_eq!(
            report.field_errors.title,
            vec!["String must contain at least 1 character(s)"]
        );
        assert!(report.field_errors.tags.is_empty());
        assert!(report.field_errors.content.is_empty());
    }

    #[test]
    fn rejects_an_overlong_title() {
        let report = validate(&candidate(&"t".repeat(101), &[], "x")).unwrap_err();
        assert_eq!(
            report.field_errors.title,
            vec!["String must contain at most 100 character(s)"]
        );
    }

    #[test]
    fn missing_content_is_reported_as_required() {
        let c = PostCandidate {
            title: Some("T".to_string()),
            tags: vec![],
            content: None,
        };
        let report = validate(&c).unwrap_err();
        assert_eq!(report.field_errors.content, vec!["Required"]);
    }

    #[test]
    fn tag_violations_land_under_the_tags_key() {
        let long_tag = "x".repeat(26);
        let report = validate(&candidate("T", &["", long_tag.as_str()], "x")).unwrap_err();
        assert_eq!(
            report.field_errors.tags,
            vec![
                "String must contain at least 1 character(s)",
                "String must contain at most 25 character(s)",
            ]
        );
    }

    #[test]
    fn collects_violations_across_fields() {
        let c = PostCandidate {
            title: None,
            tags: vec![String::new()],
            content: Some(String::new()),
        };
        let report = validate(&c).unwrap_err();
        assert_eq!(report.field_errors.title, vec!["Required"]);
        assert_eq!(report.field_errors.tags.len(), 1);
        assert_eq!(report.field_errors.content.len(), 1);
    }

    #[test]
    fn length_is_counted_in_characters() {
        // 25 multibyte characters are within the tag bound even though the
        // byte length is larger.
        let tag = "é".repeat(TAG_MAX_LENGTH);
        assert!(validate(&candidate("T", &[tag.as_str()], "x")).is_ok());
    }
}
