use serde::{Deserialize, Serialize};
use validator::Validate;

/// One comment as returned by the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<String>,
    pub published_at: Option<String>,
    pub updated_at: Option<String>,
    /// MD5 of the commenter's email, stored by the origin for avatars.
    pub email_hash: Option<String>,
    /// Moderation state ('pending' until approved server-side).
    pub status: Option<String>,
}

impl Comment {
    /// Best available timestamp for display.
    pub fn when(&self) -> Option<&str> {
        self.created_at
            .as_deref()
            .or(self.published_at.as_deref())
            .or(self.updated_at.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// DTO for submitting a new comment.
///
/// Constructed through [`CommentDraft::new`], which trims the raw form
/// values first so the length checks below run against what the user
/// actually typed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub author: String,

    #[validate(email(message = "Email address is not valid"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Comment is required"))]
    pub content: String,
}

impl CommentDraft {
    /// Trims all fields; an empty email becomes absent rather than invalid.
    pub fn new(author: &str, email: &str, content: &str) -> Self {
        let email = email.trim();
        Self {
            author: author.trim().to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
            content: content.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_fields_fail_validation() {
        let draft = CommentDraft::new("   ", "", "  \n ");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn author_and_content_are_both_required() {
        assert!(CommentDraft::new("Ana", "", "").validate().is_err());
        assert!(CommentDraft::new("", "", "Nice post").validate().is_err());
        assert!(CommentDraft::new("Ana", "", "Nice post").validate().is_ok());
    }

    #[test]
    fn empty_email_is_absent_not_invalid() {
        let draft = CommentDraft::new("Ana", "   ", "Nice post");
        assert!(draft.email.is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let draft = CommentDraft::new("Ana", "not-an-email", "Nice post");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn email_is_omitted_from_the_wire_payload_when_absent() {
        let draft = CommentDraft::new("Ana", "", "Nice post");
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("email").is_none());
    }

    #[test]
    fn when_prefers_created_at_then_published_then_updated() {
        let mut comment = Comment {
            id: None,
            author: None,
            content: None,
            created_at: Some("a".into()),
            published_at: Some("b".into()),
            updated_at: Some("c".into()),
            email_hash: None,
            status: None,
        };
        assert_eq!(comment.when(), Some("a"));
        comment.created_at = None;
        assert_eq!(comment.when(), Some("b"));
        comment.published_at = None;
        assert_eq!(comment.when(), Some("c"));
        comment.updated_at = None;
        assert_eq!(comment.when(), None);
    }
}
