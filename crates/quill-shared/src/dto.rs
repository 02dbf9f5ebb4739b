//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional on the wire so that missing fields surface as
//! validation errors rather than as malformed-body errors.

use serde::{Deserialize, Serialize};

/// Author as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to create a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<AuthorPayload>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Request to update a blog post. Only supplied fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    /// Optional echo of the path id; must match it when present.
    pub id: Option<String>,
    pub author: Option<AuthorPayload>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A blog post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    /// Author display name, "First Last".
    pub author: String,
    pub title: String,
    pub content: String,
    /// RFC 3339 creation timestamp.
    pub created: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_uses_camel_case() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"author":{"firstName":"Ada","lastName":"Lovelace"},"title":"T","content":"C"}"#,
        )
        .unwrap();

        let author = req.author.unwrap();
        assert_eq!(author.first_name.as_deref(), Some("Ada"));
        assert_eq!(author.last_name.as_deref(), Some("Lovelace"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"title":"Only"}"#).unwrap();
        assert!(req.id.is_none());
        assert!(req.author.is_none());
        assert!(req.content.is_none());
        assert_eq!(req.title.as_deref(), Some("Only"));
    }
}
