use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", as shown to API clients.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    fn check(&self, errors: &mut Vec<String>) {
        require("author.firstName", &self.first_name, errors);
        require("author.lastName", &self.last_name, errors);
    }
}

/// BlogPost entity - a persisted blog post.
///
/// `id` and `created` are assigned by the store on insert and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// A blog post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl NewBlogPost {
    pub fn new(author: Author, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check that every required field is present and non-blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();
        self.author.check(&mut errors);
        require("title", &self.title, &mut errors);
        require("content", &self.content, &mut errors);
        into_result(errors)
    }

    /// Attach the store-assigned identity.
    pub fn into_post(self, id: Uuid, created: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
            created,
        }
    }
}

/// Partial update of a blog post. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub author: Option<Author>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }

    /// Every supplied field must be valid, and at least one must be supplied.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation(vec![
                "at least one of title, content or author must be supplied".to_string(),
            ]));
        }

        let mut errors = Vec::new();
        if let Some(author) = &self.author {
            author.check(&mut errors);
        }
        if let Some(title) = &self.title {
            require("title", title, &mut errors);
        }
        if let Some(content) = &self.content {
            require("content", content, &mut errors);
        }
        into_result(errors)
    }

    /// Overwrite the supplied fields on `post`.
    pub fn apply(self, post: &mut BlogPost) {
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

fn require(field: &str, value: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{} is required", field));
    }
}

fn into_result(errors: Vec<String>) -> Result<(), DomainError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewBlogPost {
        NewBlogPost::new(Author::new("Ada", "Lovelace"), "Notes", "On the engine")
    }

    fn violations(result: Result<(), DomainError>) -> Vec<String> {
        match result {
            Err(DomainError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let mut post = draft();
        post.title = String::new();
        assert_eq!(violations(post.validate()), vec!["title is required"]);
    }

    #[test]
    fn test_blank_fields_are_all_reported() {
        let post = NewBlogPost::new(Author::new(" ", ""), "\t", "");
        assert_eq!(
            violations(post.validate()),
            vec![
                "author.firstName is required",
                "author.lastName is required",
                "title is required",
                "content is required",
            ]
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Author::new("Ada", "Lovelace").display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_empty_patch_is_rejected() {
        assert!(BlogPostPatch::default().validate().is_err());
    }

    #[test]
    fn test_patch_with_half_an_author_is_rejected() {
        let patch = BlogPostPatch {
            author: Some(Author::new("Grace", "")),
            ..Default::default()
        };
        assert_eq!(violations(patch.validate()), vec!["author.lastName is required"]);
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let created = Utc::now();
        let id = Uuid::new_v4();
        let mut post = draft().into_post(id, created);

        BlogPostPatch {
            title: Some("Revised".to_string()),
            ..Default::default()
        }
        .apply(&mut post);

        assert_eq!(post.title, "Revised");
        assert_eq!(post.content, "On the engine");
        assert_eq!(post.author, Author::new("Ada", "Lovelace"));
        assert_eq!(post.id, id);
        assert_eq!(post.created, created);
    }
}
