use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, ValidationError};

/// Blog entity - a bookmarked blog post with its like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u32,
    /// Insertion time, defines store order.
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog with a generated ID.
    pub fn new(title: String, author: Option<String>, url: String, likes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            url,
            likes,
            created_at: Utc::now(),
        }
    }
}

/// A candidate blog as submitted by a client, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u32>,
}

impl BlogDraft {
    /// Check required fields and build a new [`Blog`].
    ///
    /// `title` and `url` must be present and non-empty; every failing field
    /// is reported. Missing `likes` becomes 0.
    pub fn validate(self) -> Result<Blog, DomainError> {
        let mut errors = Vec::new();
        let title = required("title", self.title, &mut errors);
        let url = required("url", self.url, &mut errors);

        match (title, url) {
            (Some(title), Some(url)) if errors.is_empty() => Ok(Blog::new(
                title,
                self.author,
                url,
                self.likes.unwrap_or(0),
            )),
            _ => Err(DomainError::Validation(errors)),
        }
    }
}

fn required(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match value {
        None => {
            errors.push(ValidationError::Missing(field));
            None
        }
        Some(v) if v.is_empty() => {
            errors.push(ValidationError::Empty(field));
            None
        }
        Some(v) => Some(v),
    }
}
