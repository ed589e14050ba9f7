use serde::{Deserialize, Serialize};

/// A stored blog post. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Request body for creating a post.
///
/// Clients may send an `id`; it is accepted for wire compatibility and never used.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: None, title: title.into(), content: content.into() }
    }

    /// Finalize into a stored record under a server-assigned id.
    pub fn into_post(self, id: String) -> Post {
        Post { id, title: self.title, content: self.content }
    }
}
