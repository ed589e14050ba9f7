use async_trait::async_trait;

use models::{NewPost, Post};

/// Storage abstraction for posts.
///
/// Implementations assign the identifier themselves and must ignore `candidate.id`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in insertion order.
    async fn list(&self) -> Vec<Post>;
    /// Append a post under a fresh identifier and return that identifier.
    async fn create(&self, candidate: NewPost) -> String;
    /// Number of stored posts.
    async fn count(&self) -> usize;
}
