use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::{NewPost, Post};

use super::repo::MemoryPostStore;
use super::repository::PostRepository;

/// Post operations independent of the web framework.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self { Self { repo } }

    /// Service over a fresh, empty in-memory store.
    pub fn in_memory() -> Self { Self::new(Arc::new(MemoryPostStore::new())) }

    /// All posts in the order they were created.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<Post> {
        let posts = self.repo.list().await;
        debug!(count = posts.len(), "posts_listed");
        posts
    }

    /// Store a post and return its server-assigned id.
    ///
    /// # Examples
    /// ```
    /// use models::NewPost;
    /// use service::PostService;
    /// let svc = PostService::in_memory();
    /// let id = tokio_test::block_on(svc.create(NewPost::new("Hello", "First post")));
    /// let posts = tokio_test::block_on(svc.list());
    /// assert_eq!(posts[0].id, id);
    /// ```
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: NewPost) -> String {
        if let Some(client_id) = &input.id {
            debug!(%client_id, "ignoring client-supplied post id");
        }
        let id = self.repo.create(input).await;
        info!(post_id = %id, "post_created");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_returns_created_posts_in_call_order() {
        let svc = PostService::in_memory();
        let id1 = svc.create(NewPost::new("t1", "c1")).await;
        let id2 = svc.create(NewPost::new("t2", "c2")).await;

        let posts = svc.list().await;
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["t1", "t2"]);
        assert_eq!(posts[0].id, id1);
        assert_eq!(posts[1].id, id2);
        assert!(!id1.is_empty() && id1 != id2);
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let svc = PostService::in_memory();
        let other = svc.clone();
        let mut input = NewPost::new("t", "c");
        input.id = Some("client".into());
        let id = other.create(input).await;

        let posts = svc.list().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, id);
        assert_ne!(posts[0].id, "client");
    }
}
