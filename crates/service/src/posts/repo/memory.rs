use async_trait::async_trait;
use tokio::sync::RwLock;

use models::{NewPost, Post};

use crate::ids::new_id;
use crate::posts::repository::PostRepository;

/// Process-local post list. Appends happen under the write guard.
#[derive(Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl PostRepository for MemoryPostStore {
    async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn create(&self, candidate: NewPost) -> String {
        let id = new_id();
        let mut posts = self.posts.write().await;
        posts.push(candidate.into_post(id.clone()));
        id
    }

    async fn count(&self) -> usize {
        self.posts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryPostStore::new();
        assert!(store.list().await.is_empty());
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn create_appends_in_order_with_server_ids() {
        let store = MemoryPostStore::new();
        let mut first = NewPost::new("t1", "c1");
        first.id = Some("mine".into());
        let id1 = store.create(first).await;
        let id2 = store.create(NewPost::new("t2", "c2")).await;

        let posts = store.list().await;
        assert_eq!(posts.len(), 2);
        assert_eq!((posts[0].id.as_str(), posts[0].title.as_str(), posts[0].content.as_str()), (id1.as_str(), "t1", "c1"));
        assert_eq!((posts[1].id.as_str(), posts[1].title.as_str(), posts[1].content.as_str()), (id2.as_str(), "t2", "c2"));
        assert_ne!(id1, "mine");
        assert_ne!(id1, id2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_all_land_with_unique_ids() {
        let store = Arc::new(MemoryPostStore::new());
        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(NewPost::new(format!("t{i}"), "c")).await })
            })
            .collect();
        let mut ids = HashSet::new();
        for h in handles {
            ids.insert(h.await.expect("join"));
        }
        assert_eq!(ids.len(), 64);
        assert_eq!(store.count().await, 64);
    }
}
