use service::{PostService, UserService};

/// Shared by every handler. One post store and one user store per process.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub users: UserService,
}

impl AppState {
    pub fn new(posts: PostService, users: UserService) -> Self {
        Self { posts, users }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(PostService::in_memory(), UserService::in_memory())
    }
}
