//! Service layer for the blog backend.
//! - Repository traits describe the post and user stores.
//! - In-memory implementations keep records in insertion order behind a lock.
//! - Services add password hashing and structured logging on top.

pub mod errors;
pub mod ids;
pub mod posts;
pub mod users;

pub use posts::PostService;
pub use users::UserService;
