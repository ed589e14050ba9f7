//! Records held by the blog stores and the request shapes that create them.

pub mod post;
pub mod user;

pub use post::{NewPost, Post};
pub use user::{NewUser, User, UserCandidate};
