//! Posts: repository abstraction, in-memory store and service.

pub mod repo;
pub mod repository;
pub mod service;

pub use repository::PostRepository;
pub use service::PostService;
