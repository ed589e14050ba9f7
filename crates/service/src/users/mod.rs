//! Users: registration with unique emails and the current-user placeholder.

pub mod password;
pub mod repo;
pub mod repository;
pub mod service;

pub use repository::UserRepository;
pub use service::UserService;
