//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{RepositoryError, TiersRepository};
pub use service::Service;
