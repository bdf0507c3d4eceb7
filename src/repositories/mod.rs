//! Repository layer for database operations.
//!
//! This module provides a clean separation between business logic (services)
//! and database operations (repositories), improving testability and maintainability.

#[cfg(test)]
pub mod memory;
pub mod user_repository;

#[cfg(test)]
pub use memory::InMemoryUserRepository;
pub use user_repository::{connect, PgUserRepository, UserRepository};
