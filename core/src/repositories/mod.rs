//! Repository interfaces for entity persistence.

pub mod token_repository;

pub use token_repository::TokenRepository;

#[cfg(test)]
pub use token_repository::mock::MockTokenRepository;
