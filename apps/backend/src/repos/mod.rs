//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod books;
pub mod reviews;
pub mod users;
