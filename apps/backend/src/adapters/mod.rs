//! SeaORM adapters. Functions here speak `DbErr`; the repos layer maps it
//! to `DomainError`.

pub mod books_sea;
pub mod reviews_sea;
pub mod users_sea;
