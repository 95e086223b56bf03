pub mod books;
pub mod intelligence;
pub mod reviews;
pub mod users;
