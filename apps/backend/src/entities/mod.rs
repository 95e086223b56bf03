pub mod books;
pub mod reviews;
pub mod users;

pub use books::Entity as Books;
pub use books::Model as Book;
pub use reviews::Entity as Reviews;
pub use reviews::Model as Review;
pub use users::Entity as Users;
pub use users::Model as User;
