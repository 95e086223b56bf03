pub mod auth_token;
pub mod book_id;
pub mod current_user;
pub mod validated_json;

pub use book_id::BookId;
pub use current_user::CurrentUser;
pub use validated_json::ValidatedJson;
