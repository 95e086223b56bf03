//! DTOs for reviews_sea adapter.

/// DTO for inserting a review row.
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub book_id: i32,
    pub user_id: Option<i32>,
    pub review_text: Option<String>,
    pub rating: i32,
}
