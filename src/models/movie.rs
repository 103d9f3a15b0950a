use serde::{Deserialize, Serialize};

// Immutable reference data for booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub duration_min: u32,
    pub description: String,
    pub poster_url: String,
}
