use serde::{Deserialize, Serialize};

// A seat is exactly one of available/selected/booked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Selected,
    Booked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: String, // row letter + number, e.g. "A1"
    pub row: char,
    pub number: u32,
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(row: char, number: u32, status: SeatStatus) -> Self {
        Seat {
            id: format!("{}{}", row, number),
            row,
            number,
            status,
        }
    }
}
