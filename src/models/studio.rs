use serde::{Deserialize, Serialize};
use std::fmt;

// Screening room. The kind decides the seat layout and the price tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Studio {
    pub id: i64,
    pub name: String,
    pub kind: StudioKind,
    pub capacity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudioKind {
    Regular,
    Premiere,
}

impl fmt::Display for StudioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioKind::Regular => write!(f, "Regular"),
            StudioKind::Premiere => write!(f, "Premiere"),
        }
    }
}
