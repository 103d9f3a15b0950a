use serde::Deserialize;
use std::env;

use crate::models::StudioKind;

// Container for all tunables of the booking core
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub seating: SeatingConfig,
    pub demo: DemoConfig,
}

// Seat layout knobs. Premiere rooms get fewer seats per row.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatingConfig {
    pub rows: u32,
    pub seats_per_row_regular: u32,
    pub seats_per_row_premiere: u32,
}

// Demo-only knobs (random pre-booked occupancy)
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub booked_ratio: f64,
}

impl SeatingConfig {
    pub fn seats_per_row(&self, kind: StudioKind) -> u32 {
        match kind {
            StudioKind::Regular => self.seats_per_row_regular,
            StudioKind::Premiere => self.seats_per_row_premiere,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            seating: SeatingConfig {
                rows: env::var("SEAT_ROWS")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse::<u32>()
                    .expect("SEAT_ROWS must be a valid number")
                    .clamp(1, 26), // one letter per row
                seats_per_row_regular: env::var("SEATS_PER_ROW_REGULAR")
                    .unwrap_or_else(|_| "12".to_string())
                    .parse()
                    .expect("SEATS_PER_ROW_REGULAR must be a valid number"),
                seats_per_row_premiere: env::var("SEATS_PER_ROW_PREMIERE")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("SEATS_PER_ROW_PREMIERE must be a valid number"),
            },
            demo: DemoConfig {
                booked_ratio: env::var("DEMO_BOOKED_RATIO")
                    .unwrap_or_else(|_| "0.3".to_string())
                    .parse()
                    .expect("DEMO_BOOKED_RATIO must be a valid number"),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seating: SeatingConfig {
                rows: 8,
                seats_per_row_regular: 12,
                seats_per_row_premiere: 10,
            },
            demo: DemoConfig { booked_ratio: 0.3 },
        }
    }
}
