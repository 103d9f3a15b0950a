use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::{DemoConfig, SeatingConfig};
use crate::models::{Seat, SeatStatus, Studio};

/// Decides which seats are already taken when a seat map is generated.
///
/// Injected so tests and real occupancy data stay deterministic; the
/// random variant only exists for demo realism.
pub trait OccupancySource: Send + Sync {
    fn is_booked(&self, studio: &Studio, row: char, number: u32) -> bool;
}

// Every seat starts available
pub struct NoOccupancy;

impl OccupancySource for NoOccupancy {
    fn is_booked(&self, _studio: &Studio, _row: char, _number: u32) -> bool {
        false
    }
}

// Explicit set of pre-booked seat ids
pub struct FixedOccupancy {
    booked: HashSet<String>,
}

impl FixedOccupancy {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FixedOccupancy {
            booked: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl OccupancySource for FixedOccupancy {
    fn is_booked(&self, _studio: &Studio, row: char, number: u32) -> bool {
        self.booked.contains(&format!("{}{}", row, number))
    }
}

// Marks roughly `booked_ratio` of the seats as taken
pub struct RandomOccupancy {
    pub booked_ratio: f64,
}

impl RandomOccupancy {
    pub fn from_config(demo: &DemoConfig) -> Self {
        RandomOccupancy {
            booked_ratio: demo.booked_ratio,
        }
    }
}

impl Default for RandomOccupancy {
    fn default() -> Self {
        RandomOccupancy { booked_ratio: 0.3 }
    }
}

impl OccupancySource for RandomOccupancy {
    fn is_booked(&self, _studio: &Studio, _row: char, _number: u32) -> bool {
        rand::thread_rng().gen_bool(self.booked_ratio.clamp(0.0, 1.0))
    }
}

// Seat map for one studio, regenerated whenever a showtime is picked.
// Seats keep generation order: row A first, seat 1 first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    seats: Vec<Seat>,
}

impl SeatMap {
    pub fn generate(
        studio: &Studio,
        seating: &SeatingConfig,
        occupancy: &dyn OccupancySource,
    ) -> Self {
        let per_row = seating.seats_per_row(studio.kind);
        let mut seats = Vec::with_capacity((seating.rows * per_row) as usize);

        for row in row_letters(seating.rows) {
            for number in 1..=per_row {
                let status = if occupancy.is_booked(studio, row, number) {
                    SeatStatus::Booked
                } else {
                    SeatStatus::Available
                };
                seats.push(Seat::new(row, number, status));
            }
        }

        tracing::debug!(
            studio_id = studio.id,
            rows = seating.rows,
            per_row,
            "seat map generated"
        );
        SeatMap { seats }
    }

    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    pub(crate) fn seat_mut(&mut self, id: &str) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    // Seats grouped per row, for grid rendering
    pub fn rows(&self) -> Vec<(char, Vec<&Seat>)> {
        let mut out: Vec<(char, Vec<&Seat>)> = Vec::new();
        for seat in &self.seats {
            match out.last_mut() {
                Some((row, seats)) if *row == seat.row => seats.push(seat),
                _ => out.push((seat.row, vec![seat])),
            }
        }
        out
    }

    pub fn count(&self, status: SeatStatus) -> usize {
        self.seats.iter().filter(|s| s.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

fn row_letters(rows: u32) -> impl Iterator<Item = char> {
    (0..rows.min(26)).map(|i| (b'A' + i as u8) as char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::StudioKind;

    fn studio(kind: StudioKind) -> Studio {
        Studio {
            id: 1,
            name: "Studio A".to_string(),
            kind,
            capacity: 120,
        }
    }

    #[test]
    fn regular_layout_is_eight_rows_of_twelve() {
        let map = SeatMap::generate(
            &studio(StudioKind::Regular),
            &Config::default().seating,
            &NoOccupancy,
        );
        assert_eq!(map.len(), 96);
        assert_eq!(map.rows().len(), 8);
        assert!(map.seat("A1").is_some());
        assert!(map.seat("H12").is_some());
        assert!(map.seat("H13").is_none());
        assert_eq!(map.count(SeatStatus::Available), 96);
    }

    #[test]
    fn premiere_rows_are_shorter() {
        let map = SeatMap::generate(
            &studio(StudioKind::Premiere),
            &Config::default().seating,
            &NoOccupancy,
        );
        assert_eq!(map.len(), 80);
        assert!(map.seat("A10").is_some());
        assert!(map.seat("A11").is_none());
    }

    #[test]
    fn fixed_occupancy_books_exactly_the_given_seats() {
        let map = SeatMap::generate(
            &studio(StudioKind::Regular),
            &Config::default().seating,
            &FixedOccupancy::new(["A1", "B7"]),
        );
        assert_eq!(map.seat("A1").unwrap().status, SeatStatus::Booked);
        assert_eq!(map.seat("B7").unwrap().status, SeatStatus::Booked);
        assert_eq!(map.count(SeatStatus::Booked), 2);
    }

    #[test]
    fn booked_ratio_comes_from_demo_config() {
        let config = Config::default();
        assert_eq!(
            RandomOccupancy::from_config(&config.demo).booked_ratio,
            0.3
        );

        // the ratio extremes pin the knob to actual occupancy
        let all_booked = RandomOccupancy::from_config(&DemoConfig { booked_ratio: 1.0 });
        let map = SeatMap::generate(&studio(StudioKind::Regular), &config.seating, &all_booked);
        assert_eq!(map.count(SeatStatus::Booked), 96);

        let none_booked = RandomOccupancy::from_config(&DemoConfig { booked_ratio: 0.0 });
        let map = SeatMap::generate(&studio(StudioKind::Regular), &config.seating, &none_booked);
        assert_eq!(map.count(SeatStatus::Booked), 0);
    }

    #[test]
    fn generation_order_is_row_major() {
        let map = SeatMap::generate(
            &studio(StudioKind::Regular),
            &Config::default().seating,
            &NoOccupancy,
        );
        let ids: Vec<&str> = map.iter().take(13).map(|s| s.id.as_str()).collect();
        assert_eq!(ids[0], "A1");
        assert_eq!(ids[11], "A12");
        assert_eq!(ids[12], "B1");
    }
}
