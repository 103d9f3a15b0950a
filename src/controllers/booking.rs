use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{
    BookingSummary, Movie, PaymentMethod, Schedule, Seat, SeatStatus, Studio, Ticket,
};
use crate::seatmap::{OccupancySource, SeatMap};

/// The three steps of the booking wizard, linear, no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ChooseSchedule,
    SelectSeats,
    Payment,
}

// Showtime resolved for booking: studio, fresh seat map, unit price
struct ActiveSchedule {
    schedule: Schedule,
    studio: Studio,
    seats: SeatMap,
    unit_price: f64,
}

/// One user's pass through schedule pick, seat pick, payment.
///
/// All state is owned by the instance and discarded with it; nothing is
/// persisted. Blocked transitions come back as `None`, mirroring a
/// disabled continue button, and are not errors.
pub struct BookingFlow {
    catalog: Arc<dyn Catalog>,
    occupancy: Arc<dyn OccupancySource>,
    config: Config,
    step: Step,
    movie: Movie,
    available_dates: Vec<NaiveDate>,
    selected_date: Option<NaiveDate>,
    schedules: Vec<Schedule>,
    active: Option<ActiveSchedule>,
    selection: Vec<String>, // seat ids in selection order
    payment_method: PaymentMethod,
}

impl BookingFlow {
    pub fn start(
        catalog: Arc<dyn Catalog>,
        occupancy: Arc<dyn OccupancySource>,
        config: Config,
        movie_id: i64,
    ) -> Result<Self> {
        let movie = catalog
            .movie(movie_id)
            .ok_or(Error::MovieNotFound(movie_id))?;

        // Distinct dates in schedule encounter order, not sorted
        let mut available_dates: Vec<NaiveDate> = Vec::new();
        for schedule in catalog.schedules_for_movie(movie_id) {
            if !available_dates.contains(&schedule.date) {
                available_dates.push(schedule.date);
            }
        }

        let mut flow = BookingFlow {
            catalog,
            occupancy,
            config,
            step: Step::ChooseSchedule,
            movie,
            available_dates,
            selected_date: None,
            schedules: Vec::new(),
            active: None,
            selection: Vec::new(),
            payment_method: PaymentMethod::Cash,
        };

        if let Some(first) = flow.available_dates.first().copied() {
            flow.select_date(first);
        }

        tracing::debug!(movie_id, dates = flow.available_dates.len(), "booking flow started");
        Ok(flow)
    }

    /* ---------- step 1: choose schedule ---------- */

    pub fn available_dates(&self) -> &[NaiveDate] {
        &self.available_dates
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    // A date outside the available set just filters to an empty list
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.schedules = self
            .catalog
            .schedules_for_movie(self.movie.id)
            .into_iter()
            .filter(|s| s.date == date)
            .collect();
        // picking a date drops any previously resolved showtime
        self.active = None;
        self.selection.clear();
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn select_schedule(&mut self, schedule_id: i64) -> Result<()> {
        let schedule = self
            .schedules
            .iter()
            .find(|s| s.id == schedule_id)
            .cloned()
            .ok_or(Error::ScheduleNotFound(schedule_id))?;

        let studio = self
            .catalog
            .studio(schedule.studio_id)
            .ok_or(Error::StudioNotFound(schedule.studio_id))?;

        let day = schedule.day_type();
        let unit_price = self
            .catalog
            .rate_table()
            .unit_price(studio.kind, day)
            .ok_or(Error::PriceRuleMissing { kind: studio.kind, day })?;

        // fresh map every time a showtime is resolved; old selection is void
        let seats = SeatMap::generate(&studio, &self.config.seating, self.occupancy.as_ref());
        self.selection.clear();

        tracing::debug!(schedule_id, studio_id = studio.id, unit_price, "schedule selected");
        self.active = Some(ActiveSchedule { schedule, studio, seats, unit_price });
        Ok(())
    }

    /* ---------- step 2: select seats ---------- */

    pub fn seat_map(&self) -> Option<&SeatMap> {
        self.active.as_ref().map(|a| &a.seats)
    }

    // Toggle semantics: available <-> selected, booked is a no-op
    pub fn toggle_seat(&mut self, seat_id: &str) -> Result<SeatStatus> {
        let active = match self.active.as_mut() {
            Some(a) => a,
            None => return Err(Error::SeatNotFound(seat_id.to_string())),
        };
        let seat = active
            .seats
            .seat_mut(seat_id)
            .ok_or_else(|| Error::SeatNotFound(seat_id.to_string()))?;

        let status = match seat.status {
            SeatStatus::Booked => SeatStatus::Booked,
            SeatStatus::Selected => {
                seat.status = SeatStatus::Available;
                self.selection.retain(|id| id != seat_id);
                SeatStatus::Available
            }
            SeatStatus::Available => {
                seat.status = SeatStatus::Selected;
                self.selection.push(seat_id.to_string());
                SeatStatus::Selected
            }
        };
        Ok(status)
    }

    // Selection order, not grid order
    pub fn selected_seats(&self) -> Vec<&Seat> {
        let Some(active) = self.active.as_ref() else {
            return Vec::new();
        };
        self.selection
            .iter()
            .filter_map(|id| active.seats.seat(id))
            .collect()
    }

    pub fn unit_price(&self) -> f64 {
        self.active.as_ref().map(|a| a.unit_price).unwrap_or(0.0)
    }

    pub fn total_price(&self) -> f64 {
        self.selection.len() as f64 * self.unit_price()
    }

    /* ---------- step 3: payment ---------- */

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    // Booking-result payload for the confirmation layer. Nothing is
    // persisted and the seat map is left untouched.
    pub fn complete(&self) -> Option<BookingSummary> {
        if self.step != Step::Payment {
            return None;
        }
        let active = self.active.as_ref()?;
        // entering Payment required a selection; deselecting everything
        // afterwards re-disables completion instead of issuing an empty order
        if self.selection.is_empty() {
            return None;
        }

        let seats: Vec<Seat> = self
            .selection
            .iter()
            .filter_map(|id| active.seats.seat(id).cloned())
            .collect();
        let purchased_at = Utc::now();
        let tickets: Vec<Ticket> = seats
            .iter()
            .map(|seat| Ticket {
                id: Uuid::new_v4(),
                schedule_id: active.schedule.id,
                seat: seat.clone(),
                price: active.unit_price,
                payment_method: self.payment_method,
                purchased_at,
            })
            .collect();

        let total_price = self.total_price();
        tracing::info!(
            movie = %self.movie.title,
            schedule_id = active.schedule.id,
            seats = seats.len(),
            total_price,
            "booking completed"
        );

        Some(BookingSummary {
            movie: self.movie.clone(),
            schedule: active.schedule.clone(),
            studio: active.studio.clone(),
            seats,
            unit_price: active.unit_price,
            total_price,
            payment_method: self.payment_method,
            tickets,
        })
    }

    /* ---------- step gating ---------- */

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.active.as_ref().map(|a| &a.schedule)
    }

    pub fn studio(&self) -> Option<&Studio> {
        self.active.as_ref().map(|a| &a.studio)
    }

    pub fn step(&self) -> Step {
        self.step
    }

    // The "continue" affordance; false means the button is disabled
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::ChooseSchedule => self.active.is_some(),
            Step::SelectSeats => !self.selection.is_empty(),
            Step::Payment => false, // payment ends with complete(), not advance()
        }
    }

    pub fn advance(&mut self) -> Option<Step> {
        let next = match self.step {
            Step::ChooseSchedule if self.active.is_some() => Step::SelectSeats,
            Step::SelectSeats if !self.selection.is_empty() => Step::Payment,
            _ => return None,
        };
        self.step = next;
        tracing::debug!(step = ?next, "booking step advanced");
        Some(next)
    }

    // One step back, keeping what was already captured at that step
    pub fn back(&mut self) -> Option<Step> {
        let prev = match self.step {
            Step::ChooseSchedule => return None,
            Step::SelectSeats => Step::ChooseSchedule,
            Step::Payment => Step::SelectSeats,
        };
        self.step = prev;
        Some(prev)
    }
}
