use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::movie::Movie;
use super::schedule::Schedule;
use super::seat::Seat;
use super::studio::Studio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Non-Cash")]
    NonCash,
}

// One issued ticket. Produced at booking completion, never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub schedule_id: i64,
    pub seat: Seat,
    pub price: f64,
    pub payment_method: PaymentMethod,
    pub purchased_at: DateTime<Utc>,
}

// The booking-result payload handed to the confirmation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSummary {
    pub movie: Movie,
    pub schedule: Schedule,
    pub studio: Studio,
    pub seats: Vec<Seat>,
    pub unit_price: f64,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub tickets: Vec<Ticket>,
}

impl BookingSummary {
    // Navigation-state payload, same keys the confirmation view expects
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "movie": self.movie,
            "schedule": self.schedule,
            "studio": self.studio,
            "seats": self.seats,
            "totalPrice": self.total_price,
            "paymentMethod": self.payment_method,
        })
    }
}
