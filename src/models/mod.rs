pub mod movie;
pub mod pricing;
pub mod schedule;
pub mod seat;
pub mod studio;
pub mod ticket;
pub mod user;

pub use movie::Movie;
pub use pricing::{DayType, PriceRule, RateTable};
pub use schedule::Schedule;
pub use seat::{Seat, SeatStatus};
pub use studio::{Studio, StudioKind};
pub use ticket::{BookingSummary, PaymentMethod, Ticket};
pub use user::{Role, User};
