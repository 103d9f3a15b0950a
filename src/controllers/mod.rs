pub mod auth;
pub mod booking;

pub use auth::{route_for_role, RouteTarget, UserDirectory};
pub use booking::{BookingFlow, Step};
