pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod seatmap;

pub use catalog::{Catalog, InMemoryCatalog};
pub use config::Config;
pub use controllers::auth::{route_for_role, RouteTarget, UserDirectory};
pub use controllers::booking::{BookingFlow, Step};
pub use error::{Error, Result};
pub use seatmap::{FixedOccupancy, NoOccupancy, OccupancySource, RandomOccupancy, SeatMap};
