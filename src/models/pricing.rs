use serde::{Deserialize, Serialize};
use std::fmt;

use super::studio::StudioKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

// One entry of the rate table: (studio kind, day type) -> unit ticket price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRule {
    pub studio_kind: StudioKind,
    pub day_type: DayType,
    pub price: f64,
}

// Lookup table over the (kind, day) pairs; reference data carries one rule per pair
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateTable {
    rules: Vec<PriceRule>,
}

impl RateTable {
    pub fn new(rules: Vec<PriceRule>) -> Self {
        RateTable { rules }
    }

    pub fn unit_price(&self, kind: StudioKind, day: DayType) -> Option<f64> {
        self.rules
            .iter()
            .find(|r| r.studio_kind == kind && r.day_type == day)
            .map(|r| r.price)
    }

    pub fn rules(&self) -> &[PriceRule] {
        &self.rules
    }
}
