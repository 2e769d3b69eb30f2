use std::sync::Arc;

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Anything that can report whether it is currently due for maintenance.
pub trait Serviceable {
    fn needs_service(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PartCategory {
    Engine,
    Battery,
}

/// The replaceable part variants and their fixed interval policies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PartKind {
    Capulet,
    Willoughby,
    Sternman { warning_light_on: bool },
    Spindler,
    Nubbin,
}

impl PartKind {
    pub fn category(&self) -> PartCategory {
        match self {
            Self::Capulet | Self::Willoughby | Self::Sternman { .. } => PartCategory::Engine,
            Self::Spindler | Self::Nubbin => PartCategory::Battery,
        }
    }

    /// Service interval fixed at construction for this variant.
    ///
    /// The Capulet and Willoughby figures originate from a distance-based
    /// schedule (30,000 and 60,000) and are carried here as day counts;
    /// only the elapsed-time policy is wired into the factory.
    pub fn service_interval(&self) -> TimeDelta {
        match self {
            Self::Capulet => TimeDelta::days(30_000),
            Self::Willoughby => TimeDelta::days(60_000),
            Self::Sternman {
                warning_light_on: true,
            } => TimeDelta::zero(),
            Self::Sternman {
                warning_light_on: false,
            } => TimeDelta::days(365),
            Self::Spindler => TimeDelta::days(730),
            Self::Nubbin => TimeDelta::days(1_460),
        }
    }
}

/// A replaceable part with a last-service date and a fixed interval.
///
/// Both are set once at construction and never mutated. The clock is
/// consulted on every query, so the answer is always "as of today" and is
/// never memoized.
#[derive(Debug, Clone)]
pub struct CarPart {
    kind: PartKind,
    last_service_date: NaiveDate,
    service_interval: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl CarPart {
    /// Zero or negative intervals are legal and mean "always due".
    pub fn new(
        kind: PartKind,
        last_service_date: NaiveDate,
        service_interval: TimeDelta,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            kind,
            last_service_date,
            service_interval,
            clock,
        }
    }

    /// A part freshly serviced today, with the interval its kind dictates.
    /// This is the policy every factory configuration uses.
    pub fn serviced_today(kind: PartKind, clock: Arc<dyn Clock>) -> Self {
        let today = clock.today();
        Self::new(kind, today, kind.service_interval(), clock)
    }

    pub fn kind(&self) -> PartKind {
        self.kind
    }

    pub fn last_service_date(&self) -> NaiveDate {
        self.last_service_date
    }

    pub fn service_interval(&self) -> TimeDelta {
        self.service_interval
    }
}

impl Serviceable for CarPart {
    fn needs_service(&self) -> bool {
        let elapsed = self.clock.today() - self.last_service_date;
        elapsed >= self.service_interval
    }
}

/// One engine and one battery; due for service as soon as either part is.
#[derive(Debug, Clone)]
pub struct Vehicle {
    engine: CarPart,
    battery: CarPart,
}

impl Vehicle {
    pub fn new(engine: CarPart, battery: CarPart) -> Self {
        debug_assert_eq!(engine.kind().category(), PartCategory::Engine);
        debug_assert_eq!(battery.kind().category(), PartCategory::Battery);

        Self { engine, battery }
    }

    pub fn engine(&self) -> &CarPart {
        &self.engine
    }

    pub fn battery(&self) -> &CarPart {
        &self.battery
    }

    /// Point-in-time inspection of both parts.
    pub fn status(&self) -> VehicleStatus {
        let engine_due = self.engine.needs_service();
        let battery_due = self.battery.needs_service();

        VehicleStatus {
            engine_due,
            battery_due,
            needs_service: engine_due || battery_due,
            checked_on: self.engine.clock.today(),
        }
    }
}

impl Serviceable for Vehicle {
    fn needs_service(&self) -> bool {
        self.engine.needs_service() || self.battery.needs_service()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VehicleStatus {
    pub engine_due: bool,
    pub battery_due: bool,
    pub needs_service: bool,
    pub checked_on: NaiveDate,
}
