use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::clock::{Clock, SystemClock};
use crate::error::AppError;
use crate::models::{CarPart, PartKind, Vehicle};

/// The preset configurations the factory knows how to assemble.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleModel {
    Calliope,
    Glissade,
    Palindrome,
    Rorschach,
    Thovex,
}

impl VehicleModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calliope => "Calliope",
            Self::Glissade => "Glissade",
            Self::Palindrome => "Palindrome",
            Self::Rorschach => "Rorschach",
            Self::Thovex => "Thovex",
        }
    }
}

impl fmt::Display for VehicleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleModel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "calliope" => Ok(Self::Calliope),
            "glissade" => Ok(Self::Glissade),
            "palindrome" => Ok(Self::Palindrome),
            "rorschach" => Ok(Self::Rorschach),
            "thovex" => Ok(Self::Thovex),
            _ => Err(AppError::UnknownModel(s.to_string())),
        }
    }
}

/// Assembles the named vehicle configurations, every part freshly serviced
/// on the day of construction. Vehicles own their parts exclusively; no
/// state is shared between two vehicles built by the same factory.
#[derive(Debug, Clone)]
pub struct VehicleFactory {
    clock: Arc<dyn Clock>,
}

impl VehicleFactory {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn create_calliope(&self) -> Vehicle {
        self.assemble(VehicleModel::Calliope, PartKind::Capulet, PartKind::Spindler)
    }

    pub fn create_glissade(&self) -> Vehicle {
        self.assemble(
            VehicleModel::Glissade,
            PartKind::Willoughby,
            PartKind::Spindler,
        )
    }

    pub fn create_palindrome(&self, warning_light_on: bool) -> Vehicle {
        self.assemble(
            VehicleModel::Palindrome,
            PartKind::Sternman { warning_light_on },
            PartKind::Spindler,
        )
    }

    pub fn create_rorschach(&self) -> Vehicle {
        self.assemble(
            VehicleModel::Rorschach,
            PartKind::Willoughby,
            PartKind::Nubbin,
        )
    }

    pub fn create_thovex(&self) -> Vehicle {
        self.assemble(VehicleModel::Thovex, PartKind::Capulet, PartKind::Nubbin)
    }

    #[instrument(skip(self))]
    fn assemble(&self, model: VehicleModel, engine: PartKind, battery: PartKind) -> Vehicle {
        let engine = CarPart::serviced_today(engine, Arc::clone(&self.clock));
        let battery = CarPart::serviced_today(battery, Arc::clone(&self.clock));

        tracing::debug!(model = %model, "Assembled vehicle");

        Vehicle::new(engine, battery)
    }
}

impl Default for VehicleFactory {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{PartCategory, Serviceable};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn factory_at(today: NaiveDate) -> (Arc<FixedClock>, VehicleFactory) {
        let clock = Arc::new(FixedClock::new(today));
        let factory = VehicleFactory::new(clock.clone());
        (clock, factory)
    }

    #[test]
    fn fresh_vehicles_do_not_need_service() {
        let (_, factory) = factory_at(date(2024, 1, 1));

        assert!(!factory.create_calliope().needs_service());
        assert!(!factory.create_glissade().needs_service());
        assert!(!factory.create_rorschach().needs_service());
        assert!(!factory.create_thovex().needs_service());
    }

    #[test]
    fn palindrome_with_warning_light_is_due_at_once() {
        let (_, factory) = factory_at(date(2024, 1, 1));

        assert!(factory.create_palindrome(true).needs_service());
        assert!(!factory.create_palindrome(false).needs_service());
    }

    #[test]
    fn configurations_pair_the_expected_parts() {
        let (_, factory) = factory_at(date(2024, 1, 1));

        let calliope = factory.create_calliope();
        assert_eq!(calliope.engine().kind(), PartKind::Capulet);
        assert_eq!(calliope.battery().kind(), PartKind::Spindler);

        let rorschach = factory.create_rorschach();
        assert_eq!(rorschach.engine().kind(), PartKind::Willoughby);
        assert_eq!(rorschach.battery().kind(), PartKind::Nubbin);

        let thovex = factory.create_thovex();
        assert_eq!(thovex.engine().kind().category(), PartCategory::Engine);
        assert_eq!(thovex.battery().kind(), PartKind::Nubbin);
    }

    #[test]
    fn vehicles_from_the_same_factory_are_independent() {
        let start = date(2024, 1, 1);
        let (clock, factory) = factory_at(start);

        let older = factory.create_calliope();
        clock.set(start + chrono::TimeDelta::days(40_000));
        let newer = factory.create_calliope();

        // The first vehicle aged past the Capulet interval; the second was
        // just built. Neither query affects the other.
        assert!(older.needs_service());
        assert!(!newer.needs_service());
    }

    #[test]
    fn model_names_round_trip_through_parsing() {
        assert_eq!(
            "calliope".parse::<VehicleModel>().unwrap(),
            VehicleModel::Calliope
        );
        assert_eq!(
            "Palindrome".parse::<VehicleModel>().unwrap(),
            VehicleModel::Palindrome
        );
        assert_eq!(VehicleModel::Thovex.to_string(), "Thovex");
    }

    #[test]
    fn unknown_model_names_are_rejected() {
        let err = "edsel".parse::<VehicleModel>().unwrap_err();
        assert!(matches!(err, AppError::UnknownModel(ref name) if name == "edsel"));
        assert_eq!(err.to_string(), "Unknown vehicle model: edsel");
    }
}
