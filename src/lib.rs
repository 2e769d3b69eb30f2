pub mod clock;
pub mod error;
pub mod factory;
pub mod models;
pub mod observability;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AppError, AppResult};
pub use factory::{VehicleFactory, VehicleModel};
pub use models::{CarPart, PartCategory, PartKind, Serviceable, Vehicle, VehicleStatus};
