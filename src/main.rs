use std::sync::Arc;

use dotenvy::dotenv;

use vehicle_maintenance::{
    clock::SystemClock, factory::VehicleFactory, models::Serviceable,
    observability::init_tracing,
};

fn main() {
    dotenv().ok();

    let environment =
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    init_tracing(&environment);

    let factory = VehicleFactory::new(Arc::new(SystemClock));
    let calliope = factory.create_calliope();

    let status = calliope.status();
    tracing::debug!(
        engine_due = status.engine_due,
        battery_due = status.battery_due,
        checked_on = %status.checked_on,
        "Calliope inspection"
    );

    if calliope.needs_service() {
        println!("The Calliope car needs service.");
    } else {
        println!("The Calliope car does not need service.");
    }
}
