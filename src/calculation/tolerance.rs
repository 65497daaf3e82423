//! Geofence tolerance conversion helper.
//!
//! Check-in tolerance is configured as a human-readable string such as
//! `"250 m"` or `"1.5 km"`; comparisons happen in meters.

use rust_decimal::Decimal;

const METERS_PER_KM: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Parses a tolerance string like `"250 m"`, `"250m"`, or `"1.5 km"` into
/// meters. Returns `None` for unrecognized input.
pub fn parse_tolerance_meters(input: &str) -> Option<Decimal> {
    let trimmed = input.trim().to_ascii_lowercase();
    let (number, factor) = if let Some(stripped) = trimmed.strip_suffix("km") {
        (stripped, METERS_PER_KM)
    } else if let Some(stripped) = trimmed.strip_suffix('m') {
        (stripped, Decimal::ONE)
    } else {
        (trimmed.as_str(), Decimal::ONE)
    };
    let value: Decimal = number.trim().parse().ok()?;
    if value < Decimal::ZERO {
        return None;
    }
    Some(value * factor)
}

/// Formats a meter distance back into a tolerance string, using kilometers
/// at or above 1000 meters.
pub fn format_tolerance(meters: Decimal) -> String {
    if meters >= METERS_PER_KM {
        format!("{} km", (meters / METERS_PER_KM).normalize())
    } else {
        format!("{} m", meters.normalize())
    }
}
