use crate::utils::format::{fixed_point, timestamp};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// `NUMERIC(9, 6)`: at most 9 digits, 6 of them after the decimal point.
pub const COORDINATE_MAX_DIGITS: u32 = 9;
pub const COORDINATE_DECIMAL_PLACES: u32 = 6;
pub const ADDRESS_MAX_LENGTH: usize = 255;

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i64,
    #[serde(serialize_with = "fixed_point")]
    pub latitude: Decimal,
    #[serde(serialize_with = "fixed_point")]
    pub longitude: Decimal,
    pub address: String,
    #[serde(serialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// A validated location. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDraft {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub address: String,
}

/// Pads or rounds a coordinate to the column scale.
pub fn coordinate(value: Decimal) -> Decimal {
    let mut value = value;
    value.rescale(COORDINATE_DECIMAL_PLACES);
    value
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} (@ {})",
            coordinate(self.latitude),
            coordinate(self.longitude),
            self.created_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn sample() -> Location {
        Location {
            id: 7,
            latitude: Decimal::from_str("54.3233").unwrap(),
            longitude: Decimal::from_str("-10.1228").unwrap(),
            address: "Kiel".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 13, 45, 9).unwrap(),
        }
    }

    #[test]
    fn display_shows_coordinates_and_creation_time() {
        assert_eq!(sample().to_string(), "54.323300, -10.122800 (@ 2024-05-01 13:45:09)");
    }

    #[test]
    fn serializes_coordinates_as_fixed_point_strings() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["latitude"], "54.323300");
        assert_eq!(json["longitude"], "-10.122800");
        assert_eq!(json["address"], "Kiel");
        assert_eq!(json["created_at"], "2024-05-01T13:45:09.000000Z");
    }
}
