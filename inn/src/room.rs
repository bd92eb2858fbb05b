//! Room catalog types.
//!
//! Rooms are immutable reference data: the booking engine reads them but
//! never changes them. Catalog rows are maintained out of band, typically
//! by importing a CSV file with [`read_catalog_csv`].

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error type for invalid field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A bookable room.
///
/// # Examples
///
/// ```
/// use inn::Room;
/// use rust_decimal::Decimal;
///
/// let room = Room::builder("AOB", "Abscond or bolster")
///     .beds(2, "Queen")
///     .max_occupancy(4)
///     .base_rate(Decimal::new(175, 0))
///     .decor("traditional")
///     .build()
///     .unwrap();
///
/// assert_eq!(room.code(), "AOB");
/// assert_eq!(room.max_occupancy(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    code: String,
    name: String,
    bed_count: u32,
    bed_type: String,
    max_occupancy: u32,
    base_rate: Decimal,
    decor: String,
}

impl Room {
    /// Creates a new room builder.
    #[must_use]
    pub fn builder(code: impl Into<String>, name: impl Into<String>) -> RoomBuilder {
        RoomBuilder {
            code: code.into(),
            name: name.into(),
            bed_count: 1,
            bed_type: String::new(),
            max_occupancy: 1,
            base_rate: Decimal::ZERO,
            decor: String::new(),
        }
    }

    /// Returns the unique room code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of beds.
    #[must_use]
    pub const fn bed_count(&self) -> u32 {
        self.bed_count
    }

    /// Returns the bed type (e.g. `King`, `Queen`, `Double`).
    #[must_use]
    pub fn bed_type(&self) -> &str {
        &self.bed_type
    }

    /// Returns the maximum number of guests.
    #[must_use]
    pub const fn max_occupancy(&self) -> u32 {
        self.max_occupancy
    }

    /// Returns the base nightly rate.
    #[must_use]
    pub const fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    /// Returns the decor tag.
    #[must_use]
    pub fn decor(&self) -> &str {
        &self.decor
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} {}, up to {}, {}/night)",
            self.code, self.name, self.bed_count, self.bed_type, self.max_occupancy, self.base_rate
        )
    }
}

/// Builder for [`Room`] values.
#[derive(Debug, Clone)]
pub struct RoomBuilder {
    code: String,
    name: String,
    bed_count: u32,
    bed_type: String,
    max_occupancy: u32,
    base_rate: Decimal,
    decor: String,
}

impl RoomBuilder {
    /// Sets the bed count and bed type.
    #[must_use]
    pub fn beds(mut self, count: u32, bed_type: impl Into<String>) -> Self {
        self.bed_count = count;
        self.bed_type = bed_type.into();
        self
    }

    /// Sets the maximum occupancy.
    #[must_use]
    pub const fn max_occupancy(mut self, max_occupancy: u32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    /// Sets the base nightly rate.
    #[must_use]
    pub const fn base_rate(mut self, rate: Decimal) -> Self {
        self.base_rate = rate;
        self
    }

    /// Sets the decor tag.
    #[must_use]
    pub fn decor(mut self, decor: impl Into<String>) -> Self {
        self.decor = decor.into();
        self
    }

    /// Validates the fields and builds the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the code or bed type is blank, the bed count or
    /// occupancy is zero, or the base rate is negative.
    pub fn build(self) -> Result<Room, ValidationError> {
        let code = self.code.trim().to_string();
        if code.is_empty() {
            return Err(ValidationError::new("code", "room code must be non-empty"));
        }
        let bed_type = self.bed_type.trim().to_string();
        if bed_type.is_empty() {
            return Err(ValidationError::new("bed_type", "bed type must be non-empty"));
        }
        if self.bed_count == 0 {
            return Err(ValidationError::new("bed_count", "a room needs at least one bed"));
        }
        if self.max_occupancy == 0 {
            return Err(ValidationError::new(
                "max_occupancy",
                "maximum occupancy must be at least 1",
            ));
        }
        if self.base_rate.is_sign_negative() && !self.base_rate.is_zero() {
            return Err(ValidationError::new(
                "base_rate",
                format!("base rate {} must not be negative", self.base_rate),
            ));
        }

        Ok(Room {
            code,
            name: self.name,
            bed_count: self.bed_count,
            bed_type,
            max_occupancy: self.max_occupancy,
            base_rate: self.base_rate,
            decor: self.decor,
        })
    }
}

/// A wildcard-capable filter value.
///
/// `Any` places no constraint on the field; `Only` requires an exact,
/// case-sensitive match.
///
/// # Examples
///
/// ```
/// use inn::Filter;
///
/// let any: Filter = "Any".parse().unwrap();
/// assert!(any.matches("Queen"));
///
/// let king: Filter = "King".parse().unwrap();
/// assert!(king.matches("King"));
/// assert!(!king.matches("king"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Matches every value.
    #[default]
    Any,
    /// Matches exactly this value.
    Only(String),
}

impl Filter {
    /// Returns true if `value` satisfies the filter.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Returns true for the wildcard.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            Ok(Self::Any)
        } else {
            Ok(Self::Only(trimmed.to_string()))
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

/// One catalog row as it appears in an import file.
///
/// Column names follow the store schema.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(rename = "RoomCode")]
    code: String,
    #[serde(rename = "RoomName")]
    name: String,
    #[serde(rename = "Beds")]
    beds: u32,
    #[serde(rename = "bedType")]
    bed_type: String,
    #[serde(rename = "maxOcc")]
    max_occupancy: u32,
    #[serde(rename = "basePrice")]
    base_price: Decimal,
    #[serde(rename = "decor")]
    decor: String,
}

/// Reads a room catalog from CSV with a header row
/// `RoomCode,RoomName,Beds,bedType,maxOcc,basePrice,decor`.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or any row fails validation.
///
/// # Examples
///
/// ```
/// let data = "RoomCode,RoomName,Beds,bedType,maxOcc,basePrice,decor\n\
///             HBB,Harbinger but bequest,1,Queen,2,100,modern\n";
/// let rooms = inn::read_catalog_csv(data.as_bytes()).unwrap();
/// assert_eq!(rooms[0].code(), "HBB");
/// ```
pub fn read_catalog_csv<R: Read>(reader: R) -> crate::Result<Vec<Room>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rooms = Vec::new();
    for record in csv_reader.deserialize() {
        let record: CatalogRecord = record?;
        let room = Room::builder(record.code, record.name)
            .beds(record.beds, record.bed_type)
            .max_occupancy(record.max_occupancy)
            .base_rate(record.base_price)
            .decor(record.decor)
            .build()?;
        rooms.push(room);
    }
    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queen(code: &str) -> RoomBuilder {
        Room::builder(code, "Test room")
            .beds(1, "Queen")
            .max_occupancy(2)
            .base_rate(Decimal::new(100, 0))
    }

    #[test]
    fn test_builder_trims_code() {
        let room = queen("  A1 ").build().unwrap();
        assert_eq!(room.code(), "A1");
    }

    #[test]
    fn test_builder_rejects_blank_code() {
        let err = queen("   ").build().unwrap_err();
        assert_eq!(err.field, "code");
    }

    #[test]
    fn test_builder_rejects_zero_occupancy() {
        let err = queen("A1").max_occupancy(0).build().unwrap_err();
        assert_eq!(err.field, "max_occupancy");
    }

    #[test]
    fn test_builder_rejects_negative_rate() {
        let err = queen("A1").base_rate(Decimal::new(-1, 0)).build().unwrap_err();
        assert_eq!(err.field, "base_rate");
    }

    #[test]
    fn test_builder_accepts_free_room() {
        let room = queen("A1").base_rate(Decimal::ZERO).build().unwrap();
        assert!(room.base_rate().is_zero());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("any".parse::<Filter>().unwrap(), Filter::Any);
        assert_eq!("ANY".parse::<Filter>().unwrap(), Filter::Any);
        assert_eq!("".parse::<Filter>().unwrap(), Filter::Any);
        assert_eq!(
            " King ".parse::<Filter>().unwrap(),
            Filter::Only("King".into())
        );
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::Any.to_string(), "Any");
        assert_eq!(Filter::Only("RND".into()).to_string(), "RND");
    }

    #[test]
    fn test_read_catalog_csv() {
        let data = "RoomCode,RoomName,Beds,bedType,maxOcc,basePrice,decor\n\
                    AOB,Abscond or bolster,2,Queen,4,175,traditional\n\
                    CAS,Convoke and sanguine,2,King,4,175.50,traditional\n";
        let rooms = read_catalog_csv(data.as_bytes()).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1].bed_type(), "King");
        assert_eq!(rooms[1].base_rate(), Decimal::new(17550, 2));
    }

    #[test]
    fn test_read_catalog_csv_rejects_invalid_row() {
        let data = "RoomCode,RoomName,Beds,bedType,maxOcc,basePrice,decor\n\
                    AOB,Abscond or bolster,2,Queen,0,175,traditional\n";
        let err = read_catalog_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, crate::Error::Validation { .. }));
    }
}
