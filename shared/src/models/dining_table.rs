//! Dining Table Model
//!
//! A table owns `max_capacity` seats created up front. Table status and
//! seat occupancy are tracked independently: occupying a table does not
//! touch its seats and vice versa.

use crate::error::{DomainError, DomainResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Table status
///
/// Only `Free` and `Occupied` are reachable through [`Table::occupy`] and
/// [`Table::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Free,
    Reserved,
    Occupied,
    Other,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableStatus::Free => "Free",
            TableStatus::Reserved => "Reserved",
            TableStatus::Occupied => "Occupied",
            TableStatus::Other => "Other",
        };
        f.write_str(s)
    }
}

/// Seat type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatType {
    #[default]
    Regular,
    Kid,
    Accessible,
    Other,
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeatType::Regular => "Regular",
            SeatType::Kid => "Kid",
            SeatType::Accessible => "Accessible",
            SeatType::Other => "Other",
        };
        f.write_str(s)
    }
}

/// Seat at a table; the number is fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    number: u32,
    seat_type: SeatType,
    is_occupied: bool,
}

impl Seat {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            seat_type: SeatType::Regular,
            is_occupied: false,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn seat_type(&self) -> SeatType {
        self.seat_type
    }

    pub fn is_occupied(&self) -> bool {
        self.is_occupied
    }

    pub fn occupy(&mut self) {
        self.is_occupied = true;
        tracing::debug!(seat = self.number, "Seat occupied");
    }

    pub fn clear(&mut self) {
        self.is_occupied = false;
        tracing::debug!(seat = self.number, "Seat cleared");
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupancy = if self.is_occupied { "Occupied" } else { "Vacant" };
        write!(f, "Seat {} - {} - {}", self.number, self.seat_type, occupancy)
    }
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    id: u32,
    max_capacity: u32,
    location: String,
    status: TableStatus,
    seats: Vec<Seat>,
}

impl Table {
    /// Create a free table with seats numbered `1..=max_capacity`
    pub fn new(id: u32, max_capacity: u32, location: impl Into<String>) -> Self {
        Self {
            id,
            max_capacity,
            location: location.into(),
            status: TableStatus::Free,
            seats: (1..=max_capacity).map(Seat::new).collect(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn is_free(&self) -> bool {
        self.status == TableStatus::Free
    }

    /// `Free` -> `Occupied`
    pub fn occupy(&mut self) -> DomainResult<()> {
        if self.status != TableStatus::Free {
            return Err(DomainError::invalid_transition(
                ErrorCode::TableOccupied,
                format!("Table {}", self.id),
                self.status,
            ));
        }
        self.status = TableStatus::Occupied;
        tracing::debug!(table_id = self.id, "Table occupied");
        Ok(())
    }

    /// `Occupied` -> `Free`
    pub fn clear(&mut self) -> DomainResult<()> {
        if self.status != TableStatus::Occupied {
            return Err(DomainError::invalid_transition(
                ErrorCode::TableNotOccupied,
                format!("Table {}", self.id),
                self.status,
            ));
        }
        self.status = TableStatus::Free;
        tracing::debug!(table_id = self.id, "Table cleared");
        Ok(())
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Seat by its 1-based number
    pub fn seat(&self, number: u32) -> Option<&Seat> {
        self.seats.iter().find(|s| s.number == number)
    }

    pub fn seat_mut(&mut self, number: u32) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.number == number)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table {} - {} seats - {} - {}",
            self.id, self.max_capacity, self.location, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_has_capacity_seats() {
        let table = Table::new(1, 4, "A1");
        assert_eq!(table.status(), TableStatus::Free);
        assert_eq!(table.seats().len(), 4);
        let numbers: Vec<u32> = table.seats().iter().map(Seat::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(table.seats().iter().all(|s| !s.is_occupied()));
    }

    #[test]
    fn test_occupy_twice_stays_occupied() {
        let mut table = Table::new(1, 2, "A1");
        table.occupy().unwrap();
        let err = table.occupy().unwrap_err();
        assert_eq!(err.code(), ErrorCode::TableOccupied);
        assert_eq!(table.status(), TableStatus::Occupied);
    }

    #[test]
    fn test_clear_free_table_is_noop() {
        let mut table = Table::new(1, 2, "A1");
        let err = table.clear().unwrap_err();
        assert_eq!(err.code(), ErrorCode::TableNotOccupied);
        assert_eq!(table.status(), TableStatus::Free);
    }

    #[test]
    fn test_occupy_clear_cycle() {
        let mut table = Table::new(3, 2, "Patio");
        table.occupy().unwrap();
        assert!(!table.is_free());
        table.clear().unwrap();
        assert!(table.is_free());
        table.occupy().unwrap();
        assert_eq!(table.status(), TableStatus::Occupied);
    }

    #[test]
    fn test_seats_are_independent_of_table_status() {
        let mut table = Table::new(1, 3, "A1");
        table.occupy().unwrap();
        assert!(table.seats().iter().all(|s| !s.is_occupied()));

        table.seat_mut(2).unwrap().occupy();
        table.clear().unwrap();
        assert!(table.seat(2).unwrap().is_occupied());
        assert!(table.seat(9).is_none());
    }

    #[test]
    fn test_seat_display() {
        let mut seat = Seat::new(1);
        assert_eq!(seat.to_string(), "Seat 1 - Regular - Vacant");
        seat.occupy();
        assert_eq!(seat.to_string(), "Seat 1 - Regular - Occupied");
        seat.clear();
        assert!(!seat.is_occupied());
    }

    #[test]
    fn test_zero_capacity_table() {
        let table = Table::new(9, 0, "Bar");
        assert!(table.seats().is_empty());
    }
}
