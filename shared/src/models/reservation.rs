//! Reservation Model
//!
//! A reservation binds a customer to a table for a day and a time of day.
//! The day and the time are stored separately and never cross-checked.

use super::customer::Customer;
use super::dining_table::Table;
use crate::error::{DomainError, DomainResult, ErrorCode};
use crate::handle::Handle;
use crate::ids::{IdAllocator, ReservationId};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation status
///
/// Only `Confirmed` -> `Canceled` is reachable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Canceled,
    #[default]
    Confirmed,
    Completed,
    NoShow,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationStatus::Canceled => "Canceled",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::NoShow => "NoShow",
        };
        f.write_str(s)
    }
}

/// Reservation entity
#[derive(Debug)]
pub struct Reservation {
    id: ReservationId,
    customer: Handle<Customer>,
    table: Handle<Table>,
    date: NaiveDate,
    time: NaiveTime,
    people_count: u32,
    status: ReservationStatus,
}

impl Reservation {
    /// Create a confirmed reservation, consuming the next reservation id
    ///
    /// Only the calendar day of `date` is kept.
    pub fn new(
        ids: &IdAllocator,
        customer: &Handle<Customer>,
        table: &Handle<Table>,
        date: NaiveDateTime,
        time: NaiveTime,
        people_count: u32,
    ) -> Self {
        let id = ids.next_reservation_id();
        tracing::debug!(
            reservation_id = %id,
            table_id = table.read().id(),
            date = %date.date(),
            time = %time,
            people_count,
            "Reservation created"
        );
        Self {
            id,
            customer: customer.clone(),
            table: table.clone(),
            date: date.date(),
            time,
            people_count,
            status: ReservationStatus::Confirmed,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn customer(&self) -> &Handle<Customer> {
        &self.customer
    }

    pub fn table(&self) -> &Handle<Table> {
        &self.table
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn people_count(&self) -> u32 {
        self.people_count
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Move to another day; the time of day of `date` is dropped
    pub fn update_date(&mut self, date: NaiveDateTime) {
        self.date = date.date();
    }

    pub fn update_time(&mut self, time: NaiveTime) {
        self.time = time;
    }

    /// `Confirmed` -> `Canceled`
    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status != ReservationStatus::Confirmed {
            return Err(DomainError::invalid_transition(
                ErrorCode::ReservationNotConfirmed,
                format!("Reservation #{}", self.id),
                self.status,
            ));
        }
        self.status = ReservationStatus::Canceled;
        tracing::debug!(reservation_id = %self.id, "Reservation canceled");
        Ok(())
    }

    /// Human-readable detail lines
    pub fn details(&self) -> Vec<String> {
        vec![
            format!("Reservation #{}:", self.id),
            format!(
                "Date: {}, Time: {}",
                self.date.format("%Y-%m-%d"),
                self.time.format("%H:%M:%S")
            ),
            format!("Table: {}, Status: {}", self.table.read().id(), self.status),
            format!(
                "Customer: {}, People: {}",
                self.customer.read().name(),
                self.people_count
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::person::Person;

    fn fixture(ids: &IdAllocator) -> (Handle<Customer>, Handle<Table>) {
        let customer = Handle::new(Customer::new(
            ids,
            Person::new("Alice Johnson", "alice@example.com", "555"),
        ));
        let table = Handle::new(Table::new(1, 4, "A1"));
        (customer, table)
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn six_pm() -> NaiveTime {
        NaiveTime::from_hms_opt(18, 0, 0).unwrap()
    }

    #[test]
    fn test_new_reservation_is_confirmed_and_day_normalized() {
        let ids = IdAllocator::new();
        let (customer, table) = fixture(&ids);
        let r = Reservation::new(&ids, &customer, &table, at(2026, 10, 20, 14, 37), six_pm(), 4);

        assert_eq!(r.id().get(), 1);
        assert_eq!(r.status(), ReservationStatus::Confirmed);
        assert_eq!(r.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        assert_eq!(r.time(), six_pm());
        assert_eq!(r.people_count(), 4);
        assert!(r.customer().ptr_eq(&customer));
        assert!(r.table().ptr_eq(&table));
    }

    #[test]
    fn test_cancel_is_one_way() {
        let ids = IdAllocator::new();
        let (customer, table) = fixture(&ids);
        let mut r = Reservation::new(&ids, &customer, &table, at(2026, 1, 1, 0, 0), six_pm(), 2);

        r.cancel().unwrap();
        assert_eq!(r.status(), ReservationStatus::Canceled);

        let err = r.cancel().unwrap_err();
        assert_eq!(err.code(), ErrorCode::ReservationNotConfirmed);
        assert_eq!(r.status(), ReservationStatus::Canceled);
    }

    #[test]
    fn test_update_date_and_time() {
        let ids = IdAllocator::new();
        let (customer, table) = fixture(&ids);
        let mut r = Reservation::new(&ids, &customer, &table, at(2026, 1, 1, 0, 0), six_pm(), 2);

        r.update_date(at(2026, 2, 14, 23, 59));
        r.update_time(NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert_eq!(r.date(), NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
        assert_eq!(r.time(), NaiveTime::from_hms_opt(20, 30, 0).unwrap());
    }

    #[test]
    fn test_details() {
        let ids = IdAllocator::new();
        let (customer, table) = fixture(&ids);
        let r = Reservation::new(&ids, &customer, &table, at(2026, 10, 20, 9, 0), six_pm(), 4);

        assert_eq!(
            r.details(),
            vec![
                "Reservation #1:".to_string(),
                "Date: 2026-10-20, Time: 18:00:00".to_string(),
                "Table: 1, Status: Confirmed".to_string(),
                "Customer: Alice Johnson, People: 4".to_string(),
            ]
        );
    }

    #[test]
    fn test_reservation_ids_are_sequential() {
        let ids = IdAllocator::new();
        let (customer, table) = fixture(&ids);
        let got: Vec<u64> = (0..3)
            .map(|_| {
                Reservation::new(&ids, &customer, &table, at(2026, 1, 1, 0, 0), six_pm(), 1)
                    .id()
                    .get()
            })
            .collect();
        assert_eq!(got, vec![1, 2, 3]);
    }
}
