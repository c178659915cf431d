//! Branch Model

use super::address::Address;
use super::dining_table::Table;
use super::employee::Manager;
use super::kitchen::Kitchen;
use super::reservation::Reservation;
use crate::error::{DomainError, DomainResult, ErrorCode};
use crate::handle::{Handle, contains_identity, remove_by_identity};
use std::fmt;

/// A physical restaurant location
///
/// The manager slot is write-once: the first assignment sticks.
#[derive(Debug)]
pub struct Branch {
    name: String,
    location: Address,
    manager: Option<Handle<Manager>>,
    kitchen: Kitchen,
    tables: Vec<Handle<Table>>,
    reservations: Vec<Handle<Reservation>>,
}

impl Branch {
    pub fn new(name: impl Into<String>, location: Address) -> Self {
        Self {
            name: name.into(),
            location,
            manager: None,
            kitchen: Kitchen::new(),
            tables: Vec::new(),
            reservations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Address {
        &self.location
    }

    pub fn assign_manager(&mut self, manager: Handle<Manager>) -> DomainResult<()> {
        if self.manager.is_some() {
            return Err(DomainError::ManagerAlreadyAssigned {
                branch: self.name.clone(),
            });
        }
        tracing::info!(branch = %self.name, manager = %manager.read().name(), "Manager assigned");
        self.manager = Some(manager);
        Ok(())
    }

    pub fn manager(&self) -> Option<&Handle<Manager>> {
        self.manager.as_ref()
    }

    pub fn kitchen(&self) -> &Kitchen {
        &self.kitchen
    }

    pub fn kitchen_mut(&mut self) -> &mut Kitchen {
        &mut self.kitchen
    }

    /// Add a table unless this exact table is already present
    pub fn add_table(&mut self, table: Handle<Table>) -> DomainResult<()> {
        if contains_identity(&self.tables, &table) {
            return Err(DomainError::already_exists(
                ErrorCode::TableAlreadyExists,
                format!("Table {} in {} branch", table.read().id(), self.name),
            ));
        }
        tracing::debug!(branch = %self.name, table_id = table.read().id(), "Table added");
        self.tables.push(table);
        Ok(())
    }

    pub fn tables(&self) -> &[Handle<Table>] {
        &self.tables
    }

    pub fn add_reservation(&mut self, reservation: Handle<Reservation>) {
        tracing::debug!(
            branch = %self.name,
            reservation_id = %reservation.read().id(),
            "Reservation added"
        );
        self.reservations.push(reservation);
    }

    pub fn remove_reservation(&mut self, reservation: &Handle<Reservation>) -> DomainResult<()> {
        if !remove_by_identity(&mut self.reservations, reservation) {
            return Err(DomainError::not_found(
                ErrorCode::ReservationNotFound,
                format!("Reservation #{} in {} branch", reservation.read().id(), self.name),
            ));
        }
        tracing::debug!(
            branch = %self.name,
            reservation_id = %reservation.read().id(),
            "Reservation removed"
        );
        Ok(())
    }

    pub fn reservations(&self) -> &[Handle<Reservation>] {
        &self.reservations
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Branch: {}, Location: {}", self.name, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdAllocator;
    use crate::models::customer::Customer;
    use crate::models::person::Person;
    use chrono::{NaiveDate, NaiveTime};

    fn branch() -> Branch {
        Branch::new(
            "Main Branch",
            Address::new("123 Main St", "Cityville", "CA", "12345", "Countryland"),
        )
    }

    fn manager(name: &str) -> Handle<Manager> {
        Handle::new(Manager::new(
            Person::new(name, "m@example.com", "123"),
            "123-45-6789",
        ))
    }

    #[test]
    fn test_first_manager_wins() {
        let mut branch = branch();
        let john = manager("John Doe");
        let mary = manager("Mary Major");

        branch.assign_manager(john.clone()).unwrap();
        let err = branch.assign_manager(mary).unwrap_err();

        assert_eq!(err.code(), ErrorCode::ManagerAlreadyAssigned);
        assert!(branch.manager().unwrap().ptr_eq(&john));
    }

    #[test]
    fn test_add_table_rejects_same_table() {
        let mut branch = branch();
        let table = Handle::new(Table::new(1, 4, "A1"));
        let twin = Handle::new(Table::new(1, 4, "A1"));

        branch.add_table(table.clone()).unwrap();
        let err = branch.add_table(table).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TableAlreadyExists);

        branch.add_table(twin).unwrap();
        assert_eq!(branch.tables().len(), 2);
    }

    #[test]
    fn test_reservations() {
        let ids = IdAllocator::new();
        let mut branch = branch();
        let customer = Handle::new(Customer::new(&ids, Person::new("Alice", "a@example.com", "5")));
        let table = Handle::new(Table::new(1, 4, "A1"));
        let date = NaiveDate::from_ymd_opt(2026, 10, 20)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let reservation = Handle::new(Reservation::new(&ids, &customer, &table, date, time, 4));

        branch.add_reservation(reservation.clone());
        assert_eq!(branch.reservations().len(), 1);

        branch.remove_reservation(&reservation).unwrap();
        assert!(branch.reservations().is_empty());

        let err = branch.remove_reservation(&reservation).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ReservationNotFound);
    }

    #[test]
    fn test_branch_display() {
        assert_eq!(
            branch().to_string(),
            "Branch: Main Branch, Location: 123 Main St, Cityville, CA 12345, Countryland"
        );
    }
}
