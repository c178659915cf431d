//! Employee Models
//!
//! Staff roles share the [`Employee`] record and add what the role needs:
//! waiters take and serve orders, chefs cook them, managers keep the
//! waiter and chef teams.

use super::customer::Customer;
use super::menu::MenuItem;
use super::order::Order;
use super::person::{Person, Role};
use crate::error::{DomainError, DomainResult, ErrorCode};
use crate::handle::{Handle, remove_by_identity};
use crate::ids::IdAllocator;
use std::fmt;

/// Employee record (contact + social security number)
#[derive(Debug, Clone)]
pub struct Employee {
    pub person: Person,
    pub ssn: Option<String>,
}

impl Employee {
    pub fn new(person: Person, ssn: Option<String>) -> Self {
        Self { person, ssn }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.person.name, Role::Employee)
    }
}

// ============================================================================
// Waiter
// ============================================================================

/// Waiter: takes orders from customers and serves them
#[derive(Debug)]
pub struct Waiter {
    pub employee: Employee,
    employee_id: String,
    orders: Vec<Handle<Order>>,
}

impl Waiter {
    pub fn new(employee_id: impl Into<String>, person: Person) -> Self {
        Self {
            employee: Employee::new(person, None),
            employee_id: employee_id.into(),
            orders: Vec::new(),
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn name(&self) -> &str {
        self.employee.name()
    }

    pub fn role(&self) -> Role {
        Role::Waiter
    }

    /// Open an order for `customer` holding every item in `items`
    ///
    /// Items are added as given: no availability or duplicate check. The
    /// new order is recorded in both this waiter's and the customer's list.
    pub fn take_order(
        &mut self,
        ids: &IdAllocator,
        customer: &Handle<Customer>,
        items: &[Handle<MenuItem>],
    ) -> Handle<Order> {
        let mut order = Order::new(ids, customer);
        for item in items {
            order.add_item(item.clone());
        }
        tracing::debug!(
            waiter = %self.name(),
            order_id = %order.id(),
            items = items.len(),
            "Order taken"
        );

        let order = Handle::new(order);
        self.orders.push(order.clone());
        customer.write().add_order(order.clone());
        order
    }

    /// Serve a prepared order (`Preparation` -> `Completed`)
    pub fn serve_order(&self, order: &Handle<Order>) -> DomainResult<()> {
        let mut order = order.write();
        order.complete()?;
        tracing::debug!(waiter = %self.name(), order_id = %order.id(), "Order served");
        Ok(())
    }

    /// Orders taken by this waiter, oldest first
    pub fn orders(&self) -> &[Handle<Order>] {
        &self.orders
    }
}

impl fmt::Display for Waiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name(), self.role())
    }
}

// ============================================================================
// Chef
// ============================================================================

/// Chef: moves received orders into preparation
#[derive(Debug)]
pub struct Chef {
    pub employee: Employee,
    employee_id: String,
}

impl Chef {
    pub fn new(employee_id: impl Into<String>, person: Person) -> Self {
        Self {
            employee: Employee::new(person, None),
            employee_id: employee_id.into(),
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn name(&self) -> &str {
        self.employee.name()
    }

    pub fn role(&self) -> Role {
        Role::Chef
    }

    /// Start cooking a received order (`Received` -> `Preparation`)
    pub fn cook_order(&self, order: &Handle<Order>) -> DomainResult<()> {
        let mut order = order.write();
        order.start_preparation()?;
        tracing::debug!(chef = %self.name(), order_id = %order.id(), "Order cooking");
        Ok(())
    }
}

impl fmt::Display for Chef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name(), self.role())
    }
}

// ============================================================================
// Manager
// ============================================================================

/// Manager: owns the waiter and chef teams of a branch
#[derive(Debug)]
pub struct Manager {
    pub employee: Employee,
    waiters: Vec<Handle<Waiter>>,
    chefs: Vec<Handle<Chef>>,
}

impl Manager {
    pub fn new(person: Person, ssn: impl Into<String>) -> Self {
        Self {
            employee: Employee::new(person, Some(ssn.into())),
            waiters: Vec::new(),
            chefs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.employee.name()
    }

    pub fn role(&self) -> Role {
        Role::Manager
    }

    pub fn add_waiter(&mut self, waiter: Handle<Waiter>) {
        tracing::debug!(manager = %self.name(), waiter = %waiter.read().name(), "Waiter joined team");
        self.waiters.push(waiter);
    }

    pub fn remove_waiter(&mut self, waiter: &Handle<Waiter>) -> DomainResult<()> {
        if !remove_by_identity(&mut self.waiters, waiter) {
            return Err(DomainError::not_found(
                ErrorCode::StaffNotFound,
                format!("{} in {}'s waiter team", waiter.read().name(), self.name()),
            ));
        }
        tracing::debug!(manager = %self.name(), waiter = %waiter.read().name(), "Waiter left team");
        Ok(())
    }

    pub fn add_chef(&mut self, chef: Handle<Chef>) {
        tracing::debug!(manager = %self.name(), chef = %chef.read().name(), "Chef joined team");
        self.chefs.push(chef);
    }

    pub fn remove_chef(&mut self, chef: &Handle<Chef>) -> DomainResult<()> {
        if !remove_by_identity(&mut self.chefs, chef) {
            return Err(DomainError::not_found(
                ErrorCode::StaffNotFound,
                format!("{} in {}'s chef team", chef.read().name(), self.name()),
            ));
        }
        tracing::debug!(manager = %self.name(), chef = %chef.read().name(), "Chef left team");
        Ok(())
    }

    pub fn waiters(&self) -> &[Handle<Waiter>] {
        &self.waiters
    }

    pub fn chefs(&self) -> &[Handle<Chef>] {
        &self.chefs
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name(), self.role())
    }
}
