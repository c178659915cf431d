//! Customer Model

use super::order::Order;
use super::person::{Person, Role};
use crate::handle::Handle;
use crate::ids::{CustomerId, IdAllocator};
use std::fmt;

/// Customer with a sequential id and the orders placed under it
#[derive(Debug)]
pub struct Customer {
    pub person: Person,
    id: CustomerId,
    orders: Vec<Handle<Order>>,
}

impl Customer {
    /// Create a customer, consuming the next customer id
    pub fn new(ids: &IdAllocator, person: Person) -> Self {
        let id = ids.next_customer_id();
        tracing::debug!(customer_id = %id, name = %person.name, "Customer created");
        Self {
            person,
            id,
            orders: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn role(&self) -> Role {
        Role::Customer
    }

    /// Record an order placed for this customer
    pub fn add_order(&mut self, order: Handle<Order>) {
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Handle<Order>] {
        &self.orders
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - ID: {}", self.person.name, self.role(), self.id)
    }
}
