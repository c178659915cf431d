//! Person Model
//!
//! Every human in the model carries the same contact record ([`Person`]).
//! What they do is decided by the role payload wrapping it: [`Customer`],
//! [`Employee`], [`Waiter`], [`Chef`] or [`Manager`]. [`Member`] tags a
//! handle to any of them when code needs to treat people uniformly.

use super::address::Address;
use super::customer::Customer;
use super::employee::{Chef, Employee, Manager, Waiter};
use crate::handle::Handle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contact record shared by all roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub address: Option<Address>,
    pub email: String,
    pub phone: String,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }
}

/// Role tag, fixed per payload type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Employee,
    Waiter,
    Chef,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Employee => "Employee",
            Role::Waiter => "Waiter",
            Role::Chef => "Chef",
            Role::Manager => "Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any person in the restaurant, tagged by role
#[derive(Debug, Clone)]
pub enum Member {
    Customer(Handle<Customer>),
    Employee(Handle<Employee>),
    Waiter(Handle<Waiter>),
    Chef(Handle<Chef>),
    Manager(Handle<Manager>),
}

impl Member {
    pub fn role(&self) -> Role {
        match self {
            Member::Customer(_) => Role::Customer,
            Member::Employee(_) => Role::Employee,
            Member::Waiter(_) => Role::Waiter,
            Member::Chef(_) => Role::Chef,
            Member::Manager(_) => Role::Manager,
        }
    }

    /// Copy of the contact record
    pub fn person(&self) -> Person {
        match self {
            Member::Customer(h) => h.read().person.clone(),
            Member::Employee(h) => h.read().person.clone(),
            Member::Waiter(h) => h.read().employee.person.clone(),
            Member::Chef(h) => h.read().employee.person.clone(),
            Member::Manager(h) => h.read().employee.person.clone(),
        }
    }

    pub fn name(&self) -> String {
        self.person().name
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Customer(h) => fmt::Display::fmt(&*h.read(), f),
            Member::Employee(h) => fmt::Display::fmt(&*h.read(), f),
            Member::Waiter(h) => fmt::Display::fmt(&*h.read(), f),
            Member::Chef(h) => fmt::Display::fmt(&*h.read(), f),
            Member::Manager(h) => fmt::Display::fmt(&*h.read(), f),
        }
    }
}

impl From<Handle<Customer>> for Member {
    fn from(h: Handle<Customer>) -> Self {
        Member::Customer(h)
    }
}

impl From<Handle<Employee>> for Member {
    fn from(h: Handle<Employee>) -> Self {
        Member::Employee(h)
    }
}

impl From<Handle<Waiter>> for Member {
    fn from(h: Handle<Waiter>) -> Self {
        Member::Waiter(h)
    }
}

impl From<Handle<Chef>> for Member {
    fn from(h: Handle<Chef>) -> Self {
        Member::Chef(h)
    }
}

impl From<Handle<Manager>> for Member {
    fn from(h: Handle<Manager>) -> Self {
        Member::Manager(h)
    }
}
