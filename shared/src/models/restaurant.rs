//! Restaurant Model (aggregate root)

use super::branch::Branch;
use super::customer::Customer;
use super::person::Person;
use crate::handle::Handle;
use crate::ids::IdAllocator;

/// Aggregate root: owns the branches and the id allocator
#[derive(Debug, Default)]
pub struct Restaurant {
    ids: IdAllocator,
    branches: Vec<Branch>,
}

impl Restaurant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id source for customers, orders and reservations
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Register a new customer under the next customer id
    pub fn new_customer(&self, person: Person) -> Handle<Customer> {
        Handle::new(Customer::new(&self.ids, person))
    }

    pub fn add_branch(&mut self, branch: Branch) -> &mut Branch {
        tracing::info!(branch = %branch.name(), "Branch added");
        self.branches.push(branch);
        let last = self.branches.len() - 1;
        &mut self.branches[last]
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// First branch with the given name
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name() == name)
    }

    pub fn branch_mut(&mut self, name: &str) -> Option<&mut Branch> {
        self.branches.iter_mut().find(|b| b.name() == name)
    }
}
