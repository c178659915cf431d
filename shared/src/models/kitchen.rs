//! Kitchen Model

use super::employee::Chef;
use crate::error::{DomainError, DomainResult, ErrorCode};
use crate::handle::{Handle, remove_by_identity};

/// Kitchen staff roster
#[derive(Debug, Default)]
pub struct Kitchen {
    chefs: Vec<Handle<Chef>>,
}

impl Kitchen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chef(&mut self, chef: Handle<Chef>) {
        tracing::debug!(chef = %chef.read().name(), "Chef added to kitchen");
        self.chefs.push(chef);
    }

    pub fn remove_chef(&mut self, chef: &Handle<Chef>) -> DomainResult<()> {
        if !remove_by_identity(&mut self.chefs, chef) {
            return Err(DomainError::not_found(
                ErrorCode::StaffNotFound,
                format!("{} in the kitchen staff", chef.read().name()),
            ));
        }
        tracing::debug!(chef = %chef.read().name(), "Chef removed from kitchen");
        Ok(())
    }

    pub fn chefs(&self) -> &[Handle<Chef>] {
        &self.chefs
    }
}
