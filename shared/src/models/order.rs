//! Order Model
//!
//! Status flow: `Received` -> `Preparation` (chef cooks) -> `Completed`
//! (waiter serves). `Canceled` and `None` are declared but no operation
//! reaches them.

use super::customer::Customer;
use super::menu::MenuItem;
use crate::error::{DomainError, DomainResult, ErrorCode};
use crate::handle::{Handle, WeakHandle};
use crate::ids::{CustomerId, IdAllocator, OrderId};
use crate::money::{format_currency, sum_prices};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Received,
    Preparation,
    Completed,
    Canceled,
    None,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Received => "Received",
            OrderStatus::Preparation => "Preparation",
            OrderStatus::Completed => "Completed",
            OrderStatus::Canceled => "Canceled",
            OrderStatus::None => "None",
        };
        f.write_str(s)
    }
}

/// Payment status (declared; no operation sets it yet)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Completed,
    Filled,
    Declined,
    Cancelled,
    Abandoned,
    Refunded,
}

/// Order entity
///
/// Items are held by handle, so [`Order::calculate_total`] always reflects
/// the current menu prices.
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    customer: WeakHandle<Customer>,
    items: Vec<Handle<MenuItem>>,
    status: OrderStatus,
}

impl Order {
    /// Create an empty order in `Received`, consuming the next order id
    ///
    /// The order is not added to the customer's list; use
    /// [`Waiter::take_order`](super::employee::Waiter::take_order) for that.
    pub fn new(ids: &IdAllocator, customer: &Handle<Customer>) -> Self {
        let id = ids.next_order_id();
        let customer_id = customer.read().id();
        tracing::debug!(order_id = %id, customer_id = %customer_id, "Order created");
        Self {
            id,
            customer_id,
            customer: customer.downgrade(),
            items: Vec::new(),
            status: OrderStatus::Received,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// The customer, if still alive
    pub fn customer(&self) -> Option<Handle<Customer>> {
        self.customer.upgrade()
    }

    pub fn add_item(&mut self, item: Handle<MenuItem>) {
        tracing::debug!(order_id = %self.id, item = %item.read().name, "Item added to order");
        self.items.push(item);
    }

    pub fn items(&self) -> &[Handle<MenuItem>] {
        &self.items
    }

    /// Sum of the current prices of every listed item
    pub fn calculate_total(&self) -> Decimal {
        sum_prices(self.items.iter().map(|item| item.read().price()))
    }

    /// `Received` -> `Preparation`
    pub(crate) fn start_preparation(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Received {
            return Err(DomainError::invalid_transition(
                ErrorCode::OrderNotReceived,
                format!("Order #{}", self.id),
                self.status,
            ));
        }
        self.status = OrderStatus::Preparation;
        Ok(())
    }

    /// `Preparation` -> `Completed`
    pub(crate) fn complete(&mut self) -> DomainResult<()> {
        if self.status != OrderStatus::Preparation {
            return Err(DomainError::invalid_transition(
                ErrorCode::OrderNotReady,
                format!("Order #{}", self.id),
                self.status,
            ));
        }
        self.status = OrderStatus::Completed;
        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order #{} - Status: {}, Total: {}",
            self.id,
            self.status,
            format_currency(self.calculate_total(), "$")
        )
    }
}
