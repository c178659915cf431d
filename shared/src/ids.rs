//! Identifier allocation
//!
//! Customers, orders and reservations get sequential numeric ids from an
//! [`IdAllocator`] owned by the [`Restaurant`](crate::models::Restaurant).
//! Each kind has its own counter starting at 1. Counters are atomic, so the
//! allocator can be shared across threads without handing out duplicates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Raw numeric value
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

sequential_id!(
    /// Customer number, assigned once at construction
    CustomerId
);
sequential_id!(
    /// Order number, assigned once at construction
    OrderId
);
sequential_id!(
    /// Reservation number, assigned once at construction
    ReservationId
);

/// Monotonic id source for every numbered entity kind
#[derive(Debug)]
pub struct IdAllocator {
    customer: AtomicU64,
    order: AtomicU64,
    reservation: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            customer: AtomicU64::new(1),
            order: AtomicU64::new(1),
            reservation: AtomicU64::new(1),
        }
    }

    pub fn next_customer_id(&self) -> CustomerId {
        CustomerId(self.customer.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_order_id(&self) -> OrderId {
        OrderId(self.order.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_reservation_id(&self) -> ReservationId {
        ReservationId(self.reservation.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
