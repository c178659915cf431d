//! Serializable read models
//!
//! Plain snapshots of live entities, safe to hand to serde. Building a view
//! reads the current state, so prices and statuses are as of the call.

use crate::handle::Handle;
use crate::ids::{CustomerId, OrderId, ReservationId};
use crate::models::{
    Branch, Manager, Member, MenuItem, Order, OrderStatus, Reservation, ReservationStatus, Role,
    Table, TableStatus,
};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// Menu item snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuItemView {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub is_available: bool,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id(),
            name: item.name.clone(),
            category: item.category.clone(),
            price: item.price(),
            is_available: item.is_available(),
        }
    }
}

/// Order snapshot with its total at build time
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderView {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub items: Vec<MenuItemView>,
    pub total: Decimal,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id(),
            customer_id: order.customer_id(),
            status: order.status(),
            items: order
                .items()
                .iter()
                .map(|item| MenuItemView::from(&*item.read()))
                .collect(),
            total: order.calculate_total(),
        }
    }
}

/// Reservation snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReservationView {
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub table_id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub people_count: u32,
    pub status: ReservationStatus,
}

impl From<&Reservation> for ReservationView {
    fn from(r: &Reservation) -> Self {
        let customer = r.customer().read();
        Self {
            reservation_id: r.id(),
            customer_id: customer.id(),
            customer_name: customer.name().to_string(),
            table_id: r.table().read().id(),
            date: r.date(),
            time: r.time(),
            people_count: r.people_count(),
            status: r.status(),
        }
    }
}

/// Table snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableView {
    pub table_id: u32,
    pub location: String,
    pub max_capacity: u32,
    pub status: TableStatus,
    pub occupied_seats: usize,
}

impl From<&Table> for TableView {
    fn from(table: &Table) -> Self {
        Self {
            table_id: table.id(),
            location: table.location().to_string(),
            max_capacity: table.max_capacity(),
            status: table.status(),
            occupied_seats: table.seats().iter().filter(|s| s.is_occupied()).count(),
        }
    }
}

/// Staff member entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StaffView {
    pub name: String,
    pub role: Role,
}

impl From<&Member> for StaffView {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name(),
            role: member.role(),
        }
    }
}

fn staff<T>(list: &[Handle<T>]) -> Vec<StaffView>
where
    Handle<T>: Into<Member>,
{
    list.iter()
        .map(|h| {
            let member: Member = h.clone().into();
            StaffView::from(&member)
        })
        .collect()
}

/// Manager with teams
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ManagerView {
    pub name: String,
    pub waiters: Vec<StaffView>,
    pub chefs: Vec<StaffView>,
}

impl From<&Manager> for ManagerView {
    fn from(m: &Manager) -> Self {
        Self {
            name: m.name().to_string(),
            waiters: staff(m.waiters()),
            chefs: staff(m.chefs()),
        }
    }
}

/// Branch snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BranchView {
    pub name: String,
    pub location: String,
    pub manager: Option<ManagerView>,
    pub kitchen: Vec<StaffView>,
    pub tables: Vec<TableView>,
    pub reservations: Vec<ReservationView>,
}

impl From<&Branch> for BranchView {
    fn from(branch: &Branch) -> Self {
        Self {
            name: branch.name().to_string(),
            location: branch.location().to_string(),
            manager: branch.manager().map(|m| ManagerView::from(&*m.read())),
            kitchen: staff(branch.kitchen().chefs()),
            tables: branch.tables().iter().map(|t| TableView::from(&*t.read())).collect(),
            reservations: branch
                .reservations()
                .iter()
                .map(|r| ReservationView::from(&*r.read()))
                .collect(),
        }
    }
}

/// Build a view from a handle
pub fn view_of<T, V>(handle: &Handle<T>) -> V
where
    V: for<'a> From<&'a T>,
{
    V::from(&*handle.read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdAllocator;
    use crate::models::{Customer, Person, Waiter};

    #[test]
    fn test_order_view_reflects_current_prices() {
        let ids = IdAllocator::new();
        let customer = Handle::new(Customer::new(&ids, Person::new("Alice", "a@example.com", "5")));
        let burger = Handle::new(
            MenuItem::new(1, "Burger", "", Decimal::new(1099, 2), Vec::new(), "Main Course")
                .unwrap(),
        );
        let mut waiter = Waiter::new("W-1", Person::new("Jane", "j@example.com", "4"));
        let order = waiter.take_order(&ids, &customer, &[burger.clone()]);

        let before: OrderView = view_of(&order);
        burger.write().update_price(Decimal::new(1299, 2)).unwrap();
        let after: OrderView = view_of(&order);

        assert_eq!(before.total, Decimal::new(1099, 2));
        assert_eq!(after.total, Decimal::new(1299, 2));
        assert_eq!(after.items[0].name, "Burger");
    }

    #[test]
    fn test_order_view_json_shape() {
        let ids = IdAllocator::new();
        let customer = Handle::new(Customer::new(&ids, Person::new("Alice", "a@example.com", "5")));
        let order = Order::new(&ids, &customer);

        let json = serde_json::to_value(OrderView::from(&order)).unwrap();
        assert_eq!(json["order_id"], 1);
        assert_eq!(json["customer_id"], 1);
        assert_eq!(json["status"], "RECEIVED");
        assert!(json["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_staff_view_from_member() {
        let ids = IdAllocator::new();
        let customer: Member =
            Handle::new(Customer::new(&ids, Person::new("Alice", "a@example.com", "5"))).into();
        let view = StaffView::from(&customer);
        assert_eq!(view.name, "Alice");
        assert_eq!(view.role, Role::Customer);

        let mut manager = Manager::new(Person::new("John Doe", "j@example.com", "1"), "123");
        manager.add_waiter(Handle::new(Waiter::new(
            "W-1",
            Person::new("Jane Smith", "jane@example.com", "4"),
        )));
        let view = ManagerView::from(&manager);
        assert_eq!(
            view.waiters,
            vec![StaffView {
                name: "Jane Smith".to_string(),
                role: Role::Waiter,
            }]
        );
        assert!(view.chefs.is_empty());
    }

    #[test]
    fn test_table_view_counts_seats() {
        let mut table = Table::new(2, 3, "Window");
        table.seat_mut(1).unwrap().occupy();
        table.seat_mut(3).unwrap().occupy();

        let view = TableView::from(&table);
        assert_eq!(view.occupied_seats, 2);
        assert_eq!(view.status, TableStatus::Free);
    }
}
