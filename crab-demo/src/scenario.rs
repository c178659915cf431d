//! Demo scenario
//!
//! Builds one restaurant with a single staffed branch, a three-item menu,
//! one customer with a reservation and an order of two items.

use anyhow::{Context, anyhow};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use shared::Handle;
use shared::models::{
    Address, Branch, Chef, Customer, Manager, Menu, MenuItem, Order, Person, Reservation,
    Restaurant, Table, Waiter,
};

pub const BRANCH_NAME: &str = "Main Branch";

/// Everything the transcript needs, kept alive together
#[derive(Debug)]
pub struct DemoWorld {
    pub restaurant: Restaurant,
    pub manager: Handle<Manager>,
    pub chef: Handle<Chef>,
    pub waiter: Handle<Waiter>,
    pub menu: Menu,
    pub customer: Handle<Customer>,
    pub table: Handle<Table>,
    pub reservation: Handle<Reservation>,
    pub order: Handle<Order>,
}

impl DemoWorld {
    pub fn branch(&self) -> anyhow::Result<&Branch> {
        self.restaurant
            .branch(BRANCH_NAME)
            .ok_or_else(|| anyhow!("branch '{BRANCH_NAME}' missing"))
    }
}

fn item(
    id: u32,
    name: &str,
    description: &str,
    cents: i64,
    ingredients: &[&str],
    category: &str,
) -> anyhow::Result<Handle<MenuItem>> {
    let item = MenuItem::new(
        id,
        name,
        description,
        Decimal::new(cents, 2),
        ingredients.iter().map(|s| s.to_string()).collect(),
        category,
    )
    .with_context(|| format!("menu item {name}"))?;
    Ok(Handle::new(item))
}

fn main_branch(restaurant: &mut Restaurant) -> anyhow::Result<&mut Branch> {
    restaurant
        .branch_mut(BRANCH_NAME)
        .ok_or_else(|| anyhow!("branch '{BRANCH_NAME}' missing"))
}

/// Run the scenario; the reservation falls `offset_days` after `now`
pub fn build(now: NaiveDateTime, offset_days: i64) -> anyhow::Result<DemoWorld> {
    let mut restaurant = Restaurant::new();

    let branch_address = Address::new("123 Main St", "Cityville", "Stateshire", "12345", "Countryland");
    restaurant.add_branch(Branch::new(BRANCH_NAME, branch_address));

    let staff_address = Address::new("456 Elm St", "Villagetown", "Stateshire", "54321", "Countryland");
    let manager = Handle::new(Manager::new(
        Person::new("John Doe", "john@example.com", "123-456-7890")
            .with_address(staff_address.clone()),
        "123-45-6789",
    ));
    main_branch(&mut restaurant)?.assign_manager(manager.clone())?;

    let chef = Handle::new(Chef::new(
        "C-001",
        Person::new("Chef Gordon", "gordon@example.com", "111-222-3333")
            .with_address(staff_address.clone()),
    ));
    let waiter = Handle::new(Waiter::new(
        "W-001",
        Person::new("Jane Smith", "jane@example.com", "444-555-6666").with_address(staff_address),
    ));
    manager.write().add_chef(chef.clone());
    manager.write().add_waiter(waiter.clone());
    main_branch(&mut restaurant)?.kitchen_mut().add_chef(chef.clone());

    let burger = item(
        1,
        "Burger",
        "Delicious beef burger",
        1099,
        &["Beef patty", "Lettuce", "Tomato"],
        "Main Course",
    )?;
    let salad = item(
        2,
        "Salad",
        "Healthy garden salad",
        799,
        &["Lettuce", "Tomato", "Cucumber"],
        "Appetizer",
    )?;
    let cheesecake = item(
        3,
        "Cheesecake",
        "Rich and creamy cheesecake",
        699,
        &["Cream cheese", "Graham cracker crust"],
        "Dessert",
    )?;

    let mut menu = Menu::new();
    menu.add_item(burger.clone());
    menu.add_item(salad.clone());
    menu.add_item(cheesecake);

    let customer =
        restaurant.new_customer(Person::new("Alice Johnson", "alice@example.com", "555-666-7777"));

    let table = Handle::new(Table::new(1, 4, "A1"));
    main_branch(&mut restaurant)?.add_table(table.clone())?;
    let date = Duration::try_days(offset_days)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| anyhow!("reservation offset of {offset_days} days is out of range"))?;
    let six_pm = NaiveTime::from_hms_opt(18, 0, 0).ok_or_else(|| anyhow!("invalid time"))?;
    let reservation = Handle::new(Reservation::new(
        restaurant.ids(),
        &customer,
        &table,
        date,
        six_pm,
        4,
    ));
    main_branch(&mut restaurant)?.add_reservation(reservation.clone());

    let order = waiter
        .write()
        .take_order(restaurant.ids(), &customer, &[burger, salad]);

    tracing::info!(
        branch = BRANCH_NAME,
        order_id = %order.read().id(),
        reservation_id = %reservation.read().id(),
        "Demo scenario ready"
    );

    Ok(DemoWorld {
        restaurant,
        manager,
        chef,
        waiter,
        menu,
        customer,
        table,
        reservation,
        order,
    })
}
