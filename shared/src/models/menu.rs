//! Menu Model
//!
//! A [`MenuItem`] is shared by handle between the [`Menu`] and every order
//! that lists it, so a price update is seen by all of them.

use crate::error::{DomainError, DomainResult, ErrorCode};
use crate::handle::{Handle, remove_by_identity};
use crate::money::format_currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    id: u32,
    pub name: String,
    pub description: String,
    price: Decimal,
    ingredients: Vec<String>,
    pub category: String,
    is_available: bool,
}

impl MenuItem {
    /// Create an available menu item; the price must be non-negative
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        ingredients: Vec<String>,
        category: impl Into<String>,
    ) -> DomainResult<Self> {
        validate_price(price)?;
        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            ingredients,
            category: category.into(),
            is_available: true,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn update_price(&mut self, price: Decimal) -> DomainResult<()> {
        validate_price(price)?;
        tracing::debug!(item = %self.name, old = %self.price, new = %price, "Menu item price updated");
        self.price = price;
        Ok(())
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn add_ingredient(&mut self, ingredient: impl Into<String>) {
        self.ingredients.push(ingredient.into());
    }

    /// Remove the first matching ingredient
    pub fn remove_ingredient(&mut self, ingredient: &str) -> DomainResult<()> {
        let Some(index) = self.ingredients.iter().position(|i| i == ingredient) else {
            return Err(DomainError::not_found(
                ErrorCode::IngredientNotFound,
                format!("Ingredient '{}' in {}", ingredient, self.name),
            ));
        };
        self.ingredients.remove(index);
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn set_availability(&mut self, available: bool) {
        self.is_available = available;
        tracing::debug!(item = %self.name, available, "Menu item availability changed");
    }
}

fn validate_price(price: Decimal) -> DomainResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::InvalidPrice { price });
    }
    Ok(())
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, format_currency(self.price, "$"))
    }
}

/// Ordered collection of menu items
#[derive(Debug, Default)]
pub struct Menu {
    items: Vec<Handle<MenuItem>>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Handle<MenuItem>) {
        tracing::debug!(item = %item.read().name, "Menu item added");
        self.items.push(item);
    }

    /// Remove by identity
    pub fn remove_item(&mut self, item: &Handle<MenuItem>) -> DomainResult<()> {
        if !remove_by_identity(&mut self.items, item) {
            return Err(DomainError::not_found(
                ErrorCode::MenuItemNotFound,
                format!("{} in the menu", item.read().name),
            ));
        }
        tracing::debug!(item = %item.read().name, "Menu item removed");
        Ok(())
    }

    pub fn items(&self) -> &[Handle<MenuItem>] {
        &self.items
    }

    /// First item with the given id
    pub fn find_by_id(&self, id: u32) -> Option<Handle<MenuItem>> {
        self.items.iter().find(|item| item.read().id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> MenuItem {
        MenuItem::new(
            1,
            "Burger",
            "Delicious beef burger",
            Decimal::new(1099, 2),
            vec!["Beef patty".into(), "Lettuce".into(), "Tomato".into()],
            "Main Course",
        )
        .unwrap()
    }

    #[test]
    fn test_new_item_is_available() {
        let item = burger();
        assert!(item.is_available());
        assert_eq!(item.to_string(), "Burger - $10.99");
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = MenuItem::new(1, "Bad", "", Decimal::new(-1, 0), Vec::new(), "X").unwrap_err();
        assert_eq!(err.code(), ErrorCode::MenuItemInvalidPrice);

        let mut item = burger();
        assert!(item.update_price(Decimal::new(-5, 1)).is_err());
        assert_eq!(item.price(), Decimal::new(1099, 2));

        item.update_price(Decimal::ZERO).unwrap();
        assert_eq!(item.price(), Decimal::ZERO);
    }

    #[test]
    fn test_ingredients() {
        let mut item = burger();
        item.add_ingredient("Cheese");
        assert_eq!(item.ingredients().len(), 4);

        item.remove_ingredient("Lettuce").unwrap();
        assert!(!item.ingredients().iter().any(|i| i == "Lettuce"));

        let err = item.remove_ingredient("Pickles").unwrap_err();
        assert_eq!(err.code(), ErrorCode::IngredientNotFound);
        assert_eq!(item.ingredients().len(), 3);
    }

    #[test]
    fn test_availability_toggle() {
        let mut item = burger();
        item.set_availability(false);
        assert!(!item.is_available());
        item.set_availability(true);
        assert!(item.is_available());
    }

    #[test]
    fn test_menu_add_find_remove() {
        let mut menu = Menu::new();
        let item = Handle::new(burger());
        menu.add_item(item.clone());
        assert_eq!(menu.len(), 1);

        let found = menu.find_by_id(1).unwrap();
        assert!(found.ptr_eq(&item));
        assert!(menu.find_by_id(42).is_none());

        menu.remove_item(&item).unwrap();
        assert!(menu.is_empty());
        let err = menu.remove_item(&item).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MenuItemNotFound);
    }

    #[test]
    fn test_menu_remove_uses_identity() {
        let mut menu = Menu::new();
        menu.add_item(Handle::new(burger()));
        let lookalike = Handle::new(burger());

        assert!(menu.remove_item(&lookalike).is_err());
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let mut menu = Menu::new();
        let first = Handle::new(burger());
        let second = Handle::new(burger());
        menu.add_item(first.clone());
        menu.add_item(second);
        assert!(menu.find_by_id(1).unwrap().ptr_eq(&first));
    }
}
