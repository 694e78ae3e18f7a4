// ============================================================================
// chefmenu core - Menu Item Entity
// File: crates/chefmenu-core/src/item.rs
// Description: A dish on the menu
// ============================================================================

use serde::Serialize;
use validator::Validate;

use crate::course::{normalize_add_on, Course};
use crate::error::MenuError;
use crate::price::Price;

/// A dish. Never edited in place: screens hold copies, the store replaces wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct MenuItem {
    pub id: String,

    #[validate(length(min = 1, message = "Dish name is required"))]
    pub name: String,

    pub course: Course,

    /// Empty means no add-on
    #[validate(length(max = 40, message = "Add-on too long"))]
    pub add_on: String,

    pub price: Price,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: &str,
        course: Course,
        add_on: &str,
        price: Price,
    ) -> Result<Self, MenuError> {
        let item = Self {
            id: id.into(),
            name: name.trim().to_string(),
            course,
            add_on: normalize_add_on(add_on),
            price,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn has_add_on(&self) -> bool {
        !self.add_on.is_empty()
    }

    /// The two demonstration dishes present at every start
    pub fn seed() -> Vec<MenuItem> {
        vec![
            MenuItem {
                id: "1".to_string(),
                name: "Tomato Soup".to_string(),
                course: Course::Starter,
                add_on: String::new(),
                price: Price::from_cents(4_500),
            },
            MenuItem {
                id: "2".to_string(),
                name: "Grilled Steak".to_string(),
                course: Course::Main,
                add_on: "Fries".to_string(),
                price: Price::from_cents(22_000),
            },
        ]
    }
}
