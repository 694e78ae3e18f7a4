//! Chef add-dish form

use tracing::{info, warn};

use crate::course::{Course, NO_ADD_ON};
use crate::error::{MenuError, ValidationError};
use crate::ids::IdGenerator;
use crate::item::MenuItem;
use crate::navigation::NavigationStack;
use crate::price::Price;
use crate::store::SharedMenuStore;

/// Raw field values as typed by the chef
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishForm {
    pub name: String,
    pub price: String,
    pub course: Course,
    /// One of `ADD_ON_OPTIONS`; "None" is the sentinel for no add-on
    pub add_on: String,
}

impl Default for DishForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            course: Course::default(),
            add_on: NO_ADD_ON.to_string(),
        }
    }
}

/// Checked form contents, ready to become a dish once it has an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDish {
    pub name: String,
    pub price: Price,
}

impl DishForm {
    pub fn validate(&self) -> Result<ValidDish, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let price = Price::parse(&self.price)?;
        Ok(ValidDish {
            name: name.to_string(),
            price,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate, add the dish, clear the form, and return to the root screen.
    ///
    /// On any error the store, the stack, and the form are left untouched.
    pub fn submit(
        &mut self,
        ids: &dyn IdGenerator,
        store: &SharedMenuStore,
        nav: &mut NavigationStack,
    ) -> Result<MenuItem, MenuError> {
        let valid = self.validate().inspect_err(|e| {
            warn!(code = e.code(), "Dish form rejected: {}", e);
        })?;

        let item = MenuItem::new(ids.next_id(), &valid.name, self.course, &self.add_on, valid.price)?;
        store.add_item(item.clone())?;

        info!(id = %item.id, price = %item.price, "Dish form submitted");
        self.reset();
        nav.pop_to_top();
        Ok(item)
    }
}
