//! # chefmenu core
//!
//! Domain types and state for the menu app: dishes and their prices, the
//! shared menu store, screen navigation history, summary statistics, and the
//! chef and payment forms. No terminal code lives here.

pub mod course;
pub mod error;
pub mod form;
pub mod ids;
pub mod item;
pub mod navigation;
pub mod payment;
pub mod price;
pub mod stats;
pub mod store;

#[cfg(test)]
mod property_tests;

pub use course::{normalize_add_on, Course, CourseFilter, ADD_ON_OPTIONS, NO_ADD_ON};
pub use error::{MenuError, ValidationError};
pub use form::DishForm;
pub use ids::{IdGenerator, IdStrategy, SequentialIdGenerator, UuidIdGenerator};
pub use item::MenuItem;
pub use navigation::{NavigationStack, Route, Screen};
pub use payment::{PaymentForm, PaymentReceipt};
pub use price::Price;
pub use stats::{averages_by_course, filter_by_course, overall_average, CourseAverage, MenuSummary};
pub use store::{MenuStore, SharedMenuStore};
