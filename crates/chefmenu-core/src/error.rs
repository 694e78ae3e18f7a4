//! Domain errors

use thiserror::Error;

/// Input rejected at submit time. Nothing is mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Dish name is required")]
    EmptyName,

    #[error("Price is required")]
    EmptyPrice,

    #[error("Price is not a number: {0}")]
    InvalidPrice(String),

    #[error("Price cannot be negative: {0}")]
    NegativePrice(String),

    #[error("Price is too large: {0}")]
    PriceTooLarge(String),

    #[error("Bank name is required")]
    EmptyBankName,

    #[error("Account number is required")]
    EmptyAccountNumber,

    #[error("Invalid input: {0}")]
    Rules(String),
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "EMPTY_NAME",
            ValidationError::EmptyPrice => "EMPTY_PRICE",
            ValidationError::InvalidPrice(_) => "INVALID_PRICE",
            ValidationError::NegativePrice(_) => "NEGATIVE_PRICE",
            ValidationError::PriceTooLarge(_) => "PRICE_TOO_LARGE",
            ValidationError::EmptyBankName => "EMPTY_BANK_NAME",
            ValidationError::EmptyAccountNumber => "EMPTY_ACCOUNT_NUMBER",
            ValidationError::Rules(_) => "RULES",
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ValidationError::Rules(errors.to_string())
    }
}

#[derive(Error, Debug)]
pub enum MenuError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Dish id already exists: {0}")]
    DuplicateId(String),

    #[error("Invalid dish: {0}")]
    InvalidItem(#[from] validator::ValidationErrors),
}

impl MenuError {
    pub fn code(&self) -> &'static str {
        match self {
            MenuError::Validation(inner) => inner.code(),
            MenuError::DuplicateId(_) => "DUPLICATE_ID",
            MenuError::InvalidItem(_) => "INVALID_ITEM",
        }
    }
}
