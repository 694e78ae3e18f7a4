//! Mock payment for an ordered dish. Nothing is charged.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use crate::error::ValidationError;
use crate::item::MenuItem;
use crate::price::Price;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub bank_name: String,
    pub account_number: String,
}

#[derive(Debug, Validate)]
struct PaymentDetails {
    #[validate(length(min = 1, max = 60, message = "Bank name must be at most 60 characters"))]
    bank_name: String,

    #[validate(length(min = 1, max = 34, message = "Account number must be at most 34 characters"))]
    account_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub dish: String,
    pub amount: Price,
    pub bank_name: String,
    pub masked_account: String,
    pub paid_at: DateTime<Utc>,
}

impl PaymentForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let details = PaymentDetails {
            bank_name: self.bank_name.trim().to_string(),
            account_number: self.account_number.trim().to_string(),
        };
        if details.bank_name.is_empty() {
            return Err(ValidationError::EmptyBankName);
        }
        if details.account_number.is_empty() {
            return Err(ValidationError::EmptyAccountNumber);
        }
        details.validate()?;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Accept the payment for `item` and clear the form. The form is kept on error.
    pub fn submit(&mut self, item: &MenuItem) -> Result<PaymentReceipt, ValidationError> {
        if let Err(e) = self.validate() {
            warn!(code = e.code(), dish = %item.id, "Payment rejected: {}", e);
            return Err(e);
        }

        let paid_at = Utc::now();
        let receipt = PaymentReceipt {
            reference: format!("PAY-{}-{}", paid_at.format("%Y%m%d%H%M%S"), item.id),
            dish: item.name.clone(),
            amount: item.price,
            bank_name: self.bank_name.trim().to_string(),
            masked_account: mask_account_number(self.account_number.trim()),
            paid_at,
        };

        info!(reference = %receipt.reference, amount = %receipt.amount, "Mock payment accepted");
        self.reset();
        Ok(receipt)
    }
}

/// Keep the last 4 characters; everything before them becomes `*`.
pub fn mask_account_number(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    let mut masked = "*".repeat(hidden);
    masked.extend(&chars[hidden..]);
    masked
}
