// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::types::RedressType;

/// Validates a redress payment against the monetary/non-monetary rules.
///
/// Monetary payment types require a non-null amount and a non-blank
/// rationale. Non-monetary types require a non-blank action description
/// and may omit the amount entirely.
///
/// # Arguments
///
/// * `payment_type` - The (already alias-resolved) payment type
/// * `amount` - The payment amount, if any
/// * `rationale` - The rationale for a monetary award
/// * `action_description` - The description of a non-monetary action
///
/// # Errors
///
/// Returns an error naming the missing field and payment type.
pub fn validate_redress(
    payment_type: RedressType,
    amount: Option<Decimal>,
    rationale: Option<&str>,
    action_description: Option<&str>,
) -> Result<(), DomainError> {
    if payment_type.is_monetary() {
        if amount.is_none() {
            return Err(DomainError::AmountRequired { payment_type });
        }
        if rationale.is_none_or(|r| r.trim().is_empty()) {
            return Err(DomainError::RationaleRequired { payment_type });
        }
    } else if action_description.is_none_or(|d| d.trim().is_empty()) {
        return Err(DomainError::ActionDescriptionRequired { payment_type });
    }
    Ok(())
}
