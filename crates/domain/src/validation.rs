// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// The category that requires an explicit reason at intake.
pub const CATEGORY_OTHER_UNCLASSIFIED: &str = "Other / Unclassified";

/// The category that forces the vulnerability flag at intake.
pub const CATEGORY_VULNERABILITY: &str = "Vulnerability and Customer Treatment";

/// Validates the category/reason intake rule.
///
/// The "Other / Unclassified" category must always carry a non-blank
/// reason; every other category may omit it.
///
/// # Errors
///
/// Returns an error if the category requires a reason and none was given.
pub fn validate_category_reason(category: &str, reason: Option<&str>) -> Result<(), DomainError> {
    if category == CATEGORY_OTHER_UNCLASSIFIED && reason.is_none_or(|r| r.trim().is_empty()) {
        return Err(DomainError::ReasonRequired {
            category: category.to_string(),
        });
    }
    Ok(())
}

/// Returns whether the given category forces `vulnerability_flag = true`.
#[must_use]
pub fn forces_vulnerability_flag(category: &str) -> bool {
    category == CATEGORY_VULNERABILITY
}

/// Validates that a required text field is non-blank.
///
/// # Errors
///
/// Returns an error naming the field if it is empty or whitespace-only.
pub fn validate_non_blank(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField(field));
    }
    Ok(())
}
