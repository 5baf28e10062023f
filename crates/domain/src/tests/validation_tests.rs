// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CATEGORY_OTHER_UNCLASSIFIED, CATEGORY_VULNERABILITY, DomainError, forces_vulnerability_flag,
    validate_category_reason, validate_non_blank,
};

#[test]
fn test_other_unclassified_requires_reason() {
    let missing = validate_category_reason(CATEGORY_OTHER_UNCLASSIFIED, None);
    assert!(matches!(missing, Err(DomainError::ReasonRequired { .. })));

    let blank = validate_category_reason(CATEGORY_OTHER_UNCLASSIFIED, Some("  "));
    assert!(matches!(blank, Err(DomainError::ReasonRequired { .. })));
}

#[test]
fn test_other_unclassified_accepts_reason() {
    let result = validate_category_reason(CATEGORY_OTHER_UNCLASSIFIED, Some("Misc query"));
    assert!(result.is_ok());
}

#[test]
fn test_other_categories_do_not_require_reason() {
    assert!(validate_category_reason("Service", None).is_ok());
    assert!(validate_category_reason("Claims Handling", Some("")).is_ok());
}

#[test]
fn test_vulnerability_category_forces_flag() {
    assert!(forces_vulnerability_flag(CATEGORY_VULNERABILITY));
    assert!(!forces_vulnerability_flag("Service"));
    assert!(!forces_vulnerability_flag(CATEGORY_OTHER_UNCLASSIFIED));
}

#[test]
fn test_non_blank_rejects_whitespace() {
    let result = validate_non_blank("summary", " \t ");
    assert!(matches!(result, Err(DomainError::BlankField("summary"))));
}

#[test]
fn test_non_blank_accepts_text() {
    assert!(validate_non_blank("summary", "Called the customer").is_ok());
}
