// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

use crate::{DomainError, RedressType, validate_redress};

const MONETARY: [RedressType; 7] = [
    RedressType::FinancialLoss,
    RedressType::InterestOnFinancialLoss,
    RedressType::DistressAndInconvenience,
    RedressType::ConsequentialLoss,
    RedressType::PremiumRefundAdjustment,
    RedressType::GoodwillPayment,
    RedressType::ThirdPartyPayment,
];

const NON_MONETARY: [RedressType; 2] = [
    RedressType::ApologyOrExplanation,
    RedressType::RemedialAction,
];

#[test]
fn test_monetary_classification_table() {
    for payment_type in MONETARY {
        assert!(payment_type.is_monetary(), "{payment_type} should be monetary");
    }
    for payment_type in NON_MONETARY {
        assert!(
            !payment_type.is_monetary(),
            "{payment_type} should be non-monetary"
        );
    }
}

#[test]
fn test_monetary_requires_amount() {
    for payment_type in MONETARY {
        let result = validate_redress(payment_type, None, Some("loss of cover"), None);
        assert!(matches!(
            result,
            Err(DomainError::AmountRequired { payment_type: t }) if t == payment_type
        ));
    }
}

#[test]
fn test_monetary_requires_rationale() {
    let amount = Some(Decimal::new(25_000, 2));
    for payment_type in MONETARY {
        let missing = validate_redress(payment_type, amount, None, None);
        assert!(matches!(missing, Err(DomainError::RationaleRequired { .. })));

        let blank = validate_redress(payment_type, amount, Some("   "), None);
        assert!(matches!(blank, Err(DomainError::RationaleRequired { .. })));
    }
}

#[test]
fn test_monetary_accepts_amount_and_rationale() {
    let amount = Some(Decimal::new(25_000, 2));
    for payment_type in MONETARY {
        let result = validate_redress(payment_type, amount, Some("loss of cover"), None);
        assert!(result.is_ok());
    }
}

#[test]
fn test_non_monetary_requires_action_description() {
    for payment_type in NON_MONETARY {
        let missing = validate_redress(payment_type, None, None, None);
        assert!(matches!(
            missing,
            Err(DomainError::ActionDescriptionRequired { .. })
        ));

        let blank = validate_redress(payment_type, None, None, Some(""));
        assert!(matches!(
            blank,
            Err(DomainError::ActionDescriptionRequired { .. })
        ));
    }
}

#[test]
fn test_non_monetary_succeeds_regardless_of_amount() {
    for payment_type in NON_MONETARY {
        let without_amount = validate_redress(payment_type, None, None, Some("Written apology"));
        assert!(without_amount.is_ok());

        let with_amount = validate_redress(
            payment_type,
            Some(Decimal::new(100, 0)),
            None,
            Some("Written apology"),
        );
        assert!(with_amount.is_ok());
    }
}
