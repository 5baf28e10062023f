// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire-format tests: legacy redress spellings resolve at the boundary
//! and request types survive a serialization round trip.

use casetrack_domain::RedressType;
use serde_json::json;

use super::helpers::create_request;
use crate::request_response::{CreateComplaintRequest, RedressRequest};

#[test]
fn test_redress_request_accepts_canonical_spelling() {
    let request: RedressRequest = serde_json::from_value(json!({
        "payment_type": "goodwill_payment",
        "amount": "75.50",
        "rationale": "Delay in handling"
    }))
    .unwrap();

    assert_eq!(request.payment_type, RedressType::GoodwillPayment);
}

#[test]
fn test_redress_request_resolves_legacy_aliases() {
    let goodwill: RedressRequest = serde_json::from_value(json!({
        "payment_type": "goodwill",
        "amount": "75.50",
        "rationale": "Delay in handling"
    }))
    .unwrap();
    assert_eq!(goodwill.payment_type, RedressType::GoodwillPayment);

    let apology: RedressRequest = serde_json::from_value(json!({
        "payment_type": "apology",
        "action_description": "Written apology"
    }))
    .unwrap();
    assert_eq!(apology.payment_type, RedressType::ApologyOrExplanation);

    let remedial: RedressRequest = serde_json::from_value(json!({
        "payment_type": "remedial",
        "action_description": "Reissue policy documents"
    }))
    .unwrap();
    assert_eq!(remedial.payment_type, RedressType::RemedialAction);
}

#[test]
fn test_redress_request_rejects_unknown_payment_type() {
    let result: Result<RedressRequest, _> = serde_json::from_value(json!({
        "payment_type": "compensation"
    }));

    assert!(result.is_err());
}

#[test]
fn test_aliases_serialize_back_as_canonical() {
    let request: RedressRequest = serde_json::from_value(json!({
        "payment_type": "apology",
        "action_description": "Written apology"
    }))
    .unwrap();

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["payment_type"], "apology_or_explanation");
}

#[test]
fn test_create_request_round_trips() {
    let request = create_request();

    let value = serde_json::to_value(&request).unwrap();
    let back: CreateComplaintRequest = serde_json::from_value(value).unwrap();

    assert_eq!(back, request);
}

#[test]
fn test_optional_create_fields_default() {
    let request = create_request();
    let mut value = serde_json::to_value(&request).unwrap();
    let object = value.as_object_mut().unwrap();
    object.remove("reason");
    object.remove("fca_complaint");
    object.remove("vulnerability_flag");
    object.remove("policy");

    let back: CreateComplaintRequest = serde_json::from_value(value).unwrap();

    assert_eq!(back.reason, None);
    assert!(!back.fca_complaint);
    assert!(!back.vulnerability_flag);
    assert_eq!(back.policy.policy_number, None);
}
