// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Duration;
use time::macros::datetime;

use super::helpers::create_test_complaint;
use crate::{BreachFlags, breach_flags};

#[test]
fn test_no_breach_before_either_deadline() {
    let complaint = create_test_complaint();
    let now = complaint.received_at + Duration::hours(1);

    let flags: BreachFlags = breach_flags(&complaint, now);

    assert!(!flags.ack_breached);
    assert!(!flags.final_breached);
}

#[test]
fn test_ack_breach_after_ack_deadline() {
    let complaint = create_test_complaint();
    let now = complaint.ack_due_at + Duration::minutes(1);

    let flags = breach_flags(&complaint, now);

    assert!(flags.ack_breached);
    assert!(!flags.final_breached);
}

#[test]
fn test_no_ack_breach_exactly_at_deadline() {
    // Breach requires strictly after the due instant.
    let complaint = create_test_complaint();

    let flags = breach_flags(&complaint, complaint.ack_due_at);

    assert!(!flags.ack_breached);
}

#[test]
fn test_no_ack_breach_once_acknowledged() {
    let mut complaint = create_test_complaint();
    complaint.acknowledged_at = Some(complaint.ack_due_at - Duration::hours(1));
    let now = complaint.ack_due_at + Duration::days(10);

    let flags = breach_flags(&complaint, now);

    assert!(!flags.ack_breached);
}

#[test]
fn test_acknowledgement_after_deadline_still_clears_live_flag() {
    // The live flag reflects the current state only; history is the
    // event log's job.
    let mut complaint = create_test_complaint();
    complaint.acknowledged_at = Some(complaint.ack_due_at + Duration::days(3));
    let now = complaint.ack_due_at + Duration::days(5);

    let flags = breach_flags(&complaint, now);

    assert!(!flags.ack_breached);
}

#[test]
fn test_final_breach_after_final_deadline() {
    let complaint = create_test_complaint();
    let now = complaint.final_due_at + Duration::seconds(1);

    let flags = breach_flags(&complaint, now);

    assert!(flags.ack_breached);
    assert!(flags.final_breached);
}

#[test]
fn test_no_final_breach_once_final_response_issued() {
    let mut complaint = create_test_complaint();
    complaint.final_response_at = Some(complaint.final_due_at - Duration::days(1));
    let now = complaint.final_due_at + Duration::days(30);

    let flags = breach_flags(&complaint, now);

    assert!(!flags.final_breached);
}

#[test]
fn test_breach_flags_are_idempotent() {
    let complaint = create_test_complaint();
    let now = datetime!(2024-06-01 00:00 UTC);

    let first = breach_flags(&complaint, now);
    let second = breach_flags(&complaint, now);

    assert_eq!(first, second);
}
