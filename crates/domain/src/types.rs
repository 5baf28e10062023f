// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a complaint.
///
/// The forward path is `New → Acknowledged → InInvestigation →
/// ResponseDrafted → FinalResponseIssued → Closed`, with `Reopened` as a
/// side state re-entering the forward path. Most transitions are
/// deliberately permissive: an operation invoked from an unexpected state
/// is a silent no-op rather than an error (see the core crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    /// Initial state after creation.
    #[default]
    New,
    /// Acknowledgement has been sent to the complainant.
    Acknowledged,
    /// Investigation in progress.
    InInvestigation,
    /// A response has been drafted but not issued.
    ResponseDrafted,
    /// The final response has been issued.
    FinalResponseIssued,
    /// The complaint is closed.
    Closed,
    /// The complaint was reopened after closure.
    Reopened,
}

impl ComplaintStatus {
    /// Converts this status to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Acknowledged => "acknowledged",
            Self::InInvestigation => "in_investigation",
            Self::ResponseDrafted => "response_drafted",
            Self::FinalResponseIssued => "final_response_issued",
            Self::Closed => "closed",
            Self::Reopened => "reopened",
        }
    }

    /// Returns whether the complaint has passed the final-response milestone.
    ///
    /// Category changes in these states are audited distinctly.
    #[must_use]
    pub const fn is_post_final(&self) -> bool {
        matches!(self, Self::FinalResponseIssued | Self::Closed)
    }
}

impl FromStr for ComplaintStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "acknowledged" => Ok(Self::Acknowledged),
            "in_investigation" => Ok(Self::InInvestigation),
            "response_drafted" => Ok(Self::ResponseDrafted),
            "final_response_issued" => Ok(Self::FinalResponseIssued),
            "closed" => Ok(Self::Closed),
            "reopened" => Ok(Self::Reopened),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The recorded decision category for a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeType {
    /// The complaint was upheld in full.
    Upheld,
    /// The complaint was upheld in part.
    PartiallyUpheld,
    /// The complaint was not upheld.
    NotUpheld,
    /// The complainant withdrew the complaint.
    Withdrawn,
    /// The complaint falls outside the firm's scope.
    OutOfScope,
}

impl OutcomeType {
    /// Converts this outcome to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upheld => "upheld",
            Self::PartiallyUpheld => "partially_upheld",
            Self::NotUpheld => "not_upheld",
            Self::Withdrawn => "withdrawn",
            Self::OutOfScope => "out_of_scope",
        }
    }
}

impl FromStr for OutcomeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upheld" => Ok(Self::Upheld),
            "partially_upheld" => Ok(Self::PartiallyUpheld),
            "not_upheld" => Ok(Self::NotUpheld),
            "withdrawn" => Ok(Self::Withdrawn),
            "out_of_scope" => Ok(Self::OutOfScope),
            _ => Err(DomainError::InvalidOutcomeType(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The category of a redress payment.
///
/// This is a closed tagged variant. Legacy/alternate spellings
/// (`goodwill`, `apology`, `remedial`) are resolved to canonical variants
/// once at the boundary, by [`FromStr`] or by serde aliases; downstream
/// code never re-interprets strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedressType {
    /// Direct financial loss.
    FinancialLoss,
    /// Interest on a financial loss.
    InterestOnFinancialLoss,
    /// Distress and inconvenience.
    DistressAndInconvenience,
    /// Consequential loss.
    ConsequentialLoss,
    /// Premium refund or adjustment.
    PremiumRefundAdjustment,
    /// Goodwill payment.
    #[serde(alias = "goodwill")]
    GoodwillPayment,
    /// Payment to a third party.
    ThirdPartyPayment,
    /// Apology or explanation (non-monetary).
    #[serde(alias = "apology")]
    ApologyOrExplanation,
    /// Remedial action (non-monetary).
    #[serde(alias = "remedial")]
    RemedialAction,
}

impl RedressType {
    /// Converts this payment type to its canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FinancialLoss => "financial_loss",
            Self::InterestOnFinancialLoss => "interest_on_financial_loss",
            Self::DistressAndInconvenience => "distress_and_inconvenience",
            Self::ConsequentialLoss => "consequential_loss",
            Self::PremiumRefundAdjustment => "premium_refund_adjustment",
            Self::GoodwillPayment => "goodwill_payment",
            Self::ThirdPartyPayment => "third_party_payment",
            Self::ApologyOrExplanation => "apology_or_explanation",
            Self::RemedialAction => "remedial_action",
        }
    }

    /// Returns whether this payment type carries money.
    ///
    /// Monetary types require an amount and a rationale; non-monetary
    /// types require an action description instead.
    #[must_use]
    pub const fn is_monetary(&self) -> bool {
        !matches!(self, Self::ApologyOrExplanation | Self::RemedialAction)
    }
}

impl FromStr for RedressType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Alias resolution happens here, once; input is normalized first.
        match s.trim().to_lowercase().as_str() {
            "financial_loss" => Ok(Self::FinancialLoss),
            "interest_on_financial_loss" => Ok(Self::InterestOnFinancialLoss),
            "distress_and_inconvenience" => Ok(Self::DistressAndInconvenience),
            "consequential_loss" => Ok(Self::ConsequentialLoss),
            "premium_refund_adjustment" => Ok(Self::PremiumRefundAdjustment),
            "goodwill_payment" | "goodwill" => Ok(Self::GoodwillPayment),
            "third_party_payment" => Ok(Self::ThirdPartyPayment),
            "apology_or_explanation" | "apology" => Ok(Self::ApologyOrExplanation),
            "remedial_action" | "remedial" => Ok(Self::RemedialAction),
            _ => Err(DomainError::InvalidRedressType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RedressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The payment status of a redress record.
///
/// The full enumeration is persisted, but the lifecycle currently forces
/// `Authorised` on create and update: there is no separate authorisation
/// workflow for redress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RedressPaymentStatus {
    /// Awaiting authorisation.
    #[default]
    Pending,
    /// Authorised for payment.
    Authorised,
    /// Payment has been made.
    Paid,
}

impl RedressPaymentStatus {
    /// Converts this status to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Authorised => "authorised",
            Self::Paid => "paid",
        }
    }
}

impl FromStr for RedressPaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "authorised" => Ok(Self::Authorised),
            "paid" => Ok(Self::Paid),
            _ => Err(DomainError::InvalidPaymentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RedressPaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress of a non-monetary remedial action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    /// Not yet started.
    #[default]
    NotStarted,
    /// In progress.
    InProgress,
    /// Completed.
    Completed,
}

impl ActionStatus {
    /// Converts this status to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for ActionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidActionStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The role held by an acting user.
///
/// Roles are supplied by the external identity collaborator with every
/// mutating call; the lifecycle applies role-sensitive guards for
/// assignment and escalation but never authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full administrative authority.
    Admin,
    /// Works complaints; may only self-assign.
    ComplaintsHandler,
    /// Manages complaints; valid escalation target.
    ComplaintsManager,
    /// Reviews complaints; may assign freely.
    Reviewer,
    /// Read-only access.
    ReadOnly,
}

impl UserRole {
    /// Converts this role to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ComplaintsHandler => "complaints_handler",
            Self::ComplaintsManager => "complaints_manager",
            Self::Reviewer => "reviewer",
            Self::ReadOnly => "read_only",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "complaints_handler" => Ok(Self::ComplaintsHandler),
            "complaints_manager" => Ok(Self::ComplaintsManager),
            "reviewer" => Ok(Self::Reviewer),
            "read_only" => Ok(Self::ReadOnly),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The channel a communication arrived through or was sent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationChannel {
    Phone,
    Email,
    Letter,
    Web,
    ThirdParty,
    Other,
}

impl CommunicationChannel {
    /// Converts this channel to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Letter => "letter",
            Self::Web => "web",
            Self::ThirdParty => "third_party",
            Self::Other => "other",
        }
    }
}

impl FromStr for CommunicationChannel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "letter" => Ok(Self::Letter),
            "web" => Ok(Self::Web),
            "third_party" => Ok(Self::ThirdParty),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidChannel(s.to_string())),
        }
    }
}

impl std::fmt::Display for CommunicationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The direction of a communication relative to the firm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationDirection {
    Inbound,
    Outbound,
}

impl CommunicationDirection {
    /// Converts this direction to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

impl FromStr for CommunicationDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inbound" => Ok(Self::Inbound),
            "outbound" => Ok(Self::Outbound),
            _ => Err(DomainError::InvalidDirection(s.to_string())),
        }
    }
}

impl std::fmt::Display for CommunicationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress of a task attached to a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Open and not yet started.
    #[default]
    Open,
    /// In progress.
    InProgress,
    /// Completed.
    Completed,
}

impl TaskStatus {
    /// Converts this status to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidTaskStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The externally visible unique case identifier.
///
/// The persisted format is bit-exact: `CMP-<4-digit year>-<6-digit
/// zero-padded sequence>`, e.g. `CMP-2026-000042`. It is immutable once
/// assigned and must not change without a migration plan for existing
/// references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaseReference {
    /// The calendar year of allocation.
    year: u16,
    /// The per-year sequence number (1-based, at most six digits).
    sequence: u32,
}

impl CaseReference {
    /// The fixed reference prefix.
    pub const PREFIX: &'static str = "CMP";

    /// Creates a new `CaseReference`.
    ///
    /// # Arguments
    ///
    /// * `year` - The allocation year (must have exactly four digits)
    /// * `sequence` - The per-year sequence number (1 to 999999)
    ///
    /// # Errors
    ///
    /// Returns an error if the year is not four digits or the sequence is
    /// outside the zero-padded six-digit range.
    pub const fn new(year: u16, sequence: u32) -> Result<Self, DomainError> {
        if year < 1000 || year > 9999 {
            return Err(DomainError::InvalidReferenceYear(year));
        }
        if sequence == 0 || sequence > 999_999 {
            return Err(DomainError::InvalidReferenceSequence(sequence));
        }
        Ok(Self { year, sequence })
    }

    /// Returns the allocation year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the per-year sequence number.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl std::fmt::Display for CaseReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:04}-{:06}", Self::PREFIX, self.year, self.sequence)
    }
}

impl FromStr for CaseReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidReference(s.to_string());

        let rest = s.strip_prefix("CMP-").ok_or_else(invalid)?;
        let (year_part, sequence_part) = rest.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || sequence_part.len() != 6 {
            return Err(invalid());
        }
        let year: u16 = year_part.parse().map_err(|_| invalid())?;
        let sequence: u32 = sequence_part.parse().map_err(|_| invalid())?;
        Self::new(year, sequence)
    }
}

impl TryFrom<String> for CaseReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CaseReference> for String {
    fn from(reference: CaseReference) -> Self {
        reference.to_string()
    }
}
