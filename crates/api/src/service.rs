// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The complaint service: one operation per lifecycle transition.
//!
//! Every operation follows the same shape: load the aggregate slice,
//! run the pure state machine, commit the whole result in one storage
//! transaction. Failures are detected before any write, so a rejected
//! operation leaves the complaint unchanged.

use time::OffsetDateTime;
use tracing::{info, warn};

use casetrack_core::{ActingUser, CaseState, Command, apply, open_complaint};
use casetrack_domain::{
    Communication, Complaint, Outcome, RedressPayment, SlaConfig, Task, User, UserRole,
};
use casetrack_persistence::{
    MAX_REFERENCE_ATTEMPTS, PersistedTransition, Persistence, PersistenceError, StoredEvent,
};

use crate::capabilities::{can_delete_complaints, can_mutate_complaints};
use crate::error::{ApiError, translate_core_error, translate_persistence_error};
use crate::request_response::{
    CloseRequest, CommunicationRequest, CreateComplaintRequest, OutcomeRequest, RedressRequest,
    RedressUpdateRequest, ReferToFosRequest, TaskRequest, UpdateComplaintRequest,
};

/// The boundary exposed to collaborators.
///
/// The acting user id and role accompany every mutating call; the
/// service applies role guards but never authenticates.
pub struct ComplaintService {
    persistence: Persistence,
    config: SlaConfig,
}

impl ComplaintService {
    /// Creates a new service over the given storage with the given SLA
    /// windows.
    #[must_use]
    pub const fn new(persistence: Persistence, config: SlaConfig) -> Self {
        Self {
            persistence,
            config,
        }
    }

    /// Creates a complaint: allocates a reference, computes due dates,
    /// persists the complaint with its complainant and policy, and logs
    /// `created`.
    ///
    /// A reference collision (a racing creator persisted the same
    /// reference first) is retried transparently up to
    /// [`MAX_REFERENCE_ATTEMPTS`]; exhaustion surfaces as a conflict.
    ///
    /// # Errors
    ///
    /// Returns a `validation` error for intake-rule violations, a
    /// `conflict` error when retries are exhausted, or an
    /// `authorization` error for read-only actors.
    pub fn create_complaint(
        &mut self,
        request: CreateComplaintRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "create complaint")?;

        let year: u16 = u16::try_from(now.year()).map_err(|_| ApiError::Internal {
            message: format!("year {} is out of range", now.year()),
        })?;
        let (intake, complainant, policy) = request.into_parts();

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let reference = self
                .persistence
                .allocate_reference(year)
                .map_err(translate_persistence_error)?;
            let opened = open_complaint(intake.clone(), reference, &self.config, actor, now)
                .map_err(translate_core_error)?;

            match self
                .persistence
                .insert_complaint(&opened, &complainant, &policy)
            {
                Ok(complaint) => {
                    info!(reference = %complaint.reference, "Complaint created");
                    return Ok(complaint);
                }
                Err(PersistenceError::UniqueViolation(detail)) => {
                    // Retryable: the burned sequence number leaves a gap,
                    // which the reference contract allows.
                    warn!(attempts, %detail, "Reference collision, retrying");
                    if attempts >= MAX_REFERENCE_ATTEMPTS {
                        return Err(translate_persistence_error(
                            PersistenceError::ReferenceExhausted { year, attempts },
                        ));
                    }
                }
                Err(other) => return Err(translate_persistence_error(other)),
            }
        }
    }

    /// Sends the acknowledgement. No-op outside `new`/`reopened`.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist or the actor is
    /// read-only.
    pub fn acknowledge(
        &mut self,
        complaint_id: i64,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "acknowledge")?;
        self.run_transition(complaint_id, Command::Acknowledge, actor, now)
            .map(|persisted| persisted.complaint)
    }

    /// Begins the investigation. No-op outside the allowed source
    /// states.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist or the actor is
    /// read-only.
    pub fn start_investigation(
        &mut self,
        complaint_id: i64,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "start investigation")?;
        self.run_transition(complaint_id, Command::StartInvestigation, actor, now)
            .map(|persisted| persisted.complaint)
    }

    /// Drafts the response. No-op when already drafted or outside the
    /// forward path.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist or the actor is
    /// read-only.
    pub fn draft_response(
        &mut self,
        complaint_id: i64,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "draft response")?;
        self.run_transition(complaint_id, Command::DraftResponse, actor, now)
            .map(|persisted| persisted.complaint)
    }

    /// Records (or re-records) the complaint's outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist or the actor is
    /// read-only.
    pub fn record_outcome(
        &mut self,
        complaint_id: i64,
        request: OutcomeRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Outcome, ApiError> {
        ensure_can_mutate(actor, "record outcome")?;
        let persisted = self.run_transition(
            complaint_id,
            Command::RecordOutcome {
                outcome: request.outcome,
                rationale: request.rationale,
                notes: request.notes,
            },
            actor,
            now,
        )?;
        persisted.outcome.ok_or_else(|| ApiError::Internal {
            message: String::from("outcome transition produced no outcome row"),
        })
    }

    /// Issues the final response. Requires a recorded outcome.
    ///
    /// # Errors
    ///
    /// Returns a `precondition` error when no outcome is recorded.
    pub fn issue_final_response(
        &mut self,
        complaint_id: i64,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "issue final response")?;
        self.run_transition(complaint_id, Command::IssueFinalResponse, actor, now)
            .map(|persisted| persisted.complaint)
    }

    /// Closes the complaint. Requires an outcome and an issued final
    /// response.
    ///
    /// # Errors
    ///
    /// Returns a `precondition` error when either requirement is
    /// missing.
    pub fn close_complaint(
        &mut self,
        complaint_id: i64,
        request: CloseRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "close complaint")?;
        self.run_transition(
            complaint_id,
            Command::Close {
                closed_at: request.closed_at,
                comment: request.comment,
            },
            actor,
            now,
        )
        .map(|persisted| persisted.complaint)
    }

    /// Closes the complaint as non-reportable, bypassing the outcome
    /// and final-response preconditions. Administrative override.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist or the actor is
    /// read-only.
    pub fn close_non_reportable(
        &mut self,
        complaint_id: i64,
        request: CloseRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "close non-reportable")?;
        self.run_transition(
            complaint_id,
            Command::CloseNonReportable {
                closed_at: request.closed_at,
                comment: request.comment,
            },
            actor,
            now,
        )
        .map(|persisted| persisted.complaint)
    }

    /// Escalates to a complaints manager, reassigning the case to them.
    ///
    /// # Errors
    ///
    /// Returns a `validation` error when the target is not an active
    /// complaints manager, or `not_found` when the user id is unknown.
    pub fn escalate(
        &mut self,
        complaint_id: i64,
        manager_id: i64,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "escalate")?;
        let manager: User = self
            .persistence
            .get_user(manager_id)
            .map_err(translate_persistence_error)?;
        self.run_transition(complaint_id, Command::Escalate { manager }, actor, now)
            .map(|persisted| persisted.complaint)
    }

    /// Reopens the complaint, clearing the closure and both breach
    /// flags while preserving the original receipt time and due dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist or the actor is
    /// read-only.
    pub fn reopen(
        &mut self,
        complaint_id: i64,
        reason: Option<String>,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "reopen")?;
        self.run_transition(complaint_id, Command::Reopen { reason }, actor, now)
            .map(|persisted| persisted.complaint)
    }

    /// Refers the complaint to the Financial Ombudsman Service,
    /// auto-reopening first when it is closed.
    ///
    /// # Errors
    ///
    /// Returns a `validation` error when the complaint is already
    /// referred.
    pub fn refer_to_fos(
        &mut self,
        complaint_id: i64,
        request: ReferToFosRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "refer to FOS")?;
        self.run_transition(
            complaint_id,
            Command::ReferToFos {
                fos_reference: request.fos_reference,
                fos_referred_at: request.fos_referred_at,
            },
            actor,
            now,
        )
        .map(|persisted| persisted.complaint)
    }

    /// Assigns a handler. Admins, reviewers, and managers assign
    /// freely; a handler may only self-assign an unassigned complaint.
    ///
    /// # Errors
    ///
    /// Returns an `authorization` error when the capability rules
    /// reject the actor.
    pub fn assign_handler(
        &mut self,
        complaint_id: i64,
        handler_id: i64,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "assign handler")?;
        let handler: User = self
            .persistence
            .get_user(handler_id)
            .map_err(translate_persistence_error)?;
        self.run_transition(complaint_id, Command::AssignHandler { handler }, actor, now)
            .map(|persisted| persisted.complaint)
    }

    /// Adds a redress payment after validating the monetary or
    /// non-monetary rules.
    ///
    /// # Errors
    ///
    /// Returns a `validation` error naming the missing field.
    pub fn add_redress(
        &mut self,
        complaint_id: i64,
        request: RedressRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<RedressPayment, ApiError> {
        ensure_can_mutate(actor, "add redress")?;
        let persisted = self.run_transition(
            complaint_id,
            Command::AddRedress {
                input: request.into_input(),
            },
            actor,
            now,
        )?;
        persisted.redress.ok_or_else(|| ApiError::Internal {
            message: String::from("redress transition produced no redress row"),
        })
    }

    /// Updates a redress payment. Non-monetary payments must keep a
    /// non-blank action description.
    ///
    /// # Errors
    ///
    /// Returns `not_found` when the payment is not on the complaint, or
    /// a `validation` error for rule violations.
    pub fn update_redress(
        &mut self,
        complaint_id: i64,
        redress_id: i64,
        request: RedressUpdateRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<RedressPayment, ApiError> {
        ensure_can_mutate(actor, "update redress")?;
        let payment: RedressPayment = self
            .persistence
            .get_redress(complaint_id, redress_id)
            .map_err(translate_persistence_error)?;
        let persisted = self.run_transition(
            complaint_id,
            Command::UpdateRedress {
                payment,
                changes: request.into_update(),
            },
            actor,
            now,
        )?;
        persisted.redress.ok_or_else(|| ApiError::Internal {
            message: String::from("redress transition produced no redress row"),
        })
    }

    /// Updates the complaint's detail fields, auditing category changes
    /// after the final response distinctly.
    ///
    /// # Errors
    ///
    /// Returns a `validation` error for category-rule violations.
    pub fn update_details(
        &mut self,
        complaint_id: i64,
        request: UpdateComplaintRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        ensure_can_mutate(actor, "update complaint")?;
        self.run_transition(
            complaint_id,
            Command::UpdateDetails {
                changes: request.into_update(),
            },
            actor,
            now,
        )
        .map(|persisted| persisted.complaint)
    }

    /// Logs a communication against the complaint.
    ///
    /// # Errors
    ///
    /// Returns a `validation` error for a blank summary.
    pub fn add_communication(
        &mut self,
        complaint_id: i64,
        request: CommunicationRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Communication, ApiError> {
        ensure_can_mutate(actor, "add communication")?;
        let persisted = self.run_transition(
            complaint_id,
            Command::AddCommunication {
                channel: request.channel,
                direction: request.direction,
                summary: request.summary,
                occurred_at: request.occurred_at,
                is_final_response: request.is_final_response,
            },
            actor,
            now,
        )?;
        persisted.communication.ok_or_else(|| ApiError::Internal {
            message: String::from("communication transition produced no row"),
        })
    }

    /// Adds a task to the complaint.
    ///
    /// # Errors
    ///
    /// Returns a `validation` error for a blank title.
    pub fn add_task(
        &mut self,
        complaint_id: i64,
        request: TaskRequest,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Task, ApiError> {
        ensure_can_mutate(actor, "add task")?;
        let persisted = self.run_transition(
            complaint_id,
            Command::AddTask {
                title: request.title,
                description: request.description,
                due_date: request.due_date,
                assigned_to_id: request.assigned_to_id,
                is_checklist: request.is_checklist,
            },
            actor,
            now,
        )?;
        persisted.task.ok_or_else(|| ApiError::Internal {
            message: String::from("task transition produced no row"),
        })
    }

    /// Retrieves a complaint for a detail view: logs an `accessed`
    /// event and returns the complaint with freshly recomputed breach
    /// flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist.
    pub fn get_complaint(
        &mut self,
        complaint_id: i64,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        self.run_transition(complaint_id, Command::RecordAccess, actor, now)?;
        self.refresh_breach_flags(complaint_id, now)
    }

    /// Recomputes the live breach flags without logging anything.
    ///
    /// Invocable by read paths (list/detail views); persists the
    /// latest computed values for filtering but never writes breach
    /// history.
    ///
    /// # Errors
    ///
    /// Returns an error if the complaint does not exist.
    pub fn refresh_breach_flags(
        &mut self,
        complaint_id: i64,
        now: OffsetDateTime,
    ) -> Result<Complaint, ApiError> {
        self.persistence
            .refresh_breach_flags(complaint_id, now)
            .map_err(translate_persistence_error)
    }

    /// Returns a complaint's events ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn events(&mut self, complaint_id: i64) -> Result<Vec<StoredEvent>, ApiError> {
        self.persistence
            .events_for_complaint(complaint_id)
            .map_err(translate_persistence_error)
    }

    /// Creates a user in the collaborator store.
    ///
    /// # Errors
    ///
    /// Returns a `conflict` error when the email is already taken.
    pub fn create_user(
        &mut self,
        full_name: &str,
        email: &str,
        role: UserRole,
    ) -> Result<User, ApiError> {
        self.persistence
            .create_user(full_name, email, role)
            .map_err(translate_persistence_error)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns `not_found` when the user does not exist.
    pub fn get_user(&mut self, user_id: i64) -> Result<User, ApiError> {
        self.persistence
            .get_user(user_id)
            .map_err(translate_persistence_error)
    }

    /// Hard-deletes a complaint and all owned children. Administrative
    /// override; admins only.
    ///
    /// # Errors
    ///
    /// Returns an `authorization` error for non-admin actors.
    pub fn delete_complaint(
        &mut self,
        complaint_id: i64,
        actor: &ActingUser,
    ) -> Result<(), ApiError> {
        if !can_delete_complaints(actor.role) {
            return Err(ApiError::Authorization {
                action: String::from("delete complaint"),
                message: format!("role '{}' may not delete complaints", actor.role),
            });
        }
        self.persistence
            .delete_complaint(complaint_id)
            .map_err(translate_persistence_error)
    }

    /// Loads, applies, and atomically persists one transition.
    fn run_transition(
        &mut self,
        complaint_id: i64,
        command: Command,
        actor: &ActingUser,
        now: OffsetDateTime,
    ) -> Result<PersistedTransition, ApiError> {
        let state: CaseState = self
            .persistence
            .load_case_state(complaint_id)
            .map_err(translate_persistence_error)?;
        let result = apply(&state, command, actor, now).map_err(translate_core_error)?;
        self.persistence
            .persist_transition(&result)
            .map_err(translate_persistence_error)
    }
}

/// Rejects read-only actors before any mutating work happens.
fn ensure_can_mutate(actor: &ActingUser, action: &'static str) -> Result<(), ApiError> {
    if can_mutate_complaints(actor.role) {
        Ok(())
    } else {
        Err(ApiError::Authorization {
            action: action.to_string(),
            message: format!("role '{}' may not modify complaints", actor.role),
        })
    }
}
