multiversx_sc::imports!();

use crate::types::{ClosureStatus, RequestStatus, Role, SubjectKind};

/// Audit trail. Every state transition emits at least one of these, with ids
/// and identities as indexed topics. A director payout, for instance, logs the
/// reveal, the status change, one `paymentSent` per recipient and a final
/// `fundsDistributed`.
#[multiversx_sc::module]
pub trait EventsModule {
    // ── Roles ──

    #[event("roleGranted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    #[event("roleRevoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    // ── Commit-reveal ──

    #[event("approvalCommitted")]
    fn approval_committed_event(
        &self,
        #[indexed] kind: SubjectKind,
        #[indexed] subject_id: u64,
        #[indexed] committer: &ManagedAddress,
        timestamp: u64,
    );

    #[event("approvalRevealed")]
    fn approval_revealed_event(
        &self,
        #[indexed] kind: SubjectKind,
        #[indexed] subject_id: u64,
        #[indexed] committer: &ManagedAddress,
        timestamp: u64,
    );

    // ── Requests ──

    #[event("requestCreated")]
    fn request_created_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] requester: &ManagedAddress,
        #[indexed] timestamp: u64,
        total_amount: &BigUint,
    );

    #[event("requestApproved")]
    fn request_approved_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] approver: &ManagedAddress,
        #[indexed] status: RequestStatus,
        timestamp: u64,
    );

    #[event("additionalCommitteeApproval")]
    fn additional_committee_approval_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] approver: &ManagedAddress,
        #[indexed] timestamp: u64,
        approvals: u32,
    );

    #[event("paymentSent")]
    fn payment_sent_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("fundsDistributed")]
    fn funds_distributed_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] director: &ManagedAddress,
        #[indexed] timestamp: u64,
        total_amount: &BigUint,
    );

    #[event("requestCancelled")]
    fn request_cancelled_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] cancelled_by: &ManagedAddress,
        timestamp: u64,
    );

    #[event("abandonedRequestCancelled")]
    fn abandoned_request_cancelled_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] cancelled_by: &ManagedAddress,
        #[indexed] timestamp: u64,
        created_at: u64,
    );

    // ── Closures ──

    #[event("closureInitiated")]
    fn closure_initiated_event(
        &self,
        #[indexed] closure_id: u64,
        #[indexed] initiator: &ManagedAddress,
        #[indexed] return_address: &ManagedAddress,
        reason: &ManagedBuffer,
    );

    #[event("closureApproved")]
    fn closure_approved_event(
        &self,
        #[indexed] closure_id: u64,
        #[indexed] approver: &ManagedAddress,
        #[indexed] status: ClosureStatus,
        approvals: u32,
    );

    #[event("closureExecuted")]
    fn closure_executed_event(
        &self,
        #[indexed] closure_id: u64,
        #[indexed] director: &ManagedAddress,
        #[indexed] return_address: &ManagedAddress,
        returned_amount: &BigUint,
    );

    #[event("closureCancelled")]
    fn closure_cancelled_event(
        &self,
        #[indexed] closure_id: u64,
        #[indexed] cancelled_by: &ManagedAddress,
        timestamp: u64,
    );

    // ── Treasury ──

    #[event("budgetRecorded")]
    fn budget_recorded_event(&self, #[indexed] admin: &ManagedAddress, budget: &BigUint);

    #[event("fundsDeposited")]
    fn funds_deposited_event(&self, #[indexed] depositor: &ManagedAddress, amount: &BigUint);

    // ── Project state ──

    #[event("projectPaused")]
    fn project_paused_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("projectUnpaused")]
    fn project_unpaused_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("projectClosed")]
    fn project_closed_event(&self, #[indexed] closure_id: u64, timestamp: u64);

    #[event("trustedRelayUpdated")]
    fn trusted_relay_updated_event(&self, #[indexed] admin: &ManagedAddress, relay: &ManagedAddress);
}
