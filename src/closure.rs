multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{ClosureStatus, EmergencyClosure, Role, SubjectKind};

pub const MAX_REASON_LEN: usize = 1_000;

/// Distinct committee members needed before the director may close
pub const REQUIRED_CLOSURE_APPROVALS: usize = 3;

/// Emergency project closure.
///
/// `Initiated → PartiallyApproved → FullyApproved → Executed`, or `Cancelled`.
/// Execution returns the whole remaining balance and closes the project for
/// good. Only one closure may be active at a time.
#[multiversx_sc::module]
pub trait ClosureModule:
    crate::roles::RolesModule
    + crate::commit_reveal::CommitRevealModule
    + crate::treasury::TreasuryModule
    + crate::pause::PauseModule
    + crate::events::EventsModule
{
    #[endpoint(initiateClosure)]
    fn initiate_closure(&self, return_address: ManagedAddress, reason: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        self.initiate_closure_as(&caller, return_address, reason)
    }

    #[endpoint(commitClosureApproval)]
    fn commit_closure_approval(&self, closure_id: u64, hash: ManagedByteArray<Self::Api, 32>) {
        let caller = self.blockchain().get_caller();
        self.commit_closure_approval_as(&caller, closure_id, hash);
    }

    #[endpoint(approveClosure)]
    fn approve_closure(&self, closure_id: u64, nonce: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.approve_closure_as(&caller, closure_id, nonce);
    }

    #[endpoint(directorApproveClosure)]
    fn director_approve_closure(&self, closure_id: u64, nonce: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.director_approve_closure_as(&caller, closure_id, nonce);
    }

    #[endpoint(cancelClosure)]
    fn cancel_closure(&self, closure_id: u64) {
        let caller = self.blockchain().get_caller();
        self.cancel_closure_as(&caller, closure_id);
    }

    // ========================================================
    // OPERATIONS
    // ========================================================

    fn initiate_closure_as(
        &self,
        caller: &ManagedAddress,
        return_address: ManagedAddress,
        reason: ManagedBuffer,
    ) -> u64 {
        self.require_active();
        self.require_role(Role::Committee, caller, ERR_NOT_COMMITTEE);
        require!(!return_address.is_zero(), ERR_ZERO_ADDRESS);
        require!(!reason.is_empty(), ERR_EMPTY_REASON);
        require!(reason.len() <= MAX_REASON_LEN, ERR_REASON_TOO_LONG);
        require!(self.active_closure_id().is_empty(), ERR_ACTIVE_CLOSURE_EXISTS);

        let closure_id = self.closure_count().get() + 1;
        let now = self.blockchain().get_block_timestamp();

        let closure = EmergencyClosure {
            id: closure_id,
            initiator: caller.clone(),
            return_address,
            reason,
            status: ClosureStatus::Initiated,
            committee_approvers: ManagedVec::new(),
            director_approver: ManagedAddress::zero(),
            remaining_balance: BigUint::zero(),
            created_at: now,
            updated_at: now,
        };

        self.closures(closure_id).set(&closure);
        self.closure_count().set(closure_id);
        self.active_closure_id().set(closure_id);

        self.closure_initiated_event(
            closure_id,
            caller,
            &closure.return_address,
            &closure.reason,
        );

        closure_id
    }

    fn commit_closure_approval_as(
        &self,
        caller: &ManagedAddress,
        closure_id: u64,
        hash: ManagedByteArray<Self::Api, 32>,
    ) {
        self.require_active();
        require!(
            self.role_members(Role::Committee).contains(caller)
                || self.role_members(Role::Director).contains(caller),
            ERR_NOT_APPROVER
        );

        let closure = self.get_existing_closure(closure_id);
        require!(!closure.status.is_terminal(), ERR_CLOSURE_TERMINAL);

        self.commit(SubjectKind::Closure, closure_id, caller, hash);
    }

    fn approve_closure_as(&self, caller: &ManagedAddress, closure_id: u64, nonce: ManagedBuffer) {
        self.require_active();
        self.require_role(Role::Committee, caller, ERR_NOT_COMMITTEE);

        let mut closure = self.get_existing_closure(closure_id);
        require!(!closure.status.is_terminal(), ERR_CLOSURE_TERMINAL);
        require!(
            !closure.committee_approvers.contains(caller),
            ERR_ALREADY_APPROVED
        );
        require!(
            closure.status == ClosureStatus::Initiated
                || closure.status == ClosureStatus::PartiallyApproved,
            ERR_CLOSURE_SEQUENCE
        );

        self.reveal(SubjectKind::Closure, closure_id, caller, &nonce);

        closure.committee_approvers.push(caller.clone());
        let approvals = closure.committee_approvers.len();
        closure.status = if approvals >= REQUIRED_CLOSURE_APPROVALS {
            ClosureStatus::FullyApproved
        } else {
            ClosureStatus::PartiallyApproved
        };
        closure.updated_at = self.blockchain().get_block_timestamp();
        self.closures(closure_id).set(&closure);

        self.closure_approved_event(closure_id, caller, closure.status, approvals as u32);
    }

    /// Returns every remaining token to the closure's return address and
    /// closes the project. Nothing can mutate the project afterwards.
    fn director_approve_closure_as(
        &self,
        caller: &ManagedAddress,
        closure_id: u64,
        nonce: ManagedBuffer,
    ) {
        self.require_active();
        self.require_role(Role::Director, caller, ERR_NOT_DIRECTOR);

        let mut closure = self.get_existing_closure(closure_id);
        require!(
            closure.status == ClosureStatus::FullyApproved
                && closure.committee_approvers.len() >= REQUIRED_CLOSURE_APPROVALS,
            ERR_CLOSURE_SEQUENCE
        );
        require!(
            !self.closure_lock(closure_id).get(),
            ERR_DISTRIBUTION_IN_PROGRESS
        );

        self.reveal(SubjectKind::Closure, closure_id, caller, &nonce);

        self.closure_lock(closure_id).set(true);

        // State is final before any token leaves the contract.
        closure.director_approver = caller.clone();
        closure.status = ClosureStatus::Executed;
        closure.updated_at = self.blockchain().get_block_timestamp();
        closure.remaining_balance = self.project_balance();
        self.closures(closure_id).set(&closure);
        self.active_closure_id().clear();
        self.clear_commitments(SubjectKind::Closure, closure_id);
        self.close_permanently(closure_id);

        let returned = self.return_remaining(&closure.return_address);

        self.closure_lock(closure_id).clear();

        self.closure_executed_event(closure_id, caller, &closure.return_address, &returned);
    }

    fn cancel_closure_as(&self, caller: &ManagedAddress, closure_id: u64) {
        self.require_active();

        let mut closure = self.get_existing_closure(closure_id);
        require!(
            closure.initiator == *caller || self.role_members(Role::Admin).contains(caller),
            ERR_CANNOT_CANCEL_CLOSURE
        );
        require!(!closure.status.is_terminal(), ERR_CLOSURE_TERMINAL);

        let now = self.blockchain().get_block_timestamp();
        closure.status = ClosureStatus::Cancelled;
        closure.updated_at = now;
        self.closures(closure_id).set(&closure);
        self.active_closure_id().clear();
        self.clear_commitments(SubjectKind::Closure, closure_id);

        self.closure_cancelled_event(closure_id, caller, now);
    }

    fn get_existing_closure(&self, closure_id: u64) -> EmergencyClosure<Self::Api> {
        require!(!self.closures(closure_id).is_empty(), ERR_CLOSURE_NOT_FOUND);
        self.closures(closure_id).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getClosure)]
    fn get_closure(&self, closure_id: u64) -> EmergencyClosure<Self::Api> {
        self.get_existing_closure(closure_id)
    }

    #[view(getClosures)]
    fn get_closures(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<EmergencyClosure<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.closure_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            if !self.closures(id).is_empty() {
                result.push(self.closures(id).get());
            }
        }
        result
    }

    /// 0 when no closure is active
    #[view(getActiveClosureId)]
    fn get_active_closure_id(&self) -> u64 {
        self.active_closure_id().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getClosureCount)]
    #[storage_mapper("closureCount")]
    fn closure_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("closures")]
    fn closures(&self, id: u64) -> SingleValueMapper<EmergencyClosure<Self::Api>>;

    #[storage_mapper("activeClosureId")]
    fn active_closure_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("closureLock")]
    fn closure_lock(&self, closure_id: u64) -> SingleValueMapper<bool>;
}
