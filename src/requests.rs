multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{ReimbursementRequest, RequestStatus, Role, SubjectKind};

/// Upper bound on recipients in a single request
pub const MAX_RECIPIENTS: usize = 10;

pub const MAX_DESCRIPTION_LEN: usize = 1_000;

pub const MAX_DOCUMENT_REF_LEN: usize = 256;

/// Distinct committee members needed after finance approval
pub const REQUIRED_ADDITIONAL_APPROVALS: usize = 3;

/// Reimbursement request lifecycle:
///
/// `Pending → SecretaryApproved → CommitteeApproved → FinanceApproved →
/// CommitteeAdditionalApproved → Distributed`, with `Cancelled` as the
/// alternate terminal state.
///
/// Every approval reveals a commitment made earlier through `commitApproval`.
#[multiversx_sc::module]
pub trait RequestsModule:
    crate::roles::RolesModule
    + crate::commit_reveal::CommitRevealModule
    + crate::treasury::TreasuryModule
    + crate::pause::PauseModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(createRequest)]
    fn create_request(
        &self,
        recipients: ManagedVec<ManagedAddress>,
        amounts: ManagedVec<BigUint>,
        description: ManagedBuffer,
        document_ref: ManagedBuffer,
        opt_virtual_payer: OptionalValue<ManagedAddress>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let virtual_payer = opt_virtual_payer
            .into_option()
            .unwrap_or_else(ManagedAddress::zero);
        self.create_request_as(
            &caller,
            recipients,
            amounts,
            description,
            document_ref,
            virtual_payer,
        )
    }

    #[endpoint(commitApproval)]
    fn commit_approval(&self, request_id: u64, hash: ManagedByteArray<Self::Api, 32>) {
        let caller = self.blockchain().get_caller();
        self.commit_approval_as(&caller, request_id, hash);
    }

    #[endpoint(approveBySecretary)]
    fn approve_by_secretary(&self, request_id: u64, nonce: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.approve_by_secretary_as(&caller, request_id, nonce);
    }

    #[endpoint(approveByCommittee)]
    fn approve_by_committee(&self, request_id: u64, nonce: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.approve_by_committee_as(&caller, request_id, nonce);
    }

    #[endpoint(approveByFinance)]
    fn approve_by_finance(&self, request_id: u64, nonce: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.approve_by_finance_as(&caller, request_id, nonce);
    }

    #[endpoint(approveByCommitteeAdditional)]
    fn approve_by_committee_additional(&self, request_id: u64, nonce: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.approve_by_committee_additional_as(&caller, request_id, nonce);
    }

    #[endpoint(approveByDirector)]
    fn approve_by_director(&self, request_id: u64, nonce: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        self.approve_by_director_as(&caller, request_id, nonce);
    }

    #[endpoint(cancelRequest)]
    fn cancel_request(&self, request_id: u64) {
        let caller = self.blockchain().get_caller();
        self.cancel_request_as(&caller, request_id);
    }

    // ========================================================
    // OPERATIONS (shared by direct and relayed calls)
    // ========================================================

    fn create_request_as(
        &self,
        caller: &ManagedAddress,
        recipients: ManagedVec<ManagedAddress>,
        amounts: ManagedVec<BigUint>,
        description: ManagedBuffer,
        document_ref: ManagedBuffer,
        virtual_payer: ManagedAddress,
    ) -> u64 {
        self.require_active();
        self.require_role(Role::Requester, caller, ERR_NOT_REQUESTER);

        require!(!recipients.is_empty(), ERR_EMPTY_RECIPIENTS);
        require!(recipients.len() == amounts.len(), ERR_LENGTH_MISMATCH);
        require!(recipients.len() <= MAX_RECIPIENTS, ERR_TOO_MANY_RECIPIENTS);
        require!(description.len() <= MAX_DESCRIPTION_LEN, ERR_DESCRIPTION_TOO_LONG);
        require!(document_ref.len() <= MAX_DOCUMENT_REF_LEN, ERR_DOCUMENT_REF_TOO_LONG);

        let sc_address = self.blockchain().get_sc_address();
        for recipient in recipients.iter() {
            require!(!recipient.is_zero(), ERR_ZERO_ADDRESS);
            require!(*recipient != sc_address, ERR_SELF_RECIPIENT);
        }

        let mut total_amount = BigUint::zero();
        for amount in amounts.iter() {
            require!(*amount > 0u64, ERR_ZERO_AMOUNT);
            total_amount += &*amount;
        }

        let request_id = self.request_count().get() + 1;
        let now = self.blockchain().get_block_timestamp();

        let request = ReimbursementRequest {
            id: request_id,
            requester: caller.clone(),
            recipients,
            amounts,
            total_amount,
            description,
            document_ref,
            status: RequestStatus::Pending,
            secretary_approver: ManagedAddress::zero(),
            committee_approver: ManagedAddress::zero(),
            finance_approver: ManagedAddress::zero(),
            additional_committee_approvers: ManagedVec::new(),
            director_approver: ManagedAddress::zero(),
            created_at: now,
            updated_at: now,
            virtual_payer,
        };

        self.requests(request_id).set(&request);
        self.request_count().set(request_id);

        self.request_created_event(request_id, caller, now, &request.total_amount);

        request_id
    }

    fn commit_approval_as(
        &self,
        caller: &ManagedAddress,
        request_id: u64,
        hash: ManagedByteArray<Self::Api, 32>,
    ) {
        self.require_active();
        require!(self.is_approver(caller), ERR_NOT_APPROVER);

        let request = self.get_existing_request(request_id);
        require!(!request.status.is_terminal(), ERR_REQUEST_TERMINAL);

        self.commit(SubjectKind::Request, request_id, caller, hash);
    }

    fn approve_by_secretary_as(&self, caller: &ManagedAddress, request_id: u64, nonce: ManagedBuffer) {
        self.require_active();
        self.require_role(Role::Secretary, caller, ERR_NOT_SECRETARY);

        let mut request = self.get_existing_request(request_id);
        require!(request.status == RequestStatus::Pending, ERR_INVALID_SEQUENCE);

        self.reveal(SubjectKind::Request, request_id, caller, &nonce);

        request.secretary_approver = caller.clone();
        self.advance_request(&mut request, caller, RequestStatus::SecretaryApproved);
    }

    fn approve_by_committee_as(&self, caller: &ManagedAddress, request_id: u64, nonce: ManagedBuffer) {
        self.require_active();
        self.require_role(Role::Committee, caller, ERR_NOT_COMMITTEE);

        let mut request = self.get_existing_request(request_id);
        require!(
            request.status == RequestStatus::SecretaryApproved,
            ERR_INVALID_SEQUENCE
        );

        self.reveal(SubjectKind::Request, request_id, caller, &nonce);

        request.committee_approver = caller.clone();
        self.advance_request(&mut request, caller, RequestStatus::CommitteeApproved);
    }

    fn approve_by_finance_as(&self, caller: &ManagedAddress, request_id: u64, nonce: ManagedBuffer) {
        self.require_active();
        self.require_role(Role::Finance, caller, ERR_NOT_FINANCE);

        let mut request = self.get_existing_request(request_id);
        require!(
            request.status == RequestStatus::CommitteeApproved,
            ERR_INVALID_SEQUENCE
        );

        self.reveal(SubjectKind::Request, request_id, caller, &nonce);

        request.finance_approver = caller.clone();
        self.advance_request(&mut request, caller, RequestStatus::FinanceApproved);
    }

    fn approve_by_committee_additional_as(
        &self,
        caller: &ManagedAddress,
        request_id: u64,
        nonce: ManagedBuffer,
    ) {
        self.require_active();
        self.require_role(Role::Committee, caller, ERR_NOT_COMMITTEE);

        let mut request = self.get_existing_request(request_id);
        require!(
            !request.additional_committee_approvers.contains(caller),
            ERR_ALREADY_APPROVED
        );
        require!(
            request.status != RequestStatus::CommitteeAdditionalApproved,
            ERR_ADDITIONAL_COMPLETE
        );
        require!(
            request.status == RequestStatus::FinanceApproved,
            ERR_INVALID_SEQUENCE
        );

        self.reveal(SubjectKind::Request, request_id, caller, &nonce);

        request.additional_committee_approvers.push(caller.clone());
        let approvals = request.additional_committee_approvers.len();
        let now = self.blockchain().get_block_timestamp();
        request.updated_at = now;

        self.additional_committee_approval_event(request_id, caller, now, approvals as u32);

        if approvals >= REQUIRED_ADDITIONAL_APPROVALS {
            self.advance_request(
                &mut request,
                caller,
                RequestStatus::CommitteeAdditionalApproved,
            );
        } else {
            self.requests(request_id).set(&request);
        }
    }

    /// Final gate. Pays every recipient and marks the request Distributed,
    /// all in this one transaction.
    fn approve_by_director_as(&self, caller: &ManagedAddress, request_id: u64, nonce: ManagedBuffer) {
        self.require_active();
        self.require_role(Role::Director, caller, ERR_NOT_DIRECTOR);

        let mut request = self.get_existing_request(request_id);
        require!(
            request.status == RequestStatus::CommitteeAdditionalApproved
                && request.additional_committee_approvers.len()
                    == REQUIRED_ADDITIONAL_APPROVALS,
            ERR_INVALID_SEQUENCE
        );
        require!(
            !self.distribution_lock(request_id).get(),
            ERR_DISTRIBUTION_IN_PROGRESS
        );

        self.reveal(SubjectKind::Request, request_id, caller, &nonce);

        self.distribution_lock(request_id).set(true);

        self.record_distribution(&request.total_amount);
        request.director_approver = caller.clone();
        self.advance_request(&mut request, caller, RequestStatus::Distributed);

        self.pay_out(&request.recipients, &request.amounts);
        for i in 0..request.recipients.len() {
            self.payment_sent_event(
                request_id,
                &request.recipients.get(i),
                &request.amounts.get(i),
            );
        }

        self.distribution_lock(request_id).clear();

        self.funds_distributed_event(
            request_id,
            caller,
            request.updated_at,
            &request.total_amount,
        );
    }

    fn cancel_request_as(&self, caller: &ManagedAddress, request_id: u64) {
        self.require_active();

        let mut request = self.get_existing_request(request_id);
        require!(
            request.requester == *caller || self.role_members(Role::Admin).contains(caller),
            ERR_CANNOT_CANCEL
        );
        require!(request.status == RequestStatus::Pending, ERR_INVALID_SEQUENCE);

        let now = self.blockchain().get_block_timestamp();
        request.status = RequestStatus::Cancelled;
        request.updated_at = now;
        self.requests(request_id).set(&request);
        self.clear_commitments(SubjectKind::Request, request_id);

        self.request_cancelled_event(request_id, caller, now);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn get_existing_request(&self, request_id: u64) -> ReimbursementRequest<Self::Api> {
        require!(!self.requests(request_id).is_empty(), ERR_REQUEST_NOT_FOUND);
        self.requests(request_id).get()
    }

    fn advance_request(
        &self,
        request: &mut ReimbursementRequest<Self::Api>,
        approver: &ManagedAddress,
        status: RequestStatus,
    ) {
        let now = self.blockchain().get_block_timestamp();
        request.status = status;
        request.updated_at = now;
        self.requests(request.id).set(&*request);
        if status.is_terminal() {
            self.clear_commitments(SubjectKind::Request, request.id);
        }

        self.request_approved_event(request.id, approver, status, now);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getRequest)]
    fn get_request(&self, request_id: u64) -> ReimbursementRequest<Self::Api> {
        self.get_existing_request(request_id)
    }

    /// Requests `from..from+count` (ids start at 1).
    #[view(getRequests)]
    fn get_requests(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<ReimbursementRequest<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.request_count().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            if !self.requests(id).is_empty() {
                result.push(self.requests(id).get());
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getRequestCount)]
    #[storage_mapper("requestCount")]
    fn request_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("requests")]
    fn requests(&self, id: u64) -> SingleValueMapper<ReimbursementRequest<Self::Api>>;

    /// Set while a request's payout runs; rejects re-entrant distribution
    #[storage_mapper("distributionLock")]
    fn distribution_lock(&self, request_id: u64) -> SingleValueMapper<bool>;
}
