multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{RequestStatus, SubjectKind};

/// Requests older than this (15 days in seconds) may be cancelled by anyone
pub const ABANDONED_GRACE_PERIOD: u64 = 1_296_000;

/// Permissionless cleanup of requests that never finished their approvals.
#[multiversx_sc::module]
pub trait ReaperModule:
    crate::requests::RequestsModule
    + crate::roles::RolesModule
    + crate::commit_reveal::CommitRevealModule
    + crate::treasury::TreasuryModule
    + crate::pause::PauseModule
    + crate::events::EventsModule
{
    #[endpoint(cancelAbandonedRequest)]
    fn cancel_abandoned_request(&self, request_id: u64) {
        let caller = self.blockchain().get_caller();
        self.cancel_abandoned_request_as(&caller, request_id);
    }

    fn cancel_abandoned_request_as(&self, caller: &ManagedAddress, request_id: u64) {
        self.require_active();

        let mut request = self.get_existing_request(request_id);
        require!(!request.status.is_terminal(), ERR_REQUEST_TERMINAL);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now > request.created_at + ABANDONED_GRACE_PERIOD,
            ERR_NOT_ABANDONED
        );

        request.status = RequestStatus::Cancelled;
        request.updated_at = now;
        self.requests(request_id).set(&request);
        self.clear_commitments(SubjectKind::Request, request_id);

        self.abandoned_request_cancelled_event(request_id, caller, now, request.created_at);
    }

    /// True if `cancelAbandonedRequest` would currently succeed.
    #[view(isAbandoned)]
    fn is_abandoned(&self, request_id: u64) -> bool {
        if self.requests(request_id).is_empty() {
            return false;
        }
        let request = self.requests(request_id).get();
        let now = self.blockchain().get_block_timestamp();
        !request.status.is_terminal() && now > request.created_at + ABANDONED_GRACE_PERIOD
    }
}
