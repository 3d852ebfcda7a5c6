multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{RelayedAction, Role};

/// Gasless submission: the trusted relay forwards an action it has verified
/// on behalf of `signer`. The action runs with `signer` as the caller, and
/// the relay's own address is never checked against roles.
#[multiversx_sc::module]
pub trait RelayModule:
    crate::requests::RequestsModule
    + crate::closure::ClosureModule
    + crate::reaper::ReaperModule
    + crate::roles::RolesModule
    + crate::commit_reveal::CommitRevealModule
    + crate::treasury::TreasuryModule
    + crate::pause::PauseModule
    + crate::events::EventsModule
{
    #[endpoint(setTrustedRelay)]
    fn set_trusted_relay(&self, relay: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_role(Role::Admin, &caller, ERR_NOT_ADMIN);

        self.trusted_relay().set(&relay);
        self.trusted_relay_updated_event(&caller, &relay);
    }

    /// Returns the new id for creating actions, nothing otherwise.
    #[endpoint(relayedCall)]
    fn relayed_call(
        &self,
        signer: ManagedAddress,
        action: RelayedAction<Self::Api>,
    ) -> OptionalValue<u64> {
        let relay = self.blockchain().get_caller();
        require!(
            !self.trusted_relay().is_empty() && self.trusted_relay().get() == relay,
            ERR_NOT_TRUSTED_RELAY
        );
        require!(!signer.is_zero() && signer != relay, ERR_INVALID_SIGNER);

        match action {
            RelayedAction::CreateRequest {
                recipients,
                amounts,
                description,
                document_ref,
                virtual_payer,
            } => {
                return OptionalValue::Some(self.create_request_as(
                    &signer,
                    recipients,
                    amounts,
                    description,
                    document_ref,
                    virtual_payer,
                ));
            },
            RelayedAction::CommitApproval { request_id, hash } => {
                self.commit_approval_as(&signer, request_id, hash);
            },
            RelayedAction::ApproveBySecretary { request_id, nonce } => {
                self.approve_by_secretary_as(&signer, request_id, nonce);
            },
            RelayedAction::ApproveByCommittee { request_id, nonce } => {
                self.approve_by_committee_as(&signer, request_id, nonce);
            },
            RelayedAction::ApproveByFinance { request_id, nonce } => {
                self.approve_by_finance_as(&signer, request_id, nonce);
            },
            RelayedAction::ApproveByCommitteeAdditional { request_id, nonce } => {
                self.approve_by_committee_additional_as(&signer, request_id, nonce);
            },
            RelayedAction::ApproveByDirector { request_id, nonce } => {
                self.approve_by_director_as(&signer, request_id, nonce);
            },
            RelayedAction::CancelRequest { request_id } => {
                self.cancel_request_as(&signer, request_id);
            },
            RelayedAction::CancelAbandonedRequest { request_id } => {
                self.cancel_abandoned_request_as(&signer, request_id);
            },
            RelayedAction::InitiateClosure {
                return_address,
                reason,
            } => {
                return OptionalValue::Some(self.initiate_closure_as(
                    &signer,
                    return_address,
                    reason,
                ));
            },
            RelayedAction::CommitClosureApproval { closure_id, hash } => {
                self.commit_closure_approval_as(&signer, closure_id, hash);
            },
            RelayedAction::ApproveClosure { closure_id, nonce } => {
                self.approve_closure_as(&signer, closure_id, nonce);
            },
            RelayedAction::DirectorApproveClosure { closure_id, nonce } => {
                self.director_approve_closure_as(&signer, closure_id, nonce);
            },
            RelayedAction::CancelClosure { closure_id } => {
                self.cancel_closure_as(&signer, closure_id);
            },
        }
        OptionalValue::None
    }

    #[view(getTrustedRelay)]
    #[storage_mapper("trustedRelay")]
    fn trusted_relay(&self) -> SingleValueMapper<ManagedAddress>;
}
