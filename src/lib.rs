#![no_std]

multiversx_sc::imports!();

pub mod closure;
pub mod commit_reveal;
pub mod errors;
pub mod events;
pub mod pause;
pub mod reaper;
pub mod relay;
pub mod requests;
pub mod roles;
pub mod treasury;
pub mod types;

use errors::ERR_INVALID_TOKEN;
use types::Role;

// ============================================================
// Contract
// ============================================================

/// Multi-party reimbursement workflow for one project.
///
/// Requests pass secretary, committee, finance, three additional committee
/// members and the director, each approving through commit-reveal, before
/// the project token is paid out. A parallel closure workflow can return all
/// remaining funds and shut the project down permanently.
#[multiversx_sc::contract]
pub trait ProjectReimbursement:
    roles::RolesModule
    + commit_reveal::CommitRevealModule
    + treasury::TreasuryModule
    + pause::PauseModule
    + requests::RequestsModule
    + closure::ClosureModule
    + reaper::ReaperModule
    + relay::RelayModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `domain_id` identifies the network / deployment and is bound into
    /// every approval commitment.
    #[init]
    fn init(
        &self,
        project_id: ManagedBuffer,
        token_id: TokenIdentifier,
        budget: BigUint,
        domain_id: ManagedBuffer,
    ) {
        require!(token_id.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);

        let deployer = self.blockchain().get_caller();
        self.project_id().set(&project_id);
        self.token_id().set(&token_id);
        self.budget().set(&budget);
        self.domain_id().set(&domain_id);
        self.total_distributed().set(BigUint::zero());
        self.request_count().set(0u64);
        self.closure_count().set(0u64);

        self.grant_role_unchecked(Role::Admin, &deployer, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    /// (project id, reveal delay, reveal window, abandonment grace period)
    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue4<ManagedBuffer, u64, u64, u64> {
        (
            self.project_id().get(),
            commit_reveal::MIN_REVEAL_DELAY,
            commit_reveal::MAX_REVEAL_WINDOW,
            reaper::ABANDONED_GRACE_PERIOD,
        )
            .into()
    }

    #[view(getProjectId)]
    #[storage_mapper("projectId")]
    fn project_id(&self) -> SingleValueMapper<ManagedBuffer>;
}
