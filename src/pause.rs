multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Role;

/// Project-wide halt shared by both workflows.
///
/// `paused` is the admin's temporary brake. `closed` is set once by an
/// executed closure and can never be cleared.
#[multiversx_sc::module]
pub trait PauseModule: crate::roles::RolesModule + crate::events::EventsModule {
    #[endpoint(pause)]
    fn pause(&self) {
        let caller = self.blockchain().get_caller();
        self.require_role(Role::Admin, &caller, ERR_NOT_ADMIN);
        self.require_active();

        self.paused().set(true);
        self.project_paused_event(&caller);
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        let caller = self.blockchain().get_caller();
        self.require_role(Role::Admin, &caller, ERR_NOT_ADMIN);
        require!(!self.closed().get(), ERR_CLOSED);
        require!(self.paused().get(), ERR_NOT_PAUSED);

        self.paused().set(false);
        self.project_unpaused_event(&caller);
    }

    fn require_active(&self) {
        require!(!self.closed().get(), ERR_CLOSED);
        require!(!self.paused().get(), ERR_PAUSED);
    }

    fn close_permanently(&self, closure_id: u64) {
        self.closed().set(true);
        self.paused().set(true);
        self.project_closed_event(closure_id, self.blockchain().get_block_timestamp());
    }

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[view(isClosed)]
    #[storage_mapper("closed")]
    fn closed(&self) -> SingleValueMapper<bool>;
}
