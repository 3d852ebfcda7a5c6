multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Role;

/// Role → identity capability table.
///
/// Grants here are direct: they bootstrap the project and do not go through
/// commit-reveal. Granting a held role or revoking a missing one is a no-op.
#[multiversx_sc::module]
pub trait RolesModule: crate::events::EventsModule {
    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_role(Role::Admin, &caller, ERR_NOT_ADMIN);
        require!(!account.is_zero(), ERR_ZERO_ADDRESS);

        self.grant_role_unchecked(role, &account, &caller);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_role(Role::Admin, &caller, ERR_NOT_ADMIN);

        if !self.role_members(role).contains(&account) {
            return;
        }
        if role == Role::Admin {
            require!(self.role_members(Role::Admin).len() > 1, ERR_LAST_ADMIN);
        }

        self.role_members(role).remove(&account);
        self.role_revoked_event(role, &account, &caller);
    }

    fn grant_role_unchecked(&self, role: Role, account: &ManagedAddress, sender: &ManagedAddress) {
        if self.role_members(role).insert(account.clone()) {
            self.role_granted_event(role, account, sender);
        }
    }

    fn require_role(&self, role: Role, account: &ManagedAddress, err: &str) {
        require!(self.role_members(role).contains(account), err);
    }

    /// True if the account holds any of the roles that can vote on requests.
    fn is_approver(&self, account: &ManagedAddress) -> bool {
        [Role::Secretary, Role::Committee, Role::Finance, Role::Director]
            .iter()
            .any(|role| self.role_members(*role).contains(account))
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: ManagedAddress) -> bool {
        self.role_members(role).contains(&account)
    }

    /// Members in grant order. Role sets are small and admin-curated.
    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            result.push(member);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> SetMapper<ManagedAddress>;
}
