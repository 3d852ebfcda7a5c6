multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Role;

/// Budget accounting and payouts on the project token.
///
/// `total_distributed` only grows and never exceeds `budget`. Funds returned
/// by a closure are tracked separately in `total_returned`.
#[multiversx_sc::module]
pub trait TreasuryModule:
    crate::roles::RolesModule + crate::pause::PauseModule + crate::events::EventsModule
{
    #[endpoint(recordBudget)]
    fn record_budget(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_role(Role::Admin, &caller, ERR_NOT_ADMIN);
        require!(self.total_distributed().get() == 0u64, ERR_BUDGET_LOCKED);

        self.budget().set(&amount);
        self.budget_recorded_event(&caller, &amount);
    }

    /// Anyone may top up the project, but only with the project token and
    /// never once it is closed, since nothing could move the funds out again.
    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) {
        require!(!self.closed().get(), ERR_CLOSED);
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.token_id().get(),
            ERR_WRONG_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);

        self.funds_deposited_event(&caller, &payment.amount);
    }

    fn project_balance(&self) -> BigUint {
        let token = self.token_id().get();
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token), 0)
    }

    fn record_distribution(&self, amount: &BigUint) {
        let new_total = self.total_distributed().get() + amount;
        require!(new_total <= self.budget().get(), ERR_EXCEEDS_BUDGET);
        require!(*amount <= self.project_balance(), ERR_INSUFFICIENT_BALANCE);

        self.total_distributed().set(&new_total);
    }

    /// Pays every (recipient, amount) pair. Any failing transfer reverts the
    /// whole transaction, so either every recipient is paid or none is.
    fn pay_out(
        &self,
        recipients: &ManagedVec<ManagedAddress>,
        amounts: &ManagedVec<BigUint>,
    ) {
        require!(recipients.len() == amounts.len(), ERR_LENGTH_MISMATCH);
        let token = self.token_id().get();

        for i in 0..recipients.len() {
            let recipient = recipients.get(i).clone_value();
            let amount = amounts.get(i).clone_value();
            self.send().direct_esdt(&recipient, &token, 0, &amount);
        }
    }

    /// Sends the entire token balance to `to` and returns what was sent.
    fn return_remaining(&self, to: &ManagedAddress) -> BigUint {
        let remaining = self.project_balance();
        if remaining > 0u64 {
            let token = self.token_id().get();
            self.send().direct_esdt(to, &token, 0, &remaining);
            self.total_returned().update(|r| *r += &remaining);
        }
        remaining
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (budget, total distributed, total returned by closure, current balance)
    #[view(getTreasuryState)]
    fn get_treasury_state(&self) -> MultiValue4<BigUint, BigUint, BigUint, BigUint> {
        (
            self.budget().get(),
            self.total_distributed().get(),
            self.total_returned().get(),
            self.project_balance(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTokenId)]
    #[storage_mapper("tokenId")]
    fn token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getBudget)]
    #[storage_mapper("budget")]
    fn budget(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalDistributed)]
    #[storage_mapper("totalDistributed")]
    fn total_distributed(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalReturned")]
    fn total_returned(&self) -> SingleValueMapper<BigUint>;
}
