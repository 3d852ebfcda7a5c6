multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Commitment, SubjectKind};

/// Minimum time between commit and reveal: 30 minutes in seconds
pub const MIN_REVEAL_DELAY: u64 = 1_800;

/// A commitment can no longer be revealed after 24 hours
pub const MAX_REVEAL_WINDOW: u64 = 86_400;

/// Two-phase approval shared by the request and closure workflows.
///
/// A committer first stores `keccak256(committer ‖ domain ‖ contract ‖ kind ‖
/// subject_id ‖ nonce)`, then reveals `nonce` no earlier than
/// `MIN_REVEAL_DELAY` and no later than `MAX_REVEAL_WINDOW` after committing.
/// A successful reveal consumes the commitment, so the same nonce can never
/// authorize a second action.
#[multiversx_sc::module]
pub trait CommitRevealModule: crate::events::EventsModule {
    fn commit(
        &self,
        kind: SubjectKind,
        subject_id: u64,
        committer: &ManagedAddress,
        hash: ManagedByteArray<Self::Api, 32>,
    ) {
        let now = self.blockchain().get_block_timestamp();
        let mapper = self.commitment(kind, subject_id, committer);

        // An expired commitment is dead weight; the committer may replace it.
        if !mapper.is_empty() {
            let existing = mapper.get();
            require!(
                now > existing.committed_at + MAX_REVEAL_WINDOW,
                ERR_COMMITMENT_EXISTS
            );
        }

        mapper.set(Commitment {
            hash,
            committed_at: now,
        });
        self.pending_committers(kind, subject_id)
            .insert(committer.clone());
        self.approval_committed_event(kind, subject_id, committer, now);
    }

    fn reveal(
        &self,
        kind: SubjectKind,
        subject_id: u64,
        committer: &ManagedAddress,
        nonce: &ManagedBuffer,
    ) {
        let mapper = self.commitment(kind, subject_id, committer);
        require!(!mapper.is_empty(), ERR_NO_COMMITMENT);

        let commitment = mapper.get();
        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= commitment.committed_at + MIN_REVEAL_DELAY,
            ERR_REVEAL_TOO_EARLY
        );
        require!(
            now <= commitment.committed_at + MAX_REVEAL_WINDOW,
            ERR_COMMITMENT_EXPIRED
        );

        let expected = self.commit_hash(committer, kind, subject_id, nonce);
        require!(expected == commitment.hash, ERR_INVALID_REVEAL);

        mapper.clear();
        self.pending_committers(kind, subject_id)
            .swap_remove(committer);
        self.approval_revealed_event(kind, subject_id, committer, now);
    }

    /// Drops every unrevealed commitment on a subject that reached a terminal
    /// status. Nothing could ever reveal them.
    fn clear_commitments(&self, kind: SubjectKind, subject_id: u64) {
        let mut committers = self.pending_committers(kind, subject_id);
        let pending: ManagedVec<ManagedAddress> = committers.iter().collect();
        for committer in pending.iter() {
            self.commitment(kind, subject_id, &committer).clear();
            committers.swap_remove(&committer);
        }
    }

    fn commit_hash(
        &self,
        committer: &ManagedAddress,
        kind: SubjectKind,
        subject_id: u64,
        nonce: &ManagedBuffer,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut data = ManagedBuffer::new();
        data.append(committer.as_managed_buffer());
        data.append(&self.domain_id().get());
        data.append(self.blockchain().get_sc_address().as_managed_buffer());
        data.append_bytes(&[kind.tag()]);
        data.append_bytes(&subject_id.to_be_bytes());
        data.append(nonce);

        self.crypto().keccak256(&data)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Helper for clients building a commitment off-chain.
    #[view(computeCommitHash)]
    fn compute_commit_hash(
        &self,
        committer: ManagedAddress,
        kind: SubjectKind,
        subject_id: u64,
        nonce: ManagedBuffer,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.commit_hash(&committer, kind, subject_id, &nonce)
    }

    #[view(getCommitment)]
    fn get_commitment(
        &self,
        kind: SubjectKind,
        subject_id: u64,
        committer: ManagedAddress,
    ) -> OptionalValue<Commitment<Self::Api>> {
        let mapper = self.commitment(kind, subject_id, &committer);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Network / deployment identifier mixed into every commitment
    #[storage_mapper("domainId")]
    fn domain_id(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("commitment")]
    fn commitment(
        &self,
        kind: SubjectKind,
        subject_id: u64,
        committer: &ManagedAddress,
    ) -> SingleValueMapper<Commitment<Self::Api>>;

    /// Committers holding an unrevealed commitment on a subject
    #[storage_mapper("pendingCommitters")]
    fn pending_committers(
        &self,
        kind: SubjectKind,
        subject_id: u64,
    ) -> UnorderedSetMapper<ManagedAddress>;
}
