multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Roles
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Role {
    /// Manages roles, budget, relay and pause. Granted to the deployer.
    Admin,
    /// May open reimbursement requests.
    Requester,
    Secretary,
    Committee,
    Finance,
    Director,
}

// ============================================================
// Commit-reveal subjects
// ============================================================

/// Which id space a commitment refers to. Request and closure ids overlap,
/// so the kind is part of both the storage key and the committed hash.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum SubjectKind {
    Request,
    Closure,
}

impl SubjectKind {
    pub fn tag(&self) -> u8 {
        match self {
            SubjectKind::Request => 1,
            SubjectKind::Closure => 2,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Commitment<M: ManagedTypeApi> {
    pub hash: ManagedByteArray<M, 32>,
    pub committed_at: u64,
}

// ============================================================
// Reimbursement requests
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum RequestStatus {
    /// Created, waiting for the secretary.
    Pending,
    SecretaryApproved,
    CommitteeApproved,
    /// Collecting the three additional committee approvals.
    FinanceApproved,
    /// Three distinct additional committee members approved. Waiting for the director.
    CommitteeAdditionalApproved,
    /// Funds paid out. Terminal state.
    Distributed,
    /// Cancelled by requester, admin or the abandoned-request reaper. Terminal state.
    Cancelled,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Distributed | RequestStatus::Cancelled)
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ReimbursementRequest<M: ManagedTypeApi> {
    pub id: u64,
    pub requester: ManagedAddress<M>,
    pub recipients: ManagedVec<M, ManagedAddress<M>>,
    pub amounts: ManagedVec<M, BigUint<M>>,
    pub total_amount: BigUint<M>,
    pub description: ManagedBuffer<M>,
    /// Opaque reference to the supporting documents (e.g. an IPFS hash)
    pub document_ref: ManagedBuffer<M>,
    pub status: RequestStatus,
    pub secretary_approver: ManagedAddress<M>,
    pub committee_approver: ManagedAddress<M>,
    pub finance_approver: ManagedAddress<M>,
    pub additional_committee_approvers: ManagedVec<M, ManagedAddress<M>>,
    pub director_approver: ManagedAddress<M>,
    pub created_at: u64,
    pub updated_at: u64,
    /// Bookkeeping label only, zero when unset. Never used for authorization or routing.
    pub virtual_payer: ManagedAddress<M>,
}

// ============================================================
// Emergency closures
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ClosureStatus {
    Initiated,
    /// At least one committee approval, fewer than three.
    PartiallyApproved,
    /// Three distinct committee approvals. Waiting for the director.
    FullyApproved,
    /// Remaining funds returned, project closed for good. Terminal state.
    Executed,
    Cancelled,
}

impl ClosureStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClosureStatus::Executed | ClosureStatus::Cancelled)
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct EmergencyClosure<M: ManagedTypeApi> {
    pub id: u64,
    pub initiator: ManagedAddress<M>,
    pub return_address: ManagedAddress<M>,
    pub reason: ManagedBuffer<M>,
    pub status: ClosureStatus,
    pub committee_approvers: ManagedVec<M, ManagedAddress<M>>,
    pub director_approver: ManagedAddress<M>,
    /// Token balance sent to `return_address` on execution (0 until then)
    pub remaining_balance: BigUint<M>,
    pub created_at: u64,
    pub updated_at: u64,
}

// ============================================================
// Relayed actions
// ============================================================

/// A workflow operation submitted by the trusted relay on behalf of a signer.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub enum RelayedAction<M: ManagedTypeApi> {
    CreateRequest {
        recipients: ManagedVec<M, ManagedAddress<M>>,
        amounts: ManagedVec<M, BigUint<M>>,
        description: ManagedBuffer<M>,
        document_ref: ManagedBuffer<M>,
        virtual_payer: ManagedAddress<M>,
    },
    CommitApproval {
        request_id: u64,
        hash: ManagedByteArray<M, 32>,
    },
    ApproveBySecretary {
        request_id: u64,
        nonce: ManagedBuffer<M>,
    },
    ApproveByCommittee {
        request_id: u64,
        nonce: ManagedBuffer<M>,
    },
    ApproveByFinance {
        request_id: u64,
        nonce: ManagedBuffer<M>,
    },
    ApproveByCommitteeAdditional {
        request_id: u64,
        nonce: ManagedBuffer<M>,
    },
    ApproveByDirector {
        request_id: u64,
        nonce: ManagedBuffer<M>,
    },
    CancelRequest {
        request_id: u64,
    },
    CancelAbandonedRequest {
        request_id: u64,
    },
    InitiateClosure {
        return_address: ManagedAddress<M>,
        reason: ManagedBuffer<M>,
    },
    CommitClosureApproval {
        closure_id: u64,
        hash: ManagedByteArray<M, 32>,
    },
    ApproveClosure {
        closure_id: u64,
        nonce: ManagedBuffer<M>,
    },
    DirectorApproveClosure {
        closure_id: u64,
        nonce: ManagedBuffer<M>,
    },
    CancelClosure {
        closure_id: u64,
    },
}
