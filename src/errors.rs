// Error messages surfaced through `require!` / `sc_panic!`.
// Every one of them aborts the whole transaction.

// ── Authorization ──

pub const ERR_NOT_ADMIN: &str = "Unauthorized: caller is not an admin";
pub const ERR_NOT_REQUESTER: &str = "Unauthorized: caller is not a requester";
pub const ERR_NOT_SECRETARY: &str = "Unauthorized: caller is not a secretary";
pub const ERR_NOT_COMMITTEE: &str = "Unauthorized: caller is not a committee member";
pub const ERR_NOT_FINANCE: &str = "Unauthorized: caller is not finance";
pub const ERR_NOT_DIRECTOR: &str = "Unauthorized: caller is not a director";
pub const ERR_NOT_APPROVER: &str = "Unauthorized: caller holds no approver role";
pub const ERR_CANNOT_CANCEL: &str = "Unauthorized: only the requester or an admin can cancel";
pub const ERR_CANNOT_CANCEL_CLOSURE: &str =
    "Unauthorized: only the initiator or an admin can cancel the closure";
pub const ERR_NOT_TRUSTED_RELAY: &str = "Unauthorized: caller is not the trusted relay";

// ── Sequence ──

pub const ERR_INVALID_SEQUENCE: &str = "Invalid sequence: request is not in the required status";
pub const ERR_REQUEST_TERMINAL: &str = "Invalid sequence: request is already finalized";
pub const ERR_ALREADY_APPROVED: &str = "Already approved by this member";
pub const ERR_ADDITIONAL_COMPLETE: &str =
    "Already approved: additional committee approvals are complete";
pub const ERR_CLOSURE_SEQUENCE: &str = "Invalid sequence: closure is not in the required status";
pub const ERR_CLOSURE_TERMINAL: &str = "Invalid sequence: closure is already finalized";
pub const ERR_ACTIVE_CLOSURE_EXISTS: &str = "Invalid sequence: an active closure already exists";
pub const ERR_PAUSED: &str = "Project is paused";
pub const ERR_CLOSED: &str = "Project is permanently closed";
pub const ERR_NOT_PAUSED: &str = "Project is not paused";
pub const ERR_DISTRIBUTION_IN_PROGRESS: &str = "Distribution already in progress";
pub const ERR_BUDGET_LOCKED: &str = "Budget cannot change after funds were distributed";

// ── Commitment ──

pub const ERR_NO_COMMITMENT: &str = "No commitment found";
pub const ERR_COMMITMENT_EXISTS: &str = "Commitment already exists";
pub const ERR_REVEAL_TOO_EARLY: &str = "Reveal too early";
pub const ERR_COMMITMENT_EXPIRED: &str = "Commitment expired";
pub const ERR_INVALID_REVEAL: &str = "Invalid reveal: hash mismatch";

// ── Validation ──

pub const ERR_EMPTY_RECIPIENTS: &str = "Invalid input: no recipients";
pub const ERR_LENGTH_MISMATCH: &str = "Invalid input: recipients and amounts length mismatch";
pub const ERR_TOO_MANY_RECIPIENTS: &str = "Invalid input: too many recipients";
pub const ERR_ZERO_AMOUNT: &str = "Invalid input: amount must be greater than zero";
pub const ERR_ZERO_ADDRESS: &str = "Invalid input: zero address";
pub const ERR_SELF_RECIPIENT: &str = "Invalid input: contract cannot be a recipient";
pub const ERR_DESCRIPTION_TOO_LONG: &str = "Invalid input: description too long";
pub const ERR_DOCUMENT_REF_TOO_LONG: &str = "Invalid input: document reference too long";
pub const ERR_EMPTY_REASON: &str = "Invalid input: closure reason required";
pub const ERR_REASON_TOO_LONG: &str = "Invalid input: closure reason too long";
pub const ERR_REQUEST_NOT_FOUND: &str = "Request does not exist";
pub const ERR_CLOSURE_NOT_FOUND: &str = "Closure does not exist";
pub const ERR_WRONG_TOKEN: &str = "Invalid input: wrong payment token";
pub const ERR_INVALID_TOKEN: &str = "Invalid input: invalid token identifier";
pub const ERR_LAST_ADMIN: &str = "Invalid input: cannot revoke the last admin";
pub const ERR_INVALID_SIGNER: &str = "Invalid input: signer cannot be zero or the relay";

// ── Funds ──

pub const ERR_EXCEEDS_BUDGET: &str = "Insufficient funds: distribution exceeds budget";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient funds: project balance too low";

// ── Staleness ──

pub const ERR_NOT_ABANDONED: &str = "Request is not abandoned yet";
