/// Classification tag carried by every output. Each output ends the parsing
/// pass with exactly one tag; overwrites happen only where a validator
/// outcome defines them (candidate promotion or demotion).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Undefined,
    /// Base-coin value only, no token meaning.
    PlainTransfer,
    /// Token-denominated value output.
    TokenTransfer,
    Invalid,
    ProposalRecord,
    CompRequestRecord,
    /// Would mint new tokens if the compensation request is confirmed.
    IssuanceCandidate,
    BlindVoteRecord,
    /// Stake committed alongside a blind vote.
    BlindVoteStake,
    VoteRevealRecord,
    /// Stake released by a vote reveal.
    VoteRevealUnlockStake,
    LockupRecord,
    /// Value output locked as a bond.
    BondLockup,
}

impl OutputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputKind::Undefined => "UNDEFINED",
            OutputKind::PlainTransfer => "PLAIN_TRANSFER",
            OutputKind::TokenTransfer => "TOKEN_TRANSFER",
            OutputKind::Invalid => "INVALID",
            OutputKind::ProposalRecord => "PROPOSAL_RECORD",
            OutputKind::CompRequestRecord => "COMP_REQUEST_RECORD",
            OutputKind::IssuanceCandidate => "ISSUANCE_CANDIDATE",
            OutputKind::BlindVoteRecord => "BLIND_VOTE_RECORD",
            OutputKind::BlindVoteStake => "BLIND_VOTE_STAKE",
            OutputKind::VoteRevealRecord => "VOTE_REVEAL_RECORD",
            OutputKind::VoteRevealUnlockStake => "VOTE_REVEAL_UNLOCK_STAKE",
            OutputKind::LockupRecord => "LOCKUP_RECORD",
            OutputKind::BondLockup => "BOND_LOCKUP",
        }
    }
}

/// Not-yet-finalized output owned by the parsing pass. `payload` is present
/// only on a zero-value data-carrying output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputInProgress {
    pub value: u64,
    pub payload: Option<Vec<u8>>,
    pub kind: OutputKind,
}

/// Transaction under parsing. Becomes immutable chain state once the pass for
/// the containing block completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInProgress {
    pub txid: [u8; 32],
    pub lock_time: u32,
    /// Written only by a confirmed bond lockup.
    pub bond_lock_blocks: Option<u16>,
    pub outputs: Vec<OutputInProgress>,
}

impl TxInProgress {
    pub fn last_output_index(&self) -> Option<usize> {
        self.outputs.len().checked_sub(1)
    }
}

/// Immutable snapshot of an output already committed to chain state. Consumed
/// read-only during parsing (spent lockup/unlock bookkeeping).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommittedOutput {
    pub txid: [u8; 32],
    pub index: u32,
    pub value: u64,
    pub kind: OutputKind,
}
