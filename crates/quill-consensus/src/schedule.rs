/// Chain phases referenced by the action validators. Each phase names a
/// contiguous block-height window scheduled by the governance-cycle layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Proposal,
    BlindVote,
    VoteReveal,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Proposal => "PROPOSAL",
            Phase::BlindVote => "BLIND_VOTE",
            Phase::VoteReveal => "VOTE_REVEAL",
        }
    }
}

/// Phase-window oracle. The cycle scheduler that owns phase layout lives
/// outside this crate; validators only ever ask this one question.
pub trait PhaseSchedule {
    fn is_in_phase(&self, block_height: u64, phase: Phase) -> bool;
}

/// Required action fees per height, smallest unit. Fee computation is owned
/// by the governance-parameter layer outside this crate.
pub trait FeeSchedule {
    fn proposal_fee(&self, block_height: u64) -> u64;
    fn comp_request_fee(&self, block_height: u64) -> u64;
    fn blind_vote_fee(&self, block_height: u64) -> u64;
}

/// Inclusive block-height range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeightWindow {
    pub start: u64,
    pub end: u64,
}

impl HeightWindow {
    pub fn contains(&self, block_height: u64) -> bool {
        block_height >= self.start && block_height <= self.end
    }
}

/// Static per-phase window table. The production scheduler derives windows
/// from the repeating governance cycle; the table form serves tests and the
/// conformance harness.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeightWindows {
    pub proposal: HeightWindow,
    pub blind_vote: HeightWindow,
    pub vote_reveal: HeightWindow,
}

impl PhaseSchedule for HeightWindows {
    fn is_in_phase(&self, block_height: u64, phase: Phase) -> bool {
        match phase {
            Phase::Proposal => self.proposal.contains(block_height),
            Phase::BlindVote => self.blind_vote.contains(block_height),
            Phase::VoteReveal => self.vote_reveal.contains(block_height),
        }
    }
}

/// Height-independent fee table for tests and the conformance harness.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatFees {
    pub proposal: u64,
    pub comp_request: u64,
    pub blind_vote: u64,
}

impl FeeSchedule for FlatFees {
    fn proposal_fee(&self, _block_height: u64) -> u64 {
        self.proposal
    }

    fn comp_request_fee(&self, _block_height: u64) -> u64 {
        self.comp_request
    }

    fn blind_vote_fee(&self, _block_height: u64) -> u64 {
        self.blind_vote
    }
}
