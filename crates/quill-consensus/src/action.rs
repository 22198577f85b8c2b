use crate::constants::{
    ACTION_BLIND_VOTE, ACTION_BOND_LOCKUP, ACTION_COMP_REQUEST, ACTION_PROPOSAL,
    ACTION_VOTE_REVEAL, BOND_PURPOSE_BONDED_ROLE, BOND_PURPOSE_REPUTATION,
};
use crate::tx::OutputKind;

/// Governance/bonding action selected by the first byte of a data payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionType {
    Proposal,
    CompRequest,
    BlindVote,
    VoteReveal,
    BondLockup,
}

impl ActionType {
    pub const ALL: [ActionType; 5] = [
        ActionType::Proposal,
        ActionType::CompRequest,
        ActionType::BlindVote,
        ActionType::VoteReveal,
        ActionType::BondLockup,
    ];

    /// Bytes outside the recognized set mean "no action", not an error.
    pub fn from_discriminator(b: u8) -> Option<ActionType> {
        match b {
            ACTION_PROPOSAL => Some(ActionType::Proposal),
            ACTION_COMP_REQUEST => Some(ActionType::CompRequest),
            ACTION_BLIND_VOTE => Some(ActionType::BlindVote),
            ACTION_VOTE_REVEAL => Some(ActionType::VoteReveal),
            ACTION_BOND_LOCKUP => Some(ActionType::BondLockup),
            _ => None,
        }
    }

    pub fn discriminator(self) -> u8 {
        match self {
            ActionType::Proposal => ACTION_PROPOSAL,
            ActionType::CompRequest => ACTION_COMP_REQUEST,
            ActionType::BlindVote => ACTION_BLIND_VOTE,
            ActionType::VoteReveal => ACTION_VOTE_REVEAL,
            ActionType::BondLockup => ACTION_BOND_LOCKUP,
        }
    }

    /// Classification the data output gets once this action is confirmed.
    pub fn record_kind(self) -> OutputKind {
        match self {
            ActionType::Proposal => OutputKind::ProposalRecord,
            ActionType::CompRequest => OutputKind::CompRequestRecord,
            ActionType::BlindVote => OutputKind::BlindVoteRecord,
            ActionType::VoteReveal => OutputKind::VoteRevealRecord,
            ActionType::BondLockup => OutputKind::LockupRecord,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Proposal => "PROPOSAL",
            ActionType::CompRequest => "COMP_REQUEST",
            ActionType::BlindVote => "BLIND_VOTE",
            ActionType::VoteReveal => "VOTE_REVEAL",
            ActionType::BondLockup => "BOND_LOCKUP",
        }
    }
}

/// What a locked-up bond vouches for; byte at `LOCKUP_PURPOSE_OFFSET`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BondPurpose {
    BondedRole,
    Reputation,
}

impl BondPurpose {
    pub fn from_byte(b: u8) -> Option<BondPurpose> {
        match b {
            BOND_PURPOSE_BONDED_ROLE => Some(BondPurpose::BondedRole),
            BOND_PURPOSE_REPUTATION => Some(BondPurpose::Reputation),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BondPurpose::BondedRole => "BONDED_ROLE",
            BondPurpose::Reputation => "REPUTATION",
        }
    }
}
