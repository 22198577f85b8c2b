use tracing::warn;

use crate::action::{ActionType, BondPurpose};
use crate::constants::{
    BLIND_VOTE_PAYLOAD_BYTES, COMP_REQUEST_PAYLOAD_BYTES, LOCKUP_BLOCKS_OFFSET,
    LOCKUP_PAYLOAD_BYTES, LOCKUP_PURPOSE_OFFSET, MAX_LOCK_BLOCKS, MIN_LOCK_BLOCKS,
    PROPOSAL_PAYLOAD_BYTES, VOTE_REVEAL_PAYLOAD_BYTES,
};
use crate::context::{TxParseContext, VoteRevealInputState};
use crate::schedule::{FeeSchedule, Phase, PhaseSchedule};

// The sub-version byte at payload offset 1 is deliberately not checked by any
// validator: a version bump must stay readable by nodes that predate it, so
// new encodings have to be backward compatible rather than gated here.

/// Inputs shared by every validator. Fee-insensitive actions (vote reveal,
/// bond lockup) never read `token_fee`.
pub struct ValidationRequest<'a> {
    pub payload: &'a [u8],
    pub token_fee: u64,
    pub block_height: u64,
    pub phases: &'a dyn PhaseSchedule,
    pub fees: &'a dyn FeeSchedule,
}

/// Per-action predicate. Returning false is the expected outcome for
/// malformed or adversarial data, never an error; all output tagging is done
/// by the dispatch layer from the returned verdict.
pub trait ActionValidator {
    fn action_type(&self) -> ActionType;
    fn validate(&self, req: &ValidationRequest<'_>, ctx: &TxParseContext) -> bool;
}

pub struct ProposalValidator;

impl ActionValidator for ProposalValidator {
    fn action_type(&self) -> ActionType {
        ActionType::Proposal
    }

    fn validate(&self, req: &ValidationRequest<'_>, _ctx: &TxParseContext) -> bool {
        req.payload.len() == PROPOSAL_PAYLOAD_BYTES
            && req.token_fee == req.fees.proposal_fee(req.block_height)
            && req.phases.is_in_phase(req.block_height, Phase::Proposal)
    }
}

pub struct CompRequestValidator;

impl ActionValidator for CompRequestValidator {
    fn action_type(&self) -> ActionType {
        ActionType::CompRequest
    }

    fn validate(&self, req: &ValidationRequest<'_>, _ctx: &TxParseContext) -> bool {
        req.payload.len() == COMP_REQUEST_PAYLOAD_BYTES
            && req.token_fee == req.fees.comp_request_fee(req.block_height)
            && req.phases.is_in_phase(req.block_height, Phase::Proposal)
    }
}

pub struct BlindVoteValidator;

impl ActionValidator for BlindVoteValidator {
    fn action_type(&self) -> ActionType {
        ActionType::BlindVote
    }

    fn validate(&self, req: &ValidationRequest<'_>, ctx: &TxParseContext) -> bool {
        ctx.blind_vote_stake.is_some()
            && req.payload.len() == BLIND_VOTE_PAYLOAD_BYTES
            && req.token_fee == req.fees.blind_vote_fee(req.block_height)
            && req.phases.is_in_phase(req.block_height, Phase::BlindVote)
    }
}

pub struct VoteRevealValidator;

impl ActionValidator for VoteRevealValidator {
    fn action_type(&self) -> ActionType {
        ActionType::VoteReveal
    }

    fn validate(&self, req: &ValidationRequest<'_>, ctx: &TxParseContext) -> bool {
        let in_phase = req.phases.is_in_phase(req.block_height, Phase::VoteReveal);
        if !in_phase {
            warn!(
                block_height = req.block_height,
                "vote reveal outside the vote reveal phase"
            );
        }
        ctx.vote_reveal_input_state == VoteRevealInputState::Valid
            && ctx.vote_reveal_unlock_stake.is_some()
            && req.payload.len() == VOTE_REVEAL_PAYLOAD_BYTES
            && in_phase
    }
}

pub struct LockupValidator;

impl ActionValidator for LockupValidator {
    fn action_type(&self) -> ActionType {
        ActionType::BondLockup
    }

    fn validate(&self, req: &ValidationRequest<'_>, ctx: &TxParseContext) -> bool {
        req.payload.len() == LOCKUP_PAYLOAD_BYTES
            && lockup_purpose(req.payload).is_some()
            && lockup_blocks(req.payload)
                .map_or(false, |b| (MIN_LOCK_BLOCKS..=MAX_LOCK_BLOCKS).contains(&b))
            && ctx.lockup_candidate.is_some()
    }
}

/// Best-effort decode of the bond purpose byte. Tolerates payloads shorter
/// than the fixed lockup layout.
pub fn lockup_purpose(payload: &[u8]) -> Option<BondPurpose> {
    payload
        .get(LOCKUP_PURPOSE_OFFSET)
        .copied()
        .and_then(BondPurpose::from_byte)
}

/// Best-effort decode of the big-endian lock-blocks field. Tolerates payloads
/// shorter than the fixed lockup layout.
pub fn lockup_blocks(payload: &[u8]) -> Option<u16> {
    payload
        .get(LOCKUP_BLOCKS_OFFSET..LOCKUP_BLOCKS_OFFSET + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
}

/// Action-type-to-validator dispatch table. The action type set and the
/// registered validators must stay in lock step; `check_exhaustive` backs the
/// consistency test for that.
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn ActionValidator>>,
}

impl ValidatorRegistry {
    pub fn new() -> ValidatorRegistry {
        let registry = ValidatorRegistry {
            validators: vec![
                Box::new(ProposalValidator),
                Box::new(CompRequestValidator),
                Box::new(BlindVoteValidator),
                Box::new(VoteRevealValidator),
                Box::new(LockupValidator),
            ],
        };
        debug_assert!(registry.check_exhaustive().is_ok());
        registry
    }

    pub fn get(&self, action: ActionType) -> Option<&dyn ActionValidator> {
        self.validators
            .iter()
            .find(|v| v.action_type() == action)
            .map(|v| v.as_ref())
    }

    /// Every action type must map to exactly one registered validator.
    pub fn check_exhaustive(&self) -> Result<(), String> {
        for action in ActionType::ALL {
            let count = self
                .validators
                .iter()
                .filter(|v| v.action_type() == action)
                .count();
            if count != 1 {
                return Err(format!(
                    "{} validators registered for {}",
                    count,
                    action.as_str()
                ));
            }
        }
        Ok(())
    }
}

impl Default for ValidatorRegistry {
    fn default() -> ValidatorRegistry {
        ValidatorRegistry::new()
    }
}
