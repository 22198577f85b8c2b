use crate::action::{ActionType, BondPurpose};
use crate::constants::*;
use crate::context::{TxParseContext, VoteRevealInputState};
use crate::schedule::{FlatFees, HeightWindow, HeightWindows};
use crate::validators::{
    lockup_blocks, lockup_purpose, ActionValidator, BlindVoteValidator, CompRequestValidator,
    LockupValidator, ProposalValidator, ValidationRequest, ValidatorRegistry, VoteRevealValidator,
};

const PROPOSAL_FEE: u64 = 200;
const COMP_REQUEST_FEE: u64 = 300;
const BLIND_VOTE_FEE: u64 = 400;

fn schedule() -> HeightWindows {
    HeightWindows {
        proposal: HeightWindow {
            start: 100,
            end: 199,
        },
        blind_vote: HeightWindow {
            start: 200,
            end: 249,
        },
        vote_reveal: HeightWindow {
            start: 250,
            end: 299,
        },
    }
}

fn fees() -> FlatFees {
    FlatFees {
        proposal: PROPOSAL_FEE,
        comp_request: COMP_REQUEST_FEE,
        blind_vote: BLIND_VOTE_FEE,
    }
}

fn run(
    validator: &dyn ActionValidator,
    payload: &[u8],
    token_fee: u64,
    block_height: u64,
    ctx: &TxParseContext,
) -> bool {
    let phases = schedule();
    let fee_table = fees();
    let req = ValidationRequest {
        payload,
        token_fee,
        block_height,
        phases: &phases,
        fees: &fee_table,
    };
    validator.validate(&req, ctx)
}

#[test]
fn proposal_validator_conditions() {
    let ctx = TxParseContext::new();
    let payload = vec![0u8; PROPOSAL_PAYLOAD_BYTES];

    assert!(run(&ProposalValidator, &payload, PROPOSAL_FEE, 150, &ctx));

    // Wrong length.
    assert!(!run(
        &ProposalValidator,
        &payload[..21],
        PROPOSAL_FEE,
        150,
        &ctx
    ));
    // Wrong fee.
    assert!(!run(&ProposalValidator, &payload, PROPOSAL_FEE + 1, 150, &ctx));
    // Outside the proposal phase.
    assert!(!run(&ProposalValidator, &payload, PROPOSAL_FEE, 200, &ctx));
}

#[test]
fn comp_request_validator_conditions() {
    let ctx = TxParseContext::new();
    let payload = vec![0u8; COMP_REQUEST_PAYLOAD_BYTES];

    assert!(run(&CompRequestValidator, &payload, COMP_REQUEST_FEE, 150, &ctx));

    assert!(!run(
        &CompRequestValidator,
        &payload[..10],
        COMP_REQUEST_FEE,
        150,
        &ctx
    ));
    assert!(!run(&CompRequestValidator, &payload, PROPOSAL_FEE, 150, &ctx));
    assert!(!run(&CompRequestValidator, &payload, COMP_REQUEST_FEE, 99, &ctx));
}

#[test]
fn blind_vote_validator_conditions() {
    let mut ctx = TxParseContext::new();
    ctx.blind_vote_stake = Some(0);
    let payload = vec![0u8; BLIND_VOTE_PAYLOAD_BYTES];

    assert!(run(&BlindVoteValidator, &payload, BLIND_VOTE_FEE, 220, &ctx));

    assert!(!run(&BlindVoteValidator, &payload[..21], BLIND_VOTE_FEE, 220, &ctx));
    assert!(!run(&BlindVoteValidator, &payload, BLIND_VOTE_FEE - 1, 220, &ctx));
    assert!(!run(&BlindVoteValidator, &payload, BLIND_VOTE_FEE, 260, &ctx));

    // Missing stake commitment.
    let no_stake = TxParseContext::new();
    assert!(!run(&BlindVoteValidator, &payload, BLIND_VOTE_FEE, 220, &no_stake));
}

// Each of the four vote reveal conditions flips the verdict on its own.
#[test]
fn vote_reveal_validator_condition_flips() {
    let payload = vec![0u8; VOTE_REVEAL_PAYLOAD_BYTES];
    let mut ctx = TxParseContext::new();
    ctx.vote_reveal_input_state = VoteRevealInputState::Valid;
    ctx.vote_reveal_unlock_stake = Some(0);

    assert!(run(&VoteRevealValidator, &payload, 0, 260, &ctx));

    // Payload one byte short.
    assert!(!run(&VoteRevealValidator, &payload[..37], 0, 260, &ctx));

    // Input state not Valid.
    for state in [VoteRevealInputState::Unknown, VoteRevealInputState::Invalid] {
        let mut flipped = ctx.clone();
        flipped.vote_reveal_input_state = state;
        assert!(!run(&VoteRevealValidator, &payload, 0, 260, &flipped));
    }

    // No unlock-stake output recorded.
    let mut flipped = ctx.clone();
    flipped.vote_reveal_unlock_stake = None;
    assert!(!run(&VoteRevealValidator, &payload, 0, 260, &flipped));

    // Outside the vote reveal phase: logged as a warning, still false.
    assert!(!run(&VoteRevealValidator, &payload, 0, 249, &ctx));
    assert!(!run(&VoteRevealValidator, &payload, 0, 300, &ctx));
}

#[test]
fn vote_reveal_validator_ignores_fee() {
    let payload = vec![0u8; VOTE_REVEAL_PAYLOAD_BYTES];
    let mut ctx = TxParseContext::new();
    ctx.vote_reveal_input_state = VoteRevealInputState::Valid;
    ctx.vote_reveal_unlock_stake = Some(0);

    assert!(run(&VoteRevealValidator, &payload, 0, 260, &ctx));
    assert!(run(&VoteRevealValidator, &payload, u64::MAX, 260, &ctx));
}

#[test]
fn lockup_validator_conditions() {
    let mut ctx = TxParseContext::new();
    ctx.lockup_candidate = Some(0);

    let mut payload = vec![ACTION_BOND_LOCKUP, 0x01, BOND_PURPOSE_BONDED_ROLE];
    payload.extend_from_slice(&1000u16.to_be_bytes());

    assert!(run(&LockupValidator, &payload, 0, 50, &ctx));

    // Trailing garbage breaks the fixed length.
    let mut long = payload.clone();
    long.push(0x00);
    assert!(!run(&LockupValidator, &long, 0, 50, &ctx));

    // Unknown purpose byte.
    let mut bad_purpose = payload.clone();
    bad_purpose[LOCKUP_PURPOSE_OFFSET] = 0x7f;
    assert!(!run(&LockupValidator, &bad_purpose, 0, 50, &ctx));

    // Lock blocks outside the permitted range.
    for blocks in [0u16, MIN_LOCK_BLOCKS - 1, MAX_LOCK_BLOCKS + 1, u16::MAX] {
        let mut out_of_range = payload.clone();
        out_of_range[LOCKUP_BLOCKS_OFFSET..LOCKUP_BLOCKS_OFFSET + 2]
            .copy_from_slice(&blocks.to_be_bytes());
        assert!(!run(&LockupValidator, &out_of_range, 0, 50, &ctx));
    }

    // No lockup candidate recorded.
    let no_candidate = TxParseContext::new();
    assert!(!run(&LockupValidator, &payload, 0, 50, &no_candidate));
}

#[test]
fn lockup_field_decoding_is_idempotent() {
    let mut payload = vec![ACTION_BOND_LOCKUP, 0x01, BOND_PURPOSE_REPUTATION];
    payload.extend_from_slice(&4321u16.to_be_bytes());

    let first = (lockup_purpose(&payload), lockup_blocks(&payload));
    let second = (lockup_purpose(&payload), lockup_blocks(&payload));
    assert_eq!(first, second);
    assert_eq!(first.0, Some(BondPurpose::Reputation));
    assert_eq!(first.1, Some(4321));
}

#[test]
fn lockup_field_decoding_tolerates_short_payloads() {
    // Decoding runs before length validation; a truncated payload must yield
    // absence, never an out-of-bounds fault.
    for len in 0..LOCKUP_PAYLOAD_BYTES {
        let payload = vec![ACTION_BOND_LOCKUP; len];
        if len <= LOCKUP_PURPOSE_OFFSET {
            assert_eq!(lockup_purpose(&payload), None);
        }
        if len < LOCKUP_BLOCKS_OFFSET + 2 {
            assert_eq!(lockup_blocks(&payload), None);
        }
    }
}

#[test]
fn bond_purpose_byte_lookup() {
    assert_eq!(
        BondPurpose::from_byte(BOND_PURPOSE_BONDED_ROLE),
        Some(BondPurpose::BondedRole)
    );
    assert_eq!(
        BondPurpose::from_byte(BOND_PURPOSE_REPUTATION),
        Some(BondPurpose::Reputation)
    );
    assert_eq!(BondPurpose::from_byte(0x00), None);
    assert_eq!(BondPurpose::from_byte(0xff), None);
}

#[test]
fn registry_is_exhaustive() {
    let registry = ValidatorRegistry::new();
    registry.check_exhaustive().expect("exhaustive registry");

    for action in ActionType::ALL {
        let validator = registry.get(action).expect("validator registered");
        assert_eq!(validator.action_type(), action);
    }
}
