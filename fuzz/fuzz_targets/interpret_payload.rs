#![no_main]

use libfuzzer_sys::fuzz_target;

use quill_consensus::{
    scan_action_candidate, validate_action_output, FlatFees, HeightWindow, HeightWindows,
    OutputInProgress, OutputKind, TxInProgress, TxParseContext, ValidatorRegistry,
    VoteRevealInputState,
};

// Fuzz the full scan + validate pass over an arbitrary data payload. All
// candidate handles point at output 0 so every demotion path is reachable;
// the pass must never panic, whatever the payload bytes.
fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    // Last 16 bytes = token_fee and block_height, rest = data payload.
    let payload_end = data.len() - 16;
    let token_fee = u64::from_le_bytes(data[payload_end..payload_end + 8].try_into().unwrap());
    let block_height = u64::from_le_bytes(data[payload_end + 8..].try_into().unwrap());
    let payload = &data[..payload_end];

    let mut tx = TxInProgress {
        txid: [0u8; 32],
        lock_time: 0,
        bond_lock_blocks: None,
        outputs: vec![
            OutputInProgress {
                value: 1000,
                payload: None,
                kind: OutputKind::Undefined,
            },
            OutputInProgress {
                value: 0,
                payload: Some(payload.to_vec()),
                kind: OutputKind::Undefined,
            },
        ],
    };

    let mut ctx = TxParseContext::new();
    ctx.issuance_candidate = Some(0);
    ctx.blind_vote_stake = Some(0);
    ctx.vote_reveal_unlock_stake = Some(0);
    ctx.lockup_candidate = Some(0);
    ctx.vote_reveal_input_state = VoteRevealInputState::Valid;

    let phases = HeightWindows {
        proposal: HeightWindow { start: 0, end: u64::MAX },
        blind_vote: HeightWindow { start: 0, end: u64::MAX },
        vote_reveal: HeightWindow { start: 0, end: u64::MAX },
    };
    let fees = FlatFees {
        proposal: token_fee,
        comp_request: token_fee,
        blind_vote: token_fee,
    };

    for output in &tx.outputs {
        scan_action_candidate(output, &mut ctx);
    }
    let registry = ValidatorRegistry::new();
    validate_action_output(
        &registry,
        &mut tx,
        1,
        token_fee,
        block_height,
        &phases,
        &fees,
        &mut ctx,
    );
});
