use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quill_consensus::{
    scan_action_candidate, validate_action_output, FlatFees, HeightWindow, HeightWindows,
    OutputInProgress, OutputKind, TxInProgress, TxParseContext, ValidatorRegistry,
    VoteRevealInputState,
};

fn vote_reveal_tx() -> TxInProgress {
    let mut payload = vec![0x13, 0x01];
    payload.extend_from_slice(&[0xaa; 20]);
    payload.extend_from_slice(&[0xbb; 16]);
    TxInProgress {
        txid: [0x42; 32],
        lock_time: 0,
        bond_lock_blocks: None,
        outputs: vec![
            OutputInProgress {
                value: 2000,
                payload: None,
                kind: OutputKind::VoteRevealUnlockStake,
            },
            OutputInProgress {
                value: 0,
                payload: Some(payload),
                kind: OutputKind::Undefined,
            },
        ],
    }
}

fn bench_interpret(c: &mut Criterion) {
    let registry = ValidatorRegistry::new();
    let phases = HeightWindows {
        proposal: HeightWindow { start: 100, end: 199 },
        blind_vote: HeightWindow { start: 200, end: 249 },
        vote_reveal: HeightWindow { start: 250, end: 299 },
    };
    let fees = FlatFees {
        proposal: 200,
        comp_request: 300,
        blind_vote: 400,
    };
    let template = vote_reveal_tx();

    c.bench_function("interpret_vote_reveal", |b| {
        b.iter(|| {
            let mut tx = template.clone();
            let mut ctx = TxParseContext::new();
            ctx.vote_reveal_unlock_stake = Some(0);
            ctx.vote_reveal_input_state = VoteRevealInputState::Valid;
            for output in &tx.outputs {
                scan_action_candidate(output, &mut ctx);
            }
            validate_action_output(&registry, &mut tx, 1, 0, 260, &phases, &fees, &mut ctx);
            black_box((tx, ctx));
        })
    });
}

criterion_group!(benches, bench_interpret);
criterion_main!(benches);
