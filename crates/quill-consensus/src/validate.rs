use tracing::{error, info, warn};

use crate::action::ActionType;
use crate::context::TxParseContext;
use crate::schedule::{FeeSchedule, PhaseSchedule};
use crate::tx::{OutputInProgress, OutputKind, TxInProgress};
use crate::validators::{lockup_blocks, ValidationRequest, ValidatorRegistry};

/// First pass, run once per output in output order as outputs are discovered.
/// Flags a probable action type from the leading payload byte; length, phase
/// and fee checks wait for the validation pass once the paid fee is known.
pub fn scan_action_candidate(output: &OutputInProgress, ctx: &mut TxParseContext) {
    let Some(payload) = output.payload.as_deref() else {
        return;
    };
    if output.value == 0 && !payload.is_empty() {
        if let Some(action) = ActionType::from_discriminator(payload[0]) {
            ctx.candidate_type = Some(action);
        }
    }
}

/// Second pass over the designated data output, once the whole transaction
/// has been inspected and the paid token fee is known. Dispatches to the
/// matching validator and applies the resulting tagging and state update.
///
/// Gate violations (non-zero value, not the last output, empty payload) and
/// unrecognized discriminators are not rejections of the transaction: the
/// outputs keep whatever classification upstream assigned.
#[allow(clippy::too_many_arguments)]
pub fn validate_action_output(
    registry: &ValidatorRegistry,
    tx: &mut TxInProgress,
    index: usize,
    token_fee: u64,
    block_height: u64,
    phases: &dyn PhaseSchedule,
    fees: &dyn FeeSchedule,
    ctx: &mut TxParseContext,
) {
    let Some(decision) = evaluate(
        registry,
        tx,
        index,
        token_fee,
        block_height,
        phases,
        fees,
        ctx,
    ) else {
        return;
    };
    apply(decision, tx, index, block_height, ctx);
}

struct Decision {
    action: ActionType,
    accepted: bool,
    lock_blocks: Option<u16>,
}

// Read-only evaluation; all mutation happens in `apply` so a verdict is
// always applied whole, never partially.
#[allow(clippy::too_many_arguments)]
fn evaluate(
    registry: &ValidatorRegistry,
    tx: &TxInProgress,
    index: usize,
    token_fee: u64,
    block_height: u64,
    phases: &dyn PhaseSchedule,
    fees: &dyn FeeSchedule,
    ctx: &TxParseContext,
) -> Option<Decision> {
    let Some(output) = tx.outputs.get(index) else {
        warn!(
            txid = %hex::encode(tx.txid),
            index,
            "data output index out of range"
        );
        return None;
    };
    let payload = output.payload.as_deref().unwrap_or(&[]);

    let is_last = index + 1 == tx.outputs.len();
    if output.value != 0 || !is_last || payload.is_empty() {
        warn!(
            txid = %hex::encode(tx.txid),
            payload = %hex::encode(payload),
            "data output does not match the embedded-data rules"
        );
        return None;
    }

    let Some(action) = ActionType::from_discriminator(payload[0]) else {
        warn!(
            txid = %hex::encode(tx.txid),
            payload = %hex::encode(payload),
            "data payload does not match any recognized action type"
        );
        return None;
    };

    let Some(validator) = registry.get(action) else {
        // Action types and registered validators must stay in lock step;
        // reaching this branch is a programming bug, not bad chain data.
        error!(
            action = action.as_str(),
            "no validator registered for recognized action type"
        );
        debug_assert!(
            false,
            "no validator registered for {}",
            action.as_str()
        );
        return None;
    };

    let req = ValidationRequest {
        payload,
        token_fee,
        block_height,
        phases,
        fees,
    };
    let accepted = validator.validate(&req, ctx);

    // Lockup fields are decoded unconditionally, before the verdict is known;
    // the decode tolerates short payloads.
    let lock_blocks = if action == ActionType::BondLockup {
        lockup_blocks(payload)
    } else {
        None
    };

    Some(Decision {
        action,
        accepted,
        lock_blocks,
    })
}

fn apply(
    decision: Decision,
    tx: &mut TxInProgress,
    index: usize,
    block_height: u64,
    ctx: &mut TxParseContext,
) {
    let Decision {
        action,
        accepted,
        lock_blocks,
    } = decision;

    if accepted {
        tx.outputs[index].kind = action.record_kind();
        ctx.set_verified_type(action);
        match action {
            ActionType::CompRequest => {
                // A confirmed request turns the funding candidate into a
                // token issuance candidate.
                if let Some(candidate) = ctx.issuance_candidate {
                    set_kind(tx, candidate, OutputKind::IssuanceCandidate);
                }
            }
            ActionType::BondLockup => {
                tx.bond_lock_blocks = lock_blocks;
            }
            _ => {}
        }
        return;
    }

    info!(
        action = action.as_str(),
        txid = %hex::encode(tx.txid),
        block_height,
        "expected action payload did not match the rules"
    );
    tx.outputs[index].kind = OutputKind::Invalid;

    // Without a valid companion record the dependent candidate output cannot
    // carry tokens; it falls back to a plain base-coin transfer.
    let demoted = match action {
        ActionType::Proposal => None,
        ActionType::CompRequest => ctx.issuance_candidate,
        ActionType::BlindVote => ctx.blind_vote_stake,
        ActionType::VoteReveal => ctx.vote_reveal_unlock_stake,
        ActionType::BondLockup => ctx.lockup_candidate,
    };
    if let Some(candidate) = demoted {
        set_kind(tx, candidate, OutputKind::PlainTransfer);
    }
}

fn set_kind(tx: &mut TxInProgress, index: usize, kind: OutputKind) {
    if let Some(output) = tx.outputs.get_mut(index) {
        output.kind = kind;
    }
}
