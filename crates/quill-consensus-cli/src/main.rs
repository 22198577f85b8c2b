use quill_consensus::{
    scan_action_candidate, validate_action_output, ActionType, FlatFees, HeightWindow,
    HeightWindows, OutputInProgress, OutputKind, TxInProgress, TxParseContext, ValidatorRegistry,
    VoteRevealInputState,
};
use serde::{Deserialize, Serialize};

// Conformance harness: one JSON request on stdin, one JSON response on
// stdout. Log events go to stderr so stdout stays machine-readable.

#[derive(Deserialize)]
struct OutputReq {
    value: u64,

    #[serde(default)]
    payload_hex: Option<String>,
}

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    payload_hex: String,

    #[serde(default)]
    txid_hex: String,

    #[serde(default)]
    outputs: Vec<OutputReq>,

    #[serde(default)]
    input_value: u64,

    #[serde(default)]
    token_fee: u64,

    #[serde(default)]
    block_height: u64,

    // Inclusive [start, end] phase windows.
    #[serde(default)]
    proposal_window: [u64; 2],

    #[serde(default)]
    blind_vote_window: [u64; 2],

    #[serde(default)]
    vote_reveal_window: [u64; 2],

    #[serde(default)]
    proposal_fee: u64,

    #[serde(default)]
    comp_request_fee: u64,

    #[serde(default)]
    blind_vote_fee: u64,

    // Scratch preconditions normally discovered by the upstream passes.
    #[serde(default)]
    issuance_candidate: Option<usize>,

    #[serde(default)]
    blind_vote_stake: Option<usize>,

    #[serde(default)]
    vote_reveal_unlock_stake: Option<usize>,

    #[serde(default)]
    lockup_candidate: Option<usize>,

    #[serde(default)]
    vote_reveal_input_state: String,
}

#[derive(Default, Serialize)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    output_kinds: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    candidate_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    verified_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bond_lock_blocks: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    burnt_bond_value: Option<u64>,
}

fn respond(resp: &Response) {
    let _ = serde_json::to_writer(std::io::stdout(), resp);
}

fn fail(msg: String) {
    respond(&Response {
        ok: false,
        err: Some(msg),
        ..Response::default()
    });
}

fn window(w: [u64; 2]) -> HeightWindow {
    HeightWindow {
        start: w[0],
        end: w[1],
    }
}

fn input_state(s: &str) -> Result<VoteRevealInputState, String> {
    match s {
        "" | "unknown" => Ok(VoteRevealInputState::Unknown),
        "valid" => Ok(VoteRevealInputState::Valid),
        "invalid" => Ok(VoteRevealInputState::Invalid),
        other => Err(format!("bad vote_reveal_input_state: {other}")),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let req: Request = match serde_json::from_reader(std::io::stdin()) {
        Ok(v) => v,
        Err(e) => {
            fail(format!("bad request: {e}"));
            return;
        }
    };

    match req.op.as_str() {
        "classify_payload" => {
            let payload = match hex::decode(&req.payload_hex) {
                Ok(v) => v,
                Err(_) => {
                    fail("bad payload hex".to_string());
                    return;
                }
            };
            let action = payload
                .first()
                .copied()
                .and_then(ActionType::from_discriminator);
            respond(&Response {
                ok: true,
                action: action.map(|a| a.as_str().to_string()),
                ..Response::default()
            });
        }
        "interpret_tx" => {
            let mut txid = [0u8; 32];
            if !req.txid_hex.is_empty() {
                let bytes = match hex::decode(&req.txid_hex) {
                    Ok(v) if v.len() == 32 => v,
                    _ => {
                        fail("bad txid hex".to_string());
                        return;
                    }
                };
                txid.copy_from_slice(&bytes);
            }

            let mut outputs = Vec::with_capacity(req.outputs.len());
            for out in &req.outputs {
                let payload = match &out.payload_hex {
                    Some(h) => match hex::decode(h) {
                        Ok(v) => Some(v),
                        Err(_) => {
                            fail("bad output payload hex".to_string());
                            return;
                        }
                    },
                    None => None,
                };
                outputs.push(OutputInProgress {
                    value: out.value,
                    payload,
                    kind: OutputKind::Undefined,
                });
            }
            let mut tx = TxInProgress {
                txid,
                lock_time: 0,
                bond_lock_blocks: None,
                outputs,
            };
            let Some(index) = tx.last_output_index() else {
                fail("no outputs".to_string());
                return;
            };

            let mut ctx = TxParseContext::new();
            ctx.add_to_input_value(req.input_value);
            ctx.issuance_candidate = req.issuance_candidate;
            ctx.blind_vote_stake = req.blind_vote_stake;
            ctx.vote_reveal_unlock_stake = req.vote_reveal_unlock_stake;
            ctx.lockup_candidate = req.lockup_candidate;
            ctx.vote_reveal_input_state = match input_state(&req.vote_reveal_input_state) {
                Ok(v) => v,
                Err(e) => {
                    fail(e);
                    return;
                }
            };

            let phases = HeightWindows {
                proposal: window(req.proposal_window),
                blind_vote: window(req.blind_vote_window),
                vote_reveal: window(req.vote_reveal_window),
            };
            let fees = FlatFees {
                proposal: req.proposal_fee,
                comp_request: req.comp_request_fee,
                blind_vote: req.blind_vote_fee,
            };

            // Scan pass in output order, then the fee-aware validation pass.
            for output in &tx.outputs {
                scan_action_candidate(output, &mut ctx);
            }
            let registry = ValidatorRegistry::new();
            validate_action_output(
                &registry,
                &mut tx,
                index,
                req.token_fee,
                req.block_height,
                &phases,
                &fees,
                &mut ctx,
            );

            respond(&Response {
                ok: true,
                output_kinds: Some(
                    tx.outputs
                        .iter()
                        .map(|o| o.kind.as_str().to_string())
                        .collect(),
                ),
                candidate_type: ctx.candidate_type.map(|a| a.as_str().to_string()),
                verified_type: ctx.verified_type().map(|a| a.as_str().to_string()),
                bond_lock_blocks: tx.bond_lock_blocks,
                burnt_bond_value: Some(ctx.burnt_bond_value()),
                ..Response::default()
            });
        }
        _ => {
            fail("unknown op".to_string());
        }
    }
}
