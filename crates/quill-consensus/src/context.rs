use std::collections::HashSet;

use crate::action::ActionType;
use crate::tx::CommittedOutput;

/// The different possible states for an input spent by a vote reveal tx.
/// Set by upstream input processing before the output pass runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoteRevealInputState {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// Per-transaction bookkeeping shared between the candidate-scan pass and the
/// validation pass. One instance per transaction; accessed by exactly one
/// thread of control for that transaction's lifetime.
///
/// Candidate fields are indices into the same transaction's output list,
/// never owning handles: the outputs themselves belong to the
/// `TxInProgress`.
#[derive(Clone, Debug, Default)]
pub struct TxParseContext {
    available_input_value: i64,
    burnt_bond_value: u64,

    pub issuance_candidate: Option<usize>,
    pub blind_vote_stake: Option<usize>,
    pub vote_reveal_unlock_stake: Option<usize>,
    pub lockup_candidate: Option<usize>,

    pub token_output_found: bool,
    pub vote_reveal_input_state: VoteRevealInputState,

    /// Committed lockup output being spent, if any. Read-only chain state.
    pub spent_lockup_output: Option<CommittedOutput>,
    pub unlock_block_height: u64,
    /// Committed outputs consumed by a bond unlock. Read-only chain state.
    pub spent_unlock_outputs: HashSet<CommittedOutput>,

    /// Set preliminarily while scanning the outputs; not yet a verified
    /// action at that point.
    pub candidate_type: Option<ActionType>,
    verified_type: Option<ActionType>,
}

impl TxParseContext {
    pub fn new() -> TxParseContext {
        TxParseContext::default()
    }

    pub fn add_to_input_value(&mut self, value: u64) {
        self.available_input_value += value as i64;
    }

    pub fn subtract_from_input_value(&mut self, value: u64) {
        self.available_input_value -= value as i64;
    }

    pub fn is_input_value_positive(&self) -> bool {
        self.available_input_value > 0
    }

    pub fn available_input_value(&self) -> i64 {
        self.available_input_value
    }

    /// Debits the running input value and credits the cumulative burnt bond
    /// value in one step.
    pub fn burn_bond(&mut self, value: u64) {
        self.subtract_from_input_value(value);
        self.burnt_bond_value += value;
    }

    pub fn burnt_bond_value(&self) -> u64 {
        self.burnt_bond_value
    }

    /// At most one action type is ever verified per transaction: only the
    /// single designated data output is dispatched.
    pub fn set_verified_type(&mut self, action: ActionType) {
        debug_assert!(
            self.verified_type.is_none(),
            "verified type already set to {}",
            self.verified_type.map(ActionType::as_str).unwrap_or("?"),
        );
        self.verified_type = Some(action);
    }

    pub fn verified_type(&self) -> Option<ActionType> {
        self.verified_type
    }
}
