pub mod action;
pub mod constants;
pub mod context;
pub mod schedule;
pub mod tx;
pub mod validate;
pub mod validators;

pub use action::{ActionType, BondPurpose};
pub use context::{TxParseContext, VoteRevealInputState};
pub use schedule::{FeeSchedule, FlatFees, HeightWindow, HeightWindows, Phase, PhaseSchedule};
pub use tx::{CommittedOutput, OutputInProgress, OutputKind, TxInProgress};
pub use validate::{scan_action_candidate, validate_action_output};
pub use validators::{
    lockup_blocks, lockup_purpose, ActionValidator, ValidationRequest, ValidatorRegistry,
};

#[cfg(test)]
mod validators_tests;
