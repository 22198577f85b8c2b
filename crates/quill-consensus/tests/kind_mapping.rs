use quill_consensus::{ActionType, BondPurpose, OutputKind, Phase};

#[test]
fn output_kind_as_str_covers_all_variants() {
    // Intentionally list every variant: this keeps OutputKind::as_str() coverage high and
    // guards against accidental renames/typos.
    let cases: &[(OutputKind, &str)] = &[
        (OutputKind::Undefined, "UNDEFINED"),
        (OutputKind::PlainTransfer, "PLAIN_TRANSFER"),
        (OutputKind::TokenTransfer, "TOKEN_TRANSFER"),
        (OutputKind::Invalid, "INVALID"),
        (OutputKind::ProposalRecord, "PROPOSAL_RECORD"),
        (OutputKind::CompRequestRecord, "COMP_REQUEST_RECORD"),
        (OutputKind::IssuanceCandidate, "ISSUANCE_CANDIDATE"),
        (OutputKind::BlindVoteRecord, "BLIND_VOTE_RECORD"),
        (OutputKind::BlindVoteStake, "BLIND_VOTE_STAKE"),
        (OutputKind::VoteRevealRecord, "VOTE_REVEAL_RECORD"),
        (
            OutputKind::VoteRevealUnlockStake,
            "VOTE_REVEAL_UNLOCK_STAKE",
        ),
        (OutputKind::LockupRecord, "LOCKUP_RECORD"),
        (OutputKind::BondLockup, "BOND_LOCKUP"),
    ];
    for (kind, want) in cases {
        assert_eq!(kind.as_str(), *want);
    }
}

#[test]
fn action_type_as_str_covers_all_variants() {
    let cases: &[(ActionType, &str)] = &[
        (ActionType::Proposal, "PROPOSAL"),
        (ActionType::CompRequest, "COMP_REQUEST"),
        (ActionType::BlindVote, "BLIND_VOTE"),
        (ActionType::VoteReveal, "VOTE_REVEAL"),
        (ActionType::BondLockup, "BOND_LOCKUP"),
    ];
    for (action, want) in cases {
        assert_eq!(action.as_str(), *want);
    }
    assert_eq!(ActionType::ALL.len(), cases.len());
}

#[test]
fn phase_and_purpose_as_str() {
    assert_eq!(Phase::Proposal.as_str(), "PROPOSAL");
    assert_eq!(Phase::BlindVote.as_str(), "BLIND_VOTE");
    assert_eq!(Phase::VoteReveal.as_str(), "VOTE_REVEAL");
    assert_eq!(BondPurpose::BondedRole.as_str(), "BONDED_ROLE");
    assert_eq!(BondPurpose::Reputation.as_str(), "REPUTATION");
}
