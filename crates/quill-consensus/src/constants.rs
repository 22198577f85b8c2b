// Consensus constants for the embedded-data action payloads. Changing any of
// these is a hard fork.

pub const ACTION_PROPOSAL: u8 = 0x10;
pub const ACTION_COMP_REQUEST: u8 = 0x11;
pub const ACTION_BLIND_VOTE: u8 = 0x12;
pub const ACTION_VOTE_REVEAL: u8 = 0x13;
pub const ACTION_BOND_LOCKUP: u8 = 0x14;

pub const BOND_PURPOSE_BONDED_ROLE: u8 = 0x01;
pub const BOND_PURPOSE_REPUTATION: u8 = 0x02;

// version/type header (2) + 20-byte hash
pub const PROPOSAL_PAYLOAD_BYTES: usize = 22;
pub const COMP_REQUEST_PAYLOAD_BYTES: usize = 22;
pub const BLIND_VOTE_PAYLOAD_BYTES: usize = 22;

// version/type header (2) + 20-byte hash + 16-byte key
pub const VOTE_REVEAL_PAYLOAD_BYTES: usize = 38;

// version/type header (2) + purpose (1) + lock blocks (2, big-endian)
pub const LOCKUP_PAYLOAD_BYTES: usize = 5;
pub const LOCKUP_PURPOSE_OFFSET: usize = 2;
pub const LOCKUP_BLOCKS_OFFSET: usize = 3;

pub const MIN_LOCK_BLOCKS: u16 = 144;
pub const MAX_LOCK_BLOCKS: u16 = 52_560;
