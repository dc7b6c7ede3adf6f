// =============================================================================
// PDA SEEDS
// =============================================================================
// PDA (Program Derived Address) seeds are used to derive deterministic addresses.

/// Namespace seed for trading accounts.
/// Seeds: ["trading", owner.key().as_ref()]
pub const TRADING_SEED: &[u8] = b"trading";

// =============================================================================
// BATCH CONFIGURATION
// =============================================================================

/// Maximum number of trades accepted in a single batch.
/// Keeps batch_process_trades well inside the per-transaction compute budget.
pub const MAX_BATCH_SIZE: usize = 10;
