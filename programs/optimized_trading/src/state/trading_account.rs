use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH_SIZE;
use crate::errors::ErrorCode;

// =============================================================================
// TRADING ACCOUNT & TRADE DATA
// =============================================================================
// Each owner has ONE TradingAccount. It is created once and afterwards only
// grows: batches add to total_trades and total_value, nothing subtracts.
//

/// A single trade in a batch. Only its amount and the batch size are
/// folded into the trading account; the entry itself is not stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeData {
    /// Traded quantity in base units. Must be non-zero.
    pub amount: u64,

    /// Mint of the traded token.
    pub token_mint: Pubkey,
}

/// Totals for one accepted batch, reported through `TradesBatched`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of trades in the batch.
    pub trade_count: u64,

    /// Sum of the batch's trade amounts.
    pub batch_value: u64,
}

/// Per-owner trading ledger.
///
/// PDA derived with seeds: ["trading", owner.key().as_ref()]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct TradingAccount {
    /// The wallet that owns this account. Never changes after initialization.
    pub owner: Pubkey,

    /// Number of trades recorded across all accepted batches.
    pub total_trades: u64,

    /// Sum of trade amounts across all accepted batches.
    pub total_value: u64,

    /// Canonical PDA bump, kept so the address can be re-checked cheaply.
    pub bump: u8,
}

impl TradingAccount {
    /// Size of the TradingAccount in bytes.
    pub const SIZE: usize = 8 + // discriminator
        32 +  // owner
        8 +   // total_trades
        8 +   // total_value
        1; // bump

    /// A freshly allocated account is zero-filled, and the default pubkey
    /// (the system program) can never sign, so a zero owner means "not yet
    /// initialized".
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Deserialize a trading account from raw account data.
    ///
    /// Data not owned by this program, or not carrying the TradingAccount
    /// discriminator, is reported as `RecordNotFound`.
    pub fn load(program_owner: &Pubkey, data: &[u8]) -> Result<Self> {
        require_keys_eq!(*program_owner, crate::ID, ErrorCode::RecordNotFound);
        require!(
            data.starts_with(Self::DISCRIMINATOR),
            ErrorCode::RecordNotFound
        );

        Self::try_deserialize(&mut &data[..])
    }

    /// Write the account (discriminator included) back into raw account data.
    pub fn store(&self, data: &mut [u8]) -> Result<()> {
        let mut writer = data;
        self.try_serialize(&mut writer)
    }

    /// Uninitialized -> Active. Rejects a second initialization without
    /// touching any field.
    pub fn initialize(&mut self, owner: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), ErrorCode::AlreadyInitialized);

        self.owner = owner;
        self.total_trades = 0;
        self.total_value = 0;
        self.bump = bump;
        Ok(())
    }

    /// Apply a batch of trades on behalf of `signer`.
    ///
    /// All checks run against local copies first; the account is written
    /// only once every trade has validated and both totals fit in a u64.
    pub fn record_batch(
        &mut self,
        signer: &Pubkey,
        trades: &[TradeData],
    ) -> Result<BatchSummary> {
        require_keys_eq!(*signer, self.owner, ErrorCode::Unauthorized);
        require!(!trades.is_empty(), ErrorCode::EmptyBatch);
        require!(trades.len() <= MAX_BATCH_SIZE, ErrorCode::BatchTooLarge);

        let mut batch_value: u64 = 0;
        for trade in trades {
            require!(trade.amount > 0, ErrorCode::InvalidTradeAmount);
            batch_value = batch_value
                .checked_add(trade.amount)
                .ok_or(ErrorCode::ValueOverflow)?;
        }

        let trade_count = trades.len() as u64;
        let total_trades = self
            .total_trades
            .checked_add(trade_count)
            .ok_or(ErrorCode::CounterOverflow)?;
        let total_value = self
            .total_value
            .checked_add(batch_value)
            .ok_or(ErrorCode::ValueOverflow)?;

        // Single state update after every check has passed
        self.total_trades = total_trades;
        self.total_value = total_value;

        Ok(BatchSummary {
            trade_count,
            batch_value,
        })
    }
}
