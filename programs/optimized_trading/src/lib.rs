use anchor_lang::prelude::*;

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Constants module: PDA seeds and batch limits
pub mod constants;

/// Trading account PDA derivation and verification
pub mod derivation;

/// Error codes returned by our program
pub mod errors;

/// Instruction handlers: initialize_trading_account, batch_process_trades
pub mod instructions;

/// Account state structures: TradingAccount, TradeData
pub mod state;

use state::*;

// Re-export errors for easier access
pub use errors::ErrorCode;

// =============================================================================
// PROGRAM ID
// =============================================================================

declare_id!("FtJMiEfxXLzpgtxHzZ5JQ2jABtJN18N1eHnn2Q4a2tcb");

// OptimizedTrading - a per-owner trading ledger
//
// Each wallet owns one TradingAccount PDA. Trades are recorded in batches of
// up to 10; a batch either lands completely or not at all.
//

#[program]
pub mod optimized_trading {
    use super::*;

    /// Create the trading account for the signing owner.
    /// Each wallet can have only one trading account.
    ///
    /// # Arguments
    /// * `bump` - Canonical bump of the ["trading", owner] PDA
    pub fn initialize_trading_account(
        ctx: Context<InitializeTradingAccount>,
        bump: u8,
    ) -> Result<()> {
        instructions::initialize_trading_account::handler(ctx, bump)
    }

    /// Record a batch of trades in a single state update.
    ///
    /// # Arguments
    /// * `trade_data` - 1 to 10 trades, each with a non-zero amount
    pub fn batch_process_trades(
        ctx: Context<BatchProcessTrades>,
        trade_data: Vec<TradeData>,
    ) -> Result<()> {
        instructions::batch_process_trades::handler(ctx, trade_data)
    }
}

// =============================================================================
// INITIALIZE TRADING ACCOUNT ACCOUNTS
// =============================================================================

#[derive(Accounts)]
pub struct InitializeTradingAccount<'info> {
    /// CHECK: the owner's trading account PDA, seeds ["trading", owner].
    /// The handler re-derives it from the supplied bump, requires the
    /// canonical bump, and creates it through the system program.
    #[account(mut)]
    pub trading_account: UncheckedAccount<'info>,

    /// The wallet that will own the trading account and pays its rent.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Required for creating accounts
    pub system_program: Program<'info, System>,
}

// =============================================================================
// BATCH PROCESS TRADES ACCOUNTS
// =============================================================================

#[derive(Accounts)]
pub struct BatchProcessTrades<'info> {
    /// CHECK: loaded by the handler, which checks program ownership, the
    /// discriminator, the PDA derivation and the stored owner, and writes
    /// the account back only after the whole batch has validated.
    #[account(mut)]
    pub trading_account: UncheckedAccount<'info>,

    /// Must match trading_account.owner
    pub owner: Signer<'info>,
}

// =============================================================================
// EVENTS
// =============================================================================

#[event]
pub struct TradingAccountInitialized {
    pub trading_account: Pubkey,
    pub owner: Pubkey,
    pub bump: u8,
}

#[event]
pub struct TradesBatched {
    pub trading_account: Pubkey,
    pub owner: Pubkey,
    pub trade_count: u64,
    pub batch_value: u64,
    pub total_trades: u64,
    pub total_value: u64,
}
