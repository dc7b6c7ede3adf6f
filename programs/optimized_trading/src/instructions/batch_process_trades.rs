use anchor_lang::prelude::*;

use crate::derivation;
use crate::state::{TradeData, TradingAccount};
use crate::{BatchProcessTrades, TradesBatched};

// =============================================================================
// BATCH PROCESS TRADES INSTRUCTION HANDLER
// =============================================================================
// Flow:
// 1. Load the trading account from raw data (RecordNotFound if absent)
// 2. Re-derive its address from the stored owner and bump (BumpMismatch)
// 3. Validate signer, batch shape and totals on an in-memory copy
// 4. Write the account back once, only if every check passed

/// Record a batch of trades against the signer's trading account.
///
/// # Arguments
/// * `ctx` - The validated accounts context
/// * `trade_data` - Between 1 and MAX_BATCH_SIZE trades, each with a non-zero amount
pub fn handler(ctx: Context<BatchProcessTrades>, trade_data: Vec<TradeData>) -> Result<()> {
    let info = ctx.accounts.trading_account.to_account_info();

    let mut trading_account = TradingAccount::load(info.owner, &info.try_borrow_data()?)?;
    derivation::verify_trading_address(&trading_account.owner, trading_account.bump, info.key)?;

    let summary = trading_account.record_batch(&ctx.accounts.owner.key(), &trade_data)?;

    trading_account.store(&mut info.try_borrow_mut_data()?)?;

    emit!(TradesBatched {
        trading_account: info.key(),
        owner: trading_account.owner,
        trade_count: summary.trade_count,
        batch_value: summary.batch_value,
        total_trades: trading_account.total_trades,
        total_value: trading_account.total_value,
    });

    msg!(
        "Batch recorded: {} trades, value {}. Totals: {} trades, value {}",
        summary.trade_count,
        summary.batch_value,
        trading_account.total_trades,
        trading_account.total_value
    );

    Ok(())
}
