// =============================================================================
// INSTRUCTIONS MODULE
// =============================================================================
// Instruction handlers for the OptimizedTrading program.
//

pub mod batch_process_trades;
pub mod initialize_trading_account;

// Note: Account structs (InitializeTradingAccount, BatchProcessTrades) are
// defined in lib.rs for Anchor's IDL generation. Only handlers live here.
