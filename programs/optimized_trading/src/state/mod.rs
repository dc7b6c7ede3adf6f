// =============================================================================
// STATE MODULE
// =============================================================================
// Account structures and batch input types for the OptimizedTrading program.
//

mod trading_account;

pub use trading_account::*;
