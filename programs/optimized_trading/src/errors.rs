use anchor_lang::prelude::*;

// =============================================================================
// ERROR CODES
// =============================================================================
// Every failed precondition maps to its own variant. A failed instruction
// never leaves the trading account partially updated.
//

#[error_code]
pub enum ErrorCode {
    // =========================================================================
    // AUTHORIZATION ERRORS
    // =========================================================================
    /// Signer is not the owner recorded in the trading account
    #[msg("Unauthorized: signer does not own this trading account")]
    Unauthorized,

    // =========================================================================
    // ACCOUNT LIFECYCLE ERRORS
    // =========================================================================
    /// Trading account for this owner has already been initialized
    #[msg("Trading account already initialized")]
    AlreadyInitialized,

    /// No initialized trading account exists at the supplied address
    #[msg("Trading account not found")]
    RecordNotFound,

    // =========================================================================
    // DERIVATION ERRORS
    // =========================================================================
    /// Supplied bump (or address) does not match the recomputed PDA
    #[msg("Bump does not reproduce the trading account address")]
    BumpMismatch,

    /// No bump in 0..=255 yields an off-curve address for these seeds
    #[msg("Unable to derive a trading account address")]
    DerivationExhausted,

    // =========================================================================
    // BATCH VALIDATION ERRORS
    // =========================================================================
    /// Batch contains no trades
    #[msg("Batch must contain at least one trade")]
    EmptyBatch,

    /// Batch exceeds MAX_BATCH_SIZE
    #[msg("Batch size cannot exceed 10 trades")]
    BatchTooLarge,

    /// Trade amount must be greater than zero
    #[msg("Invalid trade amount")]
    InvalidTradeAmount,

    // =========================================================================
    // ARITHMETIC ERRORS
    // =========================================================================
    /// total_trades would overflow u64
    #[msg("Trade counter overflow")]
    CounterOverflow,

    /// total_value would overflow u64
    #[msg("Trade value overflow")]
    ValueOverflow,
}

/// Anchor error code carried by a failed result, for asserting in tests.
#[cfg(test)]
pub(crate) fn error_code_of<T>(result: Result<T>) -> u32 {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => err.error_code_number,
        Err(err) => panic!("expected an Anchor error, got {:?}", err),
        Ok(_) => panic!("expected an error, got Ok"),
    }
}
