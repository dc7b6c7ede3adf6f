use anchor_lang::prelude::*;

use crate::constants::TRADING_SEED;
use crate::errors::ErrorCode;

// =============================================================================
// TRADING ACCOUNT ADDRESS DERIVATION
// =============================================================================
// A trading account lives at the PDA of ["trading", owner] under this program.
// The canonical bump is the first value, searching down from 255, that puts
// the hash off the ed25519 curve, so no private key can ever sign for it.
//

/// Derive the trading account address and canonical bump for `owner`.
///
/// Deterministic: the same owner always yields the same `(address, bump)`.
/// Returns `DerivationExhausted` instead of panicking when no bump works.
pub fn find_trading_address(owner: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[TRADING_SEED, owner.as_ref()], &crate::ID)
        .ok_or_else(|| error!(ErrorCode::DerivationExhausted))
}

/// Recompute the address for `(owner, bump)` and check it equals `address`.
///
/// Costs a single hash, unlike the full bump search. An on-curve result and
/// an address mismatch are both reported as `BumpMismatch`.
pub fn verify_trading_address(owner: &Pubkey, bump: u8, address: &Pubkey) -> Result<()> {
    let derived =
        Pubkey::create_program_address(&[TRADING_SEED, owner.as_ref(), &[bump]], &crate::ID)
            .map_err(|_| error!(ErrorCode::BumpMismatch))?;

    require_keys_eq!(derived, *address, ErrorCode::BumpMismatch);
    Ok(())
}
