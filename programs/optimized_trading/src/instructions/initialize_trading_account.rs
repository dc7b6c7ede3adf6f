use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::TRADING_SEED;
use crate::derivation;
use crate::errors::ErrorCode;
use crate::state::TradingAccount;
use crate::{InitializeTradingAccount, TradingAccountInitialized};

// =============================================================================
// INITIALIZE TRADING ACCOUNT INSTRUCTION HANDLER
// =============================================================================
// Creates the owner's TradingAccount PDA. The account arrives unchecked so
// that a wrong address or bump is reported as BumpMismatch and an existing
// account as AlreadyInitialized, before anything is allocated.
//
// Flow:
// 1. Re-derive the address from (owner, bump) and require the canonical bump
// 2. Load the account if it already exists (initialize() then rejects it)
// 3. Otherwise create it through the system program, signed by the PDA seeds
// 4. Write the fresh TradingAccount

/// Initialize the trading account for the signing owner.
///
/// # Arguments
/// * `ctx` - The validated accounts context
/// * `bump` - Bump the client derived for ["trading", owner]; must be canonical
pub fn handler(ctx: Context<InitializeTradingAccount>, bump: u8) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let info = ctx.accounts.trading_account.to_account_info();

    derivation::verify_trading_address(&owner, bump, info.key)?;
    let (_, canonical_bump) = derivation::find_trading_address(&owner)?;
    require!(bump == canonical_bump, ErrorCode::BumpMismatch);

    let mut trading_account = if info.owner == &crate::ID && !info.data_is_empty() {
        TradingAccount::load(info.owner, &info.try_borrow_data()?)?
    } else {
        create_trading_account(ctx.accounts, &owner, bump)?;
        TradingAccount::default()
    };

    trading_account.initialize(owner, bump)?;
    trading_account.store(&mut info.try_borrow_mut_data()?)?;

    emit!(TradingAccountInitialized {
        trading_account: info.key(),
        owner,
        bump,
    });

    msg!("Trading account initialized for owner: {}", owner);

    Ok(())
}

/// Allocate the PDA and assign it to this program, paid for by the owner.
/// A PDA that was pre-funded cannot go through create_account, so it is
/// topped up to rent exemption, allocated and assigned instead.
fn create_trading_account<'info>(
    accounts: &InitializeTradingAccount<'info>,
    owner: &Pubkey,
    bump: u8,
) -> Result<()> {
    let bump_seed = [bump];
    let trading_seeds = &[TRADING_SEED, owner.as_ref(), &bump_seed];
    let signer_seeds = &[&trading_seeds[..]];

    let rent_lamports = Rent::get()?.minimum_balance(TradingAccount::SIZE);
    let current_lamports = accounts.trading_account.lamports();
    let system = accounts.system_program.to_account_info();

    if current_lamports == 0 {
        let create_ctx = CpiContext::new_with_signer(
            system,
            CreateAccount {
                from: accounts.owner.to_account_info(),
                to: accounts.trading_account.to_account_info(),
            },
            signer_seeds,
        );
        return system_program::create_account(
            create_ctx,
            rent_lamports,
            TradingAccount::SIZE as u64,
            &crate::ID,
        );
    }

    let top_up = rent_lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        let transfer_ctx = CpiContext::new(
            system.clone(),
            Transfer {
                from: accounts.owner.to_account_info(),
                to: accounts.trading_account.to_account_info(),
            },
        );
        system_program::transfer(transfer_ctx, top_up)?;
    }

    let allocate_ctx = CpiContext::new_with_signer(
        system.clone(),
        Allocate {
            account_to_allocate: accounts.trading_account.to_account_info(),
        },
        signer_seeds,
    );
    system_program::allocate(allocate_ctx, TradingAccount::SIZE as u64)?;

    let assign_ctx = CpiContext::new_with_signer(
        system,
        Assign {
            account_to_assign: accounts.trading_account.to_account_info(),
        },
        signer_seeds,
    );
    system_program::assign(assign_ctx, &crate::ID)
}
