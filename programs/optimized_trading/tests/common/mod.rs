#![allow(dead_code)]

use anchor_lang::prelude::*;
use anchor_lang::solana_program::entrypoint::ProgramResult;

use optimized_trading::derivation::find_trading_address;
use optimized_trading::state::{TradeData, TradingAccount};

/// Owned backing storage for one account passed to the program entrypoint.
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
    pub is_writable: bool,
    pub executable: bool,
}

impl TestAccount {
    pub fn signer(key: Pubkey) -> Self {
        Self {
            key,
            owner: anchor_lang::system_program::ID,
            lamports: 1_000_000_000,
            data: Vec::new(),
            is_signer: true,
            is_writable: true,
            executable: false,
        }
    }

    /// An address nothing has been created at yet.
    pub fn empty(key: Pubkey) -> Self {
        Self {
            key,
            owner: anchor_lang::system_program::ID,
            lamports: 0,
            data: Vec::new(),
            is_signer: false,
            is_writable: true,
            executable: false,
        }
    }

    /// A program-owned account holding `record`.
    pub fn trading(key: Pubkey, record: &TradingAccount) -> Self {
        let mut data = vec![0u8; TradingAccount::SIZE];
        record.store(&mut data).unwrap();

        Self {
            key,
            owner: optimized_trading::ID,
            lamports: 1_000_000,
            data,
            is_signer: false,
            is_writable: true,
            executable: false,
        }
    }

    pub fn system_program() -> Self {
        Self {
            key: anchor_lang::system_program::ID,
            owner: Pubkey::default(),
            lamports: 1,
            data: Vec::new(),
            is_signer: false,
            is_writable: false,
            executable: true,
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            self.is_writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }

    pub fn record(&self) -> TradingAccount {
        TradingAccount::load(&self.owner, &self.data).unwrap()
    }
}

/// Run one instruction through the program entrypoint.
pub fn process(accounts: &mut [TestAccount], data: &[u8]) -> ProgramResult {
    let infos: Vec<AccountInfo> = accounts.iter_mut().map(TestAccount::info).collect();
    optimized_trading::entry(&optimized_trading::ID, &infos, data)
}

/// Canonical trading account for `owner`, already initialized.
pub fn initialized_account(owner: Pubkey) -> TestAccount {
    let (address, bump) = find_trading_address(&owner).unwrap();
    let mut record = TradingAccount::default();
    record.initialize(owner, bump).unwrap();

    TestAccount::trading(address, &record)
}

pub fn trade(amount: u64) -> TradeData {
    TradeData {
        amount,
        token_mint: Pubkey::new_unique(),
    }
}

pub fn custom_error(code: optimized_trading::ErrorCode) -> ProgramResult {
    Err(ProgramError::Custom(u32::from(code)))
}
