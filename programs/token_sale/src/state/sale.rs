use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_LEN;
use crate::errors::ErrorCode;

#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Sale {
    /// Sole account allowed to manage the sale and sweep its funds.
    /// Set at initialization from an explicit argument, never the deployer.
    pub owner: Pubkey,
    /// Payments are only accepted while this is set.
    pub active: bool,
    /// Lamports custodied on behalf of the owner. Excludes the PDA's
    /// rent-exempt reserve, which is never swept.
    pub total_custodied: u64,
    /// Number of payments accepted so far.
    pub deposit_count: u64,
    pub bump: u8,
}

impl Sale {
    pub const LEN: usize = DISCRIMINATOR_LEN + Sale::INIT_SPACE;

    pub fn init(&mut self, owner: Pubkey, bump: u8) -> Result<()> {
        if owner == Pubkey::default() {
            return Err(ErrorCode::InvalidOwner.into());
        }

        self.owner = owner;
        self.active = false;
        self.total_custodied = 0;
        self.deposit_count = 0;
        self.bump = bump;
        Ok(())
    }

    /// Single authorization check shared by every admin operation.
    pub fn ensure_owner(&self, signer: &Pubkey) -> Result<()> {
        if self.owner != *signer {
            return Err(ErrorCode::Unauthorized.into());
        }
        Ok(())
    }

    /// Idempotent: re-opening an open gate or re-closing a closed one is a
    /// no-op, not an error.
    pub fn set_active(&mut self, signer: &Pubkey, active: bool) -> Result<()> {
        self.ensure_owner(signer)?;
        self.active = active;
        Ok(())
    }

    pub fn transfer_ownership(&mut self, signer: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.ensure_owner(signer)?;

        if new_owner == Pubkey::default() {
            return Err(ErrorCode::InvalidOwner.into());
        }

        self.owner = new_owner;
        Ok(())
    }

    /// Ledger half of a deposit. Rejects outright while the gate is closed;
    /// the caller only moves lamports after this succeeds.
    pub fn record_payment(&mut self, amount: u64) -> Result<()> {
        if !self.active {
            return Err(ErrorCode::SaleInactive.into());
        }

        let total = self
            .total_custodied
            .checked_add(amount)
            .ok_or(ErrorCode::Overflow)?;
        let count = self
            .deposit_count
            .checked_add(1)
            .ok_or(ErrorCode::Overflow)?;

        self.total_custodied = total;
        self.deposit_count = count;
        Ok(())
    }

    /// Owner-only full sweep. Returns the amount the caller must pay out.
    pub fn sweep(&mut self, signer: &Pubkey) -> Result<u64> {
        self.ensure_owner(signer)?;

        let amount = self.total_custodied;
        self.total_custodied = 0;
        Ok(amount)
    }
}
