use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod token_sale {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
        instructions::initialize::handle_initialize(ctx, owner)
    }

    pub fn activate(ctx: Context<SetSaleProperty>) -> Result<()> {
        instructions::sale_setters::handle_activate(ctx)
    }

    pub fn deactivate(ctx: Context<SetSaleProperty>) -> Result<()> {
        instructions::sale_setters::handle_deactivate(ctx)
    }

    pub fn transfer_ownership(ctx: Context<SetSaleProperty>, new_owner: Pubkey) -> Result<()> {
        instructions::sale_setters::handle_transfer_ownership(ctx, new_owner)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handle_deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handle_withdraw(ctx)
    }
}
