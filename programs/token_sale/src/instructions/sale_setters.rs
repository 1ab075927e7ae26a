use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::state::Sale;

/// Shared account set for every owner-gated state change. Authorization
/// happens inside the state methods, so any signer may submit and only the
/// stored owner succeeds.
#[derive(Accounts)]
pub struct SetSaleProperty<'info> {
    #[account(mut, seeds = [SALE_SEED.as_bytes()], bump = sale.bump)]
    pub sale: Account<'info, Sale>,

    pub signer: Signer<'info>,
}

pub fn handle_activate(ctx: Context<SetSaleProperty>) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts.sale.set_active(&signer, true)
}

pub fn handle_deactivate(ctx: Context<SetSaleProperty>) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts.sale.set_active(&signer, false)
}

pub fn handle_transfer_ownership(ctx: Context<SetSaleProperty>, new_owner: Pubkey) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    ctx.accounts.sale.transfer_ownership(&signer, new_owner)
}
