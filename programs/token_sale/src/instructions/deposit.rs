use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::SALE_SEED;
use crate::events::PaymentEvent;
use crate::state::Sale;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut, seeds = [SALE_SEED.as_bytes()], bump = sale.bump)]
    pub sale: Account<'info, Sale>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    // Gate check first: a closed sale rejects the whole transaction, so the
    // payer's lamports never move.
    ctx.accounts.sale.record_payment(amount)?;

    let cpi_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.payer.to_account_info(),
            to: ctx.accounts.sale.to_account_info(),
        },
    );
    transfer(cpi_ctx, amount)?;

    emit!(PaymentEvent {
        from: ctx.accounts.payer.key(),
        amount,
        total_custodied: ctx.accounts.sale.total_custodied,
    });

    Ok(())
}
