use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::errors::ErrorCode;
use crate::state::Sale;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [SALE_SEED.as_bytes()], bump = sale.bump)]
    pub sale: Account<'info, Sale>,

    /// Receives the swept lamports. Must match the stored owner.
    #[account(mut)]
    pub signer: Signer<'info>,
}

pub fn handle_withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    let amount = ctx.accounts.sale.sweep(&signer)?;

    // The sale account is owned by this program, so its lamports can be
    // moved directly. The rent-exempt reserve stays behind.
    let sale_info = ctx.accounts.sale.to_account_info();
    let owner_info = ctx.accounts.signer.to_account_info();

    let sale_lamports = sale_info.lamports();
    let owner_lamports = owner_info.lamports();

    **sale_info.try_borrow_mut_lamports()? = sale_lamports
        .checked_sub(amount)
        .ok_or(ErrorCode::InsufficientFunds)?;
    **owner_info.try_borrow_mut_lamports()? = owner_lamports
        .checked_add(amount)
        .ok_or(ErrorCode::Overflow)?;

    msg!("Swept {} lamports to owner", amount);
    Ok(())
}
