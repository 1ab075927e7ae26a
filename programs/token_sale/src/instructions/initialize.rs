use anchor_lang::prelude::*;

use crate::constants::SALE_SEED;
use crate::state::Sale;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        seeds = [SALE_SEED.as_bytes()],
        bump,
        payer = deployer,
        space = Sale::LEN
    )]
    pub sale: Account<'info, Sale>,

    /// Pays rent for the sale account. Not granted any authority: the owner
    /// comes in as an instruction argument.
    #[account(mut)]
    pub deployer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
    ctx.accounts.sale.init(owner, ctx.bumps.sale)?;

    msg!("Sale created | owner: {}", owner);
    Ok(())
}
