use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Signer is not the sale owner")]
    Unauthorized,

    #[msg("Sale is not active")]
    SaleInactive,

    #[msg("Owner cannot be the default pubkey")]
    InvalidOwner,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Custodied balance exceeds the lamports held by the sale account")]
    InsufficientFunds,
}
