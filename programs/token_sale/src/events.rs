use anchor_lang::prelude::*;

#[event]
pub struct PaymentEvent {
    pub from: Pubkey,
    pub amount: u64,
    pub total_custodied: u64,
}
