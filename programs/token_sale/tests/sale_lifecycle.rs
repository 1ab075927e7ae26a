use anchor_lang::prelude::*;

use token_sale::errors::ErrorCode;
use token_sale::state::Sale;

fn new_sale(owner: Pubkey) -> Sale {
    let mut sale = Sale::default();
    sale.init(owner, 255).unwrap();
    sale
}

#[test]
fn full_sale_lifecycle() {
    let deployer = Pubkey::new_unique();
    let owner = Pubkey::new_unique();

    // Construction: owner is the explicit argument, not the deployer, and
    // the gate starts closed.
    let mut sale = new_sale(owner);
    assert_ne!(sale.owner, deployer);
    assert_eq!(sale.owner, owner);
    assert!(!sale.active);

    // Purchases bounce until the owner opens the gate.
    assert_eq!(sale.record_payment(10), Err(ErrorCode::SaleInactive.into()));

    sale.set_active(&owner, true).unwrap();
    sale.record_payment(10).unwrap();
    assert_eq!(sale.total_custodied, 10);
    assert_eq!(sale.deposit_count, 1);

    // Owner sweeps the full custodied balance.
    assert_eq!(sale.sweep(&owner), Ok(10));
    assert_eq!(sale.total_custodied, 0);

    // Closed again: the next purchase attempt is rejected and leaves the
    // ledger exactly where the sweep left it.
    sale.set_active(&owner, false).unwrap();
    assert_eq!(sale.record_payment(10), Err(ErrorCode::SaleInactive.into()));
    assert_eq!(sale.total_custodied, 0);
    assert_eq!(sale.deposit_count, 1);
}

#[test]
fn admin_operations_are_inert_for_non_owners() {
    let owner = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();

    let mut sale = new_sale(owner);
    sale.set_active(&owner, true).unwrap();
    sale.record_payment(500).unwrap();

    let before = sale.clone();

    assert_eq!(
        sale.set_active(&stranger, false),
        Err(ErrorCode::Unauthorized.into())
    );
    assert_eq!(
        sale.transfer_ownership(&stranger, stranger),
        Err(ErrorCode::Unauthorized.into())
    );
    assert_eq!(sale.sweep(&stranger), Err(ErrorCode::Unauthorized.into()));

    assert_eq!(sale.owner, before.owner);
    assert_eq!(sale.active, before.active);
    assert_eq!(sale.total_custodied, before.total_custodied);
    assert_eq!(sale.deposit_count, before.deposit_count);
}

#[test]
fn ownership_handoff_moves_sweep_rights() {
    let owner = Pubkey::new_unique();
    let successor = Pubkey::new_unique();

    let mut sale = new_sale(owner);
    sale.set_active(&owner, true).unwrap();
    sale.record_payment(42).unwrap();

    sale.transfer_ownership(&owner, successor).unwrap();

    assert_eq!(sale.sweep(&owner), Err(ErrorCode::Unauthorized.into()));
    assert_eq!(sale.sweep(&successor), Ok(42));
}
