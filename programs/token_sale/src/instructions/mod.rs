pub mod deposit;
pub mod initialize;
pub mod sale_setters;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use sale_setters::*;
pub use withdraw::*;
