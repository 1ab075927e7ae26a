pub const DISCRIMINATOR_LEN: usize = 8;

pub const SALE_SEED: &str = "sale";
