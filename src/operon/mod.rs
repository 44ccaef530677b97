pub mod distribution;
pub mod filter;
pub mod group;
pub mod record;
