pub mod extract;
pub mod store;
