pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod operon;
pub mod sequence;
pub mod tree;
