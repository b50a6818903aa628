//! # console-gen - console.log selector generator
//!
//! Enumerates every overloaded `log` signature of the fixed-address console
//! logging contract, derives each 4-byte selector, and renders two artifacts:
//! a Rust selector table for host tooling and the Solidity `console` library.

pub mod cli;
pub mod constants;
pub mod errors;
pub mod generate;
pub mod model;
pub mod output;
pub mod render;
pub mod selector;
pub mod signature;
pub mod vocabulary;
