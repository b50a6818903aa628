use alloy_primitives::{address, Address};

/// Address of the console logging contract (`0x...636F6e736F6c652e6c6f67`, "console.log" in ASCII).
/// Both generated artifacts point at it.
pub const CONSOLE_ADDRESS: Address = address!("000000000000000000636F6e736F6c652e6c6f67");

/// Name of the overloaded logging function
pub const LOG_FN_NAME: &str = "log";

/// Maximum number of arguments of a generic `log` overload
pub const MAX_LOG_ARITY: usize = 4;

/// Marker written on the first line of every generated file
pub const GENERATED_HEADER: &str = "// Code generated by console-gen; DO NOT EDIT.";

/// Native selector table consumed by the host toolkit
pub const ARGS_FILE: &str = "args.rs";

/// Solidity console library
pub const CONSOLE_SOL_FILE: &str = "console.sol";

/// Prefix of generated parameter names (`p0`, `p1`, ...)
pub const PARAM_PREFIX: &str = "p";

/// Tag prefixed to the capitalized type name to name its argument decoder
pub const ARG_KIND_PREFIX: &str = "ArgKind::";
