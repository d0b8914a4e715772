//! Process exit codes. Part of the CLI contract.

pub const SUCCESS: i32 = 0;
pub const GENERATION_FAILED: i32 = 1; // Request/response failure
pub const CONFIG_ERROR: i32 = 2; // Missing or invalid configuration
pub const EMPTY_INPUT: i32 = 3; // Nothing to submit
pub const INTERNAL_ERROR: i32 = 4; // I/O or terminal failure
