//! Exit code constants for the depscan CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing config file)
//! - 2: Config error (malformed YAML, wrong version, bad module type)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a config path that cannot be used.
pub const USER_ERROR: i32 = 1;

/// Config error: the config document was read but rejected.
pub const CONFIG_ERROR: i32 = 2;
