//! Exit code constants for the promptgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, I/O failure)
//! - 2: Missing file (template or bound input absent)
//! - 3: Unrecognized template name

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a filesystem operation failure.
pub const USER_ERROR: i32 = 1;

/// Missing file: the template or a bound input file does not exist.
pub const MISSING_FILE: i32 = 2;

/// Unrecognized template: the template name matches no classification marker.
pub const UNRECOGNIZED_TEMPLATE: i32 = 3;
