//! Exit code constants for policy-index.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Outputs regenerated (or already current) |
//! | 1 | `INTERNAL` | I/O or other unexpected failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or configuration |
//! | 3 | `README_MARKERS` | README present but generated-block markers are invalid |
//! | 4 | `COLLISION_REJECTED` | Two filenames mapped to the same slot under `on_collision = "fail"` |
//! | 5 | `STALE_OUTPUT` | `--check` found outputs that would change |

/// Exit codes matching the documented exit code table.
///
/// # Example
///
/// ```rust
/// use policy_index_utils::exit_codes::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(ExitCode::STALE_OUTPUT, ExitCode::from_i32(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - outputs regenerated or already current
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - general failure, usually I/O
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments or configuration
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// README exists but its generated-block markers are missing or malformed
    pub const README_MARKERS: ExitCode = ExitCode(3);

    /// Slot collisions found and the collision policy is `fail`
    pub const COLLISION_REJECTED: ExitCode = ExitCode(4);

    /// Check mode found at least one stale output
    pub const STALE_OUTPUT: ExitCode = ExitCode(5);

    /// Get the numeric exit code value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an ExitCode from a raw i32 value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}
