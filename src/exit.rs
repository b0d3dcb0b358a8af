// src/exit.rs
//! Standardized process exit codes for `seoscore`.
//!
//! Provides a stable contract for scripts and CI pipelines.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SeoExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config, store).
    Error = 1,
    /// Input validation failed (bad JSON on stdin, missing title, unknown post).
    InvalidInput = 2,
    /// Analysis ran but the score is under the requested `--min-score`.
    BelowThreshold = 3,
}

impl SeoExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for SeoExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
