pub use framebuffer::FrameBuffer;
pub use machine::Machine;
pub use pointer::{Direction, Pointer};

pub mod constants;
mod framebuffer;
mod instruction;
mod machine;
mod memory;
mod operations;
mod pointer;
mod stack;

use thiserror::Error;

/// Faults the dispatcher can raise mid-run.
///
/// Neither corrupts the machine; a host may log one and keep cycling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// A push landed on a full stack; the value was not stored.
    #[error("attempted to push on full stack")]
    StackOverflow,
    /// A `/` or `%` popped a zero divisor.
    #[error("division by zero")]
    DivByZero,
}

/// Fatal ROM ingestion failure; aborts startup.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("failed to read ROM: {0}")]
    Io(#[from] std::io::Error),
}
