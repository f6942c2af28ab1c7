/// Logical width of the Notkia-3310 LCD in pixels.
pub const DISPLAY_WIDTH: usize = 84;

/// Logical height of the Notkia-3310 LCD in pixels.
pub const DISPLAY_HEIGHT: usize = 48;

/// Columns in the code/data grid.
pub const MEMORY_WIDTH: usize = 256;

/// Rows in the code/data grid.
pub const MEMORY_HEIGHT: usize = 128;

/// Maximum depth of the operand stack.
pub const STACK_CAPACITY: usize = 512;

/// Instructions executed per displayed frame.
pub const CYCLES_PER_FRAME: u32 = 60;

/// Pause between frames in milliseconds, approximating 60 Hz pacing.
pub const FRAME_MILLIS: u64 = 16;
