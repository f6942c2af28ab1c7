use std::collections::HashMap;
use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::framebuffer::FrameBuffer;
use crate::instruction;
use crate::memory::Memory;
use crate::pointer::Pointer;
use crate::stack::Stack;
use crate::{ExecError, RomError};

/// # NK33
/// The Notkia-3310 is a virtual machine executing a 2D stack-based
/// instruction set over a 256x128 byte grid.
///
/// Tracks:
///  - the operand `stack`, `memory` grid, and `frame_buffer`
///  - the label index rebuilt on every ROM load
///  - the instruction `pointer` and its travel direction
///  - the gamepad register, sound pitch, and the shutdown/redraw flags
///
/// Supplies interfaces for:
/// - loading ROMs
/// - advancing execution one cycle at a time
/// - inspecting the frame buffer for rendering by some display
/// - latching gamepad state written by the host between cycles
pub struct Machine {
    pub(crate) stack: Stack,
    pub(crate) memory: Memory,
    pub(crate) frame_buffer: FrameBuffer,
    pub(crate) labels: HashMap<u8, (u8, u8)>,
    pub(crate) pointer: Pointer,
    pub(crate) gamepad: u16,
    pub(crate) sound_pitch: u8,
    pub(crate) shutdown: bool,
    pub(crate) redraw: bool,
    pub(crate) rng: StdRng,
}

impl Machine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A machine whose random-direction opcode is deterministic.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Machine {
            stack: Stack::new(),
            memory: Memory::new(),
            frame_buffer: FrameBuffer::new(),
            labels: HashMap::new(),
            pointer: Pointer::new(),
            gamepad: 0,
            sound_pitch: 0,
            shutdown: false,
            redraw: false,
            rng,
        }
    }

    /// Resets every register, flag, and byte of storage to power-on state.
    pub fn initialize(&mut self) {
        self.stack.clear();
        self.memory.clear();
        self.frame_buffer.clear();
        self.labels.clear();
        self.pointer = Pointer::new();
        self.gamepad = 0;
        self.sound_pitch = 0;
        self.shutdown = false;
        self.redraw = false;
    }

    /// Loads a ROM and rebuilds the label index.
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), RomError> {
        self.memory.load(reader)?;
        self.labels = self.memory.scan_labels();
        Ok(())
    }

    /// Advances the machine by a single cycle: fetches the byte under the
    /// pointer, dispatches it, then steps the pointer once in the travel
    /// direction.
    ///
    /// The tail step happens unconditionally, even after jumps, skips,
    /// shutdown, and faults; `#` and `'` therefore land two cells ahead.
    pub fn run_cycle(&mut self) -> Result<(), ExecError> {
        let result = instruction::dispatch(self);
        self.pointer.advance();
        result
    }

    /// Returns the frame buffer if the display should be redrawn.
    pub fn get_frame(&self) -> Option<&FrameBuffer> {
        if self.redraw {
            Some(&self.frame_buffer)
        } else {
            None
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn redraw(&self) -> bool {
        self.redraw
    }

    /// Acknowledges a repaint; the host calls this after presenting.
    pub fn clear_redraw(&mut self) {
        self.redraw = false;
    }

    pub fn shutdown(&self) -> bool {
        self.shutdown
    }

    /// Latches the 12 usable gamepad bits; the high nibble is discarded.
    pub fn set_gamepad(&mut self, buttons: u16) {
        self.gamepad = buttons & 0x0FFF;
    }

    pub fn gamepad(&self) -> u16 {
        self.gamepad
    }

    pub fn sound_pitch(&self) -> u8 {
        self.sound_pitch
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
