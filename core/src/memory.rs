use std::collections::HashMap;
use std::io::{ErrorKind, Read};

use crate::constants::{MEMORY_HEIGHT, MEMORY_WIDTH};
use crate::RomError;

/// Marks the cell to its right as a label.
const LABEL_MARKER: u8 = b';';

/// # Memory grid
/// 256x128 bytes of toroidally addressed storage.
///
/// There is no distinction between code and data; the grid is the program.
pub struct Memory {
    cells: [u8; MEMORY_WIDTH * MEMORY_HEIGHT],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            cells: [0; MEMORY_WIDTH * MEMORY_HEIGHT],
        }
    }

    /// Flattens toroidal (x, y) coordinates into a row-major index.
    fn index(x: usize, y: usize) -> usize {
        (y % MEMORY_HEIGHT) * MEMORY_WIDTH + (x % MEMORY_WIDTH)
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[Self::index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[Self::index(x, y)] = value;
    }

    /// Zeroes all 32,768 cells.
    pub fn clear(&mut self) {
        self.cells = [0; MEMORY_WIDTH * MEMORY_HEIGHT];
    }

    /// Lays a ROM into the grid one byte at a time, starting at row 0.
    ///
    /// Each text line fills one 256-byte row. A newline is not stored: it
    /// zero-fills the remainder of the current row and loading resumes at
    /// the start of the next one. A line that reaches 255 bytes without a
    /// newline folds back to the start of its own row, leaving column 255
    /// untouched. Rows past 127 wrap back to row 0.
    pub fn load(&mut self, reader: &mut dyn Read) -> Result<(), RomError> {
        let mut column: usize = 0;
        let mut row: usize = 0;
        let mut buf = [0u8; 1];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(RomError::Io(e)),
            }
            if buf[0] == b'\n' {
                while column < MEMORY_WIDTH {
                    self.set(column, row, 0);
                    column += 1;
                }
                column = 0;
                row += 1;
                continue;
            }
            self.set(column, row, buf[0]);
            column += 1;
            if column == MEMORY_WIDTH - 1 {
                column = 0;
            }
        }
        Ok(())
    }

    /// Scans the grid for labels: any byte preceded by `;` maps to its own
    /// coordinate. Later occurrences overwrite earlier ones. The scan skips
    /// the last column of each row, so column 255 is never a label key.
    pub fn scan_labels(&self) -> HashMap<u8, (u8, u8)> {
        let mut labels = HashMap::new();
        for y in 0..MEMORY_HEIGHT {
            for x in 0..MEMORY_WIDTH - 1 {
                if self.get(x, y) == LABEL_MARKER {
                    labels.insert(self.get(x + 1, y), ((x + 1) as u8, y as u8));
                }
            }
        }
        labels
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(rom: &[u8]) -> Memory {
        let mut memory = Memory::new();
        memory.load(&mut &rom[..]).unwrap();
        memory
    }

    #[test]
    fn test_addressing_wraps_both_dimensions() {
        let mut memory = Memory::new();
        memory.set(MEMORY_WIDTH + 44, MEMORY_HEIGHT + 2, 0xAB);
        assert_eq!(memory.get(44, 2), 0xAB);
    }

    #[test]
    fn test_load_lays_lines_into_rows() {
        let memory = load(b"ab\ncd");
        assert_eq!(memory.get(0, 0), b'a');
        assert_eq!(memory.get(1, 0), b'b');
        assert_eq!(memory.get(2, 0), 0);
        assert_eq!(memory.get(0, 1), b'c');
        assert_eq!(memory.get(1, 1), b'd');
    }

    #[test]
    fn test_load_does_not_store_newlines() {
        let memory = load(b"a\nb");
        assert_eq!(memory.get(1, 0), 0);
        assert_eq!(memory.get(0, 1), b'b');
    }

    #[test]
    fn test_newline_zero_fills_the_rest_of_the_row() {
        let mut memory = Memory::new();
        memory.set(200, 0, 0x55);
        memory.load(&mut &b"a\n"[..]).unwrap();
        assert_eq!(memory.get(200, 0), 0);
    }

    #[test]
    fn test_long_line_folds_back_onto_its_own_row() {
        let mut rom = vec![b'x'; 255];
        rom.push(b'Z');
        let memory = load(&rom);
        // The 256th byte lands back on column 0; column 255 stays untouched.
        assert_eq!(memory.get(0, 0), b'Z');
        assert_eq!(memory.get(254, 0), b'x');
        assert_eq!(memory.get(255, 0), 0);
        assert_eq!(memory.get(0, 1), 0);
    }

    #[test]
    fn test_scan_labels_records_the_byte_after_the_marker() {
        let memory = load(b";a");
        let labels = memory.scan_labels();
        assert_eq!(labels.get(&b'a'), Some(&(1, 0)));
    }

    #[test]
    fn test_scan_labels_last_occurrence_wins() {
        let memory = load(b";a  ;a");
        let labels = memory.scan_labels();
        assert_eq!(labels.get(&b'a'), Some(&(5, 0)));
    }

    #[test]
    fn test_scan_labels_skips_the_last_column() {
        let mut memory = Memory::new();
        memory.set(255, 0, LABEL_MARKER);
        memory.set(0, 0, b'q');
        assert!(memory.scan_labels().is_empty());
    }

    #[test]
    fn test_scan_labels_can_key_on_the_last_column() {
        let mut memory = Memory::new();
        memory.set(254, 3, LABEL_MARKER);
        memory.set(255, 3, b'k');
        let labels = memory.scan_labels();
        assert_eq!(labels.get(&b'k'), Some(&(255, 3)));
    }
}
