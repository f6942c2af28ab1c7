use crate::machine::Machine;
use crate::operations;
use crate::ExecError;

/// A single opcode handler.
///
/// Handlers mutate the machine directly and may fault; they never advance
/// the pointer except to jump or skip. The tail advance belongs to the
/// cycle, not the handler.
pub type Operation = fn(&mut Machine) -> Result<(), ExecError>;

/// Selects the handler for an opcode byte, if the byte is an opcode.
pub fn from_byte(opcode: u8) -> Option<Operation> {
    match opcode {
        b' ' => Some(operations::nop),
        b'>' => Some(operations::east),
        b'<' => Some(operations::west),
        b'v' => Some(operations::south),
        b'^' => Some(operations::north),
        b'?' => Some(operations::scatter),
        b'+' => Some(operations::add),
        b'-' => Some(operations::sub),
        b'*' => Some(operations::mul),
        b'/' => Some(operations::div),
        b'%' => Some(operations::rem),
        b'!' => Some(operations::not),
        b'`' => Some(operations::greater),
        b'|' => Some(operations::branch_vertical),
        b'_' => Some(operations::branch_horizontal),
        b'\\' => Some(operations::swap),
        b':' => Some(operations::dup),
        b'$' => Some(operations::discard),
        b'g' => Some(operations::get),
        b'G' => Some(operations::get_hex),
        b'p' => Some(operations::put),
        b'P' => Some(operations::put_hex),
        b'#' => Some(operations::skip),
        b'\'' => Some(operations::quote),
        b'j' => Some(operations::jump),
        b'l' => Some(operations::label),
        b'.' => Some(operations::plot),
        b',' => Some(operations::blit),
        b'C' => Some(operations::clear),
        b'@' => Some(operations::halt),
        _ => None,
    }
}

/// Decodes a hex-literal byte: `'0'..='9'` and `'a'..='f'` map to 0..=15.
pub fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Executes the byte under the pointer: a known opcode runs its handler,
/// a hex literal pushes its value, anything else is a no-op.
pub fn dispatch(machine: &mut Machine) -> Result<(), ExecError> {
    let byte = machine
        .memory
        .get(machine.pointer.x as usize, machine.pointer.y as usize);
    match from_byte(byte) {
        Some(operation) => operation(machine),
        None => match hex_value(byte) {
            Some(value) => machine.stack.push(value),
            None => Ok(()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_value_decodes_digits() {
        assert_eq!(hex_value(b'0'), Some(0));
        assert_eq!(hex_value(b'9'), Some(9));
    }

    #[test]
    fn test_hex_value_decodes_lowercase_letters() {
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'f'), Some(15));
    }

    #[test]
    fn test_hex_value_rejects_everything_else() {
        assert_eq!(hex_value(b'g'), None);
        assert_eq!(hex_value(b'A'), None);
        assert_eq!(hex_value(0x00), None);
    }

    #[test]
    fn test_from_byte_knows_the_opcode_table() {
        assert!(from_byte(b'@').is_some());
        assert!(from_byte(b',').is_some());
        assert!(from_byte(b'q').is_none());
        assert!(from_byte(b'5').is_none());
    }

    #[test]
    fn test_dispatch_pushes_hex_literals() {
        let mut machine = Machine::with_seed(0);
        machine.memory.set(0, 0, b'b');
        dispatch(&mut machine).unwrap();
        assert_eq!(machine.stack.pop(), 11);
    }

    #[test]
    fn test_dispatch_ignores_unknown_bytes() {
        let mut machine = Machine::with_seed(0);
        machine.memory.set(0, 0, b'Z');
        dispatch(&mut machine).unwrap();
        assert!(machine.stack.is_empty());
        assert_eq!((machine.pointer.x, machine.pointer.y), (0, 0));
    }
}
