use rand::Rng;

use crate::instruction::hex_value;
use crate::machine::Machine;
use crate::pointer::Direction;
use crate::ExecError;

/// Sprite lines per blit.
const SPRITE_HEIGHT: usize = 8;

/// no effect
pub fn nop(_machine: &mut Machine) -> Result<(), ExecError> {
    Ok(())
}

/// DIR = East
pub fn east(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.direction = Direction::East;
    Ok(())
}

/// DIR = West
pub fn west(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.direction = Direction::West;
    Ok(())
}

/// DIR = South
pub fn south(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.direction = Direction::South;
    Ok(())
}

/// DIR = North
pub fn north(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.direction = Direction::North;
    Ok(())
}

/// DIR = random
pub fn scatter(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.direction = Direction::from_index(machine.rng.gen_range(0..4));
    Ok(())
}

/// PUSH(a + b)
pub fn add(machine: &mut Machine) -> Result<(), ExecError> {
    let (a, b) = (machine.stack.pop(), machine.stack.pop());
    machine.stack.push(a.wrapping_add(b))
}

/// PUSH(a - b)
pub fn sub(machine: &mut Machine) -> Result<(), ExecError> {
    let (a, b) = (machine.stack.pop(), machine.stack.pop());
    machine.stack.push(a.wrapping_sub(b))
}

/// PUSH(a * b)
pub fn mul(machine: &mut Machine) -> Result<(), ExecError> {
    let (a, b) = (machine.stack.pop(), machine.stack.pop());
    machine.stack.push(a.wrapping_mul(b))
}

/// PUSH(a / b); faults on a zero divisor
pub fn div(machine: &mut Machine) -> Result<(), ExecError> {
    let (a, b) = (machine.stack.pop(), machine.stack.pop());
    if b == 0 {
        return Err(ExecError::DivByZero);
    }
    machine.stack.push(a / b)
}

/// PUSH(a % b); faults on a zero divisor
pub fn rem(machine: &mut Machine) -> Result<(), ExecError> {
    let (a, b) = (machine.stack.pop(), machine.stack.pop());
    if b == 0 {
        return Err(ExecError::DivByZero);
    }
    machine.stack.push(a % b)
}

/// PUSH(a == 0)
pub fn not(machine: &mut Machine) -> Result<(), ExecError> {
    let a = machine.stack.pop();
    machine.stack.push(if a == 0 { 1 } else { 0 })
}

/// PUSH(b > a)
pub fn greater(machine: &mut Machine) -> Result<(), ExecError> {
    let (a, b) = (machine.stack.pop(), machine.stack.pop());
    machine.stack.push(if b > a { 1 } else { 0 })
}

/// DIR = South if a == 0 else North
pub fn branch_vertical(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.direction = if machine.stack.pop() == 0 {
        Direction::South
    } else {
        Direction::North
    };
    Ok(())
}

/// DIR = East if a == 0 else West
pub fn branch_horizontal(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.direction = if machine.stack.pop() == 0 {
        Direction::East
    } else {
        Direction::West
    };
    Ok(())
}

/// PUSH(a); PUSH(b)
pub fn swap(machine: &mut Machine) -> Result<(), ExecError> {
    let (a, b) = (machine.stack.pop(), machine.stack.pop());
    machine.stack.push(a)?;
    machine.stack.push(b)
}

/// PUSH(PEEK())
pub fn dup(machine: &mut Machine) -> Result<(), ExecError> {
    let top = machine.stack.peek();
    machine.stack.push(top)
}

/// POP()
pub fn discard(machine: &mut Machine) -> Result<(), ExecError> {
    machine.stack.pop();
    Ok(())
}

/// PUSH(MEM[x, y])
pub fn get(machine: &mut Machine) -> Result<(), ExecError> {
    let (x, y) = (machine.stack.pop(), machine.stack.pop());
    let value = machine.memory.get(x as usize, y as usize);
    machine.stack.push(value)
}

/// PUSH(HEX(MEM[x, y]))
pub fn get_hex(machine: &mut Machine) -> Result<(), ExecError> {
    let (x, y) = (machine.stack.pop(), machine.stack.pop());
    let value = machine.memory.get(x as usize, y as usize);
    machine.stack.push(hex_value(value).unwrap_or(0xFF))
}

/// MEM[x, y] = v
pub fn put(machine: &mut Machine) -> Result<(), ExecError> {
    let (x, y, v) = (
        machine.stack.pop(),
        machine.stack.pop(),
        machine.stack.pop(),
    );
    machine.memory.set(x as usize, y as usize, v);
    Ok(())
}

/// MEM[x, y] = HEX(v)
pub fn put_hex(machine: &mut Machine) -> Result<(), ExecError> {
    let (x, y, v) = (
        machine.stack.pop(),
        machine.stack.pop(),
        machine.stack.pop(),
    );
    machine
        .memory
        .set(x as usize, y as usize, hex_value(v).unwrap_or(0xFF));
    Ok(())
}

/// step over the next cell
pub fn skip(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.advance();
    Ok(())
}

/// PUSH(MEM[next cell]); the tail advance then steps over it
pub fn quote(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.advance();
    let value = machine
        .memory
        .get(machine.pointer.x as usize, machine.pointer.y as usize);
    machine.stack.push(value)
}

/// IP = (x, y); direction unchanged
pub fn jump(machine: &mut Machine) -> Result<(), ExecError> {
    let (x, y) = (machine.stack.pop(), machine.stack.pop());
    machine.pointer.x = x;
    machine.pointer.y = y;
    Ok(())
}

/// PUSH(LABEL[c].y); PUSH(LABEL[c].x + 1); unknown labels are a no-op
pub fn label(machine: &mut Machine) -> Result<(), ExecError> {
    let c = machine.stack.pop();
    if let Some(&(x, y)) = machine.labels.get(&c) {
        machine.stack.push(y)?;
        machine.stack.push(x.wrapping_add(1))?;
    }
    Ok(())
}

/// FB[x, y] = 1
pub fn plot(machine: &mut Machine) -> Result<(), ExecError> {
    let (x, y) = (machine.stack.pop(), machine.stack.pop());
    machine.frame_buffer.set(x as usize, y as usize, true);
    machine.redraw = true;
    Ok(())
}

/// Decodes the 16 hex nibbles at MEM[x1.., y1] into an 8x8 sprite and
/// overwrites FB at (x2, y2) with it. Opaque: an all-zero sprite erases.
///
/// The nibbles run along a single row of memory, two per sprite line,
/// high nibble first.
pub fn blit(machine: &mut Machine) -> Result<(), ExecError> {
    let (y2, x2) = (machine.stack.pop() as usize, machine.stack.pop() as usize);
    let (y1, x1) = (machine.stack.pop() as usize, machine.stack.pop() as usize);
    for row in 0..SPRITE_HEIGHT {
        let hi = hex_value(machine.memory.get(x1 + 2 * row, y1)).unwrap_or(0xFF);
        let lo = hex_value(machine.memory.get(x1 + 2 * row + 1, y1)).unwrap_or(0xFF);
        let line = (hi << 4) | lo;
        for bit in 0..8 {
            let lit = line & (128 >> bit) != 0;
            machine.frame_buffer.set(x2 + bit, y2 + row, lit);
        }
    }
    machine.redraw = true;
    Ok(())
}

/// FB = 0
pub fn clear(machine: &mut Machine) -> Result<(), ExecError> {
    machine.frame_buffer.clear();
    machine.redraw = true;
    Ok(())
}

/// IP = (0, 0); raise shutdown
pub fn halt(machine: &mut Machine) -> Result<(), ExecError> {
    machine.pointer.x = 0;
    machine.pointer.y = 0;
    machine.shutdown = true;
    Ok(())
}
