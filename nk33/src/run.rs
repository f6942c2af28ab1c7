use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use sdl2::event::Event;

use nk33_core::constants::{CYCLES_PER_FRAME, FRAME_MILLIS};
use nk33_core::{ExecError, Machine};
use nk33_display::Display;

use crate::keymap::keymap;

pub fn run(rom: PathBuf) -> ExitCode {
    println!("initializing NK33: Notkia-3310 emulator");
    let mut machine = Machine::new();

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().unwrap();
    let mut display = Display::new(&sdl);
    let mut events = sdl.event_pump().unwrap();

    // Load ROM
    println!("loading ROM: {}", rom.display());
    let file = match File::open(&rom) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("unable to open {}: {}", rom.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let mut reader = BufReader::new(file);
    if let Err(e) = machine.load_rom(&mut reader) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    println!("successfully loaded ROM");

    let mut gamepad: u16 = 0;

    'frame: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'frame,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(bit) = keymap(key) {
                        gamepad |= 1 << bit;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(bit) = keymap(key) {
                        gamepad &= !(1 << bit);
                    }
                }
                _ => continue,
            }
        }
        machine.set_gamepad(gamepad);

        // 60 instructions per displayed frame
        for _ in 0..CYCLES_PER_FRAME {
            match machine.run_cycle() {
                // The faulting push was dropped; the machine keeps going.
                Ok(()) | Err(ExecError::StackOverflow) => {}
                Err(e @ ExecError::DivByZero) => {
                    eprintln!("machine fault: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            if machine.shutdown() {
                break 'frame;
            }
        }

        // If the redraw flag is raised, repaint and acknowledge it
        if let Some(frame) = machine.get_frame() {
            display.render(frame);
            machine.clear_redraw();
        }

        std::thread::sleep(Duration::from_millis(FRAME_MILLIS));
    }

    ExitCode::SUCCESS
}
