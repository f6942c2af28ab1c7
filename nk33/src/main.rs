use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod keymap;
mod run;

#[derive(Parser)]
#[command(name = "nk33")]
#[command(about = "Notkia-3310 fantasy handheld emulator", long_about = None)]
struct Args {
    /// Path to the ROM to execute
    rom: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    run::run(args.rom)
}
