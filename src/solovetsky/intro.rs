// solovetsky/intro.rs

use crate::config::{ConfigSource, speed};
use crate::error::TerminalError;
use crate::terminal::Terminal;

pub const BANNER: &str = "DA/UT/UR 2200 TERMINAL INTERFACE
UNCSS SOLOVETSKY ISLAND - MAGELLAN-CLASS SEV
GREAT MOTHER MISSION

INITIALIZE TERMINAL SESSION? (Y/N)";

pub const INPUT_PROMPT: &str = ">>  ";

pub const ACCEPTED_INPUTS: &[&str] = &["y", "yes", "boot", "start", "activate"];

pub const PROGRESS_LABELS: &[&str] = &[
    "ESTABLISHING FTL LINK TO MU/TH/UR 9000:  ",
    "LOADING MISSION PARAMETERS:  ",
    "INITIALIZING CREW INTERFACE:  ",
];

pub const READY_MESSAGE: &str = "
DA/UT/UR 2200 ONLINE.
CONNECTED TO UNCSS IYANLÁ MAINFRAME.
TERMINAL READY FOR INQUIRY.
ACCESS GRANTED.";

pub const INTRO_SPEED_KEY: &str = "intro_speed";

// Lowercased only: surrounding whitespace makes the input a rejection.
pub fn is_accepted(input: &str) -> bool {
    let input = input.to_lowercase();
    ACCEPTED_INPUTS.contains(&input.as_str())
}

/// Show the banner until the operator confirms. Returns the number of
/// rejected inputs.
pub fn await_confirmation(terminal: &mut dyn Terminal) -> Result<usize, TerminalError> {
    let mut rejected = 0;
    loop {
        terminal.print_instant(BANNER)?;
        let input = terminal.read_line(INPUT_PROMPT)?;
        terminal.clear()?;
        if is_accepted(&input) {
            return Ok(rejected);
        }
        log::debug!("Boot prompt rejected input: {input:?}");
        rejected += 1;
    }
}

/// The boot sequence proper, played once the operator has confirmed.
pub fn boot(
    terminal: &mut dyn Terminal,
    config: &dyn ConfigSource,
    logo: &str,
    boot_text: &str,
) -> Result<(), TerminalError> {
    terminal.wait(0.5);
    terminal.play_sound("beep")?;
    terminal.print_noise_screen(1.5)?;
    terminal.clear()?;

    terminal.play_sound("boot")?;
    terminal.print_instant(logo)?;
    terminal.wait(2.0);

    terminal.print_slow(boot_text, speed(config, INTRO_SPEED_KEY))?;
    for label in PROGRESS_LABELS {
        terminal.print_progress_bar(label)?;
    }

    terminal.print_slow(READY_MESSAGE, None)?;
    terminal.wait(1.5);
    terminal.clear()?;
    terminal.print_noise_screen(0.3)?;
    Ok(())
}
