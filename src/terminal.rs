// terminal.rs

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::io::{self, BufRead, Stdout, Write};
use std::time::{Duration, Instant};

use crate::audio::SoundBoard;
use crate::error::TerminalError;

const PROGRESS_CELLS: usize = 30;
const PROGRESS_STEP: Duration = Duration::from_millis(40);
const NOISE_FRAME: Duration = Duration::from_millis(50);
const NOISE_GLYPHS: &[char] = &['░', '▒', '▓', '█', '▚', '▞', '#', '%', '*', '.', ' ', ' '];
pub const DEFAULT_TEXT_SPEED: f64 = 0.01;

/// Output and input capabilities a plugin drives.
pub trait Terminal {
    fn play_sound(&mut self, name: &str) -> Result<(), TerminalError>;
    fn wait(&mut self, seconds: f64);
    fn print_instant(&mut self, text: &str) -> Result<(), TerminalError>;
    /// `speed` is seconds per character; `None` uses the terminal default.
    fn print_slow(&mut self, text: &str, speed: Option<f64>) -> Result<(), TerminalError>;
    fn print_progress_bar(&mut self, label: &str) -> Result<(), TerminalError>;
    fn print_noise_screen(&mut self, duration: f64) -> Result<(), TerminalError>;
    fn clear(&mut self) -> Result<(), TerminalError>;
    /// Blocks for one line of input, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String, TerminalError>;
}

/// A line-oriented terminal on stdout/stdin.
pub struct CrosstermTerminal {
    stdout: Stdout,
    sounds: Option<SoundBoard>,
    text_speed: f64,
}

impl CrosstermTerminal {
    pub fn new(sounds: Option<SoundBoard>) -> Self {
        Self {
            stdout: io::stdout(),
            sounds,
            text_speed: DEFAULT_TEXT_SPEED,
        }
    }

    pub fn text_speed(mut self, text_speed: f64) -> Self {
        self.text_speed = text_speed;
        self
    }

    fn width(&self) -> usize {
        crossterm::terminal::size()
            .map(|(w, _)| w as usize)
            .unwrap_or(80)
            .max(20)
    }

    fn wrap(&self, text: &str) -> String {
        textwrap::fill(text, self.width())
    }
}

impl Terminal for CrosstermTerminal {
    fn play_sound(&mut self, name: &str) -> Result<(), TerminalError> {
        match &self.sounds {
            Some(sounds) => sounds.play(name)?,
            None => log::debug!("Audio disabled, skipped sound: {name}"),
        }
        Ok(())
    }

    fn wait(&mut self, seconds: f64) {
        if seconds > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(seconds));
        }
    }

    fn print_instant(&mut self, text: &str) -> Result<(), TerminalError> {
        writeln!(self.stdout, "{text}")?;
        self.stdout.flush()?;
        Ok(())
    }

    fn print_slow(&mut self, text: &str, speed: Option<f64>) -> Result<(), TerminalError> {
        let delay = Duration::from_secs_f64(speed.unwrap_or(self.text_speed).max(0.0));
        for c in self.wrap(text).chars() {
            write!(self.stdout, "{c}")?;
            self.stdout.flush()?;
            if !c.is_whitespace() {
                std::thread::sleep(delay);
            }
        }
        writeln!(self.stdout)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn print_progress_bar(&mut self, label: &str) -> Result<(), TerminalError> {
        write!(self.stdout, "{label}")?;
        for step in 1..=PROGRESS_CELLS {
            let percent = step * 100 / PROGRESS_CELLS;
            write!(
                self.stdout,
                "\r{label}[{}{}] {percent:>3}%",
                "█".repeat(step),
                " ".repeat(PROGRESS_CELLS - step)
            )?;
            self.stdout.flush()?;
            std::thread::sleep(PROGRESS_STEP);
        }
        writeln!(self.stdout)?;
        Ok(())
    }

    fn print_noise_screen(&mut self, duration: f64) -> Result<(), TerminalError> {
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        let deadline = Instant::now() + Duration::from_secs_f64(duration.max(0.0));
        let mut rng = rand::rng();
        while Instant::now() < deadline {
            queue!(self.stdout, MoveTo(0, 0))?;
            for row in 0..height {
                let line: String = (0..width)
                    .map(|_| NOISE_GLYPHS[rng.random_range(0..NOISE_GLYPHS.len())])
                    .collect();
                queue!(self.stdout, MoveTo(0, row), Print(line))?;
            }
            self.stdout.flush()?;
            std::thread::sleep(NOISE_FRAME);
        }
        self.clear()
    }

    fn clear(&mut self) -> Result<(), TerminalError> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, TerminalError> {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(TerminalError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
