use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AudioError;

const BEEP_HZ: f32 = 880.0;
const BOOT_HZ: f32 = 220.0;

/// Plays named sound cues from `<sounds_dir>/<name>.wav`.
#[derive(Debug, Clone)]
pub struct SoundBoard {
    sounds_dir: PathBuf,
}

impl SoundBoard {
    pub fn new(sounds_dir: impl Into<PathBuf>) -> Self {
        Self {
            sounds_dir: sounds_dir.into(),
        }
    }

    pub fn sound_path(&self, name: &str) -> PathBuf {
        self.sounds_dir.join(format!("{name}.wav"))
    }

    // Playback runs on its own thread so the caller keeps its own timing.
    pub fn play(&self, name: &str) -> Result<(), AudioError> {
        let path = self.sound_path(name);
        let fallback = fallback_tone(name);
        if path.exists() {
            // Decode up front so a broken file is reported to the caller.
            let source = Decoder::new(BufReader::new(File::open(&path)?))?;
            let source: Box<dyn Source<Item = f32> + Send> = Box::new(source.convert_samples::<f32>());
            std::thread::spawn(move || {
                if let Err(e) = play_source(source) {
                    log::error!("Failed to play sound {}: {e:#?}", path.display());
                }
            });
        } else {
            log::debug!("No sound file at {}, using tone", path.display());
            std::thread::spawn(move || {
                if let Err(e) = play_source(Box::new(fallback)) {
                    log::error!("Failed to play tone: {e:#?}");
                }
            });
        }
        Ok(())
    }
}

fn fallback_tone(name: &str) -> impl Source<Item = f32> + Send + 'static {
    let (frequency, millis) = match name {
        "boot" => (BOOT_HZ, 600),
        _ => (BEEP_HZ, 150),
    };
    SineWave::new(frequency)
        .take_duration(Duration::from_millis(millis))
        .amplify(0.2)
}

fn play_source(source: Box<dyn Source<Item = f32> + Send>) -> Result<(), AudioError> {
    let (_stream, stream_handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&stream_handle)?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
