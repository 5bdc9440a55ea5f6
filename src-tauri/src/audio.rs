//! Soundtrack playback
//!
//! rodio's output stream is not `Send`, so the stream, sink and decoder live
//! on a worker thread; the session talks to it over a channel. Failing to
//! open the device or decode the track leaves the session silent.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("could not create audio sink: {0}")]
    Play(#[from] rodio::PlayError),

    #[error("could not open track: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not decode track: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

enum AudioCommand {
    SetVolume(f32),
    Stop,
}

/// Looping soundtrack owned by one session
pub struct AudioPlayer {
    tx: Sender<AudioCommand>,
    handle: Option<JoinHandle<()>>,
}

impl AudioPlayer {
    pub fn start(track: PathBuf, volume: f32) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || run(&track, volume, rx));
        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Apply the effective (mute-aware) volume
    pub fn set_volume(&self, volume: f32) {
        let _ = self.tx.send(AudioCommand::SetVolume(volume));
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        let _ = self.tx.send(AudioCommand::Stop);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Audio thread panicked");
            }
        }
    }
}

fn open(track: &Path, volume: f32) -> Result<(OutputStream, Sink), AudioError> {
    let (stream, handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&handle)?;
    let source = Decoder::new(BufReader::new(File::open(track)?))?;
    sink.set_volume(volume);
    sink.append(source.repeat_infinite());
    sink.play();
    Ok((stream, sink))
}

fn run(track: &Path, volume: f32, rx: Receiver<AudioCommand>) {
    let playback = match open(track, volume) {
        Ok(playback) => {
            info!("Playing {}", track.display());
            Some(playback)
        }
        Err(e) => {
            warn!("Audio disabled for this session: {}", e);
            None
        }
    };

    for command in rx {
        match command {
            AudioCommand::SetVolume(v) => {
                if let Some((_, sink)) = &playback {
                    sink.set_volume(v);
                }
            }
            AudioCommand::Stop => break,
        }
    }
    debug!("Audio thread stopped");
}
