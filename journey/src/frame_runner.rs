//! Frame Runner - background thread that advances a session at a fixed cadence

use std::sync::{Arc, Mutex, PoisonError, atomic::{AtomicBool, Ordering}};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::session::FrameSource;

/// Frame runner that manages a background thread for automatic ticking
pub struct FrameRunner {
    is_running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl FrameRunner {
    pub fn new() -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start advancing `source` every `interval_ms`
    ///
    /// # Arguments
    /// * `source` - Shared session; locked once per frame
    /// * `interval_ms` - Milliseconds between frames (16 for ~60 fps)
    /// * `callback` - Receives each composed frame (the shell emits it to the webview)
    ///
    /// Elapsed time is measured, not assumed, so a slow frame still moves the
    /// clock by the real amount.
    pub fn start<S, F>(&mut self, source: Arc<Mutex<S>>, interval_ms: u64, callback: F)
    where
        S: FrameSource + Send + 'static,
        F: Fn(S::Frame) + Send + 'static,
    {
        if self.is_running.load(Ordering::Relaxed) {
            warn!("Frame runner already running");
            return;
        }

        info!("Starting frame runner ({}ms intervals)", interval_ms);
        self.is_running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.is_running);

        let handle = thread::spawn(move || {
            let mut last = Instant::now();
            while running.load(Ordering::Relaxed) {
                let now = Instant::now();
                let elapsed = now.duration_since(last).as_secs_f64();
                last = now;

                let frame = {
                    let mut s = source.lock().unwrap_or_else(PoisonError::into_inner);
                    s.advance(elapsed)
                };

                callback(frame);

                thread::sleep(Duration::from_millis(interval_ms));
            }
            info!("Frame runner thread stopped");
        });

        self.thread_handle = Some(handle);
    }

    pub fn stop(&mut self) {
        if !self.is_running.load(Ordering::Relaxed) {
            return;
        }

        info!("Stopping frame runner...");
        self.is_running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                warn!("Frame runner thread panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }
}

impl Default for FrameRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
