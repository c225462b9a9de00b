//! "Thinking" indicator shown while a search runs on the main thread.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::warn;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Background thread drawing frames on stdout until stopped. The only
/// shared state is the stop flag.
pub struct Spinner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(label: &str) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let label = label.to_string();
        let spawned = thread::Builder::new()
            .name("spinner".into())
            .spawn(move || spin(&label, &flag));
        let handle = match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("could not start spinner: {e}");
                None
            }
        };
        Self { stop, handle }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the thread and wait until it has cleared its line.
    pub fn stop(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("spinner thread panicked");
            }
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}

fn spin(label: &str, stop: &AtomicBool) {
    let mut out = io::stdout();
    for frame in FRAMES.iter().cycle() {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        let _ = write!(out, "\r{label} {frame} ");
        let _ = out.flush();
        thread::sleep(FRAME_DELAY);
    }
    let blank = " ".repeat(label.chars().count() + 3);
    let _ = write!(out, "\r{blank}\r");
    let _ = out.flush();
}
