//! Background timer behind the prompt glitch effect.
//!
//! The timer knows nothing about commands or sessions. It raises a shared
//! flag every few seconds; the terminal prompt lowers it again when it draws
//! a scrambled frame.
//!
//! The line editor only redraws the prompt on a keystroke or a new line, so
//! a raised flag stays latched until then. An idle prompt glitches on the
//! next keypress, and several raises in a row still produce a single frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::trace;

use crate::config::GlitchSchedule;

/// Characters swapped into the prompt while glitching.
const GLITCH_GLYPHS: &[char] = &['#', '%', '&', '@', '$', '/', '_', '|'];

/// Handle to a running glitch thread.
///
/// The thread is detached; stopping (or dropping the handle) makes it exit
/// at its next wakeup.
#[derive(Debug)]
pub struct GlitchTimer {
    stop: Arc<AtomicBool>,
}

impl GlitchTimer {
    /// Start raising `flag` at random intervals within `schedule`.
    pub fn spawn(flag: Arc<AtomicBool>, schedule: GlitchSchedule) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        thread::Builder::new()
            .name("folio-glitch".to_string())
            .spawn(move || {
                let mut rng = rand::thread_rng();
                loop {
                    thread::sleep(next_delay(&schedule, &mut rng));
                    if thread_stop.load(Ordering::Relaxed) {
                        break;
                    }
                    flag.store(true, Ordering::Relaxed);
                    trace!("glitch raised");
                }
            })?;

        Ok(Self { stop })
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for GlitchTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn next_delay(schedule: &GlitchSchedule, rng: &mut impl Rng) -> Duration {
    let min = schedule.min.as_millis() as u64;
    let max = (schedule.max.as_millis() as u64).max(min);
    Duration::from_millis(rng.gen_range(min..=max))
}

/// Replace a few characters of `text` with glitch glyphs.
///
/// Length in characters is preserved so the prompt does not jump around.
pub fn scramble(text: &str, rng: &mut impl Rng) -> String {
    text.chars()
        .map(|c| {
            if !c.is_whitespace() && rng.gen_bool(0.2) {
                GLITCH_GLYPHS[rng.gen_range(0..GLITCH_GLYPHS.len())]
            } else {
                c
            }
        })
        .collect()
}
