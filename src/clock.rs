//! Session Clock
//!
//! Elapsed-seconds counter that ticks while the view is mounted.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// One tick per second; `SessionClock` counts ticks as seconds
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Elapsed seconds since mount; ticks are ignored once stopped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionClock {
    elapsed: u64,
    running: bool,
}

impl SessionClock {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) {
        if self.running {
            self.elapsed += 1;
        }
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// Format seconds as `minutes:seconds`, e.g. 125 -> "2:05"
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Repeating tick source. Dropping it cancels the interval.
pub struct ClockTimer {
    _interval: Interval,
}

impl ClockTimer {
    pub fn start(interval_ms: u32, on_tick: impl FnMut() + 'static) -> Self {
        Self {
            _interval: Interval::new(interval_ms, on_tick),
        }
    }
}

/// Start the session clock for the current owner.
///
/// The timer starts immediately and is released when the owner is cleaned up
/// (view unmount), after which no further ticks are applied.
pub fn use_session_clock() -> ReadSignal<SessionClock> {
    let (clock, set_clock) = signal(SessionClock::default());
    run_session_clock(set_clock, TICK_INTERVAL_MS);
    clock
}

/// Drive `set_clock` from a repeating timer tied to the current owner
fn run_session_clock(set_clock: WriteSignal<SessionClock>, interval_ms: u32) {
    set_clock.update(|c| c.start());

    let timer = ClockTimer::start(interval_ms, move || {
        set_clock.try_update(|c| c.tick());
    });
    let timer = StoredValue::new_local(Some(timer));
    tracing::info!(interval_ms, "session clock started");

    on_cleanup(move || {
        // Dropping the timer clears the browser interval
        timer.try_update_value(|slot| slot.take());
        let elapsed = set_clock.try_update(|c| {
            c.stop();
            c.elapsed()
        });
        tracing::info!(?elapsed, "session clock stopped");
    });
}
