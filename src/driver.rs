use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::DisplayError;
use crate::game::GameState;
use crate::input::{InputEvent, InputSource, Key};
use crate::render::RenderSink;

pub trait TickClock {
    fn wait_for_next_tick(&mut self);
}

/// Sleeps until the next deadline of a fixed-rate schedule. A late tick
/// restarts the schedule instead of bursting to catch up.
#[derive(Debug)]
pub struct FixedRateClock {
    interval: Duration,
    next_deadline: Instant,
}

impl FixedRateClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let interval = Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            interval,
            next_deadline: Instant::now() + interval,
        }
    }

    #[cfg(test)]
    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }
}

impl TickClock for FixedRateClock {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if self.next_deadline > now {
            thread::sleep(self.next_deadline - now);
            self.next_deadline += self.interval;
        } else {
            self.next_deadline = now + self.interval;
        }
    }
}

#[derive(Debug, Default)]
pub struct Unthrottled;

impl TickClock for Unthrottled {
    fn wait_for_next_tick(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    TickLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub score: u32,
    pub game_over: bool,
    pub stopped_by: StopReason,
}

pub struct GameLoop {
    state: GameState,
    tick_limit: Option<u64>,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self { state, tick_limit: None }
    }

    pub fn with_tick_limit(mut self, ticks: u64) -> Self {
        self.tick_limit = Some(ticks);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Runs until a quit request or the tick limit. An initial frame is drawn
    /// before the first tick, then exactly one frame per tick.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        sink: &mut dyn RenderSink,
        clock: &mut dyn TickClock,
    ) -> Result<RunSummary, DisplayError> {
        info!(tick_limit = ?self.tick_limit, "game loop started");
        sink.render(&self.state.frame())?;

        let mut ticks = 0u64;
        let stopped_by = loop {
            if self.tick_limit.is_some_and(|limit| ticks >= limit) {
                break StopReason::TickLimit;
            }
            if !self.dispatch(input.poll()?) {
                break StopReason::Quit;
            }
            self.state.update();
            sink.render(&self.state.frame())?;
            ticks += 1;
            clock.wait_for_next_tick();
        };

        let summary = RunSummary {
            ticks,
            score: self.state.score(),
            game_over: self.state.is_game_over(),
            stopped_by,
        };
        info!(?summary, "game loop stopped");
        Ok(summary)
    }

    /// Applies one tick's worth of events. Returns `false` on a quit request;
    /// events after it are dropped.
    fn dispatch(&mut self, events: Vec<InputEvent>) -> bool {
        for event in events {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => {
                    debug!(?event, "quit requested");
                    return false;
                }
                InputEvent::KeyDown(Key::Restart) => {
                    if self.state.is_game_over() {
                        self.state.reset();
                    }
                }
                InputEvent::KeyDown(key) => {
                    if let Some(direction) = key.direction() {
                        self.state.change_direction(direction);
                    }
                }
            }
        }
        true
    }
}
