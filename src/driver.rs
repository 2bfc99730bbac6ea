//! The loop that feeds events to a [`Simulation`] and shows the result.
//!
//! Where events come from and where frames go are both pluggable: the binary uses the keyboard and
//! a timer on one end and the terminal on the other, tests use a script and a `Vec`.

use std::io;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use crossterm::event;
use tracing::debug;

use crate::controller::Simulation;
use crate::events::Control;
use crate::events::Event;
use crate::grid::Grid;
use crate::io::convert_event;

/// Produces events for the simulation, one at a time
pub trait EventSource {
    /// Block until the next event is available
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Something that can show a [`Frame`]
pub trait RenderSink {
    fn render(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Everything a renderer needs to draw one generation
#[derive(Debug, Clone)]
pub struct Frame {
    pub grid: Arc<Grid>,
    pub running: bool,
    pub generation: u64,
}

impl Frame {
    pub fn capture(sim: &Simulation) -> Self {
        Self {
            grid: sim.snapshot(),
            running: sim.is_running(),
            generation: sim.generation(),
        }
    }
}

/// Run until the simulation is told to quit or one of the ends fails.
///
/// The initial state is rendered before the first event, then once after every event.
pub fn run<S, R>(sim: &mut Simulation, events: &mut S, sink: &mut R) -> io::Result<()>
where
    S: EventSource,
    R: RenderSink,
{
    sink.render(&Frame::capture(sim))?;

    loop {
        let event = events.next_event()?;

        if sim.handle(event) == Control::Stop {
            break;
        }

        sink.render(&Frame::capture(sim))?;
    }

    debug!(generation = sim.generation(), "driver stopped");

    Ok(())
}

/// Keyboard input from the terminal, with a [`Event::Tick`] every `period`.
///
/// Ticks never queue up: if handling one runs late, the next one is scheduled a full period after
/// it was emitted.
pub struct TerminalEvents {
    period: Duration,
    next_tick: Instant,
}

impl TerminalEvents {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_tick: Instant::now() + period,
        }
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        loop {
            let now = Instant::now();
            if now >= self.next_tick {
                self.next_tick = now + self.period;

                return Ok(Event::Tick);
            }

            // Poll for input for as long as there is until the next tick
            if event::poll(self.next_tick - now)? {
                if let Some(event) = convert_event(event::read()?) {
                    return Ok(event);
                }
            }
        }
    }
}
