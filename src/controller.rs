use std::sync::Arc;

use tracing::debug;
use tracing::trace;

use crate::engine;
use crate::events::Control;
use crate::events::Event;
use crate::grid::Grid;
use crate::rule_set::RuleSet;

/// Holds the current generation and whether time is moving.
///
/// Events are handled strictly one at a time. The controller never draws anything; whoever wants
/// to show the world asks for a [`Simulation::snapshot`].
pub struct Simulation {
    current: Arc<Grid>,
    rules: RuleSet,

    running: bool,

    /// Set once a [`Event::Quit`] has been seen. Nothing changes after that.
    stopped: bool,

    /// Number of generations computed since start
    generation: u64,
}

impl Simulation {
    /// A paused simulation of Conway's Life starting at `grid`
    pub fn new(grid: Grid) -> Self {
        Self::with_rules(grid, RuleSet::default())
    }

    pub fn with_rules(grid: Grid, rules: RuleSet) -> Self {
        Self {
            current: Arc::new(grid),
            rules,
            running: false,
            stopped: false,
            generation: 0,
        }
    }

    pub fn handle(&mut self, event: Event) -> Control {
        if self.stopped {
            return Control::Stop;
        }

        match event {
            Event::Tick => self.advance(),
            Event::Toggle => self.toggle_running(),
            Event::Quit => {
                debug!(generation = self.generation, "quit");
                self.stopped = true;

                return Control::Stop;
            }
        }

        Control::Continue
    }

    /// Replace the current generation with the next one. Does nothing while paused.
    pub fn advance(&mut self) {
        if !self.running {
            return;
        }

        self.current = Arc::new(engine::step_with(&self.current, &self.rules));
        self.generation += 1;

        trace!(generation = self.generation, "advanced");
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;

        debug!(running = self.running, generation = self.generation, "toggled");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// The current generation. Later steps never touch it, so it can be held on to freely.
    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.current)
    }
}
