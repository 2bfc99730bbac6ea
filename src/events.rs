#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The timer fired. Advances the world by one generation if it is running.
    Tick,

    /// Pause a running simulation, or resume a paused one
    Toggle,

    /// Exit the application
    Quit,
}

/// What the driver should do after an event has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}
