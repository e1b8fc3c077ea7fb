use std::string::{String, ToString as _};
use std::vec::Vec;

use embassy_time::{Duration, Instant};

use crate::{Clock, ControlCode, Renderer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Text(String),
    Control(ControlCode),
}

/// Records everything the engine draws.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) events: Vec<Event>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Drains the recorded events.
    pub(crate) fn take(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }

    pub(crate) fn clears(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == Event::Control(ControlCode::ClearScreen))
            .count()
    }

    /// Text of every line of the last frame, with `>` marking the selection.
    pub(crate) fn lines(&self) -> Vec<String> {
        let start = self
            .events
            .iter()
            .rposition(|event| *event == Event::Control(ControlCode::ClearScreen))
            .map_or(0, |i| i + 1);

        let mut lines = Vec::new();
        let mut line = String::new();
        for event in &self.events[start..] {
            match event {
                Event::Text(text) => line.push_str(text),
                Event::Control(ControlCode::DrawingSelectedItem) => line.push('>'),
                Event::Control(ControlCode::CallingOnDraw) => line.push(' '),
                Event::Control(ControlCode::FinishedDrawingItem) => {
                    lines.push(core::mem::take(&mut line));
                }
                Event::Control(_) => {}
            }
        }
        lines
    }
}

impl Renderer for Recorder {
    fn draw_str(&mut self, text: &str) {
        self.events.push(Event::Text(text.to_string()));
    }

    fn control(&mut self, code: ControlCode) {
        self.events.push(Event::Control(code));
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub(crate) struct ManualClock {
    now: Instant,
    pub(crate) reads: usize,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self {
            now: Instant::from_millis(1_000),
            reads: 0,
        }
    }

    pub(crate) fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub(crate) fn set(&mut self, now: Instant) {
        self.now = now;
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Instant {
        self.reads += 1;
        self.now
    }
}
