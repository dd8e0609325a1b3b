//! Polled edge detectors standing in for pin interrupts. Each one remembers
//! the last sampled level and reports a physical event exactly once no matter
//! how often it is polled.

use crate::model::AxisSample;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Edge {
    Rising,
    Falling,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    last: Option<bool>,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// The first sample only primes the detector.
    pub fn update(&mut self, level: bool) -> Option<Edge> {
        let previous = self.last.replace(level)?;
        match (previous, level) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        }
    }

    pub fn force(&mut self, level: bool) {
        self.last = Some(level);
    }
}

/// Active-low touch pad. Reports on the press edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchSensor {
    edge: EdgeDetector,
}

impl TouchSensor {
    pub const fn new() -> Self {
        Self {
            edge: EdgeDetector::new(),
        }
    }

    pub fn poll(&mut self, level: bool) -> bool {
        matches!(self.edge.update(level), Some(Edge::Falling))
    }
}

/// Active-low joystick button. The axes are read once on the press edge and
/// the latched reading is released on the release edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct JoystickButton {
    edge: EdgeDetector,
    latched: Option<AxisSample>,
}

impl JoystickButton {
    pub const fn new() -> Self {
        Self {
            edge: EdgeDetector::new(),
            latched: None,
        }
    }

    pub fn poll(
        &mut self,
        level: bool,
        read_axes: impl FnOnce() -> AxisSample,
    ) -> Option<AxisSample> {
        match self.edge.update(level)? {
            Edge::Falling => {
                self.latched = Some(read_axes());
                None
            }
            Edge::Rising => self.latched.take(),
        }
    }

    pub fn is_held(&self) -> bool {
        self.latched.is_some()
    }
}

/// Busy line of the paging display. Reports the busy to ready transition once
/// per render.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayReadyLine {
    edge: EdgeDetector,
}

impl DisplayReadyLine {
    pub const fn new() -> Self {
        Self {
            edge: EdgeDetector::new(),
        }
    }

    /// Called when a render starts so that a display finishing before the next
    /// poll still produces a completion.
    pub fn arm(&mut self) {
        self.edge.force(true);
    }

    pub fn poll(&mut self, busy: bool) -> bool {
        matches!(self.edge.update(busy), Some(Edge::Falling))
    }
}

#[cfg(test)]
mod tests;
