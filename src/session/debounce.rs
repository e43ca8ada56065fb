//! Hand-Presence Debouncing
//!
//! A two-state machine driven once per processed frame by the boolean "at
//! least one hand detected". The `Present -> Absent` edge is the sole commit
//! trigger: the user signals "I am done with this letter" by lowering their
//! hand, which needs no extra UI. Transitions are returned as named events so
//! the controller's commit decision is explicit rather than a side effect.

/// Whether a hand is currently considered visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Absent,
    Present,
}

/// Outcome of observing one processed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Absent -> Absent: nothing to do
    Idle,
    /// Absent -> Present: a hand entered the frame
    Arrived,
    /// Present -> Present: the hand is still held up
    Held,
    /// Present -> Absent: the hand left the frame; commit point
    Departed,
}

/// Tracks hand visibility across frames and names the transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceDebouncer {
    state: Presence,
}

impl PresenceDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current presence state
    pub fn state(&self) -> Presence {
        self.state
    }

    /// Feed one processed frame's presence signal and get the transition.
    pub fn observe(&mut self, hand_present: bool) -> Transition {
        let transition = match (self.state, hand_present) {
            (Presence::Absent, true) => Transition::Arrived,
            (Presence::Present, true) => Transition::Held,
            (Presence::Present, false) => Transition::Departed,
            (Presence::Absent, false) => Transition::Idle,
        };
        self.state = if hand_present {
            Presence::Present
        } else {
            Presence::Absent
        };
        transition
    }
}
