use crate::InputPoll;

/// Presses the quit key once a fixed number of ticks have been polled.
///
/// Stands in for a keyboard when running headless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickLimit {
    remaining: Option<u64>, // None = never quit
    quit_key: char,
}

impl TickLimit {
    /// Press the quit key on the `ticks`th poll and every poll after it.
    /// Zero behaves like one: the first poll already quits.
    pub fn new(ticks: u64, quit_key: char) -> Self {
        Self {
            remaining: Some(ticks),
            quit_key,
        }
    }

    /// Never press anything
    pub fn unlimited() -> Self {
        Self {
            remaining: None,
            quit_key: '\0',
        }
    }
}

impl InputPoll for TickLimit {
    fn poll_key(&mut self) -> Option<char> {
        let remaining = self.remaining.as_mut()?;
        *remaining = remaining.saturating_sub(1);
        (*remaining == 0).then_some(self.quit_key)
    }
}
