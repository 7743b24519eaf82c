//! Correction session state
//!
//! Request bookkeeping for the live text flow and the file flow. Every
//! request gets a sequence number when its request action is reduced; a
//! result is applied only if it is newer than the last applied one.

/// Controller phase, derived from the number of requests in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Requesting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Corrected text of the last applied result (empty until then)
    pub last_corrected_text: String,
    /// An edit restarted the debounce timer and it has not fired yet
    pub debounce_pending: bool,
    /// Highest sequence number handed out so far
    pub latest_issued_seq: u64,
    /// Sequence number of the last applied result, or the floor set by Clear
    pub last_applied_seq: u64,
    /// Requests sent and not answered yet
    pub in_flight: usize,
    /// Last live-path failure, cleared by the next applied result
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        if self.in_flight > 0 {
            Phase::Requesting
        } else {
            Phase::Idle
        }
    }

    pub fn is_stale(&self, seq: u64) -> bool {
        seq <= self.last_applied_seq
    }

    pub fn has_corrected_text(&self) -> bool {
        !self.last_corrected_text.is_empty()
    }

    /// Sequence number the next `start` will hand out
    pub fn next_seq(&self) -> u64 {
        self.latest_issued_seq + 1
    }

    /// Record that a request was sent, returning its sequence number
    pub fn start(&mut self) -> u64 {
        self.latest_issued_seq += 1;
        self.in_flight += 1;
        self.latest_issued_seq
    }

    /// Record that request `seq` finished, returning whether its result
    /// should be applied
    pub fn finish(&mut self, seq: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.is_stale(seq) {
            log::debug!(
                "Discarding stale response #{} (last applied #{})",
                seq,
                self.last_applied_seq
            );
            return false;
        }
        true
    }

    /// Mark `seq` as applied with the given corrected text
    pub fn apply(&mut self, seq: u64, corrected: &str) {
        self.last_applied_seq = seq;
        self.last_corrected_text = corrected.to_string();
        self.last_error = None;
    }

    /// Forget everything, making all responses still in flight stale
    pub fn reset(&mut self) {
        *self = Self {
            latest_issued_seq: self.latest_issued_seq,
            last_applied_seq: self.latest_issued_seq,
            in_flight: self.in_flight,
            ..Self::default()
        };
    }
}
