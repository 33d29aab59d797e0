//! Sliding-window submission counter for the lead form
//!
//! Keeps the timestamps of recent successful submissions and answers whether
//! another one is allowed right now.
//!
//! # Overview
//!
//! - At most [`MAX_SUBMISSIONS`] successful submissions are accepted within
//!   any trailing [`WINDOW_MS`] interval
//! - Entries older than the window are pruned before every check
//! - Storage is a fixed-size sorted buffer, so memory never grows past
//!   [`MAX_SUBMISSIONS`] timestamps
//!
//! State lives only as long as the page instance that owns it. Reloading the
//! page starts from an empty window, so this is a UX deterrent and not an
//! access control.
//!
//! # Usage Example
//!
//! ```rust
//! use printroute::core::lead::window::{SubmissionWindow, WINDOW_MS};
//!
//! let mut window = SubmissionWindow::new();
//! let now = 1_700_000_000_000;
//!
//! if window.capacity_available(now) {
//!     // dispatch, then on success:
//!     window.record(now);
//! }
//! assert_eq!(window.len(), 1);
//!
//! // The entry falls out once the window has passed
//! window.prune(now + WINDOW_MS);
//! assert!(window.is_empty());
//! ```

/// Maximum successful submissions allowed inside one window
pub const MAX_SUBMISSIONS: usize = 3;

/// Length of the sliding window in milliseconds (10 minutes)
pub const WINDOW_MS: i64 = 10 * 60 * 1000;

const MS_PER_MINUTE: i64 = 60_000;

/// Recent successful submission timestamps (ms since epoch)
///
/// Live entries occupy `slots[..len]` in ascending order, whatever order they
/// were recorded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionWindow {
    slots: [i64; MAX_SUBMISSIONS],
    len: usize,
    window_ms: i64,
}

impl SubmissionWindow {
    /// Create an empty window using [`WINDOW_MS`]
    pub fn new() -> Self {
        Self::with_window(WINDOW_MS)
    }

    /// Create an empty window with a custom duration
    pub fn with_window(window_ms: i64) -> Self {
        Self {
            slots: [0; MAX_SUBMISSIONS],
            len: 0,
            window_ms,
        }
    }

    /// Window duration in milliseconds
    pub fn window_ms(&self) -> i64 {
        self.window_ms
    }

    /// Drop every entry that is `window_ms` or more older than `now`
    ///
    /// Every slot is checked, so an entry recorded after a backwards clock
    /// step still expires on time.
    pub fn prune(&mut self, now: i64) {
        let mut live = 0;
        for i in 0..self.len {
            let recorded = self.slots[i];
            if now - recorded < self.window_ms {
                self.slots[live] = recorded;
                live += 1;
            }
        }
        self.len = live;
    }

    /// Insert `now` as a successful submission, keeping entries sorted
    ///
    /// Prunes first. Callers check [`capacity_available`](Self::capacity_available)
    /// beforehand; if the buffer is still full the oldest entry is dropped.
    pub fn record(&mut self, now: i64) {
        self.prune(now);
        if self.len == MAX_SUBMISSIONS {
            self.slots.copy_within(1.., 0);
            self.len -= 1;
        }
        let at = self.slots[..self.len].partition_point(|&recorded| recorded <= now);
        self.slots.copy_within(at..self.len, at + 1);
        self.slots[at] = now;
        self.len += 1;
    }

    /// Whether another submission fits in the window at `now`
    pub fn capacity_available(&mut self, now: i64) -> bool {
        self.prune(now);
        self.len < MAX_SUBMISSIONS
    }

    /// Milliseconds until the oldest entry leaves the window
    ///
    /// Returns 0 when capacity is available and never more than the window
    /// length, even for entries stamped after `now`.
    pub fn remaining_wait_ms(&mut self, now: i64) -> i64 {
        if self.capacity_available(now) {
            return 0;
        }
        self.oldest()
            .map(|oldest| (self.window_ms - (now - oldest)).clamp(0, self.window_ms))
            .unwrap_or(0)
    }

    /// Remaining wait rounded up to whole minutes
    pub fn minutes_until_available(&mut self, now: i64) -> i64 {
        let wait = self.remaining_wait_ms(now);
        (wait + MS_PER_MINUTE - 1) / MS_PER_MINUTE
    }

    /// Oldest recorded timestamp, if any
    pub fn oldest(&self) -> Option<i64> {
        self.slots[..self.len].first().copied()
    }

    /// Number of recorded entries (not pruned)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Recorded timestamps, oldest first
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.slots[..self.len].iter().copied()
    }
}

impl Default for SubmissionWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000_000;
    const MINUTE: i64 = 60_000;

    fn entries(window: &SubmissionWindow) -> Vec<i64> {
        window.iter().collect()
    }

    #[test]
    fn test_window_starts_empty() {
        let mut window = SubmissionWindow::new();
        assert!(window.is_empty());
        assert_eq!(window.oldest(), None);
        assert!(window.capacity_available(T0));
        assert_eq!(window.window_ms(), WINDOW_MS);
    }

    #[test]
    fn test_record_keeps_order() {
        let mut window = SubmissionWindow::new();
        window.record(T0);
        window.record(T0 + MINUTE);
        assert_eq!(entries(&window), vec![T0, T0 + MINUTE]);
        assert_eq!(window.oldest(), Some(T0));
    }

    #[test]
    fn test_full_window_rejects() {
        let mut window = SubmissionWindow::new();
        for i in 0..MAX_SUBMISSIONS as i64 {
            assert!(window.capacity_available(T0 + i * MINUTE));
            window.record(T0 + i * MINUTE);
        }
        assert!(!window.capacity_available(T0 + 3 * MINUTE));
    }

    #[test]
    fn test_capacity_returns_when_oldest_expires() {
        let mut window = SubmissionWindow::new();
        window.record(T0);
        window.record(T0 + MINUTE);
        window.record(T0 + 2 * MINUTE);

        // One millisecond before the oldest expires
        assert!(!window.capacity_available(T0 + WINDOW_MS - 1));
        // Exactly at the boundary the oldest entry is stale
        assert!(window.capacity_available(T0 + WINDOW_MS));
        assert_eq!(entries(&window), vec![T0 + MINUTE, T0 + 2 * MINUTE]);
    }

    #[test]
    fn test_prune_is_idempotent() {
        let mut window = SubmissionWindow::new();
        window.record(T0);
        window.record(T0 + 5 * MINUTE);
        window.record(T0 + 9 * MINUTE);

        let now = T0 + 12 * MINUTE;
        window.prune(now);
        let once = window.clone();
        window.prune(now);
        assert_eq!(window, once);
        assert_eq!(entries(&window), vec![T0 + 5 * MINUTE, T0 + 9 * MINUTE]);
    }

    #[test]
    fn test_prune_everything_empties() {
        let mut window = SubmissionWindow::new();
        window.record(T0);
        window.record(T0 + MINUTE);
        window.prune(T0 + MINUTE + WINDOW_MS);
        assert!(window.is_empty());
        window.record(T0 + 30 * MINUTE);
        assert_eq!(entries(&window), vec![T0 + 30 * MINUTE]);
    }

    #[test]
    fn test_repeated_use_stays_bounded() {
        let mut window = SubmissionWindow::new();
        for i in 0..10 {
            let now = T0 + i * 4 * MINUTE;
            if window.capacity_available(now) {
                window.record(now);
            }
            assert!(window.len() <= MAX_SUBMISSIONS);
        }
        let recorded = entries(&window);
        assert!(recorded.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_record_on_full_overwrites_oldest() {
        let mut window = SubmissionWindow::new();
        window.record(T0);
        window.record(T0 + 1);
        window.record(T0 + 2);
        window.record(T0 + 3);
        assert_eq!(window.len(), MAX_SUBMISSIONS);
        assert_eq!(entries(&window), vec![T0 + 1, T0 + 2, T0 + 3]);
    }

    #[test]
    fn test_remaining_wait_minutes_round_up() {
        let mut window = SubmissionWindow::new();
        window.record(T0);
        window.record(T0 + MINUTE);
        window.record(T0 + 2 * MINUTE);

        let now = T0 + 3 * MINUTE;
        assert_eq!(window.remaining_wait_ms(now), 7 * MINUTE);
        assert_eq!(window.minutes_until_available(now), 7);

        // 6 minutes and 1 second left rounds up to 7
        let now = T0 + 3 * MINUTE + 59_000;
        assert_eq!(window.minutes_until_available(now), 7);
    }

    #[test]
    fn test_remaining_wait_zero_with_capacity() {
        let mut window = SubmissionWindow::new();
        window.record(T0);
        assert_eq!(window.remaining_wait_ms(T0 + MINUTE), 0);
        assert_eq!(window.minutes_until_available(T0 + MINUTE), 0);
    }

    #[test]
    fn test_custom_window() {
        let mut window = SubmissionWindow::with_window(1_000);
        window.record(0);
        window.record(10);
        window.record(20);
        assert!(!window.capacity_available(999));
        assert!(window.capacity_available(1_000));
    }

    #[test]
    fn test_out_of_order_record_expires() {
        let mut window = SubmissionWindow::new();
        window.record(T0 + 5 * MINUTE);
        // Clock stepped back between submissions
        window.record(T0);
        assert_eq!(entries(&window), vec![T0, T0 + 5 * MINUTE]);
        assert_eq!(window.oldest(), Some(T0));

        window.prune(T0 + WINDOW_MS + 1);
        assert_eq!(entries(&window), vec![T0 + 5 * MINUTE]);
    }

    #[test]
    fn test_wait_never_exceeds_window_after_clock_step() {
        let mut window = SubmissionWindow::new();
        window.record(T0 + 5 * MINUTE);
        window.record(T0 + 6 * MINUTE);
        window.record(T0 + 7 * MINUTE);

        // All three entries are later than `now`
        assert!(!window.capacity_available(T0));
        assert_eq!(window.remaining_wait_ms(T0), WINDOW_MS);
        assert_eq!(window.minutes_until_available(T0), 10);
    }

    #[test]
    fn test_full_out_of_order_record_drops_minimum() {
        let mut window = SubmissionWindow::new();
        window.record(T0 + 2 * MINUTE);
        window.record(T0 + 3 * MINUTE);
        window.record(T0 + MINUTE);
        window.record(T0 + 4 * MINUTE);
        assert_eq!(entries(&window), vec![T0 + 2 * MINUTE, T0 + 3 * MINUTE, T0 + 4 * MINUTE]);
    }
}
