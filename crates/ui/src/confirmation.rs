//! Confirmation banner: transient text shown after a call is raised.
//!
//! The banner owns its dismissal deadlines. Time never advances on its own:
//! callers pass `now` into [`ConfirmationBanner::show`] and
//! [`ConfirmationBanner::poll`], so the same code runs against the embassy
//! clock on the device and against a simulated clock in tests.
//!
//! ```text
//! HIDDEN --show--> VISIBLE --deadline elapses--> HIDDEN
//! ```

use embassy_time::{Duration, Instant};
use heapless::{Deque, String};

/// Longest banner message kept, in bytes. Longer messages are truncated.
pub const MESSAGE_CAPACITY: usize = 32;

/// Dismissal deadlines tracked at once under [`DismissPolicy::Independent`].
pub const MAX_PENDING_DISMISSALS: usize = 4;

/// What happens when the banner is shown again before it has been dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DismissPolicy {
    /// The pending deadline is replaced; the banner stays up for a full
    /// duration after the most recent show.
    #[default]
    Restart,
    /// Every show arms its own deadline and any of them hides the banner.
    /// A second show inside the window therefore does not extend it, and a
    /// stale deadline can cut a later banner short.
    Independent,
}

/// What the banner currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmationState {
    visible: bool,
    message: String<MESSAGE_CAPACITY>,
}

impl ConfirmationState {
    /// Whether the banner is on screen.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Text of the most recent confirmation (kept after dismissal).
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    fn set_message(&mut self, message: &str) {
        self.message.clear();
        for ch in message.chars() {
            if self.message.push(ch).is_err() {
                break;
            }
        }
    }
}

/// Confirmation banner with a fixed display duration.
#[derive(Debug, Clone)]
pub struct ConfirmationBanner {
    state: ConfirmationState,
    duration: Duration,
    policy: DismissPolicy,
    // Ascending: shows happen in time order, so deadlines do too.
    pending: Deque<Instant, MAX_PENDING_DISMISSALS>,
}

impl ConfirmationBanner {
    /// Create a hidden banner that stays up for `duration` after each show.
    #[must_use]
    pub fn new(duration: Duration, policy: DismissPolicy) -> Self {
        Self {
            state: ConfirmationState::default(),
            duration,
            policy,
            pending: Deque::new(),
        }
    }

    /// Show `message` and arm a dismissal `duration` from `now`.
    pub fn show(&mut self, message: &str, now: Instant) {
        self.state.set_message(message);
        self.state.visible = true;

        let deadline = now.checked_add(self.duration).unwrap_or(Instant::MAX);
        match self.policy {
            DismissPolicy::Restart => {
                self.pending.clear();
                // Cannot fail: the queue was just emptied.
                let _ = self.pending.push_back(deadline);
            }
            DismissPolicy::Independent => {
                if self.pending.is_full() {
                    // An earlier deadline is still armed, so the banner is
                    // guaranteed to come down; keep the newest instead of the
                    // latest stale one.
                    self.pending.pop_back();
                }
                let _ = self.pending.push_back(deadline);
            }
        }
    }

    /// Fire every deadline at or before `now`.
    ///
    /// Returns `true` when the banner went from visible to hidden.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut dismissed = false;
        while let Some(&deadline) = self.pending.front() {
            if deadline > now {
                break;
            }
            self.pending.pop_front();
            if self.state.visible {
                self.state.visible = false;
                dismissed = true;
            }
        }
        dismissed
    }

    /// Earliest armed deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().copied()
    }

    /// Current banner contents.
    #[must_use]
    pub fn state(&self) -> &ConfirmationState {
        &self.state
    }

    /// How long each show keeps the banner up.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Active re-show policy.
    #[must_use]
    pub fn policy(&self) -> DismissPolicy {
        self.policy
    }
}

impl Default for ConfirmationBanner {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(platform::config::CONFIRMATION_DISPLAY_MS),
            DismissPolicy::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_banner_starts_hidden() {
        let banner = ConfirmationBanner::default();
        assert!(!banner.state().visible());
        assert_eq!(banner.state().message(), "");
        assert_eq!(banner.next_deadline(), None);
    }

    #[test]
    fn test_banner_default_duration_is_three_seconds() {
        let banner = ConfirmationBanner::default();
        assert_eq!(banner.duration(), Duration::from_millis(3_000));
        assert_eq!(banner.policy(), DismissPolicy::Restart);
    }

    #[test]
    fn test_show_makes_visible_immediately() {
        let mut banner = ConfirmationBanner::default();
        banner.show("Nurse Call Sent", at(1_000));
        assert!(banner.state().visible());
        assert_eq!(banner.state().message(), "Nurse Call Sent");
        assert_eq!(banner.next_deadline(), Some(at(4_000)));
    }

    #[test]
    fn test_poll_before_deadline_keeps_banner() {
        let mut banner = ConfirmationBanner::default();
        banner.show("Nurse Call Sent", at(0));
        assert!(!banner.poll(at(2_999)));
        assert!(banner.state().visible());
    }

    #[test]
    fn test_poll_at_deadline_hides_banner() {
        let mut banner = ConfirmationBanner::default();
        banner.show("Nurse Call Sent", at(0));
        assert!(banner.poll(at(3_000)));
        assert!(!banner.state().visible());
        assert_eq!(banner.next_deadline(), None);
        // Message survives dismissal; only visibility changes.
        assert_eq!(banner.state().message(), "Nurse Call Sent");
    }

    #[test]
    fn test_poll_when_hidden_reports_no_change() {
        let mut banner = ConfirmationBanner::default();
        assert!(!banner.poll(at(10_000)));
    }

    #[test]
    fn test_restart_policy_extends_window() {
        let mut banner = ConfirmationBanner::new(Duration::from_secs(3), DismissPolicy::Restart);
        banner.show("Nurse Call Sent", at(0));
        banner.show("Nurse Call Sent", at(1_000));
        assert!(!banner.poll(at(3_000)));
        assert!(banner.state().visible());
        assert!(banner.poll(at(4_000)));
    }

    #[test]
    fn test_independent_policy_first_deadline_wins() {
        let mut banner =
            ConfirmationBanner::new(Duration::from_secs(3), DismissPolicy::Independent);
        banner.show("Nurse Call Sent", at(0));
        banner.show("Nurse Call Sent", at(1_000));
        assert!(banner.poll(at(3_000)));
        assert!(!banner.state().visible());
        // Second timer fires into an already-hidden banner.
        assert!(!banner.poll(at(4_000)));
        assert_eq!(banner.next_deadline(), None);
    }

    #[test]
    fn test_independent_policy_stale_deadline_cuts_reshow_short() {
        let mut banner =
            ConfirmationBanner::new(Duration::from_secs(3), DismissPolicy::Independent);
        banner.show("Nurse Call Sent", at(0));
        banner.show("Nurse Call Sent", at(1_000));
        assert!(banner.poll(at(3_000)));
        banner.show("Nurse Call Sent", at(3_500));
        // Deadline armed at t=1000 still fires at t=4000.
        assert!(banner.poll(at(4_000)));
        assert_eq!(banner.next_deadline(), Some(at(6_500)));
    }

    #[test]
    fn test_independent_policy_bounded_queue_still_dismisses() {
        let mut banner =
            ConfirmationBanner::new(Duration::from_secs(3), DismissPolicy::Independent);
        for ms in (0..1_000).step_by(100) {
            banner.show("Nurse Call Sent", at(ms));
        }
        assert_eq!(banner.next_deadline(), Some(at(3_000)));
        assert!(banner.poll(at(3_000)));
        assert!(!banner.poll(at(60_000)));
        assert_eq!(banner.next_deadline(), None);
    }

    #[test]
    fn test_long_message_truncated_on_char_boundary() {
        let mut banner = ConfirmationBanner::default();
        let long = "Nurse call sent — a nurse is on the way to your room";
        banner.show(long, at(0));
        let shown = banner.state().message();
        assert!(shown.len() <= MESSAGE_CAPACITY);
        assert!(long.starts_with(shown));
    }

    #[test]
    fn test_deadline_saturates_near_end_of_time() {
        let mut banner = ConfirmationBanner::default();
        banner.show("Nurse Call Sent", Instant::MAX);
        assert_eq!(banner.next_deadline(), Some(Instant::MAX));
    }
}
