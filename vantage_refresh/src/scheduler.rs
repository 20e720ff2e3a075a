// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How often a pending commit may be released.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum RefreshPolicy {
    /// Release on every host frame: the commit cadence *is* the host's
    /// native paint cycle.
    #[default]
    Automatic,
    /// Release at most `hz` times per second, regardless of how often the
    /// host presents frames.
    Fixed(f64),
}

impl RefreshPolicy {
    /// Minimum milliseconds between released commits, or `None` when the
    /// policy follows the host frame cadence.
    ///
    /// A non-finite or non-positive fixed rate has no well-defined interval
    /// and also yields `None`; the controller layer rejects such rates at
    /// configuration time.
    #[must_use]
    pub fn interval_ms(self) -> Option<f64> {
        match self {
            Self::Automatic => None,
            Self::Fixed(hz) if hz.is_finite() && hz > 0.0 => Some(1000.0 / hz),
            Self::Fixed(_) => None,
        }
    }
}

/// Coalesces rapid transform updates into rate-limited commits.
///
/// The scheduler tracks a single dirty bit: any number of
/// [`mark`](Self::mark) calls between releases collapse into one pending
/// commit. Transform state itself is updated eagerly by the caller, so
/// getters stay current between releases; only the expensive matrix-apply
/// (and its notification) waits for [`on_frame`](Self::on_frame).
///
/// Cancelling a pending commit leaves the caller's state at its last-written
/// value with no further release firing.
#[derive(Clone, Copy, Debug)]
pub struct RefreshScheduler {
    policy: RefreshPolicy,
    pending: bool,
    last_commit: Option<u64>,
}

impl RefreshScheduler {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            pending: false,
            last_commit: None,
        }
    }

    /// Returns the configured policy.
    #[must_use]
    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Records that the tracked state changed and awaits a commit.
    pub fn mark(&mut self) {
        self.pending = true;
    }

    /// Returns `true` while a commit is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drops a pending commit without releasing it.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Host frame tick at `now_ms`; returns `true` when the pending commit
    /// releases on this frame.
    ///
    /// Under [`RefreshPolicy::Automatic`] a pending commit releases on every
    /// frame. Under [`RefreshPolicy::Fixed`] it releases only when the
    /// configured interval has elapsed since the last release, and stays
    /// pending otherwise. Timestamps that step backwards are treated as
    /// "interval not elapsed".
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        if !self.pending {
            return false;
        }
        if let Some(interval) = self.policy.interval_ms()
            && let Some(last) = self.last_commit
        {
            let elapsed = now_ms.saturating_sub(last) as f64;
            if elapsed < interval {
                return false;
            }
        }
        self.pending = false;
        self.last_commit = Some(now_ms);
        true
    }
}
