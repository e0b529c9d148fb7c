//! Single pending, cancelable automated reply.
//!
//! A reply is keyed to the generation it was scheduled under. Bumping the
//! generation (new game, undo, redo, mode change) invalidates it, so a stale
//! reply can never be applied to a state that has since changed.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub generation: u64,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ReplyScheduler {
    generation: u64,
    pending: Option<PendingReply>,
}

impl ReplyScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending reply with one due `delay` after `now`.
    pub fn schedule(&mut self, now: DateTime<Utc>, delay: Duration) -> PendingReply {
        let reply = PendingReply {
            generation: self.generation,
            due_at: now + delay,
        };
        self.pending = Some(reply);
        reply
    }

    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    /// Take the pending reply if it is due and still current.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Option<PendingReply> {
        let reply = self.pending?;
        if reply.generation != self.generation {
            self.pending = None;
            return None;
        }
        if reply.due_at > now {
            return None;
        }
        self.pending = None;
        Some(reply)
    }

    #[inline]
    pub fn pending(&self) -> Option<PendingReply> {
        self.pending
            .filter(|reply| reply.generation == self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::ReplyScheduler;
    use chrono::{Duration, Utc};

    #[test]
    fn reply_fires_only_once_due() {
        let mut scheduler = ReplyScheduler::new();
        let now = Utc::now();
        scheduler.schedule(now, Duration::milliseconds(320));

        assert!(scheduler.take_due(now).is_none());
        assert!(scheduler.pending().is_some());
        assert!(scheduler
            .take_due(now + Duration::milliseconds(320))
            .is_some());
        assert!(scheduler.pending().is_none());
    }

    #[test]
    fn reply_scheduled_before_invalidation_stays_stale() {
        let mut scheduler = ReplyScheduler::new();
        let now = Utc::now();
        let stale = scheduler.schedule(now, Duration::milliseconds(10));
        scheduler.invalidate();
        let fresh = scheduler.schedule(now, Duration::milliseconds(10));

        assert_ne!(stale.generation, fresh.generation);
        assert_eq!(scheduler.pending(), Some(fresh));
    }

    #[test]
    fn invalidation_cancels_the_pending_reply() {
        let mut scheduler = ReplyScheduler::new();
        let now = Utc::now();
        scheduler.schedule(now, Duration::milliseconds(10));
        scheduler.invalidate();

        assert!(scheduler.pending().is_none());
        assert!(scheduler.take_due(now + Duration::seconds(5)).is_none());
    }
}
