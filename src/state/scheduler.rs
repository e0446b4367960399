//! Deferred UI reversions driven by the host's tick

use std::time::{Duration, Instant};

/// Handle for a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work a timer performs when it fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// End the attention animation on a field
    StopShake { field: String },
    /// Success dwell elapsed; start fading the panel
    FadeSuccessPanel,
    /// Fade finished; drop the panel and bring the form back
    RemoveSuccessPanel,
    /// Banner dwell elapsed; start fading it
    FadeErrorBanner,
    /// Fade finished; drop the banner
    RemoveErrorBanner,
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: TimerId,
    due: Instant,
    action: TimerAction,
}

/// Deadline queue polled by `due`.
///
/// Tasks never run on their own; the owner drains them on each tick, so
/// dropping the owner (or calling `cancel_all`) leaves nothing behind.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire once `delay` has passed since `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: TimerAction) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.tasks.push(ScheduledTask {
            id,
            due: now + delay,
            action,
        });
        id
    }

    /// Returns false when the task already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Remove and return every action due at `now`, earliest first
    pub fn due(&mut self, now: Instant) -> Vec<TimerAction> {
        let mut fired: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|t| {
            if t.due <= now {
                fired.push(t.clone());
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|t| (t.due, t.id));
        fired.into_iter().map(|t| t.action).collect()
    }

}

#[cfg(test)]
impl Scheduler {
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Fade-out animation of a notice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub started: Instant,
}

impl Fade {
    /// Length of the fade-out before the notice is removed (500ms)
    pub const DURATION: Duration = Duration::from_millis(500);

    pub fn new(started: Instant) -> Self {
        Self { started }
    }

    /// Eased progress from 0.0 (opaque) to 1.0 (gone)
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let linear = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).clamp(0.0, 1.0);
        simple_easing::cubic_out(linear)
    }
}
