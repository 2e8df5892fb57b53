//! Self re-arming timers polled by a single event loop.

/// Periodic jobs of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Advance and draw one frame.
    Frame,
    /// Stir the ambient swarm.
    Swarm,
    /// Check the wall clock for a new minute.
    Clock,
}

/// A pending one-shot firing. Handlers re-arm their own task when done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub task: Task,
    /// Period the timer repeats with when its handler re-arms it.
    pub interval_ms: u64,
    /// Timeline instant at which the timer becomes due.
    pub next_fire_ms: u64,
}

/// Pending timers on a millisecond timeline. Cancelling is removal.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire `delay_ms` after `now_ms`, replacing any
    /// pending firing of the same task. Re-arming repeats the same delay.
    pub fn arm(&mut self, task: Task, delay_ms: u64, now_ms: u64) {
        self.arm_every(task, delay_ms, delay_ms, now_ms);
    }

    /// Schedule `task` to first fire `first_ms` after `now_ms`, then every
    /// `interval_ms` once re-armed with [`Scheduler::rearm`].
    pub fn arm_every(&mut self, task: Task, first_ms: u64, interval_ms: u64, now_ms: u64) {
        self.cancel(task);
        self.timers.push(Timer {
            task,
            interval_ms,
            next_fire_ms: now_ms.saturating_add(first_ms),
        });
    }

    /// Arm a fired timer again, one interval after `now_ms`.
    pub fn rearm(&mut self, timer: Timer, now_ms: u64) {
        self.arm(timer.task, timer.interval_ms, now_ms);
    }

    /// Drop the pending firing of `task`. Returns whether one existed.
    pub fn cancel(&mut self, task: Task) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.task != task);
        self.timers.len() != before
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn is_armed(&self, task: Task) -> bool {
        self.timers.iter().any(|t| t.task == task)
    }

    /// Pending deadline of `task`.
    pub fn deadline(&self, task: Task) -> Option<u64> {
        self.timers
            .iter()
            .find(|t| t.task == task)
            .map(|t| t.next_fire_ms)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.next_fire_ms).min()
    }

    /// Remove and return every timer due at `now_ms`, earliest first.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<Timer> {
        let mut due: Vec<Timer> = self
            .timers
            .iter()
            .filter(|t| t.next_fire_ms <= now_ms)
            .copied()
            .collect();
        self.timers.retain(|t| t.next_fire_ms > now_ms);
        due.sort_by_key(|t| t.next_fire_ms);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(Task::Swarm, 300, 0);
        scheduler.arm(Task::Frame, 50, 0);
        scheduler.arm(Task::Clock, 1000, 0);

        assert_eq!(scheduler.next_deadline(), Some(50));
        assert!(scheduler.take_due(49).is_empty());

        let due: Vec<Task> = scheduler.take_due(300).iter().map(|t| t.task).collect();
        assert_eq!(due, vec![Task::Frame, Task::Swarm]);
        assert_eq!(scheduler.next_deadline(), Some(1000));
    }

    #[test]
    fn test_due_timers_are_one_shot() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(Task::Frame, 50, 100);
        let due = scheduler.take_due(150);
        assert_eq!(
            due,
            vec![Timer {
                task: Task::Frame,
                interval_ms: 50,
                next_fire_ms: 150
            }]
        );
        assert!(!scheduler.is_armed(Task::Frame));
        assert!(scheduler.take_due(10_000).is_empty());
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(Task::Swarm, 5000, 0);
        scheduler.arm(Task::Swarm, 7000, 1000);
        assert_eq!(scheduler.next_deadline(), Some(8000));
        assert_eq!(scheduler.take_due(8000).len(), 1);
    }

    #[test]
    fn test_rearm_uses_interval_not_first_delay() {
        let mut scheduler = Scheduler::new();
        scheduler.arm_every(Task::Clock, 2000, 1000, 0);
        assert_eq!(scheduler.next_deadline(), Some(2000));

        let fired = scheduler.take_due(2000);
        assert_eq!(fired[0].interval_ms, 1000);
        scheduler.rearm(fired[0], 2000);
        assert_eq!(scheduler.deadline(Task::Clock), Some(3000));

        let fired = scheduler.take_due(3000);
        scheduler.rearm(fired[0], 3010);
        assert_eq!(scheduler.next_deadline(), Some(4010));
    }

    #[test]
    fn test_cancel_and_clear() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(Task::Frame, 50, 0);
        scheduler.arm(Task::Clock, 1000, 0);
        assert!(scheduler.cancel(Task::Frame));
        assert!(!scheduler.cancel(Task::Frame));
        assert_eq!(scheduler.next_deadline(), Some(1000));
        scheduler.clear();
        assert_eq!(scheduler.next_deadline(), None);
    }
}
