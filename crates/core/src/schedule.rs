use folio_protocol::{DomCommand, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    timer: TimerId,
    generation: u64,
    repeating: bool,
}

/// Bookkeeping for browser timers the controller has asked the adapter to run.
///
/// Every `schedule` issues a fresh generation and replaces whatever was armed
/// under the same id, so a fire from a superseded timer is recognised and
/// dropped. One-shot timers disarm on their first accepted fire.
#[derive(Debug, Default)]
pub struct TimerTable {
    next_generation: u64,
    armed: Vec<Armed>,
}

impl TimerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `timer`, cancelling any previous schedule for it.
    pub fn schedule(&mut self, timer: TimerId, delay_ms: u32, repeating: bool) -> DomCommand {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.armed.retain(|a| a.timer != timer);
        self.armed.push(Armed {
            timer,
            generation,
            repeating,
        });
        DomCommand::StartTimer {
            timer,
            generation,
            delay_ms,
            repeating,
        }
    }

    /// Disarm `timer`. Returns the cancel command if it was armed.
    pub fn cancel(&mut self, timer: TimerId) -> Option<DomCommand> {
        let before = self.armed.len();
        self.armed.retain(|a| a.timer != timer);
        (self.armed.len() != before).then_some(DomCommand::CancelTimer { timer })
    }

    /// Disarm everything, in the order the timers were armed.
    pub fn cancel_all(&mut self) -> Vec<DomCommand> {
        self.armed
            .drain(..)
            .map(|a| DomCommand::CancelTimer { timer: a.timer })
            .collect()
    }

    /// Accept a fire if it belongs to the current generation of `timer`.
    pub fn fire(&mut self, timer: TimerId, generation: u64) -> bool {
        let Some(pos) = self
            .armed
            .iter()
            .position(|a| a.timer == timer && a.generation == generation)
        else {
            return false;
        };
        if !self.armed[pos].repeating {
            self.armed.remove(pos);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation_of(cmd: &DomCommand) -> u64 {
        match cmd {
            DomCommand::StartTimer { generation, .. } => *generation,
            _ => 0,
        }
    }

    #[test]
    fn one_shot_fires_once() {
        let mut table = TimerTable::new();
        let confirm = TimerId::ConfirmSubmission { submission: 1 };
        let g = generation_of(&table.schedule(confirm, 500, false));
        assert!(table.fire(confirm, g));
        assert!(!table.fire(confirm, g));
        assert!(table.cancel(confirm).is_none());
    }

    #[test]
    fn distinct_submissions_are_armed_side_by_side() {
        let mut table = TimerTable::new();
        let first = TimerId::ConfirmSubmission { submission: 1 };
        let second = TimerId::ConfirmSubmission { submission: 2 };
        let g1 = generation_of(&table.schedule(first, 500, false));
        let g2 = generation_of(&table.schedule(second, 500, false));
        assert!(table.fire(first, g1));
        assert!(table.fire(second, g2));
    }

    #[test]
    fn reschedule_supersedes_previous_generation() {
        let mut table = TimerTable::new();
        let first = generation_of(&table.schedule(TimerId::ResizeSettle, 250, false));
        let second = generation_of(&table.schedule(TimerId::ResizeSettle, 250, false));
        assert_ne!(first, second);
        assert!(!table.fire(TimerId::ResizeSettle, first));
        assert!(table.fire(TimerId::ResizeSettle, second));
    }

    #[test]
    fn repeating_timer_stays_armed() {
        let mut table = TimerTable::new();
        let g = generation_of(&table.schedule(TimerId::ShuffleImages, 5000, true));
        assert!(table.fire(TimerId::ShuffleImages, g));
        assert!(table.fire(TimerId::ShuffleImages, g));
        assert!(table.cancel(TimerId::ShuffleImages).is_some());
    }

    #[test]
    fn cancel_only_reports_armed_timers() {
        let mut table = TimerTable::new();
        assert_eq!(table.cancel(TimerId::ResizeSettle), None);
        let g = generation_of(&table.schedule(TimerId::ResizeSettle, 250, false));
        assert_eq!(
            table.cancel(TimerId::ResizeSettle),
            Some(DomCommand::CancelTimer {
                timer: TimerId::ResizeSettle
            })
        );
        assert!(!table.fire(TimerId::ResizeSettle, g));
    }

    #[test]
    fn cancel_all_keeps_arming_order() {
        let mut table = TimerTable::new();
        table.schedule(TimerId::ShuffleImages, 5000, true);
        table.schedule(TimerId::ResizeSettle, 250, false);
        let cmds = table.cancel_all();
        assert_eq!(
            cmds,
            vec![
                DomCommand::CancelTimer {
                    timer: TimerId::ShuffleImages
                },
                DomCommand::CancelTimer {
                    timer: TimerId::ResizeSettle
                },
            ]
        );
        assert!(table.cancel_all().is_empty());
    }
}
