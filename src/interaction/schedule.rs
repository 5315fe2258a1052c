use std::{collections::HashMap, fmt, time::Duration};

use super::reveal::CardId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// What a delayed callback does once its timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Replay the reveal effect on whichever section is showing when this fires.
    Restagger,
    RevealCard(CardId),
    FinishSubmit,
    TypeNextChar,
    ReleaseButton(String),
    EndRainbow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedTask {
    pub id: TaskId,
    pub delay: Duration,
    pub kind: TaskKind,
}

/// Bookkeeping for fire-and-forget timers.
///
/// Ids are unique for the lifetime of the page. Nothing is ever cancelled:
/// a task scheduled for a page that has since been left still runs when its
/// timer fires. Keeping the id around is what a cancelling revision would hook into.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: HashMap<TaskId, TaskKind>,
}

impl Scheduler {
    pub fn schedule(&mut self, kind: TaskKind, delay: Duration) -> DelayedTask {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, kind.clone());
        DelayedTask { id, delay, kind }
    }

    /// Removes a fired task. `None` for ids that were never issued or already ran.
    pub fn take(&mut self, id: TaskId) -> Option<TaskKind> {
        self.pending.remove(&id)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
