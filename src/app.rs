use crate::input::Action;
use crate::queue::{BoundedQueue, Queue};
use serde::Serialize;
use tracing::debug;

/// Outcome of one applied [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Enqueue { value: i64, accepted: bool },
    Dequeue { value: Option<i64> },
    Peek    { value: Option<i64> },
    Front   { value: Option<i64> },
    Print   { rendering: String },
    Status  { occupied: usize, capacity: usize, empty: bool, full: bool },
}

#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub capacity: usize,
    pub steps:    Vec<Step>,
    /// Slot dump after the last step.
    #[serde(rename = "final")]
    pub final_rendering: String,
}

/// Demo driver: a queue of integers plus the marker used when rendering it.
pub struct App {
    queue:        BoundedQueue<i64>,
    empty_marker: String,
}

impl App {
    pub fn new(capacity: usize, empty_marker: impl Into<String>) -> Self {
        Self { queue: BoundedQueue::new(capacity), empty_marker: empty_marker.into() }
    }

    pub fn queue(&self) -> &BoundedQueue<i64> { &self.queue }

    pub fn render(&self) -> String {
        self.queue.render(&self.empty_marker)
    }

    pub fn apply(&mut self, action: &Action) -> Step {
        let step = match *action {
            Action::Enqueue(value) => Step::Enqueue { value, accepted: self.queue.enqueue(value) },
            Action::Dequeue        => Step::Dequeue { value: self.queue.dequeue() },
            Action::Peek           => Step::Peek    { value: self.queue.peek().copied() },
            Action::Front          => Step::Front   { value: self.queue.front().copied() },
            Action::Print          => Step::Print   { rendering: self.render() },
            Action::Status         => Step::Status {
                occupied: self.queue.len(),
                capacity: self.queue.capacity(),
                empty:    self.queue.is_empty(),
                full:     self.queue.is_full(),
            },
        };
        debug!(?action, ?step, occupied = self.queue.len(), "applied");
        step
    }

    pub fn run(&mut self, actions: &[Action]) -> Transcript {
        let steps = actions.iter().map(|a| self.apply(a)).collect();
        Transcript {
            capacity: self.queue.capacity(),
            steps,
            final_rendering: self.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_script;

    #[test]
    fn records_every_outcome() {
        let mut app = App::new(2, "nil");
        let actions = parse_script("enq 5, enq 6, enq 7, status, front, deq, peek, deq, deq, print").unwrap();
        let t = app.run(&actions);
        assert_eq!(t.steps, vec![
            Step::Enqueue { value: 5, accepted: true },
            Step::Enqueue { value: 6, accepted: true },
            Step::Enqueue { value: 7, accepted: false },
            Step::Status  { occupied: 2, capacity: 2, empty: false, full: true },
            Step::Front   { value: Some(5) },
            Step::Dequeue { value: Some(5) },
            Step::Peek    { value: None },
            Step::Dequeue { value: Some(6) },
            Step::Dequeue { value: None },
            Step::Print   { rendering: "[ nil, nil ]".into() },
        ]);
        assert_eq!(t.final_rendering, "[ nil, nil ]");
    }

    #[test]
    fn uses_configured_marker() {
        let mut app = App::new(2, "·");
        app.apply(&Action::Enqueue(1));
        assert_eq!(app.render(), "[ 1, · ]");
    }

    #[test]
    fn step_serializes_with_op_tag() {
        let json = serde_json::to_value(Step::Dequeue { value: None }).unwrap();
        assert_eq!(json, serde_json::json!({ "op": "dequeue", "value": null }));
    }
}
