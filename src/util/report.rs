use crate::app::{Step, Transcript};
use crate::util::human::fmt_opt;

/// Render a demo run as text: a header line, then one line per step.
/// Accepted enqueues produce no line.
pub fn generate(title: &str, transcript: &Transcript) -> String {
    let mut out = format!("-- Example of {} --\n", title);
    for step in &transcript.steps {
        if let Some(line) = step_line(step) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn step_line(step: &Step) -> Option<String> {
    let line = match step {
        Step::Enqueue { accepted: true, .. } => return None,
        Step::Enqueue { value, .. }          => format!("Enqueue {} rejected (full)", value),
        Step::Dequeue { value }              => format!("Dequeue {}", fmt_opt(*value)),
        Step::Peek    { value }              => format!("Peek {}", fmt_opt(*value)),
        Step::Front   { value }              => format!("Front {}", fmt_opt(*value)),
        Step::Print   { rendering }          => rendering.clone(),
        Step::Status  { occupied, capacity, empty, full } => format!(
            "Status occupied={} capacity={} empty={} full={}",
            occupied, capacity, empty, full
        ),
    };
    Some(line)
}
