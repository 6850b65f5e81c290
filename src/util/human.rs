use std::fmt::Display;

/// Marker printed for an empty slot or a missing value.
pub const NIL: &str = "nil";

/// Format one slot: its value, or `empty` when vacant.
pub fn fmt_slot<T: Display>(slot: Option<&T>, empty: &str) -> String {
    match slot {
        Some(v) => v.to_string(),
        None    => empty.to_string(),
    }
}

/// Format a full slot dump: "[ 1, nil, 3 ]", or "[ ]" when there are no slots.
pub fn fmt_slots<'a, T, I>(slots: I, empty: &str) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = Option<&'a T>>,
{
    let items: Vec<String> = slots.into_iter().map(|s| fmt_slot(s, empty)).collect();
    if items.is_empty() {
        return "[ ]".to_string();
    }
    format!("[ {} ]", items.join(", "))
}

/// Format an optional value for transcript lines: "42" or "nil".
pub fn fmt_opt<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None    => NIL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dump() {
        let none: Vec<Option<&i32>> = Vec::new();
        assert_eq!(fmt_slots(none, NIL), "[ ]");
    }

    #[test]
    fn mixed_dump_with_custom_marker() {
        let slots = vec![Some(&1), None, Some(&3)];
        assert_eq!(fmt_slots(slots, "_"), "[ 1, _, 3 ]");
    }

    #[test]
    fn optional_values() {
        assert_eq!(fmt_opt(Some(5)), "5");
        assert_eq!(fmt_opt::<i32>(None), "nil");
    }
}
