use crate::error::ScriptError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Enqueue(i64),
    Dequeue,
    Peek,    // raw slot 0
    Front,   // logical head
    Print,
    Status,
}

/// Parse a demo script: commands separated by ',', ';' or newlines.
/// Blank entries are skipped and do not count towards the command index.
pub fn parse_script(script: &str) -> Result<Vec<Action>, ScriptError> {
    script
        .split(|c: char| c == ',' || c == ';' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, cmd)| parse_command(i + 1, cmd))
        .collect()
}

fn parse_command(index: usize, text: &str) -> Result<Action, ScriptError> {
    let mut words = text.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    let arg = words.next();
    if let Some(extra) = words.next() {
        return Err(ScriptError::UnexpectedArgument { index, extra: extra.to_string() });
    }

    let action = match command.as_str() {
        "enqueue" | "enq" | "push" => {
            let raw = arg.ok_or_else(|| ScriptError::MissingArgument { index, command: command.clone() })?;
            let value = raw.parse::<i64>()
                .map_err(|_| ScriptError::InvalidValue { index, value: raw.to_string() })?;
            return Ok(Action::Enqueue(value));
        }
        "dequeue" | "deq" | "pop" => Action::Dequeue,
        "peek"                    => Action::Peek,
        "front"                   => Action::Front,
        "print" | "show"          => Action::Print,
        "status"                  => Action::Status,
        _ => return Err(ScriptError::UnknownCommand { index, command }),
    };

    match arg {
        Some(extra) => Err(ScriptError::UnexpectedArgument { index, extra: extra.to_string() }),
        None        => Ok(action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_separators_and_aliases() {
        let actions = parse_script("enq 1; PUSH -2\npeek, front ,deq,, pop;print;status").unwrap();
        assert_eq!(actions, vec![
            Action::Enqueue(1),
            Action::Enqueue(-2),
            Action::Peek,
            Action::Front,
            Action::Dequeue,
            Action::Dequeue,
            Action::Print,
            Action::Status,
        ]);
    }

    #[test]
    fn empty_script_is_no_actions() {
        assert_eq!(parse_script("  ,;\n").unwrap(), Vec::new());
    }

    #[test]
    fn reports_unknown_command_with_index() {
        let err = parse_script("peek, frobnicate").unwrap_err();
        assert_eq!(err, ScriptError::UnknownCommand { index: 2, command: "frobnicate".into() });
    }

    #[test]
    fn enqueue_needs_an_integer() {
        assert_eq!(
            parse_script("enqueue").unwrap_err(),
            ScriptError::MissingArgument { index: 1, command: "enqueue".into() },
        );
        assert_eq!(
            parse_script("enqueue x").unwrap_err(),
            ScriptError::InvalidValue { index: 1, value: "x".into() },
        );
    }

    #[test]
    fn rejects_stray_arguments() {
        assert_eq!(
            parse_script("dequeue 3").unwrap_err(),
            ScriptError::UnexpectedArgument { index: 1, extra: "3".into() },
        );
        assert_eq!(
            parse_script("enqueue 1 2").unwrap_err(),
            ScriptError::UnexpectedArgument { index: 1, extra: "2".into() },
        );
    }
}
