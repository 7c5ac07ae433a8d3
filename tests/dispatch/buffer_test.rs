//! The line buffer feeding the dispatcher, end to end: a character
//! stream in, dispatch outcomes out.

use pretty_assertions::assert_eq;
use rxcmd::{CmdOption, Command, Dispatcher, LineBuffer, Outcome};

fn dispatcher_with_test_command() -> Dispatcher {
    let mut cmd = Command::new("test", "A test command.");
    cmd.register_option(CmdOption::long("opt", "A test option.")).unwrap();

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(cmd).unwrap();
    dispatcher
}

#[test]
fn stream_dispatches_on_end_of_line() {
    let mut dispatcher = dispatcher_with_test_command();
    let mut buffer = LineBuffer::default();

    let outcomes: Vec<Outcome> = buffer
        .push_str("test --opt\n")
        .iter()
        .map(|line| dispatcher.dispatch(line))
        .collect();

    assert_eq!(
        outcomes,
        vec![Outcome::Executed {
            command: "test".to_string(),
            failed_callbacks: 0
        }]
    );
    assert!(dispatcher.command("test").unwrap().option_by_long("opt").unwrap().is_detected());
}

#[test]
fn partial_line_waits_for_more_characters() {
    let mut dispatcher = dispatcher_with_test_command();
    let mut buffer = LineBuffer::default();

    assert!(buffer.push_str("te").is_empty());
    assert!(buffer.push_str("st --o").is_empty());

    let lines = buffer.push_str("pt\n");
    assert_eq!(lines, vec!["test --opt".to_string()]);
    assert!(dispatcher.dispatch(&lines[0]).all_ok());
}

#[test]
fn multiple_lines_in_one_chunk() {
    let mut dispatcher = dispatcher_with_test_command();
    let mut buffer = LineBuffer::default();

    let outcomes: Vec<Outcome> = buffer
        .push_str("test\nbogus\n\n")
        .iter()
        .map(|line| dispatcher.dispatch(line))
        .collect();

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], Outcome::Executed { .. }));
    assert!(matches!(outcomes[1], Outcome::Unrecognized { .. }));
    assert_eq!(outcomes[2], Outcome::NoInput);
}

#[test]
fn carriage_return_terminated_peer() {
    let mut dispatcher = dispatcher_with_test_command();
    let mut buffer = LineBuffer::new(64, '\r');

    let lines = buffer.push_str("test --opt\r");
    assert_eq!(lines, vec!["test --opt".to_string()]);
    assert!(dispatcher.dispatch(&lines[0]).all_ok());
}

#[test]
fn overlong_line_is_dropped_not_dispatched() {
    let mut buffer = LineBuffer::new(8, '\n');

    let lines = buffer.push_str("test --with-a-very-long-tail\ntest\n");
    assert_eq!(lines, vec!["test".to_string()]);
}
