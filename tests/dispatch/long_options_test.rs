//! Long options without associated values: detection and non-detection
//! across a registered command's option set.

use pretty_assertions::assert_eq;
use rxcmd::{CmdOption, Command, Dispatcher};

fn dispatcher_with_options(longs: &[&str]) -> Dispatcher {
    let mut cmd = Command::new("test", "A test command.").with_callback(|_| true);
    for long in longs {
        cmd.register_option(CmdOption::long(*long, "A test long option."))
            .unwrap();
    }

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(cmd).unwrap();
    dispatcher
}

fn option_detected(dispatcher: &Dispatcher, long: &str) -> bool {
    dispatcher
        .command("test")
        .unwrap()
        .option_by_long(long)
        .unwrap()
        .is_detected()
}

#[test]
fn one_positive_long_option() {
    let mut dispatcher = dispatcher_with_options(&["long"]);

    let outcome = dispatcher.dispatch("test --long");

    assert!(outcome.all_ok());
    assert_eq!(option_detected(&dispatcher, "long"), true);
}

#[test]
fn two_positive_long_options() {
    let mut dispatcher = dispatcher_with_options(&["long1", "long2"]);

    dispatcher.dispatch("test --long1 --long2");

    assert_eq!(option_detected(&dispatcher, "long1"), true);
    assert_eq!(option_detected(&dispatcher, "long2"), true);
}

#[test]
fn one_positive_one_negative_long_option() {
    let mut dispatcher = dispatcher_with_options(&["long1", "long2"]);

    dispatcher.dispatch("test --long1");

    assert_eq!(option_detected(&dispatcher, "long1"), true);
    assert_eq!(option_detected(&dispatcher, "long2"), false);
}

#[test]
fn command_detected_with_no_options_mentioned() {
    let mut dispatcher = dispatcher_with_options(&["long"]);

    dispatcher.dispatch("test");

    assert!(dispatcher.command("test").unwrap().is_detected());
    assert_eq!(option_detected(&dispatcher, "long"), false);
}
