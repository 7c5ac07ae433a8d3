//! Long options with associated values: attached (`--name=value`) and
//! detached (`--name value`) forms, empty values, and short-option value
//! consumption.

use pretty_assertions::assert_eq;
use rxcmd::{CmdOption, Command, Dispatcher};

fn dispatcher_with_value_options(longs: &[&str]) -> Dispatcher {
    let mut cmd = Command::new("test", "A test command.").with_callback(|_| true);
    for long in longs {
        cmd.register_option(CmdOption::long(*long, "A value-taking option.").takes_value(true))
            .unwrap();
    }

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(cmd).unwrap();
    dispatcher
}

fn option_value(dispatcher: &Dispatcher, long: &str) -> Option<String> {
    dispatcher
        .command("test")
        .unwrap()
        .option_by_long(long)
        .unwrap()
        .value()
        .map(str::to_owned)
}

#[test]
fn attached_value_binds_exactly() {
    let mut dispatcher = dispatcher_with_value_options(&["long1"]);

    dispatcher.dispatch("test --long1=optVal1");

    let opt = dispatcher.command("test").unwrap().option_by_long("long1").unwrap();
    assert_eq!(opt.is_detected(), true);
    assert_eq!(opt.value(), Some("optVal1"));
}

#[test]
fn two_attached_values_bind_independently() {
    let mut dispatcher = dispatcher_with_value_options(&["long1", "long2"]);

    dispatcher.dispatch("test --long1=optVal1 --long2=optVal2");

    assert_eq!(option_value(&dispatcher, "long1").as_deref(), Some("optVal1"));
    assert_eq!(option_value(&dispatcher, "long2").as_deref(), Some("optVal2"));
}

#[test]
fn unmentioned_option_stays_undetected() {
    let mut dispatcher = dispatcher_with_value_options(&["long1", "long2"]);

    dispatcher.dispatch("test --long1=optVal1");

    let cmd = dispatcher.command("test").unwrap();
    assert_eq!(cmd.option_by_long("long1").unwrap().is_detected(), true);
    assert_eq!(cmd.option_by_long("long2").unwrap().is_detected(), false);
    assert_eq!(cmd.option_by_long("long2").unwrap().value(), None);
}

#[test]
fn detached_value_follows_option() {
    let mut dispatcher = dispatcher_with_value_options(&["long1"]);

    dispatcher.dispatch("test --long1 optVal1");

    assert_eq!(option_value(&dispatcher, "long1").as_deref(), Some("optVal1"));
}

#[test]
fn empty_attached_value_is_bound_not_undetected() {
    let mut dispatcher = dispatcher_with_value_options(&["long1"]);

    dispatcher.dispatch("test --long1=");

    let opt = dispatcher.command("test").unwrap().option_by_long("long1").unwrap();
    assert_eq!(opt.is_detected(), true);
    assert_eq!(opt.value(), Some(""));
}

#[test]
fn missing_value_tolerated() {
    let mut dispatcher = dispatcher_with_value_options(&["long1"]);

    dispatcher.dispatch("test --long1");

    let opt = dispatcher.command("test").unwrap().option_by_long("long1").unwrap();
    assert_eq!(opt.is_detected(), true);
    assert_eq!(opt.value(), None);
}

#[test]
fn repeated_option_is_last_write_wins() {
    let mut dispatcher = dispatcher_with_value_options(&["long1"]);

    dispatcher.dispatch("test --long1=first --long1=second");

    assert_eq!(option_value(&dispatcher, "long1").as_deref(), Some("second"));
}

#[test]
fn short_option_with_value() {
    let mut cmd = Command::new("test", "A test command.");
    cmd.register_option(CmdOption::new('a', "opta", "A test option.").takes_value(true))
        .unwrap();

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(cmd).unwrap();

    dispatcher.dispatch("test -a optVal");

    let opt = dispatcher.command("test").unwrap().option_by_short('a').unwrap();
    assert_eq!(opt.is_detected(), true);
    assert_eq!(opt.value(), Some("optVal"));
}

#[test]
fn attached_value_on_flag_option_still_binds() {
    let mut cmd = Command::new("test", "A test command.");
    cmd.register_option(CmdOption::long("flag", "A plain flag.")).unwrap();

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(cmd).unwrap();

    dispatcher.dispatch("test --flag=value");

    let opt = dispatcher.command("test").unwrap().option_by_long("flag").unwrap();
    assert_eq!(opt.is_detected(), true);
    assert_eq!(opt.value(), Some("value"));
}
