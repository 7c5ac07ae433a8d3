//! Option matching for one dispatch pass.
//!
//! Walks the token stream that follows the command name and resolves
//! option-shaped tokens against the command's declared option set. The
//! matcher's only side effect is per-option `detected`/`value` bookkeeping;
//! invoking callbacks is the dispatcher's job, so matching stays separate
//! from effects.

use tracing::trace;

use super::registry::Command;
use super::tokenizer::Token;

/// Resolves option tokens against `cmd`'s declared options.
///
/// Returns the tokens the matcher did not consume, in their original order
/// and original spelling; those become positional-parameter candidates.
/// An option-shaped token that matches no declared option falls through
/// here rather than being rejected: embedded peers drop characters, and
/// line noise must never abort a pass.
pub(crate) fn match_options(cmd: &mut Command, tokens: &[Token]) -> Vec<String> {
    let mut leftovers = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Short(short) => match cmd.option_index_by_short(*short) {
                Some(idx) => {
                    let value = if cmd.options[idx].expects_value() {
                        take_following_value(tokens, &mut i)
                    } else {
                        None
                    };
                    trace!(option = %format!("-{short}"), value = ?value, "option detected");
                    mark_detected(cmd, idx, value);
                }
                None => {
                    trace!(token = %tokens[i].raw(), "unknown short option, passing through");
                    leftovers.push(tokens[i].raw());
                }
            },
            Token::Long(long) => match cmd.option_index_by_long(long) {
                Some(idx) => {
                    let value = if cmd.options[idx].expects_value() {
                        take_following_value(tokens, &mut i)
                    } else {
                        None
                    };
                    trace!(option = %format!("--{long}"), value = ?value, "option detected");
                    mark_detected(cmd, idx, value);
                }
                None => {
                    trace!(token = %tokens[i].raw(), "unknown long option, passing through");
                    leftovers.push(tokens[i].raw());
                }
            },
            Token::LongWithValue { name, value } => match cmd.option_index_by_long(name) {
                Some(idx) => {
                    // An attached `=value` binds whether or not the option
                    // declares an associated value.
                    trace!(option = %format!("--{name}"), value = %value, "option detected");
                    mark_detected(cmd, idx, Some(value.clone()));
                }
                None => {
                    trace!(token = %tokens[i].raw(), "unknown long option, passing through");
                    leftovers.push(tokens[i].raw());
                }
            },
            Token::Word(word) => leftovers.push(word.clone()),
        }
        i += 1;
    }

    leftovers
}

/// Consumes the token after position `*i` as an option value, if there is
/// one and it is not itself option-shaped.
///
/// A value-taking option at the end of the line (or followed by another
/// option) is still detected, just with no value bound. That is tolerated
/// malformed input, not a failure.
fn take_following_value(tokens: &[Token], i: &mut usize) -> Option<String> {
    match tokens.get(*i + 1) {
        Some(next) if !next.is_option_shaped() => {
            *i += 1;
            Some(next.raw())
        }
        _ => None,
    }
}

/// Last write wins: a repeated option overwrites the earlier occurrence's
/// detected state and value.
fn mark_detected(cmd: &mut Command, idx: usize, value: Option<String>) {
    cmd.options[idx].detected = true;
    cmd.options[idx].value = value;
}
