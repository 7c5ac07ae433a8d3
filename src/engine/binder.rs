//! Positional parameter binding for one dispatch pass.
//!
//! Takes the tokens the option matcher left over and assigns them, in
//! order, to the command's declared parameters: the first leftover binds
//! to parameter 0, the second to parameter 1, and so on.

use tracing::{debug, trace};

use super::registry::Command;

/// Binds leftover tokens to `cmd`'s positional parameters.
///
/// Permissive on both ends: extra tokens beyond the declared parameters are
/// ignored, and declared parameters with no token simply stay unbound for
/// this pass (no value, no callback). Binding stores the raw token text;
/// semantic validation belongs to the parameter callback.
pub(crate) fn bind_params(cmd: &mut Command, leftovers: &[String]) {
    let declared = cmd.params.len();

    for (index, value) in leftovers.iter().enumerate() {
        if index >= declared {
            debug!(
                command = %cmd.name(),
                ignored = leftovers.len() - declared,
                "more tokens than declared parameters, ignoring extras"
            );
            break;
        }
        trace!(command = %cmd.name(), index, value = %value, "parameter bound");
        cmd.params[index].value = Some(value.clone());
    }
}
