//! Plugins command implementation.

use kiln_config::PluginRegistry;

use crate::error::Result;

/// Print the built-in plugin names, one per line, in registration order.
pub fn execute() -> Result<()> {
    let registry = PluginRegistry::builtin();
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
