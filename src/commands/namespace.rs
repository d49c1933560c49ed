use anyhow::Result;

use crate::config::NamingConfig;
use crate::namespace::make_namespace;
use crate::output;

pub fn execute(branch: &str, config: &NamingConfig) -> Result<()> {
    let namespace = make_namespace(branch, config)?;

    if output::is_machine_output() {
        output::print_value(&serde_json::json!({ "namespace": namespace }).to_string());
    } else {
        output::print_value(&namespace);
    }

    Ok(())
}
