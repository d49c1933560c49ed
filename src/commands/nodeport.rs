use anyhow::Result;

use crate::output;
use crate::port::make_nodeport;

pub fn execute(namespace: &str) -> Result<()> {
    let nodeport = make_nodeport(namespace);

    if output::is_machine_output() {
        output::print_value(&serde_json::json!({ "nodeport": nodeport }).to_string());
    } else {
        output::print_value(&nodeport.to_string());
    }

    Ok(())
}
