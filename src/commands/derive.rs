use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::config::NamingConfig;
use crate::namespace::make_namespace;
use crate::outln;
use crate::output;
use crate::port::make_nodeport;

/// Everything a deployment pipeline needs to expose one branch.
#[derive(Debug, Clone, Serialize)]
pub struct Derivation {
    pub branch: String,
    pub namespace: String,
    pub nodeport: u16,
}

/// The port is derived from the namespace, not the raw branch, so renames
/// that sanitize to the same namespace keep the same port.
pub fn derive(branch: &str, config: &NamingConfig) -> Result<Derivation> {
    let namespace = make_namespace(branch, config)?;
    let nodeport = make_nodeport(&namespace);

    Ok(Derivation {
        branch: branch.to_string(),
        namespace,
        nodeport,
    })
}

pub fn execute(branch: &str, config: &NamingConfig) -> Result<()> {
    let derivation = derive(branch, config)?;

    if output::is_machine_output() {
        output::print_value(&serde_json::to_string(&derivation)?);
        return Ok(());
    }

    outln!(
        "{} Deployment identity for branch {}",
        "🔧".blue(),
        derivation.branch.cyan()
    );
    outln!("Namespace: {}", derivation.namespace.green().bold());
    outln!("NodePort:  {}", derivation.nodeport.to_string().yellow());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_ties_port_to_namespace() {
        let cfg = NamingConfig::default();
        let derivation = derive("How-Now_Brown_Cow", &cfg).unwrap();

        assert_eq!(derivation.namespace, "how-nowbrowncow");
        assert_eq!(derivation.nodeport, make_nodeport("how-nowbrowncow"));
    }

    #[test]
    fn test_branches_sanitizing_alike_share_an_identity() {
        let cfg = NamingConfig::default();
        let a = derive("and_this", &cfg).unwrap();
        let b = derive("AndThis", &cfg).unwrap();

        assert_eq!(a.namespace, b.namespace);
        assert_eq!(a.nodeport, b.nodeport);
    }

    #[test]
    fn test_derivation_serializes_for_pipelines() {
        let cfg = NamingConfig::default();
        let derivation = derive("abc", &cfg).unwrap();
        let json = serde_json::to_string(&derivation).unwrap();

        assert_eq!(
            json,
            r#"{"branch":"abc","namespace":"abc","nodeport":32767}"#
        );
    }
}
