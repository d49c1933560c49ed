use serde::{Deserialize, Serialize};

/// Naming knobs applied while deriving a namespace: a prefix joined onto
/// the front with a hyphen, and a suffix stripped off the branch name
/// before anything else is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    pub prefix: String,
    pub suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: "-kube".to_string(),
        }
    }
}

impl NamingConfig {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}
