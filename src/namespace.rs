use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::NamingConfig;

/// Maximum length of a DNS label (RFC 1123), which is also the limit
/// Kubernetes enforces on namespace names.
pub const DNS_LABEL_MAX: usize = 63;

/// Hex digits of the branch hash appended when a long name is truncated.
const HASH_DIGITS: usize = 3;

/// Where to cut a too-long prefixed name so the hash digits still fit.
const TRUNCATE_AT: usize = DNS_LABEL_MAX - HASH_DIGITS;

/// The branch name reduced to an empty string after sanitization, so no
/// namespace can be derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot derive a namespace from branch {0:?}")]
pub struct InvalidBranch(pub String);

fn is_label_start(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn is_label_char(c: char) -> bool {
    is_label_start(c) || c == '-'
}

/// Check a string against the DNS label grammar
/// `[a-z0-9]([-a-z0-9]*[a-z0-9])?` (length not considered here).
pub fn is_valid_label(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_label_start(c) => {}
        _ => return false,
    }
    match chars.next_back() {
        None => true,
        Some(c) if is_label_start(c) => chars.all(is_label_char),
        Some(_) => false,
    }
}

/// Drop every character a DNS label cannot hold. The check is positional:
/// only the character at index 0 must satisfy the stricter first-character
/// class, later characters may also be `-`.
fn sanitize(branch: &str) -> String {
    let mut chars = branch.chars();
    let mut name = String::with_capacity(branch.len());
    if let Some(first) = chars.next() {
        if is_label_start(first) {
            name.push(first);
        }
    }
    for c in chars {
        if is_label_char(c) {
            name.push(c);
        }
    }
    name
}

fn with_prefix(name: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}-{name}")
    }
}

/// Bound the name to [`DNS_LABEL_MAX`] characters once the prefix is on.
///
/// Short names are returned prefixed and untouched. Long names are cut at
/// character 60 and get the first three hex digits of the SHA-256 digest of
/// the *unprefixed* name appended, so two branches sharing a long common
/// stem (say `feature-x` and `feature-x-v2`) still land in distinct
/// namespaces while the same branch keeps mapping to the same one.
fn fit_length(name: String, config: &NamingConfig) -> String {
    let budget = DNS_LABEL_MAX.saturating_sub(config.prefix.len() + 1);
    if name.len() < budget {
        return with_prefix(&name, &config.prefix);
    }

    let digest = Sha256::digest(name.as_bytes());
    let hex = format!("{digest:x}");
    let mut out: String = with_prefix(&name, &config.prefix)
        .chars()
        .take(TRUNCATE_AT)
        .collect();
    out.push_str(&hex[..HASH_DIGITS]);
    out
}

/// Derive the namespace for a branch.
///
/// The branch is lower-cased, stripped of characters a DNS label cannot
/// hold, relieved of one trailing `config.suffix` if present, prefixed with
/// `config.prefix`, and bounded to 63 characters with a hash tiebreaker
/// when it runs long. The result is a pure function of the inputs, so
/// redeploying the same branch always reuses the same namespace.
///
/// ```
/// use branchspace::config::NamingConfig;
/// use branchspace::namespace::make_namespace;
///
/// let cfg = NamingConfig::default();
/// assert_eq!(make_namespace("-this", &cfg).unwrap(), "this");
/// assert_eq!(make_namespace("and_this", &cfg).unwrap(), "andthis");
/// assert_eq!(make_namespace("How-Now_Brown_Cow", &cfg).unwrap(), "how-nowbrowncow");
/// assert!(make_namespace("", &cfg).is_err());
/// ```
///
/// Errors with [`InvalidBranch`] when nothing DNS-safe is left of the
/// branch name after sanitization.
pub fn make_namespace(branch: &str, config: &NamingConfig) -> Result<String, InvalidBranch> {
    let lowered = branch.to_lowercase();

    let mut name = if is_valid_label(&lowered) {
        lowered
    } else {
        if lowered.is_empty() {
            return Err(InvalidBranch(branch.to_string()));
        }
        sanitize(&lowered)
    };

    if let Some(stripped) = name.strip_suffix(&config.suffix) {
        name.truncate(stripped.len());
    }

    if name.is_empty() {
        return Err(InvalidBranch(branch.to_string()));
    }

    Ok(fit_length(name, config))
}
