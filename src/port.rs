use sha2::{Digest, Sha256};

/// Lowest port Kubernetes hands out to NodePort services.
pub const NODEPORT_MIN: u16 = 30000;

/// One past the highest NodePort; derived ports stay below this.
pub const NODEPORT_MAX: u16 = 32768;

/// Hash a namespace into a reproducible NodePort.
///
/// Takes the first 40 bits of the SHA-256 digest of the input (the first
/// 10 hex digits) and folds them into `[NODEPORT_MIN, NODEPORT_MAX)`.
/// 40 bits select among ~2768 buckets with negligible modulo bias, and a
/// cryptographic digest spreads nearby names apart, so two namespaces
/// rarely contend for a port while the same namespace always gets its
/// port back on redeploy.
///
/// ```
/// use branchspace::port::make_nodeport;
///
/// assert_eq!(make_nodeport("abc"), 32767);
/// assert_eq!(make_nodeport("abcdef"), 32405);
/// ```
pub fn make_nodeport(namespace: &str) -> u16 {
    let digest = Sha256::digest(namespace.as_bytes());
    let value = digest[..5]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

    let span = u64::from(NODEPORT_MAX - NODEPORT_MIN);
    NODEPORT_MIN + (value % span) as u16
}
