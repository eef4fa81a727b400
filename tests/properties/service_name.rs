use homelab::domain::value_objects::{base_name, parse_service_name};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    /// Sidecar suffixes never change the owning unit
    #[test]
    fn sidecars_share_owner(
        unit in "[a-z][a-z0-9]{0,8}",
        suffix in "[a-z0-9]{1,6}",
        ext in prop::sample::select(vec!["container", "volume", "network", "pod"]),
    ) {
        let primary = format!("{}.{}", unit, ext);
        let sidecar = format!("{}-{}.{}", unit, suffix, ext);
        prop_assert_eq!(parse_service_name(&primary), unit.as_str());
        prop_assert_eq!(parse_service_name(&sidecar), unit.as_str());
    }

    /// The unit name is always a prefix of the base name
    #[test]
    fn unit_name_prefixes_base(name in "[a-z0-9-]{1,12}\\.[a-z]{1,9}") {
        prop_assert!(base_name(&name).starts_with(parse_service_name(&name)));
    }
}
