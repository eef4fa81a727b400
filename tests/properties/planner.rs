use std::collections::BTreeSet;

use homelab::{Planner, SyncPlan};
use proptest::prelude::*;

fn unit_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,2}", 0..8)
}

fn set(list: &[String]) -> BTreeSet<String> {
    list.iter().cloned().collect()
}

fn all_planned(plan: &SyncPlan) -> Vec<String> {
    plan.to_add
        .iter()
        .chain(&plan.to_remove)
        .chain(&plan.to_update)
        .chain(&plan.to_keep)
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    /// Each desired or deployed name lands in exactly one list
    #[test]
    fn plan_partitions_inputs(
        desired in unit_names(),
        deployed in unit_names(),
        drifted in unit_names(),
    ) {
        let drifted = set(&drifted);
        let plan = Planner::build(&desired, &deployed, false, |u| drifted.contains(u));

        let planned = all_planned(&plan);
        let unique = set(&planned);
        prop_assert_eq!(planned.len(), unique.len());

        let expected: BTreeSet<String> = set(&desired).union(&set(&deployed)).cloned().collect();
        prop_assert_eq!(unique, expected);

        for unit in &plan.to_add {
            prop_assert!(desired.contains(unit) && !deployed.contains(unit));
        }
        for unit in &plan.to_remove {
            prop_assert!(deployed.contains(unit) && !desired.contains(unit));
        }
        for unit in &plan.to_update {
            prop_assert!(drifted.contains(unit));
        }
        for unit in &plan.to_keep {
            prop_assert!(!drifted.contains(unit));
        }
    }

    /// Same inputs, same plan
    #[test]
    fn planning_is_deterministic(
        desired in unit_names(),
        deployed in unit_names(),
        drifted in unit_names(),
    ) {
        let drifted = set(&drifted);
        let first = Planner::build(&desired, &deployed, false, |u| drifted.contains(u));
        let second = Planner::build(&desired, &deployed, false, |u| drifted.contains(u));
        prop_assert_eq!(first, second);
    }

    /// Applying a plan yields a host whose next plan has no changes
    #[test]
    fn applied_plan_converges(
        desired in unit_names(),
        deployed in unit_names(),
        drifted in unit_names(),
    ) {
        let drifted = set(&drifted);
        let plan = Planner::build(&desired, &deployed, false, |u| drifted.contains(u));

        let after: Vec<String> = plan
            .to_add
            .iter()
            .chain(&plan.to_update)
            .chain(&plan.to_keep)
            .cloned()
            .collect();
        let next = Planner::build(&desired, &after, false, |_| false);

        prop_assert!(!next.has_changes());
        prop_assert_eq!(set(&next.to_keep), set(&desired));
    }

    /// Forcing moves every keep into update and leaves add/remove alone
    #[test]
    fn force_promotes_keeps(desired in unit_names(), deployed in unit_names()) {
        let normal = Planner::build(&desired, &deployed, false, |_| false);
        let forced = Planner::build(&desired, &deployed, true, |_| false);

        prop_assert!(forced.to_keep.is_empty());
        prop_assert_eq!(&forced.to_add, &normal.to_add);
        prop_assert_eq!(&forced.to_remove, &normal.to_remove);
        prop_assert_eq!(set(&forced.to_update), set(&normal.to_keep));
    }

    /// More drift never shrinks the set of changes
    #[test]
    fn drift_is_monotonic(
        desired in unit_names(),
        deployed in unit_names(),
        some in unit_names(),
        extra in unit_names(),
    ) {
        let small = set(&some);
        let large: BTreeSet<String> = small.union(&set(&extra)).cloned().collect();

        let fewer = Planner::build(&desired, &deployed, false, |u| small.contains(u));
        let more = Planner::build(&desired, &deployed, false, |u| large.contains(u));

        prop_assert!(set(&fewer.to_update).is_subset(&set(&more.to_update)));
        prop_assert!(fewer.total_changes() <= more.total_changes());
    }
}
