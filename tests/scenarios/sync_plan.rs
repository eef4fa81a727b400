use homelab::application::{SyncOptions, SyncOutcome, SyncUseCase};
use homelab::domain::entities::ApplyPhase;
use homelab::infrastructure::FsUnitRepository;
use homelab::MachinesConfig;

use crate::common::{CountingApprover, FakeConnector, FakeHost, TestProject};

const A: &str = "[Container]\nImage=docker.io/library/nginx:1.27\n";
const B: &str = "[Container]\nImage=docker.io/library/redis:7\n";
const C: &str = "[Container]\nImage=docker.io/library/postgres:16\n";

fn project(services: &[&str]) -> TestProject {
    let list = services
        .iter()
        .map(|s| format!("      - {}\n", s))
        .collect::<String>();
    TestProject::new()
        .with_machines(&format!(
            "machines:\n  nas:\n    hostname: nas.lan\n    user: ops\n    services:\n{}",
            list
        ))
        .with_unit_file("a", "a.container", A)
        .with_unit_file("b", "b.container", B)
}

fn use_case(
    project: &TestProject,
    host: &FakeHost,
    approver: CountingApprover,
) -> SyncUseCase<FsUnitRepository, FakeConnector> {
    let config =
        MachinesConfig::load(&project.path().join("machines/machines.yaml")).expect("config");
    SyncUseCase::new(
        config,
        FsUnitRepository::new(project.services_dir()),
        FakeConnector::new(host),
        Box::new(approver),
    )
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn adds_missing_and_removes_undesired() {
    let project = project(&["a", "b"]);
    let host = FakeHost::new();
    host.deploy("b.container", B).deploy("c.container", C);
    host.run_service("b").run_service("c");
    let (approver, asked) = CountingApprover::new(true);

    let outcome = use_case(&project, &host, approver)
        .execute("nas", &SyncOptions::new())
        .unwrap();

    let plan = outcome.plan().unwrap();
    assert_eq!(plan.to_add, names(&["a"]));
    assert_eq!(plan.to_remove, names(&["c"]));
    assert_eq!(plan.to_keep, names(&["b"]));
    assert!(plan.to_update.is_empty());
    assert_eq!(asked.get(), 1);

    let summary = outcome.summary().unwrap();
    assert_eq!(summary.added, names(&["a"]));
    assert_eq!(summary.removed, names(&["c"]));
    assert_eq!(host.filenames(), names(&["a.container", "b.container"]));
    assert!(host.is_running("a"));
    assert!(!host.is_running("c"));
}

#[test]
fn drifted_unit_is_updated_after_confirmation() {
    let project = project(&["a"]);
    let host = FakeHost::new();
    host.deploy("a.container", "[Container]\nImage=docker.io/library/nginx:1.25\n");
    let (approver, asked) = CountingApprover::new(true);

    let outcome = use_case(&project, &host, approver)
        .execute("nas", &SyncOptions::new())
        .unwrap();

    assert_eq!(outcome.plan().unwrap().to_update, names(&["a"]));
    assert_eq!(asked.get(), 1);
    assert_eq!(outcome.summary().unwrap().updated, names(&["a"]));

    let mutations = host.mutations();
    let position = |call: &str| mutations.iter().position(|c| c == call).unwrap();
    assert!(position("stop a") < position("upload a.container"));
    assert!(position("upload a.container") < position("daemon-reload"));
    assert!(position("daemon-reload") < position("start a"));
}

#[test]
fn unchanged_host_is_in_sync_and_untouched() {
    let project = project(&["a"]);
    let host = FakeHost::new();
    host.deploy("a.container", A);
    let (approver, asked) = CountingApprover::new(true);

    let outcome = use_case(&project, &host, approver)
        .execute("nas", &SyncOptions::new())
        .unwrap();

    assert_eq!(outcome, SyncOutcome::InSync);
    assert_eq!(asked.get(), 0);
    assert!(host.mutations().is_empty());
}

#[test]
fn start_failure_is_part_of_the_outcome() {
    let project = project(&["a", "b"]);
    let host = FakeHost::new();
    host.break_service("a");
    let (approver, _) = CountingApprover::new(true);

    let outcome = use_case(&project, &host, approver)
        .execute("nas", &SyncOptions::new().with_yes(true))
        .expect("unit failures do not fail the run");

    let summary = outcome.summary().unwrap();
    assert!(summary.has_failures());
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].unit, "a");
    assert_eq!(summary.failures[0].phase, ApplyPhase::Start);
    assert_eq!(summary.added, names(&["b"]));
    assert!(host.is_running("b"));
}

#[test]
fn service_scope_ignores_everything_else() {
    let project = project(&["b"]);
    let host = FakeHost::new();
    host.deploy("b.container", "[Container]\nImage=stale\n")
        .deploy("c.container", C);
    let (approver, _) = CountingApprover::new(true);

    let outcome = use_case(&project, &host, approver)
        .execute("nas", &SyncOptions::new().with_service("a").with_yes(true))
        .unwrap();

    let plan = outcome.plan().unwrap();
    assert_eq!(plan.to_add, names(&["a"]));
    assert!(plan.to_remove.is_empty());
    assert!(plan.to_update.is_empty());
    assert!(plan.to_keep.is_empty());
    assert_eq!(
        host.filenames(),
        names(&["a.container", "b.container", "c.container"])
    );
}

#[test]
fn dry_run_reports_plan_without_asking() {
    let project = project(&["a"]);
    let host = FakeHost::new();
    host.deploy("c.container", C);
    let (approver, asked) = CountingApprover::new(true);

    let outcome = use_case(&project, &host, approver)
        .execute("nas", &SyncOptions::new().with_dry_run(true))
        .unwrap();

    assert!(matches!(outcome, SyncOutcome::DryRun(_)));
    assert_eq!(asked.get(), 0);
    assert!(host.mutations().is_empty());
}

#[test]
fn sidecar_files_travel_with_their_unit() {
    let project = project(&["a"])
        .with_unit_file("a", "a-cache.volume", "[Volume]\n")
        .with_unit_file("a", "README.md", "not a quadlet\n");
    let host = FakeHost::new();
    let (approver, _) = CountingApprover::new(true);

    use_case(&project, &host, approver)
        .execute("nas", &SyncOptions::new().with_yes(true))
        .unwrap();

    assert_eq!(host.filenames(), names(&["a-cache.volume", "a.container"]));
}

#[test]
fn pod_unit_starts_the_service_quadlet_generates() {
    let project = project(&["media"])
        .with_unit_file("media", "media.pod", "[Pod]\nPublishPort=8096:8096\n")
        .with_unit_file("media", "media-app.container", "[Container]\nPod=media.pod\n");
    let host = FakeHost::new();
    let (approver, _) = CountingApprover::new(true);

    let outcome = use_case(&project, &host, approver)
        .execute("nas", &SyncOptions::new().with_yes(true))
        .unwrap();

    assert_eq!(outcome.summary().unwrap().added, names(&["media"]));
    assert!(host.is_running("media-pod"));
    assert!(!host.mutations().contains(&"start media".to_string()));
}
