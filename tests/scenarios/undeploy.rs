use std::sync::Arc;

use homelab::application::{SyncOutcome, UndeployOptions, UndeployUseCase};
use homelab::domain::ports::NoopEventSink;
use homelab::MachinesConfig;

use crate::common::{CountingApprover, FakeConnector, FakeHost};

fn config() -> MachinesConfig {
    serde_yaml_ng::from_str(
        "machines:\n  nas:\n    hostname: nas.lan\n    user: ops\n    services: [web]\n",
    )
    .unwrap()
}

#[test]
fn undeploy_service_removes_only_its_files() {
    let host = FakeHost::new();
    host.deploy("web.container", "a")
        .deploy("web-data.volume", "b")
        .deploy("db.container", "c");
    host.run_service("web").run_service("db");
    let (approver, asked) = CountingApprover::new(true);

    let use_case = UndeployUseCase::new(config(), FakeConnector::new(&host), Box::new(approver));
    let options = UndeployOptions {
        service: Some("web".into()),
        ..Default::default()
    };
    let outcome = use_case
        .execute("nas", &options, Arc::new(NoopEventSink))
        .unwrap();

    assert_eq!(asked.get(), 1);
    assert_eq!(outcome.summary().unwrap().removed, vec!["web".to_string()]);
    assert_eq!(host.filenames(), vec!["db.container".to_string()]);
    assert!(host.is_running("db"));
    assert!(!host.is_running("web"));
}

#[test]
fn unreachable_host_is_a_connection_error() {
    let host = FakeHost::new();
    let mut connector = FakeConnector::new(&host);
    connector.reachable = false;
    let (approver, _) = CountingApprover::new(true);

    let use_case = UndeployUseCase::new(config(), connector, Box::new(approver));
    let err = use_case
        .execute("nas", &UndeployOptions::default(), Arc::new(NoopEventSink))
        .unwrap_err();

    assert!(err.to_string().contains("nas.lan"), "{}", err);
}

#[test]
fn nothing_deployed_is_in_sync() {
    let host = FakeHost::new();
    let (approver, asked) = CountingApprover::new(true);

    let use_case = UndeployUseCase::new(config(), FakeConnector::new(&host), Box::new(approver));
    let outcome = use_case
        .execute("nas", &UndeployOptions::default(), Arc::new(NoopEventSink))
        .unwrap();

    assert_eq!(outcome, SyncOutcome::InSync);
    assert_eq!(asked.get(), 0);
}
