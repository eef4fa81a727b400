//! Command handlers
//!
//! Each handler loads the project once, builds its use case through the
//! presentation factory and renders the result.

pub mod list;
pub mod status;
pub mod sync;
pub mod undeploy;

use std::sync::Arc;

use anyhow::Result;
use homelab::config::{self, MachinesConfig, ProjectPaths};
use homelab::domain::ports::{FanoutEventSink, SyncEventSink};
use homelab::domain::value_objects::is_unit_dir_name;
use homelab::infrastructure::{JsonEventSink, LogEventSink};
use homelab::presentation::{Cli, Commands};
use homelab::HomelabError;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Resolved paths and the machines file, loaded once per invocation
pub struct Project {
    pub paths: ProjectPaths,
    pub config: MachinesConfig,
}

impl Project {
    pub fn load(cli: &Cli, ui: &UiContext) -> Result<Self> {
        let paths = ProjectPaths::resolve(cli.root.as_deref(), cli.config.as_deref());
        log::debug!(
            "project root {}, machines file {}",
            paths.root().display(),
            paths.machines_file().display()
        );
        let (config, warnings) = config::load_with_warnings(paths.machines_file())?;
        if ui.json {
            for w in &warnings {
                let _ = crate::ui::json::emit(serde_json::json!({
                    "event": "config_warning",
                    "key": w.path,
                    "line": w.line,
                    "suggestion": w.suggestion,
                }));
            }
        } else {
            print_config_warnings(paths.machines_file(), &warnings, ui.unicode);
        }
        Ok(Self { paths, config })
    }
}

/// Reject `--service` values that would resolve outside `services/`
pub fn check_service_arg(service: Option<&str>) -> Result<()> {
    match service {
        Some(name) if !is_unit_dir_name(name) => Err(HomelabError::Usage(format!(
            "invalid service name '{}': expected a directory name under services/",
            name
        ))
        .into()),
        _ => Ok(()),
    }
}

/// Event sink for a sync-like command
pub fn event_sink(
    ui: &UiContext,
    command: &'static str,
    title: &'static str,
) -> Arc<dyn SyncEventSink> {
    let primary: Arc<dyn SyncEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::new(*ui, title))
    };
    if ui.mirrors_events_to_log() {
        Arc::new(FanoutEventSink::new(vec![primary, Arc::new(LogEventSink)]))
    } else {
        primary
    }
}

pub fn dispatch(cli: &Cli, ui: &UiContext) -> Result<()> {
    let project = Project::load(cli, ui)?;
    match &cli.command {
        Commands::Sync {
            machine,
            all,
            yes,
            force,
            dry_run,
            service,
        } => sync::cmd_sync(
            project,
            sync::SyncArgs {
                machine: machine.clone(),
                all: *all,
                yes: *yes,
                force: *force,
                dry_run: *dry_run,
                service: service.clone(),
            },
            ui,
        ),
        Commands::Status { machine, metrics } => {
            status::cmd_status(project, machine, *metrics, ui)
        }
        Commands::Undeploy {
            machine,
            service,
            yes,
            dry_run,
        } => undeploy::cmd_undeploy(project, machine, service.clone(), *yes, *dry_run, ui),
        Commands::List => list::cmd_list(&project, ui),
    }
}
