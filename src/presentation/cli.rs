//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --root, --config) are inherited by all subcommands
//! - Confirmation is interactive unless `--yes` is given or stdin is piped

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// homelab - reconcile Podman Quadlet units on remote machines
#[derive(Parser, Debug)]
#[command(name = "homelab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (default: $HOMELAB_ROOT or the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Machines file (default: <root>/machines/machines.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile a machine with its configured services
    Sync {
        /// Machine name from machines.yaml
        #[arg(required_unless_present = "all")]
        machine: Option<String>,

        /// Sync every configured machine
        #[arg(long, conflicts_with_all = ["machine", "service"])]
        all: bool,

        /// Apply without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Re-deploy units even when their files are unchanged
        #[arg(short, long)]
        force: bool,

        /// Show the plan without changing anything
        #[arg(short, long)]
        dry_run: bool,

        /// Only consider this service
        #[arg(short, long, value_name = "NAME")]
        service: Option<String>,
    },

    /// Show supervisor state of deployed services
    Status {
        /// Machine name from machines.yaml
        machine: String,

        /// Show container metrics (CPU, memory, network)
        #[arg(short, long)]
        metrics: bool,
    },

    /// Remove deployed services from a machine
    Undeploy {
        /// Machine name from machines.yaml
        machine: String,

        /// Only remove this service
        #[arg(short, long, value_name = "NAME")]
        service: Option<String>,

        /// Remove without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Show what would be removed
        #[arg(short, long)]
        dry_run: bool,
    },

    /// List configured machines
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_sync() {
        let cli = Cli::try_parse_from(["homelab", "sync", "nas"]).unwrap();
        if let Commands::Sync {
            machine,
            all,
            yes,
            force,
            dry_run,
            service,
        } = cli.command
        {
            assert_eq!(machine.as_deref(), Some("nas"));
            assert!(!all);
            assert!(!yes);
            assert!(!force);
            assert!(!dry_run);
            assert!(service.is_none());
        } else {
            panic!("Expected Sync command");
        }
    }

    #[test]
    fn test_cli_parse_sync_short_flags() {
        let cli = Cli::try_parse_from(["homelab", "sync", "nas", "-y", "-f", "-d", "-s", "web"])
            .unwrap();
        if let Commands::Sync {
            yes,
            force,
            dry_run,
            service,
            ..
        } = cli.command
        {
            assert!(yes);
            assert!(force);
            assert!(dry_run);
            assert_eq!(service.as_deref(), Some("web"));
        } else {
            panic!("Expected Sync command");
        }
    }

    #[test]
    fn test_cli_parse_sync_all() {
        let cli = Cli::try_parse_from(["homelab", "sync", "--all"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Sync {
                all: true,
                machine: None,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_sync_requires_machine_or_all() {
        assert!(Cli::try_parse_from(["homelab", "sync"]).is_err());
    }

    #[test]
    fn test_cli_sync_all_machine_conflict() {
        assert!(Cli::try_parse_from(["homelab", "sync", "nas", "--all"]).is_err());
    }

    #[test]
    fn test_cli_sync_all_service_conflict() {
        assert!(Cli::try_parse_from(["homelab", "sync", "--all", "-s", "web"]).is_err());
    }

    #[test]
    fn test_cli_parse_undeploy() {
        let cli = Cli::try_parse_from(["homelab", "undeploy", "nas", "-s", "web", "-d"]).unwrap();
        if let Commands::Undeploy {
            machine,
            service,
            yes,
            dry_run,
        } = cli.command
        {
            assert_eq!(machine, "nas");
            assert_eq!(service.as_deref(), Some("web"));
            assert!(!yes);
            assert!(dry_run);
        } else {
            panic!("Expected Undeploy command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "homelab", "status", "nas", "--json", "-vv", "--root", "/srv/lab",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.root, Some(PathBuf::from("/srv/lab")));
        assert!(matches!(cli.command, Commands::Status { .. }));
    }

    #[test]
    fn test_cli_status_metrics_flag() {
        let cli = Cli::try_parse_from(["homelab", "status", "nas", "-m"]).unwrap();
        match cli.command {
            Commands::Status { machine, metrics } => {
                assert_eq!(machine, "nas");
                assert!(metrics);
            }
            other => panic!("expected status, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["homelab", "--color", "never", "list"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }
}
