//! Clap derive structures for the `ryuboard` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ryuboard_api::ListType;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ryuboard -- operator console for the Ryu DDoS-detection controller
#[derive(Debug, Parser)]
#[command(
    name = "ryuboard",
    version,
    about = "Monitor DDoS alerts and manage MAC lists on a Ryu SDN controller",
    long_about = "Talks to the REST backend of the Ryu DDoS-detection app.\n\n\
        Shows alerts, traffic rates and topology, and edits the controller's\n\
        MAC whitelist and blacklist.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend API base URL, including the /api prefix (overrides config file)
    #[arg(long, short = 'u', env = "API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Config file path
    #[arg(long, env = "RYUBOARD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "RYUBOARD_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "RYUBOARD_INSECURE", global = true)]
    pub insecure: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "RYUBOARD_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current DDoS alerts and the blacklist they produced
    #[command(alias = "a")]
    Alerts,

    /// Show the recent traffic-rate history
    #[command(alias = "stats")]
    Traffic,

    /// Inspect the discovered network topology
    #[command(alias = "topo", alias = "t")]
    Topology(TopologyArgs),

    /// Show and edit the MAC whitelist / blacklist
    #[command(alias = "l")]
    Lists(ListsArgs),

    /// Inspect the dashboard route table
    Routes(RoutesArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Topology ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TopologyArgs {
    #[command(subcommand)]
    pub command: TopologyCommand,
}

#[derive(Debug, Subcommand)]
pub enum TopologyCommand {
    /// List OpenFlow switches
    #[command(alias = "sw")]
    Switches,
    /// List inter-switch links
    Links,
    /// List hosts attached at edge ports
    Hosts,
}

// ── Lists ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListsArgs {
    #[command(subcommand)]
    pub command: ListsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ListsCommand {
    /// Show both lists
    #[command(alias = "ls")]
    Show,

    /// Add a MAC address to a list
    Add {
        /// Target list
        list: ListKind,
        /// MAC address (sent as given)
        mac: String,
    },

    /// Remove a MAC address from a list
    #[command(alias = "rm")]
    Remove {
        /// Target list
        list: ListKind,
        /// MAC address (sent as given)
        mac: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListKind {
    /// Always-allowed MACs (exempt from detection)
    #[value(alias = "allow")]
    Whitelist,
    /// Blocked MACs
    #[value(alias = "deny")]
    Blacklist,
}

impl From<ListKind> for ListType {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Whitelist => Self::Whitelist,
            ListKind::Blacklist => Self::Blacklist,
        }
    }
}

// ── Routes ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoutesArgs {
    #[command(subcommand)]
    pub command: RoutesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoutesCommand {
    /// List all dashboard routes
    #[command(alias = "ls")]
    List,

    /// Resolve a browser path to its view
    Resolve {
        /// Path as shown in the address bar (e.g. /lists)
        path: String,
    },

    /// Print the path of a named route
    Href {
        /// Route name (e.g. Lists)
        name: String,
    },

    /// Replay a navigation sequence and print each transition
    ///
    /// Each step is a route name, a path starting with '/', or one of
    /// 'back' / 'forward'.
    Walk {
        /// Path the browser starts on
        #[arg(long, default_value = "/")]
        from: String,

        /// Navigation steps
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (defaults, file, env, flags)
    Show,

    /// Print the config file path
    Path,

    /// Write a config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
