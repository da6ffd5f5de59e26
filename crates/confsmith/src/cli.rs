//! Clap derive structures for the `confsmith` CLI.
//!
//! Defines the command tree, global flags, and shared enums. This module
//! must only depend on clap + clap_complete — build.rs includes it
//! directly to generate man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// confsmith -- assemble and submit router configuration requests
#[derive(Debug, Parser)]
#[command(
    name = "confsmith",
    version,
    about = "Generate router configurations from declarative form files",
    long_about = "Describe a router's intended configuration (interfaces, routing,\n\
        telephony, security, DHCP) in a TOML form file, validate it, and\n\
        submit it to a generator service that returns the device\n\
        configuration text.",
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
    /// Generator endpoint URL (overrides the config file)
    #[arg(long, short = 'e', env = "CONFSMITH_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, env = "CONFSMITH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Accept self-signed TLS certificates from the generator
    #[arg(long, short = 'k', env = "CONFSMITH_INSECURE", global = true)]
    pub insecure: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "CONFSMITH_OUTPUT",
        default_value = "text",
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default, interactive)
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
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
    /// Validate a form file, assemble the request, and submit it
    #[command(alias = "gen", alias = "g")]
    Generate(GenerateArgs),

    /// Validate a form file without submitting anything
    #[command(alias = "check")]
    Validate(ValidateArgs),

    /// Write a sample form file with typical test values
    Sample(SampleArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── GENERATE ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Path to the TOML form file
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// Assemble and print the request without calling the generator
    #[arg(long)]
    pub dry_run: bool,
}

// ── VALIDATE ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the TOML form file
    #[arg(value_name = "FORM")]
    pub form: PathBuf,
}

// ── SAMPLE ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Write to this path instead of stdout
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

// ── CONFIG ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with default settings
    Init,

    /// Display the current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── COMPLETIONS ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
