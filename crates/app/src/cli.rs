//! Command-line interface.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use varfilter_application::filter::{BUILTIN_NAMES, expand_detailed};
use varfilter_application::ports::{HostEnvironment, Package};
use varfilter_application::{ApplicationError, FilterEngine, UnresolvedPolicy};
use varfilter_domain::render;
use varfilter_infrastructure::{
    ENV_CONFIG_PREFIX, EnvHandler, FileConfigStore, SystemHost, TOOL_NAME,
    load_package_manifest,
};

/// Handler name under which `env:NAME` lookups are registered.
const ENV_HANDLER: &str = "env";

/// Expand `${name}` placeholders from configuration, host and package values.
#[derive(Debug, Parser)]
#[command(name = "varfilter", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Expand each template argument (or each stdin line) and print it.
    Expand(ExpandArgs),
    /// Print the built-in variables and their current values.
    Vars(SourceArgs),
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Extra configuration file, applied after the global and project files.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Project root (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// Per-user configuration directory.
    #[arg(long, value_name = "DIR")]
    global_dir: Option<PathBuf>,

    /// Value of `${scriptdir}` (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    script_dir: Option<PathBuf>,

    /// Value of `${programdir}` (defaults to the executable's directory).
    #[arg(long, value_name = "DIR")]
    program_dir: Option<PathBuf>,

    /// Set a configuration value, overriding files and environment.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
    defines: Vec<(String, String)>,
}

#[derive(Debug, Args)]
struct ExpandArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Templates to expand.
    templates: Vec<String>,

    /// Read templates from stdin, one per line.
    #[arg(long)]
    stdin: bool,

    /// Package manifest whose `version` and `buildir` are made available.
    #[arg(long, value_name = "MANIFEST")]
    package: Option<PathBuf>,

    /// What to emit for a placeholder nothing resolves.
    #[arg(long, value_enum, default_value_t = Unresolved::Keep)]
    unresolved: Unresolved,

    /// Fail if any placeholder is left unresolved.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unresolved {
    /// Leave `${name}` in the output.
    Keep,
    /// Substitute nothing.
    Empty,
}

impl From<Unresolved> for UnresolvedPolicy {
    fn from(value: Unresolved) -> Self {
        match value {
            Unresolved::Keep => Self::Keep,
            Unresolved::Empty => Self::Empty,
        }
    }
}

fn parse_define(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

impl Cli {
    /// Default tracing filter for the requested verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Runs the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, a handler fails,
    /// or `--strict` finds unresolved placeholders.
    pub fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Expand(args) => run_expand(&args),
            Command::Vars(source) => run_vars(&source),
        }
    }
}

impl SourceArgs {
    fn host(&self) -> SystemHost {
        let mut host = SystemHost::new(TOOL_NAME);
        if let Some(dir) = &self.project_dir {
            host = host.with_project_dir(dir);
        }
        if let Some(dir) = &self.global_dir {
            host = host.with_global_dir(dir);
        }
        if let Some(dir) = &self.program_dir {
            host = host.with_program_dir(dir);
        }
        host.set_scriptdir(self.script_dir.clone());
        host
    }

    fn engine(&self, policy: UnresolvedPolicy) -> anyhow::Result<FilterEngine> {
        let host = self.host();
        let mut builder = FileConfigStore::layered(
            &host.globaldir()?,
            &host.configdir()?,
            self.config.as_deref(),
            ENV_CONFIG_PREFIX,
        );
        for (key, value) in &self.defines {
            builder = builder
                .define(key, value)
                .with_context(|| format!("invalid definition for `{key}`"))?;
        }
        let config = builder.build().context("failed to load configuration")?;

        let mut engine =
            FilterEngine::standard(Arc::new(config), Arc::new(host)).with_policy(policy);
        engine.register(ENV_HANDLER, Some(Arc::new(EnvHandler::new())));
        tracing::info!(handlers = ?engine.handlers(), "filter engine ready");
        Ok(engine)
    }
}

fn run_expand(args: &ExpandArgs) -> anyhow::Result<ExitCode> {
    let engine = args.source.engine(args.unresolved.into())?;
    let package = match &args.package {
        Some(path) => {
            let info = load_package_manifest(path)
                .with_context(|| format!("failed to load package {}", path.display()))?;
            Some(Arc::new(info) as Arc<dyn Package>)
        }
        None => None,
    };
    let handlers = engine.handlers_for(package);

    let templates = if args.stdin || args.templates.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("failed to read stdin")?
    } else {
        args.templates.clone()
    };

    let mut unresolved: Vec<String> = Vec::new();
    let mut out = io::stdout().lock();
    for template in &templates {
        let result = expand_detailed(template, &handlers, engine.policy())?;
        writeln!(out, "{}", result.expanded)?;
        for name in result.unresolved {
            if !unresolved.contains(&name) {
                unresolved.push(name);
            }
        }
    }
    out.flush()?;

    if args.strict && !unresolved.is_empty() {
        return Err(ApplicationError::Unresolved(unresolved).into());
    }
    Ok(ExitCode::SUCCESS)
}

fn run_vars(source: &SourceArgs) -> anyhow::Result<ExitCode> {
    let engine = source.engine(UnresolvedPolicy::Keep)?;
    let mut out = io::stdout().lock();
    for name in BUILTIN_NAMES {
        let value = engine.handlers().resolve(name)?;
        let text = value.as_ref().and_then(render).unwrap_or_default();
        writeln!(out, "{name}\t{text}")?;
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
