use crate::config::{Context, project_targets};
use crate::error::SkillLinksError;
use crate::path_utils::{resolve_against, validate_path_str};
use crate::skills::{LinkOptions, MirrorOptions, MirrorStrategy, infer_base, link_skill, mirror};
use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

const LINK_SKILL_USAGE: &str = "link-skill <path-to-skill>";
const LINK_SKILL_EXAMPLE: &str = "link-skill common/.agents/skills/browser-use";
const SYNC_SKILLS_USAGE: &str = "sync-skills <path-to-skills-dir>";
const SYNC_SKILLS_EXAMPLE: &str = "sync-skills common/.agents/skills";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Link one skill into common/.agent/skills and common/.claude/skills
    #[command(alias = "link-skill")]
    Link(LinkSkillArgs),
    /// Mirror every skill of a .agents/skills directory into its project's tool directories
    #[command(alias = "sync-skills")]
    Sync(SyncSkillsArgs),
    /// Mirror ~/.agents/skills into the global Claude and Gemini skill directories
    #[command(alias = "sync-global-skills")]
    SyncGlobal(SyncGlobalArgs),
}

/// Standalone `link-skill` entry point.
#[derive(Parser)]
#[command(
    name = "link-skill",
    version,
    about = "Link one skill into the common tool directories"
)]
pub struct LinkSkillCli {
    #[command(flatten)]
    pub args: LinkSkillArgs,
}

/// Standalone `sync-skills` entry point.
#[derive(Parser)]
#[command(
    name = "sync-skills",
    version,
    about = "Mirror a skills directory into .agent and .claude"
)]
pub struct SyncSkillsCli {
    #[command(flatten)]
    pub args: SyncSkillsArgs,
}

/// Standalone `sync-global-skills` entry point.
#[derive(Parser)]
#[command(
    name = "sync-global-skills",
    version,
    about = "Mirror ~/.agents/skills into global tool directories"
)]
pub struct SyncGlobalCli {
    #[command(flatten)]
    pub args: SyncGlobalArgs,
}

#[derive(Args, Debug, Clone)]
pub struct LinkSkillArgs {
    /// Skill directory (or file) to link, relative to the current directory
    #[arg(value_name = "PATH_TO_SKILL")]
    pub path: Option<PathBuf>,

    /// Print what would change without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SyncSkillsArgs {
    /// Directory whose subdirectories are the skills, e.g. common/.agents/skills
    #[arg(value_name = "PATH_TO_SKILLS_DIR")]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub mirror: MirrorArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SyncGlobalArgs {
    #[command(flatten)]
    pub mirror: MirrorArgs,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct MirrorArgs {
    /// Print what would change without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Build the new links next to each target and rename them into place
    #[arg(long)]
    pub staged: bool,
}

impl From<MirrorArgs> for MirrorOptions {
    fn from(value: MirrorArgs) -> Self {
        let strategy = if value.staged {
            MirrorStrategy::Staged
        } else {
            MirrorStrategy::ClearAndRecreate
        };
        MirrorOptions {
            strategy,
            dry_run: value.dry_run,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_env()?;
    match &cli.command {
        Commands::Link(args) => run_link_skill(args, &ctx),
        Commands::Sync(args) => run_sync_skills(args, &ctx),
        Commands::SyncGlobal(args) => run_sync_global(args, &ctx),
    }
}

pub fn run_link_skill(args: &LinkSkillArgs, ctx: &Context) -> Result<()> {
    let target = required_path(args.path.as_deref(), LINK_SKILL_USAGE, LINK_SKILL_EXAMPLE)?;
    let full_path = resolve_against(&ctx.cwd, target);
    if !full_path.exists() {
        return Err(SkillLinksError::PathNotFound { path: full_path }.into());
    }
    announce_dry_run(args.dry_run);

    let report = link_skill(
        &full_path,
        &ctx.link_targets(),
        LinkOptions {
            dry_run: args.dry_run,
        },
    )?;

    let failures = report.failure_count();
    if failures > 0 {
        return Err(anyhow!(t!("errors.link_failures", count = failures)));
    }
    println!("{}", t!("messages.done"));
    Ok(())
}

pub fn run_sync_skills(args: &SyncSkillsArgs, ctx: &Context) -> Result<()> {
    let target = required_path(args.path.as_deref(), SYNC_SKILLS_USAGE, SYNC_SKILLS_EXAMPLE)?;
    let full_path = resolve_against(&ctx.cwd, target);
    if !full_path.exists() {
        return Err(SkillLinksError::PathNotFound { path: full_path }.into());
    }

    let base = infer_base(&full_path, &ctx.cwd);
    if base.is_fallback() {
        println!("{}", t!("mirror.base_fallback"));
    }
    announce_dry_run(args.mirror.dry_run);
    println!("{}", t!("mirror.syncing", path = full_path.display()));

    mirror(&full_path, &project_targets(base.path()), args.mirror.into())?;
    println!("{}", t!("messages.done"));
    Ok(())
}

pub fn run_sync_global(args: &SyncGlobalArgs, ctx: &Context) -> Result<()> {
    let source = ctx.global_source();
    if !source.exists() {
        return Err(SkillLinksError::SourceNotFound { path: source }.into());
    }
    announce_dry_run(args.mirror.dry_run);
    println!("{}", t!("mirror.syncing_global", path = source.display()));
    println!();

    mirror(&source, &ctx.global_targets(), args.mirror.into())?;
    println!("{}", t!("messages.global_done"));
    Ok(())
}

/// Prints `err` the way every entry point reports failures and exits with 1.
pub fn exit_with_error(err: anyhow::Error) -> ! {
    match err.downcast_ref::<SkillLinksError>() {
        Some(usage) if matches!(usage, SkillLinksError::Usage { .. }) => {
            eprintln!("{}", usage.display_localized())
        }
        Some(known) => eprintln!(
            "{}",
            t!("messages.error", error = known.display_localized())
        ),
        None => eprintln!("{}", t!("messages.error", error = err)),
    }
    std::process::exit(1);
}

fn required_path<'a>(
    path: Option<&'a Path>,
    usage: &'static str,
    example: &'static str,
) -> Result<&'a Path, SkillLinksError> {
    match path {
        Some(path) if validate_path_str(&path.to_string_lossy()).is_ok() => Ok(path),
        _ => Err(SkillLinksError::Usage { usage, example }),
    }
}

fn announce_dry_run(dry_run: bool) {
    if dry_run {
        println!("{}", t!("messages.dry_run_enabled"));
    }
}
