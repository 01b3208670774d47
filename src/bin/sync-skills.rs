use clap::Parser;
use skill_links::cli::{self, SyncSkillsCli};
use skill_links::config::Context;
use skill_links::init_locale;

fn main() {
    init_locale();

    let parsed = SyncSkillsCli::parse();
    let result = Context::from_env()
        .map_err(anyhow::Error::from)
        .and_then(|ctx| cli::run_sync_skills(&parsed.args, &ctx));
    if let Err(e) = result {
        cli::exit_with_error(e);
    }
}
