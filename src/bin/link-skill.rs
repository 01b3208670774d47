use clap::Parser;
use skill_links::cli::{self, LinkSkillCli};
use skill_links::config::Context;
use skill_links::init_locale;

fn main() {
    init_locale();

    let parsed = LinkSkillCli::parse();
    let result = Context::from_env()
        .map_err(anyhow::Error::from)
        .and_then(|ctx| cli::run_link_skill(&parsed.args, &ctx));
    if let Err(e) = result {
        cli::exit_with_error(e);
    }
}
