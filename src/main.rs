use skill_links::cli;
use skill_links::init_locale;

fn main() {
    init_locale();

    if let Err(e) = cli::run() {
        cli::exit_with_error(e);
    }
}
