use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const DADO_AUTHOR: &str = crate_authors!();
const DADO_VERSION: &str = crate_version!();
const DADO_ABOUT: &str = crate_description!();
const DADO_FLAG_D_SHORT: char = 'd';
const DADO_FLAG_D_HELP: &str = "Enable Debug logging";
const DADO_FLAG_P_SHORT: char = 'p';
const DADO_FLAG_P_HELP: &str = "Command prefix sigil";
const DADO_PREFIX_SIGIL: &str = "!";

#[derive(Parser, Debug)]
#[command(author = DADO_AUTHOR, version = DADO_VERSION, about = DADO_ABOUT)]
pub struct Args {
    #[arg(short = DADO_FLAG_D_SHORT, long, help = DADO_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = DADO_FLAG_P_SHORT, long, help = DADO_FLAG_P_HELP, default_value = DADO_PREFIX_SIGIL)]
    pub prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_test() {
        let args = Args::parse_from(["dado-discord"]);
        assert_eq!("!", args.prefix);
        assert!(!args.debug);
    }

    #[test]
    fn custom_prefix_test() {
        let args = Args::parse_from(["dado-discord", "-d", "--prefix", "/"]);
        assert_eq!("/", args.prefix);
        assert!(args.debug);
    }
}
