use clap::Parser;
use std::path::PathBuf;

/// Generate a TextMate theme from a comma-separated theme description.
///
/// Without --build, writes a preview `.plist` next to the input file.
/// With --build, installs the theme into `<name>.tmbundle` under the bundles
/// directory, creating the bundle when needed.
#[derive(Parser, Debug)]
#[command(name = "gentheme", version)]
pub struct Cli {
    /// Theme description file (`.tmcsv` is appended when missing)
    pub input: String,

    /// Install the theme into its bundle
    #[arg(short = 'b', long, overrides_with = "no_build")]
    pub build: bool,

    /// Only write the preview `.plist` (default)
    #[arg(long, overrides_with = "build")]
    pub no_build: bool,

    /// Directory holding installed bundles
    /// [default: ~/Library/Application Support/TextMate/Bundles]
    #[arg(long, env = "GENTHEME_BUNDLES_DIR", value_name = "DIR")]
    pub bundles_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
