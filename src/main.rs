//! gentheme — build a TextMate theme (and its bundle) from a `.tmcsv` file.
//!
//! - **preview** (default): `gentheme night` writes `night.plist` beside `night.tmcsv`
//! - **build**: `gentheme -b night` installs `Night.tmbundle/Themes/Night.tmTheme`

use anyhow::Result;
use clap::Parser;
use gentheme::cli::Cli;
use gentheme::config::Config;
use gentheme::ident::UuidGenerator;
use gentheme::Outcome;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_cli(&cli)?;

    match gentheme::run(&config, &UuidGenerator)? {
        Outcome::Preview(path) => println!("Wrote {}", path.display()),
        Outcome::Installed(report) => {
            let name = report.layout.theme_name();
            if report.created {
                println!("Creating {}...", report.layout.root().display());
                println!("Created Bundle {}.tmbundle", name);
            }
            println!("Updated embedded theme {}.tmTheme", name);
        }
    }
    Ok(())
}

/// Log to stderr. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "gentheme=warn",
        1 => "gentheme=info",
        2 => "gentheme=debug",
        _ => "gentheme=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
