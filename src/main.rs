//! lazylog inspection tool.
//!
//! Shows how the facade would name a logger for a Rust type and which levels
//! a configuration enables for a logger name.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lazylog::naming::erase_type_name;
use lazylog::{Config, Level, LoggerName};

#[derive(Parser)]
#[command(name = "lazylog")]
#[command(about = "Inspect logger naming and level configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the logger name for a Rust type path
    Name {
        /// Type path as printed by `std::any::type_name`, e.g. `app::Wrapper<u32>`
        type_path: String,
    },

    /// Print which levels are enabled for a logger name
    Check {
        /// Dotted logger name, e.g. `app.db.Pool`
        logger: String,

        /// Configuration file
        #[arg(short, long, default_value = "lazylog.toml", env = "LAZYLOG_CONFIG")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Name { type_path } => {
            match erase_type_name(&type_path) {
                Some(erased) => {
                    println!("{}", LoggerName::new(erased.path));
                    if erased.higher_kinded {
                        eprintln!("note: generic arguments are generic; named by enclosing scopes");
                    }
                }
                None => {
                    println!("{}", LoggerName::new(&type_path));
                    eprintln!("note: not a plain type path; named verbatim");
                }
            }
        }
        Commands::Check { logger, config } => {
            let config = if config.exists() {
                Config::from_file(&config)?
            } else {
                eprintln!("{} not found, using defaults", config.display());
                Config::default()
            };

            let directives = config.directives();
            let name = LoggerName::new(logger);
            println!("{} (threshold {})", name, directives.threshold(&name));
            for level in Level::ALL {
                let state = if directives.enabled(&name, level) {
                    "enabled"
                } else {
                    "disabled"
                };
                println!("  {level:<5} {state}");
            }
        }
    }

    Ok(())
}
