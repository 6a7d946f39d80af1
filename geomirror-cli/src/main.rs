//! GeoMirror CLI - command-line interface
//!
//! This binary provides a command-line interface to the GeoMirror library:
//! argument parsing and dispatch here, one handler module per subcommand,
//! rendering in [`output`]. The engine itself never prints and never exits
//! the process; both responsibilities live in this crate.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use geomirror::model::CrsSelection;

mod commands;
mod error;
mod output;
mod runner;

use commands::add::AddArgs;
use runner::GlobalArgs;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CollectionArg {
    /// WGS84 lon/lat records
    Primary,
    /// Web Mercator x/y records
    Mercator,
    /// Both collections
    Both,
}

impl From<CollectionArg> for CrsSelection {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::Primary => CrsSelection::Primary,
            CollectionArg::Mercator => CrsSelection::Mirror,
            CollectionArg::Both => CrsSelection::Both,
        }
    }
}

#[derive(Parser)]
#[command(name = "geomirror")]
#[command(version = geomirror::VERSION)]
#[command(about = "Maintain points in WGS84 and Web Mercator, kept in lockstep", long_about = None)]
struct Cli {
    /// Database file (overrides the config file setting)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create both point tables, discarding any existing data
    Init,
    /// Add a point; its Web Mercator mirror is written in the same transaction
    Add {
        /// Point label (free text, quoted if it contains spaces)
        name: String,
        /// Longitude in degrees (-180 to 180)
        lon: f64,
        /// Latitude in degrees (-85.05112878 to 85.05112878, exclusive)
        lat: f64,
    },
    /// List stored points
    List {
        /// Which collection to list
        #[arg(value_enum)]
        which: Option<CollectionArg>,
    },
    /// Look up a WGS84 point by id and project it freshly
    Transform {
        /// Primary record id
        id: i64,
    },
    /// Run a full demonstration sequence against a fresh store
    Demo,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        database: cli.database,
        debug: cli.debug,
    };

    let result = match cli.command {
        Commands::Init => commands::init::run(&global),
        Commands::Add { name, lon, lat } => {
            commands::add::run(&global, AddArgs { name, lon, lat })
        }
        Commands::List { which } => {
            let selection = which.unwrap_or(CollectionArg::Both).into();
            commands::list::run(&global, selection)
        }
        Commands::Transform { id } => commands::transform::run(&global, id),
        Commands::Demo => commands::demo::run(&global),
    };

    if let Err(e) = result {
        e.exit();
    }
}
