/// huffman options - command line args read and parsed with the CLAP crate
use clap::Parser;
use log::info;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds Huffman codes from observed byte frequencies.",
    long_about = "
    Scans a file, counts how often each byte value occurs, and builds the
    optimal prefix-free binary code for that distribution with the classic
    greedy tree merge.

    It is done in the spirit of learning, both learning Rust and learning
    compression techniques."
)]
pub struct Args {
    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,

    #[clap(subcommand)]
    pub command: Command,
}

/// The two operations offered on the command line
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub enum Command {
    /// Show the char table and code of each symbol in a file
    Stat {
        /// Filename of file to process
        filename: String,
    },
    /// Encode a file into <FILE>.huf using its own frequencies
    Encode {
        /// Filename of file to process
        filename: String,
    },
}

/// Parse the command line and set the log level from the -v flag.
pub fn args_init() -> Args {
    let args = Args::parse();

    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("Verbosity set to {}", log::max_level());
    args
}
