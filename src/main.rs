use std::process;

use clap::{Parser, Subcommand};
use gda_rs::{DEFAULT_LEVELS, approx_cell_size_meters, decode_address, encode_address};

#[derive(Parser, Debug)]
#[command(name = "gda")]
#[command(version)]
#[command(about = "Encode and decode global digital address codes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a latitude/longitude pair into a digital address code
    Encode {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Code length in symbols
        #[arg(long, default_value_t = DEFAULT_LEVELS)]
        levels: u8,
    },
    /// Decode a code back to the latitude/longitude of its cell center
    Decode { code: String },
    /// Print the approximate cell size in meters at a given level
    Size { levels: i32 },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode { lat, lon, levels } => {
            encode_address(lat, lon, levels).map(|code| println!("{}", code))
        }
        Commands::Decode { code } => decode_address(&code)
            .map(|center| println!("{:.8} {:.8}", center.latitude, center.longitude)),
        Commands::Size { levels } => {
            println!("{:.6}", approx_cell_size_meters(levels));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
