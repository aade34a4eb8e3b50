use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "favicon-gen")]
#[command(about = "Generate the branded favicon set (32px and 16px PNG plus ICO)")]
struct Cli {
    /// Destination for the 32x32 favicon PNG; derived artifacts are
    /// written next to it
    #[arg(short, long, default_value = "public/img/favicon.png")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = favicon_gen::generate(&cli.output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
