use std::error::Error;

use clap::Parser;

/// Shows the dashboard wall clock in Indian Standard Time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print a single tick instead of updating every second
    #[arg(long)]
    once: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    loop {
        println!("{}", footprint::now_ist()?);
        if cli.once {
            break;
        }
        std::thread::sleep(std::time::Duration::from_secs(1));
    }
    Ok(())
}
