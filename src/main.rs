use clap::Parser;
use openwallet::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Open {
            ref file,
            ref password,
            pretty,
        } => openwallet::cli::commands::open::execute(file, password.as_deref(), pretty),
        Commands::Inspect { ref file } => openwallet::cli::commands::inspect::execute(file),
    };

    if let Err(e) = result {
        openwallet::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
