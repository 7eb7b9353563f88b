mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    let config_path = args.config.as_deref();

    let result = match &args.command {
        Commands::Keygen {
            public_key_out,
            private_key_out,
        } => cli::commands::keygen::execute(public_key_out, private_key_out),
        Commands::Showversion { file } => cli::commands::showversion::execute(file),
        Commands::Sign {
            input,
            output,
            private_key_file,
            version,
        } => cli::commands::sign::execute(input, output, private_key_file, version),
        Commands::Verifysig { file } => cli::commands::verifysig::execute(file, config_path),
        Commands::Verifyupdate { file, current } => {
            cli::commands::verifyupdate::execute(file, current.as_deref())
        }
        Commands::Verifyversion { file } => cli::commands::verifyversion::execute(file),
        Commands::Extract {
            file,
            output,
            current,
            unchecked,
        } => cli::commands::extract::execute(
            file,
            output,
            current.as_deref(),
            *unchecked,
            config_path,
        ),
        Commands::Keys { action } => cli::commands::keys::execute(action, config_path),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
