use clap::Parser;
use jerseykraft::cli::Cli;
use jerseykraft::commands::handle_commands;
use jerseykraft::services::output::print_failure;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = handle_commands(&cli) {
        print_failure(cli.json, &err);
        std::process::exit(1);
    }
}
