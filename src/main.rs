use clap::Parser;

fn main() {
    let cli = persistence_profile::cli::Cli::parse();

    if let Err(err) = persistence_profile::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
