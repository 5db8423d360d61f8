use clap::Parser;

use commits_assistant::{
    cli::{Cli, run},
    errors::Result,
    logging,
    utils::print_error,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(error) = inner_main(cli) {
        print_error(
            "Commits assistant aborted",
            &error.to_string(),
            error.suggestion(),
        );
        std::process::exit(1);
    }
}

fn inner_main(cli: Cli) -> Result<()> {
    run(cli)?;

    Ok(())
}
