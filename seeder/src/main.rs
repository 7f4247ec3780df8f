//! Bulk issue seeder.
//!
//! Creates one tracker issue per catalog task (`--token`), exports the
//! rendered catalog as JSON (`--export`), or previews the plan (`--dry-run`).

use clap::Parser;
use seeder::cli::{self, Cli};
use seeder::{exit_codes, logging};

fn main() {
    logging::init();
    let code = match cli::run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}
