use std::process;

use env_logger::Env;
use log::LevelFilter;

use intcalc::cli::build_cli;
use intcalc::config::Config;
use intcalc::{repl, run};

fn main() {
    let matches = build_cli().get_matches();
    let config = Config::from_matches(&matches);

    init_logging(config.debug);
    log::debug!("{config:?}");

    let result = if let Some(code) = matches.get_one::<String>("code") {
        run::run_code(code, &config)
    } else if let Some(file_name) = matches.get_one::<String>("FILE_NAME") {
        run::run_file(file_name, &config)
    } else {
        repl::run(&config)
    };

    match result {
        Ok(code) => process::exit(code as i32),
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code() as i32);
        }
    }
}

/// Log level comes from RUST_LOG (warn by default). Debug mode turns on
/// everything this crate logs.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("intcalc", LevelFilter::Trace);
    }
    builder.init();
}
