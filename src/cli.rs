use clap::builder::FalseyValueParser;
use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let file_name_help = concat!(
        "File of expressions to evaluate, one per line. Can be:\n\n",
        "1. a path to a file\n",
        "2. a single dash to read from stdin\n",
    );
    let file_name_arg = Arg::new("FILE_NAME")
        .index(1)
        .required(false)
        .conflicts_with("code")
        .help(file_name_help);

    let code_arg = Arg::new("code")
        .short('c')
        .long("code")
        .required(false)
        .num_args(1)
        .allow_hyphen_values(true)
        .help("Evaluate a single expression and print its value");

    let tokens_arg = Arg::new("tokens")
        .short('t')
        .long("tokens")
        .action(ArgAction::SetTrue)
        .help("Print tokens before evaluating?");

    let history_path_arg = Arg::new("history_path")
        .long("history-path")
        .required(false)
        .num_args(1)
        .help("Path to REPL history file [default: ~/.config/intcalc/repl-history]");

    let no_history_arg = Arg::new("no_history")
        .long("no-history")
        .action(ArgAction::SetTrue)
        .help("Disable REPL history? [default: history enabled]");

    Command::new("intcalc")
        .version("0.0.0")
        .about("Evaluate integer expressions")
        .arg(
            Arg::new("max_depth")
                .short('x')
                .long("max-depth")
                .default_value("256")
                .value_parser(value_parser!(usize))
                .env("INTCALC_MAX_DEPTH")
                .help("Maximum expression nesting depth"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("INTCALC_DEBUG")
                .help("Enable debug logging?"),
        )
        .arg(file_name_arg)
        .arg(code_arg)
        .arg(tokens_arg)
        .arg(history_path_arg)
        .arg(no_history_arg)
}
