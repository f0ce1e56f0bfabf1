use clap::Parser;
use log::debug;
use std::ffi::OsString;

/// Every argument, flags included, is accepted and ignored.
#[derive(Parser, Debug)]
#[command(
    name = "hello",
    about = "Print the greeting.",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("Parsed: {cli:?}");

    let args: Vec<String> = cli
        .args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    hello_world::main(&args)?;

    Ok(())
}
