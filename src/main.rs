use clap::Parser;
use console::{Term, style};
use log::error;
use std::io;
use std::process::ExitCode;
use yi_rename::cli::Args;
use yi_rename::component::RecordingRenamer;
use yi_rename::init;
use yi_rename::menu::run_interactive;
use yi_rename::signal::setup_shutdown_signal;

fn main() -> ExitCode {
    init::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Program error: {e:#}");
            eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let shutdown_signal = setup_shutdown_signal()?;
    let options = args.rename_options();

    if args.interactive {
        return run_interactive(&Term::stdout(), &shutdown_signal, &options);
    }

    let renamer = RecordingRenamer::new(options).with_shutdown_signal(shutdown_signal);
    renamer.run(&mut io::stdout().lock())?;
    Ok(())
}
