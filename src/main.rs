use std::path::PathBuf;

use clap::Parser;

use postproc::config::{defaults, RunnerConfig};
use postproc::{Error, PostProcessor, Result, RunReport, SystemRunner};

mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "postproc")]
#[command(version = VERSION)]
#[command(about = "Post-processing pipeline for monorepo libraries")]
struct Cli {
    /// Library directory to post-process
    library_dir: String,

    /// Hook script file name inside the library directory
    #[arg(long, default_value = defaults::HOOK_SCRIPT)]
    hook_script: String,

    /// Partials file name inside the library directory
    #[arg(long, default_value = defaults::PARTIALS_FILE)]
    partials_file: String,

    /// Fix command run inside the library directory
    #[arg(long, default_value = defaults::FIX_COMMAND)]
    fix_command: String,
}

fn resolve_library_dir(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(raw).to_string();
    let path = PathBuf::from(expanded);

    if !path.is_dir() {
        return Err(Error::LibraryNotFound(path.display().to_string()));
    }

    Ok(path)
}

fn run(cli: Cli) -> Result<RunReport> {
    let library_dir = resolve_library_dir(&cli.library_dir)?;

    let config = RunnerConfig {
        hook_script: cli.hook_script,
        partials_file: cli.partials_file,
        fix_command: cli.fix_command,
        ..RunnerConfig::default()
    };

    PostProcessor::new(config, SystemRunner).run(&library_dir)
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = output::print_result(run(cli));
    std::process::ExitCode::from(output::exit_code_to_u8(exit_code))
}
