//! main.rs
//! Entry point for colls

use colls::app::Lister;
use colls::config::Config;
use colls::core::{SystemIdentity, SystemWidth};
use colls::utils::cli::{CliAction, parse_args, print_help, print_version};
use colls::utils::resolve_target;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(CliAction::List(cli)) => cli,
        Ok(CliAction::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Version) => {
            print_version();
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::InitConfig) => {
            let path = Config::default_path();
            return match Config::generate_default(&path) {
                Ok(()) => {
                    println!("Default config generated at {:?}", path);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("colls: {}", e);
                    ExitCode::FAILURE
                }
            };
        }
        Err(msg) => {
            eprintln!("colls: {}", msg);
            eprintln!("Try 'colls --help' for more information.");
            return ExitCode::from(2);
        }
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("colls: cannot determine current directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = Config::load();
    let options = cli.merge(config.general().list_options());
    let target = resolve_target(cli.path.as_deref(), &cwd);

    let lister = Lister::new(options, &config, &SystemWidth, &SystemIdentity);
    let lines = match lister.list(&target) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("colls: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_lines(&lines) {
        // a closed pipe (`colls | head`) is not worth a message
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("colls: write error: {}", e);
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn write_lines(lines: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
