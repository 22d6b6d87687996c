//! Command-line argument parsing and help for colls.
//!
//! Flags `-l`, `-a` and `-r` may be given separately or bundled (`-lar`), before or after
//! the single optional path. `--` ends option parsing.

use crate::core::ListOptions;

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List(CliArgs),
    Help,
    Version,
    InitConfig,
}

/// Flags and path for a listing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub long_format: bool,
    pub show_hidden: bool,
    pub reverse_order: bool,
    pub path: Option<String>,
}

impl CliArgs {
    /// Switches on every option given on the command line. Flags never switch an option off.
    pub fn merge(&self, base: ListOptions) -> ListOptions {
        ListOptions {
            long_format: base.long_format || self.long_format,
            show_hidden: base.show_hidden || self.show_hidden,
            reverse_order: base.reverse_order || self.reverse_order,
        }
    }
}

/// Parses the full argument list, program name included.
///
/// # Errors
/// A usage message for unknown options or more than one path.
pub fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut parsed = CliArgs::default();
    let mut options_done = false;

    for arg in args.iter().skip(1) {
        let arg = arg.as_str();
        if !options_done && arg.starts_with('-') && arg.len() > 1 {
            match arg {
                "--" => options_done = true,
                "-h" | "--help" => return Ok(CliAction::Help),
                "-v" | "--version" => return Ok(CliAction::Version),
                "--init" => return Ok(CliAction::InitConfig),
                "--long" => parsed.long_format = true,
                "--all" => parsed.show_hidden = true,
                "--reverse" => parsed.reverse_order = true,
                long if long.starts_with("--") => {
                    return Err(format!("unrecognized option '{}'", long));
                }
                short => {
                    for flag in short.chars().skip(1) {
                        match flag {
                            'l' => parsed.long_format = true,
                            'a' => parsed.show_hidden = true,
                            'r' => parsed.reverse_order = true,
                            other => return Err(format!("invalid option -- '{}'", other)),
                        }
                    }
                }
            }
            continue;
        }

        if parsed.path.is_some() {
            return Err("only one path may be listed at a time".to_string());
        }
        parsed.path = Some(arg.to_string());
    }

    Ok(CliAction::List(parsed))
}

pub fn print_version() {
    println!("colls {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help() {
    println!(
        r#"colls - list directory contents in tab-aligned columns

USAGE:
  colls [OPTIONS] [PATH]

PATH:
  File or directory to list (defaults to the current directory)

OPTIONS:
  -l, --long              Long format: mode, links, owner, group, size, time, name
  -a, --all               Include entries starting with '.'
  -r, --reverse           Reverse the sort order
      --init              Generate a default configuration file
  -h, --help              Print help information
  -v, --version           Display the current installed version of colls

ENVIRONMENT:
  COLLS_CONFIG            Override the default config path
  COLUMNS                 Output width for the column grid
  RUST_LOG                Log filter for diagnostics on stderr (default: warn)
"#
    );
}
