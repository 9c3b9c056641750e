//! CLI argument parsing

use crate::DEFAULT_QUALITY_LEVEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
    /// Short human-readable summary
    Text,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub path: String,
    pub quality_level: String,
    pub format: OutputFormat,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            path: String::new(),
            quality_level: DEFAULT_QUALITY_LEVEL.to_string(),
            format: OutputFormat::Pretty,
        }
    }
}

/// Parse command line arguments (`args[0]` is the program name)
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("Missing required argument: PATH".to_string());
    }

    let mut cli_args = CliArgs::default();
    let mut format: Option<OutputFormat> = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--level" => {
                i += 1;
                if i >= args.len() {
                    return Err("--level requires a value".to_string());
                }
                cli_args.quality_level.clone_from(&args[i]);
            }
            flag @ ("--compact" | "--text") => {
                let requested = if flag == "--compact" {
                    OutputFormat::Compact
                } else {
                    OutputFormat::Text
                };
                if format.is_some_and(|f| f != requested) {
                    return Err("--compact and --text cannot be combined".to_string());
                }
                format = Some(requested);
            }
            arg if !arg.starts_with("--") => {
                if cli_args.path.is_empty() {
                    cli_args.path = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if cli_args.path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }

    if let Some(format) = format {
        cli_args.format = format;
    }

    Ok(cli_args)
}
