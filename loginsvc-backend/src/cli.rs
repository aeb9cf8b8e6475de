use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} requires a path argument")]
    MissingValue(String),
    #[error("unrecognised argument: {0}")]
    Unrecognised(String),
}

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Config file from `--config-path`/`-c`; the last occurrence wins.
    pub config_path: Option<String>,
    pub help_requested: bool,
}

impl CliArgs {
    pub fn parse() -> Result<Self, CliError> {
        Self::parse_from(std::env::args())
    }

    /// Parse an argument list whose first element is the program name.
    ///
    /// Accepts `--config-path PATH`, `--config-path=PATH`, `-c PATH`, `-c=PATH`,
    /// and `--help`/`-h`. Anything else is rejected.
    pub fn parse_from<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::into).skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help_requested = true,
                flag @ ("-c" | "--config-path") => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::MissingValue(flag.to_string()))?;
                    parsed.config_path = Some(path);
                }
                other => match other.split_once('=') {
                    Some(("-c" | "--config-path", path)) if !path.is_empty() => {
                        parsed.config_path = Some(path.to_string());
                    }
                    Some((flag @ ("-c" | "--config-path"), _)) => {
                        return Err(CliError::MissingValue(flag.to_string()));
                    }
                    _ => return Err(CliError::Unrecognised(other.to_string())),
                },
            }
        }

        Ok(parsed)
    }

    /// Print usage information to stderr.
    pub fn print_help() {
        eprintln!(
            "Usage: loginsvc-backend [--config-path PATH] [--help]\n\n\
             --config-path, -c    Path to configuration file (overrides LOGINSVC_CONFIG_PATH)\n\
             --help, -h           Print this message"
        );
    }
}
