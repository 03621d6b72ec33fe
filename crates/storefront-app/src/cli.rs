#![forbid(unsafe_code)]

//! Command-line argument parsing for the storefront binary.
//!
//! Parses args by hand to keep the binary lean; the log filter is checked
//! with the same `EnvFilter` parser the subscriber uses.
//! Supports environment variable overrides via the `STOREFRONT_*` prefix.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Storefront: a terminal catalog with a draggable shopping cart

USAGE:
    storefront [OPTIONS]

OPTIONS:
    --swipe-threshold=N  Swipe distance in cells that changes product (default: 12)
    --start=N            Start on product N, 1-indexed (default: 1)
    --no-mouse           Disable mouse event capture
    --log-file=PATH      Write logs to PATH (no logging by default)
    --log-filter=F       Log filter directive (default: info)
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    Left / h        Previous product
    Right / l       Next product
    c / s           Cycle color / size
    f               Toggle favorite
    a / Enter       Add to cart
    o               Open or close the cart
    Esc             Collapse the cart
    q / Ctrl+C      Quit

MOUSE:
    Drag across the product image to swipe between products.
    Drag the cart handle to move it; click it to expand.

ENVIRONMENT VARIABLES:
    STOREFRONT_SWIPE_THRESHOLD  Override --swipe-threshold
    STOREFRONT_START            Override --start
    STOREFRONT_LOG_FILE         Override --log-file
    STOREFRONT_LOG              Override --log-filter";

/// Default swipe threshold in cells.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 12;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Horizontal drag distance (exclusive) that counts as a swipe.
    pub swipe_threshold: u16,
    /// Starting product (1-indexed).
    pub start_product: usize,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Where to write logs, if anywhere.
    pub log_file: Option<PathBuf>,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            start_product: 1,
            mouse: true,
            log_file: None,
            log_filter: "info".into(),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run the storefront.
    Run(Opts),
    /// Print help and exit.
    Help,
    /// Print the version and exit.
    Version,
}

/// A rejected command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A flag or variable carried a value that does not parse.
    InvalidValue {
        /// Flag or environment variable name.
        name: String,
        /// The rejected value.
        value: String,
    },
    /// An argument nobody recognizes.
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { name, value } => write!(f, "Invalid {name} value: {value}"),
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl Opts {
    /// Parse command-line arguments and environment variables, exiting on
    /// `--help`, `--version` or invalid input.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Invocation::Run(opts)) => opts,
            Ok(Invocation::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Invocation::Version) => {
                println!("storefront {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                if matches!(err, CliError::UnknownArgument(_)) {
                    eprintln!("Run with --help for usage information.");
                }
                process::exit(1);
            }
        }
    }

    /// Parse `args` with `var` standing in for the process environment.
    pub fn parse_from<I, S, F>(args: I, var: F) -> Result<Invocation, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = var("STOREFRONT_SWIPE_THRESHOLD") {
            opts.swipe_threshold = parse_number("STOREFRONT_SWIPE_THRESHOLD", &val)?;
        }
        if let Some(val) = var("STOREFRONT_START") {
            opts.start_product = parse_number("STOREFRONT_START", &val)?;
        }
        if let Some(val) = var("STOREFRONT_LOG_FILE")
            && !val.is_empty()
        {
            opts.log_file = Some(PathBuf::from(val));
        }
        if let Some(val) = var("STOREFRONT_LOG") {
            opts.log_filter = parse_filter("STOREFRONT_LOG", &val)?;
        }

        // Parse command-line args (override env vars)
        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(Invocation::Help),
                "--version" | "-V" => return Ok(Invocation::Version),
                "--no-mouse" => opts.mouse = false,
                other => {
                    if let Some(val) = other.strip_prefix("--swipe-threshold=") {
                        opts.swipe_threshold = parse_number("--swipe-threshold", val)?;
                    } else if let Some(val) = other.strip_prefix("--start=") {
                        opts.start_product = parse_number("--start", val)?;
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--log-filter=") {
                        opts.log_filter = parse_filter("--log-filter", val)?;
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Invocation::Run(opts))
    }

    /// Zero-based starting index. Product 0 is treated like product 1.
    pub fn start_index(&self) -> usize {
        self.start_product.saturating_sub(1)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_filter(name: &str, value: &str) -> Result<String, CliError> {
    match EnvFilter::try_new(value) {
        Ok(_) => Ok(value.to_string()),
        Err(_) => Err(CliError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(args: &[&str], var: impl Fn(&str) -> Option<String>) -> Opts {
        match Opts::parse_from(args, var) {
            Ok(Invocation::Run(opts)) => opts,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.swipe_threshold, 12);
        assert_eq!(opts.start_product, 1);
        assert!(opts.mouse);
        assert_eq!(opts.log_file, None);
        assert_eq!(opts.log_filter, "info");
        assert_eq!(run(&[], no_env), opts);
    }

    #[test]
    fn flags_are_parsed() {
        let opts = run(
            &["--swipe-threshold=5", "--start=3", "--no-mouse", "--log-file=/tmp/s.log", "--log-filter=debug"],
            no_env,
        );
        assert_eq!(opts.swipe_threshold, 5);
        assert_eq!(opts.start_product, 3);
        assert_eq!(opts.start_index(), 2);
        assert!(!opts.mouse);
        assert_eq!(opts.log_file, Some(PathBuf::from("/tmp/s.log")));
        assert_eq!(opts.log_filter, "debug");
    }

    #[test]
    fn env_overrides_defaults_and_flags_override_env() {
        let env = |key: &str| match key {
            "STOREFRONT_SWIPE_THRESHOLD" => Some("20".to_string()),
            "STOREFRONT_START" => Some("4".to_string()),
            "STOREFRONT_LOG" => Some("trace".to_string()),
            _ => None,
        };
        let opts = run(&[], env);
        assert_eq!(opts.swipe_threshold, 20);
        assert_eq!(opts.start_product, 4);
        assert_eq!(opts.log_filter, "trace");

        let opts = run(&["--swipe-threshold=8"], env);
        assert_eq!(opts.swipe_threshold, 8);
        assert_eq!(opts.start_product, 4);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(Opts::parse_from(["-h", "--bogus"], no_env), Ok(Invocation::Help));
        assert_eq!(Opts::parse_from(["--version"], no_env), Ok(Invocation::Version));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            Opts::parse_from(["--start=two"], no_env),
            Err(CliError::InvalidValue {
                name: "--start".into(),
                value: "two".into()
            })
        );
        let env = |key: &str| (key == "STOREFRONT_SWIPE_THRESHOLD").then(|| "-1".to_string());
        assert!(matches!(
            Opts::parse_from(Vec::<String>::new(), env),
            Err(CliError::InvalidValue { .. })
        ));
        assert_eq!(
            Opts::parse_from(["--frobnicate"], no_env),
            Err(CliError::UnknownArgument("--frobnicate".into()))
        );
    }

    #[test]
    fn malformed_log_filter_is_rejected() {
        assert_eq!(
            Opts::parse_from(["--log-filter=storefront=loud"], no_env),
            Err(CliError::InvalidValue {
                name: "--log-filter".into(),
                value: "storefront=loud".into()
            })
        );
        let env = |key: &str| (key == "STOREFRONT_LOG").then(|| "storefront=loud".to_string());
        assert!(matches!(
            Opts::parse_from(Vec::<String>::new(), env),
            Err(CliError::InvalidValue { name, .. }) if name == "STOREFRONT_LOG"
        ));
        assert_eq!(
            run(&["--log-filter=storefront_model=debug,warn"], no_env).log_filter,
            "storefront_model=debug,warn"
        );
    }

    #[test]
    fn start_zero_clamps_to_first_product() {
        assert_eq!(run(&["--start=0"], no_env).start_index(), 0);
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = CliError::InvalidValue {
            name: "--start".into(),
            value: "x".into(),
        };
        assert_eq!(err.to_string(), "Invalid --start value: x");
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_lists_every_option() {
        for flag in ["--swipe-threshold", "--start", "--no-mouse", "--log-file", "--log-filter"] {
            assert!(HELP_TEXT.contains(flag), "{flag} missing from help");
        }
    }
}
