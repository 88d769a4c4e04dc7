use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A run-length encoder and decoder",
    long_about = None)]
pub struct Args {
    /// Filename of file to process. Reads stdin when absent.
    #[clap()]
    filename: Option<String>,

    /// Encode the input (the default)
    #[clap(short = 'z', long = "encode")]
    encode: bool,

    /// Decode the input
    #[clap(short = 'd', long = "decode", conflicts_with = "encode")]
    decode: bool,

    /// Use the binary format, which carries runs of any length
    #[clap(short = 'b', long = "binary")]
    binary: bool,

    /// Fail on runs or input the legacy text format cannot carry
    #[clap(short = 's', long = "strict")]
    strict: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep input file
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v 1 is silent, -v 4 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Encode or Decode
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Wire format of the encoded side
pub enum Format {
    /// `<digit><symbol>` text, runs of at most nine
    Legacy,
    /// Header plus fixed-width count records
    Binary,
}
impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the legacy format treats input it cannot carry
pub enum Policy {
    /// Write long runs anyway, and stop decoding at the first bad pair keeping what was decoded
    Lenient,
    /// Report long runs and bad pairs as errors
    Strict,
}
impl Display for Policy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Define the two output channels
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Defines all user settable options to control program behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RleOpts {
    /// Optional name of file to read for input
    pub file: Option<String>,
    /// Encode/Decode
    pub op_mode: Mode,
    /// Wire format of the encoded side
    pub format: Format,
    /// Legacy format policy
    pub policy: Policy,
    /// Location where output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Log level selected with -v
    pub verbosity: log::LevelFilter,
}

impl RleOpts {
    pub fn new() -> Self {
        Self {
            file: None,
            op_mode: Mode::Encode,
            format: Format::Legacy,
            policy: Policy::Lenient,
            output: Output::Stdout,
            force_overwrite: false,
            keep_input_files: false,
            verbosity: log::LevelFilter::Info,
        }
    }

    /// Build options from an argument list (the first item is the program name).
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from(Args::try_parse_from(args)?))
    }

    /// The policy only changes behavior for the legacy text format. The binary format is
    /// always strict.
    pub fn policy_applies(&self) -> bool {
        self.format == Format::Legacy
    }
}

impl Default for RleOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy command line stuff from clap's style into our internal structure
impl From<Args> for RleOpts {
    fn from(args: Args) -> Self {
        let mut opts = RleOpts::new();
        if args.decode {
            opts.op_mode = Mode::Decode
        };
        if args.binary {
            opts.format = Format::Binary
        };
        if args.strict {
            opts.policy = Policy::Strict
        };
        opts.force_overwrite = args.force;
        opts.keep_input_files = args.keep;
        // Without a file there is nowhere to write but stdout.
        opts.output = match (&args.filename, args.stdout) {
            (Some(_), false) => Output::File,
            _ => Output::Stdout,
        };
        opts.file = args.filename;
        opts.verbosity = match args.v {
            0 | 1 => log::LevelFilter::Off,
            2 => log::LevelFilter::Error,
            3 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        };
        opts
    }
}

/// Parse the process command line, set the log level and report the settings.
pub fn rle_opts_init() -> RleOpts {
    let opts = RleOpts::from(Args::parse());
    log::set_max_level(opts.verbosity);

    // Below we log initialization status to the user
    info!("---- RLE Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Format set to {}", opts.format);
    info!("Policy set to {}", opts.policy);
    if opts.policy == Policy::Strict && !opts.policy_applies() {
        warn!("--strict has no effect with --binary, the binary format is always strict")
    };
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => info!("Getting input from stdin"),
    }
    if opts.output == Output::Stdout {
        warn!("Sending output to stdout")
    };
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    info!("---- RLE Initialization End ----\n");
    opts
}
