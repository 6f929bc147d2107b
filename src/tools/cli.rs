use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

/// File name suffix for compressed files
pub const SUFFIX: &str = ".lz77";

/// Compress or decompress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A simple LZ77 file compressor",
    long_about = "
    Compresses a file with a 4095 byte sliding window LZ77 scheme. Literals cost 9 bits and
    back-references 17 bits. There is no header, no checksum and no entropy coding stage."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Perform compression on the input file (the default)
    #[clap(short = 'z', long = "compress", conflicts_with = "decompress")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Write the result to this file instead of the default name
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout", conflicts_with = "output")]
    stdout: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. -v0 is silent, -v5 dumps every token
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

/// All user settable options that control program behavior
#[derive(Debug)]
pub struct LzOpts {
    /// Name of file to read for input
    pub file: String,
    /// Explicit output file name, if the user gave one
    pub output_file: Option<String>,
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Log level requested with -v
    pub verbosity: log::LevelFilter,
}

impl LzOpts {
    /// Put command line information from CLAP into our internal structure.
    pub fn from_args(args: Args) -> Self {
        Self {
            file: args.filename,
            output_file: args.output,
            op_mode: if args.decompress {
                Mode::Unzip
            } else {
                Mode::Zip
            },
            output: if args.stdout {
                Output::Stdout
            } else {
                Output::File
            },
            force_overwrite: args.force,
            verbosity: match args.v {
                0 => log::LevelFilter::Off,
                1 => log::LevelFilter::Error,
                2 => log::LevelFilter::Warn,
                3 => log::LevelFilter::Info,
                4 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            },
        }
    }

    /// Where the result goes. None means stdout.
    ///
    /// Compressing `name` writes `name.lz77`. Decompressing `name.lz77` writes `name`, and
    /// any other name gets `.out` appended.
    pub fn output_path(&self) -> Option<PathBuf> {
        if self.output == Output::Stdout {
            return None;
        }
        if let Some(name) = &self.output_file {
            return Some(PathBuf::from(name));
        }
        let name = match self.op_mode {
            Mode::Zip => format!("{}{}", self.file, SUFFIX),
            Mode::Unzip => match self.file.strip_suffix(SUFFIX) {
                Some(stem) if !stem.is_empty() => stem.to_string(),
                _ => format!("{}.out", self.file),
            },
        };
        Some(PathBuf::from(name))
    }
}

/// Parse the command line, set the log level, and report what we are about to do.
pub fn lzopts_init() -> LzOpts {
    let opts = LzOpts::from_args(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbosity);

    // Below we report initialization status to the user
    info!("---- lz77 Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file);
    match opts.output_path() {
        Some(path) => info!("Sending output to the file {}", path.display()),
        None => warn!("Sending output to stdout"),
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- lz77 Initialization End ----");
    opts
}
