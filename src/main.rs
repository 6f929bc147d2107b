//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io::{self, Write};
use std::path::Path;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use lz77::tools::cli::{lzopts_init, LzOpts, Mode};
use lz77::{compress_file, decompress_file, Lz77Error};

fn main() -> Result<(), Lz77Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The -v option narrows this.
    // Log to stderr so that --stdout output stays clean.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Could not start the terminal logger.");
    }

    let options = lzopts_init();

    //----- Figure how what we need to do and go do it
    let result = run(&options);
    match &result {
        Ok(()) => info!("Done."),
        Err(e) => error!("{}", e),
    }
    result
}

/// Read the input file, run the codec, and write the result where the options say.
fn run(opts: &LzOpts) -> Result<(), Lz77Error> {
    let output = opts.output_path();
    let input = Path::new(&opts.file);
    let result = match opts.op_mode {
        Mode::Zip => compress_file(input, output.as_deref(), opts.force_overwrite),
        Mode::Unzip => decompress_file(input, output.as_deref(), opts.force_overwrite),
    };
    let result = match result {
        Err(Lz77Error::Io(e)) if e.kind() == io::ErrorKind::AlreadyExists => {
            if let Some(path) = &output {
                error!("{} already exists, use --force to overwrite", path.display());
            }
            return Err(Lz77Error::Io(e));
        }
        other => other?,
    };

    // No output path means the bytes came back to us for stdout
    if let Some(bytes) = result {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(&bytes)?;
        handle.flush()?;
    }
    Ok(())
}
