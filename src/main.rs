//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::io;

use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use rle::compression::{compress::compress, decompress::decompress};
use rle::tools::cli::{rle_opts_init, Mode};

fn main() -> Result<(), io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. Logs go to stderr so
    // encoded output on stdout stays clean. The -v option narrows the level below.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let options = rle_opts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Encode => compress(&options),
        Mode::Decode => decompress(&options),
    };

    info!("Done.\n");
    result
}
