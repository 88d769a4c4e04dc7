//! The compression module drives the codec over files and standard streams.
//!
//! Encoding happens in the following steps:
//! - Read the whole input, from the named file or from stdin.
//! - Run-length encode it in the selected format (legacy text or binary).
//! - Write the result to `<file>.rle`, or to stdout.
//! - Remove the input file unless asked to keep it.
//!
//! Decoding is the inverse. The legacy text format requires the input to be UTF-8 text;
//! the binary format works on any bytes.
//!
pub mod compress;
pub mod data_io;
pub mod decompress;
