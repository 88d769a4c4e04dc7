//! Run-length encoding for Rust.
//!
//! Replaces each run of repeated symbols with a count and the symbol, and reverses the
//! transform exactly. The codec works on fully materialized sequences.
//!
//! Basic usage of the legacy text format:
//!
//! ```
//! assert_eq!(rle::legacy::encode("AAAAAABBBBBBCCCCC"), "6A6B5C");
//! assert_eq!(rle::legacy::decode("6A6B5C"), "AAAAAABBBBBBCCCCC");
//! ```
//!
//! The typed codec works on any symbol that can be copied and compared:
//!
//! ```
//! use rle::run::{decode_runs, encode_runs, Run};
//!
//! let runs = encode_runs(&[3_u8, 3, 3, 9]);
//! assert_eq!(runs, vec![Run::new(3, 3), Run::new(1, 9)]);
//! assert_eq!(decode_runs(&runs), vec![3, 3, 3, 9]);
//! ```
//!
//! The command line tool reads a file (or stdin) and writes the result:
//!
//! `$> rle -z test.txt`
//!
//! This will encode the file and create the file test.txt.rle.
//!
pub mod codec;
pub mod compression;
pub mod error;
pub mod tools;

pub use codec::{legacy, run, wire};
pub use error::RleError;
