//! The codec module holds the run-length encoder and decoder.
//!
//! Encoding finds the maximal runs of identical symbols and records each one as a
//! (count, symbol) pair. Decoding repeats each symbol count times. Three layers are provided:
//! - run: the typed codec over `Run<S>` records, generic over any `Copy + Eq` symbol.
//! - legacy: the `<digit><symbol>` text format ("6A6B5C"), limited to runs of nine.
//! - wire: a binary format with a fixed-width count field that carries runs of any length.
//!
pub mod legacy;
pub mod run;
pub mod wire;
