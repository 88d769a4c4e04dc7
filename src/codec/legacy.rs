/*
Legacy text format: every run is written as its count in decimal followed directly by the
symbol, with no separators. "AAAAAABBBBBBCCCCC" becomes "6A6B5C".

A symbol is one user-visible character, an extended grapheme cluster, not a single code
point. "e\u{301}" (e plus a combining accent) is one symbol, and so is a ZWJ emoji
sequence. Text is split into clusters with unicode-segmentation before coding.

Decoding walks the clusters two at a time, a count digit and then a symbol. Only a
single digit is read per count, so runs of ten or more cannot be represented. The encoder
still writes such counts out in full (e.g. "12a"), which will not decode back to the
input. Use encode_checked when that must be an error, or the binary format in wire.rs.

The default decoder is best-effort: on a count that is not a digit, or a count with no
symbol after it, it stops and returns what it has decoded so far. decode_strict reports
the same conditions as errors.
*/
use std::fmt::Write;

use log::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use super::run::{encode_runs, Run};
use crate::error::RleError;

/// Largest count a single legacy count token can carry.
pub const MAX_LEGACY_COUNT: usize = 9;

/// Split text into the symbols the legacy format counts: extended grapheme clusters.
pub fn clusters(input: &str) -> Vec<&str> {
    input.graphemes(true).collect()
}

/// Parse a legacy count token. Only a lone ASCII digit 0-9 is a count.
pub fn parse_count(token: &str) -> Option<usize> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}

/// Append one run in the legacy `<count><symbol>` form.
fn push_run(out: &mut String, run: &Run<&str>) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{}{}", run.count, run.symbol);
}

/// Encode text into the legacy format. Never fails. Runs longer than nine are written with
/// a multi-digit count, which the legacy decoder cannot read back.
pub fn encode(input: &str) -> String {
    let symbols = clusters(input);
    let runs = encode_runs(&symbols);
    // Worst case (no repeats) doubles the length.
    let mut out = String::with_capacity(input.len() * 2);
    for run in &runs {
        if run.count > MAX_LEGACY_COUNT {
            warn!(
                "Run of {} {:?} is too long for the legacy format and will not decode",
                run.count, run.symbol
            );
        }
        push_run(&mut out, run);
    }
    debug!(
        "Legacy encode: {} symbols into {} runs",
        symbols.len(),
        runs.len()
    );
    out
}

/// Encode text into the legacy format, refusing any run the format cannot carry.
pub fn encode_checked(input: &str) -> Result<String, RleError> {
    let symbols = clusters(input);
    let runs = encode_runs(&symbols);
    let mut out = String::with_capacity(input.len() * 2);
    for run in &runs {
        if run.count > MAX_LEGACY_COUNT {
            return Err(RleError::RunTooLong {
                count: run.count,
                max: MAX_LEGACY_COUNT,
            });
        }
        push_run(&mut out, run);
    }
    Ok(out)
}

/// Decode as many complete `<count><symbol>` pairs as possible. Returns the decoded symbols
/// and, if decoding stopped early, the reason it stopped. Positions count symbols.
pub fn decode_best_effort<'a>(input: &[&'a str]) -> (Vec<&'a str>, Option<RleError>) {
    let mut out = Vec::with_capacity(input.len());
    for (pair_idx, pair) in input.chunks(2).enumerate() {
        let position = pair_idx * 2;
        let count = match parse_count(pair[0]) {
            Some(n) => n,
            None => {
                let e = RleError::MalformedCount {
                    position,
                    found: pair[0].to_string(),
                };
                return (out, Some(e));
            }
        };
        // chunks() hands back a single element when the input length is odd.
        let symbol = match pair.get(1) {
            Some(&s) => s,
            None => return (out, Some(RleError::TruncatedPair { position })),
        };
        out.extend(std::iter::repeat(symbol).take(count));
    }
    (out, None)
}

/// Best-effort decode of a legacy symbol sequence. Stops at the first malformed or
/// incomplete pair and returns the symbols decoded up to that point.
pub fn decode_symbols<'a>(input: &[&'a str]) -> Vec<&'a str> {
    let (out, stopped) = decode_best_effort(input);
    if let Some(e) = stopped {
        warn!("Legacy decode stopped early: {}", e);
    }
    out
}

/// Best-effort decode of legacy text. See decode_symbols.
pub fn decode(input: &str) -> String {
    decode_symbols(&clusters(input)).concat()
}

/// Decode legacy text, failing on a malformed count or a dangling count.
pub fn decode_strict(input: &str) -> Result<String, RleError> {
    match decode_best_effort(&clusters(input)) {
        (out, None) => Ok(out.concat()),
        (_, Some(e)) => Err(e),
    }
}
