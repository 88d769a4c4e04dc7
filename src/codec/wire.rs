//! Binary wire format for runs of any length.
//!
//! The legacy text format can only carry counts of 0-9. This format replaces the single
//! digit with a fixed-width count field:
//!
//! ```text
//! 'R' 'L' <width: u8>                     stream header
//! <count: u32 LE> <symbol: width bytes>    one record per run
//! ```
//!
//! `width` is the byte width of the symbol type, so a stream written with one symbol type
//! is rejected when read back as another.

use log::debug;

use super::run::{decode_runs, encode_runs, expanded_len, Run, Symbol};
use crate::error::RleError;

/// Default cap on the decoded size used by decode_bytes: 1 GiB.
pub const DEFAULT_MAX_OUTPUT: usize = 1 << 30;

const MAGIC: &[u8; 2] = b"RL";
const HEADER_LEN: usize = 3;
const COUNT_LEN: usize = 4;

/// A symbol with a fixed-width byte representation.
pub trait WireSymbol: Symbol {
    /// Number of bytes each symbol takes on the wire.
    const WIDTH: usize;

    fn write_to(&self, out: &mut Vec<u8>);

    /// Read a symbol from exactly `WIDTH` bytes. None if the bytes are not a valid symbol.
    fn read_from(bytes: &[u8]) -> Option<Self>;
}

impl WireSymbol for u8 {
    const WIDTH: usize = 1;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.push(*self);
    }

    fn read_from(bytes: &[u8]) -> Option<Self> {
        bytes.first().copied()
    }
}

impl WireSymbol for u16 {
    const WIDTH: usize = 2;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_from(bytes: &[u8]) -> Option<Self> {
        Some(u16::from_le_bytes(bytes.try_into().ok()?))
    }
}

impl WireSymbol for char {
    const WIDTH: usize = 4;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(*self as u32).to_le_bytes());
    }

    fn read_from(bytes: &[u8]) -> Option<Self> {
        char::from_u32(u32::from_le_bytes(bytes.try_into().ok()?))
    }
}

/// Serialize runs. Fails only if a count does not fit the 32 bit count field.
pub fn to_bytes<S: WireSymbol>(runs: &[Run<S>]) -> Result<Vec<u8>, RleError> {
    let mut out = Vec::with_capacity(HEADER_LEN + runs.len() * (COUNT_LEN + S::WIDTH));
    out.extend_from_slice(MAGIC);
    out.push(S::WIDTH as u8);

    for run in runs {
        let count = u32::try_from(run.count).map_err(|_| RleError::RunTooLong {
            count: run.count,
            max: u32::MAX as usize,
        })?;
        out.extend_from_slice(&count.to_le_bytes());
        run.symbol.write_to(&mut out);
    }
    Ok(out)
}

/// Parse a serialized stream back into runs.
pub fn from_bytes<S: WireSymbol>(data: &[u8]) -> Result<Vec<Run<S>>, RleError> {
    if data.len() < HEADER_LEN {
        return Err(RleError::BadHeader(format!(
            "Stream is {} bytes, header needs {}",
            data.len(),
            HEADER_LEN
        )));
    }
    if &data[..2] != MAGIC {
        return Err(RleError::BadHeader("Missing RL magic".to_string()));
    }
    let width = data[2] as usize;
    if width != S::WIDTH {
        return Err(RleError::BadHeader(format!(
            "Symbol width is {width}, expected {}",
            S::WIDTH
        )));
    }

    let record = COUNT_LEN + S::WIDTH;
    let body = &data[HEADER_LEN..];
    let mut runs = Vec::with_capacity(body.len() / record);
    for (idx, chunk) in body.chunks(record).enumerate() {
        let position = HEADER_LEN + idx * record;
        if chunk.len() < record {
            return Err(RleError::Truncated {
                position,
                needed: record,
                available: chunk.len(),
            });
        }
        let (count_bytes, symbol_bytes) = chunk.split_at(COUNT_LEN);
        let count = u32::from_le_bytes([
            count_bytes[0],
            count_bytes[1],
            count_bytes[2],
            count_bytes[3],
        ]) as usize;
        if count == 0 {
            return Err(RleError::ZeroCount { position });
        }
        let symbol = S::read_from(symbol_bytes).ok_or_else(|| {
            // Pad to four bytes so the raw value can be reported whatever the width.
            let mut raw = [0_u8; 4];
            let n = symbol_bytes.len().min(4);
            raw[..n].copy_from_slice(&symbol_bytes[..n]);
            RleError::InvalidSymbol {
                position: position + COUNT_LEN,
                value: u32::from_le_bytes(raw),
            }
        })?;
        runs.push(Run { count, symbol });
    }
    Ok(runs)
}

/// Run-length encode raw bytes straight into the binary format.
pub fn encode_bytes(data: &[u8]) -> Result<Vec<u8>, RleError> {
    let runs = encode_runs(data);
    let out = to_bytes(&runs)?;
    debug!(
        "Binary encode: {} bytes into {} runs, {} bytes out",
        data.len(),
        runs.len(),
        out.len()
    );
    Ok(out)
}

/// Decode a binary stream produced by encode_bytes, refusing to expand past
/// DEFAULT_MAX_OUTPUT bytes.
pub fn decode_bytes(data: &[u8]) -> Result<Vec<u8>, RleError> {
    decode_bytes_with_limit(data, DEFAULT_MAX_OUTPUT)
}

/// Decode a binary stream, refusing to expand past `max_output` bytes. The limit is
/// checked against the sum of the counts before any output is allocated.
pub fn decode_bytes_with_limit(data: &[u8], max_output: usize) -> Result<Vec<u8>, RleError> {
    let runs: Vec<Run<u8>> = from_bytes(data)?;
    match expanded_len(&runs) {
        Some(total) if total <= max_output => {}
        _ => return Err(RleError::OutputTooLarge { max: max_output }),
    }
    let out = decode_runs(&runs);
    debug!("Binary decode: {} runs into {} bytes", runs.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    #[test]
    fn layout_test() {
        let out = to_bytes(&[Run::new(300, b'x')]).unwrap();
        assert_eq!(out, vec![b'R', b'L', 1, 44, 1, 0, 0, b'x']);
    }

    #[test]
    fn empty_test() {
        let out = encode_bytes(&[]).unwrap();
        assert_eq!(out, b"RL\x01".to_vec());
        assert!(decode_bytes(&out).unwrap().is_empty());
    }

    #[test]
    fn long_run_test() {
        let mut input = vec![b'a'; 70_000];
        input.extend_from_slice(b"bcc");
        let encoded = encode_bytes(&input).unwrap();
        assert_eq!(encoded.len(), 3 + 3 * 5);
        assert_eq!(decode_bytes(&encoded).unwrap(), input);
    }

    #[test]
    fn char_test() {
        let input: Vec<char> = "ééé→→x".chars().collect();
        let bytes = to_bytes(&encode_runs(&input)).unwrap();
        let runs: Vec<Run<char>> = from_bytes(&bytes).unwrap();
        assert_eq!(decode_runs(&runs), input);
    }

    #[test]
    fn u16_test() {
        let input = [1000_u16, 1000, 7];
        let bytes = to_bytes(&encode_runs(&input)).unwrap();
        assert_eq!(bytes[2], 2);
        let runs: Vec<Run<u16>> = from_bytes(&bytes).unwrap();
        assert_eq!(runs, vec![Run::new(2, 1000), Run::new(1, 7)]);
    }

    #[test]
    fn bad_header_test() {
        assert!(matches!(decode_bytes(b"R"), Err(RleError::BadHeader(_))));
        assert!(matches!(decode_bytes(b"XY\x01"), Err(RleError::BadHeader(_))));
        // A char stream read back as bytes.
        let bytes = to_bytes(&[Run::new(1, 'a')]).unwrap();
        assert!(matches!(decode_bytes(&bytes), Err(RleError::BadHeader(_))));
    }

    #[test]
    fn truncated_test() {
        let mut bytes = encode_bytes(b"aab").unwrap();
        bytes.pop();
        assert_eq!(
            decode_bytes(&bytes),
            Err(RleError::Truncated {
                position: 8,
                needed: 5,
                available: 4
            })
        );
    }

    #[test]
    fn zero_count_test() {
        let bytes = [b'R', b'L', 1, 0, 0, 0, 0, b'a'];
        assert_eq!(
            decode_bytes(&bytes),
            Err(RleError::ZeroCount { position: 3 })
        );
    }

    #[test]
    fn invalid_char_test() {
        let mut bytes = vec![b'R', b'L', 4, 1, 0, 0, 0];
        // A lone surrogate is not a char.
        bytes.extend_from_slice(&0xD800_u32.to_le_bytes());
        assert_eq!(
            from_bytes::<char>(&bytes),
            Err(RleError::InvalidSymbol {
                position: 7,
                value: 0xD800
            })
        );
    }

    #[test]
    fn huge_count_stream_test() {
        // Well-formed records that would expand to terabytes.
        let mut bytes = b"RL\x01".to_vec();
        for i in 0..2000_u32 {
            bytes.extend_from_slice(&u32::MAX.to_le_bytes());
            bytes.push((i % 2) as u8);
        }
        assert_eq!(
            decode_bytes(&bytes),
            Err(RleError::OutputTooLarge {
                max: DEFAULT_MAX_OUTPUT
            })
        );
    }

    #[test]
    fn output_limit_test() {
        let encoded = encode_bytes(b"aaaabbb").unwrap();
        assert_eq!(decode_bytes_with_limit(&encoded, 7).unwrap(), b"aaaabbb");
        assert_eq!(
            decode_bytes_with_limit(&encoded, 6),
            Err(RleError::OutputTooLarge { max: 6 })
        );
    }

    #[test]
    fn random_round_trip_test() {
        let mut rng = rand::thread_rng();
        for size in [1, 17, 1000, 20_000] {
            let input: Vec<u8> = (0..size).map(|_| rng.gen_range(0..4)).collect();
            let encoded = encode_bytes(&input).unwrap();
            assert_eq!(decode_bytes(&encoded).unwrap(), input);
        }
    }
}
