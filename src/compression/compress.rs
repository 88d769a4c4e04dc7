use std::io;

use log::{error, info};

use super::data_io::{encoded_name, read_input, write_output};
use crate::codec::{legacy, wire};
use crate::error::RleError;
use crate::tools::cli::{Format, Policy, RleOpts};

/// Encode data in the format selected in opts.
pub fn compress_data(opts: &RleOpts, data: &[u8]) -> Result<Vec<u8>, RleError> {
    match opts.format {
        Format::Binary => wire::encode_bytes(data),
        Format::Legacy => {
            let text = std::str::from_utf8(data)?;
            let out = match opts.policy {
                Policy::Strict => legacy::encode_checked(text)?,
                Policy::Lenient => legacy::encode(text),
            };
            Ok(out.into_bytes())
        }
    }
}

/// Percentage of the input size that the output takes up.
pub(crate) fn ratio(input: usize, output: usize) -> f64 {
    if input == 0 {
        return 100.0;
    }
    output as f64 * 100.0 / input as f64
}

/// Encode the input defined in opts <RleOpts> and write the result.
pub fn compress(opts: &RleOpts) -> io::Result<()> {
    let data = read_input(opts)?;
    let out = compress_data(opts, &data).map_err(|e| {
        error!("Encoding failed: {}", e);
        e
    })?;
    info!(
        "Encoded {} bytes into {} bytes ({:.1}% of input)",
        data.len(),
        out.len(),
        ratio(data.len(), out.len())
    );
    write_output(opts, &out, encoded_name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn legacy_test() {
        let opts = RleOpts::new();
        assert_eq!(
            compress_data(&opts, b"AAAAAABBBBBBCCCCC").unwrap(),
            b"6A6B5C".to_vec()
        );
        assert!(compress_data(&opts, b"").unwrap().is_empty());
    }

    #[test]
    fn strict_test() {
        let mut opts = RleOpts::new();
        // Lenient writes the long run anyway.
        assert_eq!(compress_data(&opts, b"xxxxxxxxxxx").unwrap(), b"11x".to_vec());
        opts.policy = Policy::Strict;
        assert_eq!(
            compress_data(&opts, b"xxxxxxxxxxx"),
            Err(RleError::RunTooLong { count: 11, max: 9 })
        );
    }

    #[test]
    fn not_text_test() {
        let opts = RleOpts::new();
        assert!(matches!(
            compress_data(&opts, &[0xff, 0xfe]),
            Err(RleError::InvalidText(_))
        ));
    }

    #[test]
    fn binary_test() {
        let mut opts = RleOpts::new();
        opts.format = Format::Binary;
        assert_eq!(
            compress_data(&opts, &[0xff, 0xff]).unwrap(),
            vec![b'R', b'L', 1, 2, 0, 0, 0, 0xff]
        );
    }

    #[test]
    fn ratio_test() {
        assert_eq!(ratio(0, 0), 100.0);
        assert_eq!(ratio(200, 50), 25.0);
    }
}
