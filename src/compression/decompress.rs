use std::io;

use log::{error, info, warn};

use super::compress::ratio;
use super::data_io::{decoded_name, read_input, write_output};
use crate::codec::{legacy, wire};
use crate::error::RleError;
use crate::tools::cli::{Format, Policy, RleOpts};

/// Decode data in the format selected in opts.
pub fn decompress_data(opts: &RleOpts, data: &[u8]) -> Result<Vec<u8>, RleError> {
    match opts.format {
        Format::Binary => wire::decode_bytes(data),
        Format::Legacy => {
            let text = std::str::from_utf8(data)?;
            let out = match opts.policy {
                Policy::Strict => legacy::decode_strict(text)?,
                Policy::Lenient => legacy::decode(text),
            };
            Ok(out.into_bytes())
        }
    }
}

/// Decode the input defined in opts <RleOpts> and write the result.
pub fn decompress(opts: &RleOpts) -> io::Result<()> {
    let data = read_input(opts)?;
    if opts.format == Format::Legacy && data.last() == Some(&b'\n') {
        warn!("Input ends with a newline, which the legacy decoder reads as a count");
    }
    let out = decompress_data(opts, &data).map_err(|e| {
        error!("Decoding failed: {}", e);
        e
    })?;
    info!(
        "Decoded {} bytes into {} bytes ({:.1}% of output)",
        data.len(),
        out.len(),
        ratio(out.len(), data.len())
    );
    write_output(opts, &out, decoded_name)
}
