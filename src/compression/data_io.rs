use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};

use log::{error, info};

use crate::tools::cli::{Output, RleOpts};

/// Suffix added to encoded files.
pub const SUFFIX: &str = ".rle";

/// Read all of the input named in opts, or all of stdin when no file was given.
pub fn read_input(opts: &RleOpts) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match &opts.file {
        Some(fname) => {
            let mut fin = File::open(fname).map_err(|e| {
                error!("Cannot read from the file {}", fname);
                e
            })?;
            fin.read_to_end(&mut buf)?;
        }
        None => {
            io::stdin().lock().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

/// Output name for an encoded file: the input name plus .rle
pub fn encoded_name(input: &str) -> String {
    format!("{input}{SUFFIX}")
}

/// Output name for a decoded file: strip .rle, or append .out when there is none to strip.
pub fn decoded_name(input: &str) -> String {
    match input.strip_suffix(SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{input}.out"),
    }
}

/// Send data to stdout, or to the file named by applying `rename` to the input name.
/// Existing files are only replaced when forced. The input file is removed after a
/// successful file write unless it is to be kept.
pub fn write_output(opts: &RleOpts, data: &[u8], rename: fn(&str) -> String) -> io::Result<()> {
    let fname = match (opts.output, &opts.file) {
        (Output::File, Some(f)) => rename(f),
        _ => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            return out.flush();
        }
    };

    let mut open_opts = OpenOptions::new();
    open_opts.write(true);
    if opts.force_overwrite {
        open_opts.create(true).truncate(true);
    } else {
        open_opts.create_new(true);
    }
    let mut f_out = open_opts.open(&fname).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            error!("Output file {} already exists. Use -f to overwrite it.", fname);
        } else {
            error!("Cannot write to the file {}", fname);
        }
        e
    })?;
    f_out.write_all(data)?;
    info!("Wrote {} bytes to {}", data.len(), fname);

    if !opts.keep_input_files {
        if let Some(input) = &opts.file {
            fs::remove_file(input)?;
            info!("Removed input file {}", input);
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encoded_name_test() {
        assert_eq!(encoded_name("notes.txt"), "notes.txt.rle");
    }

    #[test]
    fn decoded_name_test() {
        assert_eq!(decoded_name("notes.txt.rle"), "notes.txt");
        assert_eq!(decoded_name("notes.txt"), "notes.txt.out");
        assert_eq!(decoded_name(".rle"), ".rle.out");
    }

    #[test]
    fn no_overwrite_test() {
        let input = std::env::temp_dir().join(format!("rle_no_overwrite_{}", std::process::id()));
        let input = input.to_string_lossy().to_string();
        let target = encoded_name(&input);
        fs::write(&input, b"aaa").unwrap();
        fs::write(&target, b"old").unwrap();

        let mut opts = RleOpts::new();
        opts.file = Some(input.clone());
        opts.output = Output::File;
        let result = write_output(&opts, b"3a", encoded_name);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::AlreadyExists);
        // Nothing was replaced or removed.
        assert_eq!(fs::read(&target).unwrap(), b"old");
        assert!(fs::metadata(&input).is_ok());

        opts.force_overwrite = true;
        write_output(&opts, b"3a", encoded_name).unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"3a");
        assert!(fs::metadata(&input).is_err());

        fs::remove_file(&target).unwrap();
    }
}
