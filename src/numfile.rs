//! Fixed-width integer sequences over any `Read`/`Write`.
//!
//! Values are stored as 4 little-endian bytes each, back to back, with no
//! header or framing. The reader therefore has to be told how many values
//! to expect.

use std::io::{self, Read, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumFileError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("truncated input: expected {expected} values, found {found}")]
    Truncated { expected: usize, found: usize },
}

/// Write each value as 4 little-endian bytes, in order.
pub fn write_i32s<W: Write>(writer: &mut W, values: &[i32]) -> Result<(), NumFileError> {
    for value in values {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

/// Read exactly `count` values back.
///
/// A stream that ends early yields [`NumFileError::Truncated`] with the
/// number of whole values recovered before it ran dry.
pub fn read_i32s<R: Read>(reader: &mut R, count: usize) -> Result<Vec<i32>, NumFileError> {
    let mut values = Vec::with_capacity(count);
    let mut buf = [0u8; 4];
    for _ in 0..count {
        match reader.read_exact(&mut buf) {
            Ok(()) => values.push(i32::from_le_bytes(buf)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(NumFileError::Truncated {
                    expected: count,
                    found: values.len(),
                });
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Seek, SeekFrom};

    #[test]
    fn test_round_trip_in_memory() {
        let values: Vec<i32> = (0..5).collect();
        let mut buf = Cursor::new(Vec::new());
        write_i32s(&mut buf, &values).unwrap();

        buf.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(read_i32s(&mut buf, values.len()).unwrap(), values);
    }

    #[test]
    fn test_little_endian_layout() {
        let mut buf = Vec::new();
        write_i32s(&mut buf, &[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(
            hex::encode(&buf),
            "0000000001000000020000000300000004000000"
        );
    }

    #[test]
    fn test_negative_values_survive() {
        let values = vec![-1, i32::MIN, i32::MAX];
        let mut buf = Cursor::new(Vec::new());
        write_i32s(&mut buf, &values).unwrap();

        buf.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(read_i32s(&mut buf, values.len()).unwrap(), values);
    }

    #[test]
    fn test_truncated_stream_reports_progress() {
        let mut buf = Vec::new();
        write_i32s(&mut buf, &[1, 2]).unwrap();
        buf.truncate(6); // chop the second value in half

        let err = read_i32s(&mut Cursor::new(buf), 2).unwrap_err();
        match err {
            NumFileError::Truncated { expected, found } => {
                assert_eq!((expected, found), (2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_round_trip_through_file() {
        let values: Vec<i32> = (0..5).collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write_i32s(&mut file, &values).unwrap();
        file.flush().unwrap();

        let mut reader = file.reopen().unwrap();
        assert_eq!(read_i32s(&mut reader, values.len()).unwrap(), values);
    }
}
