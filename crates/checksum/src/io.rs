//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and checksum exactly the bytes that pass
//! through them (short reads and writes included). Every named variant type
//! works with both.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use checksum::{Checksum, ChecksumReader, Crc32Standard};
//!
//! let mut reader: ChecksumReader<_, Crc32Standard> = Crc32Standard::reader(Cursor::new(b"123456789".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.checksum(), 0xCBF4_3926);
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};
