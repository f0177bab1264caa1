use std::fmt;

use crc::{Crc, CRC_32_ISCSI};

const CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

#[derive(Debug)]
pub struct ChecksumMismatch {
    pub expected: u32,
    pub actual: u32,
}

impl fmt::Display for ChecksumMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checksum mismatch: expected {:08x}, got {:08x}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for ChecksumMismatch {}

/// Opaque compressed contents of a single source file.
///
/// The default value is the empty record, which carries no bytes and a zero
/// checksum. Any record built from actual content is non-empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CompressedSourceFile {
    bytes: Vec<u8>,
    crc: u32,
}

impl CompressedSourceFile {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Self::empty();
        }
        let crc = CRC.checksum(&bytes);
        Self { bytes, crc }
    }

    /// Same as `CompressedSourceFile::default()`, but usable in `const` context.
    pub const fn empty() -> Self {
        Self {
            bytes: Vec::new(),
            crc: 0,
        }
    }

    /// Rebuild a record from bytes and a checksum computed elsewhere.
    /// Use `verify` to check they agree.
    pub fn from_parts(bytes: Vec<u8>, crc: u32) -> Self {
        Self { bytes, crc }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True only for the canonical empty record. No bytes with a nonzero
    /// checksum is a corrupt record, not an empty one.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty() && self.crc == 0
    }

    pub fn verify(&self) -> Result<(), ChecksumMismatch> {
        let actual = if self.bytes.is_empty() {
            0
        } else {
            CRC.checksum(&self.bytes)
        };
        if actual != self.crc {
            return Err(ChecksumMismatch {
                expected: self.crc,
                actual,
            });
        }
        Ok(())
    }
}

impl fmt::Display for CompressedSourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<empty>");
        }
        write!(f, "{} bytes, crc {:08x}", self.len(), self.crc)
    }
}
