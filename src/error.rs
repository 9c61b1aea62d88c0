use std::{error::Error, fmt, io};

use crate::cel::CelType;

/// A fatal error while decoding an Aseprite file. No [Document](crate::Document)
/// is produced when one of these occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The header's magic number is not `0xA5E0`.
    BadMagic {
        /// The value found at the magic number offset.
        found: u16,
    },
    /// The input ended in the middle of a record.
    Truncated {
        /// Bytes required by the record being read.
        needed: usize,
        /// Bytes left in the input.
        available: usize,
    },
    /// A structurally invalid record. String contains detailed message.
    Malformed(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::BadMagic { found } => write!(
                f,
                "Invalid magic number for header: {:x} != {:x}",
                found,
                crate::header::MAGIC_NUMBER
            ),
            FormatError::Truncated { needed, available } => write!(
                f,
                "Unexpected end of input: needed {} bytes, {} available",
                needed, available
            ),
            FormatError::Malformed(msg) => write!(f, "Malformed Aseprite input: {}", msg),
        }
    }
}

impl Error for FormatError {}

/// An error decoding a single cel. Cel errors never abort a frame image;
/// the affected cel is skipped.
#[derive(Debug)]
pub enum CelError {
    /// The cel uses an encoding other than a compressed image.
    UnsupportedType(CelType),
    /// The compressed pixel stream is invalid.
    Decompress(io::Error),
    /// The fixed cel fields could not be read.
    Format(FormatError),
}

impl From<FormatError> for CelError {
    fn from(err: FormatError) -> Self {
        CelError::Format(err)
    }
}

impl fmt::Display for CelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CelError::UnsupportedType(cel_type) => {
                write!(f, "Unsupported cel type: {:?}", cel_type)
            }
            CelError::Decompress(err) => write!(f, "Could not inflate cel pixels: {}", err),
            CelError::Format(err) => write!(f, "Invalid cel: {}", err),
        }
    }
}

impl Error for CelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CelError::Decompress(err) => Some(err),
            CelError::Format(err) => Some(err),
            CelError::UnsupportedType(_) => None,
        }
    }
}

/// A frame index was requested that the document does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameIndexError {
    /// The requested index.
    pub index: usize,
    /// Number of frames in the document.
    pub num_frames: usize,
}

impl fmt::Display for FrameIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame index {} out of range (document has {} frames)",
            self.index, self.num_frames
        )
    }
}

impl Error for FrameIndexError {}

/// An error while loading a document from a file or reader.
#[derive(Debug)]
pub enum LoadError {
    /// The input could not be read.
    Io(io::Error),
    /// The input was read but could not be decoded.
    Format(FormatError),
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<FormatError> for LoadError {
    fn from(err: FormatError) -> Self {
        LoadError::Format(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "I/O error: {}", err),
            LoadError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Format(err) => Some(err),
        }
    }
}
