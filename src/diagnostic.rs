use crate::{CelError, FormatError};
use std::fmt;

/// A recoverable problem found while decoding. The affected data is skipped
/// and decoding continues.
///
/// Diagnostics are always logged with [log::warn]. Use
/// [Document::decode_with](crate::Document::decode_with) or
/// [Document::frame_image_with](crate::Document::frame_image_with) to receive
/// them directly.
#[derive(Debug)]
pub enum Diagnostic {
    /// A Tags chunk could not be decoded and contributed no tags.
    TagsSkipped {
        /// Frame containing the chunk.
        frame: usize,
        /// Position of the chunk within the frame.
        chunk: usize,
        /// Why decoding failed.
        error: FormatError,
    },
    /// A cel could not be decoded and was left out of the frame image.
    CelSkipped {
        /// Frame containing the cel.
        frame: usize,
        /// Position of the cel's chunk within the frame.
        chunk: usize,
        /// Why decoding failed.
        error: CelError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TagsSkipped {
                frame,
                chunk,
                error,
            } => write!(
                f,
                "Ignoring tags chunk {} in frame {}: {}",
                chunk, frame, error
            ),
            Diagnostic::CelSkipped {
                frame,
                chunk,
                error,
            } => write!(f, "Skipping cel chunk {} in frame {}: {}", chunk, frame, error),
        }
    }
}

pub(crate) fn report(diagnostic: Diagnostic, sink: &mut impl FnMut(Diagnostic)) {
    log::warn!("{}", diagnostic);
    sink(diagnostic);
}
