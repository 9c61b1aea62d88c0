use crate::{reader::AseReader, Result};
use std::{fmt, ops::RangeInclusive};

/// A tag is a grouping of one or more frames.
///
/// The frame range is taken from the file as is. A malformed file may contain
/// tags whose range is reversed or reaches past the last frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name. Not necessarily unique.
    pub name: String,
    /// First frame of the tag.
    pub from_frame: u16,
    /// Last frame of the tag, inclusive.
    pub to_frame: u16,
    /// Playback direction.
    pub direction: AnimationDirection,
    /// How often the animation plays. 0 means forever.
    pub repeat: u16,
    /// Deprecated tag color as red, green, blue.
    pub color: [u8; 3],
}

impl Tag {
    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The frames covered by this tag. Empty if `from_frame > to_frame`.
    pub fn frames(&self) -> RangeInclusive<u32> {
        self.from_frame as u32..=self.to_frame as u32
    }

    /// Returns `true` if the animation loops forever.
    pub fn is_infinite(&self) -> bool {
        self.repeat == 0
    }
}

/// Describes how the frames of a [Tag] are played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationDirection {
    /// Start to end, then start again.
    Forward,
    /// End to start, then end again.
    Reverse,
    /// Start to end, then back to start.
    PingPong,
    /// End to start, then back to end.
    PingPongReverse,
    /// A direction code this crate does not know.
    Unknown(u8),
}

impl AnimationDirection {
    fn from_code(code: u8) -> Self {
        match code {
            0 => AnimationDirection::Forward,
            1 => AnimationDirection::Reverse,
            2 => AnimationDirection::PingPong,
            3 => AnimationDirection::PingPongReverse,
            other => AnimationDirection::Unknown(other),
        }
    }
}

impl fmt::Display for AnimationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationDirection::Forward => write!(f, "Forward"),
            AnimationDirection::Reverse => write!(f, "Reverse"),
            AnimationDirection::PingPong => write!(f, "Ping-pong"),
            AnimationDirection::PingPongReverse => write!(f, "Ping-pong Reverse"),
            AnimationDirection::Unknown(code) => write!(f, "Unknown ({})", code),
        }
    }
}

pub(crate) fn decode_tags(data: &[u8]) -> Result<Vec<Tag>> {
    let mut reader = AseReader::new(data);

    let num_tags = reader.word()?;
    reader.skip_reserved(8)?;

    let mut result = Vec::with_capacity(num_tags as usize);

    for _tag in 0..num_tags {
        let from_frame = reader.word()?;
        let to_frame = reader.word()?;
        let direction = AnimationDirection::from_code(reader.byte()?);
        let repeat = reader.word()?;
        reader.skip_reserved(6)?;
        let red = reader.byte()?;
        let green = reader.byte()?;
        let blue = reader.byte()?;
        reader.skip_reserved(1)?;
        let name = reader.string()?;
        result.push(Tag {
            name,
            from_frame,
            to_frame,
            direction,
            repeat,
            color: [red, green, blue],
        });
    }

    Ok(result)
}
