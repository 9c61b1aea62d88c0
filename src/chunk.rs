use crate::{reader::AseReader, FormatError, Result};

pub(crate) const CHUNK_HEADER_SIZE: usize = 6;

/// The type of a chunk inside a frame.
///
/// Only [ChunkType::Cel] and [ChunkType::Tags] are interpreted by this crate.
/// All other chunks are kept with their raw payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ChunkType {
    OldPalette04, // deprecated
    OldPalette11, // deprecated
    Layer,
    Cel,
    CelExtra,
    ColorProfile,
    ExternalFiles,
    Mask, // deprecated
    Path,
    Tags,
    Palette,
    UserData,
    Slice,
    Tileset,
    /// A type code this crate does not know.
    Unknown(u16),
}

impl ChunkType {
    /// Map a raw type code to a chunk type. Never fails; unrecognized codes
    /// become [ChunkType::Unknown].
    pub fn from_code(code: u16) -> Self {
        match code {
            0x0004 => ChunkType::OldPalette04,
            0x0011 => ChunkType::OldPalette11,
            0x2004 => ChunkType::Layer,
            0x2005 => ChunkType::Cel,
            0x2006 => ChunkType::CelExtra,
            0x2007 => ChunkType::ColorProfile,
            0x2008 => ChunkType::ExternalFiles,
            0x2016 => ChunkType::Mask,
            0x2017 => ChunkType::Path,
            0x2018 => ChunkType::Tags,
            0x2019 => ChunkType::Palette,
            0x2020 => ChunkType::UserData,
            0x2022 => ChunkType::Slice,
            0x2023 => ChunkType::Tileset,
            other => ChunkType::Unknown(other),
        }
    }

    /// The raw type code.
    pub fn code(&self) -> u16 {
        match self {
            ChunkType::OldPalette04 => 0x0004,
            ChunkType::OldPalette11 => 0x0011,
            ChunkType::Layer => 0x2004,
            ChunkType::Cel => 0x2005,
            ChunkType::CelExtra => 0x2006,
            ChunkType::ColorProfile => 0x2007,
            ChunkType::ExternalFiles => 0x2008,
            ChunkType::Mask => 0x2016,
            ChunkType::Path => 0x2017,
            ChunkType::Tags => 0x2018,
            ChunkType::Palette => 0x2019,
            ChunkType::UserData => 0x2020,
            ChunkType::Slice => 0x2022,
            ChunkType::Tileset => 0x2023,
            ChunkType::Unknown(code) => *code,
        }
    }
}

/// A typed record inside a frame. The payload is not interpreted until a
/// caller asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub(crate) chunk_type: ChunkType,
    pub(crate) data: Vec<u8>,
}

impl Chunk {
    /// Type of this chunk.
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    /// Payload bytes, excluding the 6-byte size and type prefix.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the chunk as stored in the file, including its prefix.
    pub fn declared_size(&self) -> usize {
        self.data.len() + CHUNK_HEADER_SIZE
    }
}

pub(crate) fn decode_chunk(reader: &mut AseReader) -> Result<Chunk> {
    let chunk_size = reader.dword()? as usize;
    let chunk_type = ChunkType::from_code(reader.word()?);

    if chunk_size < CHUNK_HEADER_SIZE {
        return Err(FormatError::Malformed(format!(
            "Chunk size is too small {}, minimum_size: {}",
            chunk_size, CHUNK_HEADER_SIZE
        )));
    }

    let data = reader.bytes(chunk_size - CHUNK_HEADER_SIZE)?.to_vec();
    Ok(Chunk { chunk_type, data })
}
