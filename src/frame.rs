use crate::{
    cel::{self, Cel},
    chunk::{self, Chunk, ChunkType},
    reader::AseReader,
    CelError, Result,
};
use log::debug;

const FRAME_MAGIC_NUMBER: u16 = 0xF1FA;

/// The fixed-size header in front of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Bytes in this frame, header included.
    pub frame_bytes: u32,
    /// Always `0xF1FA` in files written by Aseprite.
    pub magic_number: u16,
    /// Old 16 bit chunk counter. Superseded by `chunk_count` when nonzero.
    pub legacy_chunk_count: u16,
    /// Frame duration in milliseconds.
    pub duration_ms: u16,
    /// Number of chunks. Zero in files that only use the legacy counter.
    pub chunk_count: u32,
}

impl FrameHeader {
    /// Number of chunks that follow the header.
    pub fn num_chunks(&self) -> u32 {
        if self.chunk_count == 0 {
            self.legacy_chunk_count as u32
        } else {
            self.chunk_count
        }
    }
}

/// A single animation frame and its chunks in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub(crate) header: FrameHeader,
    pub(crate) chunks: Vec<Chunk>,
}

impl Frame {
    /// The frame header.
    pub fn header(&self) -> &FrameHeader {
        &self.header
    }

    /// Frame duration in milliseconds.
    pub fn duration(&self) -> u32 {
        self.header.duration_ms as u32
    }

    /// All chunks in file order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Decodes every cel chunk of this frame, in chunk order. Cels are not
    /// cached; each call inflates the pixel data again.
    pub fn cels(&self) -> impl Iterator<Item = std::result::Result<Cel, CelError>> + '_ {
        self.chunks
            .iter()
            .filter(|chunk| chunk.chunk_type == ChunkType::Cel)
            .map(|chunk| cel::decode_cel(&chunk.data))
    }
}

pub(crate) fn decode_frame(reader: &mut AseReader) -> Result<Frame> {
    let start = reader.position();
    let frame_bytes = reader.dword()?;
    let magic_number = reader.word()?;
    if magic_number != FRAME_MAGIC_NUMBER {
        debug!(
            "Unexpected frame magic number: {:x} != {:x}",
            magic_number, FRAME_MAGIC_NUMBER
        );
    }
    let legacy_chunk_count = reader.word()?;
    let duration_ms = reader.word()?;
    reader.skip_reserved(2)?;
    let chunk_count = reader.dword()?;

    let header = FrameHeader {
        frame_bytes,
        magic_number,
        legacy_chunk_count,
        duration_ms,
        chunk_count,
    };

    let num_chunks = header.num_chunks();
    let mut chunks = Vec::with_capacity(num_chunks.min(1024) as usize);
    for _idx in 0..num_chunks {
        chunks.push(chunk::decode_chunk(reader)?);
    }

    let consumed = reader.position() - start;
    if consumed != frame_bytes as usize {
        debug!(
            "Frame declares {} bytes but its header and chunks span {} bytes",
            frame_bytes, consumed
        );
    }

    Ok(Frame { header, chunks })
}
