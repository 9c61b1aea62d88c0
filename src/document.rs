use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    cel,
    chunk::ChunkType,
    diagnostic::{self, Diagnostic},
    frame::{self, Frame},
    header::{self, Header},
    pixel,
    reader::AseReader,
    tags, FormatError, FrameIndexError, LoadError, Result, Tag,
};
use image::RgbaImage;
use log::debug;

/// A decoded Aseprite file.
///
/// A document is immutable. Frame images are composited on request, so a
/// single document can be shared between threads and rendered concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) header: Header,
    pub(crate) frames: Vec<Frame>,
    pub(crate) tags: Vec<Tag>,
}

impl Document {
    /// Load an Aseprite file. Loads the full file into memory.
    pub fn read_file(path: &Path) -> std::result::Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Load an Aseprite file from any input that implements `std::io::Read`.
    pub fn read<R: Read>(mut input: R) -> std::result::Result<Self, LoadError> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;
        Ok(Self::decode(&data)?)
    }

    /// Decode a document from an in-memory buffer.
    ///
    /// Tags chunks that fail to decode are skipped and logged.
    pub fn decode(data: &[u8]) -> Result<Self> {
        Self::decode_with(data, |_| {})
    }

    /// Like [Document::decode], but also hands every skipped Tags chunk to
    /// `on_diagnostic`.
    pub fn decode_with<F>(data: &[u8], mut on_diagnostic: F) -> Result<Self>
    where
        F: FnMut(Diagnostic),
    {
        let mut reader = AseReader::new(data);
        let header = header::decode_header(&mut reader)?;
        if header.magic_number != header::MAGIC_NUMBER {
            return Err(FormatError::BadMagic {
                found: header.magic_number,
            });
        }

        let mut frames = Vec::with_capacity(header.frame_count as usize);
        let mut tags = Vec::new();

        for frame_id in 0..header.frame_count as usize {
            let frame = frame::decode_frame(&mut reader).map_err(|err| match err {
                FormatError::Malformed(msg) => {
                    FormatError::Malformed(format!("frame {}: {}", frame_id, msg))
                }
                other => other,
            })?;

            for (chunk_id, chunk) in frame.chunks.iter().enumerate() {
                match chunk.chunk_type {
                    ChunkType::Tags => match tags::decode_tags(&chunk.data) {
                        Ok(chunk_tags) => tags.extend(chunk_tags),
                        Err(error) => diagnostic::report(
                            Diagnostic::TagsSkipped {
                                frame: frame_id,
                                chunk: chunk_id,
                                error,
                            },
                            &mut on_diagnostic,
                        ),
                    },
                    // Decoded lazily by frame_image.
                    ChunkType::Cel => {}
                    other => debug!("Ignoring chunk type: {:?}", other),
                }
            }

            frames.push(frame);
        }

        if reader.remaining() > 0 {
            debug!("Ignoring {} trailing bytes", reader.remaining());
        }

        Ok(Document {
            header,
            frames,
            tags,
        })
    }

    /// The file header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.header.width as usize
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.header.height as usize
    }

    /// Width and height in pixels.
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Number of animation frames.
    pub fn num_frames(&self) -> u32 {
        self.frames.len() as u32
    }

    /// All frames in file order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// A single frame, if `index` is in range.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Duration of a frame in milliseconds.
    pub fn frame_duration(&self, index: usize) -> Option<u32> {
        self.frame(index).map(Frame::duration)
    }

    /// Total number of tags.
    pub fn num_tags(&self) -> u32 {
        self.tags.len() as u32
    }

    /// Get a reference to the tag by ID.
    ///
    /// # Panics
    ///
    /// Panics if `tag_id` is not less than `num_tags`.
    pub fn tag(&self, tag_id: u32) -> &Tag {
        &self.tags[tag_id as usize]
    }

    /// All tags, in the order they appear in the file.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Lookup tag by name.
    ///
    /// If multiple tags with the same name exist, returns the first one.
    pub fn tag_by_name(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name() == name)
    }

    /// Construct the image of an animation frame.
    ///
    /// All cels of the frame are painted in chunk order onto a transparent
    /// canvas of the document's size. Cels that cannot be decoded are skipped
    /// and logged.
    pub fn frame_image(&self, index: usize) -> std::result::Result<RgbaImage, FrameIndexError> {
        self.frame_image_with(index, |_| {})
    }

    /// Like [Document::frame_image], but also hands every skipped cel to
    /// `on_diagnostic`.
    pub fn frame_image_with<F>(
        &self,
        index: usize,
        mut on_diagnostic: F,
    ) -> std::result::Result<RgbaImage, FrameIndexError>
    where
        F: FnMut(Diagnostic),
    {
        let frame = self.frames.get(index).ok_or(FrameIndexError {
            index,
            num_frames: self.frames.len(),
        })?;

        Ok(self.render_frame(index, frame, &mut on_diagnostic))
    }

    pub(crate) fn render_frame<F>(
        &self,
        index: usize,
        frame: &Frame,
        on_diagnostic: &mut F,
    ) -> RgbaImage
    where
        F: FnMut(Diagnostic),
    {
        let mut image = RgbaImage::new(self.header.width as u32, self.header.height as u32);

        for (chunk_id, chunk) in frame.chunks.iter().enumerate() {
            if chunk.chunk_type != ChunkType::Cel {
                continue;
            }
            match cel::decode_cel(&chunk.data) {
                Ok(cel) => pixel::composite(&mut image, &cel, self.header.color_depth),
                Err(error) => diagnostic::report(
                    Diagnostic::CelSkipped {
                        frame: index,
                        chunk: chunk_id,
                        error,
                    },
                    on_diagnostic,
                ),
            }
        }

        image
    }
}
