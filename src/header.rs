use crate::{reader::AseReader, Result};
use bitflags::bitflags;

pub(crate) const MAGIC_NUMBER: u16 = 0xA5E0;
pub(crate) const HEADER_SIZE: usize = 128;

bitflags! {
    /// Flags stored in the file header.
    pub struct HeaderFlags: u32 {
        /// Layer opacity has a valid value.
        const LAYER_OPACITY_VALID = 0x0001;
        /// Layer blend mode and opacity are valid for group layers.
        const GROUP_OPACITY_VALID = 0x0002;
        /// Layers carry a UUID.
        const LAYER_UUID = 0x0004;
    }
}

/// Pixel format of the source Aseprite file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Red, green, blue, and alpha with 8 bits each.
    Rgba,
    /// 8 bit grayscale and 8 bit alpha,
    Grayscale,
    /// Indexed color. Rendered as grayscale by this crate since palettes are
    /// not resolved.
    #[allow(missing_docs)]
    Indexed { transparent_color_index: u8 },
}

impl PixelFormat {
    /// Number of bytes to store one pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgba => 4,
            PixelFormat::Grayscale => 2,
            PixelFormat::Indexed { .. } => 1,
        }
    }
}

/// The fixed-size file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Size of the whole file in bytes, as declared by the producer.
    pub file_size: u32,
    /// Always `0xA5E0` in a valid file.
    pub magic_number: u16,
    /// Number of frames following the header.
    pub frame_count: u16,
    /// Canvas width in pixels.
    pub width: u16,
    /// Canvas height in pixels.
    pub height: u16,
    /// Bits per pixel: 32 = RGBA, 16 = grayscale, 8 = indexed.
    pub color_depth: u16,
    /// Raw header flags. See [Header::header_flags].
    pub flags: u32,
    /// Deprecated. Each frame has its own duration now.
    pub speed: u16,
    /// Palette entry that is transparent in non-background layers
    /// (indexed sprites only).
    pub transparent_index: u8,
    /// Number of colors in the palette. 0 means 256 for old sprites.
    pub palette_size: u16,
    /// Pixel width and height. If either is zero the ratio is 1:1.
    pub pixel_aspect: (u8, u8),
    /// Grid position.
    pub grid_origin: (i16, i16),
    /// Grid width and height. Zero if there is no grid.
    pub grid_size: (u16, u16),
}

impl Header {
    /// Known flags; unknown bits are dropped.
    pub fn header_flags(&self) -> HeaderFlags {
        HeaderFlags::from_bits_truncate(self.flags)
    }

    /// The pixel format matching `color_depth`, if it is one of 8, 16, or 32.
    pub fn pixel_format(&self) -> Option<PixelFormat> {
        match self.color_depth {
            8 => Some(PixelFormat::Indexed {
                transparent_color_index: self.transparent_index,
            }),
            16 => Some(PixelFormat::Grayscale),
            32 => Some(PixelFormat::Rgba),
            _ => None,
        }
    }
}

// file format docs: https://github.com/aseprite/aseprite/blob/master/docs/ase-file-specs.md
pub(crate) fn decode_header(reader: &mut AseReader) -> Result<Header> {
    reader.ensure(HEADER_SIZE)?;

    let file_size = reader.dword()?;
    let magic_number = reader.word()?;
    let frame_count = reader.word()?;
    let width = reader.word()?;
    let height = reader.word()?;
    let color_depth = reader.word()?;
    let flags = reader.dword()?;
    let speed = reader.word()?;
    reader.skip_reserved(8)?;
    let transparent_index = reader.byte()?;
    reader.skip_reserved(3)?;
    let palette_size = reader.word()?;
    let pixel_width = reader.byte()?;
    let pixel_height = reader.byte()?;
    let grid_x = reader.short()?;
    let grid_y = reader.short()?;
    let grid_width = reader.word()?;
    let grid_height = reader.word()?;
    reader.skip_reserved(84)?;

    Ok(Header {
        file_size,
        magic_number,
        frame_count,
        width,
        height,
        color_depth,
        flags,
        speed,
        transparent_index,
        palette_size,
        pixel_aspect: (pixel_width, pixel_height),
        grid_origin: (grid_x, grid_y),
        grid_size: (grid_width, grid_height),
    })
}
