use crate::{reader::AseReader, CelError};

/// How a cel stores its pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelType {
    /// Uncompressed pixels.
    Raw,
    /// A reference to the cel of another frame.
    Linked,
    /// zlib-compressed pixels. The only type this crate can render.
    Compressed,
    /// A compressed tilemap.
    CompressedTilemap,
    /// A type code this crate does not know.
    Unknown(u16),
}

impl CelType {
    fn from_code(code: u16) -> Self {
        match code {
            0 => CelType::Raw,
            1 => CelType::Linked,
            2 => CelType::Compressed,
            3 => CelType::CompressedTilemap,
            other => CelType::Unknown(other),
        }
    }

    /// The raw type code.
    pub fn code(&self) -> u16 {
        match self {
            CelType::Raw => 0,
            CelType::Linked => 1,
            CelType::Compressed => 2,
            CelType::CompressedTilemap => 3,
            CelType::Unknown(code) => *code,
        }
    }
}

/// The pixel content of one layer in one frame, decoded from a Cel chunk.
///
/// Cels are built on demand and not cached, see [Frame::cels](crate::Frame::cels).
///
/// [Official docs for cels](https://www.aseprite.org/docs/cel/).
#[derive(Clone, PartialEq, Eq)]
pub struct Cel {
    /// Index of the layer this cel belongs to.
    pub layer_index: u16,
    /// Horizontal placement on the canvas. May be negative.
    pub x: i16,
    /// Vertical placement on the canvas. May be negative.
    pub y: i16,
    /// Cel opacity, applied on top of the pixel alpha.
    pub opacity: u8,
    /// Storage type. Always [CelType::Compressed] for a decoded cel.
    pub cel_type: CelType,
    /// Z-index relative to the layer order.
    pub z_index: i16,
    /// Width of the pixel block.
    pub width: u16,
    /// Height of the pixel block.
    pub height: u16,
    /// Inflated pixels, row-major, in the document's color depth.
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for Cel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cel")
            .field("layer_index", &self.layer_index)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("opacity", &self.opacity)
            .field("cel_type", &self.cel_type)
            .field("z_index", &self.z_index)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels", &format_args!("<{} bytes>", self.pixels.len()))
            .finish()
    }
}

impl Cel {
    /// Decode a cel from a Cel chunk payload.
    pub fn decode(payload: &[u8]) -> Result<Self, CelError> {
        decode_cel(payload)
    }

    /// Number of pixels in the cel's declared area.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

pub(crate) fn decode_cel(payload: &[u8]) -> Result<Cel, CelError> {
    let mut reader = AseReader::new(payload);
    let layer_index = reader.word()?;
    let x = reader.short()?;
    let y = reader.short()?;
    let opacity = reader.byte()?;
    let cel_type = CelType::from_code(reader.word()?);
    let z_index = reader.short()?;
    reader.skip_reserved(5)?;

    match cel_type {
        CelType::Compressed => {
            let width = reader.word()?;
            let height = reader.word()?;
            // Capacity hint only. RGBA is the widest pixel format.
            let expected_size = (width as usize * height as usize * 4).min(1 << 22);
            let pixels = reader.unzip(expected_size).map_err(CelError::Decompress)?;
            Ok(Cel {
                layer_index,
                x,
                y,
                opacity,
                cel_type,
                z_index,
                width,
                height,
                pixels,
            })
        }
        other => Err(CelError::UnsupportedType(other)),
    }
}
