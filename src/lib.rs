#![warn(clippy::all)]
#![warn(missing_docs)]
/*!

Decoder for [Aseprite](https://www.aseprite.org/) animation files. This
library directly reads the binary Aseprite files ([file format
specification][spec]) and gives you two things: the image of any frame as an
RGBA raster, and the animation tags (named frame ranges) defined in the file.

[spec]: https://github.com/aseprite/aseprite/blob/master/docs/ase-file-specs.md

# Basic Usage

## Load file

Use [Document::read_file] to load a file from disk, or [decode] if the bytes
are already in memory.

```no_run
use aseread::Document;
# use std::path::Path;
# let path = Path::new("./sprite.aseprite");
let doc = Document::read_file(&path).unwrap();

println!("Size: {}x{}", doc.width(), doc.height());
println!("Frames: {}", doc.num_frames());
```

## Frame images

[Document::frame_image] paints every cel of a frame, in file order, onto a
transparent canvas and returns an `image::RgbaImage` from the
[image](https://docs.rs/image) library.

```no_run
# use aseread::Document;
# use std::path::Path;
# let doc = Document::read_file(Path::new("./sprite.aseprite")).unwrap();
let image = doc.frame_image(0).unwrap();
assert_eq!(image.dimensions(), (doc.width() as u32, doc.height() as u32));
```

Only compressed image cels are rendered. Other cel types, and cels whose data
is corrupt, are skipped and reported as a [Diagnostic]. The frame image is
still produced.

Cels are decoded again on every call. If you render the same frames
repeatedly, wrap the document in a [FrameCache].

## Tags

```no_run
# use aseread::Document;
# use std::path::Path;
# let doc = Document::read_file(Path::new("./sprite.aseprite")).unwrap();
for tag in doc.tags() {
    println!("{}: frames {:?} ({})", tag.name(), tag.frames(), tag.direction);
}
let walk = doc.tag_by_name("Walk");
```

Tag frame ranges are not checked against the number of frames.

*/

pub(crate) mod cache;
pub(crate) mod cel;
pub(crate) mod chunk;
pub(crate) mod diagnostic;
pub(crate) mod document;
pub(crate) mod error;
pub(crate) mod frame;
pub(crate) mod header;
pub(crate) mod pixel;
pub(crate) mod reader;
pub(crate) mod tags;

/// A specialized `Result` type for Aseprite decoding functions.
pub type Result<T> = std::result::Result<T, FormatError>;

pub use cache::FrameCache;
pub use cel::{Cel, CelType};
pub use chunk::{Chunk, ChunkType};
pub use diagnostic::Diagnostic;
pub use document::Document;
pub use error::{CelError, FormatError, FrameIndexError, LoadError};
pub use frame::{Frame, FrameHeader};
pub use header::{Header, HeaderFlags, PixelFormat};
pub use pixel::{apply_opacity, composite};
pub use tags::{AnimationDirection, Tag};

/// Decode an Aseprite file from an in-memory buffer.
///
/// Shorthand for [Document::decode].
pub fn decode(data: &[u8]) -> Result<Document> {
    Document::decode(data)
}
