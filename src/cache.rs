use crate::{Diagnostic, Document, FrameIndexError};
use image::RgbaImage;
use std::sync::{Arc, OnceLock};

/// Memoizes frame images of a shared [Document].
///
/// Each frame is composited at most once, even when several threads request
/// it at the same time. Since documents never change, entries are never
/// invalidated.
#[derive(Debug)]
pub struct FrameCache {
    document: Arc<Document>,
    frames: Vec<OnceLock<Arc<RgbaImage>>>,
}

impl FrameCache {
    /// Create an empty cache for `document`.
    pub fn new(document: Arc<Document>) -> Self {
        let frames = (0..document.num_frames()).map(|_| OnceLock::new()).collect();
        FrameCache { document, frames }
    }

    /// The cached document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The image of frame `index`, compositing it on first use.
    pub fn frame_image(&self, index: usize) -> Result<Arc<RgbaImage>, FrameIndexError> {
        let slot = self.frames.get(index).ok_or(FrameIndexError {
            index,
            num_frames: self.frames.len(),
        })?;
        let image = slot.get_or_init(|| {
            let frame = &self.document.frames[index];
            Arc::new(self.document.render_frame(index, frame, &mut |_: Diagnostic| {}))
        });
        Ok(Arc::clone(image))
    }

    /// Number of frames composited so far.
    pub fn num_cached(&self) -> usize {
        self.frames.iter().filter(|slot| slot.get().is_some()).count()
    }
}
