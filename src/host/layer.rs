//! Composite display layer the overlay is pushed to

/// One layer of the host compositor that shows the selection overlay.
///
/// The renderer pushes a full RGBA frame after every redraw and clears
/// the layer on shutdown; the host decides how the frame reaches the
/// screen.
pub trait CompositeLayer {
    /// Replace the layer contents with a premultiplied RGBA frame
    fn replace(&mut self, width: u32, height: u32, rgba: &[u8]);

    /// Drop the layer contents
    fn clear(&mut self);
}

/// In-memory composite layer holding the most recent frame
#[derive(Debug, Default)]
pub struct BufferLayer {
    frame: Option<(u32, u32, Vec<u8>)>,
}

impl BufferLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last pushed frame, if any
    pub fn frame(&self) -> Option<(u32, u32, &[u8])> {
        self.frame.as_ref().map(|(w, h, data)| (*w, *h, data.as_slice()))
    }
}

impl CompositeLayer for BufferLayer {
    fn replace(&mut self, width: u32, height: u32, rgba: &[u8]) {
        self.frame = Some((width, height, rgba.to_vec()));
    }

    fn clear(&mut self) {
        self.frame = None;
    }
}
