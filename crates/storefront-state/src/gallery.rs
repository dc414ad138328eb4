//! Image gallery cursor.

/// Selected image within a fixed-length gallery.
///
/// The index always stays in `[0, len)`. Every operation is a no-op on an
/// empty gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    /// Create a gallery over `len` images, starting at the first one.
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Thumbnails are only worth showing with more than one image.
    pub fn has_thumbnails(&self) -> bool {
        self.len > 1
    }

    /// Advance, wrapping from the last image to the first.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Step back, wrapping from the first image to the last.
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to a thumbnail. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Position shown to shoppers (1-based).
    pub fn position(&self) -> usize {
        self.index + 1
    }
}
