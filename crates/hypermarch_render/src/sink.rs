//! Output surfaces
//!
//! The camera draws through the [`OutputSink`] contract: axis-aligned RGBA
//! rectangles in device pixels, with y measured from the top.

/// A surface the camera can paint rectangles onto
pub trait OutputSink {
    /// Size of the surface in device pixels (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// Fill a rectangle with a single 8-bit RGBA color
    ///
    /// Parts of the rectangle outside the surface are ignored.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]) {
        (**self).fill_rect(x, y, width, height, rgba)
    }
}

/// In-memory RGBA8 surface, row-major from the top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Framebuffer {
    /// Create a transparent framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at a pixel, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major, ready for image encoders
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fill the whole surface with one color
    pub fn clear(&mut self, rgba: [u8; 4]) {
        self.pixels.fill(rgba);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl OutputSink for Framebuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y..y_end {
            let start = self.index(x.min(x_end), row);
            let end = self.index(x_end, row);
            self.pixels[start..end].fill(rgba);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn test_new_is_transparent() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.dimensions(), (4, 3));
        assert_eq!(fb.pixels().len(), 12);
        assert!(fb.pixels().iter().all(|p| *p == [0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_rect(1, 2, 2, 1, RED);

        assert_eq!(fb.pixel(1, 2), Some(RED));
        assert_eq!(fb.pixel(2, 2), Some(RED));
        assert_eq!(fb.pixel(0, 2), Some([0; 4]));
        assert_eq!(fb.pixel(3, 2), Some([0; 4]));
        assert_eq!(fb.pixel(1, 1), Some([0; 4]));
        assert_eq!(fb.pixel(1, 3), Some([0; 4]));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = Framebuffer::new(3, 3);
        fb.fill_rect(2, 2, 10, 10, RED);
        assert_eq!(fb.pixel(2, 2), Some(RED));
        assert_eq!(fb.pixels().iter().filter(|p| **p == RED).count(), 1);

        // Entirely outside
        fb.fill_rect(5, 0, 2, 2, RED);
        fb.fill_rect(u32::MAX, u32::MAX, u32::MAX, 1, RED);
        assert_eq!(fb.pixels().iter().filter(|p| **p == RED).count(), 1);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let fb = Framebuffer::new(2, 2);
        assert_eq!(fb.pixel(2, 0), None);
        assert_eq!(fb.pixel(0, 2), None);
    }

    #[test]
    fn test_as_bytes_layout() {
        let mut fb = Framebuffer::new(2, 1);
        fb.fill_rect(1, 0, 1, 1, [1, 2, 3, 4]);
        assert_eq!(fb.as_bytes(), &[0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sink_through_reference() {
        fn paint_corner<S: OutputSink>(mut sink: S) {
            assert_eq!(sink.dimensions(), (2, 2));
            sink.fill_rect(0, 0, 1, 1, RED);
        }

        let mut fb = Framebuffer::new(2, 2);
        paint_corner(&mut fb);
        assert_eq!(fb.pixel(0, 0), Some(RED));
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(RED);
        assert!(fb.pixels().iter().all(|p| *p == RED));
    }
}
