//! Ink scanning
//!
//! Recovers the tight box of drawn pixels from an RGBA buffer. A pixel is
//! ink when any color channel is non-zero; alpha is not consulted, so the
//! background must be transparent black.

/// Borrowed row-major RGBA pixel data
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        Self { data, width, height }
    }

    /// Iterate complete scanlines, ignoring any truncated tail
    fn rows(&self) -> impl Iterator<Item = (u32, &'a [u8])> {
        let stride = self.width as usize * 4;
        let data = if stride == 0 { &[][..] } else { self.data };
        data.chunks_exact(stride.max(1))
            .take(self.height as usize)
            .enumerate()
            .map(|(y, row)| (y as u32, row))
    }
}

fn is_ink(pixel: &[u8]) -> bool {
    pixel[0] > 0 || pixel[1] > 0 || pixel[2] > 0
}

/// Leftmost and rightmost ink columns of one scanline
fn scanline_extent(row: &[u8]) -> Option<(u32, u32)> {
    let mut columns = row
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, pixel)| is_ink(pixel))
        .map(|(x, _)| x as u32);
    let left = columns.next()?;
    let right = columns.last().unwrap_or(left);
    Some((left, right))
}

/// Vertical ink extent, half-open: `bottom` is one past the last ink row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkRows {
    pub top: u32,
    pub bottom: u32,
}

impl InkRows {
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Tight ink rectangle, half-open on the right and bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl InkBounds {
    /// Scan every scanline for its ink extent and combine them.
    ///
    /// Returns `None` when the buffer holds no ink at all.
    pub fn scan(pixels: &PixelBuffer<'_>) -> Option<Self> {
        let mut bounds: Option<InkBounds> = None;

        for (y, row) in pixels.rows() {
            let Some((left, right)) = scanline_extent(row) else {
                continue;
            };
            bounds = Some(match bounds {
                None => InkBounds {
                    left,
                    top: y,
                    right: right + 1,
                    bottom: y + 1,
                },
                Some(b) => InkBounds {
                    left: b.left.min(left),
                    top: b.top,
                    right: b.right.max(right + 1),
                    bottom: y + 1,
                },
            });
        }

        bounds
    }

    /// Scan only for the first and last rows containing ink
    pub fn scan_rows(pixels: &PixelBuffer<'_>) -> Option<InkRows> {
        let mut rows = pixels
            .rows()
            .filter(|(_, row)| row.chunks_exact(4).any(is_ink))
            .map(|(y, _)| y);
        let top = rows.next()?;
        let last = rows.last().unwrap_or(top);
        Some(InkRows {
            top,
            bottom: last + 1,
        })
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(width: u32, height: u32, ink: &[(u32, u32)]) -> Vec<u8> {
        let mut data = vec![0u8; (width * height * 4) as usize];
        for &(x, y) in ink {
            let i = ((y * width + x) * 4) as usize;
            data[i..i + 4].copy_from_slice(&[102, 102, 102, 255]);
        }
        data
    }

    #[test]
    fn test_single_pixel() {
        let data = buffer_with(10, 8, &[(3, 5)]);
        let pixels = PixelBuffer::new(&data, 10, 8);
        let bounds = InkBounds::scan(&pixels).unwrap();
        assert_eq!(
            bounds,
            InkBounds {
                left: 3,
                top: 5,
                right: 4,
                bottom: 6
            }
        );
        assert_eq!(bounds.width(), 1);
        assert_eq!(bounds.height(), 1);
    }

    #[test]
    fn test_origin_pixel_counts() {
        let data = buffer_with(4, 4, &[(0, 0)]);
        let bounds = InkBounds::scan(&PixelBuffer::new(&data, 4, 4)).unwrap();
        assert_eq!((bounds.left, bounds.top), (0, 0));
        assert_eq!((bounds.width(), bounds.height()), (1, 1));
    }

    #[test]
    fn test_extent_across_scanlines() {
        // Leftmost ink on one row, rightmost on another
        let data = buffer_with(20, 10, &[(5, 2), (12, 2), (2, 6), (8, 6), (15, 7)]);
        let bounds = InkBounds::scan(&PixelBuffer::new(&data, 20, 10)).unwrap();
        assert_eq!(
            bounds,
            InkBounds {
                left: 2,
                top: 2,
                right: 16,
                bottom: 8
            }
        );
    }

    #[test]
    fn test_no_ink() {
        let data = buffer_with(6, 6, &[]);
        let pixels = PixelBuffer::new(&data, 6, 6);
        assert_eq!(InkBounds::scan(&pixels), None);
        assert_eq!(InkBounds::scan_rows(&pixels), None);
    }

    #[test]
    fn test_alpha_only_is_not_ink() {
        let mut data = buffer_with(3, 3, &[]);
        data[4 * 4 + 3] = 255;
        assert_eq!(InkBounds::scan(&PixelBuffer::new(&data, 3, 3)), None);
    }

    #[test]
    fn test_single_channel_is_ink() {
        let mut data = buffer_with(3, 3, &[]);
        data[(2 * 3 + 1) * 4 + 2] = 1;
        let bounds = InkBounds::scan(&PixelBuffer::new(&data, 3, 3)).unwrap();
        assert_eq!((bounds.left, bounds.top), (1, 2));
    }

    #[test]
    fn test_scan_rows() {
        let data = buffer_with(5, 9, &[(1, 3), (4, 6)]);
        let rows = InkBounds::scan_rows(&PixelBuffer::new(&data, 5, 9)).unwrap();
        assert_eq!(rows, InkRows { top: 3, bottom: 7 });
        assert_eq!(rows.height(), 4);
    }

    #[test]
    fn test_zero_sized_buffer() {
        let pixels = PixelBuffer::new(&[], 0, 10);
        assert_eq!(InkBounds::scan(&pixels), None);
        let pixels = PixelBuffer::new(&[], 10, 0);
        assert_eq!(InkBounds::scan_rows(&pixels), None);
    }

    #[test]
    fn test_truncated_buffer_ignores_partial_row() {
        let mut data = buffer_with(2, 2, &[(0, 0)]);
        data.truncate(12);
        let bounds = InkBounds::scan(&PixelBuffer::new(&data, 2, 2)).unwrap();
        assert_eq!(bounds.bottom, 1);
    }
}
