use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGE_COUNT: usize = HEIGHT / 8;

pub type Page = [u8; WIDTH];

/// SSD1306-layout framebuffer: each byte is an 8-pixel column of one page,
/// least significant bit on top.
///
/// Drawing happens in RAM; a flush then hands out one page per call so the
/// bus transfer can be spread over several scheduler polls.
pub struct PagedFrame {
    pages: [Page; PAGE_COUNT],
    flush_cursor: Option<u8>,
}

impl PagedFrame {
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGE_COUNT],
            flush_cursor: None,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let bit = 1 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    pub fn lit_pixels(&self) -> usize {
        self.pages
            .iter()
            .flatten()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    /// Restarts the page walk from the top. A flush already in progress is
    /// abandoned.
    pub fn begin_flush(&mut self) {
        self.flush_cursor = Some(0);
    }

    pub fn next_page(&mut self) -> Option<(u8, Page)> {
        let page = self.flush_cursor?;
        let next = page + 1;
        self.flush_cursor = (usize::from(next) < PAGE_COUNT).then_some(next);
        Some((page, self.pages[usize::from(page)]))
    }

    pub fn is_flushing(&self) -> bool {
        self.flush_cursor.is_some()
    }
}

impl Default for PagedFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for PagedFrame {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for PagedFrame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<It>(&mut self, pixels: It) -> Result<(), Self::Error>
    where
        It: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color == BinaryColor::On);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color == BinaryColor::On { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            page.fill(fill);
        }
        Ok(())
    }
}
