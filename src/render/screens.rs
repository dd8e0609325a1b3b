use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use u8g2_fonts::{
    fonts,
    types::{FontColor, HorizontalAlignment, VerticalPosition},
    FontRenderer,
};

use super::text::screen_lines;
use crate::model::{ScreenContext, ScreenKind};

const HEADLINE_FONT: FontRenderer = FontRenderer::new::<fonts::u8g2_font_helvB12_tf>();
const BODY_FONT: FontRenderer = FontRenderer::new::<fonts::u8g2_font_helvB08_tf>();

/// Screens with more lines than this switch to the body font.
const HEADLINE_MAX_LINES: usize = 2;
const MAX_LINE_PITCH: i32 = 16;

/// Draws game screens onto any monochrome target.
pub struct ScreenPainter<D> {
    display: D,
}

impl<D> ScreenPainter<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(display: D) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn clear(&mut self) -> Result<(), D::Error> {
        self.display.clear(BinaryColor::Off)
    }

    /// Clears the target and draws the lines of `kind`, centered.
    pub fn render(
        &mut self,
        kind: ScreenKind,
        param: u16,
        context: &ScreenContext,
    ) -> Result<(), D::Error> {
        self.clear()?;
        let lines = screen_lines(kind, param, context);
        if lines.is_empty() {
            return Ok(());
        }

        let bounds = self.display.bounding_box();
        let height = bounds.size.height as i32;
        let center_x = bounds.top_left.x + bounds.size.width as i32 / 2;
        let count = lines.len() as i32;
        let pitch = (height / count).min(MAX_LINE_PITCH);
        let first_center = bounds.top_left.y + (height - pitch * count) / 2 + pitch / 2;
        let font = if lines.len() > HEADLINE_MAX_LINES {
            &BODY_FONT
        } else {
            &HEADLINE_FONT
        };

        for (row, line) in lines.iter().enumerate() {
            let center_y = first_center + pitch * row as i32;
            let _ = font.render_aligned(
                line.as_str(),
                Point::new(center_x, center_y),
                VerticalPosition::Center,
                HorizontalAlignment::Center,
                FontColor::Transparent(BinaryColor::On),
                &mut self.display,
            );
        }
        Ok(())
    }
}
