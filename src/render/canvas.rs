//=========================================================================
// Canvas
//=========================================================================
//
// Logical-resolution CPU framebuffer in `0x00RRGGBB` pixels.
//
// Architecture:
//   Sprite / glyphs → Canvas (400×600) → present_scaled() → surface buffer
//
// All drawing clips against the canvas edges. The canvas is scaled onto
// the physical surface with nearest-neighbour sampling when presented.
//
//=========================================================================

//=== External Dependencies ===============================================

use rusttype::{point, Font, Scale};

//=== Internal Dependencies ===============================================

use super::assets::Sprite;

//=== Canvas ==============================================================

#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    //--- Drawing ----------------------------------------------------------

    /// Draws `sprite` with its top-left corner at `(x, y)`.
    pub(crate) fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let (w, h) = (self.width as i64, self.height as i64);
        let (sw, sh) = (sprite.width() as i64, sprite.height() as i64);
        let (x, y) = (x as i64, y as i64);

        // Visible part of the sprite, in sprite coordinates
        let x0 = (-x).max(0);
        let y0 = (-y).max(0);
        let x1 = (w - x).min(sw);
        let y1 = (h - y).min(sh);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let src = sprite.pixels();
        for sy in y0..y1 {
            let src_row = (sy * sw) as usize;
            let dst_row = ((y + sy) * w + x) as usize;
            let src_span = &src[src_row + x0 as usize..src_row + x1 as usize];
            let dst_span = &mut self.pixels[dst_row + x0 as usize..dst_row + x1 as usize];

            if sprite.is_opaque() {
                for (d, s) in dst_span.iter_mut().zip(src_span) {
                    *d = s & 0x00FF_FFFF;
                }
            } else {
                for (d, &s) in dst_span.iter_mut().zip(src_span) {
                    *d = blend(*d, s & 0x00FF_FFFF, (s >> 24) as u8);
                }
            }
        }
    }

    /// Renders one line of text with its top edge at `top`.
    pub(crate) fn draw_text(
        &mut self,
        font: &Font<'_>,
        text: &str,
        size: f32,
        x: f32,
        top: f32,
        color: u32,
    ) {
        let scale = Scale::uniform(size);
        let ascent = font.v_metrics(scale).ascent;
        let (w, h) = (self.width as i32, self.height as i32);

        for glyph in font.layout(text, scale, point(x, top + ascent)) {
            let Some(bounds) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = bounds.min.x + gx as i32;
                let py = bounds.min.y + gy as i32;
                if px < 0 || py < 0 || px >= w || py >= h {
                    return;
                }
                let idx = (py * w + px) as usize;
                let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                self.pixels[idx] = blend(self.pixels[idx], color, alpha);
            });
        }
    }

    //--- Presentation -----------------------------------------------------

    /// Scales the canvas onto a `width`×`height` target buffer.
    pub(crate) fn present_scaled(&self, target: &mut [u32], width: u32, height: u32) {
        let (lw, lh) = (self.width as usize, self.height as usize);
        let (pw, ph) = (width as usize, height as usize);
        if pw == 0 || ph == 0 || target.len() < pw * ph {
            return;
        }

        if (pw, ph) == (lw, lh) {
            target[..self.pixels.len()].copy_from_slice(&self.pixels);
            return;
        }

        for py in 0..ph {
            let ly = py * lh / ph;
            let src_row = &self.pixels[ly * lw..(ly + 1) * lw];
            let dst_row = &mut target[py * pw..(py + 1) * pw];
            for (px, dst) in dst_row.iter_mut().enumerate() {
                *dst = src_row[px * lw / pw];
            }
        }
    }
}

//=== Text Metrics ========================================================

/// Horizontal advance of `text` at `size` pixels.
pub(crate) fn text_width(font: &Font<'_>, text: &str, size: f32) -> f32 {
    let scale = Scale::uniform(size);
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map_or(0.0, |g| g.position().x + g.unpositioned().h_metrics().advance_width)
}

//=== Blending ============================================================

/// Mixes `src` over `dst` with coverage `alpha` (0 = dst, 255 = src).
fn blend(dst: u32, src: u32, alpha: u8) -> u32 {
    match alpha {
        0 => dst,
        255 => src,
        a => {
            let a = u32::from(a);
            let channel = |shift: u32| {
                let d = (dst >> shift) & 0xFF;
                let s = (src >> shift) & 0xFF;
                ((s * a + d * (255 - a)) / 255) << shift
            };
            channel(16) | channel(8) | channel(0)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
