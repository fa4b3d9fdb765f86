// File: crates/chart-core/src/text.rs
// Summary: Text shaping/rendering using Skia textlayout, with anchor-based placement.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::grid::TickLabel;

/// Exponent glyphs are drawn at this fraction of the base size.
const SUPERSCRIPT_SCALE: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of `text` at `size`.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that its box is anchored at `(x, y)` per the alignment.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        (h, v): (HAlign, VAlign),
    ) {
        let p = self.layout(text, size, color);
        let origin = anchor_origin((x, y), (p.longest_line(), p.height()), (h, v));
        p.paint(canvas, origin);
    }

    /// Draw `text` rotated 90° counter-clockwise, centred on `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, (0.0, 0.0), size, color, (HAlign::Center, VAlign::Middle));
        canvas.restore();
    }

    pub fn measure_tick(&self, label: &TickLabel, size: f32) -> (f32, f32) {
        match label {
            TickLabel::Plain(s) => self.measure(s, size),
            TickLabel::PowerOfTen(k) => {
                let (bw, bh) = self.measure("10", size);
                let (ew, _) = self.measure(&exponent_text(*k), size * SUPERSCRIPT_SCALE);
                // exponent rides above the base line box
                (bw + ew, bh + size * 0.25)
            }
        }
    }

    pub fn draw_tick(
        &self,
        canvas: &skia::Canvas,
        label: &TickLabel,
        anchor: (f32, f32),
        size: f32,
        color: skia::Color,
        align: (HAlign, VAlign),
    ) {
        match label {
            TickLabel::Plain(s) => self.draw(canvas, s, anchor, size, color, align),
            TickLabel::PowerOfTen(k) => {
                let (left, top) = anchor_origin(anchor, self.measure_tick(label, size), align);
                let base = self.layout("10", size, color);
                let exp = self.layout(&exponent_text(*k), size * SUPERSCRIPT_SCALE, color);
                let raise = size * 0.25;
                base.paint(canvas, (left, top + raise));
                exp.paint(canvas, (left + base.longest_line(), top));
            }
        }
    }
}

fn exponent_text(k: i32) -> String {
    if k < 0 { format!("\u{2212}{}", -k) } else { k.to_string() }
}

fn anchor_origin((x, y): (f32, f32), (w, h): (f32, f32), (ha, va): (HAlign, VAlign)) -> (f32, f32) {
    let left = match ha {
        HAlign::Left => x,
        HAlign::Center => x - w * 0.5,
        HAlign::Right => x - w,
    };
    let top = match va {
        VAlign::Top => y,
        VAlign::Middle => y - h * 0.5,
        VAlign::Bottom => y - h,
    };
    (left, top)
}
