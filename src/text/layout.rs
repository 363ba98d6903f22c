//! Word-cloud layout
//!
//! Places each counted word on a fixed canvas by walking an Archimedean
//! spiral out from the center until the word's bounding box collides with
//! nothing already placed. Words are laid out in frequency order, so the
//! first N layout entries are exactly the top N words by count; the
//! frequency bars and the treemap rely on that.
//!
//! The layout is deterministic: same counts in, same positions out.

use crate::constants::words::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MAX_FONT_SIZE, MIN_FONT_SIZE, TOP_WORDS,
};
use crate::text::frequency::WordCount;

/// Spiral sampling resolution
const SPIRAL_STEPS: usize = 3000;
const SPIRAL_ANGLE_STEP: f32 = 0.35;
const SPIRAL_RADIUS_PER_RADIAN: f32 = 1.1;

/// Shrink factor applied when a word cannot be placed at its target size
const SHRINK_FACTOR: f32 = 0.9;

/// Approximate glyph width as a fraction of the font size
const GLYPH_ASPECT: f32 = 0.55;

/// Gap kept between neighboring word boxes
const PADDING: f32 = 1.5;

/// One word with its computed layout attributes
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: u32,
    /// Frequency relative to the most common word, in (0, 1]
    pub relative: f64,
    /// Font size assigned by the layout (may be below the
    /// frequency-proportional target when space ran out)
    pub font_size: f32,
    /// Center position in canvas coordinates
    pub x: f32,
    pub y: f32,
    /// Palette slot for this word
    pub color_index: usize,
}

/// The computed layout for one corpus
#[derive(Debug, Clone, Default)]
pub struct WordLayout {
    /// Placed words in frequency order
    pub words: Vec<PlacedWord>,
}

impl WordLayout {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// The top `TOP_WORDS` words. Both the frequency bars and the treemap
    /// must derive from this same slice.
    pub fn top_words(&self) -> &[PlacedWord] {
        &self.words[..self.words.len().min(TOP_WORDS)]
    }
}

/// Axis-aligned bounding box in canvas coordinates
#[derive(Debug, Clone, Copy)]
struct BBox {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl BBox {
    /// Estimated box of a word centered at (x, y)
    fn around(x: f32, y: f32, font_size: f32, chars: usize) -> Self {
        let half_w = GLYPH_ASPECT * font_size * chars as f32 / 2.0 + PADDING;
        let half_h = font_size / 2.0 + PADDING;
        Self {
            x0: x - half_w,
            y0: y - half_h,
            x1: x + half_w,
            y1: y + half_h,
        }
    }

    fn intersects(&self, other: &BBox) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    fn within_canvas(&self) -> bool {
        self.x0 >= 0.0 && self.y0 >= 0.0 && self.x1 <= CANVAS_WIDTH && self.y1 <= CANVAS_HEIGHT
    }
}

/// Walk the spiral looking for a collision-free center for a word of the
/// given size. The canvas is wider than tall, so the vertical radius is
/// compressed to fill it evenly.
fn find_spot(placed: &[BBox], font_size: f32, chars: usize) -> Option<(f32, f32)> {
    let cx = CANVAS_WIDTH / 2.0;
    let cy = CANVAS_HEIGHT / 2.0;
    let squash = CANVAS_HEIGHT / CANVAS_WIDTH;

    for step in 0..SPIRAL_STEPS {
        let theta = step as f32 * SPIRAL_ANGLE_STEP;
        let r = SPIRAL_RADIUS_PER_RADIAN * theta;
        let x = cx + r * theta.cos();
        let y = cy + r * theta.sin() * squash;

        let candidate = BBox::around(x, y, font_size, chars);
        if !candidate.within_canvas() {
            continue;
        }
        if placed.iter().any(|b| b.intersects(&candidate)) {
            continue;
        }
        return Some((x, y));
    }
    None
}

/// Lay out counted words on the canvas. A word that cannot be placed at
/// its frequency-proportional size is shrunk until it fits; a word that
/// will not fit even at the minimum size is dropped.
pub fn layout_words(counts: &[WordCount]) -> WordLayout {
    let mut words: Vec<PlacedWord> = Vec::with_capacity(counts.len());
    let mut boxes: Vec<BBox> = Vec::with_capacity(counts.len());

    for (index, wc) in counts.iter().enumerate() {
        let chars = wc.word.chars().count();
        let mut font_size = (wc.relative as f32 * MAX_FONT_SIZE).max(MIN_FONT_SIZE);

        let spot = loop {
            match find_spot(&boxes, font_size, chars) {
                Some(spot) => break Some(spot),
                None => {
                    font_size *= SHRINK_FACTOR;
                    if font_size < MIN_FONT_SIZE {
                        break None;
                    }
                }
            }
        };

        let Some((x, y)) = spot else {
            continue;
        };

        boxes.push(BBox::around(x, y, font_size, chars));
        words.push(PlacedWord {
            word: wc.word.clone(),
            count: wc.count,
            relative: wc.relative,
            font_size,
            x,
            y,
            color_index: index,
        });
    }

    WordLayout { words }
}
