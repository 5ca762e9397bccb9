//! The shaping pipeline.
//!
//! A single left-to-right scan over the logical-order input. Each position is
//! resolved against its three-letter joining window; a registered ligature
//! pair is consumed as one unit before ordinary glyph lookup, and whitespace
//! passes through verbatim.
//!
//! Known simplification: the letter following a consumed ligature pair is
//! resolved against the pair's second member in the logical string rather
//! than the ligature's actual right edge, so runs of three or more
//! ligature-adjacent letters can mis-resolve that letter's Initial/Medial
//! context. Correcting this would require full Unicode joining-context
//! propagation, which is out of scope.

use crate::joining::{JoiningContext, Position};
use crate::tables::{ShapingTables, MISSING_GLYPH};

/// The glyphs produced by one shaping call.
///
/// Built fresh per call; the forward sequence is in logical (encounter)
/// order, and [`display_order`](ShapingResult::display_order) walks the same
/// glyphs last-to-first for callers that lay out right to left by popping a
/// stack.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShapingResult {
    glyphs: Vec<char>,
}

impl ShapingResult {
    /// The presentation-form glyphs in logical order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// The glyphs collected into a `String`, in logical order.
    pub fn text(&self) -> String {
        self.glyphs.iter().collect()
    }

    /// The glyphs in reverse encounter order.
    pub fn display_order(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.iter().rev().copied()
    }

    /// Number of output glyphs. A matched ligature pair contributes one.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Shapes `text` with the built-in tables.
pub fn shape(text: &str) -> ShapingResult {
    ShapingTables::builtin().shape(text)
}

impl ShapingTables {
    /// Shapes logical-order `text` into presentation-form glyphs.
    ///
    /// Codepoints absent from the letter table shape as themselves, so mixed
    /// input degrades to identity on its non-Arabic runs.
    pub fn shape(&self, text: &str) -> ShapingResult {
        let chars: Vec<char> = text.chars().collect();
        let mut glyphs = Vec::with_capacity(chars.len());

        let mut i = 0;
        while i < chars.len() {
            let context = JoiningContext::at(&chars, i);
            let position = context.position();

            // A ligature consumes the current letter and its successor, and
            // takes the joining context of its first member. No filler is
            // emitted for the consumed letter: a filler would break the
            // lookahead of a ligature pair that starts right after this one.
            let window = [context.prev, context.curr, context.next];
            if let Some(glyph) = self.ligature_form(position, &window) {
                glyphs.push(glyph);
                i += 2;
                continue;
            }

            match context.curr {
                ' ' | '\n' | '\r' => glyphs.push(context.curr),
                curr => glyphs.push(self.lookup_glyph(curr, position)),
            }
            i += 1;
        }

        ShapingResult { glyphs }
    }

    /// The contextual ligature glyph for the last two characters of `window`,
    /// or `None` if they do not form a registered pair.
    ///
    /// `window` is the joining context around the pair's first member and
    /// must hold one to three characters.
    fn ligature_form(&self, position: Position, window: &[char]) -> Option<char> {
        assert!(
            (1..=3).contains(&window.len()),
            "joining window holds one to three characters"
        );
        match *window {
            [.., first, second] => self
                .ligature(first, second)
                .map(|ligature| ligature.form(position).unwrap_or(MISSING_GLYPH)),
            _ => None,
        }
    }
}
