//! Joining-type classification and neighbour connectivity.
//!
//! Implements a simplified form of the Unicode Arabic joining model: a letter
//! joins with its predecessor when it is right- or dual-joining, and extends a
//! connection forward only when it is dual-joining. The two predicates applied
//! to the three-letter window around an input position yield the letter's
//! contextual [`Position`].

use self::JoiningClass::{DualJoining as D, NonJoining as U, RightJoining as R};

/// Joining class of a codepoint.
///
/// `LeftJoining` never occurs as an input classification; it appears only as
/// an informational tag on certain presentation-form table rows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JoiningClass {
    NonJoining,
    DualJoining,
    RightJoining,
}

const FIRST_LETTER: char = '\u{0621}';
const LAST_LETTER: char = '\u{064A}';

#[rustfmt::skip]
const JOINING_TYPES: [JoiningClass; 42] = [
    U, // U+0621 hamza
    R, // U+0622 alef with madda above
    R, // U+0623 alef with hamza above
    R, // U+0624 waw with hamza above
    R, // U+0625 alef with hamza below
    D, // U+0626 yeh with hamza above
    R, // U+0627 alef
    D, // U+0628 beh
    R, // U+0629 teh marbuta
    D, // U+062A teh
    D, // U+062B theh
    D, // U+062C jeem
    D, // U+062D hah
    D, // U+062E khah
    R, // U+062F dal
    R, // U+0630 thal
    R, // U+0631 reh
    R, // U+0632 zain
    D, // U+0633 seen
    D, // U+0634 sheen
    D, // U+0635 sad
    D, // U+0636 dad
    D, // U+0637 tah
    D, // U+0638 zah
    D, // U+0639 ain
    D, // U+063A ghain
    D, // U+063B keheh with two dots above
    D, // U+063C keheh with three dots below
    D, // U+063D farsi yeh with inverted v
    D, // U+063E farsi yeh with two dots above
    D, // U+063F farsi yeh with three dots above
    D, // U+0640 tatweel
    D, // U+0641 feh
    D, // U+0642 qaf
    D, // U+0643 kaf
    D, // U+0644 lam
    D, // U+0645 meem
    D, // U+0646 noon
    D, // U+0647 heh
    R, // U+0648 waw
    R, // U+0649 alef maksura
    D, // U+064A yeh
];

/// Returns the joining class of `ch`.
///
/// Total over all of Unicode: codepoints outside U+0621..=U+064A, including
/// space, newline, and punctuation, are `NonJoining`.
pub fn classify(ch: char) -> JoiningClass {
    if ch < FIRST_LETTER || ch > LAST_LETTER {
        return JoiningClass::NonJoining;
    }
    JOINING_TYPES[ch as usize - FIRST_LETTER as usize]
}

/// True if `ch` can take a connection from the letter before it, i.e. can
/// render in a final or medial form.
pub fn joins_with_previous(ch: char) -> bool {
    matches!(classify(ch), JoiningClass::DualJoining | JoiningClass::RightJoining)
}

/// True if `ch` can extend a connection to the letter after it. Only
/// dual-joining letters join forward.
pub fn joins_with_next(ch: char) -> bool {
    classify(ch) == JoiningClass::DualJoining
}

/// Contextual glyph position of a letter within a connected run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Position {
    Isolated = 0,
    Initial = 1,
    Medial = 2,
    Final = 3,
}

impl Position {
    fn from_connections(prev: bool, next: bool) -> Position {
        match (prev, next) {
            (false, false) => Position::Isolated,
            (false, true) => Position::Initial,
            (true, true) => Position::Medial,
            (true, false) => Position::Final,
        }
    }
}

/// The three-letter window around one input position.
///
/// Out-of-range neighbours are replaced by [`JoiningContext::BOUNDARY`], a
/// non-joining sentinel, so the first letter of the input can never connect
/// backward and the last can never connect forward.
#[derive(Clone, Copy, Debug)]
pub struct JoiningContext {
    pub prev: char,
    pub curr: char,
    pub next: char,
}

impl JoiningContext {
    /// Virtual neighbour at position -1 and position n.
    pub const BOUNDARY: char = ' ';

    /// Builds the window around `chars[index]`.
    ///
    /// Panics if `index` is out of range.
    pub fn at(chars: &[char], index: usize) -> JoiningContext {
        JoiningContext {
            prev: if index > 0 { chars[index - 1] } else { Self::BOUNDARY },
            curr: chars[index],
            next: chars.get(index + 1).copied().unwrap_or(Self::BOUNDARY),
        }
    }

    /// True if the current letter connects to its predecessor: the
    /// predecessor extends forward and the current letter accepts a backward
    /// connection.
    pub fn connects_to_previous(&self) -> bool {
        joins_with_next(self.prev) && joins_with_previous(self.curr)
    }

    /// True if the current letter connects to its successor.
    pub fn connects_to_next(&self) -> bool {
        joins_with_next(self.curr) && joins_with_previous(self.next)
    }

    /// Contextual position of the current letter.
    pub fn position(&self) -> Position {
        Position::from_connections(self.connects_to_previous(), self.connects_to_next())
    }
}
