//! Letter and ligature lookup tables.
//!
//! The built-in tables are generated from the Unicode Arabic Presentation
//! Forms-B reference data and cover the base letters U+0621..=U+064A plus the
//! presentation-form codepoints U+FE80..=U+FEFF. Tables are immutable once
//! constructed and may be shared across threads.

mod data;

use std::borrow::Cow;

use lazy_static::lazy_static;
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::error::ParseError;
use crate::joining::Position;

/// Placeholder returned when a letter is present in the table but has no
/// glyph for the requested form. U+25CC DOTTED CIRCLE is the conventional
/// fallback glyph for this in shaping engines.
pub const MISSING_GLYPH: char = '\u{25CC}';

/// Shaping behaviour of one base letter: its four presentation forms and a
/// human-readable name.
#[derive(Clone, Debug)]
pub struct GlyphRecord {
    pub base: char,
    /// Informational joining tag from the source data: `u`, `d`, `r`, or `l`.
    pub joining: char,
    forms: [Option<char>; 4],
    pub name: Cow<'static, str>,
}

impl GlyphRecord {
    /// The glyph for `position`, or `None` if the letter has no such form.
    pub fn form(&self, position: Position) -> Option<char> {
        self.forms[position as usize]
    }
}

/// A two-letter sequence that renders as a single glyph. Keyed by the pair in
/// logical order; the key is order-sensitive.
#[derive(Clone, Debug)]
pub struct LigatureRecord {
    pub first: char,
    pub second: char,
    forms: [Option<char>; 4],
    pub name: Cow<'static, str>,
}

impl LigatureRecord {
    /// The glyph for `position`, or `None` if the ligature has no such form.
    pub fn form(&self, position: Position) -> Option<char> {
        self.forms[position as usize]
    }
}

/// The read-only letter and ligature tables a shaping pass consults.
#[derive(Debug)]
pub struct ShapingTables {
    glyphs: FxHashMap<char, GlyphRecord>,
    ligatures: FxHashMap<(char, char), LigatureRecord>,
}

lazy_static! {
    static ref BUILTIN: ShapingTables = ShapingTables::from_rows(data::LETTERS, data::LIGATURES);
}

impl ShapingTables {
    /// The built-in tables generated from the Arabic Presentation Forms
    /// reference data.
    pub fn builtin() -> &'static ShapingTables {
        &BUILTIN
    }

    fn from_rows(
        letters: &[(char, char, [u32; 4], &'static str)],
        ligatures: &[(char, char, [u32; 4], &'static str)],
    ) -> ShapingTables {
        let glyphs = letters
            .iter()
            .map(|&(base, joining, forms, name)| {
                let record = GlyphRecord {
                    base,
                    joining,
                    forms: forms.map(form_of),
                    name: Cow::Borrowed(name),
                };
                (base, record)
            })
            .collect();

        let ligatures = ligatures
            .iter()
            .map(|&(first, second, forms, name)| {
                let record = LigatureRecord {
                    first,
                    second,
                    forms: forms.map(form_of),
                    name: Cow::Borrowed(name),
                };
                ((first, second), record)
            })
            .collect();

        ShapingTables { glyphs, ligatures }
    }

    /// Builds tables from CSV data, one record per line with a header line.
    ///
    /// Letter rows are `base,join,isolated,initial,medial,final,name` and
    /// ligature rows are `first,second,isolated,initial,medial,final,name`,
    /// where codepoints are written `U+XXXX` and `n` marks a form the letter
    /// does not have.
    pub fn from_csv(letters: &str, ligatures: &str) -> Result<ShapingTables, ParseError> {
        let mut glyph_map = FxHashMap::default();
        for line in data_lines(letters) {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < 7 {
                return Err(ParseError::MissingValue);
            }
            let base = parse_codepoint(fields[0])?;
            let record = GlyphRecord {
                base,
                joining: parse_joining_tag(fields[1])?,
                forms: parse_forms(&fields[2..6])?,
                // the name is the last column and may itself contain commas
                name: Cow::Owned(fields[6..].join(",")),
            };
            if glyph_map.insert(base, record).is_some() {
                warn!("duplicate letter row for U+{:04X}", base as u32);
            }
        }

        let mut ligature_map = FxHashMap::default();
        for line in data_lines(ligatures) {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < 7 {
                return Err(ParseError::MissingValue);
            }
            let first = parse_codepoint(fields[0])?;
            let second = parse_codepoint(fields[1])?;
            let record = LigatureRecord {
                first,
                second,
                forms: parse_forms(&fields[2..6])?,
                name: Cow::Owned(fields[6..].join(",")),
            };
            if ligature_map.insert((first, second), record).is_some() {
                warn!(
                    "duplicate ligature row for U+{:04X} U+{:04X}",
                    first as u32, second as u32
                );
            }
        }

        debug!(
            "loaded {} letter and {} ligature records",
            glyph_map.len(),
            ligature_map.len()
        );
        Ok(ShapingTables {
            glyphs: glyph_map,
            ligatures: ligature_map,
        })
    }

    /// The record for `base`, if the table has one.
    pub fn glyph(&self, base: char) -> Option<&GlyphRecord> {
        self.glyphs.get(&base)
    }

    /// The ligature for the ordered pair `(first, second)`, if registered.
    /// Absence means "not a ligature", never an error.
    pub fn ligature(&self, first: char, second: char) -> Option<&LigatureRecord> {
        self.ligatures.get(&(first, second))
    }

    /// The contextual glyph for `base` at `position`.
    ///
    /// Unknown bases shape as themselves, so non-Arabic text passes through
    /// unchanged. A known base without the requested form yields
    /// [`MISSING_GLYPH`].
    pub fn lookup_glyph(&self, base: char, position: Position) -> char {
        match self.glyphs.get(&base) {
            Some(record) => record.form(position).unwrap_or(MISSING_GLYPH),
            None => base,
        }
    }

    /// Human-readable name of `base`, if the table knows it.
    pub fn glyph_name(&self, base: char) -> Option<&str> {
        self.glyphs.get(&base).map(|record| record.name.as_ref())
    }
}

fn form_of(codepoint: u32) -> Option<char> {
    if codepoint == 0 {
        None
    } else {
        char::from_u32(codepoint)
    }
}

fn data_lines(data: &str) -> impl Iterator<Item = &str> {
    data.lines().skip(1).filter(|line| !line.trim().is_empty())
}

fn parse_codepoint(field: &str) -> Result<char, ParseError> {
    let hex = field
        .strip_prefix("U+")
        .or_else(|| field.strip_prefix("u+"))
        .ok_or(ParseError::BadValue)?;
    let codepoint = u32::from_str_radix(hex, 16)?;
    char::from_u32(codepoint).ok_or(ParseError::BadValue)
}

fn parse_forms(fields: &[&str]) -> Result<[Option<char>; 4], ParseError> {
    let mut forms = [None; 4];
    for (form, field) in forms.iter_mut().zip(fields) {
        *form = parse_form(field)?;
    }
    Ok(forms)
}

fn parse_form(field: &str) -> Result<Option<char>, ParseError> {
    if field.eq_ignore_ascii_case("n") {
        Ok(None)
    } else {
        parse_codepoint(field).map(Some)
    }
}

fn parse_joining_tag(field: &str) -> Result<char, ParseError> {
    match field {
        "u" => Ok('u'),
        "d" => Ok('d'),
        "r" => Ok('r'),
        "l" => Ok('l'),
        _ => Err(ParseError::BadValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_fallback_for_unknown_base() {
        let tables = ShapingTables::builtin();
        assert_eq!(tables.lookup_glyph('A', Position::Medial), 'A');
        assert_eq!(tables.lookup_glyph('7', Position::Isolated), '7');
        assert_eq!(tables.lookup_glyph('\u{0660}', Position::Final), '\u{0660}');
    }

    #[test]
    fn placeholder_for_unavailable_form() {
        let tables = ShapingTables::builtin();
        // U+FE82 (alef with madda, final form) only has a final glyph
        assert_eq!(tables.lookup_glyph('\u{FE82}', Position::Final), '\u{FE82}');
        assert_eq!(
            tables.lookup_glyph('\u{FE82}', Position::Isolated),
            MISSING_GLYPH
        );
    }

    #[test]
    fn base_letters_have_all_four_forms() {
        let tables = ShapingTables::builtin();
        let beh = tables.glyph('\u{0628}').unwrap();
        assert_eq!(beh.form(Position::Isolated), Some('\u{FE8F}'));
        assert_eq!(beh.form(Position::Initial), Some('\u{FE91}'));
        assert_eq!(beh.form(Position::Medial), Some('\u{FE92}'));
        assert_eq!(beh.form(Position::Final), Some('\u{FE90}'));
    }

    #[test]
    fn ligature_key_is_order_sensitive() {
        let tables = ShapingTables::builtin();
        assert!(tables.ligature('\u{0644}', '\u{0627}').is_some());
        assert!(tables.ligature('\u{0627}', '\u{0644}').is_none());
    }

    #[test]
    fn lookups_are_repeatable() {
        let tables = ShapingTables::builtin();
        for _ in 0..2 {
            assert_eq!(
                tables.lookup_glyph('\u{0644}', Position::Initial),
                '\u{FEDF}'
            );
            assert_eq!(
                tables
                    .ligature('\u{0644}', '\u{0622}')
                    .and_then(|lig| lig.form(Position::Isolated)),
                Some('\u{FEF5}')
            );
        }
    }

    #[test]
    fn glyph_names() {
        let tables = ShapingTables::builtin();
        assert_eq!(tables.glyph_name('\u{0628}'), Some("arabic letter beh"));
        assert_eq!(tables.glyph_name('x'), None);
    }

    const LETTER_CSV: &str = "\
base,join,isolated,initial,medial,final,name
U+0628,d,U+FE8F,U+FE91,U+FE92,U+FE90,arabic letter beh
U+0627,r,U+FE8D,U+FE8D,n,U+FE8E,arabic letter alef
";

    const LIGATURE_CSV: &str = "\
first,second,isolated,initial,medial,final,name
U+0644,U+0627,U+FEFB,U+FEFB,U+FEFC,U+FEFC,arabic ligature lam with alef
";

    #[test]
    fn from_csv_builds_tables() {
        let tables = ShapingTables::from_csv(LETTER_CSV, LIGATURE_CSV).unwrap();
        assert_eq!(tables.lookup_glyph('\u{0628}', Position::Initial), '\u{FE91}');
        assert_eq!(
            tables.lookup_glyph('\u{0627}', Position::Medial),
            MISSING_GLYPH
        );
        assert_eq!(tables.glyph_name('\u{0627}'), Some("arabic letter alef"));
        assert!(tables.ligature('\u{0644}', '\u{0627}').is_some());
    }

    #[test]
    fn from_csv_keeps_commas_in_names() {
        let letters = "\
base,join,isolated,initial,medial,final,name
U+0629,r,U+FE93,U+FE93,n,U+FE94,arabic letter teh marbuta, round form
";
        let tables = ShapingTables::from_csv(letters, "header\n").unwrap();
        assert_eq!(
            tables.glyph_name('\u{0629}'),
            Some("arabic letter teh marbuta, round form")
        );
    }

    #[test]
    fn tables_are_debug_printable() {
        let tables = ShapingTables::from_csv(LETTER_CSV, LIGATURE_CSV).unwrap();
        assert!(format!("{:?}", tables).contains("arabic letter beh"));
    }

    #[test]
    fn from_csv_rejects_malformed_rows() {
        let missing = "base,join,isolated,initial,medial,final,name\nU+0628,d,U+FE8F\n";
        assert_eq!(
            ShapingTables::from_csv(missing, "header\n").unwrap_err(),
            ParseError::MissingValue
        );

        let bad = "base,join,isolated,initial,medial,final,name\n0628,d,U+FE8F,U+FE91,U+FE92,U+FE90,beh\n";
        assert_eq!(
            ShapingTables::from_csv(bad, "header\n").unwrap_err(),
            ParseError::BadValue
        );

        let bad_tag = "base,join,isolated,initial,medial,final,name\nU+0628,x,U+FE8F,U+FE91,U+FE92,U+FE90,beh\n";
        assert_eq!(
            ShapingTables::from_csv(bad_tag, "header\n").unwrap_err(),
            ParseError::BadValue
        );
    }
}
