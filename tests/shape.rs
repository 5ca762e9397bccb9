#[cfg(test)]
mod shape_tests {
    use khatt::shape;
    use khatt::unicode::unicode_escape;

    fn check(test_cases: Vec<(&str, &str)>) {
        for (input, expected) in test_cases {
            let actual = shape(input).text();
            assert_eq!(
                actual,
                expected,
                "shaping {} produced {} instead of {}",
                unicode_escape(input),
                unicode_escape(&actual),
                unicode_escape(expected),
            );
        }
    }

    #[test]
    fn identity_on_non_arabic_input() {
        check(vec![
            ("hello, world!", "hello, world!"),
            ("0123456789", "0123456789"),
            ("\u{0660}\u{0661}", "\u{0660}\u{0661}"), // Arabic-Indic digits
            ("", ""),
        ])
    }

    #[test]
    fn boundary_isolation() {
        // a lone letter, or one surrounded by spaces, takes its isolated form
        check(vec![
            ("\u{0628}", "\u{FE8F}"),
            (" \u{0628} ", " \u{FE8F} "),
            ("\u{0621}", "\u{FE80}"), // hamza never joins
        ])
    }

    #[test]
    fn medial_chain() {
        // three dual-joining letters: initial, medial, final
        check(vec![
            ("\u{0628}\u{0628}", "\u{FE91}\u{FE90}"),
            ("\u{0628}\u{0628}\u{0628}", "\u{FE91}\u{FE92}\u{FE90}"),
        ])
    }

    #[test]
    fn right_joining_breaks_forward_connection() {
        // alef dal: neither extends forward, both isolated
        check(vec![("\u{0627}\u{062F}", "\u{FE8D}\u{FEA9}")])
    }

    #[test]
    fn ligature_at_word_start() {
        // lam alef at the start of a word takes the ligature's initial form
        // and consumes both codepoints
        let result = shape("\u{0644}\u{0627}");
        assert_eq!(result.glyphs(), ['\u{FEFB}']);
        check(vec![
            ("\u{0644}\u{0622}", "\u{FEF5}"),
            ("\u{0644}\u{0623}", "\u{FEF7}"),
            ("\u{0644}\u{0625}", "\u{FEF9}"),
        ])
    }

    #[test]
    fn ligature_inherits_first_member_context() {
        // beh lam alef: the pair follows a joining letter, so it takes the
        // ligature's medial-context form
        check(vec![("\u{0628}\u{0644}\u{0627}", "\u{FE91}\u{FEFC}")])
    }

    #[test]
    fn adjacent_ligatures() {
        // no filler after a consumed pair: a second lam alef right after the
        // first still resolves and substitutes
        check(vec![(
            "\u{0644}\u{0627}\u{0644}\u{0627}",
            "\u{FEFB}\u{FEFB}",
        )])
    }

    #[test]
    fn word_with_ligature() {
        // seen lam-alef meem: the meem cannot connect back because the
        // consumed alef does not join forward
        check(vec![(
            "\u{0633}\u{0644}\u{0627}\u{0645}",
            "\u{FEB3}\u{FEFC}\u{FEE1}",
        )])
    }

    #[test]
    fn output_cardinality() {
        // n codepoints with k disjoint ligature pairs shape to n - k glyphs
        let cases = [
            ("\u{0633}\u{0644}\u{0627}\u{0645}", 1),
            ("\u{0644}\u{0627}\u{0644}\u{0627}", 2),
            ("\u{0628}\u{0628}\u{0628}", 0),
            ("abc \u{0644}\u{0627}", 1),
        ];
        for (input, pairs) in cases {
            let n = input.chars().count();
            assert_eq!(shape(input).len(), n - pairs, "input {}", unicode_escape(input));
        }
    }

    #[test]
    fn whitespace_passthrough() {
        let result = shape("\u{0628} \u{0628}\n\u{0628}\r");
        assert_eq!(
            result.glyphs(),
            ['\u{FE8F}', ' ', '\u{FE8F}', '\n', '\u{FE8F}', '\r']
        );
    }

    #[test]
    fn space_prevents_medial_resolution() {
        // beh beh-space-beh beh: each pair resolves initial/final, never medial
        check(vec![(
            "\u{0628}\u{0628} \u{0628}\u{0628}",
            "\u{FE91}\u{FE90} \u{FE91}\u{FE90}",
        )])
    }

    #[test]
    fn display_order_reverses_encounter_order() {
        let result = shape("\u{0628}\u{0644}\u{0627} \u{0628}");
        let forward: Vec<char> = result.glyphs().to_vec();
        let mut reversed: Vec<char> = result.display_order().collect();
        reversed.reverse();
        assert_eq!(forward, reversed);
        assert_eq!(
            result.display_order().next(),
            forward.last().copied(),
            "display order starts with the last glyph emitted"
        );
    }

    #[test]
    fn mixed_script_run() {
        // Arabic shapes, Latin passes through, the space isolates both sides
        check(vec![(
            "abc \u{0628}\u{0644}\u{0627}",
            "abc \u{FE91}\u{FEFC}",
        )])
    }

    #[test]
    fn shaping_is_deterministic() {
        let input = "\u{0633}\u{0644}\u{0627}\u{0645} abc";
        assert_eq!(shape(input), shape(input));
    }
}
