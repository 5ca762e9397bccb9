// Letter and ligature rows generated from the Unicode Arabic Presentation
// Forms-B reference table. Form order is isolated, initial, medial, final;
// 0 marks a form the letter does not have. Do not edit by hand.

#[rustfmt::skip]
pub(super) const LETTERS: &[(char, char, [u32; 4], &str)] = &[
    ('\u{0621}', 'u', [0xFE80, 0xFE80, 0xFE80, 0xFE80], "arabic letter hamza"),
    ('\u{0622}', 'r', [0xFE81, 0xFE81, 0xFE81, 0xFE82], "arabic letter alef with madda above"),
    ('\u{0623}', 'r', [0xFE83, 0xFE83, 0xFE83, 0xFE84], "arabic letter alef with hamza above"),
    ('\u{0624}', 'r', [0xFE85, 0xFE85, 0xFE85, 0xFE86], "arabic letter waw with hamza above"),
    ('\u{0625}', 'r', [0xFE87, 0xFE87, 0xFE87, 0xFE88], "arabic letter alef with hamza below"),
    ('\u{0626}', 'd', [0xFE89, 0xFE8B, 0xFE8C, 0xFE8A], "arabic letter yeh with hamza above"),
    ('\u{0627}', 'r', [0xFE8D, 0xFE8D, 0xFE8D, 0xFE8E], "arabic letter alef"),
    ('\u{0628}', 'd', [0xFE8F, 0xFE91, 0xFE92, 0xFE90], "arabic letter beh"),
    ('\u{0629}', 'r', [0xFE93, 0xFE93, 0xFE93, 0xFE94], "arabic letter teh marbuta"),
    ('\u{062A}', 'd', [0xFE95, 0xFE97, 0xFE98, 0xFE96], "arabic letter teh"),
    ('\u{062B}', 'd', [0xFE99, 0xFE9B, 0xFE9C, 0xFE9A], "arabic letter theh"),
    ('\u{062C}', 'd', [0xFE9D, 0xFE9F, 0xFEA0, 0xFE9E], "arabic letter jeem"),
    ('\u{062D}', 'd', [0xFEA1, 0xFEA3, 0xFEA4, 0xFEA2], "arabic letter hah"),
    ('\u{062E}', 'd', [0xFEA5, 0xFEA7, 0xFEA8, 0xFEA6], "arabic letter khah"),
    ('\u{062F}', 'r', [0xFEA9, 0xFEA9, 0xFEA9, 0xFEAA], "arabic letter dal"),
    ('\u{0630}', 'r', [0xFEAB, 0xFEAB, 0xFEAB, 0xFEAC], "arabic letter thal"),
    ('\u{0631}', 'r', [0xFEAD, 0xFEAD, 0xFEAD, 0xFEAE], "arabic letter reh"),
    ('\u{0632}', 'r', [0xFEAF, 0xFEAF, 0xFEB0, 0xFEB0], "arabic letter zain"),
    ('\u{0633}', 'd', [0xFEB1, 0xFEB3, 0xFEB4, 0xFEB2], "arabic letter seen"),
    ('\u{0634}', 'd', [0xFEB5, 0xFEB7, 0xFEB8, 0xFEB6], "arabic letter sheen"),
    ('\u{0635}', 'd', [0xFEB9, 0xFEBB, 0xFEBC, 0xFEBA], "arabic letter sad"),
    ('\u{0636}', 'd', [0xFEBD, 0xFEBF, 0xFEC0, 0xFEBE], "arabic letter dad"),
    ('\u{0637}', 'd', [0xFEC1, 0xFEC3, 0xFEC4, 0xFEC2], "arabic letter tah"),
    ('\u{0638}', 'd', [0xFEC5, 0xFEC7, 0xFEC8, 0xFEC6], "arabic letter zah"),
    ('\u{0639}', 'd', [0xFEC9, 0xFECB, 0xFECC, 0xFECA], "arabic letter ain"),
    ('\u{063A}', 'd', [0xFECD, 0xFECF, 0xFED0, 0xFECE], "arabic letter ghain"),
    ('\u{063B}', 'r', [0, 0, 0, 0], "arabic letter keheh with two dots above"),
    ('\u{063C}', 'r', [0, 0, 0, 0], "arabic letter keheh with three dots below"),
    ('\u{063D}', 'u', [0, 0, 0, 0], "arabic letter farsi yeh with inverted v"),
    ('\u{063E}', 'u', [0, 0, 0, 0], "arabic letter farsi yeh with two dots above"),
    ('\u{063F}', 'u', [0, 0, 0, 0], "arabic letter farsi yeh with three dots above"),
    ('\u{0640}', 'd', [0x0640, 0x0640, 0x0640, 0x0640], "arabic tatweel"),
    ('\u{0641}', 'd', [0xFED1, 0xFED3, 0xFED4, 0xFED2], "arabic letter feh"),
    ('\u{0642}', 'd', [0xFED5, 0xFED7, 0xFED8, 0xFED6], "arabic letter qaf"),
    ('\u{0643}', 'd', [0xFED9, 0xFEDB, 0xFEDC, 0xFEDA], "arabic letter kaf"),
    ('\u{0644}', 'd', [0xFEDD, 0xFEDF, 0xFEE0, 0xFEDE], "arabic letter lam"),
    ('\u{0645}', 'd', [0xFEE1, 0xFEE3, 0xFEE4, 0xFEE2], "arabic letter meem"),
    ('\u{0646}', 'd', [0xFEE5, 0xFEE7, 0xFEE8, 0xFEE6], "arabic letter noon"),
    ('\u{0647}', 'd', [0xFEE9, 0xFEEB, 0xFEEC, 0xFEEA], "arabic letter heh"),
    ('\u{0648}', 'r', [0xFEED, 0xFEED, 0xFEED, 0xFEEE], "arabic letter waw"),
    ('\u{0649}', 'r', [0xFEEF, 0xFEEF, 0xFEEF, 0xFEF0], "arabic letter alef maksura"),
    ('\u{064A}', 'd', [0xFEF1, 0xFEF3, 0xFEF4, 0xFEF2], "arabic letter yeh"),
    ('\u{FE80}', 'u', [0xFE80, 0xFE80, 0xFE80, 0xFE80], "arabic letter hamza isolated form"),
    ('\u{FE81}', 'r', [0xFE81, 0xFE81, 0xFE81, 0xFE82], "arabic letter alef with madda above isolated form"),
    ('\u{FE82}', 'r', [0, 0, 0, 0xFE82], "arabic letter alef with madda above final form"),
    ('\u{FE83}', 'r', [0xFE83, 0xFE83, 0xFE83, 0xFE84], "arabic letter alef with hamza above isolated form"),
    ('\u{FE84}', 'r', [0, 0, 0, 0xFE84], "arabic letter alef with hamza above final form"),
    ('\u{FE85}', 'r', [0xFE85, 0xFE85, 0, 0xFE86], "arabic letter waw with hamza above isolated form"),
    ('\u{FE86}', 'r', [0, 0, 0, 0xFE86], "arabic letter waw with hamza above final form"),
    ('\u{FE87}', 'r', [0xFE87, 0xFE87, 0, 0xFE88], "arabic letter alef with hamza below isolated form"),
    ('\u{FE88}', 'r', [0, 0, 0, 0xFE88], "arabic letter alef with hamza below final form"),
    ('\u{FE89}', 'r', [0xFE89, 0xFE89, 0, 0], "arabic letter yeh with hamza above isolated form"),
    ('\u{FE8A}', 'r', [0, 0, 0, 0xFE8A], "arabic letter yeh with hamza above final form"),
    ('\u{FE8B}', 'l', [0, 0xFE8B, 0, 0], "arabic letter yeh with hamza above initial form"),
    ('\u{FE8C}', 'd', [0, 0, 0xFE8C, 0], "arabic letter yeh with hamza above medial form"),
    ('\u{FE8D}', 'r', [0xFE8D, 0xFE8D, 0, 0xFE8E], "arabic letter alef isolated form"),
    ('\u{FE8E}', 'r', [0, 0, 0, 0xFE8E], "arabic letter alef final form"),
    ('\u{FE8F}', 'd', [0xFE8F, 0xFE8F, 0xFE92, 0xFE90], "arabic letter beh isolated form"),
    ('\u{FE90}', 'r', [0, 0, 0, 0xFE90], "arabic letter beh final form"),
    ('\u{FE91}', 'l', [0, 0xFE91, 0, 0], "arabic letter beh initial form"),
    ('\u{FE92}', 'd', [0, 0, 0xFE92, 0], "arabic letter beh medial form"),
    ('\u{FE93}', 'r', [0xFE93, 0xFE93, 0, 0xFE94], "arabic letter teh marbuta isolated form"),
    ('\u{FE94}', 'r', [0, 0, 0, 0xFE94], "arabic letter teh marbuta final form"),
    ('\u{FE95}', 'd', [0xFE95, 0xFE97, 0xFE98, 0xFE96], "arabic letter teh isolated form"),
    ('\u{FE96}', 'r', [0, 0, 0, 0xFE96], "arabic letter teh final form"),
    ('\u{FE97}', 'l', [0, 0xFE97, 0, 0], "arabic letter teh initial form"),
    ('\u{FE98}', 'd', [0, 0, 0xFE98, 0], "arabic letter teh medial form"),
    ('\u{FE99}', 'd', [0xFE99, 0xFE9B, 0xFE9C, 0xFE9A], "arabic letter theh isolated form"),
    ('\u{FE9A}', 'r', [0, 0, 0, 0xFE9A], "arabic letter theh final form"),
    ('\u{FE9B}', 'l', [0, 0xFE9B, 0, 0], "arabic letter theh initial form"),
    ('\u{FE9C}', 'd', [0, 0, 0xFE9C, 0], "arabic letter theh medial form"),
    ('\u{FE9D}', 'd', [0xFE9D, 0xFE9F, 0xFEA0, 0xFE9E], "arabic letter jeem isolated form"),
    ('\u{FE9E}', 'r', [0, 0, 0, 0xFE9E], "arabic letter jeem final form"),
    ('\u{FE9F}', 'l', [0, 0xFE9F, 0, 0], "arabic letter jeem initial form"),
    ('\u{FEA0}', 'd', [0, 0, 0xFEA0, 0], "arabic letter jeem medial form"),
    ('\u{FEA1}', 'd', [0xFEA1, 0xFEA1, 0, 0], "arabic letter hah isolated form"),
    ('\u{FEA2}', 'r', [0, 0, 0, 0xFEA2], "arabic letter hah final form"),
    ('\u{FEA3}', 'l', [0, 0xFEA3, 0, 0], "arabic letter hah initial form"),
    ('\u{FEA4}', 'd', [0, 0, 0xFEA4, 0], "arabic letter hah medial form"),
    ('\u{FEA5}', 'd', [0xFEA5, 0xFEA5, 0, 0], "arabic letter khah isolated form"),
    ('\u{FEA6}', 'r', [0, 0, 0, 0xFEA6], "arabic letter khah final form"),
    ('\u{FEA7}', 'l', [0, 0xFEA7, 0, 0], "arabic letter khah initial form"),
    ('\u{FEA8}', 'd', [0, 0, 0xFEA8, 0], "arabic letter khah medial form"),
    ('\u{FEA9}', 'r', [0xFEA9, 0xFEA9, 0, 0], "arabic letter dal isolated form"),
    ('\u{FEAA}', 'r', [0, 0, 0, 0xFEAA], "arabic letter dal final form"),
    ('\u{FEAB}', 'r', [0xFEAB, 0xFEAB, 0, 0], "arabic letter thal isolated form"),
    ('\u{FEAC}', 'r', [0, 0, 0, 0xFEAC], "arabic letter thal final form"),
    ('\u{FEAD}', 'r', [0xFEAD, 0xFEAD, 0, 0], "arabic letter reh isolated form"),
    ('\u{FEAE}', 'r', [0, 0, 0, 0xFEAE], "arabic letter reh final form"),
    ('\u{FEAF}', 'r', [0xFEAF, 0xFEAF, 0xFEB0, 0xFEB0], "arabic letter zain isolated form"),
    ('\u{FEB0}', 'r', [0, 0, 0, 0xFEB0], "arabic letter zain final form"),
    ('\u{FEB1}', 'd', [0xFEB1, 0xFEB1, 0, 0], "arabic letter seen isolated form"),
    ('\u{FEB2}', 'r', [0, 0, 0, 0xFEB2], "arabic letter seen final form"),
    ('\u{FEB3}', 'l', [0, 0xFEB3, 0, 0], "arabic letter seen initial form"),
    ('\u{FEB4}', 'd', [0, 0, 0xFEB4, 0], "arabic letter seen medial form"),
    ('\u{FEB5}', 'd', [0xFEB5, 0xFEB5, 0, 0], "arabic letter sheen isolated form"),
    ('\u{FEB6}', 'r', [0, 0, 0, 0xFEB6], "arabic letter sheen final form"),
    ('\u{FEB7}', 'l', [0, 0xFEB7, 0, 0], "arabic letter sheen initial form"),
    ('\u{FEB8}', 'd', [0, 0, 0xFEB8, 0], "arabic letter sheen medial form"),
    ('\u{FEB9}', 'd', [0xFEB9, 0xFEB9, 0, 0], "arabic letter sad isolated form"),
    ('\u{FEBA}', 'r', [0, 0, 0, 0xFEBA], "arabic letter sad final form"),
    ('\u{FEBB}', 'l', [0, 0xFEBB, 0, 0], "arabic letter sad initial form"),
    ('\u{FEBC}', 'd', [0, 0, 0xFEBC, 0], "arabic letter sad medial form"),
    ('\u{FEBD}', 'd', [0xFEBD, 0xFEBD, 0, 0], "arabic letter dad isolated form"),
    ('\u{FEBE}', 'r', [0, 0, 0, 0xFEBE], "arabic letter dad final form"),
    ('\u{FEBF}', 'l', [0, 0xFEBF, 0, 0], "arabic letter dad initial form"),
    ('\u{FEC0}', 'd', [0, 0, 0xFEC0, 0], "arabic letter dad medial form"),
    ('\u{FEC1}', 'd', [0xFEC1, 0xFEC1, 0, 0], "arabic letter tah isolated form"),
    ('\u{FEC2}', 'r', [0, 0, 0, 0xFEC2], "arabic letter tah final form"),
    ('\u{FEC3}', 'l', [0, 0xFEC3, 0, 0], "arabic letter tah initial form"),
    ('\u{FEC4}', 'd', [0, 0, 0xFEC4, 0], "arabic letter tah medial form"),
    ('\u{FEC5}', 'd', [0xFEC5, 0xFEC5, 0, 0], "arabic letter zah isolated form"),
    ('\u{FEC6}', 'r', [0, 0, 0, 0xFEC6], "arabic letter zah final form"),
    ('\u{FEC7}', 'l', [0, 0xFEC7, 0, 0], "arabic letter zah initial form"),
    ('\u{FEC8}', 'd', [0, 0, 0xFEC8, 0], "arabic letter zah medial form"),
    ('\u{FEC9}', 'd', [0xFEC9, 0xFEC9, 0, 0], "arabic letter ain isolated form"),
    ('\u{FECA}', 'r', [0, 0, 0, 0xFECA], "arabic letter ain final form"),
    ('\u{FECB}', 'l', [0, 0xFECB, 0, 0], "arabic letter ain initial form"),
    ('\u{FECC}', 'd', [0, 0, 0xFECC, 0], "arabic letter ain medial form"),
    ('\u{FECD}', 'd', [0xFECD, 0xFECD, 0, 0], "arabic letter ghain isolated form"),
    ('\u{FECE}', 'r', [0, 0, 0, 0xFECE], "arabic letter ghain final form"),
    ('\u{FECF}', 'l', [0, 0xFECF, 0, 0], "arabic letter ghain initial form"),
    ('\u{FED0}', 'd', [0, 0, 0xFED0, 0], "arabic letter ghain medial form"),
    ('\u{FED1}', 'd', [0xFED1, 0xFED1, 0, 0], "arabic letter feh isolated form"),
    ('\u{FED2}', 'r', [0, 0, 0, 0xFED2], "arabic letter feh final form"),
    ('\u{FED3}', 'l', [0, 0xFED3, 0, 0], "arabic letter feh initial form"),
    ('\u{FED4}', 'd', [0, 0, 0xFED4, 0], "arabic letter feh medial form"),
    ('\u{FED5}', 'd', [0xFED5, 0xFED5, 0, 0], "arabic letter qaf isolated form"),
    ('\u{FED6}', 'r', [0, 0, 0, 0xFED6], "arabic letter qaf final form"),
    ('\u{FED7}', 'l', [0, 0xFED7, 0, 0], "arabic letter qaf initial form"),
    ('\u{FED8}', 'd', [0, 0, 0xFED8, 0], "arabic letter qaf medial form"),
    ('\u{FED9}', 'd', [0xFED9, 0xFED9, 0, 0], "arabic letter kaf isolated form"),
    ('\u{FEDA}', 'r', [0, 0, 0, 0xFEDA], "arabic letter kaf final form"),
    ('\u{FEDB}', 'l', [0, 0xFEDB, 0, 0], "arabic letter kaf initial form"),
    ('\u{FEDC}', 'd', [0, 0, 0xFEDC, 0], "arabic letter kaf medial form"),
    ('\u{FEDD}', 'd', [0xFEDD, 0xFEDD, 0, 0], "arabic letter lam isolated form"),
    ('\u{FEDE}', 'r', [0, 0, 0, 0xFEDE], "arabic letter lam final form"),
    ('\u{FEDF}', 'l', [0, 0xFEDF, 0, 0], "arabic letter lam initial form"),
    ('\u{FEE0}', 'd', [0, 0, 0xFEE0, 0], "arabic letter lam medial form"),
    ('\u{FEE1}', 'd', [0xFEE1, 0xFEE1, 0, 0], "arabic letter meem isolated form"),
    ('\u{FEE2}', 'r', [0, 0, 0, 0xFEE2], "arabic letter meem final form"),
    ('\u{FEE3}', 'l', [0, 0xFEE3, 0, 0], "arabic letter meem initial form"),
    ('\u{FEE4}', 'd', [0, 0, 0xFEE4, 0], "arabic letter meem medial form"),
    ('\u{FEE5}', 'd', [0xFEE5, 0xFEE5, 0, 0], "arabic letter noon isolated form"),
    ('\u{FEE6}', 'r', [0, 0, 0, 0xFEE6], "arabic letter noon final form"),
    ('\u{FEE7}', 'l', [0, 0xFEE7, 0, 0], "arabic letter noon initial form"),
    ('\u{FEE8}', 'd', [0, 0, 0xFEE8, 0], "arabic letter noon medial form"),
    ('\u{FEE9}', 'd', [0xFEE9, 0xFEE9, 0, 0], "arabic letter heh isolated form"),
    ('\u{FEEA}', 'r', [0, 0, 0, 0xFEEA], "arabic letter heh final form"),
    ('\u{FEEB}', 'l', [0, 0xFEEB, 0, 0], "arabic letter heh initial form"),
    ('\u{FEEC}', 'd', [0, 0, 0xFEEC, 0], "arabic letter heh medial form"),
    ('\u{FEED}', 'r', [0xFEED, 0xFEED, 0, 0xFEEE], "arabic letter waw isolated form"),
    ('\u{FEEE}', 'r', [0, 0, 0, 0xFEEE], "arabic letter waw final form"),
    ('\u{FEEF}', 'r', [0xFEEF, 0xFEEF, 0, 0], "arabic letter alef maksura isolated form"),
    ('\u{FEF0}', 'r', [0, 0, 0, 0xFEF0], "arabic letter alef maksura final form"),
    ('\u{FEF1}', 'r', [0xFEF1, 0xFEF1, 0, 0], "arabic letter yeh isolated form"),
    ('\u{FEF2}', 'r', [0, 0, 0, 0xFEF2], "arabic letter yeh final form"),
    ('\u{FEF3}', 'l', [0, 0xFEF3, 0, 0], "arabic letter yeh initial form"),
    ('\u{FEF4}', 'd', [0, 0, 0xFEF4, 0], "arabic letter yeh medial form"),
    ('\u{FEF5}', 'u', [0xFEF5, 0xFEF5, 0xFEF5, 0], "arabic ligature lam with alef with madda above isolated form"),
    ('\u{FEF6}', 'r', [0, 0, 0xFEF6, 0xFEF6], "arabic ligature lam with alef with madda above final form"),
    ('\u{FEF7}', 'u', [0xFEF7, 0xFEF7, 0xFEF7, 0xFEF7], "arabic ligature lam with alef with hamza above isolated form"),
    ('\u{FEF8}', 'r', [0, 0, 0xFEF8, 0xFEF8], "arabic ligature lam with alef with hamza above final form"),
    ('\u{FEF9}', 'u', [0xFEF9, 0xFEF9, 0, 0], "arabic ligature lam with alef with hamza below isolated form"),
    ('\u{FEFA}', 'r', [0, 0, 0xFEFA, 0xFEFA], "arabic ligature lam with alef with hamza below final form"),
    ('\u{FEFB}', 'u', [0xFEFB, 0xFEFB, 0xFEFB, 0], "arabic ligature lam with alef isolated form"),
    ('\u{FEFC}', 'r', [0, 0, 0xFEFC, 0xFEFC], "arabic ligature lam with alef final form"),
    ('\u{FEFD}', 'u', [0, 0, 0, 0], "not supported"),
    ('\u{FEFE}', 'u', [0, 0, 0, 0], "not supported"),
    ('\u{FEFF}', 'u', [0, 0, 0, 0], "not supported"),
];

#[rustfmt::skip]
pub(super) const LIGATURES: &[(char, char, [u32; 4], &str)] = &[
    ('\u{0644}', '\u{0622}', [0xFEF5, 0xFEF5, 0xFEF6, 0xFEF6], "arabic ligature lam with alef with madda above"),
    ('\u{0644}', '\u{0623}', [0xFEF7, 0xFEF7, 0xFEF8, 0xFEF8], "arabic ligature lam with alef with hamza above"),
    ('\u{0644}', '\u{0625}', [0xFEF9, 0xFEF9, 0xFEFA, 0xFEFA], "arabic ligature lam with alef with hamza below"),
    ('\u{0644}', '\u{0627}', [0xFEFB, 0xFEFB, 0xFEFC, 0xFEFC], "arabic ligature lam with alef"),
];
