//! Greek text transforms for classical quotations in scanned books.
//!
//! Two operations ported from the proofing workflow's Greek tables:
//! stripping diacritics down to base letters (rough breathing kept, so a
//! leading aspiration still transliterates to `h`), and a full Greek to
//! Latin transliteration. Both are plain ordered substitution passes.

use lazy_static::lazy_static;
use regex::Regex;

// Each accented cluster maps to its base letter; entries with rough
// breathing map to the bare rough-breathing letter.
const DIACRITIC_CLASSES: &[(&str, &str)] = &[
    ("άἀἂἄἆὰάᾀᾂᾄᾆᾰᾱᾲᾳᾴᾶᾷ", "α"),
    ("ἁἃἅἇᾁᾃᾅᾇ", "ἁ"),
    ("ΆἈἊἌἎᾈᾊᾌᾎᾸᾹᾺΆᾼ", "Α"),
    ("ἉἋἍἏᾉᾋᾍᾏ", "Ἁ"),
    ("έἐἒἔὲέ", "ε"),
    ("ἑἓἕ", "ἑ"),
    ("ΈἘἚἜῈΈ", "Ε"),
    ("ἙἛἝ", "Ἑ"),
    ("ήἠἢἤἦὴήᾐᾒᾔᾖῂῃῄῆῇ", "η"),
    ("ἡἣἥἧᾑᾓᾕᾗ", "ἡ"),
    ("ΉἨἪἬἮᾘᾚᾜᾞῊΉῌ", "Η"),
    ("ἩἫἭἯᾙᾛᾝᾟ", "Ἡ"),
    ("ϊίΐἰἲἴἶὶίῐῑῒΐῖῗ", "ι"),
    ("ἱἳἵἷ", "ἱ"),
    ("ΪΊἸἺἼἾῘῙῚΊ", "Ι"),
    ("ἹἻἽἿ", "Ἱ"),
    ("όὀὂὄὸό", "ο"),
    ("ὁὃὅ", "ὁ"),
    ("ΌὈὊὌῸΌ", "Ο"),
    ("ὉὋὍ", "Ὁ"),
    ("ύϋΰὐὒὔὖὺύῠῡῢΰῦῧ", "υ"),
    ("ὑὓὕὗ", "ὑ"),
    ("ΫΎῨῩῪΎ", "Υ"),
    ("ὙὛὝὟ", "Ὑ"),
    ("ώὠὢὤὦὼώᾠᾢᾤᾦῲῳῴῶῷ", "ω"),
    ("ὡὣὥὧᾡᾣᾥᾧ", "ὡ"),
    ("ΏὨὪὬὮᾨᾪᾬᾮῺΏῼ", "Ω"),
    ("ὩὫὭὯᾩᾫᾭᾯ", "Ὡ"),
    ("ῤ", "ρ"),
    ("ῥ", "ῥ"),
    ("Ῥ", "Ῥ"),
];

// Applied in order: digraphs first, then single letters, then stray
// accent marks dropped.
const TRANSLITERATION: &[(&str, &str)] = &[
    ("γγ", "ng"),
    ("γκ", "nk"),
    ("γξ", "nx"),
    ("γχ", "nch"),
    ("ρρ", "rrh"),
    ("α", "a"),
    ("ἁ", "ha"),
    ("Α", "A"),
    ("Ἁ", "Ha"),
    ("β", "b"),
    ("Β", "B"),
    ("γ", "g"),
    ("Γ", "G"),
    ("δ", "d"),
    ("Δ", "D"),
    ("ε", "e"),
    ("ἑ", "he"),
    ("Ε", "E"),
    ("Ἑ", "He"),
    ("ζ", "z"),
    ("Ζ", "Z"),
    ("η", "ê"),
    ("ἡ", "hê"),
    ("Η", "Ê"),
    ("Ἡ", "Hê"),
    ("θ", "th"),
    ("ϑ", "th"),
    ("Θ", "Th"),
    ("ι", "i"),
    ("ἱ", "hi"),
    ("Ι", "I"),
    ("Ἱ", "Hi"),
    ("κ", "k"),
    ("Κ", "K"),
    ("λ", "l"),
    ("Λ", "L"),
    ("μ", "m"),
    ("Μ", "M"),
    ("ν", "n"),
    ("Ν", "N"),
    ("ξ", "x"),
    ("Ξ", "X"),
    ("ο", "o"),
    ("ὁ", "ho"),
    ("Ο", "O"),
    ("Ὁ", "Ho"),
    ("π", "p"),
    ("Π", "P"),
    ("ρ", "r"),
    ("ῥ", "rh"),
    ("Ρ", "R"),
    ("Ῥ", "Rh"),
    ("ς", "s"),
    ("σ", "s"),
    ("Σ", "S"),
    ("τ", "t"),
    ("Τ", "T"),
    ("υ", "u"),
    ("ὑ", "hu"),
    ("Υ", "U"),
    ("Ὑ", "Hu"),
    ("φ", "ph"),
    ("Φ", "Ph"),
    ("χ", "ch"),
    ("Χ", "Ch"),
    ("ψ", "ps"),
    ("Ψ", "Ps"),
    ("ω", "ô"),
    ("ὡ", "hô"),
    ("Ω", "Ô"),
    ("Ὡ", "Hô"),
    ("΄", ""),
    ("͵", ""),
    ("᾽", ""),
    ("᾿", ""),
];

lazy_static! {
    static ref DIACRITIC_PATTERNS: Vec<(Regex, &'static str)> = DIACRITIC_CLASSES
        .iter()
        .map(|(chars, base)| (Regex::new(&format!("[{chars}]")).unwrap(), *base))
        .collect();
}

/// Replace every accented Greek letter with its base form. Rough
/// breathing survives; every other diacritic goes.
pub fn remove_diacritics(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, base) in DIACRITIC_PATTERNS.iter() {
        out = pattern.replace_all(&out, *base).into_owned();
    }
    out
}

/// Strip diacritics, then transliterate Greek letters to Latin.
pub fn transliterate(text: &str) -> String {
    let mut out = remove_diacritics(text);
    for (from, to) in TRANSLITERATION {
        out = out.replace(from, to);
    }
    out
}
