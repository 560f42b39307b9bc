//! The ordered OCR-cleanup catalog.
//!
//! Every cleanup is a named toggle backed by one or more substitutions.
//! Within a run the catalog order below is what counts, never the order the
//! caller selected the toggles in: the underscore conversion has to land
//! before the brace conversion, the em-dash conversion before the em-dash
//! spacing fixes, and the line-level whitespace rules last.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// One toggleable cleanup. The variants form a closed set; the string
/// names the selection dialog sends are resolved by [`CleanupRule::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleanupRule {
    /// Remove form feed characters.
    FormFeed,
    /// Tab to single space.
    TabToSpace,
    /// Collapse runs of spaces to one.
    MultiWhite,
    /// Remove spaces before a semicolon.
    FixSemicolon,
    /// Remove spaces before a colon.
    FixColon,
    /// Remove spaces before an exclamation mark.
    FixExclamation,
    /// Remove spaces before a question mark.
    FixQuestion,
    /// Remove spaces before a period.
    FixPeriod,
    /// Remove spaces before a comma.
    FixComma,
    /// Underscore to dash.
    UnderscoreConv,
    /// Em-dash to `--`.
    EmDashConv,
    /// Remove spaces around `--`.
    EmDashSpace,
    /// Join a line-final `--` with the word starting the next line.
    EmDashEol,
    /// Join a line-initial `--` with the word ending the previous line.
    EmDashSol,
    /// Curly single quotes to straight.
    CurlySingle,
    /// Two single quotes to one double quote.
    SingleToDouble,
    /// Remove spaces inside curly double quotes.
    CurlyQuoteSpace,
    /// Remove spaces inside outward guillemets (`« text »`).
    GuilleSpaceOut,
    /// Remove spaces inside inward guillemets (`» text «`).
    GuilleSpaceIn,
    /// Guillemets to straight double quotes.
    GuilleToQuote,
    /// Curly double quotes to straight.
    CurlyDouble,
    /// Low double quote (`„`) to straight.
    LowDoubleQuote,
    /// Low single quote (`‚`) to straight.
    LowSingleQuote,
    /// Braces to parentheses.
    BracesToParens,
    /// Comma ending a paragraph to a period.
    CommaParagraph,
    /// Remove spaces after an opening bracket.
    FixOpenBracket,
    /// Remove spaces before a closing bracket.
    FixCloseBracket,
    /// Two commas to a double quote.
    CommaToQuote,
    /// Ellipsis character to three periods.
    Ellipsis,
    /// ĳ/Ĳ ligatures to letter pairs.
    IjLigature,
    /// Stray Greek tonos/psili/koronis marks to an apostrophe.
    GreekMarks,
    /// Theta symbol variants to plain theta.
    GreekTheta,
    /// Remove leading whitespace on each line.
    LeadingWhite,
    /// Remove trailing whitespace on each line.
    TrailingWhite,
    /// Merge runs of blank lines into one.
    MultiLines,
    /// Remove blank lines at the start of a page.
    StartLines,
    /// Remove blank lines at the end of a page.
    EndLines,
}

lazy_static! {
    /// The full catalog in application order, each rule with its
    /// substitutions. Patterns compile once, on first use.
    static ref RULE_TABLE: Vec<(CleanupRule, Vec<(Regex, &'static str)>)> = {
        use CleanupRule::*;
        fn re(pattern: &str) -> Regex {
            Regex::new(pattern).unwrap()
        }
        vec![
            (FormFeed, vec![(re("\u{c}"), "")]),
            (TabToSpace, vec![(re("\t"), " ")]),
            (MultiWhite, vec![(re(" +"), " ")]),
            (FixSemicolon, vec![(re(" +;"), ";")]),
            (FixColon, vec![(re(" +:"), ":")]),
            (FixExclamation, vec![(re(" +!"), "!")]),
            (FixQuestion, vec![(re(r" +\?"), "?")]),
            (FixPeriod, vec![(re(r" +\."), ".")]),
            (FixComma, vec![(re(" +,"), ",")]),
            (UnderscoreConv, vec![(re("_"), "-")]),
            (EmDashConv, vec![(re("—"), "--")]),
            (EmDashSpace, vec![(re(" *-- *"), "--")]),
            (EmDashEol, vec![(re(r"--\n(\S+) *"), "--$1\n")]),
            (EmDashSol, vec![(re(r"(\S)\n--(\S+) *"), "$1--$2\n")]),
            (CurlySingle, vec![(re("[’‘]"), "'")]),
            (SingleToDouble, vec![(re("''"), "\"")]),
            (CurlyQuoteSpace, vec![(re(" +”"), "”"), (re("“ +"), "“")]),
            (GuilleSpaceOut, vec![(re(" +»"), "»"), (re("« +"), "«")]),
            (GuilleSpaceIn, vec![(re(" +«"), "«"), (re("» +"), "»")]),
            (GuilleToQuote, vec![(re("[«»]"), "\"")]),
            (CurlyDouble, vec![(re("[”“]"), "\"")]),
            (LowDoubleQuote, vec![(re("„"), "\"")]),
            (LowSingleQuote, vec![(re("‚"), "'")]),
            (BracesToParens, vec![(re(r"\{"), "("), (re(r"\}"), ")")]),
            (CommaParagraph, vec![(re(",\n\n"), ".\n\n")]),
            (FixOpenBracket, vec![(re(r"\( +"), "(")]),
            (FixCloseBracket, vec![(re(r" +\)"), ")")]),
            (CommaToQuote, vec![(re(",,"), "\"")]),
            (Ellipsis, vec![(re("…"), "...")]),
            (IjLigature, vec![(re("ĳ"), "ij"), (re("Ĳ"), "IJ")]),
            (GreekMarks, vec![(re("[\u{375}\u{1fbf}\u{1fbd}\u{384}\u{313}\u{342}]"), "'")]),
            (GreekTheta, vec![(re("ϑ"), "θ"), (re("ϴ"), "Θ")]),
            (LeadingWhite, vec![(re("(?m)^ +"), "")]),
            (TrailingWhite, vec![(re("(?m) +$"), "")]),
            (MultiLines, vec![(re("\n\n+"), "\n\n")]),
            (StartLines, vec![(re("^\n+"), "")]),
            (EndLines, vec![(re("\n+$"), "")]),
        ]
    };
}

impl CleanupRule {
    /// The toggle name used by selection dialogs and saved option sets.
    pub fn name(self) -> &'static str {
        match self {
            CleanupRule::FormFeed => "formfeed",
            CleanupRule::TabToSpace => "tabtospace",
            CleanupRule::MultiWhite => "multiwhite",
            CleanupRule::FixSemicolon => "fixscolon",
            CleanupRule::FixColon => "fixcolon",
            CleanupRule::FixExclamation => "fixexlam",
            CleanupRule::FixQuestion => "fixquestion",
            CleanupRule::FixPeriod => "fixperiod",
            CleanupRule::FixComma => "fixcomma",
            CleanupRule::UnderscoreConv => "underscoreconv",
            CleanupRule::EmDashConv => "emdashconv",
            CleanupRule::EmDashSpace => "emspace",
            CleanupRule::EmDashEol => "emdashEOL",
            CleanupRule::EmDashSol => "emdashSOL",
            CleanupRule::CurlySingle => "curlysingle",
            CleanupRule::SingleToDouble => "stodquote",
            CleanupRule::CurlyQuoteSpace => "curlyquotespace",
            CleanupRule::GuilleSpaceOut => "guillespace1",
            CleanupRule::GuilleSpaceIn => "guillespace2",
            CleanupRule::GuilleToQuote => "quilletoquote",
            CleanupRule::CurlyDouble => "curlydouble",
            CleanupRule::LowDoubleQuote => "lowdquote",
            CleanupRule::LowSingleQuote => "lowsquote",
            CleanupRule::BracesToParens => "bracesconv",
            CleanupRule::CommaParagraph => "commapara",
            CleanupRule::FixOpenBracket => "fixopenbrack",
            CleanupRule::FixCloseBracket => "fixclosebrack",
            CleanupRule::CommaToQuote => "commatoquote",
            CleanupRule::Ellipsis => "convellip",
            CleanupRule::IjLigature => "ijligature",
            CleanupRule::GreekMarks => "greekTPK",
            CleanupRule::GreekTheta => "greekTheta",
            CleanupRule::LeadingWhite => "leadingwhite",
            CleanupRule::TrailingWhite => "trailingwhite",
            CleanupRule::MultiLines => "multilines",
            CleanupRule::StartLines => "startlines",
            CleanupRule::EndLines => "endlines",
        }
    }

    /// Resolve a toggle name. `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        RULE_TABLE
            .iter()
            .map(|(rule, _)| *rule)
            .find(|rule| rule.name() == name)
    }
}

/// Resolve a list of toggle names to rules. Unrecognized names are skipped,
/// not an error: the selection dialog is free to grow options before the
/// engine learns them.
pub fn rules_from_names<'a, I>(names: I) -> Vec<CleanupRule>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rules = Vec::new();
    for name in names {
        match CleanupRule::from_name(name) {
            Some(rule) => rules.push(rule),
            None => debug!(name, "ignoring unknown cleanup toggle"),
        }
    }
    rules
}

/// Apply the enabled rules to `text` in catalog order and return the
/// transformed text. Disabled rules are skipped entirely. An empty rule
/// set returns the input unchanged.
pub fn apply_rules(text: &str, rules: &[CleanupRule]) -> String {
    let enabled: HashSet<CleanupRule> = rules.iter().copied().collect();
    let mut out = text.to_string();
    for (rule, substitutions) in RULE_TABLE.iter() {
        if !enabled.contains(rule) {
            continue;
        }
        for (pattern, replacement) in substitutions {
            out = pattern.replace_all(&out, *replacement).into_owned();
        }
    }
    out
}

/// A bundled toggle selection for a common page language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    English,
    Dutch,
    Empty,
}

impl Preset {
    /// The rules this preset enables.
    pub fn rules(self) -> Vec<CleanupRule> {
        use CleanupRule::*;
        match self {
            Preset::Empty => Vec::new(),
            Preset::English => vec![
                FormFeed,
                TabToSpace,
                MultiWhite,
                FixSemicolon,
                FixColon,
                FixExclamation,
                FixQuestion,
                FixPeriod,
                FixComma,
                UnderscoreConv,
                EmDashConv,
                EmDashSpace,
                EmDashEol,
                EmDashSol,
                CurlySingle,
                SingleToDouble,
                CurlyQuoteSpace,
                CurlyDouble,
                BracesToParens,
                CommaParagraph,
                FixOpenBracket,
                FixCloseBracket,
                CommaToQuote,
                Ellipsis,
                LeadingWhite,
                TrailingWhite,
                MultiLines,
                StartLines,
                EndLines,
            ],
            Preset::Dutch => {
                let mut rules = Preset::English.rules();
                rules.extend([
                    GuilleSpaceOut,
                    GuilleSpaceIn,
                    GuilleToQuote,
                    LowDoubleQuote,
                    LowSingleQuote,
                    IjLigature,
                ]);
                rules
            }
        }
    }
}

/// Suggest a preset from the dominant language of `text`. `None` when the
/// language is unsupported or cannot be determined.
pub fn suggest_preset(text: &str) -> Option<Preset> {
    match whatlang::detect_lang(text)? {
        whatlang::Lang::Eng => Some(Preset::English),
        whatlang::Lang::Nld => Some(Preset::Dutch),
        _ => None,
    }
}
