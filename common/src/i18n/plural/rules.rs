//! CLDR plural rule families and the default language table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::PluralRule;
use crate::i18n::tag::{LanguageTag, parse_tag};

/// Named CLDR rule families, usable with [`PluralRules::register`].
///
/// [`PluralRules::register`]: super::PluralRules::register
pub mod cldr {
    use super::super::{Operands, PluralCategory, PluralRule};
    use PluralCategory::{Few, Many, One, Other, Two, Zero};

    /// No plural distinction (Japanese, Chinese, Korean, Thai, ...).
    pub const OTHER_ONLY: PluralRule = PluralRule::new("other-only", |_| Other);

    /// `one: i = 1 and v = 0` (English, German, Dutch, Swedish, ...).
    pub const ONE_INTEGER: PluralRule = PluralRule::new("one-integer", |ops| {
        if ops.i == 1 && ops.v == 0 { One } else { Other }
    });

    /// `one: n = 1` (Turkish, Spanish, Greek, Hungarian, ...).
    pub const ONE_EXACT: PluralRule =
        PluralRule::new("one-exact", |ops| if ops.n_is(1) { One } else { Other });

    /// `one: i = 0,1` (French, Portuguese, Armenian, ...).
    pub const ONE_ZERO_OR_ONE: PluralRule = PluralRule::new("one-zero-or-one", |ops| {
        if ops.i <= 1 { One } else { Other }
    });

    /// `one: i = 0 or n = 1` (Hindi, Bengali, Persian, Zulu, ...).
    pub const ONE_UP_TO_ONE: PluralRule = PluralRule::new("one-up-to-one", |ops| {
        if ops.i == 0 || ops.n_is(1) { One } else { Other }
    });

    /// `one: n = 0..1` (Akan, Lingala, Punjabi, ...).
    pub const ONE_INTEGER_UP_TO_ONE: PluralRule =
        PluralRule::new("one-integer-up-to-one", |ops| {
            if ops.n_in(0..=1) { One } else { Other }
        });

    /// Sinhala: `one: n = 0,1 or i = 0 and f = 1`.
    pub const SINHALA: PluralRule = PluralRule::new("sinhala", |ops| {
        if ops.n_in(0..=1) || (ops.i == 0 && ops.f == 1) {
            One
        } else {
            Other
        }
    });

    /// Danish: `one: n = 1 or t != 0 and i = 0,1`.
    pub const DANISH: PluralRule = PluralRule::new("danish", |ops| {
        if ops.n_is(1) || (ops.t != 0 && ops.i <= 1) {
            One
        } else {
            Other
        }
    });

    /// Icelandic: `one: t = 0 and i % 10 = 1 and i % 100 != 11 or
    /// t % 10 = 1 and t % 100 != 11`.
    pub const ICELANDIC: PluralRule = PluralRule::new("icelandic", |ops| {
        let integer = ops.t == 0 && ops.i % 10 == 1 && ops.i % 100 != 11;
        let fraction = ops.t % 10 == 1 && ops.t % 100 != 11;
        if integer || fraction { One } else { Other }
    });

    /// Macedonian: `one: v = 0 and i % 10 = 1 and i % 100 != 11 or
    /// f % 10 = 1 and f % 100 != 11`.
    pub const MACEDONIAN: PluralRule = PluralRule::new("macedonian", |ops| {
        let integer = ops.v == 0 && ops.i % 10 == 1 && ops.i % 100 != 11;
        let fraction = ops.f % 10 == 1 && ops.f % 100 != 11;
        if integer || fraction { One } else { Other }
    });

    /// Filipino: `one: v = 0 and i = 1,2,3 or v = 0 and i % 10 != 4,6,9 or
    /// v != 0 and f % 10 != 4,6,9`.
    pub const FILIPINO: PluralRule = PluralRule::new("filipino", |ops| {
        let excluded = |digit: u64| matches!(digit % 10, 4 | 6 | 9);
        let one = if ops.v == 0 {
            (1..=3).contains(&ops.i) || !excluded(ops.i)
        } else {
            !excluded(ops.f)
        };
        if one { One } else { Other }
    });

    /// Latvian: zero, one and other with fraction-aware conditions.
    pub const LATVIAN: PluralRule = PluralRule::new("latvian", latvian);

    /// Russian and Ukrainian: one, few, many on integer counts.
    pub const EAST_SLAVIC: PluralRule = PluralRule::new("east-slavic", east_slavic);

    /// Belarusian: the East Slavic pattern over `n`.
    pub const BELARUSIAN: PluralRule = PluralRule::new("belarusian", belarusian);

    /// Bosnian, Croatian and Serbian.
    pub const SERBO_CROATIAN: PluralRule = PluralRule::new("serbo-croatian", serbo_croatian);

    /// Polish.
    pub const POLISH: PluralRule = PluralRule::new("polish", polish);

    /// Czech and Slovak.
    pub const CZECH: PluralRule = PluralRule::new("czech", |ops| match (ops.i, ops.v) {
        (1, 0) => One,
        (2..=4, 0) => Few,
        (_, 0) => Other,
        _ => Many,
    });

    /// Lithuanian.
    pub const LITHUANIAN: PluralRule = PluralRule::new("lithuanian", lithuanian);

    /// Romanian and Moldavian.
    pub const ROMANIAN: PluralRule = PluralRule::new("romanian", |ops| {
        if ops.i == 1 && ops.v == 0 {
            One
        } else if ops.v != 0 || ops.n_is(0) || ops.n_mod_in(100, 1..=19) {
            Few
        } else {
            Other
        }
    });

    /// Slovenian.
    pub const SLOVENIAN: PluralRule = PluralRule::new("slovenian", |ops| {
        if ops.v != 0 {
            return Few;
        }
        match ops.i % 100 {
            1 => One,
            2 => Two,
            3 | 4 => Few,
            _ => Other,
        }
    });

    /// Arabic.
    pub const ARABIC: PluralRule = PluralRule::new("arabic", |ops| {
        if ops.n_is(0) {
            Zero
        } else if ops.n_is(1) {
            One
        } else if ops.n_is(2) {
            Two
        } else if ops.n_mod_in(100, 3..=10) {
            Few
        } else if ops.n_mod_in(100, 11..=99) {
            Many
        } else {
            Other
        }
    });

    /// Hebrew.
    pub const HEBREW: PluralRule = PluralRule::new("hebrew", |ops| match (ops.i, ops.v) {
        (1, 0) => One,
        (2, 0) => Two,
        _ => Other,
    });

    /// Maltese.
    pub const MALTESE: PluralRule = PluralRule::new("maltese", |ops| {
        if ops.n_is(1) {
            One
        } else if ops.n_is(0) || ops.n_mod_in(100, 2..=10) {
            Few
        } else if ops.n_mod_in(100, 11..=19) {
            Many
        } else {
            Other
        }
    });

    /// Welsh.
    pub const WELSH: PluralRule = PluralRule::new("welsh", |ops| {
        if ops.t != 0 {
            return Other;
        }
        match ops.i {
            0 => Zero,
            1 => One,
            2 => Two,
            3 => Few,
            6 => Many,
            _ => Other,
        }
    });

    /// Irish.
    pub const IRISH: PluralRule = PluralRule::new("irish", |ops| {
        if ops.t != 0 {
            return Other;
        }
        match ops.i {
            1 => One,
            2 => Two,
            3..=6 => Few,
            7..=10 => Many,
            _ => Other,
        }
    });

    /// Scottish Gaelic.
    pub const SCOTTISH_GAELIC: PluralRule = PluralRule::new("scottish-gaelic", |ops| {
        if ops.t != 0 {
            return Other;
        }
        match ops.i {
            1 | 11 => One,
            2 | 12 => Two,
            3..=10 | 13..=19 => Few,
            _ => Other,
        }
    });

    fn latvian(ops: &Operands) -> PluralCategory {
        let two_digit_fraction = ops.v == 2;
        if ops.n_mod_in(10, 0..=0)
            || ops.n_mod_in(100, 11..=19)
            || (two_digit_fraction && (11..=19).contains(&(ops.f % 100)))
        {
            return Zero;
        }

        let integer_one = ops.n_mod_in(10, 1..=1) && !ops.n_mod_in(100, 11..=11);
        let fraction_one = if two_digit_fraction {
            ops.f % 10 == 1 && ops.f % 100 != 11
        } else {
            ops.f % 10 == 1
        };
        if integer_one || fraction_one { One } else { Other }
    }

    fn east_slavic(ops: &Operands) -> PluralCategory {
        if ops.v != 0 {
            return Other;
        }
        slavic_integer(ops.i)
    }

    fn belarusian(ops: &Operands) -> PluralCategory {
        if ops.t != 0 {
            return Other;
        }
        slavic_integer(ops.i)
    }

    fn slavic_integer(value: u64) -> PluralCategory {
        let (last, last_two) = (value % 10, value % 100);
        if last == 1 && last_two != 11 {
            One
        } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
            Few
        } else {
            Many
        }
    }

    fn serbo_croatian(ops: &Operands) -> PluralCategory {
        let one = |value: u64| value % 10 == 1 && value % 100 != 11;
        let few = |value: u64| (2..=4).contains(&(value % 10)) && !(12..=14).contains(&(value % 100));

        if (ops.v == 0 && one(ops.i)) || one(ops.f) {
            One
        } else if (ops.v == 0 && few(ops.i)) || few(ops.f) {
            Few
        } else {
            Other
        }
    }

    fn polish(ops: &Operands) -> PluralCategory {
        if ops.v != 0 {
            return Other;
        }
        let (last, last_two) = (ops.i % 10, ops.i % 100);
        if ops.i == 1 {
            One
        } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
            Few
        } else {
            Many
        }
    }

    fn lithuanian(ops: &Operands) -> PluralCategory {
        if ops.f != 0 {
            return Many;
        }
        let teen = ops.n_mod_in(100, 11..=19);
        if ops.n_mod_in(10, 1..=1) && !teen {
            One
        } else if ops.n_mod_in(10, 2..=9) && !teen {
            Few
        } else {
            Other
        }
    }
}

const FAMILIES: &[(PluralRule, &[&str])] = &[
    (
        cldr::OTHER_ONLY,
        &[
            "bm", "bo", "dz", "hnj", "id", "ig", "ii", "in", "ja", "jbo", "jv", "jw", "kde", "kea",
            "km", "ko", "lkt", "lo", "ms", "my", "nqo", "osa", "sah", "ses", "sg", "su", "th", "to",
            "tpi", "vi", "wo", "yo", "yue", "zh",
        ],
    ),
    (
        cldr::ONE_INTEGER,
        &[
            "ast", "ca", "de", "en", "et", "fi", "fy", "gl", "ia", "io", "it", "ji", "lij", "nl",
            "sc", "scn", "sv", "sw", "ur", "yi",
        ],
    ),
    (
        cldr::ONE_EXACT,
        &[
            "af", "an", "asa", "az", "bal", "bem", "bez", "bg", "brx", "ce", "cgg", "chr", "ckb",
            "dv", "ee", "el", "eo", "es", "eu", "fo", "fur", "gsw", "ha", "haw", "hu", "jgo", "jmc",
            "ka", "kaj", "kcg", "kk", "kkj", "kl", "ks", "ksb", "ku", "ky", "lb", "lg", "mas",
            "mgo", "ml", "mn", "mr", "nah", "nb", "nd", "ne", "nn", "nnh", "no", "nr", "ny", "nyn",
            "om", "or", "os", "pap", "ps", "rm", "rof", "rwk", "saq", "sd", "sdh", "seh", "sn",
            "so", "sq", "ss", "ssy", "st", "syr", "ta", "te", "teo", "tig", "tk", "tn", "tr", "ts",
            "ug", "uz", "ve", "vo", "vun", "wae", "xh", "xog",
        ],
    ),
    (cldr::ONE_ZERO_OR_ONE, &["ff", "fr", "hy", "kab", "pt"]),
    (
        cldr::ONE_UP_TO_ONE,
        &["am", "as", "bn", "doi", "fa", "gu", "hi", "kn", "pcm", "zu"],
    ),
    (
        cldr::ONE_INTEGER_UP_TO_ONE,
        &["ak", "bho", "guw", "ln", "mg", "nso", "pa", "ti", "wa"],
    ),
    (cldr::SINHALA, &["si"]),
    (cldr::DANISH, &["da"]),
    (cldr::ICELANDIC, &["is"]),
    (cldr::MACEDONIAN, &["mk"]),
    (cldr::FILIPINO, &["fil", "tl"]),
    (cldr::LATVIAN, &["lv", "prg"]),
    (cldr::EAST_SLAVIC, &["ru", "uk"]),
    (cldr::BELARUSIAN, &["be"]),
    (cldr::SERBO_CROATIAN, &["bs", "hr", "sh", "sr"]),
    (cldr::POLISH, &["pl"]),
    (cldr::CZECH, &["cs", "sk"]),
    (cldr::LITHUANIAN, &["lt"]),
    (cldr::ROMANIAN, &["mo", "ro"]),
    (cldr::SLOVENIAN, &["sl"]),
    (cldr::ARABIC, &["ar", "ars"]),
    (cldr::HEBREW, &["he", "iw"]),
    (cldr::MALTESE, &["mt"]),
    (cldr::WELSH, &["cy"]),
    (cldr::IRISH, &["ga"]),
    (cldr::SCOTTISH_GAELIC, &["gd"]),
];

#[cfg(test)]
pub(super) fn default_languages() -> impl Iterator<Item = &'static str> {
    FAMILIES
        .iter()
        .flat_map(|(_, languages)| languages.iter().copied())
}

pub(super) static DEFAULT_RULES: Lazy<HashMap<LanguageTag, PluralRule>> = Lazy::new(|| {
    FAMILIES
        .iter()
        .flat_map(|(rule, languages)| languages.iter().map(move |language| (*rule, *language)))
        .filter_map(|(rule, language)| parse_tag(language).ok().map(|tag| (tag, rule)))
        .collect()
});
