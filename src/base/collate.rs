//! Fixed, locale-independent string collation for picker listings.
//!
//! Approximates the root-locale ordering of Unicode collation for Latin text:
//! 1. Primary: letters compared case-insensitively with diacritics removed.
//!    `ß`, `æ` and `œ` expand to `ss`, `ae` and `oe`. Whitespace, punctuation
//!    and symbols sort before digits, which sort before letters.
//! 2. Secondary: at the first position where only accents differ, the
//!    unaccented character sorts first.
//! 3. Tertiary: at the first position where only case differs, lowercase
//!    sorts first.
//! 4. Remaining ties are broken by code point, so only identical strings
//!    compare equal.
//!
//! Only the Latin letters listed in [`decompose`] are folded. Any other
//! letter is its own primary weight, ordered by code point.

use std::cmp::Ordering;

/// Collation weights of a single character.
#[derive(Debug, Clone, Copy)]
struct Weights {
    primary: (u8, char),
    accented: bool,
    upper: bool,
}

impl Weights {
    fn of(c: char) -> impl Iterator<Item = Self> {
        let upper = c.is_uppercase();
        c.to_lowercase().flat_map(move |lower| {
            let (first, second, accented) = decompose(lower);
            std::iter::once(first).chain(second).map(move |base| Self {
                primary: (class(base), base),
                accented,
                upper,
            })
        })
    }
}

fn class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// Maps a lowercase Latin letter with a diacritic, or a ligature, to its base
/// letters. The flag is set if the letter differed from its base.
fn decompose(c: char) -> (char, Option<char>, bool) {
    let base = match c {
        'ß' => return ('s', Some('s'), true),
        'æ' => return ('a', Some('e'), true),
        'œ' => return ('o', Some('e'), true),
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' | 'ð' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return (c, None, false),
    };
    (base, None, true)
}

fn weights(s: &str) -> Vec<Weights> {
    s.chars().flat_map(Weights::of).collect()
}

/// Compares two strings under the fixed collation described in the module
/// documentation.
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let wa = weights(a);
    let wb = weights(b);

    let primary = wa
        .iter()
        .map(|w| w.primary)
        .cmp(wb.iter().map(|w| w.primary));
    if primary != Ordering::Equal {
        return primary;
    }
    // Primary weights are equal, so both sequences have the same length.
    let secondary = wa
        .iter()
        .zip(wb.iter())
        .map(|(x, y)| x.accented.cmp(&y.accented))
        .find(|o| o.is_ne());
    if let Some(o) = secondary {
        return o;
    }
    let tertiary = wa
        .iter()
        .zip(wb.iter())
        .map(|(x, y)| x.upper.cmp(&y.upper))
        .find(|o| o.is_ne());
    if let Some(o) = tertiary {
        return o;
    }
    a.cmp(b)
}
