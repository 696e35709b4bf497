//! Query normalization
//!
//! Maps the many ways a Japanese user may type the same thing onto one
//! canonical form so that plain substring containment works against the
//! directory tables:
//!
//! 1. the first "ごう" becomes "号"
//! 2. the first "かん" becomes "館"
//! 3. the first full-width long vowel mark "ー" becomes half-width "ｰ"
//! 4. the first ideographic comma "、" becomes ","
//! 5. the whole string is upper-cased
//! 6. full-width Latin capitals and digits become their ASCII forms
//! 7. hiragana becomes katakana
//!
//! Steps 1-4 only touch the first occurrence. Steps 6 and 7 cover disjoint
//! code point ranges, so they are applied in a single pass over the chars.

/// Distance between a full-width form and its ASCII counterpart
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Distance between a hiragana and its katakana counterpart
const KATAKANA_OFFSET: u32 = 0x60;

const SUBSTITUTIONS: [(&str, &str); 4] = [("ごう", "号"), ("かん", "館"), ("ー", "ｰ"), ("、", ",")];

/// Normalize a query into the canonical search form
pub fn normalize(input: &str) -> String {
    let mut text = input.to_string();
    for (from, to) in SUBSTITUTIONS {
        text = text.replacen(from, to, 1);
    }

    text.to_uppercase().chars().map(to_half_width).map(to_katakana).collect()
}

/// Normalization as applied to search input: two passes of [`normalize`]
///
/// The second pass can only differ from the first through steps 3 and 4, e.g.
/// `"ーー"` needs both passes to become `"ｰｰ"`.
pub fn search_key(raw: &str) -> String {
    normalize(&normalize(raw))
}

fn to_half_width(c: char) -> char {
    match c {
        'Ａ'..='Ｚ' | '０'..='９' => char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}

fn to_katakana(c: char) -> char {
    match c {
        '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c),
        _ => c,
    }
}
