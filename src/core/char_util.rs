use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharType {
    USELESS,
    ARABIC,
    LETTER,
}

// identify CharType Of char
pub fn char_type_of(input: &char) -> CharType {
    // any decimal digit (Nd), not only ascii
    if (*input).general_category() == GeneralCategory::DecimalNumber {
        CharType::ARABIC
    } else if input.is_alphabetic() {
        CharType::LETTER
    } else {
        CharType::USELESS
    }
}

// full char -> half char && lowercase
pub fn regularize(input: char) -> char {
    let mut input_code = input as u32;
    if input_code == 12288 {
        input_code -= 12256; // full width space
    } else if (65281..=65374).contains(&input_code) {
        input_code -= 65248; // full width forms
    }
    match char::from_u32(input_code) {
        Some(c) => c.to_lowercase().next().unwrap_or(c),
        None => input,
    }
}

pub fn regularize_str(input: &str) -> String {
    input.chars().map(regularize).collect()
}
