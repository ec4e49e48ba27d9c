//! Cardinal numeral words
//!
//! Turns a single word into its numeric value ("two" -> 2, "twenty-one" ->
//! 21, "14" -> 14). Most words are not numerals; [`Error::NotANumeral`] is
//! the expected outcome there, not a failure.

use crate::error::{Error, Result};

fn unit(word: &str) -> Option<i64> {
    let value = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(value)
}

fn tens(word: &str) -> Option<i64> {
    let value = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

fn scale(word: &str) -> Option<i64> {
    let value = match word {
        "hundred" => 100,
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        _ => return None,
    };
    Some(value)
}

/// Parse one word as a cardinal number.
pub fn word_to_number(word: &str) -> Result<i64> {
    let normalized = word.trim().to_lowercase();

    if !normalized.is_empty() && normalized.bytes().all(|b| b.is_ascii_digit()) {
        return normalized
            .parse()
            .map_err(|_| Error::NotANumeral(word.to_string()));
    }

    if let Some(v) = unit(&normalized).or_else(|| tens(&normalized)).or_else(|| scale(&normalized)) {
        return Ok(v);
    }

    // Hyphenated compounds: "twenty-two".
    if let Some((left, right)) = normalized.split_once('-') {
        if let (Some(t), Some(u)) = (tens(left), unit(right)) {
            if (1..=9).contains(&u) {
                return Ok(t + u);
            }
        }
    }

    Err(Error::NotANumeral(word.to_string()))
}
