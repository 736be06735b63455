//! Best-effort parser turning free-text ingredient lines into structured
//! [`Ingredient`]s.
//!
//! A line is lowercased, stripped of parenthetical asides and split on
//! whitespace. Up to two leading tokens are read as a quantity, the next
//! token is read as a unit if it is a known one, and the rest is the
//! ingredient name. Lines without a leading quantity are kept verbatim with
//! no count.

use std::borrow::Cow;

use fancy_regex::Regex;
use once_cell::sync::Lazy;
use phf::phf_map;

use crate::domain::entities::recipe::{Ingredient, ParseOutcome};

static UNIT_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "tablespoons" => "tbsp",
    "tablespoon" => "tbsp",
    "tbsps" => "tbsp",
    "tbs" => "tbsp",
    "teaspoons" => "tsp",
    "teaspoon" => "tsp",
    "tsps" => "tsp",
    "ounces" => "oz",
    "ounce" => "oz",
    "cups" => "cup",
    "pounds" => "pound",
    "lbs" => "pound",
    "lb" => "pound",
    "kilograms" => "kg",
    "kilogram" => "kg",
    "kgs" => "kg",
    "grams" => "g",
    "gram" => "g",
    "milliliters" => "ml",
    "millilitres" => "ml",
    "milliliter" => "ml",
    "millilitre" => "ml",
};

/// Units a count may be attached to, in their normalized form
pub const UNITS: [&str; 8] = ["tbsp", "tsp", "oz", "cup", "pound", "kg", "g", "ml"];

static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*").expect("parenthetical pattern is valid"));

/// Parse one raw ingredient line. Never fails: lines without a usable
/// quantity come back as [`ParseOutcome::Fallback`].
pub fn parse_ingredient(line: &str) -> Ingredient {
    let trimmed = line.trim();
    let lowered = trimmed.to_lowercase().replace('\u{2044}', "/");
    let cleaned = strip_parentheticals(&lowered);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let mut count: Option<f64> = None;
    let mut consumed = 0;
    for (index, token) in tokens.iter().take(2).enumerate() {
        // a second quantity token only completes a mixed number, e.g. "2 1/2"
        if index == 1 && !is_fractional(token) {
            break;
        }
        match parse_quantity(token) {
            Some(value) => {
                count = Some(count.unwrap_or(0.0) + value);
                consumed += 1;
            }
            None => break,
        }
    }

    let Some(count) = count else {
        return Ingredient::fallback(trimmed);
    };

    let unit = tokens.get(consumed).and_then(|token| normalize_unit(token));
    if unit.is_some() {
        consumed += 1;
    }

    Ingredient {
        count: Some(count),
        unit: unit.unwrap_or_default().to_string(),
        ingredient: tokens[consumed..].join(" "),
        outcome: ParseOutcome::Parsed,
    }
}

fn strip_parentheticals(line: &str) -> Cow<'_, str> {
    PARENTHETICAL.replace_all(line, " ")
}

/// Map a token onto one of [`UNITS`], following the alias table
pub fn normalize_unit(token: &str) -> Option<&'static str> {
    let token = token.trim_end_matches(['.', ',']);
    if let Some(unit) = UNIT_ALIASES.get(token) {
        return Some(*unit);
    }
    UNITS.iter().find(|unit| **unit == token).copied()
}

/// Read a quantity token: `3`, `0.5`, `1/2`, `½`, `1½`, `1-1/2` or a range
/// like `2-3`, which yields its lower bound.
pub fn parse_quantity(token: &str) -> Option<f64> {
    if let Some((head, tail)) = token.split_once('-') {
        let head = parse_simple(head)?;
        let tail = parse_simple(tail)?;
        return Some(if is_fractional(token) { head + tail } else { head });
    }

    parse_simple(token)
}

fn parse_simple(token: &str) -> Option<f64> {
    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator = parse_number(numerator)?;
        let denominator = parse_number(denominator)?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    let mut chars = token.chars();
    if let Some(fraction) = chars.next_back().and_then(vulgar_fraction) {
        let whole = chars.as_str();
        if whole.is_empty() {
            return Some(fraction);
        }
        return parse_number(whole).map(|whole| whole + fraction);
    }

    parse_number(token)
}

fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    token.parse().ok()
}

fn is_fractional(token: &str) -> bool {
    token.contains('/') || token.chars().any(|c| vulgar_fraction(c).is_some())
}

fn vulgar_fraction(c: char) -> Option<f64> {
    let value = match c {
        '½' => 1.0 / 2.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 1.0 / 4.0,
        '¾' => 3.0 / 4.0,
        '⅕' => 1.0 / 5.0,
        '⅖' => 2.0 / 5.0,
        '⅗' => 3.0 / 5.0,
        '⅘' => 4.0 / 5.0,
        '⅙' => 1.0 / 6.0,
        '⅚' => 5.0 / 6.0,
        '⅛' => 1.0 / 8.0,
        '⅜' => 3.0 / 8.0,
        '⅝' => 5.0 / 8.0,
        '⅞' => 7.0 / 8.0,
        _ => return None,
    };
    Some(value)
}
