use std::sync::LazyLock;

use inflections::Inflect;
use regex::Regex;
use strum::Display;

// Word boundary markers used by the snake variants. Each pair is joined with an underscore.
static LOWER_UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").unwrap());
static ACRONYM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\p{Lu})(\p{Lu}\p{Ll})").unwrap());
static LETTER_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\p{L})(\p{N})").unwrap());
static DIGIT_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\p{N})(\p{Lu}\p{Ll})").unwrap());
static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_]+").unwrap());

static WORD_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// An identifier with at least one uppercase letter strictly inside it, built only from letters and digits.
static CAMEL_VARIANT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N}]*\p{Lu}[\p{L}\p{N}]+$").unwrap());

/// The naming convention an identifier is written in.
///
/// | Case          | Example      |
/// |---------------|--------------|
/// | `Camel`       | `camelCase`  |
/// | `Pascal`      | `PascalCase` |
/// | `SnakeVariant`| `snake_case`, `SNAKE_CASE` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum Case {
  #[strum(to_string = "camelCase")]
  Camel,
  #[strum(to_string = "PascalCase")]
  Pascal,
  #[strum(to_string = "snake_variant")]
  SnakeVariant,
  #[strum(to_string = "none")]
  None,
}

impl Case {
  pub(crate) fn detect(input: &str) -> Self {
    if is_snake_variant(input) {
      Self::SnakeVariant
    } else if is_camel_case(input) {
      Self::Camel
    } else if is_pascal_case(input) {
      Self::Pascal
    } else {
      Self::None
    }
  }
}

pub(crate) fn is_snake_variant(input: &str) -> bool {
  input.contains('_')
}

fn is_camel_variant(input: &str) -> bool {
  CAMEL_VARIANT_RE.is_match(input)
}

pub(crate) fn is_camel_case(input: &str) -> bool {
  is_camel_variant(input) && input.chars().next().is_some_and(char::is_lowercase)
}

pub(crate) fn is_pascal_case(input: &str) -> bool {
  is_camel_variant(input) && input.chars().next().is_some_and(char::is_uppercase)
}

/// Converts any identifier into `PascalCase`.
///
/// Identifiers without separators keep their inner capitalization and only get the
/// first letter raised (`myUnCamelledName` -> `MyUnCamelledName`). Identifiers with
/// separators (`_`, `-`, whitespace, punctuation) are split into words, and every word
/// is lowered and capitalized (`SNAKE_CASE` -> `SnakeCase`).
pub(crate) fn to_pascal_case(input: &str) -> String {
  if has_word_separators(input) {
    words(input).map(|word| word.to_lowercase().to_pascal_case()).collect()
  } else {
    upper_first(input)
  }
}

/// Converts any identifier into `camelCase`. Mirrors [`to_pascal_case`] with a lowered first word.
pub(crate) fn to_camel_case(input: &str) -> String {
  if has_word_separators(input) {
    let mut words = words(input);
    let Some(first) = words.next() else {
      return String::new();
    };
    std::iter::once(first.to_lowercase().to_camel_case())
      .chain(words.map(|word| word.to_lowercase().to_pascal_case()))
      .collect()
  } else {
    lower_first(input)
  }
}

/// Converts any identifier into `SCREAMING_SNAKE_CASE`.
///
/// Word boundaries are inserted between a lowercase letter and an uppercase letter, at the end of an
/// acronym, and between letters and digits, so `randValue1` becomes `RAND_VALUE_1`. Existing underscores,
/// including leading ones, are preserved.
pub(crate) fn to_screaming_snake_case(input: &str) -> String {
  to_snake_case(input).to_uppercase()
}

pub(crate) fn to_snake_case(input: &str) -> String {
  mark_word_boundaries(input).to_lowercase()
}

fn mark_word_boundaries(input: &str) -> String {
  let marked = LOWER_UPPER_RE.replace_all(input, "${1}_${2}");
  let marked = ACRONYM_RE.replace_all(&marked, "${1}_${2}");
  let marked = LETTER_DIGIT_RE.replace_all(&marked, "${1}_${2}");
  let marked = DIGIT_WORD_RE.replace_all(&marked, "${1}_${2}");
  INVALID_CHARS_RE.replace_all(&marked, "_").into_owned()
}

fn has_word_separators(input: &str) -> bool {
  input.chars().any(|c| !c.is_alphanumeric())
}

fn words(input: &str) -> impl Iterator<Item = &str> {
  WORD_SEPARATOR_RE.split(input).filter(|word| !word.is_empty())
}

fn upper_first(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().chain(chars).collect(),
  }
}

fn lower_first(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_lowercase().chain(chars).collect(),
  }
}
