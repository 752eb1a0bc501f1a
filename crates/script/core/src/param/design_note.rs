//! Design note tokenizer.
//!
//! A design note is the free-text parameter block attached to an object:
//!
//! ```text
//! TWTrapSetSpeed='$spd/10'; TWTrapSetSpeedDest=@TrainTrack
//! TWTrapSetSpeedImmediate=true
//! ```
//!
//! Entries are separated by `;` or line breaks. Values may be wrapped in
//! single or double quotes, which lets them contain separators. Entries
//! without `=` are ignored. Everything is returned as slices of the note.

use std::collections::{BTreeMap, HashMap};

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_till,
    character::complete::{char, one_of, space0},
    combinator::{all_consuming, map, opt},
    error::ErrorKind,
    multi::separated_list0,
    sequence::terminated,
};

use crate::error::{ErrorSeverity, ScriptError};

/// A design note could not be tokenized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DesignNoteError {
    /// A quoted value has no closing quote. `offset` points at the opening one.
    #[error("unterminated quote at byte {offset}")]
    UnterminatedQuote { offset: usize },

    /// The tokenizer stopped before the end of the note.
    #[error("unexpected input at byte {offset}")]
    Unexpected { offset: usize },
}

impl ScriptError for DesignNoteError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnterminatedQuote { .. } => "DESIGN_NOTE_UNTERMINATED_QUOTE",
            Self::Unexpected { .. } => "DESIGN_NOTE_UNEXPECTED",
        }
    }
}

/// Source of raw parameter strings, keyed by parameter name.
pub trait ConfigBlob {
    fn get_raw(&self, name: &str) -> Option<&str>;

    fn contains(&self, name: &str) -> bool {
        self.get_raw(name).is_some()
    }
}

/// Tokenized design note. Keys are matched case-insensitively and the first
/// occurrence of a key wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesignNote<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> DesignNote<'a> {
    /// Tokenizes `text`.
    ///
    /// # Errors
    ///
    /// Returns [`DesignNoteError::UnterminatedQuote`] when a quoted value never
    /// closes.
    pub fn parse(text: &'a str) -> Result<Self, DesignNoteError> {
        let offset = |rest: &str| text.len() - rest.len();
        match all_consuming(entries)(text) {
            Ok((_, entries)) => Ok(Self { entries }),
            Err(nom::Err::Failure(e)) => Err(DesignNoteError::UnterminatedQuote {
                offset: offset(e.input),
            }),
            Err(nom::Err::Error(e)) => Err(DesignNoteError::Unexpected {
                offset: offset(e.input),
            }),
            Err(nom::Err::Incomplete(_)) => Err(DesignNoteError::Unexpected {
                offset: text.len(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigBlob for DesignNote<'_> {
    fn get_raw(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl ConfigBlob for BTreeMap<String, String> {
    fn get_raw(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}

impl ConfigBlob for HashMap<String, String> {
    fn get_raw(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| {
                self.iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}

impl<T: ConfigBlob + ?Sized> ConfigBlob for &T {
    fn get_raw(&self, name: &str) -> Option<&str> {
        (**self).get_raw(name)
    }
}

// ============================================================================
// Grammar
// ============================================================================

fn is_separator(c: char) -> bool {
    matches!(c, ';' | '\r' | '\n')
}

fn entries(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    map(separated_list0(one_of(";\r\n"), entry), |entries| {
        entries.into_iter().flatten().collect()
    })(input)
}

fn entry(input: &str) -> IResult<&str, Option<(&str, &str)>> {
    let (input, key) = take_till(|c| c == '=' || is_separator(c))(input)?;
    let (input, eq) = opt(char('='))(input)?;
    if eq.is_none() {
        return Ok((input, None));
    }

    let (input, value) = value(input)?;
    let key = key.trim();
    Ok((input, (!key.is_empty()).then_some((key, value))))
}

fn value(input: &str) -> IResult<&str, &str> {
    let (input, _) = space0(input)?;
    alt((
        // Anything between a closing quote and the next separator is dropped.
        terminated(alt((quoted('\''), quoted('"'))), take_till(is_separator)),
        map(take_till(is_separator), str::trim_end),
    ))(input)
}

/// Quoted value. A missing closing quote is a hard failure positioned at the
/// opening quote.
fn quoted(quote: char) -> impl FnMut(&str) -> IResult<&str, &str> {
    move |input| {
        let (rest, _) = char(quote)(input)?;
        let closed: IResult<&str, &str> =
            terminated(take_till(move |c| c == quote), char(quote))(rest);
        closed.map_err(|_| nom::Err::Failure(nom::error::Error::new(input, ErrorKind::Char)))
    }
}
