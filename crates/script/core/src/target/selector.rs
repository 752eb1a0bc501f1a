//! Destination string grammar.
//!
//! | Form | Selector |
//! |---|---|
//! | `[me]` | [`Selector::Me`] |
//! | `[source]` | [`Selector::Source`] |
//! | `&Flavor` | [`Selector::Linked`] |
//! | `*Arch` | [`Selector::Archetype`], direct children |
//! | `@Arch` | [`Selector::Archetype`], all descendants |
//! | `5.0<Arch`, `5.0>*Arch` | [`Selector::Radius`] |
//! | anything else | [`Selector::Named`] |
//!
//! Forms are checked in that order. Parsing never fails: strings that match no
//! other form become `Named`, which resolves to nothing if no such object exists.

use std::fmt;

use crate::env::Descent;
use crate::text::parse_radius;

const ME: &str = "[me]";
const SOURCE: &str = "[source]";

/// Which side of the radius a candidate must fall on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Comparison {
    /// Strictly inside the radius (`<`).
    #[strum(to_string = "<")]
    LessThan,
    /// Strictly outside the radius (`>`).
    #[strum(to_string = ">")]
    GreaterThan,
}

impl Comparison {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::LessThan),
            '>' => Some(Self::GreaterThan),
            _ => None,
        }
    }

    /// Whether `distance` passes. A distance exactly on the radius never does.
    pub fn admits(self, distance: f32, radius: f32) -> bool {
        match self {
            Self::LessThan => distance < radius,
            Self::GreaterThan => distance > radius,
        }
    }
}

/// Concrete descendants of a named archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchetypeQuery<'a> {
    pub name: &'a str,
    pub descent: Descent,
}

impl<'a> ArchetypeQuery<'a> {
    pub const fn new(name: &'a str, descent: Descent) -> Self {
        Self { name, descent }
    }

    /// Reads an optional `*`/`@` prefix; without one, `default` applies.
    fn with_prefix(spec: &'a str, default: Descent) -> Self {
        match spec.as_bytes().first() {
            Some(b'*') => Self::new(&spec[1..], Descent::Children),
            Some(b'@') => Self::new(&spec[1..], Descent::Full),
            _ => Self::new(spec, default),
        }
    }
}

impl fmt::Display for ArchetypeQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.descent {
            Descent::Children => '*',
            Descent::Full => '@',
        };
        write!(f, "{}{}", prefix, self.name)
    }
}

/// Parsed destination string. Borrows from the string it was parsed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selector<'a> {
    /// The object handling the event.
    Me,
    /// The object that caused the event.
    Source,
    /// A single object, by name or stringified id.
    Named(&'a str),
    /// Destinations of the current object's links of this flavor.
    Linked(&'a str),
    /// Concrete descendants of an archetype.
    Archetype(ArchetypeQuery<'a>),
    /// Archetype members filtered by distance from the current object.
    Radius {
        query: ArchetypeQuery<'a>,
        radius: f32,
        comparison: Comparison,
    },
}

impl<'a> Selector<'a> {
    /// Parses a destination string. See the module docs for the grammar.
    pub fn parse(dest: &'a str) -> Self {
        if dest.eq_ignore_ascii_case(ME) {
            return Self::Me;
        }
        if dest.eq_ignore_ascii_case(SOURCE) {
            return Self::Source;
        }

        match dest.as_bytes().first() {
            Some(b'&') if dest.len() > 1 => return Self::Linked(&dest[1..]),
            Some(b'*') => return Self::Archetype(ArchetypeQuery::new(&dest[1..], Descent::Children)),
            Some(b'@') => return Self::Archetype(ArchetypeQuery::new(&dest[1..], Descent::Full)),
            _ => {}
        }

        Self::parse_radius(dest).unwrap_or(Self::Named(dest))
    }

    /// `<number><'<'|'>'><archetype-spec>`, split at the first comparator.
    /// Radius searches default to all descendants, unlike bare archetype names.
    fn parse_radius(dest: &'a str) -> Option<Self> {
        let (split, comparator) = dest.char_indices().find(|(_, c)| matches!(c, '<' | '>'))?;
        let comparison = Comparison::from_char(comparator)?;
        let radius = parse_radius(&dest[..split])?;
        let spec = &dest[split + comparator.len_utf8()..];

        Some(Self::Radius {
            query: ArchetypeQuery::with_prefix(spec, Descent::Full),
            radius,
            comparison,
        })
    }

    /// True for selectors whose results depend on the archetype hierarchy.
    pub fn is_archetype_search(&self) -> bool {
        matches!(self, Self::Archetype(_) | Self::Radius { .. })
    }
}

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Me => f.write_str(ME),
            Self::Source => f.write_str(SOURCE),
            Self::Named(name) => f.write_str(name),
            Self::Linked(flavor) => write!(f, "&{}", flavor),
            Self::Archetype(query) => write!(f, "{}", query),
            Self::Radius {
                query,
                radius,
                comparison,
            } => write!(f, "{}{}{}", radius, comparison, query),
        }
    }
}
