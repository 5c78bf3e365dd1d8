use core::fmt::Debug;
use std::fmt::Display;

use crate::{MondoError, MondoResult, MONDO_PREFIX};

/// The unique identifier of a [`crate::MondoTerm`]
///
/// MONDO identifiers are zero-padded 7-digit integers. The ID only keeps
/// the numerical part, so comparing and hashing is cheap and the ordering
/// matches the lexical ordering of the padded IDs.
///
/// # Examples
///
/// ```
/// use mondo::TermId;
///
/// let a = TermId::try_from("MONDO:0005071").unwrap();
/// let b = TermId::try_from("MONDO_0005071").unwrap();
/// let c = TermId::try_from("http://purl.obolibrary.org/obo/MONDO_0005071").unwrap();
///
/// assert_eq!(a, b);
/// assert_eq!(a, c);
/// assert_eq!(a.to_string(), "MONDO:0005071");
/// assert_eq!(a.as_u32(), 5071);
/// ```
#[derive(Copy, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TermId {
    inner: u32,
}

impl TermId {
    /// Returns the integer representation of the ID
    pub fn as_u32(&self) -> u32 {
        self.inner
    }

    /// Parses the ID from a full MONDO IRI
    ///
    /// Returns `None` if the IRI is not part of the MONDO namespace
    /// or if the local part is not a number.
    pub fn from_iri(iri: &str) -> Option<Self> {
        iri.strip_prefix(MONDO_PREFIX)
            .and_then(|local| local.parse::<u32>().ok())
            .map(TermId::from)
    }
}

impl TryFrom<&str> for TermId {
    type Error = MondoError;
    fn try_from(s: &str) -> MondoResult<Self> {
        let local = s
            .strip_prefix(MONDO_PREFIX)
            .or_else(|| s.strip_prefix("MONDO:"))
            .or_else(|| s.strip_prefix("MONDO_"))
            .ok_or_else(|| MondoError::InvalidTermId(s.to_string()))?;
        Ok(TermId {
            inner: local.parse::<u32>()?,
        })
    }
}

impl From<u32> for TermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Debug for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TermId({self})")
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MONDO:{:07}", self.inner)
    }
}

impl PartialEq<str> for TermId {
    fn eq(&self, other: &str) -> bool {
        TermId::try_from(other).is_ok_and(|id| id == *self)
    }
}
