//! Compass headings and the direction set they belong to.
//!
//! A [`DirectionSet`] is an immutable lookup table built once at startup.
//! Headings are stored densely by [`HeadingId`], and the id order defines
//! rotation adjacency: rotating right moves to `id + 1`, rotating left to
//! `id - 1`, both modulo [`DirectionSet::count`].

use std::collections::HashSet;

use crate::{CoreError, CoreResult, HeadingId, Rotation};

// ── Heading ───────────────────────────────────────────────────────────────────

/// One named unit direction with its grid displacement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    pub id:   HeadingId,
    pub name: String,
    pub dx:   i32,
    pub dy:   i32,
}

impl Heading {
    pub fn new(id: u8, name: impl Into<String>, dx: i32, dy: i32) -> Self {
        Self { id: HeadingId(id), name: name.into(), dx, dy }
    }
}

// ── DirectionSet ──────────────────────────────────────────────────────────────

/// Ordered, fixed table of headings.
///
/// Invariants enforced by [`DirectionSet::new`]:
/// - at least one heading;
/// - ids are exactly `0..count` (each present once);
/// - names are unique.
///
/// Because of the first two, [`rotate`](Self::rotate) always yields an id
/// that [`name_of`](Self::name_of) can resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Heading>", into = "Vec<Heading>"))]
pub struct DirectionSet {
    /// Indexed by `HeadingId`.
    headings: Vec<Heading>,
}

impl DirectionSet {
    /// Build a set from headings given in any order.
    pub fn new(headings: impl IntoIterator<Item = Heading>) -> CoreResult<Self> {
        let mut headings: Vec<Heading> = headings.into_iter().collect();
        if headings.is_empty() {
            return Err(CoreError::InvalidDirectionSet("no headings".into()));
        }
        headings.sort_by_key(|h| h.id);

        for (i, h) in headings.iter().enumerate() {
            if h.id.index() != i {
                return Err(CoreError::InvalidDirectionSet(format!(
                    "heading ids must be dense from 0; found {} at position {i}",
                    h.id.0
                )));
            }
        }

        let mut seen = HashSet::with_capacity(headings.len());
        for h in &headings {
            if !seen.insert(h.name.as_str()) {
                return Err(CoreError::InvalidDirectionSet(format!(
                    "duplicate heading name {:?}",
                    h.name
                )));
            }
        }

        Ok(Self { headings })
    }

    /// The reference four-point compass: N=(0,1), E=(1,0), S=(0,-1), W=(-1,0).
    pub fn compass() -> Self {
        Self {
            headings: vec![
                Heading::new(0, "N", 0, 1),
                Heading::new(1, "E", 1, 0),
                Heading::new(2, "S", 0, -1),
                Heading::new(3, "W", -1, 0),
            ],
        }
    }

    /// Number of headings.  This is the rotation modulus.
    #[inline]
    pub fn count(&self) -> usize {
        self.headings.len()
    }

    pub fn get(&self, id: HeadingId) -> Option<&Heading> {
        self.headings.get(id.index())
    }

    /// Name of heading `id`.
    pub fn name_of(&self, id: HeadingId) -> CoreResult<&str> {
        self.get(id)
            .map(|h| h.name.as_str())
            .ok_or_else(|| CoreError::UnknownDirection(id.0.to_string()))
    }

    /// Id of the heading called `name`.  Exact match; linear scan.
    pub fn index_of(&self, name: &str) -> CoreResult<HeadingId> {
        self.headings
            .iter()
            .find(|h| h.name == name)
            .map(|h| h.id)
            .ok_or_else(|| CoreError::UnknownDirection(format!("{name:?}")))
    }

    /// Iterate over every heading in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Heading> + '_ {
        self.headings.iter()
    }

    /// Heading reached from `id` after one quarter-step `rotation`.
    ///
    /// `count` is added before the modulus so a left turn from id 0 wraps to
    /// `count - 1` instead of underflowing.
    #[inline]
    pub fn rotate(&self, id: HeadingId, rotation: Rotation) -> HeadingId {
        let count = self.count();
        let next = match rotation {
            Rotation::Left  => (id.index() + count - 1) % count,
            Rotation::Right => (id.index() + 1) % count,
        };
        // `new` caps the set at `u8` ids, so this never truncates.
        HeadingId(next as u8)
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::compass()
    }
}

impl TryFrom<Vec<Heading>> for DirectionSet {
    type Error = CoreError;
    fn try_from(headings: Vec<Heading>) -> CoreResult<Self> {
        Self::new(headings)
    }
}

impl From<DirectionSet> for Vec<Heading> {
    fn from(set: DirectionSet) -> Vec<Heading> {
        set.headings
    }
}
