use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::analytics::{bucket_top_n, BucketEntry};

/// Genre name to number of owned games, in the order the API listed them.
///
/// The payload arrives as a JSON object. Keeping the document order (instead
/// of a hash map's arbitrary one) makes the "top N" cut deterministic when two
/// genres have the same count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreDistribution(Vec<(String, u64)>);

impl GenreDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for `genre`. A genre seen again keeps its original position.
    pub fn insert(&mut self, genre: impl Into<String>, count: u64) {
        let genre = genre.into();
        match self.0.iter_mut().find(|(name, _)| *name == genre) {
            Some(entry) => entry.1 = count,
            None => self.0.push((genre, count)),
        }
    }

    pub fn get(&self, genre: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(name, _)| name == genre)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Top `n` genres by count plus an "Others" bucket for the rest.
    pub fn bucketed(&self, n: usize) -> Vec<BucketEntry> {
        bucket_top_n(self.iter(), n)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for GenreDistribution {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for (genre, count) in iter {
            distribution.insert(genre, count);
        }
        distribution
    }
}

impl Serialize for GenreDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (genre, count) in &self.0 {
            map.serialize_entry(genre, count)?;
        }
        map.end()
    }
}

struct GenreDistributionVisitor;

impl<'de> Visitor<'de> for GenreDistributionVisitor {
    type Value = GenreDistribution;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of genre names to non-negative game counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut distribution = GenreDistribution::new();
        while let Some((genre, count)) = access.next_entry::<String, u64>()? {
            distribution.insert(genre, count);
        }
        Ok(distribution)
    }
}

impl<'de> Deserialize<'de> for GenreDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GenreDistributionVisitor)
    }
}
