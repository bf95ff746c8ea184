//! Suspect index: which suspect does a clue point at?
//!
//! A fixed-size hash table with separate chaining. The hash is the plain
//! byte sum of the clue modulo the bucket count, so collisions are common
//! and every bucket holds a singly linked chain with the newest entry first.

use crate::GameError;
use serde::{Deserialize, Serialize};

/// Bucket count used when a case file does not ask for another
pub const DEFAULT_BUCKETS: usize = 10;

/// One clue → suspect pairing, as written in a case file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueAssociation {
    pub clue: String,
    pub suspect: String,
}

impl ClueAssociation {
    pub fn new(clue: &str, suspect: &str) -> Self {
        Self {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        }
    }
}

#[derive(Debug)]
struct IndexEntry {
    clue: String,
    suspect: String,
    next: Option<Box<IndexEntry>>,
}

#[derive(Debug)]
pub struct SuspectIndex {
    buckets: Vec<Option<Box<IndexEntry>>>,
    len: usize,
}

impl SuspectIndex {
    pub fn new(bucket_count: usize) -> Result<Self, GameError> {
        if bucket_count == 0 {
            return Err(GameError::ZeroBuckets);
        }
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || None);
        Ok(Self { buckets, len: 0 })
    }

    /// Build an index from a list of pairings, inserted in list order.
    pub fn from_associations<'a, I>(bucket_count: usize, associations: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = &'a ClueAssociation>,
    {
        let mut index = Self::new(bucket_count)?;
        for association in associations {
            index.insert(&association.clue, &association.suspect);
        }
        tracing::debug!(entries = index.len, buckets = bucket_count, "suspect index built");
        Ok(index)
    }

    /// Sum of the key's bytes, modulo the bucket count
    pub fn bucket_for(&self, key: &str) -> usize {
        let sum = key.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
        sum % self.buckets.len()
    }

    /// Record that `clue` implicates `suspect`. The new entry shadows any
    /// older entry for the same clue.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = self.bucket_for(clue);
        let next = self.buckets[bucket].take();
        self.buckets[bucket] = Some(Box::new(IndexEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next,
        }));
        self.len += 1;
    }

    /// The suspect implicated by `clue`, or `None` if the clue is not indexed
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let mut entry = self.buckets[self.bucket_for(clue)].as_deref();
        while let Some(current) = entry {
            if current.clue == clue {
                return Some(&current.suspect);
            }
            entry = current.next.as_deref();
        }
        None
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries chained in `bucket`
    pub fn chain_len(&self, bucket: usize) -> usize {
        let mut count = 0;
        let mut entry = self.buckets.get(bucket).and_then(|head| head.as_deref());
        while let Some(current) = entry {
            count += 1;
            entry = current.next.as_deref();
        }
        count
    }

    /// Every suspect named by at least one entry, sorted and deduplicated
    pub fn suspects(&self) -> Vec<String> {
        let mut names = Vec::new();
        for head in &self.buckets {
            let mut entry = head.as_deref();
            while let Some(current) = entry {
                names.push(current.suspect.clone());
                entry = current.next.as_deref();
            }
        }
        names.sort();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for SuspectIndex {
    fn drop(&mut self) {
        for head in &mut self.buckets {
            let mut entry = head.take();
            while let Some(mut current) = entry {
                entry = current.next.take();
            }
        }
    }
}
