// src/text/frequency.rs
//
// Glyph frequency table: how often each glyph's character shows up in a text,
// with upper and lower case sharing one count.

use log::debug;
use nannou::text::{Font, GlyphId};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::config::Normalization;
use crate::error::{GlyphTintError, Result};

/// Maps characters to the glyph ids a renderer will report for them.
pub trait GlyphLookup {
    type Id: Copy + Eq + Hash + Debug;

    fn glyph_id(&self, ch: char) -> Self::Id;
}

impl GlyphLookup for Font {
    type Id = GlyphId;

    fn glyph_id(&self, ch: char) -> GlyphId {
        self.glyph(ch).id()
    }
}

/// First char of the lowercase form of `ch`.
fn fold_case(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

#[derive(Debug, Clone)]
pub struct GlyphFrequencies<K> {
    freqs: HashMap<K, f32>,
}

impl<K: Copy + Eq + Hash + Debug> GlyphFrequencies<K> {
    pub fn from_text<L>(text: &str, lookup: &L, normalization: Normalization) -> Result<Self>
    where
        L: GlyphLookup<Id = K>,
    {
        let counts = count_glyphs(text, lookup);

        let norm_count = match normalization {
            Normalization::Max => counts.values().copied().max().unwrap_or(0),
            Normalization::ThirdOfTotal => {
                let total: usize = counts.values().sum();
                (total as f64 * (1.0 / 3.0)) as usize
            }
        };
        if norm_count == 0 {
            return Err(GlyphTintError::EmptyText);
        }

        let freqs: HashMap<K, f32> = counts
            .into_iter()
            .map(|(id, count)| (id, (count as f32 / norm_count as f32).min(1.0)))
            .collect();
        debug!(
            "computed frequencies for {} glyphs (normalized by {})",
            freqs.len(),
            norm_count
        );

        Ok(Self { freqs })
    }

    pub fn get(&self, id: K) -> Result<f32> {
        self.freqs
            .get(&id)
            .copied()
            .ok_or_else(|| GlyphTintError::UnexpectedGlyph(format!("{:?}", id)))
    }

    pub(crate) fn len(&self) -> usize {
        self.freqs.len()
    }
}

fn count_glyphs<L: GlyphLookup>(text: &str, lookup: &L) -> HashMap<L::Id, usize> {
    let mut counts: HashMap<L::Id, usize> = HashMap::with_capacity(64);

    // control codes are skipped
    for ch in text.chars().filter(|ch| *ch >= ' ') {
        *counts.entry(lookup.glyph_id(fold_case(ch))).or_insert(0) += 1;
    }

    // spaces are pinned to 1, uppercase glyphs copy their lowercase count
    for ch in text.chars().filter(|ch| *ch >= ' ') {
        if ch == ' ' {
            counts.insert(lookup.glyph_id(' '), 1);
        }

        let lower = fold_case(ch);
        if lower == ch {
            continue;
        }
        let lower_count = counts
            .get(&lookup.glyph_id(lower))
            .copied()
            .unwrap_or(0);
        counts.insert(lookup.glyph_id(ch), lower_count);
    }

    counts
}
