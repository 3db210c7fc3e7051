//! Deterministic section enrichment for the infinite-scroll page.
//!
//! The catalog is looped (a clone of the last section prepended, a clone of
//! the first appended) so the client can wrap past either edge, and each
//! looped entry gets a color, a shape, and an id-eligibility flag derived
//! purely from `(section id, position)`. Repeated requests with the same
//! catalog always produce identical output; there is no randomness and no
//! shared state.
//!
//! The seed hash is a plain sum of character codes. It is a cosmetic layout
//! aid, not an identity or security mechanism.

use serde::Serialize;

use crate::sections::{Section, SectionRepository};

/// Brand palette with opacity, indexed by the seed hash.
pub const COLORS: [&str; 4] = [
    "rgba(223, 0, 36, 0.4)",   // red
    "rgba(243, 195, 0, 0.4)",  // yellow
    "rgba(0, 171, 159, 0.4)",  // teal
    "rgba(46, 109, 180, 0.4)", // blue
];

/// Solid variants of the palette, used for text accents.
pub const SOLID_COLORS: [&str; 4] = [
    "rgb(223, 0, 36)",
    "rgb(243, 195, 0)",
    "rgb(0, 171, 159)",
    "rgb(46, 109, 180)",
];

/// Shape tokens rotated by looped position.
pub const SHAPES: [&str; 4] = ["circle", "square", "triangle", "x-shape"];

/// A section plus its per-request display attributes.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedSection {
    #[serde(flatten)]
    pub section: Section,
    pub color: String,
    pub shape: String,
    /// 0-based position in the looped sequence.
    pub index: usize,
    /// True only for original (non-cloned) entries, so the edge clones
    /// never collide with them on DOM identifiers.
    pub use_id: bool,
}

fn seed_hash(seed: &str) -> u64 {
    seed.chars().map(|c| c as u64).sum()
}

/// Deterministic palette index for `(seed, position)`, always in `[0, 4)`.
///
/// Unsigned arithmetic makes the absolute value in the original formula a
/// no-op, and u64 cannot overflow for any realistic seed.
pub fn color_index(seed: &str, position: usize) -> usize {
    ((seed_hash(seed) * 13 + position as u64 * 17) % COLORS.len() as u64) as usize
}

/// Palette entry for `(seed, position)`; `solid` selects the text variant.
pub fn deterministic_color(seed: &str, position: usize, solid: bool) -> &'static str {
    let palette = if solid { &SOLID_COLORS } else { &COLORS };
    palette[color_index(seed, position)]
}

/// Shape token by pure rotation: every 4th position repeats.
pub fn shape_for_index(position: usize) -> &'static str {
    SHAPES[position % SHAPES.len()]
}

/// Whether the looped entry at `position` is an original section
/// (positions `1..=original_count`) rather than an edge clone.
pub fn use_id(position: usize, original_count: usize) -> bool {
    position > 0 && position <= original_count
}

/// Loop the list for seamless wraparound: last clone in front, first clone
/// behind. A single-section list yields that section three times.
///
/// Panics on an empty slice; [`SectionRepository`] rejects that at startup.
pub fn looped(sections: &[Section]) -> Vec<Section> {
    let mut out = Vec::with_capacity(sections.len() + 2);
    out.push(sections[sections.len() - 1].clone());
    out.extend(sections.iter().cloned());
    out.push(sections[0].clone());
    out
}

/// Enrich the whole catalog for one page render.
///
/// Each looped position is seeded with `"{id}-{position}"`, so an edge
/// clone shares its section's identity but not its position, and may or
/// may not land on the original's color.
pub fn enrich_sections(repo: &SectionRepository) -> Vec<EnrichedSection> {
    let original_count = repo.len();
    looped(repo.all())
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            let seed = format!("{}-{}", section.id, index);
            EnrichedSection {
                color: deterministic_color(&seed, index, false).to_string(),
                shape: shape_for_index(index).to_string(),
                index,
                use_id: use_id(index, original_count),
                section,
            }
        })
        .collect()
}
