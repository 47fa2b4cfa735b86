//! Ranking quantized colors as theme seeds
//!
//! A good seed is both common in the image and colorful. Colors whose hue
//! neighbourhood covers a meaningful share of the image score on proportion,
//! chroma adds or subtracts around a target of 48, and the final pick is
//! spread around the hue wheel so the seeds are not near-duplicates.

use std::collections::BTreeMap;

use crate::color::{Argb, Hct};
use crate::math::{difference_degrees, sanitize_degrees_i32};

const TARGET_CHROMA: f64 = 48.0;
const WEIGHT_PROPORTION: f64 = 0.7;
const WEIGHT_CHROMA_ABOVE: f64 = 0.3;
const WEIGHT_CHROMA_BELOW: f64 = 0.1;
const CUTOFF_CHROMA: f64 = 5.0;
const CUTOFF_EXCITED_PROPORTION: f64 = 0.01;

/// Google Blue, used when nothing in the input qualifies.
pub const DEFAULT_FALLBACK: Argb = Argb(0xFF4285F4);

/// Parameters for [`score`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOptions {
    /// How many seeds to return at most.
    pub desired: usize,
    /// Returned alone when no color survives.
    pub fallback_color: Argb,
    /// Drop colors with chroma below 5 or a hue share of 1% or less.
    pub filter: bool,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            desired: 4,
            fallback_color: DEFAULT_FALLBACK,
            filter: true,
        }
    }
}

struct ScoredHct {
    hct: Hct,
    score: f64,
}

/// Picks up to `options.desired` seed colors from a quantized population,
/// best first. Never returns an empty list.
///
/// ```
/// use std::collections::BTreeMap;
/// use material_color::{score, Argb, ScoreOptions};
///
/// let colors = BTreeMap::from([(Argb(0xFF000000), 1), (Argb(0xFF0000FF), 1)]);
/// assert_eq!(score(&colors, &ScoreOptions::default()), vec![Argb(0xFF0000FF)]);
/// ```
pub fn score(colors_to_population: &BTreeMap<Argb, u32>, options: &ScoreOptions) -> Vec<Argb> {
    let mut colors_hct = Vec::with_capacity(colors_to_population.len());
    let mut hue_population = [0u64; 360];
    let mut population_sum = 0u64;
    for (&argb, &population) in colors_to_population {
        let hct = Hct::from_argb(argb);
        let hue = (hct.hue().floor() as usize).min(359);
        hue_population[hue] += population as u64;
        population_sum += population as u64;
        colors_hct.push(hct);
    }
    if population_sum == 0 {
        return vec![options.fallback_color];
    }

    // Each hue lends its share to a 30 degree window around it.
    let mut hue_excited_proportions = [0.0; 360];
    for (hue, &population) in hue_population.iter().enumerate() {
        let proportion = population as f64 / population_sum as f64;
        let hue = hue as i32;
        for neighbor in (hue - 14)..(hue + 16) {
            hue_excited_proportions[sanitize_degrees_i32(neighbor) as usize] += proportion;
        }
    }

    let mut scored: Vec<ScoredHct> = colors_hct
        .into_iter()
        .filter_map(|hct| {
            let hue = sanitize_degrees_i32(hct.hue().round() as i32) as usize;
            let proportion = hue_excited_proportions[hue];
            if options.filter
                && (hct.chroma() < CUTOFF_CHROMA || proportion <= CUTOFF_EXCITED_PROPORTION)
            {
                return None;
            }
            let proportion_score = proportion * 100.0 * WEIGHT_PROPORTION;
            let chroma_weight = if hct.chroma() < TARGET_CHROMA {
                WEIGHT_CHROMA_BELOW
            } else {
                WEIGHT_CHROMA_ABOVE
            };
            let chroma_score = (hct.chroma() - TARGET_CHROMA) * chroma_weight;
            Some(ScoredHct {
                hct,
                score: proportion_score + chroma_score,
            })
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    // Demand the widest hue spacing that still yields enough colors.
    let mut chosen: Vec<Hct> = Vec::new();
    for min_difference in (15..=90).rev() {
        let min_difference = min_difference as f64;
        chosen.clear();
        for entry in &scored {
            let duplicate_hue = chosen
                .iter()
                .any(|c| difference_degrees(entry.hct.hue(), c.hue()) < min_difference);
            if !duplicate_hue {
                chosen.push(entry.hct);
            }
            if chosen.len() >= options.desired {
                break;
            }
        }
        if chosen.len() >= options.desired {
            break;
        }
    }

    if chosen.is_empty() {
        return vec![options.fallback_color];
    }
    chosen.iter().map(Hct::to_argb).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn colors(entries: &[(u32, u32)]) -> BTreeMap<Argb, u32> {
        entries.iter().map(|&(argb, count)| (Argb(argb), count)).collect()
    }

    #[test]
    fn test_prioritizes_chroma() {
        let input = colors(&[(0xFF000000, 1), (0xFFFFFFFF, 1), (0xFF0000FF, 1)]);
        assert_eq!(score(&input, &ScoreOptions::default()), vec![Argb(0xFF0000FF)]);
    }

    #[test]
    fn test_primaries_in_chroma_order() {
        let input = colors(&[(0xFFFF0000, 1), (0xFF00FF00, 1), (0xFF0000FF, 1)]);
        assert_eq!(
            score(&input, &ScoreOptions::default()),
            vec![Argb(0xFFFF0000), Argb(0xFF00FF00), Argb(0xFF0000FF)]
        );
    }

    #[test]
    fn test_black_only_falls_back() {
        let input = colors(&[(0xFF000000, 10)]);
        assert_eq!(score(&input, &ScoreOptions::default()), vec![DEFAULT_FALLBACK]);
    }

    #[test]
    fn test_unfiltered_keeps_grays() {
        let options = ScoreOptions {
            filter: false,
            ..ScoreOptions::default()
        };
        let input = colors(&[(0xFF000000, 10)]);
        assert_eq!(score(&input, &options), vec![Argb(0xFF000000)]);
    }

    #[test]
    fn test_empty_input_falls_back() {
        let options = ScoreOptions {
            fallback_color: Argb(0xFF112233),
            ..ScoreOptions::default()
        };
        assert_eq!(score(&BTreeMap::new(), &options), vec![Argb(0xFF112233)]);
    }

    #[test]
    fn test_respects_desired_count() {
        let input = colors(&[(0xFFFF0000, 1), (0xFF00FF00, 1), (0xFF0000FF, 1)]);
        let options = ScoreOptions {
            desired: 1,
            ..ScoreOptions::default()
        };
        assert_eq!(score(&input, &options), vec![Argb(0xFFFF0000)]);
    }

    #[test]
    fn test_close_hues_are_deduplicated() {
        // Two reds a few degrees apart; only the more chromatic one survives
        // as long as wider spacing can still be satisfied.
        let input = colors(&[(0xFFFF0000, 1), (0xFFF00505, 1), (0xFF0000FF, 1)]);
        let options = ScoreOptions {
            desired: 2,
            ..ScoreOptions::default()
        };
        assert_eq!(score(&input, &options), vec![Argb(0xFFFF0000), Argb(0xFF0000FF)]);
    }
}
