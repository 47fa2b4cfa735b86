//! Wu's statistical-moments quantizer
//!
//! Builds a 33x33x33 histogram of 5-bit-per-channel colors with weight,
//! first moments and second moment per cell, integrates it so any box's
//! statistics come from eight lookups, then repeatedly cuts the box with the
//! largest variance at the position that best separates its mass.
//!
//! # References
//!
//! Xiaolin Wu, "Efficient Statistical Computations for Optimal Color
//! Quantization", Graphics Gems II, 1991.

use tracing::debug;

use super::map::quantize_map;
use super::{opaque_pixels, Quantizer, QuantizerResult};
use crate::cancel::{check, CancellationToken, Cancelled};
use crate::color::Argb;

const INDEX_BITS: u32 = 5;
/// One slot per 5-bit value plus a zero row for the integrals.
const INDEX_COUNT: usize = 33;
const TOTAL_SIZE: usize = INDEX_COUNT * INDEX_COUNT * INDEX_COUNT;

#[inline]
fn index(r: usize, g: usize, b: usize) -> usize {
    r * INDEX_COUNT * INDEX_COUNT + g * INDEX_COUNT + b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Red,
    Green,
    Blue,
}

/// An axis-aligned box in histogram space, exclusive of its lower corner.
#[derive(Debug, Clone, Copy, Default)]
struct Cube {
    r0: usize,
    r1: usize,
    g0: usize,
    g1: usize,
    b0: usize,
    b1: usize,
    vol: usize,
}

struct MaximizeResult {
    cut_location: Option<usize>,
    maximum: f64,
}

/// Cumulative histogram moments.
struct Moments {
    weights: Vec<f64>,
    moments_r: Vec<f64>,
    moments_g: Vec<f64>,
    moments_b: Vec<f64>,
    moments: Vec<f64>,
}

impl Moments {
    fn from_counts(counts: impl IntoIterator<Item = (Argb, u32)>) -> Self {
        let mut m = Self {
            weights: vec![0.0; TOTAL_SIZE],
            moments_r: vec![0.0; TOTAL_SIZE],
            moments_g: vec![0.0; TOTAL_SIZE],
            moments_b: vec![0.0; TOTAL_SIZE],
            moments: vec![0.0; TOTAL_SIZE],
        };
        let bits_to_remove = 8 - INDEX_BITS;
        for (pixel, count) in counts {
            let (red, green, blue) = (pixel.red(), pixel.green(), pixel.blue());
            let i = index(
                (red >> bits_to_remove) as usize + 1,
                (green >> bits_to_remove) as usize + 1,
                (blue >> bits_to_remove) as usize + 1,
            );
            let count = count as f64;
            let (red, green, blue) = (red as f64, green as f64, blue as f64);
            m.weights[i] += count;
            m.moments_r[i] += red * count;
            m.moments_g[i] += green * count;
            m.moments_b[i] += blue * count;
            m.moments[i] += count * (red * red + green * green + blue * blue);
        }
        m.integrate();
        m
    }

    /// Turns per-cell sums into 3D prefix sums.
    fn integrate(&mut self) {
        for r in 1..INDEX_COUNT {
            let mut area = [0.0; INDEX_COUNT];
            let mut area_r = [0.0; INDEX_COUNT];
            let mut area_g = [0.0; INDEX_COUNT];
            let mut area_b = [0.0; INDEX_COUNT];
            let mut area2 = [0.0; INDEX_COUNT];
            for g in 1..INDEX_COUNT {
                let mut line = 0.0;
                let mut line_r = 0.0;
                let mut line_g = 0.0;
                let mut line_b = 0.0;
                let mut line2 = 0.0;
                for b in 1..INDEX_COUNT {
                    let i = index(r, g, b);
                    line += self.weights[i];
                    line_r += self.moments_r[i];
                    line_g += self.moments_g[i];
                    line_b += self.moments_b[i];
                    line2 += self.moments[i];

                    area[b] += line;
                    area_r[b] += line_r;
                    area_g[b] += line_g;
                    area_b[b] += line_b;
                    area2[b] += line2;

                    let previous = index(r - 1, g, b);
                    self.weights[i] = self.weights[previous] + area[b];
                    self.moments_r[i] = self.moments_r[previous] + area_r[b];
                    self.moments_g[i] = self.moments_g[previous] + area_g[b];
                    self.moments_b[i] = self.moments_b[previous] + area_b[b];
                    self.moments[i] = self.moments[previous] + area2[b];
                }
            }
        }
    }
}

/// Sum of `moment` over the cube.
fn volume(cube: &Cube, moment: &[f64]) -> f64 {
    moment[index(cube.r1, cube.g1, cube.b1)]
        - moment[index(cube.r1, cube.g1, cube.b0)]
        - moment[index(cube.r1, cube.g0, cube.b1)]
        + moment[index(cube.r1, cube.g0, cube.b0)]
        - moment[index(cube.r0, cube.g1, cube.b1)]
        + moment[index(cube.r0, cube.g1, cube.b0)]
        + moment[index(cube.r0, cube.g0, cube.b1)]
        - moment[index(cube.r0, cube.g0, cube.b0)]
}

/// The part of [`volume`] that does not depend on the cut position.
fn bottom(cube: &Cube, direction: Direction, moment: &[f64]) -> f64 {
    match direction {
        Direction::Red => {
            -moment[index(cube.r0, cube.g1, cube.b1)]
                + moment[index(cube.r0, cube.g1, cube.b0)]
                + moment[index(cube.r0, cube.g0, cube.b1)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
        Direction::Green => {
            -moment[index(cube.r1, cube.g0, cube.b1)]
                + moment[index(cube.r1, cube.g0, cube.b0)]
                + moment[index(cube.r0, cube.g0, cube.b1)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
        Direction::Blue => {
            -moment[index(cube.r1, cube.g1, cube.b0)]
                + moment[index(cube.r1, cube.g0, cube.b0)]
                + moment[index(cube.r0, cube.g1, cube.b0)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
    }
}

/// The part of [`volume`] that depends on the cut `position`.
fn top(cube: &Cube, direction: Direction, position: usize, moment: &[f64]) -> f64 {
    match direction {
        Direction::Red => {
            moment[index(position, cube.g1, cube.b1)]
                - moment[index(position, cube.g1, cube.b0)]
                - moment[index(position, cube.g0, cube.b1)]
                + moment[index(position, cube.g0, cube.b0)]
        }
        Direction::Green => {
            moment[index(cube.r1, position, cube.b1)]
                - moment[index(cube.r1, position, cube.b0)]
                - moment[index(cube.r0, position, cube.b1)]
                + moment[index(cube.r0, position, cube.b0)]
        }
        Direction::Blue => {
            moment[index(cube.r1, cube.g1, position)]
                - moment[index(cube.r1, cube.g0, position)]
                - moment[index(cube.r0, cube.g1, position)]
                + moment[index(cube.r0, cube.g0, position)]
        }
    }
}

/// Wu's quantizer over the opaque pixels of the input.
///
/// The reported count for each color is the pixel weight of its box.
pub struct QuantizerWu;

impl Quantizer for QuantizerWu {
    fn quantize(
        &self,
        pixels: &[Argb],
        max_colors: usize,
        cancel: Option<&CancellationToken>,
    ) -> Result<QuantizerResult, Cancelled> {
        check(cancel)?;
        let counts = quantize_map(&opaque_pixels(pixels));
        let state = WuState::new(Moments::from_counts(counts));
        let cubes = state.create_boxes(max_colors);
        let color_to_count = state.create_result(&cubes);
        debug!(
            boxes = cubes.len(),
            colors = color_to_count.len(),
            "wu partitioning finished"
        );
        Ok(QuantizerResult { color_to_count })
    }
}

struct WuState {
    m: Moments,
}

impl WuState {
    fn new(m: Moments) -> Self {
        Self { m }
    }

    fn variance(&self, cube: &Cube) -> f64 {
        let dr = volume(cube, &self.m.moments_r);
        let dg = volume(cube, &self.m.moments_g);
        let db = volume(cube, &self.m.moments_b);
        let xx = volume(cube, &self.m.moments);
        let hypotenuse = dr * dr + dg * dg + db * db;
        let weight = volume(cube, &self.m.weights);
        xx - hypotenuse / weight
    }

    fn box_variance(&self, cube: &Cube) -> f64 {
        if cube.vol > 1 {
            self.variance(cube)
        } else {
            0.0
        }
    }

    /// Splits the highest-variance box until `max_colors` boxes exist or no
    /// box can be split further.
    fn create_boxes(&self, max_colors: usize) -> Vec<Cube> {
        if max_colors == 0 {
            return Vec::new();
        }
        let mut cubes = vec![Cube::default(); max_colors];
        cubes[0] = Cube {
            r1: INDEX_COUNT - 1,
            g1: INDEX_COUNT - 1,
            b1: INDEX_COUNT - 1,
            ..Cube::default()
        };
        let mut volume_variance = vec![0.0; max_colors];
        let mut generated = max_colors;
        let mut next = 0;
        let mut i = 1;
        while i < max_colors {
            let (head, tail) = cubes.split_at_mut(i);
            if self.cut(&mut head[next], &mut tail[0]) {
                volume_variance[next] = self.box_variance(&cubes[next]);
                volume_variance[i] = self.box_variance(&cubes[i]);
                i += 1;
            } else {
                volume_variance[next] = 0.0;
            }

            next = 0;
            let mut temp = volume_variance[0];
            for (j, &variance) in volume_variance.iter().enumerate().take(i).skip(1) {
                if variance > temp {
                    temp = variance;
                    next = j;
                }
            }
            if temp <= 0.0 {
                generated = i;
                break;
            }
        }
        cubes.truncate(generated);
        cubes
    }

    fn create_result(&self, cubes: &[Cube]) -> std::collections::BTreeMap<Argb, u32> {
        let mut colors = std::collections::BTreeMap::new();
        for cube in cubes {
            let weight = volume(cube, &self.m.weights);
            if weight > 0.0 {
                let channel = |moment: &[f64]| (volume(cube, moment) / weight).round() as u8;
                let color = Argb::from_rgb(
                    channel(&self.m.moments_r),
                    channel(&self.m.moments_g),
                    channel(&self.m.moments_b),
                );
                *colors.entry(color).or_insert(0) += weight as u32;
            }
        }
        colors
    }

    /// Cuts `one` in two, moving the upper half into `two`. Returns false
    /// when `one` cannot be split.
    fn cut(&self, one: &mut Cube, two: &mut Cube) -> bool {
        let whole_r = volume(one, &self.m.moments_r);
        let whole_g = volume(one, &self.m.moments_g);
        let whole_b = volume(one, &self.m.moments_b);
        let whole_w = volume(one, &self.m.weights);
        let whole = [whole_r, whole_g, whole_b, whole_w];

        let max_r = self.maximize(one, Direction::Red, one.r0 + 1, one.r1, whole);
        let max_g = self.maximize(one, Direction::Green, one.g0 + 1, one.g1, whole);
        let max_b = self.maximize(one, Direction::Blue, one.b0 + 1, one.b1, whole);

        let (direction, cut_location) =
            if max_r.maximum >= max_g.maximum && max_r.maximum >= max_b.maximum {
                match max_r.cut_location {
                    Some(location) => (Direction::Red, location),
                    None => return false,
                }
            } else if max_g.maximum >= max_r.maximum && max_g.maximum >= max_b.maximum {
                match max_g.cut_location {
                    Some(location) => (Direction::Green, location),
                    None => return false,
                }
            } else {
                match max_b.cut_location {
                    Some(location) => (Direction::Blue, location),
                    None => return false,
                }
            };

        two.r1 = one.r1;
        two.g1 = one.g1;
        two.b1 = one.b1;

        match direction {
            Direction::Red => {
                one.r1 = cut_location;
                two.r0 = one.r1;
                two.g0 = one.g0;
                two.b0 = one.b0;
            }
            Direction::Green => {
                one.g1 = cut_location;
                two.r0 = one.r0;
                two.g0 = one.g1;
                two.b0 = one.b0;
            }
            Direction::Blue => {
                one.b1 = cut_location;
                two.r0 = one.r0;
                two.g0 = one.g0;
                two.b0 = one.b1;
            }
        }

        one.vol = (one.r1 - one.r0) * (one.g1 - one.g0) * (one.b1 - one.b0);
        two.vol = (two.r1 - two.r0) * (two.g1 - two.g0) * (two.b1 - two.b0);
        true
    }

    /// Best cut position along `direction` in `first..last`, scored by the
    /// summed squared means of both halves.
    fn maximize(
        &self,
        cube: &Cube,
        direction: Direction,
        first: usize,
        last: usize,
        whole: [f64; 4],
    ) -> MaximizeResult {
        let [whole_r, whole_g, whole_b, whole_w] = whole;
        let bottom_r = bottom(cube, direction, &self.m.moments_r);
        let bottom_g = bottom(cube, direction, &self.m.moments_g);
        let bottom_b = bottom(cube, direction, &self.m.moments_b);
        let bottom_w = bottom(cube, direction, &self.m.weights);

        let mut maximum = 0.0;
        let mut cut_location = None;
        for i in first..last {
            let half_r = bottom_r + top(cube, direction, i, &self.m.moments_r);
            let half_g = bottom_g + top(cube, direction, i, &self.m.moments_g);
            let half_b = bottom_b + top(cube, direction, i, &self.m.moments_b);
            let half_w = bottom_w + top(cube, direction, i, &self.m.weights);
            if half_w == 0.0 {
                continue;
            }
            let mut temp = (half_r * half_r + half_g * half_g + half_b * half_b) / half_w;

            let half_r = whole_r - half_r;
            let half_g = whole_g - half_g;
            let half_b = whole_b - half_b;
            let half_w = whole_w - half_w;
            if half_w == 0.0 {
                continue;
            }
            temp += (half_r * half_r + half_g * half_g + half_b * half_b) / half_w;

            if temp > maximum {
                maximum = temp;
                cut_location = Some(i);
            }
        }
        MaximizeResult {
            cut_location,
            maximum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantize(pixels: &[Argb], max_colors: usize) -> QuantizerResult {
        QuantizerWu.quantize(pixels, max_colors, None).unwrap()
    }

    #[test]
    fn test_single_color() {
        let result = quantize(&[Argb(0xFF141216)], 128);
        assert_eq!(result.color_to_count.keys().copied().collect::<Vec<_>>(), vec![Argb(0xFF141216)]);
    }

    #[test]
    fn test_separates_primaries() {
        let pixels = [Argb(0xFFFF0000), Argb(0xFF00FF00), Argb(0xFF0000FF)];
        let result = quantize(&pixels, 128);
        assert_eq!(result.color_to_count.len(), 3);
        for pixel in pixels {
            assert_eq!(result.color_to_count.get(&pixel), Some(&1));
        }
    }

    #[test]
    fn test_respects_max_colors() {
        let pixels: Vec<Argb> = (0..=255u8)
            .flat_map(|v| [Argb::from_rgb(v, 0, 255 - v), Argb::from_rgb(0, v, v / 2)])
            .collect();
        let result = quantize(&pixels, 4);
        assert!(result.color_to_count.len() <= 4);
        assert_eq!(result.total_population(), pixels.len() as u64);
    }

    #[test]
    fn test_ignores_translucent_pixels() {
        let result = quantize(&[Argb(0x80FF0000), Argb(0xFF0000FF)], 128);
        assert_eq!(result.color_to_count.keys().copied().collect::<Vec<_>>(), vec![Argb(0xFF0000FF)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(quantize(&[], 128).is_empty());
    }

    #[test]
    fn test_cancelled_before_partitioning() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(
            QuantizerWu.quantize(&[Argb(0xFFFF0000)], 8, Some(&token)),
            Err(Cancelled)
        );
    }
}
