//! Color temperature theory
//!
//! Warm and cool are estimated with the Ou, Woodcock and Wright formula on
//! CIELAB. The cache solves the input's chroma and tone at every integer
//! hue once, then answers complement and analogous queries from that table.

use crate::cancel::{check, CancellationToken, Cancelled};
use crate::color::{Hct, Lab, LchAb};
use crate::math::sanitize_degrees;

/// Temperature relationships around one input color.
#[derive(Debug, Clone)]
pub struct TemperatureCache {
    input: Hct,
    /// The input's chroma and tone at hues 0..=360.
    hcts_by_hue: Vec<Hct>,
    temps_by_hue: Vec<f64>,
    input_temp: f64,
    coldest: (Hct, f64),
    warmest: (Hct, f64),
}

impl TemperatureCache {
    pub fn new(input: Hct) -> Self {
        let hcts_by_hue = (0..=360).map(|hue| with_hue(&input, hue)).collect();
        Self::from_hue_table(input, hcts_by_hue)
    }

    /// Builds the hue table, checking `cancel` before solving each hue.
    pub fn new_cancellable(
        input: Hct,
        cancel: Option<&CancellationToken>,
    ) -> Result<Self, Cancelled> {
        let mut hcts_by_hue = Vec::with_capacity(361);
        for hue in 0..=360 {
            check(cancel)?;
            hcts_by_hue.push(with_hue(&input, hue));
        }
        Ok(Self::from_hue_table(input, hcts_by_hue))
    }

    fn from_hue_table(input: Hct, hcts_by_hue: Vec<Hct>) -> Self {
        let temps_by_hue: Vec<f64> = hcts_by_hue.iter().map(raw_temperature).collect();
        let input_temp = raw_temperature(&input);

        // Stable sort over the hue table followed by the input, coldest first.
        let mut by_temp: Vec<(Hct, f64)> = hcts_by_hue
            .iter()
            .copied()
            .zip(temps_by_hue.iter().copied())
            .chain(std::iter::once((input, input_temp)))
            .collect();
        by_temp.sort_by(|a, b| a.1.total_cmp(&b.1));
        let coldest = by_temp[0];
        let warmest = by_temp[by_temp.len() - 1];

        Self {
            input,
            hcts_by_hue,
            temps_by_hue,
            input_temp,
            coldest,
            warmest,
        }
    }

    pub fn input(&self) -> Hct {
        self.input
    }

    pub fn coldest(&self) -> Hct {
        self.coldest.0
    }

    pub fn warmest(&self) -> Hct {
        self.warmest.0
    }

    /// The cached color at the integer hue nearest `hue`.
    fn at_hue(&self, hue: f64) -> (Hct, f64) {
        let index = (hue.round() as usize).min(360);
        (self.hcts_by_hue[index], self.temps_by_hue[index])
    }

    fn relative(&self, temp: f64) -> f64 {
        let range = self.warmest.1 - self.coldest.1;
        if range == 0.0 {
            return 0.5;
        }
        (temp - self.coldest.1) / range
    }

    /// Where `hct` sits between the coldest (0.0) and warmest (1.0) colors
    /// at the input's chroma and tone.
    pub fn relative_temperature(&self, hct: &Hct) -> f64 {
        self.relative(raw_temperature(hct))
    }

    pub fn input_relative_temperature(&self) -> f64 {
        self.relative(self.input_temp)
    }

    /// The color on the opposite side of the warm/cool divide whose relative
    /// temperature mirrors the input's.
    ///
    /// ```
    /// use material_color::{Argb, Hct, TemperatureCache};
    ///
    /// let cache = TemperatureCache::new(Hct::from_argb(Argb(0xFF0000FF)));
    /// assert_eq!(cache.complement().to_argb(), Argb(0xFF9D0002));
    /// ```
    pub fn complement(&self) -> Hct {
        let (coldest_hue, coldest_temp) = (self.coldest.0.hue(), self.coldest.1);
        let warmest_hue = self.warmest.0.hue();
        let range = self.warmest.1 - coldest_temp;
        let start_hue_is_coldest_to_warmest = is_between(self.input.hue(), coldest_hue, warmest_hue);
        let (start_hue, end_hue) = if start_hue_is_coldest_to_warmest {
            (warmest_hue, coldest_hue)
        } else {
            (coldest_hue, warmest_hue)
        };

        let mut smallest_error = 1000.0;
        let mut answer = self.at_hue(self.input.hue()).0;
        let complement_relative_temp = 1.0 - self.input_relative_temperature();

        // Walk the arc that does not contain the input.
        for hue_addend in 0..=360 {
            let hue = sanitize_degrees(start_hue + hue_addend as f64);
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }
            let (possible_answer, temp) = self.at_hue(hue);
            let relative_temp = (temp - coldest_temp) / range;
            let error = (complement_relative_temp - relative_temp).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = possible_answer;
            }
        }
        answer
    }

    /// `count` colors analogous to the input, input in the middle.
    ///
    /// The wheel is cut into `divisions` slices of equal temperature change,
    /// so the picks look evenly spaced even where hue alone is not.
    pub fn analogous(&self, count: usize, divisions: usize) -> Vec<Hct> {
        if count == 0 || divisions == 0 {
            return Vec::new();
        }
        let start_hue = self.input.hue().round();
        let (start_hct, start_temp) = self.at_hue(start_hue);
        let mut last_temp = self.relative(start_temp);

        let mut all_colors = vec![start_hct];

        let mut absolute_total_temp_delta = 0.0;
        for i in 0..360 {
            let hue = sanitize_degrees(start_hue + i as f64);
            let temp = self.relative(self.at_hue(hue).1);
            absolute_total_temp_delta += (temp - last_temp).abs();
            last_temp = temp;
        }

        let temp_step = absolute_total_temp_delta / divisions as f64;
        let mut total_temp_delta = 0.0;
        let mut hue_addend = 1;
        last_temp = self.relative(start_temp);
        while all_colors.len() < divisions {
            let hue = sanitize_degrees(start_hue + hue_addend as f64);
            let (hct, raw) = self.at_hue(hue);
            let temp = self.relative(raw);
            total_temp_delta += (temp - last_temp).abs();

            let mut desired_total_temp_delta = all_colors.len() as f64 * temp_step;
            let mut index_satisfied = total_temp_delta >= desired_total_temp_delta;
            let mut index_addend = 1;
            // A single step can cover several slices.
            while index_satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                desired_total_temp_delta = (all_colors.len() + index_addend) as f64 * temp_step;
                index_satisfied = total_temp_delta >= desired_total_temp_delta;
                index_addend += 1;
            }
            last_temp = temp;
            hue_addend += 1;

            if hue_addend > 360 {
                while all_colors.len() < divisions {
                    all_colors.push(hct);
                }
                break;
            }
        }

        let len = all_colors.len() as isize;
        let mut answers = vec![self.input];

        let ccw_count = (count - 1) / 2;
        for i in 1..=ccw_count {
            let index = (-(i as isize)).rem_euclid(len) as usize;
            answers.insert(0, all_colors[index]);
        }
        let cw_count = count - ccw_count - 1;
        for i in 1..=cw_count {
            let index = (i as isize).rem_euclid(len) as usize;
            answers.push(all_colors[index]);
        }
        answers
    }
}

/// Ou-Woodcock-Wright temperature: negative is cool, positive is warm.
pub fn raw_temperature(color: &Hct) -> f64 {
    let lch = LchAb::from(Lab::from(color.to_argb()));
    -0.5 + 0.02 * lch.c.powf(1.07) * sanitize_degrees(lch.h - 50.0).to_radians().cos()
}

/// True when `angle` is on the clockwise arc from `a` to `b`, inclusive.
/// `input`'s chroma and tone at integer `hue`.
fn with_hue(input: &Hct, hue: u16) -> Hct {
    Hct::from(f64::from(hue), input.chroma(), input.tone())
}

fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Argb;
    use pretty_assertions::assert_eq;

    fn argbs(hcts: &[Hct]) -> Vec<Argb> {
        hcts.iter().map(Hct::to_argb).collect()
    }

    #[test]
    fn test_raw_temperature() {
        let red = raw_temperature(&Hct::from_argb(Argb(0xFFFF0000)));
        let blue = raw_temperature(&Hct::from_argb(Argb(0xFF0000FF)));
        assert!((red - 2.3514).abs() < 1e-3);
        assert!((blue - -1.3935).abs() < 1e-3);
    }

    #[test]
    fn test_complement() {
        let blue = TemperatureCache::new(Hct::from_argb(Argb(0xFF0000FF)));
        assert_eq!(blue.complement().to_argb(), Argb(0xFF9D0002));
        let red = TemperatureCache::new(Hct::from_argb(Argb(0xFFFF0000)));
        assert_eq!(red.complement().to_argb(), Argb(0xFF007BFC));
    }

    #[test]
    fn test_analogous() {
        let blue = TemperatureCache::new(Hct::from_argb(Argb(0xFF0000FF)));
        assert_eq!(
            argbs(&blue.analogous(5, 12)),
            vec![
                Argb(0xFF00590C),
                Argb(0xFF00564E),
                Argb(0xFF0000FF),
                Argb(0xFF6700CC),
                Argb(0xFF81009F),
            ]
        );
        assert_eq!(
            argbs(&blue.analogous(3, 6)),
            vec![Argb(0xFF00590C), Argb(0xFF0000FF), Argb(0xFF81009F)]
        );

        let red = TemperatureCache::new(Hct::from_argb(Argb(0xFFFF0000)));
        assert_eq!(
            argbs(&red.analogous(5, 12)),
            vec![
                Argb(0xFFF60082),
                Argb(0xFFFC004C),
                Argb(0xFFFF0000),
                Argb(0xFFD95500),
                Argb(0xFFAF7200),
            ]
        );
    }

    #[test]
    fn test_extremes_and_relative_temperature() {
        let blue = TemperatureCache::new(Hct::from_argb(Argb(0xFF0000FF)));
        assert_eq!(blue.warmest().to_argb(), Argb(0xFF9D0002));
        assert_eq!(blue.coldest().to_argb(), Argb(0xFF0000FF));
        assert!(blue.input_relative_temperature().abs() < 1e-9);
        let warmest = blue.warmest();
        assert!((blue.relative_temperature(&warmest) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_between_wraps() {
        assert!(is_between(10.0, 350.0, 20.0));
        assert!(!is_between(180.0, 350.0, 20.0));
        assert!(is_between(90.0, 20.0, 350.0));
    }

    #[test]
    fn test_cancelled_scan() {
        let token = CancellationToken::new();
        token.cancel();
        let result = TemperatureCache::new_cancellable(Hct::from_argb(Argb(0xFF0000FF)), Some(&token));
        assert!(matches!(result, Err(Cancelled)));
    }

    #[test]
    fn test_cancellable_scan_matches_plain_scan() {
        let input = Hct::from_argb(Argb(0xFF6750A4));
        let token = CancellationToken::new();
        let plain = TemperatureCache::new(input);
        let scanned = TemperatureCache::new_cancellable(input, Some(&token)).unwrap();
        assert_eq!(argbs(&plain.hcts_by_hue), argbs(&scanned.hcts_by_hue));
        assert_eq!(plain.complement().to_argb(), scanned.complement().to_argb());
    }
}
