//! Linear, band and point scales.

// Thresholds for picking a 1, 2, 5 or 10 multiple of a power of ten.
const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick count used when rounding a domain outward.
pub const NICE_COUNT: usize = 10;


/// Continuous linear mapping from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}


impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Extend the domain outward to round tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut previous = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if previous == Some(step) || step == 0.0 || !step.is_finite() {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else {
                let inverse = -step;
                start = (start * inverse).floor() / inverse;
                stop = (stop * inverse).ceil() / inverse;
            }
            previous = Some(step);
        }

        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range. A degenerate domain maps to the range midpoint.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + (r1 - r0) * t
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (start, stop) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        if start == stop {
            return vec![start];
        }

        let step = tick_increment(start, stop, count);
        if step == 0.0 || !step.is_finite() {
            return Vec::new();
        }

        if step > 0.0 {
            let first = (start / step).ceil() as i64;
            let last = (stop / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        } else {
            let inverse = -step;
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        }
    }

    /// Format a tick with the precision its spacing needs, grouping thousands.
    pub fn format_tick(&self, count: usize, value: f64) -> String {
        let (d0, d1) = self.domain;
        let step = tick_increment(d0.min(d1), d0.max(d1), count);
        let spacing = if step < 0.0 { -1.0 / step } else { step };
        let decimals = if spacing > 0.0 && spacing.is_finite() && spacing < 1.0 {
            (-spacing.log10().floor()).max(0.0) as usize
        } else {
            0
        };
        group_thousands(&format!("{value:.decimals$}"))
    }
}


/// Value domain anchored at zero. Degenerate data falls back to `[0, 1]`.
pub fn value_domain(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (mut low, mut high) = (0.0_f64, 0.0_f64);
    for value in values.into_iter().filter(|v| v.is_finite()) {
        low = low.min(value);
        high = high.max(value);
    }
    if low == high { (0.0, 1.0) } else { (low, high) }
}


/// Radial domain `[0, max]`. Non-positive maxima fall back to `[0, 1]`.
pub fn radial_domain(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max > 0.0 { (0.0, max) } else { (0.0, 1.0) }
}


/// Tick spacing for `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself; negative results encode the step as
/// `-1 / step` so sub-unit steps stay exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}


/// Insert commas between thousands in a formatted decimal, keeping sign and fraction.
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = integer.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}


/// Discrete scale assigning each position an equal-width band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    start: f64,
    step: f64,
    bandwidth: f64,
    len: usize,
}


impl BandScale {
    /// Band scale with the same inner and outer padding.
    pub fn new(len: usize, range: (f64, f64), padding: f64) -> Self {
        Self::with_padding(len, range, padding, padding)
    }

    pub fn with_padding(len: usize, range: (f64, f64), inner: f64, outer: f64) -> Self {
        let (start, stop) = if range.0 <= range.1 { range } else { (range.1, range.0) };
        let n = len as f64;
        let step = (stop - start) / (n - inner + outer * 2.0).max(1.0);
        let start = start + (stop - start - step * (n - inner)) * 0.5;

        Self {
            start,
            step,
            bandwidth: step * (1.0 - inner),
            len,
        }
    }

    /// Left edge of the band at `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    /// Center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + self.bandwidth / 2.0
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}


/// Discrete scale placing evenly spaced points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale(BandScale);


impl PointScale {
    pub fn new(len: usize, range: (f64, f64), padding: f64) -> Self {
        Self(BandScale::with_padding(len, range, 1.0, padding))
    }

    pub fn position(&self, index: usize) -> f64 {
        self.0.position(index)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_nice_rounds_domain_outward() {
        let scale = LinearScale::new((0.0, 17.0), (200.0, 0.0)).nice(NICE_COUNT);
        assert_eq!(scale.domain(), (0.0, 18.0));

        let scale = LinearScale::new((0.0, 2.0), (200.0, 0.0)).nice(NICE_COUNT);
        assert_eq!(scale.domain(), (0.0, 2.0));

        let scale = LinearScale::new((0.0, 93.0), (1.0, 0.0)).nice(NICE_COUNT);
        assert_eq!(scale.domain(), (0.0, 100.0));
    }

    #[test]
    fn test_apply_maps_linearly() {
        let scale = LinearScale::new((0.0, 20.0), (200.0, 0.0));
        assert!(close(scale.apply(0.0), 200.0));
        assert!(close(scale.apply(5.0), 150.0));
        assert!(close(scale.apply(20.0), 0.0));
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert!(close(scale.apply(3.0), 50.0));
    }

    #[test]
    fn test_ticks() {
        let scale = LinearScale::new((0.0, 18.0), (0.0, 1.0));
        assert_eq!(scale.ticks(4), vec![0.0, 5.0, 10.0, 15.0]);

        let scale = LinearScale::new((0.0, 2.0), (0.0, 1.0));
        assert_eq!(scale.ticks(4), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_format_tick_precision() {
        let scale = LinearScale::new((0.0, 2.0), (0.0, 1.0));
        assert_eq!(scale.format_tick(4, 0.5), "0.5");
        assert_eq!(scale.format_tick(4, 1.0), "1.0");

        let scale = LinearScale::new((0.0, 5000.0), (0.0, 1.0));
        assert_eq!(scale.format_tick(4, 2000.0), "2,000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-12345.75"), "-12,345.75");
    }

    #[test]
    fn test_value_domain() {
        assert_eq!(value_domain([2.0, 7.0]), (0.0, 7.0));
        assert_eq!(value_domain([0.0, 0.0]), (0.0, 1.0));
        assert_eq!(value_domain([-3.0, 4.0]), (-3.0, 4.0));
        assert_eq!(value_domain(Vec::<f64>::new()), (0.0, 1.0));
    }

    #[test]
    fn test_radial_domain() {
        assert_eq!(radial_domain([1.0, 6.0]), (0.0, 6.0));
        assert_eq!(radial_domain([0.0]), (0.0, 1.0));
    }

    #[test]
    fn test_band_scale_geometry() {
        let band = BandScale::new(2, (0.0, 100.0), 0.2);
        let step = 100.0 / 2.2;
        assert!(close(band.bandwidth(), step * 0.8));
        assert!(close(band.position(0), (100.0 - step * 1.8) / 2.0));
        assert!(close(band.position(1) - band.position(0), step));
    }

    #[test]
    fn test_point_scale_centers_points() {
        let single = PointScale::new(1, (0.0, 100.0), 0.5);
        assert!(close(single.position(0), 50.0));

        let points = PointScale::new(4, (0.0, 100.0), 0.5);
        assert!(close(points.position(0), 12.5));
        assert!(close(points.position(3), 87.5));
    }
}
