use smallvec::SmallVec;

/// Piecewise-linear curve over strictly increasing breakpoints.
///
/// Sampling below the first breakpoint or above the last one holds the edge
/// value; there is no extrapolation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keyframes {
    points: SmallVec<[(f32, f32); 5]>,
}

impl Keyframes {
    /// Build from `(input, output)` pairs. Inputs that do not strictly
    /// increase over the previous kept input are skipped.
    pub fn new(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut kept: SmallVec<[(f32, f32); 5]> = SmallVec::new();
        for (x, y) in points {
            if !x.is_finite() {
                continue;
            }
            match kept.last() {
                Some(&(px, _)) if x <= px => {}
                _ => kept.push((x, y)),
            }
        }
        Self { points: kept }
    }

    /// Build a curve centred on `anchor` with breakpoints at
    /// `anchor + offset * half_width`, clamped to `[0, 1]`.
    ///
    /// `offsets` must be sorted and contain the anchor itself (offset 0).
    /// When clamping pushes an outer breakpoint onto (or past) its inner
    /// neighbour the outer one is dropped, so the value at the anchor always
    /// survives.
    pub fn anchored(anchor: f32, half_width: f32, offsets: &[f32], values: &[f32]) -> Self {
        debug_assert_eq!(offsets.len(), values.len());
        let n = offsets.len().min(values.len());
        if n == 0 {
            return Self::default();
        }
        let center = offsets[..n]
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let at = |i: usize| (anchor + offsets[i] * half_width).clamp(0.0, 1.0);

        let mut left: SmallVec<[(f32, f32); 5]> = SmallVec::new();
        let mut edge = at(center);
        for i in (0..center).rev() {
            let x = at(i);
            if x < edge {
                left.push((x, values[i]));
                edge = x;
            }
        }

        let mut points: SmallVec<[(f32, f32); 5]> = left.into_iter().rev().collect();
        points.push((at(center), values[center]));

        let mut edge = at(center);
        for i in center + 1..n {
            let x = at(i);
            if x > edge {
                points.push((x, values[i]));
                edge = x;
            }
        }
        Self { points }
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn sample(&self, x: f32) -> f32 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return 0.0,
        };
        if x.is_nan() || x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }
        for w in self.points.windows(2) {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            if x < x1 {
                let t = (x - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }
        last.1
    }
}
