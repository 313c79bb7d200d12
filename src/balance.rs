use crate::walk::Sample;

/// Blend a forward walk with a reverse walk of the same outline.
///
/// The forward walk's leftover remainder sits entirely at the end of the
/// outline and the reverse walk's at the start. Blending each forward
/// sample towards its mirror in the reverse walk, with a factor ramping
/// linearly from 0 at the first sample to 1 at the last, spreads that
/// remainder evenly over the whole outline.
///
/// The two walks can disagree on sample count when the outline length is
/// not an exact multiple of the spacing; the result is clamped to the
/// shorter list.
pub(crate) fn balance(forward: &[Sample], reverse: &[Sample], closed: bool) -> Vec<Sample> {
    let count = forward.len().min(reverse.len());
    if count == 0 {
        return Vec::new();
    }
    let mut blended = Vec::with_capacity(count);
    for (i, sample) in forward.iter().take(count).enumerate() {
        // On a closed outline both walks start at the seam point, so sample
        // zero is its own mirror and every other mirror sits one step
        // earlier than it would on an open outline.
        let mirror = if closed {
            reverse[(reverse.len() - i) % reverse.len()]
        } else {
            reverse[reverse.len() - 1 - i]
        };
        let factor = if count > 1 {
            i as f64 / (count as f64 - 1.0)
        } else {
            0.0
        };
        blended.push(Sample {
            point: sample.point.lerp(mirror.point, factor),
            distance: sample.distance,
        });
    }
    blended
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use approx::assert_abs_diff_eq;
    use kurbo::Point;

    fn samples(positions: &[f64]) -> Vec<Sample> {
        positions
            .iter()
            .map(|&x| Sample {
                point: Point::new(x, 0.0),
                distance: x,
            })
            .collect()
    }

    #[test]
    fn test_open_blend_spreads_the_remainder() {
        // A 100-unit line walked at spacing 30 leaves a 10-unit remainder.
        // Forward samples sit at 0/30/60/90, reverse ones at 100/70/40/10.
        let forward = samples(&[0.0, 30.0, 60.0, 90.0]);
        let reverse = samples(&[100.0, 70.0, 40.0, 10.0]);
        let blended = balance(&forward, &reverse, false);
        assert_eq!(blended.len(), 4);
        let expected = [0.0, 100.0 / 3.0, 200.0 / 3.0, 100.0];
        for (sample, want) in blended.iter().zip(expected) {
            assert_abs_diff_eq!(sample.point.x, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_closed_blend_of_exact_fit_is_a_no_op() {
        // Forward and reverse walks of a closed loop whose length divides
        // evenly by the spacing visit the same points; balancing must not
        // move anything, in particular not collapse the seam.
        let forward = samples(&[0.0, 25.0, 50.0, 75.0]);
        let reverse = samples(&[0.0, 75.0, 50.0, 25.0]);
        let blended = balance(&forward, &reverse, true);
        for (sample, want) in blended.iter().zip(&forward) {
            assert_abs_diff_eq!(sample.point.x, want.point.x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_count_clamps_to_shorter_walk() {
        let forward = samples(&[0.0, 30.0, 60.0, 90.0]);
        let reverse = samples(&[100.0, 70.0, 40.0]);
        let blended = balance(&forward, &reverse, false);
        assert_eq!(blended.len(), 3);
        assert_eq!(blended[0].point, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_single_sample_stays_put() {
        let forward = samples(&[0.0]);
        let reverse = samples(&[100.0]);
        let blended = balance(&forward, &reverse, false);
        assert_eq!(blended[0].point, Point::new(0.0, 0.0));
    }
}
