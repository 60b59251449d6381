use std::fmt;

use hunter_css::Rgba;

use super::buffer::PixelBuffer;

/// Sampled direction across an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Middle row, left to right.
    Horizontal,
    /// Middle column, top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
}

impl Axis {
    /// All axes in tie-break priority order.
    pub const ALL: [Axis; 3] = [Axis::Horizontal, Axis::Vertical, Axis::Diagonal];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
            Axis::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sampled pixel and its normalized position (`0.0..=1.0`) along its axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub position: f64,
    pub color: Rgba,
}

/// Ordered samples for each axis, all of the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub horizontal: Vec<Sample>,
    pub vertical: Vec<Sample>,
    pub diagonal: Vec<Sample>,
}

impl SampleSet {
    pub fn axis(&self, axis: Axis) -> &[Sample] {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
            Axis::Diagonal => &self.diagonal,
        }
    }
}

/// Coordinate of sample `i` of `count` along an extent of `len` pixels.
///
/// `floor(len / (count - 1) * i)`, clamped so the last sample lands on the
/// final pixel instead of one past it.
#[inline]
fn coord(len: u32, i: usize, count: usize) -> u32 {
    let step = f64::from(len) / (count - 1) as f64;
    let v = (step * i as f64).floor() as u32;
    v.min(len.saturating_sub(1))
}

/// Takes `count` samples along each axis.
///
/// Reads `3 * count` pixels regardless of image size. `count` must be at
/// least 2 and the buffer non-empty; [`crate::infer`] checks both.
pub fn sample_axes(buffer: &PixelBuffer, count: usize) -> SampleSet {
    let (w, h) = (buffer.width(), buffer.height());
    let (mid_x, mid_y) = (w / 2, h / 2);

    let line = |at: &dyn Fn(usize) -> (u32, u32)| -> Vec<Sample> {
        (0..count)
            .map(|i| {
                let (x, y) = at(i);
                Sample {
                    position: i as f64 / (count - 1) as f64,
                    color: buffer.get(x, y).unwrap_or(Rgba::transparent()),
                }
            })
            .collect()
    };

    SampleSet {
        horizontal: line(&|i| (coord(w, i, count), mid_y)),
        vertical: line(&|i| (mid_x, coord(h, i, count))),
        diagonal: line(&|i| (coord(w, i, count), coord(h, i, count))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrants() -> PixelBuffer {
        // Left half red, right half blue; bottom-right quadrant green.
        PixelBuffer::from_fn(100, 10, |x, y| match (x < 50, y < 5) {
            (true, _) => Rgba::opaque(255, 0, 0),
            (false, true) => Rgba::opaque(0, 0, 255),
            (false, false) => Rgba::opaque(0, 255, 0),
        })
    }

    #[test]
    fn coordinates_span_the_extent() {
        assert_eq!(coord(100, 0, 20), 0);
        assert_eq!(coord(100, 9, 20), 47);
        assert_eq!(coord(100, 10, 20), 52);
        assert_eq!(coord(100, 19, 20), 99);
        assert_eq!(coord(1, 19, 20), 0);
    }

    #[test]
    fn sample_counts_and_positions() {
        let set = sample_axes(&quadrants(), 20);
        for axis in Axis::ALL {
            let samples = set.axis(axis);
            assert_eq!(samples.len(), 20, "{axis}");
            assert_eq!(samples[0].position, 0.0);
            assert_eq!(samples[19].position, 1.0);
            assert!(samples.windows(2).all(|w| w[0].position < w[1].position));
        }
    }

    #[test]
    fn axes_read_expected_pixels() {
        let set = sample_axes(&quadrants(), 20);
        let red = Rgba::opaque(255, 0, 0);
        let green = Rgba::opaque(0, 255, 0);

        // Middle row is y = 5: red then green.
        assert_eq!(set.horizontal[0].color, red);
        assert_eq!(set.horizontal[19].color, green);
        // Middle column is x = 50: blue on top, green below.
        assert_eq!(set.vertical[0].color, Rgba::opaque(0, 0, 255));
        assert_eq!(set.vertical[19].color, green);
        // Diagonal ends bottom-right.
        assert_eq!(set.diagonal[0].color, red);
        assert_eq!(set.diagonal[19].color, green);
    }

    #[test]
    fn single_pixel_image() {
        let buf = PixelBuffer::from_fn(1, 1, |_, _| Rgba::opaque(9, 9, 9));
        let set = sample_axes(&buf, 3);
        assert!(set.diagonal.iter().all(|s| s.color == Rgba::opaque(9, 9, 9)));
    }

    #[test]
    fn deterministic() {
        let buf = quadrants();
        assert_eq!(sample_axes(&buf, 20), sample_axes(&buf, 20));
    }
}
