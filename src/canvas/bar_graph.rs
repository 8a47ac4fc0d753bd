use std::iter;

/// The default number of characters in a bar.
pub const DEFAULT_GRAPH_LENGTH: usize = 20;

const FILL_CHAR: char = '#';
const EMPTY_CHAR: char = ' ';

/// A fixed-width text bar measuring something, using `#` as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGraph {
    ratio: f64,
    length: usize,
}

impl Default for BarGraph {
    fn default() -> Self {
        Self {
            ratio: 0.0,
            length: DEFAULT_GRAPH_LENGTH,
        }
    }
}

impl BarGraph {
    /// The ratio, a value from 0.0 to 1.0 (any other greater or less will be
    /// clamped) represents the portion of the bar to fill. NaN is treated
    /// as 0.0.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };

        self
    }

    /// The total width of the bar, in characters.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// How many fill characters the bar has. This is `ratio * length`
    /// rounded half away from zero, so it never exceeds `length`.
    pub fn filled(&self) -> usize {
        let filled = (self.ratio * self.length as f64).round() as usize;
        filled.min(self.length)
    }

    /// Draws the bar, which is always exactly `length` characters wide.
    pub fn render(&self) -> String {
        let filled = self.filled();

        let mut bar = String::with_capacity(self.length);
        bar.extend(iter::repeat(FILL_CHAR).take(filled));
        bar.extend(iter::repeat(EMPTY_CHAR).take(self.length - filled));

        bar
    }
}

/// Shorthand to draw a bar of `length` characters filled to `ratio`.
#[inline]
pub fn percent_to_graph(ratio: f64, length: usize) -> String {
    BarGraph::default().ratio(ratio).length(length).render()
}
