use itertools::Itertools;
use num::Integer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Half-open [start, end) time interval
/// <N>: Any integer type
///
/// The end is exclusive: a meeting ending at 1000 does not conflict
/// with one starting at 1000.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval<N>(pub N, pub N)
where
    N: Integer + Copy;

impl<N> Interval<N>
where
    N: Integer + Copy,
{
    /// Construct a new Interval
    /// The range is half-open on [start, end)
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::Interval;
    ///
    /// let test = Interval::new(900, 1030);
    ///
    /// assert_eq!(test.0, 900);
    /// assert_eq!(test.1, 1030);
    /// ```
    pub fn new(start: N, end: N) -> Interval<N> {
        Interval(start, end)
    }

    /// Convenience function for readability
    /// Returns the start of the Interval
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::Interval;
    ///
    /// let test = Interval::new(900, 1030);
    /// assert_eq!(test.0, test.start());
    /// ```
    pub fn start(self) -> N {
        self.0
    }

    /// Convenience function for readability
    /// Returns the end of the Interval
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::Interval;
    ///
    /// let test = Interval::new(900, 1030);
    /// assert_eq!(test.1, test.end());
    /// ```
    pub fn end(self) -> N {
        self.1
    }
}

pub trait Consolidate<N>
where
    N: Integer + Copy,
{
    fn consolidate(self) -> Vec<Interval<N>>;
}

impl<'a, T, N> Consolidate<N> for T
where
    T: Iterator<Item = &'a Interval<N>>,
    N: 'a + Integer + Copy,
{
    /// Merges overlapping and touching Intervals together
    ///
    /// The result is sorted ascending by start, and no two entries
    /// overlap or abut. The input may be unordered, overlapping, or
    /// empty; a private working copy is sorted, never the caller's
    /// collection.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::{Consolidate, Interval};
    ///
    /// let busy = vec![
    ///     Interval::new(1000, 1100),
    ///     Interval::new(900, 1030),
    ///     Interval::new(1100, 1150),
    ///     Interval::new(1250, 1350),
    /// ];
    ///
    /// assert_eq!(
    ///     busy.iter().consolidate(),
    ///     vec![Interval::new(900, 1150), Interval::new(1250, 1350)]
    /// );
    /// ```
    ///
    /// Nested and duplicate entries collapse:
    /// ```
    /// use terminfinder::time::{Consolidate, Interval};
    ///
    /// let busy = vec![
    ///     Interval::new(900, 1400),
    ///     Interval::new(1000, 1100),
    ///     Interval::new(900, 1400),
    /// ];
    ///
    /// assert_eq!(busy.iter().consolidate(), vec![Interval::new(900, 1400)]);
    /// ```
    fn consolidate(self) -> Vec<Interval<N>> {
        let sorted = self.sorted_unstable();
        let size_hint = sorted.size_hint().1.unwrap_or(0);

        let (last, mut acc) = sorted.fold(
            (None, Vec::with_capacity(size_hint)),
            |(current, mut acc), &next| match current {
                None => (Some(next), acc),
                Some(busy) => {
                    if busy.end() >= next.start() {
                        // Overlap or exact touch, extend the accumulator
                        (
                            Some(Interval::new(busy.start(), busy.end().max(next.end()))),
                            acc,
                        )
                    } else {
                        acc.push(busy);
                        (Some(next), acc)
                    }
                }
            },
        );

        if let Some(busy) = last {
            acc.push(busy);
        }

        acc
    }
}
