use crate::person::Person;
use crate::time::{Consolidate, Interval};
use log::debug;
use num::Integer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The bookable window of a single working day.
/// Inclusive start, exclusive end, in the same integer time encoding
/// as [`Interval`].
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkDay<N>
where
    N: Integer + Copy,
{
    pub start: N,
    pub end: N,
}

/// The standard working day, 0900 to 1700.
impl Default for WorkDay<i32> {
    fn default() -> WorkDay<i32> {
        WorkDay {
            start: 900,
            end: 1700,
        }
    }
}

impl<N> WorkDay<N>
where
    N: Integer + Copy,
{
    /// Constructs a working day with custom bounds.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::scheduler::WorkDay;
    ///
    /// let half_day = WorkDay::new(900, 1300);
    /// assert_eq!(half_day.start, 900);
    /// assert_eq!(half_day.end, 1300);
    /// ```
    pub fn new(start: N, end: N) -> WorkDay<N> {
        WorkDay { start, end }
    }

    /// Finds the earliest interval of length `duration` within this
    /// working day that is free for every person.
    ///
    /// All schedules are flattened and consolidated, then the gaps
    /// between consolidated busy intervals (and the day bounds) are
    /// scanned front to back; the first gap of sufficient length wins.
    /// Returns `None` when no such gap exists — an expected outcome,
    /// not an error.
    ///
    /// No input is validated: empty person lists, empty schedules,
    /// busy intervals outside the day window, and non-positive
    /// durations all flow through the same arithmetic.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::person::Person;
    /// use terminfinder::scheduler::WorkDay;
    /// use terminfinder::time::Interval;
    ///
    /// let persons = vec![
    ///     Person::new(vec![Interval::new(900, 1000)]),
    ///     Person::new(vec![Interval::new(950, 1050)]),
    /// ];
    ///
    /// let slot = WorkDay::default().find_meeting_slot(&persons, 45);
    /// assert_eq!(slot, Some(Interval::new(1050, 1095)));
    /// ```
    ///
    /// A shorter day can rule the meeting out entirely:
    /// ```
    /// use terminfinder::person::Person;
    /// use terminfinder::scheduler::WorkDay;
    /// use terminfinder::time::Interval;
    ///
    /// let persons = vec![Person::new(vec![Interval::new(900, 1200)])];
    ///
    /// assert_eq!(WorkDay::new(900, 1230).find_meeting_slot(&persons, 45), None);
    /// ```
    pub fn find_meeting_slot(&self, persons: &[Person<N>], duration: N) -> Option<Interval<N>> {
        let busy = persons
            .iter()
            .flat_map(|p| p.schedule.iter())
            .consolidate();

        debug!(
            "consolidated {} persons into {} busy intervals",
            persons.len(),
            busy.len()
        );

        let mut cursor = self.start;

        // Gaps before and between busy intervals, front to back
        for slot in &busy {
            if slot.start() - cursor >= duration {
                return Some(Interval::new(cursor, cursor + duration));
            }
            cursor = cursor.max(slot.end());
        }

        // The remainder of the day after the last busy interval
        if self.end - cursor >= duration {
            return Some(Interval::new(cursor, cursor + duration));
        }

        None
    }
}

/// Finds the earliest common free slot within the standard 0900-1700
/// working day.
///
/// # Examples
/// ```
/// use terminfinder::person::Person;
/// use terminfinder::scheduler::find_meeting_slot;
/// use terminfinder::time::Interval;
///
/// let persons = vec![
///     Person::new(vec![Interval::new(900, 1030), Interval::new(1200, 1300)]),
///     Person::new(vec![Interval::new(1050, 1150), Interval::new(1400, 1500)]),
/// ];
///
/// match find_meeting_slot(&persons, 45) {
///     Some(slot) => println!(
///         "Meeting can be scheduled from {} to {}.",
///         slot.start(),
///         slot.end()
///     ),
///     None => println!("No suitable meeting time found."),
/// }
///
/// assert_eq!(find_meeting_slot(&persons, 45), Some(Interval::new(1150, 1195)));
/// ```
pub fn find_meeting_slot(persons: &[Person<i32>], duration: i32) -> Option<Interval<i32>> {
    WorkDay::default().find_meeting_slot(persons, duration)
}
