use crate::time::Interval;
use num::Integer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A meeting participant and the times they are already booked.
///
/// The schedule may be empty, unordered, or contain overlapping
/// entries; the slot search tolerates all of these. Persons carry no
/// identity, only their busy intervals matter to the search.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug)]
pub struct Person<N>
where
    N: Integer + Copy,
{
    pub schedule: Vec<Interval<N>>,
}

impl<N> Default for Person<N>
where
    N: Integer + Copy,
{
    fn default() -> Person<N> {
        Person { schedule: vec![] }
    }
}

impl<N> Person<N>
where
    N: Integer + Copy,
{
    /// Constructs a new Person with the specified busy schedule.
    /// These are times when this person *cannot* meet.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::person::Person;
    /// use terminfinder::time::Interval;
    ///
    /// let person = Person::new(vec![Interval::new(900, 1030)]);
    /// assert_eq!(person.schedule.len(), 1);
    /// ```
    pub fn new(schedule: Vec<Interval<N>>) -> Person<N> {
        Person { schedule }
    }
}
