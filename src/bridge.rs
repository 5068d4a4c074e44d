//! Bridge and torch puzzle
//!
//! A group must cross a bridge at night with one torch. At most two people
//! cross at a time, a pair walks at the pace of its slower member, and
//! someone has to bring the torch back after every forward trip except
//! the last.
//!
//! The schedule is built greedily: while four or more people wait, the two
//! slowest are moved over by whichever of the two classic patterns is
//! cheaper; the last three, two or one finish with a fixed pattern.
//!
//! ```
//! use tictactoe::bridge::cross_bridge;
//!
//! let crossing = cross_bridge(&[1, 2, 5, 10]);
//! assert_eq!(crossing.total, 17);
//! assert_eq!(
//!     crossing.to_string(),
//!     "(1,2) -> 2; 1 <- 1; (5,10) -> 10; 2 <- 2; (1,2) -> 2. Total = 17"
//! );
//! ```

use std::fmt;

/// One walk across the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trip {
    /// Two people cross together
    Pair(u32, u32),
    /// One person crosses alone
    Alone(u32),
    /// One person brings the torch back
    Return(u32),
}

impl Trip {
    /// Time this trip takes
    pub fn duration(self) -> u32 {
        match self {
            Trip::Pair(a, b) => a.max(b),
            Trip::Alone(a) | Trip::Return(a) => a,
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Trip::Pair(a, b) => write!(f, "({},{}) -> {}", a, b, a.max(b)),
            Trip::Alone(a) => write!(f, "({}) -> {}", a, a),
            Trip::Return(a) => write!(f, "{} <- {}", a, a),
        }
    }
}

/// Full crossing schedule
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Crossing {
    pub trips: Vec<Trip>,
    /// Sum of trip durations, widened so any group of `u32` times fits
    pub total: u64,
}

impl Crossing {
    fn push(&mut self, trip: Trip) {
        self.total += u64::from(trip.duration());
        self.trips.push(trip);
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trips.is_empty() {
            return write!(f, "Total = {}", self.total);
        }
        for (i, trip) in self.trips.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", trip)?;
        }
        write!(f, ". Total = {}", self.total)
    }
}

/// Schedule everyone across, given their individual crossing times.
pub fn cross_bridge(times: &[u32]) -> Crossing {
    let mut sorted = times.to_vec();
    sorted.sort_unstable();

    let mut crossing = Crossing::default();
    let mut waiting = sorted.len();

    while waiting >= 4 {
        let (a, b) = (sorted[0], sorted[1]);
        let (x, y) = (sorted[waiting - 2], sorted[waiting - 1]);
        let shuttle = 2 * u64::from(b) + u64::from(a) + u64::from(y);
        let escort = 2 * u64::from(a) + u64::from(x) + u64::from(y);

        // Two fastest shuttle the torch, or the fastest escorts both slow ones
        if shuttle <= escort {
            crossing.push(Trip::Pair(a, b));
            crossing.push(Trip::Return(a));
            crossing.push(Trip::Pair(x, y));
            crossing.push(Trip::Return(b));
        } else {
            crossing.push(Trip::Pair(a, y));
            crossing.push(Trip::Return(a));
            crossing.push(Trip::Pair(a, x));
            crossing.push(Trip::Return(a));
        }
        waiting -= 2;
    }

    match waiting {
        3 => {
            crossing.push(Trip::Pair(sorted[0], sorted[1]));
            crossing.push(Trip::Return(sorted[0]));
            crossing.push(Trip::Pair(sorted[0], sorted[2]));
        }
        2 => crossing.push(Trip::Pair(sorted[0], sorted[1])),
        1 => crossing.push(Trip::Alone(sorted[0])),
        _ => {}
    }

    crossing
}
