//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are numbered clockwise from 0 and
//! never change during a game; an eliminated player keeps their seat.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier supporting up to 255 seats.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a table of `seat_count` players.
    ///
    /// ```
    /// use durak_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..seat_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use durak_engine::core::{PlayerId, SeatMap};
///
/// let mut cards: SeatMap<usize> = SeatMap::from_vec(vec![6; 4]);
/// cards[PlayerId::new(1)] -= 1;
/// assert_eq!(cards[PlayerId::new(1)], 5);
/// assert_eq!(cards[PlayerId::new(0)], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Build a SeatMap from already-constructed values, one per seat.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 seat");
        assert!(data.len() <= 255, "At most 255 seats supported");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: PlayerId) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: PlayerId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<PlayerId> for SeatMap<T> {
    fn index_mut(&mut self, seat: PlayerId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Seat 1");
    }

    #[test]
    fn test_player_id_serializes_as_number() {
        let json = serde_json::to_string(&PlayerId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: PlayerId = serde_json::from_str("2").unwrap();
        assert_eq!(back, PlayerId::new(2));
    }

    #[test]
    fn test_seat_map_indexing_and_mutation() {
        let mut map: SeatMap<i32> = SeatMap::from_vec(vec![0, 10, 20, 30]);
        assert_eq!(map[PlayerId::new(3)], 30);

        map[PlayerId::new(0)] = 7;
        assert_eq!(map[PlayerId::new(0)], 7);
        assert_eq!(map.seat_count(), 4);
    }

    #[test]
    fn test_seat_map_iter() {
        let map = SeatMap::from_vec(vec!["a", "b", "c"]);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &"a"));
        assert_eq!(pairs[2], (PlayerId::new(2), &"c"));
        assert_eq!(map.values().count(), 3);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 seat")]
    fn test_seat_map_zero_seats() {
        let _: SeatMap<i32> = SeatMap::from_vec(Vec::new());
    }
}
