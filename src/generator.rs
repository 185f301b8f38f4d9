//! # Generator
//!
//! Herein is the weighted tile sampler that produces game boards. Letters
//! are grouped by sampling frequency, the groups are expanded into a tile
//! bag, and each cell of the board draws one tile from the bag. Weighting
//! the bag toward natural-language letter frequency biases boards toward
//! solvable, balanced layouts.
//!
//! Sampling is a pure function of its arguments: the caller supplies the
//! alphabet and the random-number source, and receives the board as the
//! return value. There is no shared tile pool and no completion callback.

use rand::Rng;

use crate::grid::Grid;

////////////////////////////////////////////////////////////////////////////////
//                             Weighted alphabet.                             //
////////////////////////////////////////////////////////////////////////////////

/// The default letter groups and their sampling frequencies, roughly
/// tracking English letter frequency.
const ENGLISH_GROUPS: [(&str, u32); 11] = [
	("e", 19),
	("t", 13),
	("ar", 12),
	("ino", 11),
	("s", 9),
	("d", 6),
	("chl", 5),
	("fmpu", 4),
	("gy", 3),
	("w", 2),
	("bjkqvxz", 1)
];

/// A weight table for tile sampling: clusters of letters that share a
/// sampling frequency. Expanding the table yields the tile bag that boards
/// draw from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct WeightedAlphabet
{
	/// The letter groups and their frequencies. Each group's letters appear
	/// in the tile bag once per unit of frequency.
	groups: Vec<(String, u32)>
}

impl WeightedAlphabet
{
	/// Construct a weight table from the given letter groups.
	///
	/// # Arguments
	///
	/// * `groups` - The letter groups and their sampling frequencies.
	///
	/// # Returns
	///
	/// The weight table.
	///
	/// # Panics
	///
	/// If `groups` is empty, or any group has no letters or zero frequency;
	/// such a table cannot fill a board.
	pub fn new(groups: Vec<(String, u32)>) -> Self
	{
		assert!(!groups.is_empty(), "weight table must not be empty");
		for (letters, frequency) in &groups
		{
			assert!(!letters.is_empty(), "letter group must not be empty");
			assert!(*frequency > 0, "letter group frequency must be positive");
		}
		Self { groups }
	}

	/// Expand the weight table into a tile bag: each group's letters,
	/// repeated once per unit of the group's frequency.
	///
	/// # Returns
	///
	/// The tile bag.
	#[must_use]
	pub fn tile_bag(&self) -> String
	{
		let mut bag = String::new();
		for (letters, frequency) in &self.groups
		{
			for _ in 0..*frequency
			{
				bag.push_str(letters);
			}
		}
		bag
	}
}

impl Default for WeightedAlphabet
{
	/// The English weight table.
	fn default() -> Self
	{
		Self::new(
			ENGLISH_GROUPS
				.into_iter()
				.map(|(letters, frequency)| (letters.to_string(), frequency))
				.collect()
		)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                              Board sampling.                               //
////////////////////////////////////////////////////////////////////////////////

/// Produce a board by drawing one tile from the alphabet's tile bag for each
/// cell. The same seed, alphabet, and size always reproduce the same board.
///
/// # Arguments
///
/// * `size` - The edge length of the board.
/// * `alphabet` - The weight table to sample from.
/// * `rng` - The random-number source.
///
/// # Returns
///
/// A board of `size²` sampled letters.
pub fn generate<R: Rng + ?Sized>(
	size: usize,
	alphabet: &WeightedAlphabet,
	rng: &mut R
) -> Grid
{
	let bag = alphabet.tile_bag().chars().collect::<Vec<_>>();
	let chars = (0..size * size)
		.map(|_| bag[rng.gen_range(0..bag.len())])
		.collect();
	Grid::new(size, chars)
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
