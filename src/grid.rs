//! # Grid
//!
//! Herein is the game board: a fixed-size square array of letters, with the
//! coordinate arithmetic and neighbor enumeration that the solver traverses.
//! The board is immutable once produced; the solver only ever reads it.

use std::fmt::{self, Display, Formatter};

////////////////////////////////////////////////////////////////////////////////
//                                Directions.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of movement directions on the board. North is the
/// positive Y direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction
{
	North,
	NorthEast,
	East,
	SouthEast,
	South,
	SouthWest,
	West,
	NorthWest
}

impl Direction
{
	/// All directions, in visit order. This order fixes the discovery order
	/// of the solver's results, so tests can state exact expectations; do not
	/// reorder it.
	pub const ALL: [Direction; 8] = [
		Direction::North,
		Direction::NorthEast,
		Direction::East,
		Direction::SouthEast,
		Direction::South,
		Direction::SouthWest,
		Direction::West,
		Direction::NorthWest
	];

	/// Get the coordinate offset of this direction.
	///
	/// # Returns
	///
	/// The `(Δx, Δy)` offset of a single step in this direction.
	#[must_use]
	pub const fn offset(self) -> (isize, isize)
	{
		match self
		{
			Direction::North => (0, 1),
			Direction::NorthEast => (1, 1),
			Direction::East => (1, 0),
			Direction::SouthEast => (1, -1),
			Direction::South => (0, -1),
			Direction::SouthWest => (-1, -1),
			Direction::West => (-1, 0),
			Direction::NorthWest => (-1, 1)
		}
	}

	/// Check if this direction is diagonal.
	///
	/// # Returns
	///
	/// `true` if this direction is diagonal, `false` if it is orthogonal.
	#[inline]
	#[must_use]
	pub const fn is_diagonal(self) -> bool
	{
		let (dx, dy) = self.offset();
		dx != 0 && dy != 0
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Grid.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A square board of letters, linearized in row-major order: the cell at
/// `(x, y)` occupies index `y*size + x`. The cell at index 0 is `(0, 0)`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Grid
{
	/// The edge length of the board.
	size: usize,

	/// The letters of the board, in row-major order. Always exactly `size²`
	/// characters.
	chars: Vec<char>
}

impl Grid
{
	/// Construct a board from its edge length and letters.
	///
	/// # Arguments
	///
	/// * `size` - The edge length of the board.
	/// * `chars` - The letters of the board, in row-major order.
	///
	/// # Returns
	///
	/// The board.
	///
	/// # Panics
	///
	/// If `chars` does not contain exactly `size²` characters.
	pub fn new(size: usize, chars: Vec<char>) -> Self
	{
		assert!(
			chars.len() == size * size,
			"board of size {} requires {} characters, got {}",
			size,
			size * size,
			chars.len()
		);
		Self { size, chars }
	}

	/// Get the edge length of the board.
	///
	/// # Returns
	///
	/// The edge length of the board.
	#[inline]
	#[must_use]
	pub fn size(&self) -> usize { self.size }

	/// Get the number of cells on the board.
	///
	/// # Returns
	///
	/// The number of cells on the board, i.e. `size²`.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.chars.len() }

	/// Check if the board has no cells.
	///
	/// # Returns
	///
	/// `true` if the board has no cells, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.chars.is_empty() }

	/// Convert a coordinate to a cell index.
	///
	/// # Arguments
	///
	/// * `x` - The column, in `0..size`.
	/// * `y` - The row, in `0..size`.
	///
	/// # Returns
	///
	/// The index of the cell at `(x, y)`.
	#[inline]
	#[must_use]
	pub fn to_index(&self, x: usize, y: usize) -> usize
	{
		y * self.size + x
	}

	/// Convert a cell index to a coordinate.
	///
	/// # Arguments
	///
	/// * `index` - The cell index.
	///
	/// # Returns
	///
	/// The `(x, y)` coordinate of the cell, or `None` if the index is not in
	/// `0..size²`.
	#[must_use]
	pub fn to_coordinate(&self, index: usize) -> Option<(usize, usize)>
	{
		if index < self.chars.len()
		{
			Some((index % self.size, index / self.size))
		}
		else
		{
			None
		}
	}

	/// Check if a coordinate lies on the board. The arguments are signed so
	/// that off-board probes, e.g. one step west of column zero, are
	/// expressible.
	///
	/// # Arguments
	///
	/// * `x` - The column.
	/// * `y` - The row.
	///
	/// # Returns
	///
	/// `true` if `(x, y)` lies on the board, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_valid(&self, x: isize, y: isize) -> bool
	{
		let size = self.size as isize;
		(0..size).contains(&x) && (0..size).contains(&y)
	}

	/// Get the letter occupying the cell at the given index.
	///
	/// # Arguments
	///
	/// * `index` - The cell index, in `0..size²`.
	///
	/// # Returns
	///
	/// The letter occupying the cell.
	#[inline]
	#[must_use]
	pub fn char_at(&self, index: usize) -> char { self.chars[index] }

	/// Enumerate the on-board neighbors of the cell at `(x, y)`, in the fixed
	/// visit order of [`Direction::ALL`]: N, NE, E, SE, S, SW, W, NW. When
	/// diagonal moves are disabled, only the orthogonal neighbors are
	/// produced, in the same relative order.
	///
	/// # Arguments
	///
	/// * `x` - The column, in `0..size`.
	/// * `y` - The row, in `0..size`.
	/// * `diagonal_moves` - Whether diagonal directions participate.
	///
	/// # Returns
	///
	/// An iterator over the coordinates of the valid neighbors.
	pub fn neighbors(
		&self,
		x: usize,
		y: usize,
		diagonal_moves: bool
	) -> impl Iterator<Item = (usize, usize)> + '_
	{
		Direction::ALL
			.into_iter()
			.filter(move |direction| diagonal_moves || !direction.is_diagonal())
			.filter_map(move |direction| {
				let (dx, dy) = direction.offset();
				let nx = x as isize + dx;
				let ny = y as isize + dy;
				self.is_valid(nx, ny).then(|| (nx as usize, ny as usize))
			})
	}
}

impl Display for Grid
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for row in self.chars.chunks(self.size.max(1))
		{
			for c in row
			{
				write!(f, "{}", c)?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::grid::{Direction, Grid};

	/// A 3×3 board for neighbor enumeration tests.
	fn board() -> Grid
	{
		Grid::new(3, "abcdefghi".chars().collect())
	}

	/// Test the `index ⇄ (x, y)` bijection:
	///
	/// * [`Grid::to_index`]
	/// * [`Grid::to_coordinate`]
	#[test]
	fn test_coordinate_conversion()
	{
		let grid = board();
		assert_eq!(grid.to_coordinate(0), Some((0, 0)));
		assert_eq!(grid.to_coordinate(1), Some((1, 0)));
		assert_eq!(grid.to_coordinate(3), Some((0, 1)));
		assert_eq!(grid.to_coordinate(8), Some((2, 2)));
		assert_eq!(grid.to_coordinate(9), None);
		for index in 0..grid.len()
		{
			let (x, y) = grid.to_coordinate(index).unwrap();
			assert_eq!(grid.to_index(x, y), index);
		}
	}

	/// Test the range check, including off-board probes:
	///
	/// * [`Grid::is_valid`]
	#[test]
	fn test_is_valid()
	{
		let grid = board();
		assert!(grid.is_valid(0, 0));
		assert!(grid.is_valid(2, 2));
		assert!(!grid.is_valid(-1, 0));
		assert!(!grid.is_valid(0, -1));
		assert!(!grid.is_valid(3, 0));
		assert!(!grid.is_valid(0, 3));
	}

	/// Test that [`Grid::new`] rejects a letter count that disagrees with the
	/// stated size.
	#[test]
	#[should_panic(expected = "requires 9 characters")]
	fn test_size_mismatch()
	{
		let _ = Grid::new(3, vec!['a', 'b']);
	}

	/// Test orthogonal neighbor enumeration: order is N, E, S, W, filtered to
	/// the board.
	#[test]
	fn test_orthogonal_neighbors()
	{
		let grid = board();
		let center = grid.neighbors(1, 1, false).collect::<Vec<_>>();
		assert_eq!(center, vec![(1, 2), (2, 1), (1, 0), (0, 1)]);
		// The origin corner has no southern or western neighbors.
		let corner = grid.neighbors(0, 0, false).collect::<Vec<_>>();
		assert_eq!(corner, vec![(0, 1), (1, 0)]);
	}

	/// Test diagonal neighbor enumeration: order is N, NE, E, SE, S, SW, W,
	/// NW, filtered to the board.
	#[test]
	fn test_diagonal_neighbors()
	{
		let grid = board();
		let center = grid.neighbors(1, 1, true).collect::<Vec<_>>();
		assert_eq!(
			center,
			vec![
				(1, 2),
				(2, 2),
				(2, 1),
				(2, 0),
				(1, 0),
				(0, 0),
				(0, 1),
				(0, 2)
			]
		);
		let corner = grid.neighbors(2, 2, true).collect::<Vec<_>>();
		assert_eq!(corner, vec![(2, 1), (1, 1), (1, 2)]);
	}

	/// Test that every diagonal direction reports itself as such, and no
	/// orthogonal direction does.
	#[test]
	fn test_direction_offsets()
	{
		let diagonals = Direction::ALL
			.into_iter()
			.filter(|d| d.is_diagonal())
			.count();
		assert_eq!(diagonals, 4);
		for direction in Direction::ALL
		{
			let (dx, dy) = direction.offset();
			assert!(dx != 0 || dy != 0);
		}
	}

	/// Test the display form of a small board.
	#[test]
	fn test_display()
	{
		let grid = Grid::new(2, vec!['c', 'a', 't', 'r']);
		assert_eq!(format!("{}", grid), "ca\ntr\n");
	}
}
