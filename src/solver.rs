//! # Solver
//!
//! Herein is the word-search engine. Starting from every cell of the board,
//! it walks each contiguous path of adjacent, non-repeating cells depth
//! first, advancing a dictionary [`PrefixCursor`](crate::trie::PrefixCursor)
//! one character per step. A refused advance proves that no dictionary word
//! begins with the extended prefix, so the branch is abandoned immediately;
//! this pruning is what keeps the search tractable despite the exponential
//! number of paths.

use std::rc::Rc;

use log::{debug, trace};

use crate::{dictionary::Dictionary, grid::Grid, trie::PrefixCursor};

////////////////////////////////////////////////////////////////////////////////
//                                  Solver.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The word-search engine. Holds the dictionary and the search settings; the
/// board is supplied per [`solve`](Self::solve), and the engine keeps no
/// state between solves, so one engine can serve any number of boards.
#[derive(Clone, Debug)]
#[must_use]
pub struct Solver
{
	/// The dictionary of valid words.
	dictionary: Rc<Dictionary>,

	/// Whether paths may step diagonally, in addition to orthogonally.
	diagonal_moves: bool,

	/// Found words must be strictly longer than this.
	minimum_word_length: usize
}

impl Solver
{
	/// Construct a new engine for the given dictionary and settings.
	///
	/// # Arguments
	///
	/// * `dictionary` - The dictionary of valid words.
	/// * `diagonal_moves` - Whether paths may step diagonally.
	/// * `minimum_word_length` - Found words must be strictly longer than
	///   this.
	///
	/// # Returns
	///
	/// A new engine.
	pub fn new(
		dictionary: Rc<Dictionary>,
		diagonal_moves: bool,
		minimum_word_length: usize
	) -> Self
	{
		Self {
			dictionary,
			diagonal_moves,
			minimum_word_length
		}
	}

	/// Enumerate every word on the board: each entry is a path of adjacent,
	/// pairwise-distinct cells whose letters spell a dictionary word strictly
	/// longer than the minimum. Entries appear in path-discovery order,
	/// starting cell ascending, then the fixed direction order at every
	/// branch point. A word reachable by several paths appears once per
	/// path; the engine does not deduplicate.
	///
	/// # Arguments
	///
	/// * `grid` - The board to search.
	///
	/// # Returns
	///
	/// The found words, in discovery order.
	pub fn solve(&self, grid: &Grid) -> Vec<String>
	{
		let mut found = Vec::new();
		for start in 0..grid.len()
		{
			let (x, y) = grid.to_coordinate(start).unwrap();
			trace!("starting cell: {} ({}, {})", start, x, y);
			// Each starting cell gets a fresh visited-set and a cursor at the
			// trie root, so traversals are independent of one another.
			let mut visited = vec![false; grid.len()];
			let mut cursor = self.dictionary.cursor();
			self.step(grid, &mut cursor, &mut visited, x, y, &mut found);
			// The traversal must undo every successful advance before it
			// completes.
			debug_assert_eq!(cursor.depth(), 0);
			debug_assert!(visited.iter().all(|&v| !v));
		}
		debug!("found {} words", found.len());
		found
	}

	/// The recursive step of the search: try to extend the in-progress path
	/// onto the cell at `(x, y)`.
	///
	/// The cursor and the visited-set move in lockstep with the recursion:
	/// a successful advance marks the cell and is undone, in reverse order,
	/// once every branch below it is exhausted. A refused advance leaves the
	/// cursor unchanged, so no retreat is owed on that exit path.
	///
	/// # Arguments
	///
	/// * `grid` - The board being searched.
	/// * `cursor` - The dictionary cursor, positioned at the in-progress
	///   path's prefix.
	/// * `visited` - The cells occupied by the in-progress path.
	/// * `x` - The column of the cell to extend onto.
	/// * `y` - The row of the cell to extend onto.
	/// * `found` - The result collection.
	fn step(
		&self,
		grid: &Grid,
		cursor: &mut PrefixCursor<'_, u32>,
		visited: &mut [bool],
		x: usize,
		y: usize,
		found: &mut Vec<String>
	)
	{
		let index = grid.to_index(x, y);
		// A path never repeats a cell.
		if visited[index]
		{
			return
		}
		if !cursor.advance(grid.char_at(index))
		{
			// No dictionary word begins with the extended prefix. Abandon the
			// branch without recursing.
			trace!("pruned: {}{}", cursor.current_prefix(), grid.char_at(index));
			return
		}
		if cursor.depth() > self.minimum_word_length && cursor.is_exact_match()
		{
			// No early return: longer words may share this prefix.
			debug!("found complete word: {}", cursor.current_prefix());
			found.push(cursor.current_prefix().to_string());
		}
		visited[index] = true;
		for (nx, ny) in grid.neighbors(x, y, self.diagonal_moves)
		{
			self.step(grid, cursor, visited, nx, ny, found);
		}
		visited[index] = false;
		cursor.retreat();
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
