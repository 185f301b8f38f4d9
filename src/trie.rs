//! # Trie
//!
//! Herein is the prefix tree that backs the dictionary, and the
//! backtrackable cursor that the solver drives in lockstep with its own
//! depth-first traversal of the board. The cursor is the pruning primitive:
//! a refused [`advance`](PrefixCursor::advance) proves that no dictionary
//! word begins with the extended prefix, so the search abandons that branch
//! immediately.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// The index of the root node in a trie's node arena.
const ROOT: usize = 0;

/// A single node of a [`Trie`]. Every node other than the root represents one
/// character transition from its parent; the path of characters from the root
/// to a node spells exactly the prefix that the node represents.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
struct Node<V>
{
	/// The children of this node, keyed by the character of the transition.
	/// The map is ordered, so child enumeration is deterministic.
	children: BTreeMap<char, usize>,

	/// The terminal value. Present iff some key ends at this node.
	value: Option<V>
}

impl<V> Default for Node<V>
{
	fn default() -> Self
	{
		Self {
			children: BTreeMap::new(),
			value: None
		}
	}
}

/// An ordered prefix tree mapping string keys to values. Nodes live in a
/// single arena and refer to one another by index, so the whole structure
/// serializes cleanly and shares no pointers.
///
/// A trie is built once from a word list and is immutable thereafter as far
/// as the solver is concerned; [`PrefixCursor`]s borrow it read-only, so any
/// number of cursors may walk the same trie at the same time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Trie<V>
{
	/// The node arena. The first element is always the root, which carries no
	/// character of its own.
	nodes: Vec<Node<V>>,

	/// The number of keys stored in the trie.
	len: usize
}

impl<V> Default for Trie<V>
{
	fn default() -> Self
	{
		Self {
			nodes: vec![Node::default()],
			len: 0
		}
	}
}

impl<V> Trie<V>
{
	/// Construct an empty trie. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty trie.
	#[inline]
	pub fn new() -> Self { Default::default() }

	/// Construct a trie from an ordered sequence of key-value pairs. Later
	/// duplicate keys overwrite the value stored at that terminal node.
	///
	/// # Arguments
	///
	/// * `entries` - The key-value pairs to insert, in order.
	///
	/// # Returns
	///
	/// A trie containing the given entries.
	pub fn build<K, I>(entries: I) -> Self
	where
		K: AsRef<str>,
		I: IntoIterator<Item = (K, V)>
	{
		let mut trie = Self::new();
		for (key, value) in entries
		{
			trie.insert(key.as_ref(), value);
		}
		trie
	}

	/// Check if the trie is empty.
	///
	/// # Returns
	///
	/// `true` if the trie contains no keys, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.len == 0 }

	/// Get the number of keys stored in the trie.
	///
	/// # Returns
	///
	/// The number of keys stored in the trie.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.len }

	/// Insert a key-value pair. Inserting a key that is already present
	/// overwrites the value at that terminal node.
	///
	/// # Arguments
	///
	/// * `key` - The key to insert.
	/// * `value` - The value to associate with the key.
	///
	/// # Returns
	///
	/// The value previously associated with the key, if any.
	pub fn insert(&mut self, key: &str, value: V) -> Option<V>
	{
		let mut current = ROOT;
		for c in key.chars()
		{
			let next = match self.nodes[current].children.get(&c).copied()
			{
				Some(child) => child,
				None =>
				{
					let child = self.nodes.len();
					self.nodes.push(Node::default());
					self.nodes[current].children.insert(c, child);
					child
				}
			};
			current = next;
		}
		let previous = self.nodes[current].value.replace(value);
		if previous.is_none()
		{
			self.len += 1;
		}
		previous
	}

	/// Get the value associated with the given key.
	///
	/// # Arguments
	///
	/// * `key` - The key to look up.
	///
	/// # Returns
	///
	/// The value associated with the key, if the key is present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&V>
	{
		self.node_for(key)
			.and_then(|node| self.nodes[node].value.as_ref())
	}

	/// Check if the trie contains the given key.
	///
	/// # Arguments
	///
	/// * `key` - The key to check.
	///
	/// # Returns
	///
	/// `true` if the trie contains the key, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, key: &str) -> bool { self.get(key).is_some() }

	/// Check if the trie contains a key with the given prefix.
	///
	/// # Arguments
	///
	/// * `prefix` - The prefix to check.
	///
	/// # Returns
	///
	/// `true` if the trie contains a key with the given prefix, `false`
	/// otherwise.
	#[must_use]
	pub fn contains_prefix(&self, prefix: &str) -> bool
	{
		// Keys are never removed, so every non-root node has a terminal node
		// at or below it. The root is the one node that can exist without any
		// key beneath it.
		if prefix.is_empty()
		{
			!self.is_empty()
		}
		else
		{
			self.node_for(prefix).is_some()
		}
	}

	/// Obtain a fresh cursor positioned at the root of this trie. The cursor
	/// borrows the trie for its lifetime.
	///
	/// # Returns
	///
	/// A cursor positioned at the root.
	#[inline]
	pub fn cursor(&self) -> PrefixCursor<'_, V> { PrefixCursor::new(self) }

	/// Walk the trie along the characters of `key`.
	///
	/// # Arguments
	///
	/// * `key` - The string to walk.
	///
	/// # Returns
	///
	/// The index of the node reached by consuming all of `key`, or `None` if
	/// the walk fell off the tree.
	fn node_for(&self, key: &str) -> Option<usize>
	{
		let mut current = ROOT;
		for c in key.chars()
		{
			current = *self.nodes[current].children.get(&c)?;
		}
		Some(current)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Prefix cursor.                               //
////////////////////////////////////////////////////////////////////////////////

/// A stateful, backtrackable walker over a [`Trie`]. The cursor tracks the
/// trie node corresponding to a prefix assembled one character at a time, so
/// an external traversal can grow and shrink its candidate word in strict
/// LIFO order without ever re-deriving the trie position from scratch.
///
/// Every successful [`advance`](Self::advance) must eventually be undone by
/// exactly one [`retreat`](Self::retreat); a failed `advance` leaves the
/// cursor unchanged and owes nothing.
#[derive(Clone, Debug)]
#[must_use]
pub struct PrefixCursor<'a, V>
{
	/// The trie being walked.
	trie: &'a Trie<V>,

	/// The node path from the root to the current position. The first element
	/// is always the root.
	path: Vec<usize>,

	/// The characters accepted since the last reset, in order.
	prefix: String
}

impl<'a, V> PrefixCursor<'a, V>
{
	/// Construct a cursor positioned at the root of the given trie.
	///
	/// # Arguments
	///
	/// * `trie` - The trie to walk.
	///
	/// # Returns
	///
	/// A cursor positioned at the root.
	fn new(trie: &'a Trie<V>) -> Self
	{
		Self {
			trie,
			path: vec![ROOT],
			prefix: String::new()
		}
	}

	/// Return the cursor to the root, clearing the accumulated prefix.
	#[inline]
	pub fn reset(&mut self)
	{
		self.path.truncate(1);
		self.prefix.clear();
	}

	/// Try to extend the accumulated prefix by one character. On success the
	/// cursor moves to the matching child; on failure the cursor is left
	/// unchanged.
	///
	/// # Arguments
	///
	/// * `c` - The character to append.
	///
	/// # Returns
	///
	/// `true` if some key in the trie begins with the extended prefix,
	/// `false` otherwise.
	pub fn advance(&mut self, c: char) -> bool
	{
		let current = *self.path.last().unwrap();
		match self.trie.nodes[current].children.get(&c)
		{
			Some(&child) =>
			{
				self.path.push(child);
				self.prefix.push(c);
				true
			},
			None => false
		}
	}

	/// Move the cursor back to the parent of the current node, shrinking the
	/// accumulated prefix by one character.
	///
	/// # Panics
	///
	/// If the cursor is at the root. Traversals that pair every successful
	/// [`advance`](Self::advance) with exactly one retreat never trip this.
	pub fn retreat(&mut self)
	{
		assert!(self.path.len() > 1, "retreat past the root of the trie");
		self.path.pop();
		self.prefix.pop();
	}

	/// Check if the accumulated prefix is itself a complete key.
	///
	/// # Returns
	///
	/// `true` if the current node carries a terminal value, `false`
	/// otherwise.
	#[inline]
	#[must_use]
	pub fn is_exact_match(&self) -> bool { self.exact_match().is_some() }

	/// Get the value stored for the accumulated prefix.
	///
	/// # Returns
	///
	/// The terminal value at the current node, if the accumulated prefix is
	/// itself a complete key.
	#[must_use]
	pub fn exact_match(&self) -> Option<&V>
	{
		let current = *self.path.last().unwrap();
		self.trie.nodes[current].value.as_ref()
	}

	/// Get the characters accepted since the last reset, in order.
	///
	/// # Returns
	///
	/// The accumulated prefix.
	#[inline]
	#[must_use]
	pub fn current_prefix(&self) -> &str { &self.prefix }

	/// Get the number of characters accepted since the last reset.
	///
	/// # Returns
	///
	/// The length of the accumulated prefix, in characters.
	#[inline]
	#[must_use]
	pub fn depth(&self) -> usize { self.path.len() - 1 }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::trie::Trie;

	/// Test basic insertion and lookup:
	///
	/// * [`Trie::insert`]
	/// * [`Trie::get`]
	/// * [`Trie::contains`]
	/// * [`Trie::contains_prefix`]
	#[test]
	fn test_insert()
	{
		let mut trie = Trie::new();
		assert!(trie.is_empty());
		assert_eq!(trie.len(), 0);
		assert!(!trie.contains("cat"));
		assert!(!trie.contains_prefix(""));
		assert!(!trie.contains_prefix("c"));

		assert_eq!(trie.insert("cat", 0u32), None);
		assert_eq!(trie.insert("cart", 1), None);
		assert_eq!(trie.len(), 2);
		assert!(trie.contains("cat"));
		assert!(trie.contains("cart"));
		assert!(!trie.contains("ca"));
		assert!(!trie.contains("carts"));
		assert!(trie.contains_prefix(""));
		assert!(trie.contains_prefix("ca"));
		assert!(trie.contains_prefix("car"));
		assert!(trie.contains_prefix("cart"));
		assert!(!trie.contains_prefix("dog"));
		assert_eq!(trie.get("cat"), Some(&0));
		assert_eq!(trie.get("cart"), Some(&1));
		assert_eq!(trie.get("car"), None);
	}

	/// Test that inserting a duplicate key overwrites the stored value and
	/// does not grow the trie.
	#[test]
	fn test_insert_duplicate()
	{
		let mut trie = Trie::new();
		assert_eq!(trie.insert("cat", 0u32), None);
		assert_eq!(trie.insert("cat", 7), Some(0));
		assert_eq!(trie.len(), 1);
		assert_eq!(trie.get("cat"), Some(&7));
	}

	/// Test bulk construction from an ordered sequence, including the
	/// last-write-wins policy for duplicate keys:
	///
	/// * [`Trie::build`]
	#[test]
	fn test_build()
	{
		let trie = Trie::build([("cat", 0u32), ("car", 1), ("cat", 2)]);
		assert_eq!(trie.len(), 2);
		assert_eq!(trie.get("cat"), Some(&2));
		assert_eq!(trie.get("car"), Some(&1));
	}

	/// Test forward movement of the cursor, including that a refused advance
	/// leaves the cursor unchanged:
	///
	/// * [`PrefixCursor::advance`]
	/// * [`PrefixCursor::is_exact_match`]
	/// * [`PrefixCursor::current_prefix`]
	#[test]
	fn test_cursor_advance()
	{
		let trie = Trie::build([("cat", 0u32), ("cart", 1)]);
		let mut cursor = trie.cursor();
		assert_eq!(cursor.depth(), 0);
		assert_eq!(cursor.current_prefix(), "");
		assert!(!cursor.is_exact_match());

		assert!(cursor.advance('c'));
		assert!(cursor.advance('a'));
		assert_eq!(cursor.current_prefix(), "ca");
		assert!(!cursor.is_exact_match());

		// No key begins with "cab", so the cursor must refuse the move and
		// stay where it is.
		assert!(!cursor.advance('b'));
		assert_eq!(cursor.current_prefix(), "ca");
		assert_eq!(cursor.depth(), 2);

		assert!(cursor.advance('t'));
		assert!(cursor.is_exact_match());
		assert_eq!(cursor.exact_match(), Some(&0));
		assert_eq!(cursor.current_prefix(), "cat");
	}

	/// Test backward movement of the cursor:
	///
	/// * [`PrefixCursor::retreat`]
	/// * [`PrefixCursor::reset`]
	#[test]
	fn test_cursor_retreat()
	{
		let trie = Trie::build([("cat", 0u32), ("cart", 1)]);
		let mut cursor = trie.cursor();
		assert!(cursor.advance('c'));
		assert!(cursor.advance('a'));
		assert!(cursor.advance('r'));
		assert!(cursor.advance('t'));
		assert!(cursor.is_exact_match());

		cursor.retreat();
		assert_eq!(cursor.current_prefix(), "car");
		assert!(!cursor.is_exact_match());
		cursor.retreat();
		assert_eq!(cursor.current_prefix(), "ca");

		// A different branch is reachable after backtracking.
		assert!(cursor.advance('t'));
		assert!(cursor.is_exact_match());

		cursor.reset();
		assert_eq!(cursor.depth(), 0);
		assert_eq!(cursor.current_prefix(), "");
		assert!(cursor.advance('c'));
	}

	/// Test that retreating past the root is a programming error.
	#[test]
	#[should_panic(expected = "retreat past the root")]
	fn test_cursor_retreat_at_root()
	{
		let trie = Trie::build([("cat", 0u32)]);
		let mut cursor = trie.cursor();
		cursor.retreat();
	}

	/// Test that multiple cursors can walk the same trie independently.
	#[test]
	fn test_independent_cursors()
	{
		let trie = Trie::build([("cat", 0u32), ("dog", 1)]);
		let mut a = trie.cursor();
		let mut b = trie.cursor();
		assert!(a.advance('c'));
		assert!(b.advance('d'));
		assert!(a.advance('a'));
		assert!(b.advance('o'));
		assert!(a.advance('t'));
		assert!(b.advance('g'));
		assert_eq!(a.current_prefix(), "cat");
		assert_eq!(b.current_prefix(), "dog");
		assert_eq!(a.exact_match(), Some(&0));
		assert_eq!(b.exact_match(), Some(&1));
	}
}
