//! # Dictionary
//!
//! Herein is support for dictionary construction and loading. All runtime
//! operations are performed against a [`Dictionary`], which is a prefix tree
//! mapping each word to its position in the source word list.

use std::{
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::trie::{PrefixCursor, Trie};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is a [`Trie`] mapping each word to its index in the word
/// list that populated it. The solver only consults exactness, but the index
/// lets a caller recover which entry matched.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary(Trie<u32>);

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Get the number of words in the dictionary.
	///
	/// # Returns
	///
	/// The number of words in the dictionary.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Check if the dictionary contains the given word.
	///
	/// # Arguments
	///
	/// * `word` - The word to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &str) -> bool { self.0.contains(word) }

	/// Check if the dictionary contains a word with the given prefix.
	///
	/// # Arguments
	///
	/// * `prefix` - The prefix to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains a word with the given prefix, `false`
	/// otherwise.
	#[inline]
	#[must_use]
	pub fn contains_prefix(&self, prefix: &str) -> bool
	{
		self.0.contains_prefix(prefix)
	}

	/// Get the word-list index of the given word.
	///
	/// # Arguments
	///
	/// * `word` - The word to look up.
	///
	/// # Returns
	///
	/// The index of the word in the word list that populated the dictionary,
	/// if the word is present.
	#[inline]
	#[must_use]
	pub fn index_of(&self, word: &str) -> Option<u32>
	{
		self.0.get(word).copied()
	}

	/// Obtain a fresh cursor positioned at the root of the dictionary's trie,
	/// for incremental matching in sync with an external traversal.
	///
	/// # Returns
	///
	/// A cursor positioned at the root.
	#[inline]
	pub fn cursor(&self) -> PrefixCursor<'_, u32> { self.0.cursor() }

	/// Populate the dictionary with the given words, in order. Each word is
	/// associated with its position in `words`, offset by the number of words
	/// already present. Words are expected to be lowercase and free of
	/// whitespace; use [`read_from_file`](Self::read_from_file) to normalize
	/// raw input.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			let index = self.0.len() as u32;
			self.0.insert(word.as_ref(), index);
		}
	}

	/// Open a dictionary with the given name. Only the specified directory
	/// will be searched. `name` denotes the dictionary file, sans the
	/// extension. If a binary dictionary (`<name>.dict`) exists _and_ is newer
	/// than the text file (`<name>.txt`), it will be read; otherwise, a text
	/// file will be read and a binary dictionary will be created (to optimize
	/// future reads).
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// Compare the modification times of the binary and text files, using
		// the binary dictionary only if it is newer than the text dictionary.
		// If anything goes wrong, fall back to reading the text file. There is
		// no need to check for the existence of the binary dictionary
		// explicitly, as the `metadata` call fails if it doesn't exist.
		if dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false)
		{
			let dictionary = Self::deserialize_from_file(&dict_path);
			trace!("Read binary dictionary: {}", dict_path.display());
			dictionary
		}
		else
		{
			let dictionary = Self::read_from_file(&txt_path)?;
			trace!("Read text dictionary: {}", txt_path.display());
			match dictionary.serialize_to_file(&dict_path)
			{
				Ok(_) =>
				{
					trace!("Wrote binary dictionary: {}", dict_path.display())
				},
				Err(e) => warn!(
					"Failed to write binary dictionary: {}: {}",
					dict_path.display(),
					e
				)
			}
			Ok(dictionary)
		}
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word. Words are trimmed and
	/// lowercased; blank lines are skipped.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let mut words = Vec::new();
		for line in reader.lines()
		{
			let word = line?.trim().to_lowercase();
			if !word.is_empty()
			{
				words.push(word);
			}
		}
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		trace!("Loaded {} words", dictionary.len());
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let dictionary = bincode::deserialize(&content)
			.map_err(|_e| ErrorKind::InvalidData)?;
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file. The dictionary is
	/// serialized in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or written, an error is returned.
	/// * If the dictionary cannot be serialized, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content =
			bincode::serialize(self).map_err(|_e| ErrorKind::InvalidData)?;
		file.write_all(&content)?;
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{fs, io::Write};

	use tempfile::{NamedTempFile, TempDir};

	use crate::dictionary::Dictionary;

	/// The path to the word list shipped with the crate.
	#[inline]
	#[must_use]
	const fn test_path() -> &'static str { "dict/words.txt" }

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::contains`]
	/// * [`Dictionary::contains_prefix`]
	/// * [`Dictionary::index_of`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		assert!(!dictionary.contains("hello"));
		assert!(!dictionary.contains("world"));
		dictionary.populate(&["hello", "world"]);
		assert_eq!(dictionary.len(), 2);
		assert!(dictionary.contains("hello"));
		assert!(dictionary.contains("world"));
		assert!(!dictionary.contains("hell"));
		assert!(dictionary.contains_prefix("wor"));
		assert!(!dictionary.contains_prefix("xyz"));
		assert_eq!(dictionary.index_of("hello"), Some(0));
		assert_eq!(dictionary.index_of("world"), Some(1));
		assert_eq!(dictionary.index_of("words"), None);
	}

	/// Test reading a dictionary from a file, including normalization of the
	/// raw word list:
	///
	/// * [`Dictionary::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "Cat\n  car  \n\nCART\n").unwrap();
		let dictionary = Dictionary::read_from_file(file.path()).unwrap();
		assert_eq!(dictionary.len(), 3);
		assert!(dictionary.contains("cat"));
		assert!(dictionary.contains("car"));
		assert!(dictionary.contains("cart"));
		assert!(!dictionary.contains("Cat"));
	}

	/// Test reading the word list shipped with the crate.
	#[test]
	fn test_read_shipped_word_list()
	{
		let dictionary = Dictionary::read_from_file(test_path()).unwrap();
		assert!(!dictionary.is_empty());
		// These words had better be in the dictionary…
		assert!(dictionary.contains("cat"));
		assert!(dictionary.contains("word"));
	}

	/// Test serializing and deserializing a dictionary:
	///
	/// * [`Dictionary::serialize_to_file`]
	/// * [`Dictionary::deserialize_from_file`]
	#[test]
	fn test_serialize_to_file()
	{
		let mut dictionary = Dictionary::new();
		dictionary.populate(&["cat", "car", "cart", "dog"]);
		let file = NamedTempFile::new().unwrap();
		dictionary.serialize_to_file(file.path()).unwrap();
		let deserialized =
			Dictionary::deserialize_from_file(file.path()).unwrap();
		assert_eq!(dictionary, deserialized);
	}

	/// Test that [`Dictionary::open`] creates the binary dictionary on first
	/// use and prefers it thereafter.
	#[test]
	fn test_open()
	{
		let dir = TempDir::new().unwrap();
		let txt_path = dir.path().join("words.txt");
		fs::write(&txt_path, "cat\ncar\ncart\n").unwrap();
		let dictionary = Dictionary::open(dir.path(), "words").unwrap();
		assert_eq!(dictionary.len(), 3);
		let dict_path = dir.path().join("words.dict");
		assert!(dict_path.exists());
		// The second open reads the binary dictionary; the content must be
		// indistinguishable.
		let reopened = Dictionary::open(dir.path(), "words").unwrap();
		assert_eq!(dictionary, reopened);
	}
}
