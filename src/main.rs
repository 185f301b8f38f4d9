//! # Word Grid Solver
//!
//! A word grid is a square board of letters, like a Boggle board. Words are
//! traced by tapping out paths of adjacent cells, orthogonally or diagonally,
//! without revisiting any cell. The board is sampled from a frequency-weighted
//! letter pool, so most boards carry a healthy crop of real words.
//!
//! This program generates word grid boards and solves them. Via command line
//! options, the user can specify the dictionary, the board size and movement
//! rules, and a minimum word count below which the board is discarded and
//! regenerated. The board and its word list are written to standard output.

use std::rc::Rc;

use clap::{Parser, Subcommand};
use log::{debug, trace, warn};
use rand::{rngs::StdRng, SeedableRng};

use wordgrid_solver::{
	dictionary::Dictionary,
	generator::{generate, WeightedAlphabet},
	solver::Solver
};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for generating and solving word grid boards.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0")]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict")]
	directory: String,

	/// The name of the dictionary. This is the name shared by the text and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "words")]
	dictionary: String,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Copy, Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// Generate a board, solve it, and write the board and its word list to
	/// standard output. The board is regenerated if it carries too few words.
	Solve {
		/// The edge length of the board.
		#[arg(short = 's', long, default_value = "4")]
		grid_size: usize,

		/// The seed for board sampling. Random if omitted.
		#[arg(long)]
		seed: Option<u64>,

		/// Permit diagonal moves between consecutive cells.
		#[arg(short = 'g', long)]
		diagonal_moves: bool,

		/// Found words must be strictly longer than this.
		#[arg(short = 'l', long, default_value = "3")]
		minimum_word_length: usize,

		/// Regenerate the board unless strictly more than this many words are
		/// found.
		#[arg(short = 'c', long, default_value = "0")]
		minimum_word_count: usize,

		/// Suppress emission of the board and word list to standard output.
		#[arg(short = 'q', long)]
		quiet: bool
	}
}

/// The maximum number of consecutive boards to sample in pursuit of the
/// minimum word count before giving up.
const GENERATION_ATTEMPT_LIMIT: usize = 20;

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::init();

	// Parse the command line options.
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	// Open the dictionary, creating the binary dictionary if necessary.
	let dictionary = Dictionary::open(&opts.directory, &opts.dictionary)
		.unwrap_or_else(|_|
			panic!("Failed to open dictionary: {}/{}.dict or {0}/{1}.txt",
				opts.directory,
				opts.dictionary
			)
		);

	// Execute the appropriate subcommand.
	match opts.command
	{
		Command::Generate =>
		{
			trace!("Exiting after generating binary dictionary");
		},
		Command::Solve {
			grid_size,
			seed,
			diagonal_moves,
			minimum_word_length,
			minimum_word_count,
			quiet
		} =>
		{
			let alphabet = WeightedAlphabet::default();
			let mut rng = match seed
			{
				Some(seed) => StdRng::seed_from_u64(seed),
				None => StdRng::from_entropy()
			};
			let solver = Solver::new(
				Rc::new(dictionary),
				diagonal_moves,
				minimum_word_length
			);
			// Sample boards until one carries enough words, within the
			// attempt limit.
			for attempt in 1..=GENERATION_ATTEMPT_LIMIT
			{
				let grid = generate(grid_size, &alphabet, &mut rng);
				let words = solver.solve(&grid);
				if words.len() > minimum_word_count
				{
					if !quiet
					{
						print!("{}", grid);
						println!();
						print_words(words);
					}
					return
				}
				warn!(
					"Board {} of {} carried only {} words, wanted more than \
					{}. Trying again…",
					attempt,
					GENERATION_ATTEMPT_LIMIT,
					words.len(),
					minimum_word_count
				);
			}
			eprintln!(
				"Failed to generate a board with more than {} words within \
				{} attempts",
				minimum_word_count,
				GENERATION_ATTEMPT_LIMIT
			);
			std::process::exit(1);
		}
	}
}

/// Print the found words to standard output, one per line.
///
/// # Arguments
///
/// * `words` - The found words, in discovery order.
fn print_words(words: Vec<String>)
{
	for word in words
	{
		println!("{}", word);
	}
}
