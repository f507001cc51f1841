use std::cmp::min;
use std::sync::mpsc;
use std::thread;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::name_shape::NameShape;
use super::vocabulary::Vocabulary;
use crate::error::BandError;

/// Names generated per seed in batched generation.
///
/// Batches up to this size run on the caller's RNG; larger ones are split
/// into chunks of this size, each with its own derived seed.
pub const CHUNK_SIZE: usize = 1024;

/// Assembles band names from a fixed vocabulary.
///
/// # Responsibilities
/// - Draw a name length from the `NameShape`
/// - Fill every position but the last with a noun or an adjective (fair coin)
/// - End every name with a noun
///
/// # Invariants
/// - The vocabulary holds at least one noun and one adjective, checked
///   once in [`BandNameGenerator::new`]
#[derive(Clone, Copy, Debug)]
pub struct BandNameGenerator<'v> {
	vocabulary: &'v Vocabulary,
	shape: NameShape,
}

impl<'v> BandNameGenerator<'v> {
	/// Creates a generator over `vocabulary`.
	///
	/// # Errors
	/// Returns `BandError::InsufficientVocabulary` if either word list is empty.
	pub fn new(vocabulary: &'v Vocabulary, shape: NameShape) -> Result<Self, BandError> {
		vocabulary.ensure_usable()?;
		Ok(Self { vocabulary, shape })
	}

	/// Returns the word-count bounds in use.
	pub fn shape(&self) -> NameShape {
		self.shape
	}

	/// Generates one band name.
	///
	/// Draw order is fixed: the length first, then for each leading
	/// position a coin (heads = noun) followed by the word, then the final
	/// noun. A given RNG state therefore always yields the same name.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		let length = rng.random_range(self.shape.word_range());
		let mut words: Vec<&str> = Vec::with_capacity(length);

		for _ in 1..length {
			let pool = if rng.random_bool(0.5) {
				self.vocabulary.nouns()
			} else {
				self.vocabulary.adjectives()
			};
			words.push(Self::pick(pool, rng));
		}
		words.push(Self::pick(self.vocabulary.nouns(), rng));

		words.join(" ")
	}

	/// Generates `count` band names.
	///
	/// # Behavior
	/// - Up to `CHUNK_SIZE` names are drawn sequentially from `rng`.
	/// - Larger batches draw one seed per chunk from `rng`, then spread the
	///   chunks over `num_cpus` scoped threads, each chunk seeding its own
	///   `StdRng`.
	///
	/// # Notes
	/// - Output order follows chunk order, so a seeded `rng` gives the same
	///   names regardless of the number of cores.
	pub fn generate_many<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
		if count <= CHUNK_SIZE {
			return (0..count).map(|_| self.generate(rng)).collect();
		}

		let chunks = count.div_ceil(CHUNK_SIZE);
		let seeds: Vec<u64> = (0..chunks).map(|_| rng.random()).collect();
		let workers = num_cpus::get().clamp(1, chunks);
		debug!("generating {count} names in {chunks} chunks on {workers} threads");

		let mut batches: Vec<(usize, Vec<String>)> = thread::scope(|scope| {
			let (tx, rx) = mpsc::channel();
			for worker in 0..workers {
				let tx = tx.clone();
				let seeds = &seeds;
				scope.spawn(move || {
					for chunk in (worker..chunks).step_by(workers) {
						let size = min(CHUNK_SIZE, count - chunk * CHUNK_SIZE);
						let mut chunk_rng = StdRng::seed_from_u64(seeds[chunk]);
						let names: Vec<String> = (0..size).map(|_| self.generate(&mut chunk_rng)).collect();
						if tx.send((chunk, names)).is_err() {
							return;
						}
					}
				});
			}
			drop(tx);
			rx.iter().collect()
		});

		batches.sort_by_key(|(chunk, _)| *chunk);
		batches.into_iter().flat_map(|(_, names)| names).collect()
	}

	/// Picks a uniformly random word; `pool` is never empty.
	fn pick<'p, R: Rng + ?Sized>(pool: &'p [String], rng: &mut R) -> &'p str {
		&pool[rng.random_range(0..pool.len())]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::RngCore;

	/// RNG returning the same word forever.
	///
	/// All zeros pick the lowest value of every range and heads on every
	/// coin; all ones pick the highest value and tails.
	struct ConstantRng(u64);

	impl RngCore for ConstantRng {
		fn next_u32(&mut self) -> u32 {
			self.0 as u32
		}

		fn next_u64(&mut self) -> u64 {
			self.0
		}

		fn fill_bytes(&mut self, dest: &mut [u8]) {
			dest.fill(self.0 as u8);
		}
	}

	fn words(list: &[&str]) -> Vec<String> {
		list.iter().map(|w| w.to_string()).collect()
	}

	fn fox_vocabulary() -> Vocabulary {
		Vocabulary::from_lists(words(&["Fox", "Dog"]), words(&["Quick", "Brown", "Lazy"]))
	}

	#[test]
	fn rejects_empty_vocabularies() {
		let empty = Vocabulary::default();
		assert!(matches!(
			BandNameGenerator::new(&empty, NameShape::default()),
			Err(BandError::InsufficientVocabulary(_))
		));
		let no_adjectives = Vocabulary::from_lists(words(&["Dog"]), vec![]);
		assert!(matches!(
			BandNameGenerator::new(&no_adjectives, NameShape::default()),
			Err(BandError::InsufficientVocabulary("adjectives"))
		));
	}

	#[test]
	fn lowest_draws_give_shortest_noun_name() {
		let vocabulary = fox_vocabulary();
		let generator = BandNameGenerator::new(&vocabulary, NameShape::default()).unwrap();
		assert_eq!(generator.generate(&mut ConstantRng(0)), "Fox Fox");
	}

	#[test]
	fn highest_draws_give_longest_adjective_name() {
		let vocabulary = fox_vocabulary();
		let generator = BandNameGenerator::new(&vocabulary, NameShape::default()).unwrap();
		assert_eq!(generator.generate(&mut ConstantRng(u64::MAX)), "Lazy Lazy Lazy Dog");
	}

	#[test]
	fn names_respect_shape_and_vocabulary() {
		let vocabulary = fox_vocabulary();
		let generator = BandNameGenerator::new(&vocabulary, NameShape::default()).unwrap();
		let mut rng = StdRng::seed_from_u64(42);
		let mut lengths = [false; 5];

		for _ in 0..500 {
			let name = generator.generate(&mut rng);
			let parts: Vec<&str> = name.split(' ').collect();
			assert!((2..=4).contains(&parts.len()), "bad length: {name}");
			lengths[parts.len()] = true;

			let last = parts[parts.len() - 1];
			assert!(vocabulary.nouns().iter().any(|n| n == last), "{name} does not end with a noun");
			for part in &parts {
				let known = vocabulary.nouns().iter().chain(vocabulary.adjectives()).any(|w| w == part);
				assert!(known, "{part} is not in the vocabulary");
			}
		}
		assert!(lengths[2] && lengths[3] && lengths[4]);
	}

	#[test]
	fn custom_shape_bounds_length() {
		let vocabulary = fox_vocabulary();
		let shape = NameShape::new(5, 6).unwrap();
		let generator = BandNameGenerator::new(&vocabulary, shape).unwrap();
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..100 {
			let count = generator.generate(&mut rng).split(' ').count();
			assert!((5..=6).contains(&count));
		}
	}

	#[test]
	fn same_seed_same_names() {
		let vocabulary = fox_vocabulary();
		let generator = BandNameGenerator::new(&vocabulary, NameShape::default()).unwrap();
		let first = generator.generate_many(20, &mut StdRng::seed_from_u64(7));
		let second = generator.generate_many(20, &mut StdRng::seed_from_u64(7));
		assert_eq!(first, second);
	}

	#[test]
	fn large_batches_are_complete_and_reproducible() {
		let vocabulary = fox_vocabulary();
		let generator = BandNameGenerator::new(&vocabulary, NameShape::default()).unwrap();
		let count = CHUNK_SIZE * 3 + 17;

		let first = generator.generate_many(count, &mut StdRng::seed_from_u64(11));
		let second = generator.generate_many(count, &mut StdRng::seed_from_u64(11));
		assert_eq!(first.len(), count);
		assert_eq!(first, second);
		assert!(first.iter().all(|name| name.ends_with("Fox") || name.ends_with("Dog")));
	}

	#[test]
	fn zero_names() {
		let vocabulary = fox_vocabulary();
		let generator = BandNameGenerator::new(&vocabulary, NameShape::default()).unwrap();
		assert!(generator.generate_many(0, &mut rand::rng()).is_empty());
	}
}
