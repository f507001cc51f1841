use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use band_gen_core::model::generator::BandNameGenerator;
use band_gen_core::model::name_shape::NameShape;
use band_gen_core::model::vocabulary::Vocabulary;
use band_gen_core::nlp::LexiconTagger;

/// Command-line arguments.
///
/// `band-gen <FILE>` prints one name, `band-gen <FILE> <COUNT>` prints
/// `COUNT` names, one per line. Anything else is a usage error.
#[derive(Parser, Debug)]
#[command(name = "band-gen", version, about = "Generate band names from the nouns and adjectives of a text")]
struct Cli {
	/// Text file to draw words from
	file: PathBuf,

	/// Number of band names to print
	count: Option<usize>,

	#[arg(long, help = "Prefix each name with its number and a tab")]
	numbered: bool,

	#[arg(long, help = "Seed the random generator for reproducible names")]
	seed: Option<u64>,

	#[arg(long, default_value_t = 2, help = "Shortest name, in words")]
	min_words: usize,

	#[arg(long, default_value_t = 4, help = "Longest name, in words")]
	max_words: usize,

	#[arg(long, help = "Reuse or write a vocabulary cache next to FILE")]
	cache: bool,

	#[arg(long, short, help = "Hide the progress bar and the input file summary")]
	quiet: bool,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	// The core logs the input file summary at info level; --quiet hides it
	let default_filter = if cli.quiet { "warn" } else { "warn,band_gen_core=info" };
	env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("band-gen: {e}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
	// Validate the shape before touching the file
	let shape = NameShape::new(cli.min_words, cli.max_words)?;

	let progress_bar = if cli.quiet {
		ProgressBar::hidden()
	} else {
		let bar = ProgressBar::new(100);
		bar.set_style(ProgressStyle::with_template("Tagging [{bar:40}] {pos:>3}%")?);
		bar
	};

	let vocabulary = Vocabulary::load(
		&cli.file,
		&LexiconTagger::new(),
		&mut |percent: u8| progress_bar.set_position(u64::from(percent)),
		cli.cache,
	)?;
	progress_bar.finish_and_clear();
	debug!(
		"vocabulary: {} nouns, {} adjectives",
		vocabulary.nouns().len(),
		vocabulary.adjectives().len()
	);

	let generator = BandNameGenerator::new(&vocabulary, shape)?;
	let count = cli.count.unwrap_or(1);
	let names = match cli.seed {
		Some(seed) => generator.generate_many(count, &mut StdRng::seed_from_u64(seed)),
		None => generator.generate_many(count, &mut rand::rng()),
	};

	let mut out = BufWriter::new(io::stdout().lock());
	for (i, name) in names.iter().enumerate() {
		if cli.numbered {
			writeln!(out, "{}\t{}", i + 1, name)?;
		} else {
			writeln!(out, "{name}")?;
		}
	}
	out.flush()?;

	Ok(())
}
