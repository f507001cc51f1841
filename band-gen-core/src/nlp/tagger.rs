use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::lexicon::{self, VerbForm};
use super::{Tagger, Token};
use crate::error::BandError;

/// Rule-based Penn-Treebank tagger.
///
/// Text is split on Unicode word boundaries (UAX #29), contractions are
/// split Treebank-style (`don't` → `do` + `n't`), then each token is tagged
/// by the first rule that applies:
/// 1. punctuation and numbers
/// 2. closed-class lexicon (determiners, prepositions, pronouns, auxiliaries)
/// 3. mid-sentence capitalization → proper noun
/// 4. open-class lexicon (known adjectives and verbs)
/// 5. suffixes (`-ly`, `-ing`, `-ed`, adjective endings)
/// 6. context (after `to` or a modal → verb, `-s` after a nominal → verb)
/// 7. plural or singular noun
///
/// Context is the previous tag and the next raw word, so tagging is a
/// single linear pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
	pub fn new() -> Self {
		Self
	}
}

impl Tagger for LexiconTagger {
	fn tag(&self, text: &str) -> Result<Vec<Token>, BandError> {
		let pieces: Vec<&str> = text
			.split_word_bounds()
			.filter(|segment| !segment.chars().all(char::is_whitespace))
			.flat_map(|segment| {
				let (stem, clitic) = split_clitic(segment);
				std::iter::once(stem).chain(clitic)
			})
			.collect();

		let mut tokens: Vec<Token> = Vec::with_capacity(pieces.len());
		for (index, piece) in pieces.iter().enumerate() {
			let previous = tokens.last().map(|t| t.tag.as_str());
			let tag = tag_word(piece, previous, pieces.get(index + 1).copied());
			tokens.push(Token::new(piece, tag));
		}

		debug!("tagged {} tokens", tokens.len());
		Ok(tokens)
	}
}

/// Splits a trailing contraction (`n't`, `'s`, `'ll`, ...) off `word`.
fn split_clitic(word: &str) -> (&str, Option<&str>) {
	for clitic in lexicon::CLITICS {
		if word.len() <= clitic.len() {
			continue;
		}
		let at = word.len() - clitic.len();
		if !word.is_char_boundary(at) {
			continue;
		}
		let (stem, tail) = word.split_at(at);
		if tail.eq_ignore_ascii_case(clitic) {
			return (stem, Some(tail));
		}
	}
	(word, None)
}

/// Tags that start a noun phrase: a following verb-looking word is a noun.
fn opens_noun_phrase(tag: Option<&str>) -> bool {
	matches!(tag, Some("DT" | "JJ" | "PRP$" | "POS" | "IN" | "CD"))
}

/// Pronoun-like tags after which a bare `-s` word is a third-person verb.
fn is_pronoun_subject(tag: Option<&str>) -> bool {
	matches!(tag, Some("PRP" | "EX" | "WP" | "WDT"))
}

fn is_nominal(tag: Option<&str>) -> bool {
	matches!(tag, Some("NN" | "NNP"))
}

/// Whether `next` is a verb, an auxiliary or a modal.
fn is_verb_like(next: &str) -> bool {
	let lower = next.to_lowercase();
	match lexicon::closed_class(&lower) {
		Some(tag) => tag.starts_with("VB") || tag == "MD",
		None => lexicon::verb_form(&lower).is_some(),
	}
}

/// Whether `next` can follow a verb but not a noun: an object determiner,
/// preposition, pronoun or adverb (`walks the dog`, `flows slowly`).
fn continues_after_verb(next: Option<&str>) -> bool {
	let Some(next) = next else {
		return false;
	};
	let lower = next.to_lowercase();
	match lexicon::closed_class(&lower) {
		Some(tag) => matches!(tag, "DT" | "IN" | "TO" | "RB" | "PRP" | "PRP$" | "WRB"),
		None => lower.chars().count() > 4 && lower.ends_with("ly"),
	}
}

fn is_sentence_start(tag: Option<&str>) -> bool {
	matches!(tag, None | Some("." | "``" | ":"))
}

fn punctuation_tag(word: &str) -> &'static str {
	match word {
		"." | "!" | "?" | "..." | "…" => ".",
		"," => ",",
		";" | ":" | "-" | "--" | "–" | "—" => ":",
		"(" | "[" | "{" => "(",
		")" | "]" | "}" => ")",
		"“" | "‘" | "`" => "``",
		"\"" | "'" | "”" | "’" => "''",
		"$" | "€" | "£" => "$",
		"#" => "#",
		_ => "SYM",
	}
}

fn clitic_tag(clitic: &str, previous: Option<&str>) -> &'static str {
	match clitic.replace('’', "'").to_lowercase().as_str() {
		"n't" => "RB",
		"'s" if matches!(previous, Some("PRP" | "EX" | "WP" | "DT" | "WRB")) => "VBZ",
		"'s" => "POS",
		"'ll" | "'d" => "MD",
		_ => "VBP",
	}
}

/// Tags a single token given the tag of the token before it and the word
/// after it.
fn tag_word(word: &str, previous: Option<&str>, next: Option<&str>) -> &'static str {
	if word.chars().all(|c| !c.is_alphanumeric()) {
		return punctuation_tag(word);
	}
	if word.starts_with(|c: char| c.is_ascii_digit()) {
		return "CD";
	}
	if lexicon::CLITICS.iter().any(|c| word.eq_ignore_ascii_case(c)) {
		return clitic_tag(word, previous);
	}

	let lower = word.to_lowercase();
	if let Some(tag) = lexicon::closed_class(&lower) {
		return tag;
	}
	if word.starts_with(char::is_uppercase) && !is_sentence_start(previous) {
		return "NNP";
	}
	if lexicon::is_adjective(&lower) {
		return "JJ";
	}

	let after_infinitive = matches!(previous, Some("TO" | "MD"));
	if let Some(form) = lexicon::verb_form(&lower) {
		return match form {
			VerbForm::Base if after_infinitive => "VB",
			VerbForm::Base if opens_noun_phrase(previous) => "NN",
			VerbForm::Base => "VBP",
			VerbForm::ThirdPerson if opens_noun_phrase(previous) => "NNS",
			// "the dog plays are ..." : a verb right after means this is the subject
			VerbForm::ThirdPerson if is_nominal(previous) && next.is_some_and(is_verb_like) => "NNS",
			VerbForm::ThirdPerson => "VBZ",
			VerbForm::Past if matches!(previous, Some("VBZ" | "VBP" | "VBD" | "VB")) => "VBN",
			VerbForm::Past if opens_noun_phrase(previous) => "NN",
			VerbForm::Past => "VBD",
		};
	}

	let chars = lower.chars().count();
	if chars > 4 && lower.ends_with("ly") {
		return "RB";
	}
	if chars > 4 && lower.ends_with("ing") {
		return if opens_noun_phrase(previous) { "NN" } else { "VBG" };
	}
	if chars > 3 && lower.ends_with("ed") {
		return "VBD";
	}
	if chars > 4 && lexicon::ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
		return "JJ";
	}
	if after_infinitive {
		return "VB";
	}
	if chars > 2 && lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") && !lower.ends_with("is") {
		let verb = is_pronoun_subject(previous) || (is_nominal(previous) && continues_after_verb(next));
		return if verb { "VBZ" } else { "NNS" };
	}
	"NN"
}
