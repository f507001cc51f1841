/// Contraction suffixes split off a word before tagging, in both
/// apostrophe styles. Longer suffixes come first.
pub(crate) const CLITICS: [&str; 14] = [
	"n't", "n’t", "'re", "’re", "'ll", "’ll", "'ve", "’ve", "'s", "’s", "'d", "’d", "'m", "’m",
];

/// Tag of a closed-class word (determiners, prepositions, pronouns,
/// auxiliaries, ...), looked up by its lower-cased form.
pub(crate) fn closed_class(word: &str) -> Option<&'static str> {
	let tag = match word {
		"the" | "a" | "an" | "this" | "that" | "these" | "those" | "every" | "each" | "some" | "any"
		| "no" | "another" | "all" | "both" | "either" | "neither" => "DT",
		"of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "over" | "under" | "into"
		| "onto" | "upon" | "about" | "above" | "below" | "across" | "after" | "against" | "along"
		| "among" | "around" | "before" | "behind" | "beneath" | "beside" | "between" | "beyond"
		| "during" | "except" | "inside" | "near" | "off" | "out" | "outside" | "since"
		| "through" | "throughout" | "till" | "toward" | "towards" | "until" | "within"
		| "without" | "via" | "because" | "although" | "though" | "while" | "whereas" | "if"
		| "unless" | "than" | "like" | "as" | "whether" | "per" => "IN",
		"to" => "TO",
		"and" | "or" | "but" | "nor" | "yet" => "CC",
		"i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "her" | "us" | "them"
		| "myself" | "yourself" | "himself" | "herself" | "itself" | "ourselves" | "themselves" => "PRP",
		"my" | "your" | "his" | "its" | "our" | "their" => "PRP$",
		"can" | "could" | "may" | "might" | "must" | "shall" | "should" | "will" | "would" | "ca"
		| "wo" | "sha" => "MD",
		"there" => "EX",
		"which" => "WDT",
		"who" | "whom" | "what" => "WP",
		"whose" => "WP$",
		"when" | "where" | "why" | "how" => "WRB",
		"is" | "has" | "does" => "VBZ",
		"am" | "are" | "have" | "do" => "VBP",
		"was" | "were" | "had" | "did" => "VBD",
		"be" => "VB",
		"been" => "VBN",
		"being" => "VBG",
		"not" | "never" | "very" | "too" | "also" | "just" | "only" | "often" | "always" | "again"
		| "still" | "already" | "here" | "now" | "then" | "soon" | "quite" | "rather" | "even"
		| "almost" | "ever" | "perhaps" | "so" | "away" | "back" | "down" | "up" | "once" => "RB",
		"oh" | "yes" | "hey" | "ah" | "wow" => "UH",
		_ => return None,
	};
	Some(tag)
}

/// Common adjectives that carry no adjective-like suffix.
const ADJECTIVES: &[&str] = &[
	"quick", "brown", "lazy", "big", "small", "little", "old", "new", "young", "good", "bad",
	"great", "high", "low", "long", "short", "red", "blue", "green", "black", "white", "yellow",
	"purple", "grey", "gray", "dark", "bright", "happy", "sad", "strange", "wild", "cold", "hot",
	"warm", "cool", "soft", "hard", "loud", "quiet", "sweet", "bitter", "rich", "poor", "strong",
	"weak", "heavy", "empty", "full", "deep", "slow", "early", "late", "golden", "broken",
	"ancient", "modern", "electric", "gentle", "proud", "brave", "angry", "lonely", "holy",
	"free", "true", "false", "fine", "clear", "final", "simple", "huge", "tiny", "rare", "lost",
	"pale", "sick", "dead", "alive", "grand", "silent", "savage", "crazy", "rusty", "dirty",
	"pretty", "ugly", "silly", "fierce", "noble", "royal", "cosmic", "wooden", "frozen", "hollow",
	"secret", "sacred", "sudden", "tired", "wise", "wrong", "calm", "certain", "fresh", "large",
	"narrow", "wide", "thin", "thick", "smooth", "rough", "sharp", "dull", "clean", "sorry",
	"real", "whole", "main", "public", "private", "human", "social", "local", "same", "other",
	"next", "ready", "busy", "easy", "distant", "eternal", "infinite",
];

/// Returns `true` if `word` (lower-cased) is a known adjective.
pub(crate) fn is_adjective(word: &str) -> bool {
	ADJECTIVES.contains(&word)
}

/// Base forms of common verbs. Inflected `-s`/`-es`/`-ed` forms are
/// derived from these.
const VERBS: &[&str] = &[
	"jump", "run", "walk", "go", "come", "see", "say", "make", "take", "get", "give", "know",
	"think", "look", "want", "use", "find", "tell", "ask", "work", "seem", "feel", "try", "leave",
	"call", "play", "sing", "dance", "love", "hate", "eat", "drink", "sleep", "fly", "fall",
	"rise", "shine", "burn", "break", "bring", "hold", "keep", "let", "begin", "show", "hear",
	"live", "believe", "sit", "stand", "lose", "pay", "meet", "continue", "learn", "change",
	"lead", "understand", "watch", "follow", "stop", "create", "speak", "read", "spend", "grow",
	"win", "offer", "remember", "consider", "appear", "buy", "wait", "serve", "die", "send",
	"expect", "build", "stay", "reach", "kill", "remain", "suggest", "raise", "pass", "sell",
	"decide", "pull", "push", "cry", "laugh", "smile", "move", "turn", "start", "open", "close",
	"need", "help", "wish", "hope", "carry", "climb", "swim", "drive", "ride", "write", "dream",
	"enjoy", "prefer", "listen", "travel", "visit", "explain", "return", "arrive", "fix", "mix",
	"wash", "kiss", "teach", "catch", "throw", "wear", "fight", "forget", "hide", "steal", "seek",
	"shout", "whisper", "wander", "hum",
];

/// Irregular past forms of common verbs.
const IRREGULAR_PAST: &[&str] = &[
	"went", "came", "said", "made", "took", "got", "gave", "knew", "thought", "found", "told",
	"felt", "ran", "sang", "flew", "fell", "rose", "shone", "broke", "brought", "held", "kept",
	"began", "heard", "sat", "stood", "paid", "met", "spoke", "grew", "won", "bought", "sent",
	"built", "drove", "rode", "wrote", "swam", "ate", "drank", "slept", "became", "forgot",
	"saw", "threw", "caught", "taught", "fought", "wore", "hid", "stole", "sought", "shot",
	"forgave", "chose", "froze", "woke", "understood",
];

/// Inflection of a known verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VerbForm {
	Base,
	ThirdPerson,
	Past,
}

/// Recognizes `word` (lower-cased) as a form of a known verb.
pub(crate) fn verb_form(word: &str) -> Option<VerbForm> {
	if VERBS.contains(&word) {
		return Some(VerbForm::Base);
	}
	if IRREGULAR_PAST.contains(&word) {
		return Some(VerbForm::Past);
	}
	let third = word
		.strip_suffix("es")
		.filter(|stem| VERBS.contains(stem))
		.or_else(|| word.strip_suffix('s').filter(|stem| VERBS.contains(stem)))
		.or_else(|| {
			word.strip_suffix("ies")
				.filter(|stem| VERBS.iter().any(|v| v.strip_suffix('y') == Some(*stem)))
		});
	if third.is_some() {
		return Some(VerbForm::ThirdPerson);
	}
	let past = word
		.strip_suffix("ed")
		.filter(|stem| VERBS.contains(stem))
		.or_else(|| word.strip_suffix('d').filter(|stem| VERBS.contains(stem)));
	past.map(|_| VerbForm::Past)
}

/// Suffixes that mark a word as an adjective.
pub(crate) const ADJECTIVE_SUFFIXES: &[&str] = &[
	"ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "esque",
];
