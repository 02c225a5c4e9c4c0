use ngram_writer_core::NGramError;
use ngram_writer_core::io::tokenize;
use ngram_writer_core::model::ngram_table::NGramTable;

const CORPUS: &str = "the cat sat on the mat and the cat ran to the mat";

#[test]
fn test_concrete_bigram_table() {
	let table = NGramTable::build(&tokenize("the cat sat on the mat"), 2).unwrap();

	let succ = |w: &str| -> Vec<String> {
		table
			.successors(&[w.to_owned()])
			.map(|s| s.as_slice().to_vec())
			.unwrap_or_default()
	};

	assert_eq!(table.len(), 5);
	assert_eq!(succ("the"), vec!["cat", "mat"]);
	assert_eq!(succ("cat"), vec!["sat"]);
	assert_eq!(succ("sat"), vec!["on"]);
	assert_eq!(succ("on"), vec!["the"]);
	// Wraparound: the last word is followed by the first one
	assert_eq!(succ("mat"), vec!["the"]);
}

#[test]
fn test_order_one_has_single_empty_key() {
	let tokens = tokenize(CORPUS);
	let table = NGramTable::build(&tokens, 1).unwrap();

	assert_eq!(table.len(), 1);
	let key = table.key_at(0).unwrap();
	assert!(key.is_empty());
	assert_eq!(table.successors(&[]).unwrap().as_slice(), tokens.as_slice());
}

#[test]
fn test_observation_count_equals_document_length() {
	let tokens = tokenize(CORPUS);
	for n in 1..=tokens.len() {
		let table = NGramTable::build(&tokens, n).unwrap();
		let total: usize = table.iter().map(|(_, s)| s.len()).sum();

		assert_eq!(total, tokens.len(), "n = {n}");
		assert_eq!(table.observations(), tokens.len());
		assert!(table.len() <= tokens.len());
		assert!(table.iter().all(|(key, s)| key.len() == n - 1 && !s.is_empty()));
	}
}

#[test]
fn test_every_circular_window_is_recorded() {
	let tokens = tokenize(CORPUS);
	let len = tokens.len();
	for n in 2..=5 {
		let table = NGramTable::build(&tokens, n).unwrap();
		for i in 0..len {
			let window: Vec<String> = (0..n - 1).map(|k| tokens[(i + k) % len].clone()).collect();
			let next = &tokens[(i + n - 1) % len];

			let successors = table.successors(&window).expect("window missing from table");
			assert!(successors.iter().any(|w| w == next.as_str()), "n = {n}, i = {i}");
		}
	}
}

#[test]
fn test_repeated_windows_share_one_entry() {
	let table = NGramTable::build(&tokenize(CORPUS), 3).unwrap();
	let key = tokenize("the cat");
	let successors = table.successors(&key).unwrap();

	assert_eq!(successors.as_slice(), &["sat".to_owned(), "ran".to_owned()]);
	assert_eq!(table.keys().filter(|k| k.as_slice() == key.as_slice()).count(), 1);
}

#[test]
fn test_frequencies_are_preserved() {
	let table = NGramTable::build(&tokenize("a x a x a y"), 2).unwrap();
	let successors = table.successors(&["a".to_owned()]).unwrap();

	assert_eq!(successors.len(), 3);
	assert_eq!(successors.count("x"), 2);
	assert_eq!(successors.count("y"), 1);
}

#[test]
fn test_empty_corpus_rejected_for_any_order() {
	for n in 0..5 {
		assert!(matches!(NGramTable::build(&[], n), Err(NGramError::EmptyCorpus)));
	}
}

#[test]
fn test_single_word_document() {
	let tokens = tokenize("echo");
	let table = NGramTable::build(&tokens, 3).unwrap();

	assert_eq!(table.len(), 1);
	assert_eq!(
		table.successors(&tokenize("echo echo")).unwrap().as_slice(),
		&["echo".to_owned()]
	);
}
