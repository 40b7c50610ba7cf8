use wordle_suggest::{index, Dictionary, Letter, Word, WORD_LENGTH};

fn letter(c: char) -> Letter {
    Letter::try_from(c).unwrap()
}

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn dictionary(words: &[&str]) -> Dictionary {
    Dictionary::from_words(words.iter().map(|w| word(w)))
}

#[test]
fn test_position_index() {
    let dictionary = dictionary(&["apple", "ample", "angle"]);
    let (position_index, _) = index::build(dictionary.iter());

    let first_a = &position_index[0][letter('a')];
    assert_eq!(first_a.len(), 3);

    let second_p = &position_index[1][letter('p')];
    assert_eq!(second_p.len(), 1);
    assert!(second_p.contains(&word("apple")));

    assert!(position_index[1][letter('z')].is_empty());
}

#[test]
fn test_any_index() {
    let dictionary = dictionary(&["apple", "grape", "stale"]);
    let (_, any_index) = index::build(dictionary.iter());

    assert_eq!(any_index[letter('e')].len(), 3);
    assert_eq!(any_index[letter('p')].len(), 2);
    assert_eq!(any_index[letter('g')].len(), 1);
    assert!(any_index[letter('q')].is_empty());
}

#[test]
fn test_repeated_letter_indexed_once() {
    let dictionary = dictionary(&["apple"]);
    let (position_index, any_index) = index::build(dictionary.iter());

    assert_eq!(any_index[letter('p')].len(), 1);
    assert!(position_index[1][letter('p')].contains(&word("apple")));
    assert!(position_index[2][letter('p')].contains(&word("apple")));
}

#[test]
fn test_every_letter_has_a_bucket() {
    let dictionary = dictionary(&[]);
    let (position_index, any_index) = index::build(dictionary.iter());

    assert_eq!(position_index.iter().count(), WORD_LENGTH);
    for letters in position_index.iter() {
        assert_eq!(letters.iter().count(), Letter::ALL.len());
        assert!(letters.iter().all(|(_, words)| words.is_empty()));
    }
    assert_eq!(any_index.iter().count(), Letter::ALL.len());
}

#[test]
fn test_each_word_in_exactly_word_length_position_buckets() {
    let dictionary = dictionary(&["apple", "grape", "stale", "crane"]);
    let (position_index, _) = index::build(dictionary.iter());

    for w in dictionary.iter() {
        let hits: usize = position_index
            .iter()
            .flat_map(|letters| letters.iter())
            .filter(|(_, words)| words.contains(w))
            .count();
        assert_eq!(hits, WORD_LENGTH, "{w}");
    }
}
