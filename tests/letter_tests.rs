use wordle_suggest::{Letter, LetterError, ALPHABET_SIZE};

#[test]
fn test_letter_from_lowercase() {
    let letter = Letter::try_from('c').unwrap();
    assert_eq!(letter.index(), 2);
    assert_eq!(letter.to_char(), 'c');
}

#[test]
fn test_letter_folds_uppercase() {
    assert_eq!(Letter::try_from('Q'), Letter::try_from('q'));
}

#[test]
fn test_letter_rejects_non_alphabet() {
    assert_eq!(Letter::try_from('1'), Err(LetterError::InvalidLetter('1')));
    assert_eq!(Letter::try_from(' '), Err(LetterError::InvalidLetter(' ')));
    assert_eq!(Letter::try_from('é'), Err(LetterError::InvalidLetter('é')));
}

#[test]
fn test_all_letters_in_order() {
    assert_eq!(Letter::ALL.len(), ALPHABET_SIZE);
    let text: String = Letter::ALL.iter().map(|l| l.to_char()).collect();
    assert_eq!(text, "abcdefghijklmnopqrstuvwxyz");
    for (i, letter) in Letter::ALL.iter().enumerate() {
        assert_eq!(Letter::from_index(i), Some(*letter));
    }
    assert_eq!(Letter::from_index(ALPHABET_SIZE), None);
}

#[test]
fn test_letter_display() {
    assert_eq!(Letter::try_from('z').unwrap().to_string(), "z");
}
