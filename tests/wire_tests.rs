use wordle_suggest::wire::{self, SCHEMA_HELP};
use wordle_suggest::{Dictionary, Letter, Outcome, RequestError, WireChoices, Word};

fn dictionary() -> Dictionary {
    Dictionary::from_words(
        ["apple", "ample", "angle", "grape", "stale"]
            .iter()
            .map(|w| Word::parse(w).unwrap()),
    )
}

fn answer(body: &str) -> Result<Outcome, RequestError> {
    wire::answer(&dictionary(), WireChoices::from_json(body.as_bytes())?)
}

fn words(outcome: Outcome) -> Vec<String> {
    match outcome {
        Outcome::Words(words) => words.iter().map(|w| w.to_string()).collect(),
        other => panic!("expected words, got {other:?}"),
    }
}

#[test]
fn test_parse_wire_choices() {
    let choices = WireChoices::from_json(
        br#"{"KnownInPosition": {"1": "p"}, "KnownOutOfPosition": "le", "KnownBad": "g"}"#,
    )
    .unwrap();
    assert_eq!(choices.known_in_position.get("1").map(String::as_str), Some("p"));
    assert_eq!(choices.known_out_of_position, "le");
    assert_eq!(choices.known_bad, "g");
}

#[test]
fn test_answer_words() {
    let outcome = answer(r#"{"KnownInPosition": {"1": "p"}, "KnownOutOfPosition": "", "KnownBad": ""}"#).unwrap();
    assert_eq!(words(outcome), vec!["apple"]);
}

#[test]
fn test_answer_bad_letters() {
    let outcome = answer(r#"{"KnownInPosition": {}, "KnownOutOfPosition": "e", "KnownBad": "gm"}"#).unwrap();
    assert_eq!(words(outcome), vec!["apple", "stale"]);
}

#[test]
fn test_answer_empty() {
    let outcome = answer(r#"{"KnownInPosition": {"0": "z"}, "KnownOutOfPosition": "", "KnownBad": ""}"#).unwrap();
    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(outcome.message().as_deref(), Some("Unable to find any words."));
}

#[test]
fn test_answer_conflict() {
    let outcome = answer(r#"{"KnownInPosition": {"0": "a"}, "KnownOutOfPosition": "l", "KnownBad": "xl"}"#).unwrap();
    assert_eq!(outcome, Outcome::Conflict(Letter::try_from('l').unwrap()));
    assert_eq!(
        outcome.message().as_deref(),
        Some("Conflicting configuration with letter 'l'.")
    );
}

#[test]
fn test_malformed_json() {
    let err = answer(r#"{"KnownInPosition": []}"#).unwrap_err();
    assert!(matches!(err, RequestError::Json(_)));
    assert!(err.help_text().starts_with(SCHEMA_HELP));
}

#[test]
fn test_missing_field() {
    let err = answer(r#"{"KnownInPosition": {}, "KnownBad": ""}"#).unwrap_err();
    assert!(matches!(err, RequestError::Json(_)));
}

#[test]
fn test_bad_position_key() {
    let err = answer(r#"{"KnownInPosition": {"one": "a"}, "KnownOutOfPosition": "", "KnownBad": ""}"#).unwrap_err();
    assert!(matches!(err, RequestError::PositionKey(key) if key == "one"));
}

#[test]
fn test_position_key_with_whitespace() {
    let err = answer(r#"{"KnownInPosition": {" 1": "a"}, "KnownOutOfPosition": "", "KnownBad": ""}"#).unwrap_err();
    assert!(matches!(err, RequestError::PositionKey(key) if key == " 1"));
}

#[test]
fn test_rejections_carry_schema() {
    let err = answer(r#"{"KnownInPosition": {}, "KnownOutOfPosition": "3", "KnownBad": ""}"#).unwrap_err();
    let text = err.help_text();
    assert!(text.starts_with(SCHEMA_HELP));
    assert!(text.ends_with(&err.to_string()));
}

#[test]
fn test_position_out_of_range() {
    let err = answer(r#"{"KnownInPosition": {"5": "a"}, "KnownOutOfPosition": "", "KnownBad": ""}"#).unwrap_err();
    assert!(matches!(err, RequestError::Constraint(_)));
    assert!(err.conflict().is_none());
}

#[test]
fn test_position_value_must_be_one_letter() {
    for value in ["", "ab"] {
        let body = format!(
            r#"{{"KnownInPosition": {{"0": "{value}"}}, "KnownOutOfPosition": "", "KnownBad": ""}}"#
        );
        let err = answer(&body).unwrap_err();
        assert!(matches!(err, RequestError::PositionValue { position: 0, .. }));
    }
}

#[test]
fn test_invalid_letter() {
    let err = answer(r#"{"KnownInPosition": {}, "KnownOutOfPosition": "3", "KnownBad": ""}"#).unwrap_err();
    assert!(matches!(err, RequestError::Letter(_)));
}
