use std::io::Write;

use super::*;

#[test]
fn rejects_empty_input() {
    let records: Vec<Vec<&str>> = vec![];
    assert_eq!(validate(records), Err(ValidationError::EmptyInput));
}

#[test]
fn rejects_row_with_missing_field() {
    let records = vec![vec!["2+2", "4"], vec!["3+3"]];
    assert_eq!(
        validate(records),
        Err(ValidationError::MalformedRow {
            index: 1,
            field_count: 1
        })
    );
}

#[test]
fn rejects_row_with_extra_field() {
    let records = vec![vec!["2+2", "4", "four"]];
    assert_eq!(
        validate(records),
        Err(ValidationError::MalformedRow {
            index: 0,
            field_count: 3
        })
    );
}

#[test]
fn rejects_blank_fields() {
    assert_eq!(
        validate(vec![vec!["2+2", ""]]),
        Err(ValidationError::BlankField { index: 0 })
    );
    assert_eq!(
        validate(vec![vec!["2+2", "4"], vec!["   ", "6"]]),
        Err(ValidationError::BlankField { index: 1 })
    );
    assert_eq!(
        validate(vec![vec!["2+2", " \t "]]),
        Err(ValidationError::BlankField { index: 0 })
    );
}

#[test]
fn error_messages_point_at_source_line() {
    let error = ValidationError::MalformedRow {
        index: 1,
        field_count: 1,
    };
    assert_eq!(
        error.to_string(),
        "invalid format at line 2: expected 2 fields, got 1"
    );
    let error = ValidationError::BlankField { index: 0 };
    assert_eq!(
        error.to_string(),
        "invalid format at line 1: empty question or answer"
    );
}

#[test]
fn preserves_question_order() {
    let questions = validate(vec![vec!["5+5", "10"], vec!["1+1", "2"], vec!["3+3", " 6 "]]).unwrap();
    assert_eq!(
        questions,
        vec![
            Question::new("5+5", "10"),
            Question::new("1+1", "2"),
            Question::new("3+3", "6"),
        ]
    );
}

#[test]
fn reads_csv_without_header() {
    let source = "5+5,10\n\"what is 2, plus 2\",4\n";
    let definition = QuizDefinition::from_reader(source.as_bytes()).unwrap();
    assert_eq!(
        definition.get_questions(),
        &[
            Question::new("5+5", "10"),
            Question::new("what is 2, plus 2", "4"),
        ]
    );
}

#[test]
fn reports_malformed_csv_rows_as_validation_errors() {
    let source = "2+2,4\n3+3\n";
    match QuizDefinition::from_reader(source.as_bytes()) {
        Err(LoadError::Validation(ValidationError::MalformedRow {
            index: 1,
            field_count: 1,
        })) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn reports_empty_file() {
    match QuizDefinition::from_reader("".as_bytes()) {
        Err(LoadError::Validation(ValidationError::EmptyInput)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn reports_unparseable_csv() {
    let source = b"2+2,4\n\xff\xfe,6\n";
    match QuizDefinition::from_reader(&source[..]) {
        Err(LoadError::Parse(_)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn reports_missing_file() {
    let path = Path::new("this/file/does/not/exist.csv");
    match QuizDefinition::open(path) {
        Err(LoadError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn opens_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "2+2,4\n3+3,6\n").unwrap();
    let definition = QuizDefinition::open(file.path()).unwrap();
    assert_eq!(
        definition.into_questions(),
        vec![Question::new("2+2", "4"), Question::new("3+3", "6")]
    );
}

#[test]
fn loading_twice_yields_identical_questions() {
    let source = "1+1,2\n2+2,4\n3+3,6\n";
    let first = QuizDefinition::from_reader(source.as_bytes()).unwrap();
    let second = QuizDefinition::from_reader(source.as_bytes()).unwrap();
    assert_eq!(first.get_questions(), second.get_questions());
}
