use camino::Utf8PathBuf;
use cscan::{
    cli::Source,
    diagnostic::Format,
    error::Error,
    lex::{self, TokenKind},
};
use pretty_assertions::assert_eq;

fn fixture_path() -> Utf8PathBuf {
    Utf8PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/invalid_character.c"
    ))
}

#[test]
fn invalid_character_fixture_fails_check() {
    let error = cscan::cli::check::handle(Some(fixture_path())).expect_err("fixture has an `@`");

    assert_eq!(1, error.exit_code());
    let report = error.pretty_string(Format::Short);
    assert!(
        report.ends_with("fixtures/invalid_character.c:8:11: unexpected character '@'\n"),
        "unexpected report: {report}"
    );
    assert_eq!(1, report.lines().count());
}

#[test]
fn fixture_without_at_sign_is_clean() {
    let source = Source::load(Some(fixture_path())).unwrap();
    let fixed = source.text.replace("x @ y", "x + y");

    let scanned = lex::tokenize(&fixed);
    assert!(!scanned.has_errors());
    assert!(Error::lexical(fixed.into(), source.path, scanned.errors).is_none());
}

#[test]
fn lazy_scan_stops_when_consumer_stops() {
    let source = Source::load(Some(fixture_path())).unwrap();
    let mut lexer = lex::scan(&source.text);

    let first_line = lexer
        .by_ref()
        .take_while(|token| token.line() < 4)
        .map(|token| token.kind)
        .collect::<Vec<_>>();

    assert_eq!(vec![TokenKind::Directive], first_line);
    assert!(lexer.errors().is_empty());
}

#[test]
fn rich_report_quotes_the_line() {
    let source = Source::load(Some(fixture_path())).unwrap();
    let errors = lex::tokenize(&source.text).errors;
    let error = Error::lexical(source.text.clone(), "invalid_character.c".into(), errors)
        .expect("one error");

    let report = error.pretty_string(Format::Rich);
    assert!(report.contains("invalid_character.c:8:11"));
    assert!(report.contains("x = x @ y;"));
}
