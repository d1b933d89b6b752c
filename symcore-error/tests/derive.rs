use pretty_assertions::assert_eq;
use symcore_attrs::ErrorKind;
use symcore_error::{Error, ErrorKind as _};

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("`{}` has no value", name),
    labels = ["used here", "and here"],
    help = format!("assign `{}` first", name),
)]
struct Unassigned {
    name: String,
}

#[derive(Debug, ErrorKind)]
#[error(message = "nothing to do")]
struct Empty;

fn report(err: &Error) -> String {
    let stripped = strip_ansi_escapes::strip(err.report_string("input"));
    String::from_utf8_lossy(&stripped).into_owned()
}

#[test]
fn derived_message() {
    let kind = Unassigned { name: "x".to_string() };
    assert_eq!(kind.message(), "`x` has no value");
    assert_eq!(Empty.message(), "nothing to do");
}

#[test]
fn downcast() {
    let err = Error::new("x + 1", Unassigned { name: "x".to_string() });
    assert!(err.is::<Unassigned>());
    assert!(!err.is::<Empty>());
    assert_eq!(err.downcast_ref::<Unassigned>().unwrap().name, "x");
    assert_eq!(err.to_string(), "`x` has no value (in `x + 1`)");
}

#[test]
fn report_has_labels_and_help() {
    let err = Error::with_spans("x + x", vec![0..1, 4..5], Unassigned { name: "x".to_string() });
    let report = report(&err);
    assert!(report.contains("`x` has no value"));
    assert!(report.contains("used here"));
    assert!(report.contains("and here"));
    assert!(report.contains("assign `x` first"));
    assert!(report.contains("x + x"));
}

#[test]
fn spans_count_characters() {
    let err = Error::new("∫(x) dx", Unassigned { name: "x".to_string() });
    assert_eq!(err.spans, vec![0..7]);

    let report = report(&err);
    assert!(report.contains("∫(x) dx"));
    assert!(report.contains("used here"));

    let err = Error::with_spans("∫(x) dx + x", vec![2..3, 10..11], Unassigned { name: "x".to_string() });
    let report = self::report(&err);
    assert!(report.contains("used here"));
    assert!(report.contains("and here"));
}
