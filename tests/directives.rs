use tabby::{Directive, Error, Kind};

#[test]
fn test_parse_kind_and_params() {
    let directive = Directive::parse("number:5:10");
    assert_eq!(directive.kind, "number");
    assert_eq!(directive.params, vec!["5", "10"]);
}

#[test]
fn test_parse_trims_interior() {
    let directive = Directive::parse("  uuid  ");
    assert_eq!(directive.kind, "uuid");
    assert!(directive.params.is_empty());
}

#[test]
fn test_parse_keeps_empty_segments() {
    let directive = Directive::parse("float::5:");
    assert_eq!(directive.kind, "float");
    assert_eq!(directive.params, vec!["", "5", ""]);
}

#[test]
fn test_synonyms() {
    let pairs = [
        ("name", "fullname"),
        ("number", "int"),
        ("float", "decimal"),
        ("text", "paragraph"),
        ("bool", "boolean"),
        ("phone", "mobile"),
    ];
    for (a, b) in pairs {
        assert_eq!(Kind::from_keyword(a), Kind::from_keyword(b));
        assert!(Kind::from_keyword(a).is_some());
    }
}

#[test]
fn test_keyword_lookup_is_case_sensitive() {
    assert_eq!(Kind::from_keyword("UUID"), None);
    assert_eq!(Kind::from_keyword("Name"), None);
    assert_eq!(Kind::from_keyword(" name"), None);
}

#[test]
fn test_every_kind_round_trips_its_keyword() {
    for kind in Kind::ALL {
        assert_eq!(Kind::from_keyword(kind.keyword()), Some(kind));
        assert_eq!(kind.to_string(), kind.keyword());
    }
}

#[test]
fn test_from_str() {
    assert_eq!("uuid".parse::<Kind>(), Ok(Kind::Uuid));
    assert_eq!(
        "nope".parse::<Kind>(),
        Err(Error::UnknownKeyword("nope".to_string()))
    );
}

#[test]
fn test_integer_params() {
    let directive = Directive::parse("number:abc:7");
    assert_eq!(directive.int(0), None);
    assert_eq!(directive.int(1), Some(7));
    assert_eq!(directive.int(2), None);

    let directive = Directive::parse("number: 5 :-3");
    assert_eq!(directive.int(0), Some(5));
    assert_eq!(directive.int(1), Some(-3));
}

#[test]
fn test_partial_numbers_are_unparsable() {
    let directive = Directive::parse("number:5abc:1.5");
    assert_eq!(directive.int(0), None);
    assert_eq!(directive.int(1), None);
}

#[test]
fn test_empty_param_is_unspecified() {
    let directive = Directive::parse("number::9");
    assert_eq!(directive.int(0), None);
    assert_eq!(directive.int(1), Some(9));
}

#[test]
fn test_real_params_reject_non_finite() {
    let directive = Directive::parse("float:inf:NaN:2.5");
    assert_eq!(directive.real(0), None);
    assert_eq!(directive.real(1), None);
    assert_eq!(directive.real(2), Some(2.5));
}

#[test]
fn test_count_params_reject_negative() {
    let directive = Directive::parse("float:0:1:-2");
    assert_eq!(directive.count(2), None);

    let directive = Directive::parse("float:0:1:4");
    assert_eq!(directive.count(2), Some(4));
}

#[test]
fn test_invalid_params() {
    let directive = Directive::parse("float:x::-2");
    assert_eq!(directive.invalid_params(), vec![(0, "x"), (2, "-2")]);

    // Kinds without parameters ignore whatever follows
    assert!(Directive::parse("word:zzz").invalid_params().is_empty());
    // Price bounds must floor to an i64
    let directive = Directive::parse("price:1e39:50");
    assert_eq!(directive.invalid_params(), vec![(0, "1e39")]);
    assert_eq!(directive.whole(0), None);
    assert_eq!(directive.whole(1), Some(50.0));

    // Unknown kinds have no parameter schema
    assert!(Directive::parse("nope:x").invalid_params().is_empty());
}
