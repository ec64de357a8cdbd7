use ferrous_acme_dns_domain::{DomainError, RecordName, ZoneName};

fn candidates(name: &str) -> Vec<String> {
    RecordName::parse(name)
        .unwrap()
        .zone_candidates()
        .map(|z| z.to_string())
        .collect()
}

#[test]
fn test_record_name_parse_lowercases_and_strips_root() {
    let record = RecordName::parse("_ACME-Challenge.Example.COM.").unwrap();

    assert_eq!(record.as_str(), "_acme-challenge.example.com");
    assert_eq!(record.label_count(), 3);
}

#[test]
fn test_record_name_parse_rejects_empty() {
    let result = RecordName::parse("   ");

    assert!(matches!(result, Err(DomainError::InvalidRecordName(_))));
}

#[test]
fn test_record_name_parse_rejects_single_label() {
    let result = RecordName::parse("com");

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("at least two labels"));
}

#[test]
fn test_record_name_parse_rejects_empty_label() {
    assert!(RecordName::parse("a..example.com").is_err());
    assert!(RecordName::parse(".example.com").is_err());
}

#[test]
fn test_record_name_parse_rejects_long_label() {
    let name = format!("{}.example.com", "a".repeat(64));
    assert!(RecordName::parse(&name).is_err());
}

#[test]
fn test_zone_candidates_longest_first() {
    assert_eq!(
        candidates("a.b.c.example.com"),
        vec!["b.c.example.com", "c.example.com", "example.com"]
    );
}

#[test]
fn test_zone_candidates_acme_record() {
    assert_eq!(
        candidates("_acme-challenge.site1.sub1.example.com"),
        vec!["site1.sub1.example.com", "sub1.example.com", "example.com"]
    );
}

#[test]
fn test_zone_candidates_never_shorter_than_two_labels() {
    for name in ["a.example.com", "x.y.z.example.co.uk", "deep.a.b.c.d.e.f.example.org"] {
        for candidate in RecordName::parse(name).unwrap().zone_candidates() {
            assert!(candidate.label_count() >= 2, "{} yielded {}", name, candidate);
        }
    }
}

#[test]
fn test_zone_candidates_two_label_name_yields_nothing() {
    assert!(candidates("example.com").is_empty());
}

#[test]
fn test_zone_name_parse_normalizes() {
    let zone = ZoneName::parse("Sub1.Example.com.").unwrap();
    assert_eq!(zone.as_str(), "sub1.example.com");
}

#[test]
fn test_relative_name_for_nested_zone() {
    let record = RecordName::parse("_acme-challenge.site1.sub1.example.com").unwrap();
    let zone = ZoneName::parse("sub1.example.com").unwrap();

    assert_eq!(record.relative_to(&zone).unwrap(), "_acme-challenge.site1");
}

#[test]
fn test_record_name_parse_rejects_url_reserved_characters() {
    for name in [
        "_acme-challenge.other.com?x.example.com",
        "_acme-challenge.other.com/x.example.com",
        "_acme-challenge.other.com#x.example.com",
        "_acme-challenge.other%2ecom.example.com",
        "_acme challenge.example.com",
    ] {
        let result = RecordName::parse(name);
        assert!(
            matches!(result, Err(DomainError::InvalidRecordName(_))),
            "{} was accepted",
            name
        );
    }
}

#[test]
fn test_zone_name_parse_rejects_url_reserved_characters() {
    assert!(ZoneName::parse("other.com?x.example.com").is_err());
}

#[test]
fn test_record_name_accepts_underscore_and_hyphen() {
    assert!(RecordName::parse("_acme-challenge.my-site_1.example.com").is_ok());
}
