use super::*;

#[test]
fn test_codes_round_trip_through_parse() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
        assert_eq!(code.to_string(), code.as_str());
        assert!(!code.description().is_empty());
    }
}

#[test]
fn test_parse_rejects_unknown_codes() {
    assert_eq!(ErrorCode::parse("E9999"), None);
    assert_eq!(ErrorCode::parse("e2001"), None);
    assert_eq!(ErrorCode::parse(""), None);
}
