use super::*;

#[test]
fn verbs_are_case_insensitive() {
    assert_eq!(Command::parse("START"), Command::Start);
    assert_eq!(Command::parse("ListApis"), Command::ListApis);
    assert_eq!(Command::parse("  clear  "), Command::Clear);
    assert_eq!(Command::parse("GOOGLE"), Command::Google);
    assert_eq!(Command::parse("Logout"), Command::Logout);
}

#[test]
fn arguments_keep_their_case() {
    assert_eq!(
        Command::parse("AddApi https://X.test/Health"),
        Command::AddApi("https://X.test/Health".to_string())
    );
    assert_eq!(
        Command::parse("removeapi   123  "),
        Command::RemoveApi("123".to_string())
    );
}

#[test]
fn missing_argument_parses_to_empty() {
    assert_eq!(Command::parse("addapi"), Command::AddApi("".to_string()));
    assert_eq!(Command::parse("RemoveApi   "), Command::RemoveApi("".to_string()));
}

#[test]
fn argumentless_verbs_reject_trailing_text() {
    assert_eq!(Command::parse("start now"), Command::Unknown);
    assert_eq!(Command::parse("listapis all"), Command::Unknown);
}

#[test]
fn unknown_input() {
    assert_eq!(Command::parse(""), Command::Unknown);
    assert_eq!(Command::parse("help"), Command::Unknown);
    assert_eq!(Command::parse("addapihttps://x.test"), Command::Unknown);
}

#[test]
fn only_a_space_separates_the_argument() {
    assert_eq!(Command::parse("addapi\thttps://x.test"), Command::Unknown);
    assert_eq!(Command::parse("removeapi\t12"), Command::Unknown);
    assert_eq!(
        Command::parse("addapi \thttps://x.test"),
        Command::AddApi("https://x.test".to_string())
    );
}

#[test]
fn verb_display_is_lowercase() {
    assert_eq!(Verb::AddApi.to_string(), "addapi");
    assert_eq!(Command::parse("ListApis").verb(), Some(Verb::ListApis));
    assert_eq!(Command::Unknown.verb(), None);
}

#[test]
fn entry_ids_parse_leading_digits() {
    assert_eq!(parse_entry_id("1700000000000"), Some(1700000000000));
    assert_eq!(parse_entry_id("12abc"), Some(12));
    assert_eq!(parse_entry_id("-5"), Some(-5));
    assert_eq!(parse_entry_id("abc"), None);
    assert_eq!(parse_entry_id(""), None);
    assert_eq!(parse_entry_id("-"), None);
}
