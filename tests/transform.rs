use ssml_lite::{
    character_count, extract_plain_text, format_ssml, plain_to_ssml, within_spoken_quota,
    SPOKEN_CHAR_QUOTA,
};

#[test]
fn blank_input_converts_to_an_empty_document() {
    assert_eq!(plain_to_ssml(""), "<speak></speak>");
    assert_eq!(plain_to_ssml("   \n  "), "<speak></speak>");
}

#[test]
fn plain_text_is_wrapped_in_a_root_element() {
    assert_eq!(
        plain_to_ssml("have a very very good evening"),
        "<speak>have a very very good evening</speak>"
    );
}

#[test]
fn metacharacters_are_escaped_on_conversion() {
    assert_eq!(
        plain_to_ssml(r#"Tom & "Jerry" <3 'cats'"#),
        "<speak>Tom &amp; &quot;Jerry&quot; &lt;3 &apos;cats&apos;</speak>"
    );

    // Text that already looks like markup is treated as opaque plain text.
    assert_eq!(
        plain_to_ssml("<speak>nested</speak>"),
        "<speak>&lt;speak&gt;nested&lt;/speak&gt;</speak>"
    );
}

#[test]
fn conversion_then_extraction_round_trips() {
    for text in [
        "have a very very good evening",
        "Tom & \"Jerry\" <3 'cats'",
        "multiple   spaces survive",
    ] {
        assert_eq!(extract_plain_text(&plain_to_ssml(text)), text);
    }
}

#[test]
fn extraction_keeps_text_and_tails_in_document_order() {
    assert_eq!(
        extract_plain_text(
            r#"<speak>This is <emphasis level="strong">very important</emphasis>!</speak>"#
        ),
        "This is very important!"
    );
    assert_eq!(
        extract_plain_text("<speak>a<p>b<s>c</s>d</p>e</speak>"),
        "abcde"
    );
}

#[test]
fn extraction_trims_the_result() {
    assert_eq!(
        extract_plain_text("<speak>  padded text  </speak>"),
        "padded text"
    );
}

#[test]
fn extraction_falls_back_to_tag_stripping_on_parse_failure() {
    // The trailing tag never closes, so the parse fails and complete tag
    // tokens are stripped from the raw text instead.
    assert_eq!(extract_plain_text("<speak>Hello <broken"), "Hello <broken");
    assert_eq!(
        extract_plain_text("<speak>one</speak> trailing <speak>two</speak>"),
        "one trailing two"
    );
}

#[test]
fn character_count_distinguishes_spoken_from_raw() {
    let ssml = "<speak>Hi</speak>";
    assert_eq!(character_count(ssml, false), 2);
    assert_eq!(character_count(ssml, true), 17);
    assert_eq!(character_count(ssml, true), ssml.chars().count());
}

#[test]
fn quota_is_evaluated_against_spoken_characters() {
    assert!(within_spoken_quota("<speak>Hi</speak>"));
    assert!(within_spoken_quota(&"a".repeat(SPOKEN_CHAR_QUOTA)));
    assert!(!within_spoken_quota(&"a".repeat(SPOKEN_CHAR_QUOTA + 1)));

    // Markup overhead does not count against the quota.
    let padded = format!("<speak><p>{}</p></speak>", "a".repeat(SPOKEN_CHAR_QUOTA));
    assert!(within_spoken_quota(&padded));
}

#[test]
fn formatting_indents_one_element_per_line() {
    assert_eq!(
        format_ssml("<speak><p><s>Hi</s></p></speak>"),
        "<speak>\n  <p>\n    <s>Hi</s>\n  </p>\n</speak>"
    );
}

#[test]
fn formatting_strips_the_xml_prolog() {
    let formatted = format_ssml("<?xml version=\"1.0\" encoding=\"UTF-8\"?><speak><p>Hi</p></speak>");
    assert!(!formatted.contains("<?xml"));
    assert!(formatted.starts_with("<speak>"));
}

#[test]
fn formatting_returns_unparsable_input_unchanged() {
    assert_eq!(format_ssml("not markup at all"), "not markup at all");
    assert_eq!(
        format_ssml("<speak>Hello <emphasis>world</speak>"),
        "<speak>Hello <emphasis>world</speak>"
    );
}
