use super::*;

#[test]
fn splits_on_any_whitespace() {
    assert_eq!(
        split_words("  Hello\tWorld\n\nagain "),
        vec!["Hello", "World", "again"]
    );
}

#[test]
fn empty_and_blank_input_yield_no_words() {
    assert!(split_words("").is_empty());
    assert!(split_words(" \n\t ").is_empty());
}

#[test]
fn attached_punctuation_is_left_alone() {
    assert_eq!(
        split_words("Hello, world-test. Done!"),
        vec!["Hello,", "world-test.", "Done!"]
    );
}

#[test]
fn standalone_punctuation_joins_previous_word() {
    assert_eq!(
        split_words("Wait , what ?! ok 。"),
        vec!["Wait,", "what?!", "ok。"]
    );
    // Nothing to attach to at the very start.
    assert_eq!(split_words(". start"), vec![".", "start"]);
}

#[test]
fn standalone_hyphen_connects_neighbours() {
    assert_eq!(split_words("a well - known fact"), vec!["a", "well-known", "fact"]);
    assert_eq!(split_words("- first"), vec!["-", "first"]);
}

#[test]
fn hyphen_without_a_right_neighbour_stands_alone() {
    assert_eq!(split_words("end -"), vec!["end", "-"]);
    assert_eq!(
        split_words("well - \"quoted text\" ok"),
        vec!["well", "-", "\"quoted text\"", "ok"]
    );
}

#[test]
fn quoted_span_is_one_word() {
    assert_eq!(
        split_words("say \"Special   Case\" now."),
        vec!["say", "\"Special Case\"", "now."]
    );
    assert_eq!(split_words("\"single\" word"), vec!["\"single\"", "word"]);
    assert_eq!(
        split_words("it was \"over there\"."),
        vec!["it", "was", "\"over there\"."]
    );
}

#[test]
fn quote_opens_inside_a_token() {
    assert_eq!(
        split_words("say\"hi there\" now"),
        vec!["say", "\"hi there\"", "now"]
    );
    assert_eq!(split_words("a\"b\"c"), vec!["a", "\"b\"", "c"]);
}

#[test]
fn unclosed_quote_keeps_the_rest_together() {
    let words = split_words("Missing \"quote here");
    assert_eq!(words, vec!["Missing", "\"quote here"]);
}

#[test]
fn sentence_endings() {
    assert!(ends_sentence("done."));
    assert!(ends_sentence("what?!"));
    assert!(ends_sentence("\"over.\""));
    assert!(ends_sentence("完了。"));
    assert!(!ends_sentence("Hello,"));
    assert!(!ends_sentence(""));
}

#[test]
fn chinese_text_is_segmented_into_words() {
    let text = "我们今天去公园散步。天气很好！";
    let words = split_words(text);

    assert!(words.len() > 2, "{words:?}");
    assert_eq!(words.concat(), text);
    assert!(words.contains(&"我们".to_owned()), "{words:?}");
    assert!(words.iter().all(|w| !is_closing_punctuation(w)), "{words:?}");
    assert!(words.iter().any(|w| w.len() > 3 && w.ends_with('。')), "{words:?}");
    assert!(words.last().is_some_and(|w| w.ends_with('！')));
}

#[test]
fn mixed_scripts_keep_latin_and_quotes_whole() {
    let words = split_words("Rust 很好 \"hello 世界\" don't-stop");
    assert_eq!(words.first().map(String::as_str), Some("Rust"));
    assert!(words.contains(&"\"hello 世界\"".to_owned()), "{words:?}");
    assert_eq!(words.last().map(String::as_str), Some("don't-stop"));
}
