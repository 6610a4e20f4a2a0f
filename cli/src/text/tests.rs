use super::*;

#[test]
fn test_simple_cases() {
    assert_eq!(TextCase::Upper.apply("Hello World"), "HELLO WORLD");
    assert_eq!(TextCase::Lower.apply("Hello World"), "hello world");
    assert_eq!(TextCase::Snake.apply("Hello  big World"), "hello_big_world");
    assert_eq!(TextCase::Kebab.apply("Hello big\tWorld"), "hello-big-world");
}

#[test]
fn test_title_case() {
    assert_eq!(TextCase::Title.apply("the QUICK brown fox"), "The Quick Brown Fox");
    assert_eq!(TextCase::Title.apply("it's o'neil"), "It's O'neil");
    assert_eq!(TextCase::Title.apply(""), "");
}

#[test]
fn test_camel_and_pascal() {
    assert_eq!(TextCase::Camel.apply("hello world foo"), "helloWorldFoo");
    assert_eq!(TextCase::Camel.apply("Hello World"), "helloWorld");
    assert_eq!(TextCase::Pascal.apply("hello world foo"), "HelloWorldFoo");
    // existing capitals are kept
    assert_eq!(TextCase::Pascal.apply("user ID"), "UserID");
}

#[test]
fn test_sentence_case() {
    assert_eq!(TextCase::Sentence.apply("hELLO World. bye"), "Hello world. bye");
    assert_eq!(TextCase::Sentence.apply(""), "");
}

#[test]
fn test_convert_all_matches_apply() {
    let text = "some Mixed text";
    let all = convert_all(text);
    assert_eq!(all.uppercase, TextCase::Upper.apply(text));
    assert_eq!(all.camel_case, "someMixedText");
    assert_eq!(all.kebab_case, "some-mixed-text");
    assert_eq!(all.sentence_case, "Some mixed text");
}

#[test]
fn test_case_names_parse() {
    assert_eq!("snake_case".parse::<TextCase>().unwrap(), TextCase::Snake);
    assert_eq!("Title Case".parse::<TextCase>().unwrap(), TextCase::Title);
    assert_eq!("kebab".parse::<TextCase>().unwrap(), TextCase::Kebab);
    assert!("shouting".parse::<TextCase>().is_err());
}

#[test]
fn test_word_count() {
    assert_eq!(word_count("  "), 0);
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("hello world"), 2);
    assert_eq!(word_count("  hello \n\t world  "), 2);
}

#[test]
fn test_stats() {
    let text = "Hello there. How are you?\nFine!\n\nNew paragraph here...";
    let stats = text_stats(text);
    assert_eq!(stats.characters, text.chars().count());
    assert_eq!(stats.words, 9);
    assert_eq!(stats.sentences, 4);
    assert_eq!(stats.paragraphs, 2);
    assert_eq!(stats.lines, 4);
    assert_eq!(stats.reading_time_minutes, 1);
}

#[test]
fn test_stats_of_blank_text() {
    assert_eq!(text_stats(""), TextStats::default());

    let stats = text_stats(" \n ");
    assert_eq!(stats.characters, 3);
    assert_eq!(stats.characters_no_spaces, 0);
    assert_eq!(stats.words, 0);
    assert_eq!(stats.sentences, 0);
    assert_eq!(stats.paragraphs, 0);
    assert_eq!(stats.lines, 2);
}

#[test]
fn test_stats_count_chars_not_bytes() {
    let stats = text_stats("héllo wörld");
    assert_eq!(stats.characters, 11);
    assert_eq!(stats.characters_no_spaces, 10);
}

#[test]
fn test_reading_time() {
    assert_eq!(reading_time_minutes(0), 0);
    assert_eq!(reading_time_minutes(1), 1);
    assert_eq!(reading_time_minutes(200), 1);
    assert_eq!(reading_time_minutes(201), 2);
}
