use crate::translator::{translate, MatchKind, Translator};

#[test]
fn test_empty() {
    assert_eq!(translate(""), "");
    assert_eq!(translate(" \n\t "), "");
}

#[test]
fn test_whole_word_beats_letters() {
    // letter by letter اور would be "aor"
    assert_eq!(translate("اور"), "aur");
    assert_eq!(translate("وہ"), "woh");
    assert_eq!(translate("ہیں"), "hain");
}

#[test]
fn test_single_letter() {
    assert_eq!(translate("ب"), "b");
    assert_eq!(translate("چ"), "ch");
}

#[test]
fn test_vowel_digraphs() {
    assert_eq!(translate("ای"), "ai");
    assert_eq!(translate("او"), "au");
}

#[test]
fn test_unmapped_passes_through() {
    assert_eq!(translate("ہ"), "ہ");
    assert_eq!(translate("abc"), "abc");
    assert_eq!(translate("٣ کتابیں"), "٣ ktabin");
}

#[test]
fn test_whitespace_collapses() {
    assert_eq!(translate("  آپ   کیسے\nہیں  "), "aap kise hain");
}

#[test]
fn test_sentence() {
    assert_eq!(translate("کتاب اور قلم"), "ktab aur qlm");
}

#[test]
fn test_punctuation_stripped_before_lookup() {
    assert_eq!(translate("اور!"), "aur");
    assert_eq!(translate("اور۔"), "aur");
    assert_eq!(translate("ہیں،"), "hain");
    assert_eq!(translate("آپ کا نام کیا ہے؟"), "aap ka nam kia hai");
}

#[test]
fn test_punctuation_stripped_inside_token() {
    assert_eq!(translate("کی،کے"), "kike");
}

#[test]
fn test_other_punctuation_kept() {
    assert_eq!(translate("کیا?"), "kia?");
}

#[test]
fn test_punctuation_only_token_kept() {
    assert_eq!(translate("!!!"), "!!!");
    assert_eq!(translate("؟ کیا"), "؟ kia");
}

#[test]
fn test_silent_hamza_leaves_empty_token() {
    assert_eq!(translate("ء"), "");
    assert_eq!(translate("x ء y"), "x  y");
}

#[test]
fn test_presentation_forms_normalized() {
    assert_eq!(translate("گھر \u{FE8F}"), "ghr b");
    // initial-form kaf folds to Arabic ك, which the Urdu table does not carry
    assert_eq!(translate("\u{FEDB}\u{FE98}\u{FE8E}\u{FE8F}"), "كtab");
}

#[test]
fn test_translate_token_kinds() {
    let t = Translator::builtin();

    let word = t.translate_token("ہے؟");
    assert_eq!(word.kind, MatchKind::Word);
    assert_eq!(word.stripped, "ہے");
    assert_eq!(word.output, "hai");

    let chars = t.translate_token("نام");
    assert_eq!(chars.kind, MatchKind::Characters);
    assert_eq!(chars.output, "nam");

    let keep = t.translate_token("۔");
    assert_eq!(keep.kind, MatchKind::Passthrough);
    assert_eq!(keep.stripped, "");
    assert_eq!(keep.output, "۔");
}

#[test]
fn test_single_letter_key_is_not_a_word_match() {
    let trace = Translator::builtin().translate_token("ب");
    assert_eq!(trace.kind, MatchKind::Characters);
    assert_eq!(trace.output, "b");
}

#[test]
fn test_transliterate_chars_keeps_whitespace() {
    let t = Translator::builtin();
    assert_eq!(t.transliterate_chars("ب\tب"), "b b");
    assert_eq!(t.transliterate_chars("ب\u{3000}ا"), "b a");
    assert_eq!(t.transliterate_chars("اور"), "aor");
    assert_eq!(t.transliterate_chars(""), "");
}

#[test]
fn test_free_function_matches_builtin() {
    let s = "یہ میرا گھر ہے";
    assert_eq!(translate(s), Translator::default().translate(s));
}

#[test]
fn test_translator_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Translator>();

    let t = Translator::default();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let t = t.clone();
            std::thread::spawn(move || t.translate("پھول خوبصورت ہیں"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "phol khobsort hain");
    }
}
