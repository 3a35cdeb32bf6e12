use crate::mapping::MappingTable;
use crate::translator::{MatchKind, Translator};

fn custom() -> Translator {
    let table = MappingTable::from_toml(
        r#"
[mappings]
"ا" = "a"
"ب" = "b"
"ہ" = "h"
"گھر" = "ghar"
"کتاب" = "kitaab"
"#,
    )
    .unwrap();
    Translator::new(table)
}

#[test]
fn test_custom_words() {
    let t = custom();
    assert_eq!(t.translate("گھر"), "ghar");
    assert_eq!(t.translate("کتاب۔"), "kitaab");
}

#[test]
fn test_custom_letters_only() {
    let t = custom();
    // اور is not a word in this table and و, ر are unmapped
    assert_eq!(t.translate("اور"), "aور");
    assert_eq!(t.translate("ہ"), "h");
}

#[test]
fn test_custom_table_is_isolated_from_builtin() {
    let t = custom();
    assert_eq!(t.table().len(), 5);
    assert_eq!(t.translate_token("اور").kind, MatchKind::Characters);
    assert_eq!(Translator::builtin().translate("اور"), "aur");
}
