/// Built-in Urdu → Roman Urdu table, in declaration order.
///
/// Single letters first, then the three vowel digraphs, then common words
/// whose everyday spelling differs from a letter-by-letter reading.
/// `ء` (hamza) is silent and maps to the empty string.
pub const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    // Vowels
    ("ا", "a"),
    ("آ", "aa"),
    ("ع", "a"),
    ("ای", "ai"),
    ("اے", "e"),
    ("ی", "i"),
    ("ے", "e"),
    ("او", "au"),
    ("و", "o"),
    // Consonants
    ("ب", "b"),
    ("پ", "p"),
    ("ت", "t"),
    ("ٹ", "t"),
    ("ث", "s"),
    ("ج", "j"),
    ("چ", "ch"),
    ("ح", "h"),
    ("خ", "kh"),
    ("د", "d"),
    ("ڈ", "d"),
    ("ذ", "z"),
    ("ر", "r"),
    ("ڑ", "r"),
    ("ز", "z"),
    ("ژ", "zh"),
    ("س", "s"),
    ("ش", "sh"),
    ("ص", "s"),
    ("ض", "z"),
    ("ط", "t"),
    ("ظ", "z"),
    ("غ", "gh"),
    ("ف", "f"),
    ("ق", "q"),
    ("ک", "k"),
    ("گ", "g"),
    ("ل", "l"),
    ("م", "m"),
    ("ن", "n"),
    ("ں", "n"),
    ("ه", "h"),
    ("ھ", "h"),
    ("ء", ""),
    ("ؤ", "o"),
    // Common words
    ("اور", "aur"),
    ("کی", "ki"),
    ("کے", "ke"),
    ("کا", "ka"),
    ("میں", "mein"),
    ("سے", "se"),
    ("کو", "ko"),
    ("نے", "ne"),
    ("ہے", "hai"),
    ("ہیں", "hain"),
    ("تھا", "tha"),
    ("تھی", "thi"),
    ("کہ", "keh"),
    ("یہ", "yeh"),
    ("وہ", "woh"),
    ("جو", "jo"),
];
