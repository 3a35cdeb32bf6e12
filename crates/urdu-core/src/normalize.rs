use unicode_normalization::UnicodeNormalization;

use crate::unicode::is_space;

/// NFKC-normalize `text`, collapse whitespace runs to one ASCII space and
/// trim both ends.
///
/// NFKC folds Arabic presentation forms (U+FB50..U+FDFF, U+FE70..U+FEFF)
/// back to their base letters so they hit the mapping table. It also turns
/// compatibility spaces such as U+00A0 into U+0020, so it runs before the
/// whitespace pass.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.nfkc() {
        if is_space(c) {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}
