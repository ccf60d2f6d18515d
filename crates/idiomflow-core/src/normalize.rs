use unicode_normalization::UnicodeNormalization;

/// Canonical labels for categories that arrive under several spellings.
/// Checked in order against the lower-cased label, first hit wins.
const CATEGORY_ALIASES: &[(&[&str], &str)] = &[
    (&["general education", "general/educational"], "Education"),
    (&["general romantic"], "Romantic"),
    (&["general"], "General"),
    (&["popular"], "Popular"),
    (&["education"], "Education"),
];

pub trait Normalizer {
    /// Strip the noise spreadsheet exports leave around a label
    fn clean(&self, text: &str) -> String {
        let text: String = text.trim().nfkc().collect();

        text.replace(['"', '\u{201c}', '\u{201d}'], "")
            .replace(['\n', '\r'], " ")
            .trim()
            .to_string()
    }

    fn normalize(&self, label: &str) -> String;
}

/// Collapses free-text category labels into the canonical set
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryNormalizer;

impl Normalizer for CategoryNormalizer {
    fn normalize(&self, label: &str) -> String {
        let cleaned = self.clean(label);
        let lowered = cleaned.to_lowercase();

        CATEGORY_ALIASES
            .iter()
            .find(|(aliases, _)| aliases.contains(&lowered.as_str()))
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or_else(|| title_case(&cleaned))
    }
}

pub fn normalize_category(label: &str) -> String {
    CategoryNormalizer.normalize(label)
}

/// Upper-case the first letter of every word, lower-case the rest.
/// Any non-letter except an apostrophe starts a new word, so
/// `space-themed` becomes `Space-Themed` and `teacher's` stays one word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                // Multi-char mappings such as `ß` -> `SS` keep only the
                // first letter capital, otherwise a second pass changes it
                let mut upper = c.to_uppercase();
                out.extend(upper.next());
                out.extend(upper.flat_map(char::to_lowercase));
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = in_word && (c == '\'' || c == '\u{2019}');
        }
    }

    out
}
