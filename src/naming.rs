//! Component identifier derivation
//!
//! Maps raw SVG filenames to the PascalCase identifiers exported by the
//! generated package. Derivation is pure and total: any input string maps to
//! a valid JavaScript identifier ending in `Icon`, so the two format passes
//! can derive independently and agree.

/// Extension token stripped from source filenames
const EXTENSION: &str = ".svg";

/// Fixed identifier suffix
const SUFFIX: &str = "Icon";

/// Characters treated as word separators during PascalCase conversion
fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.') || c.is_whitespace()
}

/// Derive the public component identifier for a source filename.
///
/// `arrow-up.svg` becomes `ArrowUpIcon`. A filename without the `.svg` token
/// passes through the strip step unchanged, so an already-derived name maps
/// to itself. Distinct filenames may derive to the same identifier (e.g.
/// `a-b.svg` and `ab.svg`); the emitter accepts the resulting overwrite.
pub fn component_name(file_name: &str) -> String {
    let stem = match file_name.find(EXTENSION) {
        Some(at) => format!("{}{}", &file_name[..at], &file_name[at + EXTENSION.len()..]),
        None => file_name.to_string(),
    };

    let mut name = pascal_case(&stem);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "Svg");
    }
    if !name.ends_with(SUFFIX) {
        name.push_str(SUFFIX);
    }
    name
}

/// PascalCase conversion.
///
/// Separators split words and are discarded; other non-alphanumeric
/// characters are dropped in place. A fragment shorter than two characters
/// folds into the current word instead of starting a new hump, so `a-b`
/// yields `Ab` while `arrow-up` yields `ArrowUp`.
fn pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for fragment in input.split(is_separator) {
        let word: String = fragment.chars().filter(|c| c.is_alphanumeric()).collect();
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        // Case mapping can expand to combining marks; those are not
        // identifier characters and are dropped like any other.
        if out.is_empty() || chars.clone().next().is_some() {
            out.extend(first.to_uppercase().filter(|c| c.is_alphanumeric()));
        } else {
            out.extend(first.to_lowercase().filter(|c| c.is_alphanumeric()));
        }
        out.push_str(chars.as_str());
    }
    out
}
