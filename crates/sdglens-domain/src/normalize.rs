//! Text normalization applied before keyword matching and classification

/// Normalize raw document text
///
/// Lower-cases the input, drops every character that is neither an ASCII
/// letter nor whitespace, collapses whitespace runs to a single space and
/// trims both ends. Total and deterministic; empty input yields empty output.
///
/// # Examples
///
/// ```
/// use sdglens_domain::normalize;
///
/// assert_eq!(normalize("  CO2 emissions,\tper-capita!  "), "co emissions percapita");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else if c.is_ascii_lowercase() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}
