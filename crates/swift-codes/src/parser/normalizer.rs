/// Characters stripped anywhere in the input.
const NOISE: [char; 5] = ['\n', '\r', '\t', ' ', '-'];

/// Strip formatting noise and uppercase.
///
/// Absent input normalizes to the empty string. Never fails.
///
/// ```
/// use swift_codes::parser::normalize;
///
/// assert_eq!(normalize(Some(" deut-de-ff 500\n")), "DEUTDEFF500");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    raw.chars()
        .filter(|c| !NOISE.contains(c))
        .collect::<String>()
        .to_uppercase()
}
