//! Declaration naming and string escaping
//!
//! Field names in `config.yml` are camelCase; the generated macros are
//! SCREAMING_SNAKE. The transform splits at every uppercase-run boundary:
//! a maximal run of capitals is one segment, and a single capital followed
//! by lowercase starts a new segment (`statusBarExtrasWifiRSSI` becomes
//! `STATUS_BAR_EXTRAS_WIFI_RSSI`).

/// Convert a camelCase field name to its SCREAMING_SNAKE macro segment.
pub fn upper_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev_upper = chars[i - 1].is_ascii_uppercase();
            let next_lower = chars
                .get(i + 1)
                .map_or(false, |n| n.is_ascii_lowercase());
            // Boundary at the start of an uppercase run, or at the last
            // capital of a run when it opens a new lowercase word.
            if !prev_upper || next_lower {
                out.push('_');
            }
        }
        out.push(c.to_ascii_uppercase());
    }

    out
}

/// Escape a string for use inside a C string literal.
///
/// Backslash must be escaped first so the other escapes are not doubled.
pub fn escape_c_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
