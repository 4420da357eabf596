//! Component and file name helpers

/// Upper-case the first character
fn cap_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join space-separated tokens into one identifier, capitalising each token
pub fn to_function_name(input: &str) -> String {
    input
        .split(' ')
        .map(|token| cap_first(token.trim()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// `sidebar menu` -> `SidebarMenu`
pub fn to_upper_camel_case(input: &str) -> String {
    input
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(cap_first)
        .collect()
}

/// `sidebar menu` -> `sidebarMenu`
pub fn to_lower_camel_case(input: &str) -> String {
    let upper = to_upper_camel_case(input);
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A plain JavaScript identifier: letter, `_` or `$`, then also digits
pub fn is_valid_function_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Drop a trailing `.module.css` or `.css`
pub fn strip_css_extension(name: &str) -> String {
    name.strip_suffix(".module.css")
        .or_else(|| name.strip_suffix(".css"))
        .unwrap_or(name)
        .to_string()
}
