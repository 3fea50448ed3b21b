//! Inline `style` attribute handling.

/// Parses `display: none; color: red` into ordered declarations. Malformed
/// entries without a colon are dropped.
pub(crate) fn parse(style: &str) -> Vec<(String, String)> {
    let mut declarations = Vec::new();
    for entry in style.split(';') {
        let Some((property, value)) = entry.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        if property.is_empty() {
            continue;
        }
        set_declaration(&mut declarations, &property, value.trim());
    }
    declarations
}

/// Sets or replaces `property`, keeping its original position. An empty
/// value removes the declaration.
pub(crate) fn set_declaration(declarations: &mut Vec<(String, String)>, property: &str, value: &str) {
    if value.is_empty() {
        declarations.retain(|(name, _)| name != property);
        return;
    }
    match declarations.iter_mut().find(|(name, _)| name == property) {
        Some((_, existing)) => *existing = value.to_string(),
        None => declarations.push((property.to_string(), value.to_string())),
    }
}

pub(crate) fn serialize(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
