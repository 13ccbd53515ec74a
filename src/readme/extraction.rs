//! Markdown extraction for README build configuration.

use regex::Regex;

/// Return the "## Basic Information" section, up to the next `##` heading.
pub fn basic_information_section(content: &str) -> Option<&str> {
    let re = Regex::new(r"(?is)(## Basic Information.*?)(?:##|\z)").ok()?;
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Find the default tag declared in a Basic Information section.
///
/// `default-tag:` is preferred; a bare `tag:` is accepted as a fallback.
pub fn default_tag(section: &str) -> Option<String> {
    for pattern in [r"default-tag:\s*(\S+)", r"tag:\s*(\S+)"] {
        let re = Regex::new(pattern).ok()?;
        if let Some(caps) = re.captures(section) {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

/// Bodies of yaml blocks guarded by `tag`, in guard-syntax order.
///
/// Two guard syntaxes are recognised:
///
/// ```text
/// ```yaml $(tag) == 'package-2024-01'
/// ```yaml $(package-2024-01)
/// ```
///
/// At most one body is returned per syntax.
pub fn tag_block_bodies<'a>(content: &'a str, tag: &str) -> Vec<&'a str> {
    let tag = regex::escape(tag);
    let patterns = [
        format!(r#"(?s)```\s*yaml.*?\$\(tag\)\s*==\s*['"]{tag}['"](.*?)```"#),
        format!(r"(?s)```\s*yaml\s*\$\({tag}\)(.*?)```"),
    ];

    patterns
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .filter_map(|re| {
            re.captures(content)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
        .collect()
}
