//! # CSS to XPath Translation
//!
//! A small translator for the CSS subset test authors actually reach for:
//! type selectors, `*`, `#id`, `.class`, `[attr]`, `[attr=value]`, and the
//! descendant / child combinators. Type selectors match on local names, so
//! namespaced response documents behave the same way the structure matcher
//! treats them. Anything outside the subset is a translation error, which
//! the locator takes as the cue to interpret the selector as raw XPath.

/// Translate a CSS selector into an XPath expression, or report why the
/// input is not a supported CSS selector.
pub fn to_xpath(selector: &str) -> Result<String, String> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err("Empty selector".to_string());
    }

    // Normalize `a>b` to token form before splitting on whitespace.
    let normalized = trimmed.replace('>', " > ");

    let mut xpath = String::new();
    let mut child_combinator = false;
    let mut expecting_selector = true;
    for token in normalized.split_whitespace() {
        if token == ">" {
            if expecting_selector {
                return Err("Dangling `>` combinator".to_string());
            }
            child_combinator = true;
            expecting_selector = true;
            continue;
        }
        xpath.push_str(if xpath.is_empty() || !child_combinator { "//" } else { "/" });
        xpath.push_str(&translate_step(token)?);
        child_combinator = false;
        expecting_selector = false;
    }
    if expecting_selector {
        return Err("Dangling `>` combinator".to_string());
    }
    Ok(xpath)
}

/// Translate one simple selector (no combinators) into an XPath step.
fn translate_step(simple: &str) -> Result<String, String> {
    let chars: Vec<char> = simple.chars().collect();
    let mut i = 0;

    let mut step = if chars[0] == '*' {
        i += 1;
        "*".to_string()
    } else if is_name_start(chars[0]) {
        let name = read_name(&chars, &mut i);
        format!("*[local-name()='{name}']")
    } else {
        "*".to_string()
    };

    while i < chars.len() {
        match chars[i] {
            '#' => {
                i += 1;
                let id = read_name(&chars, &mut i);
                if id.is_empty() {
                    return Err("Expected identifier after `#`".to_string());
                }
                step.push_str(&format!("[@id='{id}']"));
            }
            '.' => {
                i += 1;
                let class = read_name(&chars, &mut i);
                if class.is_empty() {
                    return Err("Expected identifier after `.`".to_string());
                }
                step.push_str(&format!(
                    "[contains(concat(' ', normalize-space(@class), ' '), ' {class} ')]"
                ));
            }
            '[' => {
                i += 1;
                let close = chars[i..]
                    .iter()
                    .position(|&c| c == ']')
                    .ok_or_else(|| "Unclosed `[` in selector".to_string())?;
                let inside: String = chars[i..i + close].iter().collect();
                i += close + 1;
                step.push_str(&translate_attribute(inside.trim())?);
            }
            other => {
                return Err(format!("Unsupported character `{other}` in selector"));
            }
        }
    }
    Ok(step)
}

fn translate_attribute(inside: &str) -> Result<String, String> {
    let (name, value) = match inside.split_once('=') {
        Some((name, value)) => (name.trim(), Some(strip_quotes(value.trim()))),
        None => (inside, None),
    };
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(format!("Invalid attribute name `{name}` in selector"));
    }
    match value {
        Some(value) => {
            if value.contains('\'') {
                return Err("Attribute value must not contain quotes".to_string());
            }
            Ok(format!("[@{name}='{value}']"))
        }
        None => Ok(format!("[@{name}]")),
    }
}

fn strip_quotes(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn read_name(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len() && is_name_char(chars[*i]) {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_selector_matches_by_local_name() {
        assert_eq!(to_xpath("city").unwrap(), "//*[local-name()='city']");
    }

    #[test]
    fn universal_id_class_and_attributes() {
        assert_eq!(to_xpath("*").unwrap(), "//*");
        assert_eq!(to_xpath("#main").unwrap(), "//*[@id='main']");
        assert_eq!(
            to_xpath(".note").unwrap(),
            "//*[contains(concat(' ', normalize-space(@class), ' '), ' note ')]"
        );
        assert_eq!(to_xpath("a[href]").unwrap(), "//*[local-name()='a'][@href]");
        assert_eq!(
            to_xpath(r#"a[rel="next"]"#).unwrap(),
            "//*[local-name()='a'][@rel='next']"
        );
    }

    #[test]
    fn combinators() {
        assert_eq!(
            to_xpath("a b").unwrap(),
            "//*[local-name()='a']//*[local-name()='b']"
        );
        assert_eq!(
            to_xpath("a > b").unwrap(),
            "//*[local-name()='a']/*[local-name()='b']"
        );
        assert_eq!(
            to_xpath("a>b").unwrap(),
            "//*[local-name()='a']/*[local-name()='b']"
        );
    }

    #[test]
    fn compound_simple_selector() {
        assert_eq!(
            to_xpath("div#main[role=grid]").unwrap(),
            "//*[local-name()='div'][@id='main'][@role='grid']"
        );
    }

    #[test]
    fn xpath_flavored_input_is_rejected() {
        assert!(to_xpath("//a/b").is_err());
        assert!(to_xpath("descendant::a").is_err());
        assert!(to_xpath("a/text()").is_err());
    }

    #[test]
    fn malformed_selectors_are_rejected() {
        assert!(to_xpath("").is_err());
        assert!(to_xpath("a >").is_err());
        assert!(to_xpath("> a").is_err());
        assert!(to_xpath("a[unclosed").is_err());
        assert!(to_xpath("#").is_err());
    }
}
