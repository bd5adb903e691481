//! Flat-namespace wildcard matching with `*` and `?`.
//!
//! Unlike shell globbing, `/` has no special meaning: `*` matches any run of
//! bytes including separators, and `?` matches exactly one byte.

/// True if `name` matches `pattern`.
pub fn matches(pattern: &str, name: &str) -> bool {
    match pattern {
        "" => name.is_empty(),
        "*" => true,
        _ => deep_match(name.as_bytes(), pattern.as_bytes(), false),
    }
}

/// Like [`matches`], but a `?` may also match the end of `name`, so `a?`
/// matches `a`.
pub fn matches_simple(pattern: &str, name: &str) -> bool {
    match pattern {
        "" => name.is_empty(),
        "*" => true,
        _ => deep_match(name.as_bytes(), pattern.as_bytes(), true),
    }
}

/// True if `pattern` contains a wildcard character.
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

/// True if `text` could be the beginning of a name matching `pattern`.
///
/// | Pattern  | Text     | Result |
/// |----------|----------|--------|
/// | `abc*`   | `ab`     | true   |
/// | `abc*`   | `abd`    | false  |
/// | `abc*c`  | `abcd`   | true   |
/// | `ab??d`  | `abxc`   | true   |
/// | `ab??d`  | `abcxdd` | false  |
pub fn matches_as_prefix(pattern: &str, text: &str) -> bool {
    let (pattern, text) = (pattern.as_bytes(), text.as_bytes());
    for (&p, &t) in pattern.iter().zip(text) {
        match p {
            b'*' => return true,
            b'?' => continue,
            _ if p != t => return false,
            _ => {}
        }
    }
    text.len() <= pattern.len()
}

fn deep_match(mut name: &[u8], mut pattern: &[u8], simple: bool) -> bool {
    while let Some((&p, rest)) = pattern.split_first() {
        match p {
            b'*' => {
                return rest.is_empty()
                    || deep_match(name, rest, simple)
                    || (!name.is_empty() && deep_match(&name[1..], pattern, simple));
            }
            b'?' if name.is_empty() => return simple,
            b'?' => {}
            _ if name.first() != Some(&p) => return false,
            _ => {}
        }
        name = &name[1..];
        pattern = rest;
    }
    name.is_empty()
}
