//! Struct field tags in the conventional `key:"value" other:"value"` form.

/// A raw struct tag string, e.g. `json:"size,omitempty" protobuf:"varint,2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructTag<'a>(pub &'a str);

impl<'a> StructTag<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// Look up the value stored under `key`.
    ///
    /// Returns `None` when the key is absent or the tag is malformed past
    /// that point; scanning stops at the first syntax error.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let mut rest = self.0;

        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                return None;
            }

            let name_end = rest
                .find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\x7f')
                .unwrap_or(rest.len());
            if name_end == 0 || !rest[name_end..].starts_with(":\"") {
                return None;
            }
            let name = &rest[..name_end];
            rest = &rest[name_end + 2..];

            let (value, remaining) = scan_quoted(rest)?;
            rest = remaining;

            if name == key {
                return Some(value);
            }
        }
    }

    /// Like [`StructTag::lookup`] but an absent key yields an empty string.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }
}

/// Scan a quoted value whose opening quote was already consumed.
fn scan_quoted(s: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = s.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &s[i + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                value.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    other => other,
                });
            }
            other => value.push(other),
        }
    }

    None
}
