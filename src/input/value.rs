//! Tagged parameter values.

/// A configuration value as written in the input file.
///
/// ├ [`Value::Number`] : text matching the numeric pattern
/// ├ [`Value::List`]   : `[p1, p2, ...]`, each part a number or text
/// └ [`Value::Text`]   : anything else, verbatim
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Classifies a raw (already trimmed) value.
    pub fn parse(raw: &str) -> Self {
        if let Some(v) = parse_number(raw) {
            return Value::Number(v);
        }
        if let Some(inside) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let inside = inside.trim();
            // `[]` is an empty list, not a list holding one empty text part
            if inside.is_empty() {
                return Value::List(Vec::new());
            }
            let items = inside
                .split(',')
                .map(str::trim)
                .map(|part| match parse_number(part) {
                    Some(v) => Value::Number(v),
                    None    => Value::Text(part.to_string()),
                })
                .collect();
            return Value::List(items);
        }
        Value::Text(raw.to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_)   => "text",
            Value::List(_)   => "list",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s)   => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}


/// Parses `s` if it matches `[-+]?(\d+(\.\d*)?|\.\d+)([eE][-+]?\d+)?`.
///
/// Rust's `f64::from_str` alone would also accept `inf`, `NaN` and friends,
/// which must stay text.
pub fn parse_number(s: &str) -> Option<f64> {
    if is_numeric_literal(s) { s.parse().ok() } else { None }
}

fn is_numeric_literal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    let digits = |i: &mut usize| {
        let start = *i;
        while *i < b.len() && b[*i].is_ascii_digit() { *i += 1; }
        *i - start
    };

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') { i += 1; }

    let int_digits = digits(&mut i);
    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        frac_digits = digits(&mut i);
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') { i += 1; }
        if digits(&mut i) == 0 {
            return false;
        }
    }
    i == b.len()
}
