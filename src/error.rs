//! Errors raised while moving a node tree across the JSON boundary.
//!
//! Building a tree never fails; only decoding (bad input) and encoding
//! (values JSON cannot carry) do.

/// Where and why a JSON document failed to decode into a [`Node`](crate::Node).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", located(.path, .message, .line, .column))]
pub struct ParseError {
    pub message: String,
    /// Path to the offending field, e.g. `content.children[1].elevation`.
    /// `"."` when the failure is not tied to a field (syntax errors, root).
    pub path: String,
    pub line: usize,
    pub column: usize,
    pub context_line: Option<String>,
}

impl ParseError {
    pub(crate) fn too_deep(line: usize, column: usize, limit: usize, contents: &str) -> Self {
        ParseError {
            message: format!("nesting too deep, limit is {} levels", limit),
            path: ".".to_string(),
            line,
            column,
            context_line: contents.lines().nth(line.saturating_sub(1)).map(|s| s.to_string()),
        }
    }

    pub(crate) fn from_serde_error(e: &serde_json::Error, path: String, contents: &str) -> Self {
        let line = e.line();
        let column = e.column();

        let context_line = contents
            .lines()
            .nth(line.saturating_sub(1))
            .map(|s| s.to_string());

        let message = match e.classify() {
            serde_json::error::Category::Io => format!("I/O error: {}", e),
            serde_json::error::Category::Eof => "unexpected end of input".to_string(),
            serde_json::error::Category::Syntax | serde_json::error::Category::Data => {
                // serde_json appends " at line X column Y", which we keep separately
                let full = e.to_string();
                match full.find(" at line ") {
                    Some(idx) => full[..idx].to_string(),
                    None => full,
                }
            }
        };

        ParseError {
            message,
            path,
            line,
            column,
            context_line,
        }
    }
}

fn located(path: &str, message: &str, line: &usize, column: &usize) -> String {
    let mut out = if path == "." {
        message.to_string()
    } else {
        format!("{}: {}", path, message)
    };
    if *line > 0 {
        out.push_str(&format!(" (line {}, column {})", line, column));
    }
    out
}

#[derive(Debug, thiserror::Error)]
pub enum SsrError {
    #[error("failed to parse node JSON: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to encode node: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("node tree nests {depth} levels deep, limit is {limit}")]
    TooDeep { depth: usize, limit: usize },
}

impl SsrError {
    /// The parse details, if this error came from decoding.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            SsrError::Parse(e) => Some(e),
            SsrError::Encode(_) | SsrError::TooDeep { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SsrError>;
