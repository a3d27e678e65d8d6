//! HTML sanitization boundary for authored content.

use std::fmt;

/// HTML that went through [`sanitize`]; the only kind the views inject.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip scripts, event handlers and unknown tags; links get
/// `rel="noopener noreferrer"`.
pub fn sanitize(html: &str) -> SafeHtml {
    SafeHtml(ammonia::clean(html))
}
