//! Helpers that make rendered output comparable across test runs.

use std::sync::LazyLock;

use regex::Regex;
use replview_types::diagnostic;

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\d+").unwrap());

/// Replace every identity token (`#123`) with `#[id]`.
///
/// Object ids come from a process-wide counter, so their values depend on
/// test ordering.
pub fn redact_tokens(rendered: &str) -> String {
    TOKEN_REGEX.replace_all(rendered, "#[id]").into_owned()
}

/// Records the diagnostic handler depth on creation and checks it is
/// unchanged when [`HandlerDepthGuard::assert_restored`] is called.
pub struct HandlerDepthGuard {
    depth: usize,
}

impl Default for HandlerDepthGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerDepthGuard {
    pub fn new() -> Self {
        Self {
            depth: diagnostic::handler_depth(),
        }
    }

    pub fn assert_restored(&self) {
        let now = diagnostic::handler_depth();
        assert_eq!(
            now, self.depth,
            "diagnostic handler stack changed: {} before, {} after",
            self.depth, now
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_tokens() {
        assert_eq!(redact_tokens("<Foo #12> {}"), "<Foo #[id]> {}");
        assert_eq!(
            redact_tokens("<strong>#3</strong> and #45"),
            "<strong>#[id]</strong> and #[id]"
        );
        assert_eq!(redact_tokens("no tokens"), "no tokens");
    }
}
