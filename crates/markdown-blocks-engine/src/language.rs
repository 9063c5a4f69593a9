//! # Code Language Normalization
//!
//! Maps the raw tag found after an opening code fence onto one of the
//! language identifiers the content API accepts. Unknown tags degrade to
//! [`CodeLanguage::PLAIN_TEXT`]; this module never fails.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Common shorthands and their canonical identifiers.
const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("rb", "ruby"),
    ("cs", "csharp"),
    ("c#", "csharp"),
    ("c++", "cpp"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("yml", "yaml"),
    ("md", "markdown"),
    ("scss", "css"),
    ("sass", "css"),
];

/// Every identifier a code block may carry.
///
/// Alias keys never appear here, so each entry normalizes to itself. This is
/// why `cpp` and `csharp` replace the API's own `c++` and `c#` spellings.
const SUPPORTED: &[&str] = &[
    "abap",
    "arduino",
    "basic",
    "c",
    "clojure",
    "coffeescript",
    "cpp",
    "csharp",
    "css",
    "dart",
    "diff",
    "docker",
    "elixir",
    "elm",
    "erlang",
    "flow",
    "fortran",
    "f#",
    "gherkin",
    "glsl",
    "go",
    "graphql",
    "groovy",
    "haskell",
    "html",
    "java",
    "javascript",
    "json",
    "julia",
    "kotlin",
    "latex",
    "less",
    "lisp",
    "livescript",
    "lua",
    "makefile",
    "markdown",
    "markup",
    "matlab",
    "mermaid",
    "nix",
    "objective-c",
    "ocaml",
    "pascal",
    "perl",
    "php",
    "plain text",
    "powershell",
    "prolog",
    "protobuf",
    "python",
    "r",
    "reason",
    "ruby",
    "rust",
    "scala",
    "scheme",
    "shell",
    "sql",
    "swift",
    "typescript",
    "vb.net",
    "verilog",
    "vhdl",
    "visual basic",
    "webassembly",
    "xml",
    "yaml",
    "java/c/c++/c#",
];

/// A whitelisted code block language.
///
/// Only constructed through [`normalize_language`], so the wrapped identifier
/// is always a member of the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CodeLanguage(&'static str);

impl CodeLanguage {
    pub const PLAIN_TEXT: CodeLanguage = CodeLanguage("plain text");

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Default for CodeLanguage {
    fn default() -> Self {
        Self::PLAIN_TEXT
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Returns every supported language identifier.
pub fn supported_languages() -> &'static [&'static str] {
    SUPPORTED
}

/// Normalizes a raw fence tag to a supported language.
///
/// The tag is trimmed and lowercased, resolved through the alias table, and
/// checked against the whitelist. Anything not on it becomes plain text.
pub fn normalize_language(raw: &str) -> CodeLanguage {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() {
        return CodeLanguage::PLAIN_TEXT;
    }

    let candidate = ALIASES
        .iter()
        .find(|(alias, _)| *alias == tag)
        .map_or(tag.as_str(), |(_, canonical)| *canonical);

    SUPPORTED
        .iter()
        .find(|lang| **lang == candidate)
        .map_or(CodeLanguage::PLAIN_TEXT, |lang| CodeLanguage(*lang))
}

/// Extracts the raw language tag from text that starts with a code fence.
///
/// Returns the tag exactly as written, or `"plain text"` when the text does
/// not open a fence or the fence carries no tag.
pub fn detect_code_block_language(text: &str) -> String {
    static FENCE_TAG: OnceLock<Regex> = OnceLock::new();
    let fence_tag = FENCE_TAG
        .get_or_init(|| Regex::new(r"^```([a-zA-Z0-9_+-]+)").expect("Invalid fence tag regex"));

    fence_tag
        .captures(text.trim())
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || CodeLanguage::PLAIN_TEXT.as_str().to_string(),
            |tag| tag.as_str().to_string(),
        )
}
