//! Generated commit messages and conventional commit header parsing.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Subject prefixes the generation prompt allows.
pub const RECOGNIZED_PREFIXES: [&str; 7] = [
    "feat:", "fix:", "docs:", "style:", "refactor:", "test:", "chore:",
];

// type(scope)!: description, with scope and `!` optional
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)(?:\(([^)]+)\))?(!)?\s*:\s*").expect("header pattern is valid")
});

/// Conventional commit types accepted in generated messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Chore,
}

impl CommitType {
    pub const ALL: [CommitType; 7] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Test,
        CommitType::Chore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "style" => Ok(Self::Style),
            "refactor" => Ok(Self::Refactor),
            "test" => Ok(Self::Test),
            "chore" => Ok(Self::Chore),
            _ => Err(format!("Unknown commit type: {}", s)),
        }
    }
}

/// Parsed first line of a conventional commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalHeader {
    /// Type token as written, e.g. `feat` or `perf`.
    pub raw_type: String,
    /// Recognized type, `None` for tokens outside the accepted set.
    pub commit_type: Option<CommitType>,
    pub scope: Option<String>,
    pub breaking: bool,
}

/// A commit message produced by a backend.
///
/// Holds the cleaned text verbatim. Nothing here rejects a message; the
/// inspection helpers only report on its shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First line of the message.
    pub fn subject(&self) -> &str {
        self.0.lines().next().unwrap_or("")
    }

    /// Whether the message starts with one of [`RECOGNIZED_PREFIXES`].
    pub fn has_recognized_prefix(&self) -> bool {
        RECOGNIZED_PREFIXES.iter().any(|p| self.0.starts_with(p))
    }

    /// Parse the subject line as a conventional commit header.
    ///
    /// Returns `None` when the subject has no `type:` shape at all.
    pub fn header(&self) -> Option<ConventionalHeader> {
        let caps = HEADER_RE.captures(self.subject())?;

        let raw_type = caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string();
        let scope = caps.get(2).map(|m| m.as_str().to_string());
        let breaking = caps.get(3).is_some()
            || self.0.contains("BREAKING CHANGE:")
            || self.0.contains("BREAKING-CHANGE:");

        Some(ConventionalHeader {
            commit_type: raw_type.parse::<CommitType>().ok(),
            raw_type,
            scope,
            breaking,
        })
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CommitMessage {
    fn from(text: String) -> Self {
        Self(text)
    }
}
