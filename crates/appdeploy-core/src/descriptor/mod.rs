//! Reader for the standard environment descriptor (appengine-web.xml).
//!
//! Only the identifying fields are extracted. Missing elements are reported as
//! `None` so that callers decide whether absence is fatal.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::Context;
use regex_lite::Regex;

/// Default location of the descriptor relative to the project root.
pub const DEFAULT_DESCRIPTOR_PATH: &str = "src/main/webapp/WEB-INF/appengine-web.xml";

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static APPLICATION_RE: LazyLock<Regex> = LazyLock::new(|| element_pattern("application"));

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| element_pattern("version"));

fn element_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"(?s)<{name}(?:\s[^>]*)?>(.*?)</{name}\s*>"))
        .expect("element pattern is valid")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppEngineWebXml {
    pub application: Option<String>,
    pub version: Option<String>,
}

impl AppEngineWebXml {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;
        Self::parse_str(&content)
            .with_context(|| format!("Failed to parse descriptor: {}", path.display()))
    }

    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        let stripped = COMMENT_RE.replace_all(content, "");

        if !stripped.contains("<appengine-web-app") {
            anyhow::bail!("Missing <appengine-web-app> root element");
        }

        Ok(Self {
            application: element_text(&APPLICATION_RE, &stripped),
            version: element_text(&VERSION_RE, &stripped),
        })
    }
}

/// Text of the first element matched by `re`, trimmed. Empty text is absent.
fn element_text(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape(m.as_str().trim()))
        .filter(|value| !value.is_empty())
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
