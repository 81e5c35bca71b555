//! Test Fixtures
//!
//! Common portfolio content and session builders shared by the test targets.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use termfolio::config::Config;
use termfolio::content::ContentStore;
use termfolio::preferences::{MemoryPreferenceStore, PreferenceStore};
use termfolio::Session;

/// Small but complete portfolio document
pub const FIXTURE_CONTENT: &str = r#"
[profile]
name = "Ada Test"
headline = "Systems engineer"
bio = "Builds small sharp tools."
email = "ada@example.com"
phone = "+1 555 0100"

[profile.socials]
github = "https://github.com/ada"
linkedin = "https://linkedin.com/in/ada"

[[projects]]
name = "Alpha"
description = "A command-line toolkit"
tags = ["rust", "cli"]
github = "https://github.com/ada/alpha"
demo = "https://alpha.example.com"

[[projects]]
name = "Queue Watch"
description = "Job queue dashboard"
github = "https://github.com/ada/queue-watch"

[[projects]]
name = "Notes"
description = "Offline notes"

[[certifications]]
name = "Cloud Practitioner"
issuer = "Example Cloud"
verify_url = "https://verify.example.com/123"

[stack]
frontend = [{ name = "TypeScript", kind = "language" }]
backend = [
  { name = "Rust", kind = "language" },
  { name = "PostgreSQL", kind = "database" },
]

[[timeline]]
type = "education"
title = "BSc Computer Science"
org = "Example University"
start = "2014"
end = "2017"

[[timeline]]
type = "experience"
title = "Software Engineer"
org = "Example Corp"
start = "2018"
end = "Present"
description = "Backend services"

[[resume]]
lang = "en"
label = "Resume (EN)"
path = "/resume/ada-en.pdf"

[[resume]]
lang = "fr"
label = "CV (FR)"
path = "/resume/ada-fr.pdf"
"#;

/// Fixture content store
pub fn test_content() -> ContentStore {
    ContentStore::from_toml_str(FIXTURE_CONTENT).expect("fixture content parses")
}

/// Default configuration without the boot banner
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.session.show_boot_message = false;
    config
}

/// Session over the fixture content with in-memory preferences
pub fn test_session() -> Session {
    session_with_store(Box::new(MemoryPreferenceStore::new()))
}

/// Session over the fixture content with the given preference store
pub fn session_with_store(store: Box<dyn PreferenceStore>) -> Session {
    Session::new(test_config(), test_content(), store).with_rng(StdRng::seed_from_u64(42))
}

/// Submit `line` and return the text lines it produced (echo excluded)
pub fn run(session: &mut Session, line: &str) -> Vec<String> {
    let start = session.output().next_id();
    session.submit(line);
    session
        .output()
        .since(start)
        .map(|l| l.text.clone())
        .filter(|text| !text.starts_with("[[PROMPT]]"))
        .collect()
}
