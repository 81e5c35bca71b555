//! Text renderers for portfolio sections
//!
//! Every function here is a pure view over the [`ContentStore`] and returns
//! newline-separated text; the output buffer splits it into lines.

use crate::content::{ContentStore, Project, TimelineKind};

/// `━━ Title ━━` block followed by a blank line and the body
pub fn section(title: &str, lines: &[String]) -> String {
    let mut out = vec![format!("━━ {} ━━", title), String::new()];
    out.extend(lines.iter().cloned());
    out.join("\n")
}

pub fn help(primary: &str) -> String {
    [
        format!("Usage: {} <command> [options]", primary),
        String::new(),
        "Commands:".to_string(),
        "  --help, -h                  Show this help".to_string(),
        "  sections ls                 List available sections".to_string(),
        "  sections <section-name>     Show a section in ASCII".to_string(),
        "  projects ls                 List projects".to_string(),
        "  projects \"<name>\"           Show project details".to_string(),
        "  projects open <index>       Open project link".to_string(),
        "  resume -d <lang>            Download resume".to_string(),
        "  contact                     Show contact details".to_string(),
        "  stack                       Show tech stack summary".to_string(),
        "  education | experience      Show timeline entries".to_string(),
        "  dev contact                 Send a message".to_string(),
        "  coffee                      Brew a terminal coffee".to_string(),
        String::new(),
        "Sections:".to_string(),
        "  about  education  experience  certifications  stack  projects  resume  contact"
            .to_string(),
        String::new(),
        "Global:".to_string(),
        "  username-switch '<name>'    Change prompt username".to_string(),
        "  alias [<a>=<cmd>]           Create alias or list all aliases".to_string(),
        "  unalias <alias>             Remove an alias".to_string(),
        "  history                     Show command history".to_string(),
        "  clear                       Clear the screen".to_string(),
        "  switch gui | exit           Return to GUI".to_string(),
    ]
    .join("\n")
}

pub fn sections_usage(primary: &str) -> String {
    [
        "Usage:".to_string(),
        format!("  {} sections ls", primary),
        format!("  {} sections <section-name>", primary),
        String::new(),
        format!("Try: {} sections ls", primary),
    ]
    .join("\n")
}

pub fn sections_list(primary: &str) -> String {
    let mut lines = vec!["Available sections:".to_string()];
    for name in [
        "about",
        "education",
        "experience",
        "certifications",
        "stack",
        "projects",
        "resume",
        "contact",
    ] {
        lines.push(format!("  • {}", name));
    }
    lines.push(String::new());
    lines.push(format!("Tip: {} sections <section-name>", primary));
    lines.join("\n")
}

pub fn about(store: &ContentStore) -> String {
    let bio: Vec<String> = store.profile().bio.lines().map(str::to_string).collect();
    section("About", &bio)
}

pub fn timeline(store: &ContentStore, kind: TimelineKind) -> String {
    let mut lines = Vec::new();
    for item in store.timeline(kind) {
        lines.push(format!("{} {}", item.kind.badge(), item.title));
        lines.push(format!("  {}", item.org));
        lines.push(format!("  {} - {}", item.start, item.end));
        if let Some(description) = &item.description {
            lines.push(format!("  ↳ {}", description));
        }
        lines.push(String::new());
    }
    section(kind.title(), &lines)
}

pub fn certifications(store: &ContentStore) -> String {
    let certs = store.certifications();
    if certs.is_empty() {
        return "No certifications available.".to_string();
    }

    let mut lines = Vec::new();
    for cert in certs {
        let badge = if cert.verify_url.is_some() { "✓" } else { "○" };
        lines.push(format!("{} {}", badge, cert.name));
        lines.push(format!("  Issuer: {}", cert.issuer));
        if let Some(url) = &cert.verify_url {
            lines.push(format!("  Verify: {}", url));
        } else if let Some(id) = &cert.certificate_id {
            lines.push(format!("  ID: {}", id));
        }
        lines.push(String::new());
    }
    section("Certifications", &lines)
}

pub fn stack(store: &ContentStore) -> String {
    let stack = store.stack();
    if stack.is_empty() {
        return "Tech stack data unavailable.".to_string();
    }

    let mut lines = vec!["Frontend:".to_string()];
    lines.extend(
        stack
            .frontend
            .iter()
            .map(|item| format!("  - {} ({})", item.name, item.kind.label())),
    );
    lines.push(String::new());
    lines.push("Backend & Platforms:".to_string());
    lines.extend(
        stack
            .backend
            .iter()
            .map(|item| format!("  - {} ({})", item.name, item.kind.label())),
    );
    section("Tech Stack", &lines)
}

/// `NN) Name` listing used by `projects ls`
pub fn project_list(store: &ContentStore) -> String {
    if store.projects().is_empty() {
        return "No projects found.".to_string();
    }
    store
        .projects()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:02}) {}", i + 1, p.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn projects_section(store: &ContentStore, primary: &str) -> String {
    let mut lines: Vec<String> = store
        .projects()
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:02}. {}", i + 1, p.name))
        .collect();
    lines.push(String::new());
    lines.push(format!("Tip: {} projects <name> for details", primary));
    section("Projects", &lines)
}

pub fn project_details(project: &Project) -> String {
    let mut lines = vec![
        format!("Name: {}", project.name),
        format!("Description: {}", project.description),
    ];
    if !project.tags.is_empty() {
        lines.push(format!("Tags: {}", project.tags.join(", ")));
    }
    if let Some(github) = &project.github {
        lines.push(format!("GitHub: {}", github));
    }
    if let Some(demo) = &project.demo {
        lines.push(format!("Live: {}", demo));
    }
    lines.join("\n")
}

pub fn resume_section(store: &ContentStore, primary: &str) -> String {
    let mut lines: Vec<String> = store
        .resumes()
        .iter()
        .map(|r| format!("📄 {}: {}", r.label, r.path))
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "Download: {} resume -d {}",
        primary,
        store.resume_languages().join("|")
    ));
    section("Resume", &lines)
}

/// Plain `Label: value` contact lines used by `<primary> contact`
pub fn contact(store: &ContentStore) -> String {
    let profile = store.profile();
    let mut lines = Vec::new();
    if !profile.email.is_empty() {
        lines.push(format!("Email: {}", profile.email));
    }
    if let Some(github) = &profile.socials.github {
        lines.push(format!("GitHub: {}", github));
    }
    if let Some(linkedin) = &profile.socials.linkedin {
        lines.push(format!("LinkedIn: {}", linkedin));
    }
    if let Some(x) = &profile.socials.x {
        lines.push(format!("X: {}", x));
    }
    if let Some(phone) = &profile.phone {
        lines.push(format!("Phone: {}", phone));
    }
    lines.join("\n")
}

pub fn contact_section(store: &ContentStore) -> String {
    let profile = store.profile();
    let mut lines = Vec::new();
    if let Some(phone) = &profile.phone {
        lines.push(format!("☎  {}", phone));
    }
    if !profile.email.is_empty() {
        lines.push(format!("✉  {}", profile.email));
    }
    for link in [
        &profile.socials.github,
        &profile.socials.linkedin,
        &profile.socials.x,
        &profile.socials.website,
    ]
    .into_iter()
    .flatten()
    {
        lines.push(format!("🔗 {}", link));
    }
    section("Contact", &lines)
}
