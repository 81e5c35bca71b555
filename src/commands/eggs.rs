//! Easter egg responses
//!
//! Whimsical no-op sub-commands. The random ones draw from the caller's RNG
//! so a seeded session produces repeatable output.

use crate::content::ContentStore;
use rand::seq::SliceRandom;
use rand::Rng;

const FORTUNES: [&str; 5] = [
    "You deploy, therefore you are.",
    "A pull request today keeps production calm tomorrow.",
    "Your next commit message will be legendary.",
    "Refactor boldly, but cover with tests.",
    "Somewhere, a linter smiles at you.",
];

const HAIKUS: [&str; 5] = [
    "Compile, run, repeat\nSilent logs watch pipelines flow\nGreen lights greet the dawn",
    "Cursor blinks in wait\nIdeas hum in midnight code\nTests dream of passing",
    "Version bumps again\nChangelog whispers quietly\nShip with confidence",
    "Refactor whispers\nFunctions learn a lighter step\nTech debt takes a bow",
    "Coffee fuels the keys\nThe borrow checker stands guard\nHumans craft the tale",
];

pub fn coffee() -> String {
    [
        "   ( (",
        "    ) )",
        "  ........",
        "  |      |]",
        "  \u{2615}     |",
        "  `------'",
        "",
        "Brewing... \u{2615} Done!",
    ]
    .join("\n")
}

pub fn konami(primary: &str) -> String {
    [
        "UP UP DOWN DOWN LEFT RIGHT LEFT RIGHT B A".to_string(),
        "Easter egg unlocked!".to_string(),
        "Portfolio shields disengaged... just kidding.".to_string(),
        format!("Bonus tip: alias warp='{} projects open 1'", primary),
    ]
    .join("\n")
}

pub fn matrix() -> String {
    [
        "01010100 01101001 01101101 01100101",
        "| | | | | | | | | | | |",
        "if (code) { craft(); }",
        "keep chasing the green glow...",
    ]
    .join("\n")
}

pub fn fortune<R: Rng + ?Sized>(rng: &mut R) -> String {
    let pick = FORTUNES.choose(rng).copied().unwrap_or(FORTUNES[0]);
    format!("* {}", pick)
}

/// Summary of a randomly chosen project
pub fn roll<R: Rng + ?Sized>(store: &ContentStore, rng: &mut R) -> String {
    let Some(pick) = store.projects().choose(rng) else {
        return "No projects available to roll.".to_string();
    };

    let mut lines = vec![format!("[roll] {}", pick.name)];
    if !pick.description.is_empty() {
        lines.push(format!("desc: {}", pick.description));
    }
    if let Some(demo) = &pick.demo {
        lines.push(format!("live: {}", demo));
    } else if let Some(github) = &pick.github {
        lines.push(format!("repo: {}", github));
    }
    lines.join("\n")
}

pub fn rick() -> String {
    [
        "Never gonna give you up.",
        "Never gonna let you down.",
        "Never gonna run around and desert you.",
        "",
        "Synthwave engaged.",
    ]
    .join("\n")
}

pub fn zen() -> String {
    [
        "    .-.",
        "   (   )",
        "    `-'",
        "    /|\\",
        "   /_|_\\",
        "",
        "Calm code, steady mind.",
    ]
    .join("\n")
}

pub fn haiku<R: Rng + ?Sized>(rng: &mut R) -> String {
    HAIKUS.choose(rng).copied().unwrap_or(HAIKUS[0]).to_string()
}

pub fn ping<R: Rng + ?Sized>(rng: &mut R) -> String {
    let latency: u32 = rng.gen_range(20..100);
    format!("pong: {}ms (loopback to creativity)", latency)
}

pub fn sudo(args: &[String], primary: &str) -> String {
    match args {
        [target, action, ..] if target == primary && action == "hack" => {
            "sudo: Permission denied. This portfolio is unhackable 😉".to_string()
        }
        _ => "sudo: command requires elevated imagination.".to_string(),
    }
}
