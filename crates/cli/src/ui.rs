//! Terminal presentation helpers: styling, prompts, and the banner.
//!
//! Prompts are interrupt-aware: Ctrl+C while waiting for input resolves to
//! `None`, which callers treat as "leave the current screen".

use std::io::Write;

use owo_colors::OwoColorize;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tokio::signal;

pub const BANNER: &str = r#"
 _     ___ _   _ _  ____     ___  _   _ _   _____
| |   |_ _| \ | | |/ /\ \   / /_\ | | | | | |_   _|
| |    | ||  \| | ' /  \ \ / / _ \| | | | |   | |
| |___ | || |\  | . \   \ V / ___ \ |_| | |___| |
|_____|___|_| \_|_|\_\   \_/_/   \_\___/|_____|_|
"#;

pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = std::io::stdout().flush();
}

pub fn banner() {
    println!("{}", BANNER.red());
}

pub fn headline(text: &str) {
    println!("{}", text.red().bold());
}

pub fn line(text: &str) {
    println!("{}", text.red());
}

pub fn notice(text: &str) {
    println!("{}", format!("[*] {}", text).red());
}

pub fn success(text: &str) {
    println!("{}", format!("[+] {}", text).red());
}

pub fn problem(text: &str) {
    println!("{}", format!("[!] {}", text).red());
}

/// Print a label and read one line. Resolves to `None` on Ctrl+C or end of
/// input.
pub async fn prompt(label: &str) -> Option<String> {
    print!("{} ", label.red());
    let _ = std::io::stdout().flush();

    let mut reader = BufReader::new(stdin());
    let mut input = String::new();

    tokio::select! {
        read = reader.read_line(&mut input) => match read {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(_) => None,
        },
        _ = signal::ctrl_c() => {
            println!();
            None
        }
    }
}

/// Block until the operator acknowledges.
pub async fn pause() {
    let _ = prompt("\nPress Enter to continue...").await;
}

/// Parse a 1-based selection typed by the operator.
pub fn parse_index(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}
