//! Terminal display surface: banner, status lines, and turns.

use std::io::{self, Write};
use std::path::Path;

use minichat_ai::{Role, Turn};
use minichat_config::schema::DisplayConfig;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warning,
    Error,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Status::Success => "[ok]",
            Status::Info => "[info]",
            Status::Warning => "[warn]",
            Status::Error => "[error]",
        }
    }
}

pub fn banner(out: &mut impl Write, display: &DisplayConfig) -> io::Result<()> {
    writeln!(out, "{}", display.title)?;
    writeln!(out, "{}", "=".repeat(display.title.chars().count()))?;
    writeln!(out, "{}", display.caption)?;
    writeln!(out)
}

pub fn status(out: &mut impl Write, status: Status, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", status.tag())
}

fn label(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "assistant",
    }
}

/// One turn; continuation lines are indented under the label.
pub fn turn(out: &mut impl Write, turn: &Turn) -> io::Result<()> {
    let label = label(turn.role());
    let indent = " ".repeat(label.len() + 2);
    let mut lines = turn.text().lines();
    writeln!(out, "{label}> {}", lines.next().unwrap_or(""))?;
    for line in lines {
        writeln!(out, "{indent}{line}")?;
    }
    writeln!(out)
}

pub fn history(out: &mut impl Write, turns: &[Turn]) -> io::Result<()> {
    if turns.is_empty() {
        return status(out, Status::Info, "No messages yet.");
    }
    turns.iter().try_for_each(|t| turn(out, t))
}

pub fn input_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}> ", label(Role::User))?;
    out.flush()
}

/// Setup steps shown when no API key is configured.
pub fn setup_guidance(out: &mut impl Write, key_name: &str, secrets_file: &Path) -> io::Result<()> {
    status(
        out,
        Status::Error,
        &format!(
            "Google AI API Key not found. Please add it to your secrets as '{key_name}'."
        ),
    )?;
    writeln!(out, "  1. Get your key from Google AI Studio: https://aistudio.google.com/app/apikey")?;
    writeln!(out, "  2. Export it: `export {key_name}=<your key>` (or add it to a .env file).")?;
    writeln!(
        out,
        "  3. Or add `{key_name} = \"<your key>\"` to {}.",
        secrets_file.display()
    )?;
    writeln!(out, "  4. Restart minichat.")
}

pub fn commands_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands: /history  /reset  /retry  /help  /quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn banner_shows_title_and_caption() {
        let out = rendered(|o| banner(o, &DisplayConfig::default()));
        assert!(out.starts_with("Mini Conlang Chatbot\n"));
        assert!(out.contains("Uses Gemini."));
    }

    #[test]
    fn turn_indents_continuation_lines() {
        let out = rendered(|o| turn(o, &Turn::assistant("line one\nline two")));
        assert_eq!(out, "assistant> line one\n           line two\n\n");
    }

    #[test]
    fn history_renders_in_order() {
        let turns = [Turn::user("hello"), Turn::assistant("Sa mi!")];
        let out = rendered(|o| history(o, &turns));
        let hello = out.find("you> hello").unwrap();
        let reply = out.find("assistant> Sa mi!").unwrap();
        assert!(hello < reply);
    }

    #[test]
    fn empty_history_says_so() {
        let out = rendered(|o| history(o, &[]));
        assert_eq!(out, "[info] No messages yet.\n");
    }

    #[test]
    fn setup_guidance_names_the_secret() {
        let out = rendered(|o| {
            setup_guidance(o, "GOOGLE_API_KEY", Path::new(".minichat/secrets.toml"))
        });
        assert!(out.starts_with("[error] Google AI API Key not found"));
        assert!(out.contains("export GOOGLE_API_KEY="));
        assert!(out.contains(".minichat/secrets.toml"));
        assert!(out.contains("aistudio.google.com"));
    }
}
