//! Interactive commands read from stdin.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a resume file, or clear the selection when no path is given.
    Resume(Option<PathBuf>),
    /// Replace the job description with the rest of the line, verbatim.
    Jd(String),
    JdFile(PathBuf),
    Submit,
    Show,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &[&str] = &[
    "Commands:",
    "  resume <path>    select a resume file (.pdf, .png, .jpg, .jpeg)",
    "  resume           clear the selected resume",
    "  jd <text>        set the job description",
    "  jd-file <path>   read the job description from a file",
    "  submit           analyze the resume against the job description",
    "  show             print the current form and results",
    "  quit             exit",
];

/// Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    if line.trim().is_empty() {
        return None;
    }

    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    let command = match word {
        "resume" => {
            let path = rest.trim();
            Command::Resume((!path.is_empty()).then(|| PathBuf::from(path)))
        }
        "jd" => Command::Jd(rest.to_string()),
        "jd-file" if !rest.trim().is_empty() => Command::JdFile(PathBuf::from(rest.trim())),
        "submit" => Command::Submit,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    };
    Some(command)
}

/// Reads stdin on a helper thread. The channel closes at end of input.
pub fn spawn_stdin_reader() -> mpsc::Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = parse_command(&line) {
                if tx.send(command).is_err() {
                    break;
                }
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resume_with_and_without_path() {
        assert_eq!(
            parse_command("resume ./cv/resume.pdf"),
            Some(Command::Resume(Some(PathBuf::from("./cv/resume.pdf"))))
        );
        assert_eq!(parse_command("resume"), Some(Command::Resume(None)));
    }

    #[test]
    fn jd_text_is_kept_verbatim() {
        assert_eq!(
            parse_command("jd Need Python and SQL  "),
            Some(Command::Jd("Need Python and SQL  ".to_string()))
        );
        assert_eq!(parse_command("jd"), Some(Command::Jd(String::new())));
        assert_eq!(parse_command("jd    "), Some(Command::Jd("   ".to_string())));
    }

    #[test]
    fn jd_file_requires_a_path() {
        assert_eq!(
            parse_command("jd-file job.txt"),
            Some(Command::JdFile(PathBuf::from("job.txt")))
        );
        assert_eq!(
            parse_command("jd-file"),
            Some(Command::Unknown("jd-file".to_string()))
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   \r\n"), None);
    }

    #[test]
    fn keywords_map_to_commands() {
        assert_eq!(parse_command("submit"), Some(Command::Submit));
        assert_eq!(parse_command("show"), Some(Command::Show));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(
            parse_command("analyze now"),
            Some(Command::Unknown("analyze now".to_string()))
        );
    }
}
