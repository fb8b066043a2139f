use colored::Colorize;

/// Line-oriented console shared by every demo.
///
/// Every line is recorded in order so a run can be compared against an
/// expected transcript. When `echo` is on, lines are also printed to stdout.
#[derive(Debug, Default)]
pub struct Console {
    lines: Vec<String>,
    echo: bool,
    color: bool,
}

impl Console {
    pub fn stdout(color: bool) -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
            color,
        }
    }

    pub fn captured() -> Self {
        Self::default()
    }

    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            println!("{line}");
        }
        self.lines.push(line);
    }

    /// Section header; bold on a colour terminal, plain in the transcript.
    pub fn heading(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            if self.color {
                println!("{}", line.as_str().bold().cyan());
            } else {
                println!("{line}");
            }
        }
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.say("");
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut console = Console::captured();
        console.heading("Header");
        console.say("first");
        console.blank();
        console.say(String::from("second"));

        assert_eq!(console.lines(), ["Header", "first", "", "second"]);
        assert_eq!(console.transcript(), "Header\nfirst\n\nsecond");
    }

    #[test]
    fn test_heading_is_plain_in_transcript() {
        let mut console = Console::captured();
        console.heading("Reverse traversal:");
        assert!(!console.transcript().contains('\u{1b}'));
    }

    #[test]
    fn test_contains_and_clear() {
        let mut console = Console::captured();
        console.say("Subject: Attached an observer.");
        assert!(console.contains("Attached"));
        assert!(!console.contains("Detached"));

        console.clear();
        assert!(console.lines().is_empty());
    }
}
