use crate::error_translation::UserFriendlyError;
use crate::generator::InfraType;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{StyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;
use std::env;
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};

const BANNER: &str = r#"
   ___  ___  ___
  / _ \/ _ \/ __|
 | (_) | (_) \__ \
  \___/|  __/|___/
       |_|
"#;

const RULE_TITLE: &str = "--- Suggested Operation ---";
const RULE_END: &str = "---------------------------";

/// Whether stdout should receive colors: a terminal, and `NO_COLOR` unset
pub fn stdout_supports_ansi() -> bool {
    ansi_enabled(io::stdout().is_tty(), env::var_os("NO_COLOR").as_deref())
}

fn ansi_enabled(is_tty: bool, no_color: Option<&OsStr>) -> bool {
    is_tty && no_color.is_none_or(OsStr::is_empty)
}

/// Line-oriented terminal front end
///
/// Generic over its streams so the whole flow can be driven from scripted
/// input in tests. Output is plain text unless ANSI styling is switched on.
pub struct Console<R, W> {
    input: R,
    output: W,
    ansi: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            ansi: false,
        }
    }

    /// Emit colors and screen control sequences
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, content: StyledContent<&str>) -> String {
        if self.ansi {
            content.to_string()
        } else {
            content.content().to_string()
        }
    }

    pub fn status(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(message.cyan().bold());
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let (mark, line) = (self.paint("✔".green()), self.paint(message.green()));
        writeln!(self.output, "{} {}", mark, line)
    }

    pub fn failure(&mut self, message: &str) -> io::Result<()> {
        let (mark, line) = (self.paint("✖".red()), self.paint(message.red()));
        writeln!(self.output, "{} {}", mark, line)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(message.yellow());
        writeln!(self.output, "{}", line)
    }

    pub fn muted(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(message.dark_grey());
        writeln!(self.output, "{}", line)
    }

    /// Show the approved candidate between yellow rules
    pub fn show_suggestion(&mut self, command: &str) -> io::Result<()> {
        let (title, end) = (self.paint(RULE_TITLE.yellow()), self.paint(RULE_END.yellow()));
        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", command)?;
        writeln!(self.output, "{}", end)?;
        writeln!(self.output)
    }

    /// Render a translated error
    pub fn show_error(&mut self, error: &UserFriendlyError) -> io::Result<()> {
        let message = self.paint(error.simple_message.as_str().red());
        writeln!(self.output, "{}", message)?;
        if let Some(detail) = &error.detail {
            let detail = self.paint(detail.as_str().dark_grey());
            writeln!(self.output, "{}", detail)?;
        }
        if let Some(suggestion) = &error.suggestion {
            let suggestion = self.paint(suggestion.as_str().yellow());
            writeln!(self.output, "{}", suggestion)?;
        }
        self.output.flush()
    }

    /// Clear the screen and greet the user
    pub fn show_banner(&mut self) -> io::Result<()> {
        if self.ansi {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        let banner = self.paint(BANNER.blue().bold());
        let greeting = self.paint("  Hi, I'm your Ops assistant.".dark_grey());
        let rule = self.paint("  ---------------------------".dark_grey());
        writeln!(self.output, "{}", banner)?;
        writeln!(self.output, "{}", greeting)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output)?;
        self.output.flush()
    }

    /// Ask for an instruction until a non-empty one is given
    ///
    /// Returns `None` when input ends first.
    pub fn ask_instruction(&mut self) -> io::Result<Option<String>> {
        loop {
            let prompt = self.paint(">>".blue().bold());
            write!(self.output, "{} ", prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let instruction = line.trim();
            if !instruction.is_empty() {
                return Ok(Some(instruction.to_string()));
            }

            let retry = self.paint("Please type something.".red());
            writeln!(self.output, "{}", retry)?;
        }
    }

    /// Numbered target system menu; Enter picks `default`
    ///
    /// Returns `None` when input ends first.
    pub fn select_infra_type(&mut self, default: &InfraType) -> io::Result<Option<InfraType>> {
        loop {
            let title = self.paint("Target System:".bold());
            writeln!(self.output, "{}", title)?;
            for (index, infra_type) in InfraType::ALL.iter().enumerate() {
                let marker = if infra_type == default { " (default)" } else { "" };
                writeln!(self.output, "  [{}] {}{}", index + 1, infra_type, marker)?;
            }
            write!(self.output, "Enter your choice [1-{}]: ", InfraType::ALL.len())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let choice = line.trim();
            if choice.is_empty() {
                return Ok(Some(default.clone()));
            }

            if let Some(infra_type) = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| InfraType::ALL.get(i).cloned())
            {
                return Ok(Some(infra_type));
            }

            // Typing a menu name works too
            if let Ok(infra_type) = choice.parse::<InfraType>() {
                if InfraType::ALL.contains(&infra_type) {
                    return Ok(Some(infra_type));
                }
            }

            let message = format!("Invalid choice. Please enter 1-{}.", InfraType::ALL.len());
            let message = self.paint(message.as_str().yellow());
            writeln!(self.output, "{}", message)?;
        }
    }

    /// Yes/no question; end of input counts as `default`
    pub fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };

        loop {
            let question = format!(
                "{} {} {}",
                self.paint("?".green()),
                self.paint(message.bold()),
                self.paint(hint.dark_grey())
            );
            write!(self.output, "{} ", question)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(default);
            };

            match line.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    let retry = self.paint("Please answer y or n.".yellow());
                    writeln!(self.output, "{}", retry)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
