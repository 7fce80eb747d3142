use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::core::ansi::{self, Color, CRLF};
use crate::core::transport::Transport;
use crate::utils::error::Result;

/// One label per selectable option; the index is the option number the
/// operator types (0 exits and lives outside the array).
pub const MENU_LABELS: [&str; 11] = [
    "Red text",
    "Green text",
    "Color palette",
    "Move cursor to (5,10)",
    "Clear screen",
    "Text attributes",
    "Reset attributes",
    "Status bar",
    "Progress bar",
    "Boxed panel",
    "Custom string",
];

/// Drives the interactive session: renders the menu on the local console,
/// reads selections, and pushes the chosen escape-sequence payload through
/// the transport. Generic over the console streams so tests can script a
/// whole session.
pub struct MenuSession<T: Transport> {
    transport: T,
    progress_delay: Duration,
}

impl<T: Transport> MenuSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            progress_delay: Duration::from_millis(50),
        }
    }

    /// Tests drop the inter-frame sleep of the progress animation.
    pub fn with_progress_delay(mut self, delay: Duration) -> Self {
        self.progress_delay = delay;
        self
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        tracing::info!("Session started on {}", self.transport.name());

        loop {
            render_menu(&mut output)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF on the console behaves like selecting 0.
                writeln!(output)?;
                break;
            }

            let choice = match line.trim().parse::<u32>() {
                Ok(n) => n,
                Err(_) => {
                    writeln!(output, "Invalid option")?;
                    continue;
                }
            };

            if choice == 0 {
                break;
            }

            match choice {
                1 => self.send(&ansi::colored_line(Color::Red, "Red text"))?,
                2 => self.send(&ansi::colored_line(Color::Green, "Green text"))?,
                3 => self.send(&ansi::color_palette())?,
                4 => {
                    let mut payload = ansi::cursor_to(5, 10);
                    payload.push_str("Positioned Text");
                    payload.push_str(CRLF);
                    self.send(&payload)?;
                }
                5 => self.send(&ansi::clear_screen())?,
                6 => self.send(&ansi::attribute_demo())?,
                7 => self.send(&ansi::reset_attributes())?,
                8 => {
                    let text = format!(
                        "termtest | {} | {}",
                        self.transport.name(),
                        chrono::Local::now().format("%H:%M:%S")
                    );
                    self.send(&ansi::status_bar(&text))?;
                }
                9 => self.run_progress_demo()?,
                10 => self.send(&demo_panel())?,
                11 => {
                    write!(output, "Enter raw string (escape as needed): ")?;
                    output.flush()?;

                    let mut custom = String::new();
                    if input.read_line(&mut custom)? == 0 {
                        writeln!(output)?;
                        break;
                    }
                    let mut payload = unescape(custom.trim_end_matches(['\r', '\n']));
                    payload.push_str(CRLF);
                    self.send(&payload)?;
                }
                _ => writeln!(output, "Invalid option")?,
            }
        }

        self.transport.flush()?;
        tracing::info!("Session closed on {}", self.transport.name());
        Ok(())
    }

    fn send(&mut self, payload: &str) -> Result<()> {
        self.transport.send(payload.as_bytes())?;
        self.transport.flush()
    }

    /// Animates 0 to 100 in 5% steps, redrawing in place, then drops to
    /// a fresh line.
    fn run_progress_demo(&mut self) -> Result<()> {
        for percent in (0..=100).step_by(5) {
            self.send(&ansi::progress_bar(percent as u8))?;
            thread::sleep(self.progress_delay);
        }
        self.transport.send(CRLF.as_bytes())?;
        self.transport.flush()
    }
}

fn render_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\n=== ANSI UART Test Menu ===")?;
    for (i, label) in MENU_LABELS.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, label)?;
    }
    writeln!(output, "0. Exit")?;
    write!(output, "Select option: ")?;
    output.flush()?;
    Ok(())
}

/// The static panel drawn on the remote terminal by the boxed-panel option.
fn demo_panel() -> String {
    let mut payload = ansi::clear_screen();
    payload.push_str(&ansi::frame(
        " termtest ",
        &[
            "If this box has straight",
            "edges and a centered",
            "title, cursor addressing",
            "works.",
        ],
        2,
        4,
        30,
    ));
    payload
}

/// Expands the escape shorthand accepted by the custom-string option, so
/// control sequences can be typed on a cooked console: `\e`, `\xNN`,
/// `\n`, `\r`, `\t` and `\\`. Unrecognized escapes pass through verbatim.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('e') => out.push('\x1b'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('x') => {
                let hi = chars.peek().copied().and_then(|c| c.to_digit(16));
                let hi = match hi {
                    Some(h) => {
                        chars.next();
                        h
                    }
                    None => {
                        out.push_str("\\x");
                        continue;
                    }
                };
                let lo = chars.peek().copied().and_then(|c| c.to_digit(16));
                let byte = match lo {
                    Some(l) => {
                        chars.next();
                        hi * 16 + l
                    }
                    None => hi,
                };
                out.push(byte as u8 as char);
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
