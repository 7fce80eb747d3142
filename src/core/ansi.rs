//! ANSI/VT100 escape-sequence generators.
//!
//! Pure payload builders with no I/O: every function returns the exact bytes
//! to put on the wire, and the menu loop decides where they go. Lines meant
//! for the remote terminal end in CRLF because most UART consoles run in raw
//! mode.
//!
//! Sequence reference:
//!
//! | Sequence              | Meaning                         |
//! |-----------------------|---------------------------------|
//! | `ESC [ n m`           | SGR (color / text attribute)    |
//! | `ESC [ r ; c H`       | CUP (cursor position, 1-based)  |
//! | `ESC [ 2 J`           | ED2 (erase display)             |
//! | `ESC 7` / `ESC 8`     | DECSC / DECRC (save/restore)    |

pub const CSI: &str = "\x1b[";

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &str = "\x1b[0m";

/// Save / restore cursor (DECSC / DECRC).
pub const CURSOR_SAVE: &str = "\x1b7";
pub const CURSOR_RESTORE: &str = "\x1b8";

pub const CRLF: &str = "\r\n";

/// Inner width of the progress bar between the brackets.
pub const PROGRESS_BAR_WIDTH: usize = 40;

/// Width the status bar pads its text to.
pub const STATUS_BAR_WIDTH: usize = 60;

/// Foreground colors with their SGR codes, base (30-37) and bright (90-97).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    pub fn sgr_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlack => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright black",
            Color::BrightRed => "bright red",
            Color::BrightGreen => "bright green",
            Color::BrightYellow => "bright yellow",
            Color::BrightBlue => "bright blue",
            Color::BrightMagenta => "bright magenta",
            Color::BrightCyan => "bright cyan",
            Color::BrightWhite => "bright white",
        }
    }
}

/// Text attributes exercised by the attribute demo, with their SGR on-codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Bold,
        Attribute::Dim,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Reverse,
    ];

    pub fn sgr_code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Dim => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Reverse => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Dim => "dim",
            Attribute::Italic => "italic",
            Attribute::Underline => "underline",
            Attribute::Blink => "blink",
            Attribute::Reverse => "reverse",
        }
    }
}

/// `text` in the given foreground color, reset, CRLF.
pub fn colored_line(color: Color, text: &str) -> String {
    format!("{}{}m{}{}{}", CSI, color.sgr_code(), text, SGR_RESET, CRLF)
}

/// One labeled line per foreground color, base then bright.
pub fn color_palette() -> String {
    let mut out = String::new();
    for color in Color::ALL {
        out.push_str(&colored_line(
            color,
            &format!("SGR {:>2}  {}", color.sgr_code(), color.label()),
        ));
    }
    out
}

/// CUP, 1-indexed. Zero is clamped to 1 since row/column 0 is undefined
/// in VT100 addressing.
pub fn cursor_to(row: u16, col: u16) -> String {
    format!("{}{};{}H", CSI, row.max(1), col.max(1))
}

/// Erase the display and home the cursor.
pub fn clear_screen() -> String {
    format!("{}2J{}H", CSI, CSI)
}

/// SGR 0 with a visible confirmation line.
pub fn reset_attributes() -> String {
    format!("{}Attributes reset{}", SGR_RESET, CRLF)
}

/// One line per text attribute, each individually applied and reset.
pub fn attribute_demo() -> String {
    let mut out = String::new();
    for attr in Attribute::ALL {
        out.push_str(&format!(
            "{}{}m{:<9} sample{}{}",
            CSI,
            attr.sgr_code(),
            attr.label(),
            SGR_RESET,
            CRLF
        ));
    }
    out
}

/// Reverse-video status line pinned to the top row. Cursor position is
/// saved and restored so the write is invisible to whatever the remote
/// side was doing.
pub fn status_bar(text: &str) -> String {
    let mut line = String::from(text);
    line.truncate(STATUS_BAR_WIDTH);
    format!(
        "{}{}1;1H{}7m{:<width$}{}{}",
        CURSOR_SAVE,
        CSI,
        CSI,
        line,
        SGR_RESET,
        CURSOR_RESTORE,
        width = STATUS_BAR_WIDTH
    )
}

/// A single progress-bar frame, redrawn in place via CR. Percent is
/// clamped to 100.
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * PROGRESS_BAR_WIDTH / 100;
    format!(
        "\r[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled),
        percent
    )
}

/// A static boxed panel drawn with CUP per line at the given origin.
/// Lines wider than the interior are truncated.
pub fn frame(title: &str, lines: &[&str], origin_row: u16, origin_col: u16, width: usize) -> String {
    let interior = width.saturating_sub(2);
    let mut title = title.to_string();
    title.truncate(interior.saturating_sub(2));

    let pad = interior.saturating_sub(title.len());
    let left = pad / 2;
    let top = format!(
        "+{}{}{}+",
        "-".repeat(left),
        title,
        "-".repeat(pad - left)
    );

    let mut out = String::new();
    out.push_str(&cursor_to(origin_row, origin_col));
    out.push_str(&top);
    for (i, line) in lines.iter().enumerate() {
        let mut body = line.to_string();
        body.truncate(interior);
        out.push_str(&cursor_to(origin_row + 1 + i as u16, origin_col));
        out.push_str(&format!("|{:<interior$}|", body));
    }
    out.push_str(&cursor_to(origin_row + 1 + lines.len() as u16, origin_col));
    out.push_str(&format!("+{}+", "-".repeat(interior)));
    out.push_str(CRLF);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_line_matches_vt100() {
        assert_eq!(
            colored_line(Color::Red, "Red text"),
            "\x1b[31mRed text\x1b[0m\r\n"
        );
        assert_eq!(
            colored_line(Color::Green, "Green text"),
            "\x1b[32mGreen text\x1b[0m\r\n"
        );
        assert_eq!(
            colored_line(Color::BrightCyan, "x"),
            "\x1b[96mx\x1b[0m\r\n"
        );
    }

    #[test]
    fn test_cursor_to_is_one_indexed() {
        assert_eq!(cursor_to(5, 10), "\x1b[5;10H");
        assert_eq!(cursor_to(0, 0), "\x1b[1;1H");
    }

    #[test]
    fn test_clear_screen_homes_cursor() {
        assert_eq!(clear_screen(), "\x1b[2J\x1b[H");
    }

    #[test]
    fn test_palette_covers_all_colors() {
        let palette = color_palette();
        for color in Color::ALL {
            assert!(palette.contains(&format!("\x1b[{}m", color.sgr_code())));
        }
        assert_eq!(palette.matches(CRLF).count(), 16);
    }

    #[test]
    fn test_attribute_demo_resets_each_line() {
        let demo = attribute_demo();
        assert_eq!(demo.matches(SGR_RESET).count(), Attribute::ALL.len());
        assert!(demo.contains("\x1b[4munderline"));
    }

    #[test]
    fn test_status_bar_saves_and_restores_cursor() {
        let bar = status_bar("hello");
        assert!(bar.starts_with(CURSOR_SAVE));
        assert!(bar.ends_with(CURSOR_RESTORE));
        assert!(bar.contains("\x1b[7m"));
        // Padded to the fixed width.
        assert!(bar.contains(&format!("{:<width$}", "hello", width = STATUS_BAR_WIDTH)));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(
            progress_bar(0),
            format!("\r[{}]   0%", "-".repeat(PROGRESS_BAR_WIDTH))
        );
        assert_eq!(
            progress_bar(100),
            format!("\r[{}] 100%", "#".repeat(PROGRESS_BAR_WIDTH))
        );
        // Clamped, not wrapped.
        assert_eq!(progress_bar(250), progress_bar(100));
    }

    #[test]
    fn test_progress_bar_half() {
        let bar = progress_bar(50);
        assert!(bar.contains(&"#".repeat(PROGRESS_BAR_WIDTH / 2)));
        assert!(bar.ends_with(" 50%"));
    }

    #[test]
    fn test_frame_geometry() {
        let panel = frame("Menu", &["one", "two"], 3, 5, 20);
        assert!(panel.starts_with("\x1b[3;5H"));
        // Every body row is re-addressed, not drawn with line feeds.
        assert!(panel.contains("\x1b[4;5H"));
        assert!(panel.contains("\x1b[5;5H"));
        assert!(panel.contains("\x1b[6;5H"));
        assert!(panel.contains("|one               |"));
        assert!(panel.contains("Menu"));
    }

    #[test]
    fn test_frame_truncates_wide_lines() {
        let panel = frame("T", &["0123456789"], 1, 1, 8);
        assert!(panel.contains("|012345|"));
    }
}
