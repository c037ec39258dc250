//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using the semantic methods; an
/// implementation only decides where plain and diagnostic lines go.
pub trait Output {
    /// Emit one line of regular output.
    fn line(&mut self, text: &str);

    /// Emit one line of diagnostic output.
    fn diagnostic(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str) {
        self.line(&format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(&format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.line(&format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(&format!("  - {}", text));
    }

    /// Render an added item (e.g., written file).
    fn added_item(&mut self, text: &str) {
        self.line(&format!("  + {}", text));
    }

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str) {
        self.line(&format!("── {} ──", label));
    }

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str) {
        self.line(text);
    }

    fn newline(&mut self) {
        self.line("");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output: regular lines on stdout, diagnostics on stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn diagnostic(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Output that records rendered lines in order, for report tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn diagnostic(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
