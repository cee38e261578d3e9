use colored::Colorize;

use crate::cli::driver::GenerationSummary;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render_summary(&self, summary: &GenerationSummary) -> String {
        let mut out = String::new();
        for entry in &summary.generated {
            out.push_str(&format!(
                "{} {} {} -> {}\n",
                self.paint_ok("generated"),
                entry.namespace,
                entry.version,
                entry.declarations_path.display()
            ));
        }
        let count = summary.generated.len();
        let noun = if count == 1 { "file" } else { "files" };
        out.push_str(&format!("{count} declaration {noun} written"));
        out
    }

    pub fn render_error(&self, error: &anyhow::Error) -> String {
        let label = if self.color {
            "error".red().bold().to_string()
        } else {
            "error".to_string()
        };
        // `{:#}` prints the whole context chain on one line.
        format!("{label}: {error:#}")
    }

    fn paint_ok(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }
}
