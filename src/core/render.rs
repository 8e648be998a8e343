//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use colored::Colorize;

use crate::core::model::{Kind, Notice, ResultItem, ResultSet, Severity, SourceMode};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    /// Suppress the notice banner on stderr
    pub quiet: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self {
            format,
            pretty,
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Print the result set to stdout and its notices to stderr
    pub fn emit(&self, result_set: &ResultSet) {
        if !self.config.quiet {
            let notices: Vec<&Notice> = result_set
                .items
                .iter()
                .flat_map(|item| item.notices.iter())
                .collect();
            print_banner(&notices);
        }
        println!("{}", self.render(result_set));
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let notices: Vec<_> = result_set.of_kind(Kind::Notice).collect();
        if !notices.is_empty() {
            for item in notices {
                render_notice_md(&mut output, item);
            }
            output.push('\n');
        }

        for item in result_set.of_kind(Kind::Status) {
            output.push_str("## Status\n\n");
            output.push_str(&format!("- Source: {}\n", source_label(item.source_mode)));
            if let Some(records) = item.meta.records {
                output.push_str(&format!("- Records: {}\n", records));
            }
            if let Some(categories) = item.meta.categories {
                output.push_str(&format!("- Categories: {}\n", categories));
            }
            if let Some(loaded_at) = &item.meta.loaded_at {
                output.push_str(&format!("- Loaded at: {}\n", loaded_at));
            }
            output.push('\n');
        }

        let categories: Vec<_> = result_set.of_kind(Kind::Category).collect();
        if !categories.is_empty() {
            output.push_str("## Categories\n\n");
            for item in categories {
                let name = item.category.as_deref().unwrap_or_default();
                let icon = item.icon.map(|i| i.emoji()).unwrap_or_default();
                output.push_str(&format!("- {} {} ({})\n", icon, name, item.count.unwrap_or(0)));
            }
            output.push('\n');
        }

        let entries: Vec<_> = result_set.of_kind(Kind::Entry).collect();
        if !entries.is_empty() {
            output.push_str("## Entries\n\n");
            for item in entries {
                render_entry_md(&mut output, item);
            }
        }

        output
    }

    /// Render as tab-separated lines, one per item
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .map(|item| match item.kind {
                Kind::Entry => {
                    let mut fields = vec![
                        item.id.map(|id| id.to_string()).unwrap_or_default(),
                        item.category.clone().unwrap_or_default(),
                        item.question.clone().unwrap_or_default(),
                    ];
                    if let Some(answer) = &item.answer {
                        fields.push(answer.clone());
                    }
                    fields.join("\t")
                }
                Kind::Category => format!(
                    "{}\t{}",
                    item.category.as_deref().unwrap_or_default(),
                    item.count.unwrap_or(0)
                ),
                Kind::Status => format!(
                    "{}\t{}\t{}\t{}",
                    source_label(item.source_mode),
                    item.meta.records.unwrap_or(0),
                    item.meta.categories.unwrap_or(0),
                    item.meta.loaded_at.as_deref().unwrap_or_default()
                ),
                Kind::Notice => item
                    .notices
                    .iter()
                    .map(|n| {
                        let mut fields = Vec::new();
                        if let Some(line) = item.line {
                            fields.push(line.to_string());
                        }
                        fields.push(format!("{}: {}", n.code, n.message));
                        if let Some(excerpt) = &item.excerpt {
                            fields.push(excerpt.clone());
                        }
                        fields.join("\t")
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn source_label(mode: SourceMode) -> &'static str {
    match mode {
        SourceMode::Remote => "remote",
        SourceMode::File => "file",
        SourceMode::Fallback => "fallback",
    }
}

fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ️",
        Severity::Warning => "⚠️",
        Severity::Error => "❌",
    }
}

fn render_notice_md(output: &mut String, item: &ResultItem) {
    for notice in &item.notices {
        output.push_str(&format!("> {} **{}**", severity_glyph(notice.severity), notice.code));
        if let Some(line) = item.line {
            output.push_str(&format!(" (line {})", line));
        }
        output.push_str(&format!(": {}\n", notice.message));
    }
    if let Some(excerpt) = &item.excerpt {
        output.push_str(&format!(">\n> `{}`", excerpt));
        if item.meta.truncated {
            output.push_str(" (truncated)");
        }
        output.push('\n');
    }
}

fn render_entry_md(output: &mut String, item: &ResultItem) {
    let marker = if item.answer.is_some() { "▾" } else { "▸" };
    let icon = item.icon.map(|i| i.emoji()).unwrap_or_default();
    output.push_str(&format!(
        "### {} {} {}\n",
        marker,
        icon,
        item.question.as_deref().unwrap_or_default()
    ));
    output.push_str(&format!(
        "_{}_ · #{}\n",
        item.category.as_deref().unwrap_or_default(),
        item.id.unwrap_or_default()
    ));
    if let Some(answer) = &item.answer {
        output.push('\n');
        output.push_str(answer);
        output.push('\n');
    }
    output.push('\n');
}

/// Write notices to stderr as a colored banner
fn print_banner(notices: &[&Notice]) {
    for notice in notices {
        let line = format!("{} {}", severity_glyph(notice.severity), notice.message);
        let line = match notice.severity {
            Severity::Info => line.normal(),
            Severity::Warning => line.yellow().bold(),
            Severity::Error => line.red().bold(),
        };
        eprintln!("{}", line);
    }
}
