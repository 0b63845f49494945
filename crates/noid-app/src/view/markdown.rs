//! Markdown-to-terminal rendering for model replies.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

pub(crate) const BOLD: &str = "\x1b[1m";
pub(crate) const DIM: &str = "\x1b[2m";
pub(crate) const RESET: &str = "\x1b[0m";
const ITALIC: &str = "\x1b[3m";
const STRIKE: &str = "\x1b[9m";
const CODE: &str = "\x1b[36m";

/// Render `source` as terminal text. With `color` off, styling is dropped
/// and only the layout (paragraphs, list markers, code indentation) stays.
pub fn render_markdown(source: &str, color: bool) -> String {
    let mut renderer = Renderer::new(color);
    for event in Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH) {
        renderer.event(event);
    }
    renderer.finish()
}

struct Renderer {
    out: String,
    color: bool,
    styles: Vec<&'static str>,
    /// One entry per open list: next number for ordered lists.
    lists: Vec<Option<u64>>,
    links: Vec<String>,
    in_code_block: bool,
    code_line_start: bool,
    /// Set right after a list marker so the item's first block does not
    /// open a new line.
    at_item_start: bool,
}

impl Renderer {
    fn new(color: bool) -> Self {
        Self {
            out: String::new(),
            color,
            styles: Vec::new(),
            lists: Vec::new(),
            links: Vec::new(),
            in_code_block: false,
            code_line_start: false,
            at_item_start: false,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                self.push_style(CODE);
                self.write(&code);
                self.pop_style();
            }
            Event::SoftBreak | Event::HardBreak => self.write("\n"),
            Event::Rule => {
                self.block_break();
                self.write("────────");
            }
            Event::Html(html) | Event::InlineHtml(html) => self.write(&html),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.block_break(),
            Tag::Heading { .. } => {
                self.block_break();
                self.push_style(BOLD);
            }
            Tag::CodeBlock(_) => {
                self.block_break();
                self.in_code_block = true;
                self.code_line_start = true;
                self.push_style(CODE);
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.block_break();
                } else {
                    self.line_break();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.line_break();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.write(&"  ".repeat(depth));
                self.write(&marker);
                self.at_item_start = true;
            }
            Tag::Emphasis => self.push_style(ITALIC),
            Tag::Strong => self.push_style(BOLD),
            Tag::Strikethrough => self.push_style(STRIKE),
            Tag::Link { dest_url, .. } => self.links.push(dest_url.into_string()),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) | TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.pop_style()
            }
            TagEnd::CodeBlock => {
                while self.out.ends_with('\n') {
                    self.out.pop();
                }
                self.pop_style();
                self.in_code_block = false;
            }
            TagEnd::List(_) => {
                self.lists.pop();
            }
            TagEnd::Link => {
                if let Some(url) = self.links.pop() {
                    self.write(" (");
                    self.push_style(DIM);
                    self.write(&url);
                    self.pop_style();
                    self.write(")");
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if !self.in_code_block {
            self.write(text);
            return;
        }
        for line in text.split_inclusive('\n') {
            if self.code_line_start {
                self.write("    ");
            }
            self.write(line);
            self.code_line_start = line.ends_with('\n');
        }
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.out.push_str(text);
        self.at_item_start = false;
    }

    /// Separate blocks by a blank line, or a single newline inside lists.
    fn block_break(&mut self) {
        if self.out.is_empty() || self.at_item_start {
            return;
        }
        if !self.lists.is_empty() {
            self.line_break();
            return;
        }
        while !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn line_break(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn push_style(&mut self, style: &'static str) {
        self.styles.push(style);
        if self.color {
            self.out.push_str(style);
        }
    }

    fn pop_style(&mut self) {
        self.styles.pop();
        if self.color {
            self.out.push_str(RESET);
            for style in &self.styles {
                self.out.push_str(style);
            }
        }
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}
