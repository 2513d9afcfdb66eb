//! Markdown to display blocks
//!
//! Agent output is parsed with `pulldown-cmark` into a flat list of
//! [`Block`]s made of styled [`Span`]s, which the UI renders with egui
//! widgets. Only the constructs agents actually emit are modelled; anything
//! else degrades to plain text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Inline styling of a span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
}

/// Run of text with one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
    /// Link target; links always open outside the application
    pub link: Option<String>,
}

/// Renderable block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    ListItem {
        depth: usize,
        marker: String,
        spans: Vec<Span>,
    },
    CodeBlock(String),
    Rule,
}

#[cfg(test)]
impl Block {
    /// Concatenated text of the block's spans
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { spans, .. }
            | Block::Paragraph(spans)
            | Block::ListItem { spans, .. } => spans.iter().map(|s| s.text.as_str()).collect(),
            Block::CodeBlock(code) => code.clone(),
            Block::Rule => String::new(),
        }
    }
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    style: SpanStyle,
    link: Option<String>,
    heading: Option<u8>,
    /// Next number for ordered lists, `None` for bullet lists
    lists: Vec<Option<u64>>,
    item_marker: Option<String>,
    code: Option<String>,
}

impl BlockBuilder {
    fn push_text(&mut self, text: &str, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        // Merge with the previous span when nothing about it changed
        if let Some(last) = self.spans.last_mut() {
            if last.style == style && last.link == self.link {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Span {
            text: text.to_string(),
            style,
            link: self.link.clone(),
        });
    }

    fn flush(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        let block = if let Some(level) = self.heading.take() {
            Block::Heading { level, spans }
        } else if let Some(marker) = self.item_marker.take() {
            Block::ListItem {
                depth: self.lists.len().saturating_sub(1),
                marker,
                spans,
            }
        } else {
            Block::Paragraph(spans)
        };
        self.blocks.push(block);
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.heading = Some(level as u8);
            }
            Tag::CodeBlock(_) => {
                self.flush();
                self.code = Some(String::new());
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}.", n);
                        *n += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                self.item_marker = Some(marker);
            }
            Tag::Emphasis => self.style.emphasis = true,
            Tag::Strong => self.style.strong = true,
            Tag::Strikethrough => self.style.strikethrough = true,
            Tag::Link { dest_url, .. } => self.link = Some(dest_url.to_string()),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) | TagEnd::Paragraph => self.flush(),
            TagEnd::Item => {
                self.flush();
                // An item without text leaves its marker unused
                self.item_marker = None;
            }
            TagEnd::CodeBlock => {
                if let Some(code) = self.code.take() {
                    self.blocks
                        .push(Block::CodeBlock(code.trim_end_matches('\n').to_string()));
                }
            }
            TagEnd::List(_) => {
                self.flush();
                self.item_marker = None;
                self.lists.pop();
            }
            TagEnd::Emphasis => self.style.emphasis = false,
            TagEnd::Strong => self.style.strong = false,
            TagEnd::Strikethrough => self.style.strikethrough = false,
            TagEnd::Link => self.link = None,
            _ => {}
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => match self.code.as_mut() {
                Some(code) => code.push_str(&text),
                None => self.push_text(&text, self.style),
            },
            Event::Code(text) => {
                let style = SpanStyle {
                    code: true,
                    ..self.style
                };
                self.push_text(&text, style);
            }
            Event::SoftBreak => self.push_text(" ", self.style),
            Event::HardBreak => self.push_text("\n", self.style),
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html, self.style),
            Event::Rule => {
                self.flush();
                self.blocks.push(Block::Rule);
            }
            Event::TaskListMarker(done) => {
                self.push_text(if done { "[x] " } else { "[ ] " }, self.style)
            }
            _ => {}
        }
    }
}

/// Parse markdown into display blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = BlockBuilder::default();
    for event in Parser::new_ext(markdown, options) {
        builder.event(event);
    }
    builder.flush();
    builder.blocks
}
