//! Tag rendering rules.
//!
//! Every recognized tag maps to one [`Rule`]; the renderers live in the
//! submodules as methods on the walker.

mod block;
mod code;
mod inline;

/// How an element is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `[text](href)`
    Link,
    /// `**text**`
    Strong,
    /// Blank line
    LineBreak,
    /// Inline code span or code block
    Code,
    /// `~~text~~`
    Strikethrough,
    /// `_text_`
    Emphasis,
    /// ATX heading of the given level
    Heading(usize),
    /// Dropped with its whole subtree
    Skip,
    /// `--` between blank lines
    ThematicBreak,
    /// `![alt](src)`
    Image,
    /// `* item`
    ListItem,
    /// Paragraph between blank lines
    Paragraph,
    /// Fenced code block
    Preformatted,
    /// Blockquote, one more quote level
    Quote,
    /// `span`/`div`, subject to tag replacement
    Generic,
    /// Pipe table
    Table,
    /// List container
    List,
    /// Children only
    PassThrough,
}

impl Rule {
    /// Look up the rule for a lowercase tag name
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "a" => Rule::Link,
            "b" | "strong" => Rule::Strong,
            "br" => Rule::LineBreak,
            "code" | "tt" => Rule::Code,
            "del" | "s" | "strike" => Rule::Strikethrough,
            "em" | "i" => Rule::Emphasis,
            "h1" => Rule::Heading(1),
            "h2" => Rule::Heading(2),
            "h3" => Rule::Heading(3),
            "h4" => Rule::Heading(4),
            "h5" => Rule::Heading(5),
            "h6" => Rule::Heading(6),
            "head" | "nav" | "script" | "style" => Rule::Skip,
            "hr" => Rule::ThematicBreak,
            "image" | "img" => Rule::Image,
            "li" => Rule::ListItem,
            "p" => Rule::Paragraph,
            "pre" => Rule::Preformatted,
            "quote" | "blockquote" => Rule::Quote,
            "span" | "div" => Rule::Generic,
            "table" => Rule::Table,
            "ul" | "ol" => Rule::List,
            _ => Rule::PassThrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Rule::for_tag("strong"), Rule::Strong);
        assert_eq!(Rule::for_tag("h4"), Rule::Heading(4));
        assert_eq!(Rule::for_tag("img"), Rule::Image);
        assert_eq!(Rule::for_tag("nav"), Rule::Skip);
        assert_eq!(Rule::for_tag("h7"), Rule::PassThrough);
        assert_eq!(Rule::for_tag("article"), Rule::PassThrough);
    }
}
