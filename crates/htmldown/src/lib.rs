//! # htmldown
//!
//! Convert HTML documents to Markdown.
//!
//! A [`Converter`] walks a parsed document tree recursively and renders each
//! recognized tag with a fixed rule: emphasis, links, headings, lists, quotes,
//! fenced code blocks and pipe tables. Options select where conversion starts,
//! drop or re-label elements and choose fence languages.
//!
//! ## Design
//!
//! - **Parser agnostic**: the walker consumes a small read-only [`Node`] tree.
//!   The default `html` feature builds that tree with `scraper`; callers that
//!   already hold a DOM can build it themselves and call
//!   [`Converter::convert_node`].
//! - **Incremental output**: Markdown is written into any [`std::fmt::Write`]
//!   or [`std::io::Write`] sink as the tree is walked.
//! - **Shareable**: options are immutable once built and each conversion keeps
//!   its own walk state.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use htmldown::Converter;
//!
//! let converter = Converter::new();
//! let markdown = converter.convert("<h2>Hello <b>World</b></h2>").unwrap();
//! assert_eq!(markdown, "\n## Hello **World**\n");
//! ```
//!
//! ## Example (options)
//!
//! ```rust
//! use htmldown::Converter;
//!
//! let options = Converter::builder()
//!     .start_id("content")
//!     .tag_ignore("div", "page-tools")
//!     .default_lang("php")
//!     .build()
//!     .unwrap();
//!
//! let html = r#"<div id="content">
//!     <div class="page-tools">Edit</div>
//!     <pre><code>echo 1;</code></pre>
//! </div>"#;
//! let markdown = Converter::with_options(options).convert(html).unwrap();
//! assert_eq!(markdown, "\n\n```php\necho 1;\n```\n");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use htmldown::{Converter, Node};
//!
//! let mut root = Node::element("div");
//! let mut em = Node::element("em");
//! em.add_child(Node::text("Hello World"));
//! root.add_child(em);
//!
//! let markdown = Converter::new().convert_node(&root).unwrap();
//! assert_eq!(markdown, "_Hello World_");
//! ```

mod converter;
mod escape;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod rules;
mod table;
mod walker;

pub use converter::Converter;
pub use escape::{escape_special, escape_text};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeRef, NodeType};
pub use options::{AttrMatch, Options, OptionsBuilder, StartAnchor};
pub use rules::Rule;

/// Error type for htmldown operations
#[derive(Debug, thiserror::Error)]
pub enum HtmldownError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Anchor not found: {0}")]
    AnchorNotFound(StartAnchor),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Write error: the output sink rejected a write")]
    WriteError,
}

pub type Result<T> = std::result::Result<T, HtmldownError>;
