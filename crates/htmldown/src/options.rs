//! Conversion options and their builder.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::{HtmldownError, Result};

/// Attribute matcher used by ignore, replace and start-tag rules.
///
/// An empty key or value given to the builder becomes [`AttrMatch::Any`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrMatch {
    /// Matches regardless of attributes
    Any,
    /// Matches one exact attribute key or value
    Exact(String),
}

impl From<&str> for AttrMatch {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            AttrMatch::Any
        } else {
            AttrMatch::Exact(value.to_string())
        }
    }
}

impl fmt::Display for AttrMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrMatch::Any => f.write_str("*"),
            AttrMatch::Exact(value) => f.write_str(value),
        }
    }
}

/// Element the conversion starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartAnchor {
    /// The whole document
    Document,
    /// The element with this `id`
    Id(String),
    /// The first element with this tag whose `class` matches
    Tag { tag: String, class: AttrMatch },
}

impl fmt::Display for StartAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartAnchor::Document => f.write_str("document"),
            StartAnchor::Id(id) => write!(f, "id({id})"),
            StartAnchor::Tag { tag, class } => write!(f, "tag({tag}-{class})"),
        }
    }
}

/// Options for [`Converter`](crate::Converter).
///
/// Immutable once built; a single instance can serve any number of
/// concurrent conversions.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Emit HTML comments verbatim
    pub hold_comment: bool,

    /// tag -> attribute values whose presence drops the element
    pub tag_ignore: IndexMap<String, IndexSet<AttrMatch>>,

    /// tag -> attribute key -> tag to render the element as
    pub tag_replace: IndexMap<String, IndexMap<AttrMatch, String>>,

    /// attribute value on `pre`/`code` -> fence language
    pub lang_map: IndexMap<String, String>,

    /// Fence language when nothing in `lang_map` matches
    pub default_lang: String,

    /// Start from the element with this id
    pub start_id: Option<String>,

    /// Start from the first element with this tag and class
    pub start_tag: Option<(String, AttrMatch)>,
}

impl Options {
    /// Create a builder with default options
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// The effective start anchor; an id takes precedence over a tag
    pub fn anchor(&self) -> StartAnchor {
        if let Some(id) = &self.start_id {
            return StartAnchor::Id(id.clone());
        }
        if let Some((tag, class)) = &self.start_tag {
            return StartAnchor::Tag {
                tag: tag.clone(),
                class: class.clone(),
            };
        }
        StartAnchor::Document
    }

    /// Whether an element with this tag and these attributes is dropped
    pub fn is_ignored(&self, tag: &str, attributes: &[(String, String)]) -> bool {
        let Some(rules) = self.tag_ignore.get(tag) else {
            return false;
        };
        rules.contains(&AttrMatch::Any)
            || attributes
                .iter()
                .any(|(_, value)| rules.contains(&AttrMatch::Exact(value.clone())))
    }

    /// Tag a `span`/`div` should be rendered as, if any rule applies
    pub fn replacement(&self, tag: &str, attributes: &[(String, String)]) -> Option<&str> {
        let rules = self.tag_replace.get(tag)?;
        attributes
            .iter()
            .find_map(|(key, _)| rules.get(&AttrMatch::Exact(key.clone())))
            .or_else(|| rules.get(&AttrMatch::Any))
            .map(String::as_str)
    }

    /// Fence language for the first attribute value found in `lang_map`
    pub fn lang_for(&self, attributes: &[(String, String)]) -> Option<&str> {
        attributes
            .iter()
            .find_map(|(_, value)| self.lang_map.get(value))
            .map(String::as_str)
    }
}

/// Builder for [`Options`].
///
/// Setters chain on `&mut Self`; the first invalid argument is reported by
/// [`build`](OptionsBuilder::build) as a configuration error.
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    options: Options,
    error: Option<String>,
}

impl OptionsBuilder {
    /// Emit or drop HTML comments
    pub fn hold_comment(&mut self, hold: bool) -> &mut Self {
        self.options.hold_comment = hold;
        self
    }

    /// Render `tag` as `replacement` when it carries attribute `attr`
    /// (empty `attr` matches any element of that tag)
    pub fn tag_replace(&mut self, tag: &str, attr: &str, replacement: &str) -> &mut Self {
        if tag.is_empty() || replacement.is_empty() {
            return self.fail("tag_replace requires a tag and a replacement tag");
        }
        self.options
            .tag_replace
            .entry(tag.to_lowercase())
            .or_default()
            .insert(AttrMatch::from(attr), replacement.to_lowercase());
        self
    }

    /// Drop `tag` subtrees carrying an attribute whose value is `value`
    /// (empty `value` drops every element of that tag)
    pub fn tag_ignore(&mut self, tag: &str, value: &str) -> &mut Self {
        if tag.is_empty() {
            return self.fail("tag_ignore requires a tag");
        }
        self.options
            .tag_ignore
            .entry(tag.to_lowercase())
            .or_default()
            .insert(AttrMatch::from(value));
        self
    }

    /// Start from the first `tag` whose class is `class`, compared
    /// case-insensitively (empty matches any)
    pub fn start_tag(&mut self, tag: &str, class: &str) -> &mut Self {
        if tag.is_empty() {
            return self.fail("start_tag requires a tag");
        }
        let class = class.to_lowercase();
        self.options.start_tag = Some((tag.to_lowercase(), AttrMatch::from(class.as_str())));
        self
    }

    /// Start from the element with this id
    pub fn start_id(&mut self, id: &str) -> &mut Self {
        if id.is_empty() {
            return self.fail("start_id requires an id");
        }
        self.options.start_id = Some(id.to_string());
        self
    }

    /// Fence language used when no mapping matches
    pub fn default_lang(&mut self, lang: &str) -> &mut Self {
        self.options.default_lang = lang.to_string();
        self
    }

    /// Use fence language `lang` for code carrying an attribute with value `value`
    pub fn map_lang(&mut self, value: &str, lang: &str) -> &mut Self {
        self.options
            .lang_map
            .insert(value.to_string(), lang.to_string());
        self
    }

    /// Validate and return the options
    pub fn build(&self) -> Result<Options> {
        match &self.error {
            Some(message) => Err(HtmldownError::ConfigurationError(message.clone())),
            None => Ok(self.options.clone()),
        }
    }

    fn fail(&mut self, message: &str) -> &mut Self {
        if self.error.is_none() {
            self.error = Some(message.to_string());
        }
        self
    }
}
