use super::{MarkupReader, MarkupWriter, Part};
use crate::config::SelectorConfig;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    #[error("invalid selector for {part}: {css:?} ({message})")]
    Invalid {
        part: &'static str,
        css: String,
        message: String,
    },
    #[error("invalid root selector {css:?} ({message})")]
    InvalidRoot { css: String, message: String },
}

/// Selectors matching the markup a Bluesky-style feed renders for a post.
pub fn default_css(part: Part) -> &'static str {
    match part {
        Part::RepostAttribution => r#"[data-testid*="repostBy"]"#,
        Part::Timestamp => "a[data-tooltip]",
        Part::AuthorName => {
            r#"div[dir="auto"] a[href^="/profile"] span[style*="font-weight: 600"]"#
        }
        Part::PostText => r#"[data-testid="postText"]"#,
        Part::ReplyCount => r#"[data-testid="replyBtn"] div"#,
        Part::RepostCount | Part::RepostControl => r#"[aria-label*="Repost"]"#,
        Part::LikeCount => r#"[data-testid="likeCount"]"#,
        Part::LikeControl => r#"[data-testid="likeBtn"]"#,
        Part::ReplyControl => r#"[data-testid="replyBtn"]"#,
        Part::ControlCount => "div",
    }
}

/// One compiled selector per [`Part`].
#[derive(Debug, Clone)]
pub struct PartSelectors {
    selectors: HashMap<Part, Selector>,
}

impl PartSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self, SelectorError> {
        let mut selectors = HashMap::with_capacity(Part::ALL.len());
        for part in Part::ALL {
            let css = config.css_for(part);
            let selector = Selector::parse(css).map_err(|e| SelectorError::Invalid {
                part: part.name(),
                css: css.to_string(),
                message: e.to_string(),
            })?;
            selectors.insert(part, selector);
        }
        Ok(Self { selectors })
    }

    fn get(&self, part: Part) -> Option<&Selector> {
        self.selectors.get(&part)
    }
}

/// An accessible name written onto a control element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedLabel {
    /// The control's `data-testid`, or its tag name when it has none.
    pub target: String,
    pub name: String,
}

/// [`MarkupReader`] over a parsed HTML document.
///
/// `scraper` trees are immutable, so accessible names are recorded in
/// [`HtmlMarkup::applied_labels`] instead of being patched into the DOM.
pub struct HtmlMarkup<'doc> {
    document: &'doc Html,
    selectors: PartSelectors,
    applied: Vec<AppliedLabel>,
}

impl<'doc> HtmlMarkup<'doc> {
    pub fn new(document: &'doc Html, selectors: PartSelectors) -> Self {
        Self {
            document,
            selectors,
            applied: Vec::new(),
        }
    }

    pub fn root(&self) -> ElementRef<'doc> {
        self.document.root_element()
    }

    /// First element anywhere in the document matching `css`.
    pub fn select_root(&self, css: &str) -> Result<Option<ElementRef<'doc>>, SelectorError> {
        let selector = Selector::parse(css).map_err(|e| SelectorError::InvalidRoot {
            css: css.to_string(),
            message: e.to_string(),
        })?;
        Ok(self.document.select(&selector).next())
    }

    pub fn applied_labels(&self) -> &[AppliedLabel] {
        &self.applied
    }
}

impl<'doc> MarkupReader for HtmlMarkup<'doc> {
    type Handle = ElementRef<'doc>;

    fn find_first(&self, scope: ElementRef<'doc>, part: Part) -> Option<ElementRef<'doc>> {
        let selector = self.selectors.get(part)?;
        scope.select(selector).find(|el| el.id() != scope.id())
    }

    fn text_of(&self, handle: ElementRef<'doc>) -> String {
        handle.text().collect()
    }
}

impl<'doc> MarkupWriter for HtmlMarkup<'doc> {
    fn set_accessible_name(&mut self, handle: ElementRef<'doc>, name: &str) {
        let element = handle.value();
        let target = element
            .attr("data-testid")
            .unwrap_or_else(|| element.name())
            .to_string();
        tracing::trace!(%target, name, "set accessible name");
        self.applied.push(AppliedLabel {
            target,
            name: name.to_string(),
        });
    }
}
