//! Page context shared by every behavior.
//!
//! Wraps the window, the document and the resolved [`PageConfig`], plus the
//! handful of DOM helpers the behaviors have in common.
//!
//! ## Usage
//!
//! ```ignore
//! let ctx = PageContext::from_window()?;
//! if let Some(navbar) = ctx.query(&ctx.config.selectors.navbar) {
//!     navbar.class_list().add_1("scrolled")?;
//! }
//! ```

use std::rc::Rc;

use folio_core::config::CONFIG_ELEMENT_ID;
use folio_core::{FolioError, FolioResult, PageConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Shared context handed to each behavior at bind time.
pub type SharedContext = Rc<PageContext>;

/// Convert browser API failures into [`FolioError::Dom`].
pub trait JsResultExt<T> {
    fn dom(self, what: &str) -> FolioResult<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn dom(self, what: &str) -> FolioResult<T> {
        self.map_err(|e| {
            let detail = e.as_string().unwrap_or_else(|| format!("{:?}", e));
            FolioError::Dom(format!("{what}: {detail}"))
        })
    }
}

pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
}

impl PageContext {
    /// Grab the global window and document.
    ///
    /// Returns the context together with the config error, if the page's
    /// config block could not be used; logging is not up yet at this point,
    /// so the caller reports it.
    pub fn from_window() -> FolioResult<(Self, Option<FolioError>)> {
        let window =
            web_sys::window().ok_or_else(|| FolioError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::Dom("window has no document".to_string()))?;

        let (config, config_error) = match read_config(&document) {
            Ok(config) => (config, None),
            Err(e) => (PageConfig::default(), Some(e)),
        };

        Ok((
            Self {
                window,
                document,
                config,
            },
            config_error,
        ))
    }

    /// First element matching `selector`. Invalid selectors count as no match.
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Height of the layout viewport.
    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
}

/// Parse the inline config block, falling back to defaults when absent.
fn read_config(document: &Document) -> FolioResult<PageConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) if !json.trim().is_empty() => PageConfig::from_json(&json),
        _ => Ok(PageConfig::default()),
    }
}

/// Descendants of `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// View an element as an `HtmlElement` for style and layout access.
pub fn as_html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Set the inline `transform` of an element.
pub fn set_transform(element: &Element, value: &str) -> FolioResult<()> {
    match as_html(element) {
        Some(html) => html.style().set_property("transform", value).dom("set transform"),
        None => Ok(()),
    }
}

/// Add or remove a class so that its presence matches `on`.
pub fn set_class(element: &Element, class: &str, on: bool) -> FolioResult<()> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .dom("toggle class")
}
