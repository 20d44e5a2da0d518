use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::error::PageError;

// The five fixed elements the client drives. Resolved once at boot and
// threaded through the handlers instead of re-queried by id everywhere.
pub struct Page {
    pub document: Document,
    pub list: Element,
    pub select: HtmlSelectElement,
    pub form: HtmlFormElement,
    pub email: HtmlInputElement,
    pub message: Element,
}

impl Page {
    pub fn attach(document: &Document) -> Result<Self, PageError> {
        Ok(Self {
            document: document.clone(),
            list: require(document, "activities-list")?,
            select: cast(require(document, "activity")?, "activity")?,
            form: cast(require(document, "signup-form")?, "signup-form")?,
            email: cast(require(document, "email")?, "email")?,
            message: require(document, "message")?,
        })
    }
}

fn require(document: &Document, id: &'static str) -> Result<Element, PageError> {
    document.get_element_by_id(id).ok_or(PageError::Missing(id))
}

fn cast<T: JsCast>(element: Element, id: &'static str) -> Result<T, PageError> {
    element.dyn_into::<T>().map_err(|_| PageError::WrongType(id))
}
