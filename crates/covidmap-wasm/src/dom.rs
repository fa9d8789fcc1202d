//! DOM construction and re-rendering for the page shell.

use covidmap_core::map_view::{CredentialPrompt, MapArea};
use covidmap_core::panel::PanelView;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

const SIDEBAR_CLASS: &str =
    "fixed top-0 left-0 h-full bg-white shadow-lg transition-transform duration-300 transform";

/// Elements the dashboard updates after state changes.
pub struct Shell {
    pub sidebar: HtmlElement,
    pub toggle: HtmlElement,
    pub heading: HtmlElement,
    pub cards: HtmlElement,
    pub prompt: HtmlElement,
    pub prompt_title: HtmlElement,
    pub input: HtmlInputElement,
    pub help_text: HtmlElement,
    pub help_link: HtmlElement,
    pub prompt_error: HtmlElement,
    pub map_container: HtmlElement,
}

fn element(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_class_name(class);
    el.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

impl Shell {
    /// Builds the sidebar and map area inside `root`.
    pub fn build(doc: &Document, root: &HtmlElement) -> Result<Self, JsValue> {
        root.set_class_name("relative");

        let sidebar = element(doc, "div", SIDEBAR_CLASS)?;
        let toggle = element(doc, "button", "absolute -right-10 top-4 bg-white shadow-md")?;
        toggle.set_attribute("type", "button")?;
        let body = element(doc, "div", "p-4")?;
        let heading = element(doc, "h2", "text-xl font-bold mb-4")?;
        let cards = element(doc, "div", "space-y-4")?;
        body.append_child(&heading)?;
        body.append_child(&cards)?;
        sidebar.append_child(&toggle)?;
        sidebar.append_child(&body)?;

        let map_area = element(doc, "div", "relative w-full h-screen")?;
        let prompt = element(
            doc,
            "div",
            "absolute inset-0 flex items-center justify-center bg-gray-100",
        )?;
        let card = element(doc, "div", "bg-white p-6 rounded-lg shadow-lg max-w-md w-full")?;
        let prompt_title = element(doc, "h2", "text-lg font-semibold mb-4")?;
        let input = doc
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(JsValue::from)?;
        input.set_type("text");
        input.set_class_name("w-full p-2 border rounded mb-4");
        let help = element(doc, "p", "text-sm text-gray-600")?;
        let help_text = element(doc, "span", "")?;
        let help_link = element(doc, "a", "text-blue-500 hover:underline")?;
        help_link.set_attribute("target", "_blank")?;
        help_link.set_attribute("rel", "noopener noreferrer")?;
        help.append_child(&help_text)?;
        help.append_child(&help_link)?;
        let prompt_error = element(doc, "p", "text-sm text-red-600 mt-2")?;
        card.append_child(&prompt_title)?;
        card.append_child(&input)?;
        card.append_child(&help)?;
        card.append_child(&prompt_error)?;
        prompt.append_child(&card)?;

        let map_container = element(doc, "div", "absolute inset-0")?;
        map_area.append_child(&prompt)?;
        map_area.append_child(&map_container)?;

        root.append_child(&sidebar)?;
        root.append_child(&map_area)?;

        Ok(Self {
            sidebar,
            toggle,
            heading,
            cards,
            prompt,
            prompt_title,
            input,
            help_text,
            help_link,
            prompt_error,
            map_container,
        })
    }

    pub fn render_panel(&self, view: &PanelView) -> Result<(), JsValue> {
        let doc = document()?;
        self.sidebar
            .set_class_name(&format!("{SIDEBAR_CLASS} {}", view.transform_class));
        self.sidebar
            .set_attribute("style", &format!("width: {}px; z-index: 1000;", view.width_px))?;
        self.toggle.set_text_content(Some(view.toggle_icon.glyph()));
        self.toggle.set_attribute(
            "aria-expanded",
            if view.open { "true" } else { "false" },
        )?;
        self.heading.set_text_content(Some(view.heading));

        self.cards.set_inner_html("");
        for card in &view.cards {
            let tone = card.tone.as_str();
            let item = element(&doc, "div", &format!("p-4 bg-{tone}-50 rounded-lg"))?;
            let label = element(&doc, "h3", "font-semibold mb-2")?;
            label.set_text_content(Some(card.label));
            let value = element(&doc, "p", &format!("text-2xl font-bold text-{tone}-600"))?;
            value.set_text_content(Some(card.value));
            item.append_child(&label)?;
            item.append_child(&value)?;
            self.cards.append_child(&item)?;
        }
        Ok(())
    }

    pub fn render_map_area(&self, area: &MapArea) -> Result<(), JsValue> {
        match area {
            MapArea::Prompt(prompt) => {
                self.prompt.set_attribute("style", "z-index: 10;")?;
                self.render_prompt(prompt)
            }
            MapArea::Map => self.prompt.set_attribute("style", "display: none;"),
        }
    }

    fn render_prompt(&self, prompt: &CredentialPrompt) -> Result<(), JsValue> {
        self.prompt_title.set_text_content(Some(prompt.title));
        self.input.set_placeholder(prompt.placeholder);
        if self.input.value() != prompt.value {
            self.input.set_value(&prompt.value);
        }
        self.help_text
            .set_text_content(Some(&format!("{} ", prompt.help_text)));
        self.help_link.set_attribute("href", prompt.help_url)?;
        self.help_link.set_text_content(Some(prompt.help_link_label));
        match &prompt.error {
            Some(msg) => {
                self.prompt_error.set_text_content(Some(msg));
                self.prompt_error.remove_attribute("hidden")?;
            }
            None => {
                self.prompt_error.set_text_content(None);
                self.prompt_error.set_attribute("hidden", "")?;
            }
        }
        Ok(())
    }
}
