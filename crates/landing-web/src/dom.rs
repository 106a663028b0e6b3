//! Browser side of the page model: measuring the live document and writing
//! the page mirror back to it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};
use landing_engine::page::document::FIXED_ELEMENTS;
use landing_engine::page::layout::layout_fallback;
use landing_engine::{
    CardIndex, ClassName, ElementId, ElementState, InlineStyle, LayoutMeasure, PageState,
    Property, Rect, Viewport,
};

pub const CARD_SELECTOR: &str = ".card";
const INDEX_ATTRIBUTE: &str = "data-index";

/// Find the element an id refers to.
pub fn find_element(document: &Document, id: ElementId) -> Option<Element> {
    match id {
        ElementId::Body => document.body().map(Into::into),
        _ => document.query_selector(&id.selector()).ok().flatten(),
    }
}

/// Logical index of a card element, from its `data-index` attribute.
pub fn card_index(element: &Element) -> Option<CardIndex> {
    element
        .get_attribute(INDEX_ATTRIBUTE)?
        .trim()
        .parse()
        .ok()
        .map(CardIndex)
}

/// Build the page mirror from the live document: every fixed element that
/// exists, every card with a readable index (document order), and the
/// landing classes they already carry.
pub fn discover_page(document: &Document) -> Result<PageState, JsValue> {
    let mut ids: Vec<ElementId> = FIXED_ELEMENTS
        .into_iter()
        .filter(|id| find_element(document, *id).is_some())
        .collect();

    let cards = document.query_selector_all(CARD_SELECTOR)?;
    for i in 0..cards.length() {
        let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match card_index(&card) {
            Some(idx) => ids.push(ElementId::Card(idx)),
            None => log::warn!("card #{} has no numeric {}; skipped", i, INDEX_ATTRIBUTE),
        }
    }

    let mut page = PageState::from_elements(ids.iter().copied());
    for id in ids {
        let Some(el) = find_element(document, id) else { continue };
        let classes = el.class_list();
        for class in ClassName::ALL {
            if classes.contains(class.as_str()) {
                page.add_class(id, class).map_err(to_js)?;
            }
        }
    }
    // The document already matches.
    page.drain_dirty();
    log::debug!("discovered {} cards", page.cards().len());
    Ok(page)
}

/// `LayoutMeasure` over the live document.
pub struct DomLayout {
    window: Window,
    document: Document,
}

impl DomLayout {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn computed(&self, element: &Element, name: &str) -> Option<String> {
        let style = self.window.get_computed_style(element).ok()??;
        style.get_property_value(name).ok()
    }
}

impl LayoutMeasure for DomLayout {
    fn viewport(&self) -> Viewport {
        let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        Viewport::new(dimension(self.window.inner_width()), dimension(self.window.inner_height()))
            .with_pixel_ratio(self.window.device_pixel_ratio() as f32)
    }

    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        let r = find_element(&self.document, id)?.get_bounding_client_rect();
        Some(Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32))
    }

    fn computed_style(&self, id: ElementId, prop: Property) -> f32 {
        let Some(el) = find_element(&self.document, id) else {
            return layout_fallback(self, id, prop);
        };
        let resolved = match prop {
            Property::Opacity => self.computed(&el, "opacity").and_then(|v| v.trim().parse().ok()),
            Property::Top => self.computed(&el, "top").and_then(|v| parse_px(&v)),
            Property::Left => self.computed(&el, "left").and_then(|v| parse_px(&v)),
            Property::TranslateX => self.computed(&el, "transform").map(|v| parse_translate(&v).0),
            Property::TranslateY => self.computed(&el, "transform").map(|v| parse_translate(&v).1),
            _ => None,
        };
        resolved.unwrap_or_else(|| layout_fallback(self, id, prop))
    }
}

/// `"12.5px"` → 12.5. Keywords such as `auto` yield `None`.
pub fn parse_px(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Translation part of a resolved `transform`: `none`, `matrix(...)` or `matrix3d(...)`.
pub fn parse_translate(value: &str) -> (f32, f32) {
    let value = value.trim();
    let (args, x, y) = if let Some(rest) = value.strip_prefix("matrix3d(") {
        (rest, 12, 13)
    } else if let Some(rest) = value.strip_prefix("matrix(") {
        (rest, 4, 5)
    } else {
        return (0.0, 0.0);
    };
    let parts: Vec<f32> = args
        .trim_end_matches(')')
        .split(',')
        .filter_map(|p| p.trim().parse().ok())
        .collect();
    (
        parts.get(x).copied().unwrap_or(0.0),
        parts.get(y).copied().unwrap_or(0.0),
    )
}

fn px(value: f32) -> String {
    format!("{}px", value)
}

/// Inline declarations for a style mirror. `None` means remove the property.
pub fn style_declarations(style: &InlineStyle) -> [(&'static str, Option<String>); 6] {
    let transform = style.has_transform().then(|| {
        format!(
            "translate({}, {})",
            px(style.translate_x.unwrap_or(0.0)),
            px(style.translate_y.unwrap_or(0.0))
        )
    });
    [
        ("opacity", style.opacity.map(|v| v.to_string())),
        ("top", style.top.map(px)),
        ("left", style.left.map(px)),
        ("margin", style.margin_reset.then(|| "0".to_string())),
        ("transform", transform),
        ("cursor", style.cursor.map(|c| c.as_str().to_string())),
    ]
}

/// Write one mirrored element back to the document.
pub fn apply_element(document: &Document, id: ElementId, state: &ElementState) -> Result<(), JsValue> {
    let element = find_element(document, id)
        .ok_or_else(|| JsValue::from_str(&format!("element {} disappeared from the page", id)))?;

    let classes = element.class_list();
    for class in ClassName::ALL {
        if state.has_class(class) {
            classes.add_1(class.as_str())?;
        } else {
            classes.remove_1(class.as_str())?;
        }
    }

    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    for (name, value) in style_declarations(&state.style) {
        match value {
            Some(value) => style.set_property(name, &value)?,
            None => {
                style.remove_property(name)?;
            }
        }
    }
    Ok(())
}

pub fn to_js(err: landing_engine::LandingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_engine::Cursor;

    #[test]
    fn px_values_parse() {
        assert_eq!(parse_px("544px"), Some(544.0));
        assert_eq!(parse_px(" 12.5px "), Some(12.5));
        assert_eq!(parse_px("auto"), None);
    }

    #[test]
    fn translate_from_matrix() {
        assert_eq!(parse_translate("none"), (0.0, 0.0));
        assert_eq!(parse_translate("matrix(1, 0, 0, 1, -840, 30)"), (-840.0, 30.0));
        let m3d = "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 15, 25, 0, 1)";
        assert_eq!(parse_translate(m3d), (15.0, 25.0));
    }

    #[test]
    fn declarations_mirror_overrides() {
        let style = InlineStyle {
            opacity: Some(0.5),
            top: Some(20.0),
            translate_x: Some(-840.0),
            margin_reset: true,
            cursor: Some(Cursor::Default),
            ..Default::default()
        };
        let decls = style_declarations(&style);
        let get = |name: &str| decls.iter().find(|(n, _)| *n == name).and_then(|(_, v)| v.clone());
        assert_eq!(get("opacity").as_deref(), Some("0.5"));
        assert_eq!(get("top").as_deref(), Some("20px"));
        assert_eq!(get("left"), None);
        assert_eq!(get("margin").as_deref(), Some("0"));
        assert_eq!(get("transform").as_deref(), Some("translate(-840px, 0px)"));
        assert_eq!(get("cursor").as_deref(), Some("default"));
    }

    #[test]
    fn cleared_style_removes_everything() {
        let decls = style_declarations(&InlineStyle::default());
        assert!(decls.iter().all(|(_, v)| v.is_none()));
    }
}
