use chrono::NaiveDate;
use perito_ui::bootstrap::{on_page_ready, Clock};
use perito_ui::dom::{Document, Element};

struct FixedClock {
    today: NaiveDate,
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

fn clock_in(year: i32) -> FixedClock {
    FixedClock {
        today: NaiveDate::from_ymd_opt(year, 6, 15).unwrap(),
    }
}

#[test]
fn test_footer_year_is_rewritten() {
    let mut document = Document::new();
    let mut footer = Element::new("footer");
    footer.set_text("© 2025 SistemaPerito. Todos los derechos reservados.");
    document.append_to_body(footer);

    on_page_ready(&mut document, &clock_in(2026));

    assert_eq!(
        document.body()[0].text(),
        "© 2026 SistemaPerito. Todos los derechos reservados."
    );
}

#[test]
fn test_footer_without_literal_untouched() {
    let mut document = Document::new();
    let mut footer = Element::new("footer");
    footer.set_text("SistemaPerito");
    document.append_to_body(footer);

    on_page_ready(&mut document, &clock_in(2026));

    assert_eq!(document.body()[0].text(), "SistemaPerito");
}

#[test]
fn test_non_footer_year_untouched() {
    let mut document = Document::new();
    let mut paragraph = Element::new("p");
    paragraph.set_text("Informes de 2025");
    document.append_to_body(paragraph);

    on_page_ready(&mut document, &clock_in(2026));

    assert_eq!(document.body()[0].text(), "Informes de 2025");
}

#[test]
fn test_only_first_occurrence_is_replaced() {
    let mut document = Document::new();
    let mut footer = Element::new("footer");
    footer.set_text("2025 - 2025");
    document.append_to_body(footer);

    on_page_ready(&mut document, &clock_in(2026));

    assert_eq!(document.body()[0].text(), "2026 - 2025");
}

#[test]
fn test_title_attributes_become_custom_tooltips() {
    let mut document = Document::new();
    let mut button = Element::with_id("button", "guardar");
    button.set_attribute("title", "Guardar informe");
    document.append_to_body(button);

    on_page_ready(&mut document, &clock_in(2026));

    let button = document.element_by_id("guardar").unwrap();
    assert_eq!(button.attribute("title"), None);
    assert_eq!(button.attribute("data-tooltip"), Some("Guardar informe"));
    assert!(button.has_class("tooltip"));
}

#[test]
fn test_tooltip_conversion_reaches_nested_elements() {
    let mut document = Document::new();
    let mut toolbar = Element::new("div");
    let mut icon = Element::with_id("i", "icono-ayuda");
    icon.set_attribute("title", "Ayuda");
    toolbar.append_child(icon);
    document.append_to_body(toolbar);

    on_page_ready(&mut document, &clock_in(2026));

    let icon = document.element_by_id("icono-ayuda").unwrap();
    assert_eq!(icon.attribute("data-tooltip"), Some("Ayuda"));
    assert!(icon.has_class("tooltip"));
}

#[test]
fn test_elements_without_title_untouched() {
    let mut document = Document::new();
    document.append_to_body(Element::with_id("button", "cerrar"));

    on_page_ready(&mut document, &clock_in(2026));

    let button = document.element_by_id("cerrar").unwrap();
    assert_eq!(button.attribute("data-tooltip"), None);
    assert!(!button.has_class("tooltip"));
}
