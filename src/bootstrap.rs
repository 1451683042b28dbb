//! Page-ready initialization pass
//!
//! Runs once per page after the tree is built: rewrites the footer year
//! literal to the current year and converts native `title` tooltips to the
//! custom `data-tooltip` convention the stylesheets target. The clock is
//! injected so the year rewrite is deterministic under test.

use chrono::{Datelike, Local, NaiveDate};

use crate::constants::{ATTR_TITLE, ATTR_TOOLTIP, CLASS_TOOLTIP, FOOTER_YEAR_LITERAL};
use crate::dom::Document;

/// Wall-clock capability
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The system wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Apply the page-ready rewrites to a built document
///
/// Footer elements whose text contains the year literal get its first
/// occurrence replaced with the current year (plain string substitution, as
/// the pages have always done it). Every element carrying a `title`
/// attribute has the value moved to `data-tooltip` and gains the `tooltip`
/// styling class.
pub fn on_page_ready(document: &mut Document, clock: &impl Clock) {
    let year = clock.today().year().to_string();

    document.for_each_mut(&mut |element| {
        if element.tag() == "footer" && element.text().contains(FOOTER_YEAR_LITERAL) {
            let rewritten = element.text().replacen(FOOTER_YEAR_LITERAL, &year, 1);
            element.set_text(rewritten);
        }

        if let Some(title) = element.remove_attribute(ATTR_TITLE) {
            element.set_attribute(ATTR_TOOLTIP, &title);
            element.add_class(CLASS_TOOLTIP);
        }
    });
}
