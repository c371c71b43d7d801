use askama::Template;

use crate::error::Result;
use crate::report::view::PageView;

#[derive(Template)]
#[template(path = "report.html")]
struct PageTemplate<'a> {
    page: &'a PageView,
}

/// HTML formatter: standalone page with embedded CSS and an SVG gauge
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn format(page: &PageView) -> Result<String> {
        Ok(PageTemplate { page }.render()?)
    }
}
