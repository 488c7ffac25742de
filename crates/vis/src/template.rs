//! Rendering the dashboard HTML from its templates.

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tinytemplate::format_unescaped;

use dugout_stats::table::StatTable;

use crate::dashboard;
use crate::error::Result;
use crate::page;
use crate::page::PageControls;
use crate::page::PageSpec;

const INDEX_TEMPLATE_NAME: &str = "index";
const PAGE_TEMPLATE_NAME: &str = "page";

pub(crate) struct TemplateEngine<'t> {
    templates: TinyTemplate<'t>,
}

impl TemplateEngine<'_> {
    pub fn new() -> Result<Self> {
        let mut templates = TinyTemplate::new();
        // The contexts embed JSON and preformatted copy; nothing in
        // them needs HTML escaping.
        templates.set_default_formatter(&format_unescaped);
        templates.add_template(
            INDEX_TEMPLATE_NAME,
            include_str!("./template/index.html.tt"),
        )?;
        templates.add_template(PAGE_TEMPLATE_NAME, include_str!("./template/page.html.tt"))?;

        Ok(Self { templates })
    }

    pub fn render_index(&self) -> Result<String> {
        let context = IndexContext::new();
        let text = self.templates.render(INDEX_TEMPLATE_NAME, &context)?;

        Ok(text)
    }

    pub fn render_page(&self, spec: &PageSpec, table: &StatTable) -> Result<String> {
        let context = PageContext::new(spec, table)?;
        let text = self.templates.render(PAGE_TEMPLATE_NAME, &context)?;

        Ok(text)
    }
}

/// One link of the navigation bar.
#[derive(Serialize)]
pub(crate) struct NavItem {
    pub href: String,
    pub label: &'static str,
}

impl NavItem {
    pub fn new(href: String, label: &'static str) -> Self {
        Self { href, label }
    }
}

#[derive(Serialize)]
struct IndexContext {
    brand: &'static str,
    title: &'static str,
    subtitle: &'static str,
    welcome: &'static str,
    nav: Vec<NavItem>,
}

impl IndexContext {
    fn new() -> Self {
        Self {
            brand: dashboard::BRAND,
            title: dashboard::HOME_TITLE,
            subtitle: dashboard::HOME_SUBTITLE,
            welcome: dashboard::HOME_WELCOME,
            nav: dashboard::nav_from_index(),
        }
    }
}

#[derive(Serialize)]
struct SelectOption {
    value: String,
    selected: bool,
}

/// The template context of one chart page.
///
/// The first dropdown is always a statistic select; the second is the
/// entity multi-select on bar pages and the y-axis statistic select on
/// the scatter page.
#[derive(Serialize)]
struct PageContext {
    brand: &'static str,
    title: &'static str,
    blurb: &'static str,
    chart_heading: &'static str,
    slug: &'static str,
    nav: Vec<NavItem>,
    is_bar: bool,
    first_prompt: &'static str,
    second_prompt: &'static str,
    first_options: Vec<SelectOption>,
    second_options: Vec<SelectOption>,
    config: String,
}

impl PageContext {
    fn new(spec: &PageSpec, table: &StatTable) -> Result<PageContext> {
        let config = serde_json::to_string(&page::page_config(spec, table)?)?;

        let (is_bar, first_prompt, second_prompt, first_options, second_options) =
            match &spec.controls {
                PageControls::Comparison {
                    stat_prompt,
                    entity_prompt,
                    default_stat,
                    default_entity,
                    ..
                } => (
                    true,
                    *stat_prompt,
                    *entity_prompt,
                    options(table.columns(), default_stat),
                    options(table.entity_keys(), default_entity),
                ),
                PageControls::Correlation {
                    x_prompt,
                    y_prompt,
                    default_x,
                    default_y,
                } => (
                    false,
                    *x_prompt,
                    *y_prompt,
                    options(table.columns(), default_x),
                    options(table.columns(), default_y),
                ),
            };

        Ok(PageContext {
            brand: dashboard::BRAND,
            title: spec.title,
            blurb: spec.blurb,
            chart_heading: spec.chart_heading,
            slug: spec.slug,
            nav: dashboard::nav_from_page(),
            is_bar,
            first_prompt,
            second_prompt,
            first_options,
            second_options,
            config,
        })
    }
}

fn options(values: &[String], default: &str) -> Vec<SelectOption> {
    values
        .iter()
        .map(|value| SelectOption {
            value: value.clone(),
            selected: value == default,
        })
        .collect()
}
