use gateway_core::{IdPage, MissingPage};
use liquid::{Object, Parser, ParserBuilder, Template};
use serde::Serialize;

const ID_TEMPLATE: &str = include_str!("../templates/id.liquid");
const NOT_FOUND_TEMPLATE: &str = include_str!("../templates/not_found.liquid");

/// Static body for failed requests. It has no placeholders so it can be
/// served even when template rendering is what failed.
pub const ERROR_PAGE: &str = include_str!("../templates/error.html");

#[derive(Serialize)]
struct IdGlobals<'a> {
    page: &'a IdPage,
}

#[derive(Serialize)]
struct MissingGlobals<'a> {
    missing: &'a MissingPage,
}

/// Parsed page templates, built once at startup.
pub struct Templates {
    id_page: Template,
    not_found: Template,
}

impl Templates {
    pub fn load() -> Result<Self, liquid::Error> {
        let parser = build_parser()?;
        Ok(Self {
            id_page: parser.parse(ID_TEMPLATE)?,
            not_found: parser.parse(NOT_FOUND_TEMPLATE)?,
        })
    }

    pub fn render_id(&self, page: &IdPage) -> Result<String, liquid::Error> {
        let globals: Object = liquid::to_object(&IdGlobals { page })?;
        self.id_page.render(&globals)
    }

    pub fn render_not_found(&self, missing: &MissingPage) -> Result<String, liquid::Error> {
        let globals: Object = liquid::to_object(&MissingGlobals { missing })?;
        self.not_found.render(&globals)
    }
}

fn build_parser() -> Result<Parser, liquid::Error> {
    ParserBuilder::with_stdlib().build()
}
