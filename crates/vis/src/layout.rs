use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::data::DataEngine;
use crate::error::Result;
use crate::page::Page;
use crate::template::TemplateEngine;

const STYLE_SHEET: &str = include_str!("./asset/style.css");
const PAGE_SCRIPT: &str = include_str!("./asset/dashboard.js");

/// The dashboard directory is structured as follows:
///
/// ./dash/index.html
/// ./dash/style.css
/// ./dash/dashboard.js
///
/// ./dash/pages/player-batting.html
/// ./dash/pages/...
/// ./dash/pages/team-pitching.html
///
/// ./dash/data/player-batting.js
/// ./dash/data/...
/// ./dash/data/team-pitching.js
///
/// The __index__ file represents the entry point into the dashboard.
/// The __pages__ directory contains one chart page per route.
/// The __data__ directory contains one table data file per page.
pub struct DashLayout {
    root_path: PathBuf,
    index_file_path: PathBuf,
    style_file_path: PathBuf,
    script_file_path: PathBuf,
    pages_path: PathBuf,
    data_path: PathBuf,
}

impl DashLayout {
    const MAIN_DIR_NAME: &str = "dash";
    const DATA_DIR_NAME: &str = "data";
    const PAGES_DIR_NAME: &str = "pages";
    const INDEX_FILE_NAME: &str = "index.html";
    const STYLE_FILE_NAME: &str = "style.css";
    const SCRIPT_FILE_NAME: &str = "dashboard.js";

    pub fn init(path: &Path) -> Result<DashLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);
        let style_file_path = root_path.join(Self::STYLE_FILE_NAME);
        let script_file_path = root_path.join(Self::SCRIPT_FILE_NAME);
        let pages_path = root_path.join(Self::PAGES_DIR_NAME);
        let data_path = root_path.join(Self::DATA_DIR_NAME);

        fs::create_dir(&root_path)?;

        Ok(Self {
            root_path,
            index_file_path,
            style_file_path,
            script_file_path,
            pages_path,
            data_path,
        })
    }

    /// Generate the whole dashboard: the shared assets, one chart page
    /// and one data file per entry, and the index.
    pub fn generate(&self, pages: &[Page]) -> Result<()> {
        fs::write(&self.style_file_path, STYLE_SHEET)?;
        fs::write(&self.script_file_path, PAGE_SCRIPT)?;

        if !self.pages_path.exists() {
            fs::create_dir(&self.pages_path)?;
        }

        let data_engine = DataEngine::new(&self.data_path);
        let template = TemplateEngine::new()?;

        for page in pages {
            data_engine.write(page.spec.slug, &page.table)?;

            let html = template.render_page(&page.spec, &page.table)?;
            let page_path = self
                .pages_path
                .join(format!("{slug}.html", slug = page.spec.slug));
            fs::write(page_path, html)?;
        }

        let index = template.render_index()?;
        fs::write(&self.index_file_path, index)?;

        Ok(())
    }

    /// The directory the dashboard lands in.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}
