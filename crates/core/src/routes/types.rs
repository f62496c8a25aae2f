use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A page unit the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Landing page.
    Home,
    /// Bulk import of records from a CSV file.
    CsvUpload,
    /// Searchable list of users.
    UserQuery,
    /// Searchable list of devices.
    DeviceQuery,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::CsvUpload, Page::UserQuery, Page::DeviceQuery];

    /// Path the page is mounted at.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::CsvUpload => "/carga",
            Page::UserQuery => "/usuarios",
            Page::DeviceQuery => "/dispositivos",
        }
    }

    /// Human-readable page title.
    pub fn title(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Page::Home, Locale::Es) => "Inicio",
            (Page::Home, Locale::En) => "Home",
            (Page::CsvUpload, Locale::Es) => "Carga de CSV",
            (Page::CsvUpload, Locale::En) => "CSV upload",
            (Page::UserQuery, Locale::Es) => "Consulta de usuarios",
            (Page::UserQuery, Locale::En) => "User lookup",
            (Page::DeviceQuery, Locale::Es) => "Consulta de dispositivos",
            (Page::DeviceQuery, Locale::En) => "Device lookup",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Page::Home => "home",
            Page::CsvUpload => "csv-upload",
            Page::UserQuery => "user-query",
            Page::DeviceQuery => "device-query",
        };
        f.write_str(name)
    }
}
