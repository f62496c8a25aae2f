use std::collections::HashMap;
use std::sync::LazyLock;

use super::Page;

static ROUTES: LazyLock<RouteTable> = LazyLock::new(RouteTable::new);

/// Returns the process-wide route table, building it on first use.
pub fn routes() -> &'static RouteTable {
    &ROUTES
}

/// Read-only mapping from path to [`Page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: HashMap<&'static str, Page>,
}

impl RouteTable {
    fn new() -> Self {
        let entries = Page::ALL.iter().map(|page| (page.path(), *page)).collect();
        Self { entries }
    }

    /// Looks up the page mounted at `path`.
    ///
    /// Paths are matched exactly; `None` means the router should apply its
    /// own fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use inventario_core::{routes, Page};
    ///
    /// assert_eq!(routes().lookup("/carga"), Some(Page::CsvUpload));
    /// assert_eq!(routes().lookup("/missing"), None);
    /// ```
    pub fn lookup(&self, path: &str) -> Option<Page> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(path, page)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Page)> + '_ {
        self.entries.iter().map(|(path, page)| (*path, *page))
    }

    /// Returns all entries sorted by path.
    pub fn sorted(&self) -> Vec<(&'static str, Page)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(path, _)| *path);
        entries
    }
}
