use super::resources::TableSurface;

/// Roles that render a sectioned table.
pub trait TableDisplay {
    fn table_surface(&self) -> &dyn TableSurface;

    fn display_table(&self, sections: Vec<String>) {
        self.table_surface().reload(sections);
    }

    fn clear_table(&self) {
        if !self.table_surface().sections().is_empty() {
            self.table_surface().reload(Vec::new());
        }
    }

    fn displayed_sections(&self) -> Vec<String> {
        self.table_surface().sections()
    }
}
