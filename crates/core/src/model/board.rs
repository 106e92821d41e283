use super::{Column, ModelError, Technician, TimeBlock, ViewWindow};

/// The day's calendar: one column per technician, all sharing a view window.
#[derive(Debug, Clone)]
pub struct Board {
    view: ViewWindow,
    columns: Vec<Column>,
}

impl Board {
    /// Create an empty board over `view`.
    pub fn new(view: ViewWindow) -> Self {
        Self {
            view,
            columns: Vec::new(),
        }
    }

    /// Add a technician's column. Columns keep insertion order.
    pub fn add_column(
        &mut self,
        technician: Technician,
        blocks: Vec<TimeBlock>,
    ) -> Result<(), ModelError> {
        if self.columns.iter().any(|c| c.technician().id == technician.id) {
            return Err(ModelError::DuplicateTechnician(technician.id));
        }
        let column = Column::new(technician, self.view, blocks)?;
        self.columns.push(column);
        Ok(())
    }

    pub fn view(&self) -> ViewWindow {
        self.view
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Column of the technician with `technician_id`.
    pub fn column_for(&self, technician_id: u64) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.technician().id == technician_id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of work orders across all columns.
    pub fn block_count(&self) -> usize {
        self.columns.iter().map(|c| c.blocks().len()).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ViewWindow::workday())
    }
}
