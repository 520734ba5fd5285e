// Ordered container of dynamic form rows, created by cloning a template.
use shared::models::RowId;

/// A row that can live in a `RowList`.
pub trait DynamicRow: Clone {
    fn id(&self) -> RowId;
    fn assign_id(&mut self, id: RowId);
    /// 1-based sequence number shown to the user.
    fn number(&self) -> usize;
    fn set_number(&mut self, number: usize);
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowList<R: DynamicRow> {
    template: R,
    rows: Vec<R>,
    next_id: u64,
}

impl<R: DynamicRow> RowList<R> {
    pub fn new(template: R) -> Self {
        RowList {
            template,
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Clones the template onto the end of the list and renumbers.
    pub fn add(&mut self) -> RowId {
        let row = self.template.clone();
        self.push(row)
    }

    /// Appends an already filled row, giving it a fresh id.
    pub fn push(&mut self, mut row: R) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        row.assign_id(id);
        self.rows.push(row);
        self.renumber();
        tracing::debug!(row = %id, rows = self.rows.len(), "Row added");
        id
    }

    /// Deletes the row with `id` and renumbers. Unknown ids are a no-op.
    pub fn remove(&mut self, id: RowId) -> bool {
        let Some(pos) = self.rows.iter().position(|r| r.id() == id) else {
            return false;
        };
        self.rows.remove(pos);
        self.renumber();
        tracing::debug!(row = %id, rows = self.rows.len(), "Row removed");
        true
    }

    /// Assigns 1..N in current order.
    pub fn renumber(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.set_number(index + 1);
        }
    }

    pub fn get(&self, id: RowId) -> Option<&R> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut R> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, R> {
        self.rows.iter_mut()
    }

    pub fn template(&self) -> &R {
        &self.template
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
