use crate::{catalog::CatalogStore, domain::EntryId};

/// Result of reconciling the selection with what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected(EntryId),
    /// Nothing rendered, nothing selected.
    Empty,
    /// The requested id is not a rendered catalog entry; nothing is selected.
    Invalid(EntryId),
}

/// Tracks the single selected entry. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<EntryId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<EntryId> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// A fresh list replaces any previous selection with its first entry.
    pub fn on_rendered(&mut self, rendered: &[EntryId]) -> SelectionOutcome {
        self.selected = rendered.first().copied();
        match self.selected {
            Some(id) => SelectionOutcome::Selected(id),
            None => SelectionOutcome::Empty,
        }
    }

    /// Keep the current selection if it is still rendered, otherwise start over.
    pub fn retain(&mut self, rendered: &[EntryId]) -> SelectionOutcome {
        match self.selected {
            Some(id) if rendered.contains(&id) => SelectionOutcome::Selected(id),
            _ => self.on_rendered(rendered),
        }
    }

    /// Explicit pick of a rendered item.
    pub fn pick(
        &mut self,
        id: EntryId,
        rendered: &[EntryId],
        catalog: &CatalogStore,
    ) -> SelectionOutcome {
        if rendered.contains(&id) && catalog.find_by_id(id).is_some() {
            self.selected = Some(id);
            SelectionOutcome::Selected(id)
        } else {
            self.selected = None;
            SelectionOutcome::Invalid(id)
        }
    }

    /// The rendered item `delta` positions away from the selection, clamped to
    /// the list. `None` when that is the current selection.
    pub fn neighbor(&self, delta: isize, rendered: &[EntryId]) -> Option<EntryId> {
        let last = rendered.len().checked_sub(1)?;
        let target = match self
            .selected
            .and_then(|id| rendered.iter().position(|candidate| *candidate == id))
        {
            Some(position) => position.saturating_add_signed(delta).min(last),
            None => 0,
        };
        let id = rendered[target];
        (Some(id) != self.selected).then_some(id)
    }
}
