use crate::term::TermGroup;
use crate::{TermId, DEFAULT_NUM_PARENTS};

#[derive(Debug, Clone)]
pub(crate) struct TermInternal {
    id: TermId,
    label: Option<String>,
    parents: TermGroup,
    children: TermGroup,
}

impl TermInternal {
    pub fn new(id: TermId, label: Option<String>) -> TermInternal {
        TermInternal {
            id,
            label,
            parents: TermGroup::with_capacity(DEFAULT_NUM_PARENTS),
            children: TermGroup::with_capacity(DEFAULT_NUM_PARENTS),
        }
    }

    pub fn id(&self) -> &TermId {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn parents(&self) -> &TermGroup {
        &self.parents
    }

    pub fn children(&self) -> &TermGroup {
        &self.children
    }

    pub fn add_parent(&mut self, parent_id: TermId) -> bool {
        self.parents.insert(parent_id)
    }

    pub fn add_child(&mut self, child_id: TermId) -> bool {
        self.children.insert(child_id)
    }
}

impl PartialEq for TermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TermInternal {}
