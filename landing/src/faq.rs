//! Expand/collapse state for the FAQ accordion.
//!
//! Each entry is independent and starts collapsed.

/// Two-state toggle of one accordion entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn flipped(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    /// Value of the rendered `data-state` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Disclosure::Collapsed => "collapsed",
            Disclosure::Expanded => "expanded",
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Disclosure::Expanded
    }
}

/// Per-entry disclosure state, indexed like `PageContent::faqs`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    entries: Vec<Disclosure>,
}

impl FaqState {
    /// `len` collapsed entries.
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![Disclosure::Collapsed; len],
        }
    }

    /// Flip one entry. Returns the new state, or `None` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<Disclosure> {
        let entry = self.entries.get_mut(index)?;
        *entry = entry.flipped();
        Some(*entry)
    }

    /// State of one entry; out-of-range entries read as collapsed.
    pub fn get(&self, index: usize) -> Disclosure {
        self.entries.get(index).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
