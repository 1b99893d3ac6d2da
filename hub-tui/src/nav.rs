//! Focus navigation between dashboard panels.

use hub_core::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Charts,
    Table,
}

impl Focus {
    pub fn title(&self) -> &'static str {
        match self {
            Focus::Search => "Search",
            Focus::Charts => "Charts",
            Focus::Table => "Table",
        }
    }

    /// Focusable panels for a variant, in Tab order. The classic variant
    /// has no chart selector.
    pub fn all(variant: Variant) -> &'static [Focus] {
        match variant {
            Variant::Cyber => &[Focus::Search, Focus::Charts, Focus::Table],
            Variant::Classic => &[Focus::Search, Focus::Table],
        }
    }

    pub fn index(&self, variant: Variant) -> usize {
        Self::all(variant)
            .iter()
            .position(|f| f == self)
            .unwrap_or(0)
    }

    pub fn next(&self, variant: Variant) -> Focus {
        let all = Self::all(variant);
        let next = (self.index(variant) + 1) % all.len();
        all[next]
    }

    pub fn previous(&self, variant: Variant) -> Focus {
        let all = Self::all(variant);
        let idx = self.index(variant);
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}
