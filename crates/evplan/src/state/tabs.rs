/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Dataset,
    EvChart,
    Sensitivity,
    Tree,
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::Dataset,
        TabId::EvChart,
        TabId::Sensitivity,
        TabId::Tree,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Dataset => "Dataset",
            TabId::EvChart => "EV Chart",
            TabId::Sensitivity => "Sensitivity",
            TabId::Tree => "Decision Tree",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Dataset => 0,
            TabId::EvChart => 1,
            TabId::Sensitivity => 2,
            TabId::Tree => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Dataset),
            1 => Some(TabId::EvChart),
            2 => Some(TabId::Sensitivity),
            3 => Some(TabId::Tree),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_index(tab.index()), Some(tab));
        }
        assert_eq!(TabId::from_index(TabId::ALL.len()), None);
    }
}
