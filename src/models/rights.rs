//! Delegated-admin permission catalog.
//!
//! On disk the flags are positional (`id,name,f1,f2,f3,f4,f5` in catalog
//! order); in memory they are a named-field record so code never depends on
//! column positions.

use serde::Serialize;

/// Fixed permission catalog. Order matters only for the on-disk columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Right {
    Summary,
    Export,
    ManageUsers,
    Settings,
    DangerZone,
}

impl Right {
    pub const ALL: [Right; 5] = [
        Right::Summary,
        Right::Export,
        Right::ManageUsers,
        Right::Settings,
        Right::DangerZone,
    ];

    /// Stable code used in callback payloads (`right_<code>_<id>`).
    pub fn code(&self) -> &'static str {
        match self {
            Right::Summary => "summary",
            Right::Export => "export",
            Right::ManageUsers => "manage_users",
            Right::Settings => "settings",
            Right::DangerZone => "danger_zone",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Right::ALL.iter().copied().find(|r| r.code() == code)
    }

    /// Button / list caption.
    pub fn label(&self) -> &'static str {
        match self {
            Right::Summary => "📊 Сводка",
            Right::Export => "📥 Экспорт",
            Right::ManageUsers => "👥 Управление ЛС",
            Right::Settings => "⚙️ Настройки",
            Right::DangerZone => "⚠️ Опасная зона",
        }
    }
}

/// One flag per catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RightSet {
    pub summary: bool,
    pub export: bool,
    pub manage_users: bool,
    pub settings: bool,
    pub danger_zone: bool,
}

impl RightSet {
    pub fn has(&self, right: Right) -> bool {
        match right {
            Right::Summary => self.summary,
            Right::Export => self.export,
            Right::ManageUsers => self.manage_users,
            Right::Settings => self.settings,
            Right::DangerZone => self.danger_zone,
        }
    }

    pub fn set(&mut self, right: Right, value: bool) {
        match right {
            Right::Summary => self.summary = value,
            Right::Export => self.export = value,
            Right::ManageUsers => self.manage_users = value,
            Right::Settings => self.settings = value,
            Right::DangerZone => self.danger_zone = value,
        }
    }

    pub fn toggle(&mut self, right: Right) {
        self.set(right, !self.has(right));
    }

    /// Flags in catalog order as the positional `0`/`1` columns.
    pub fn to_columns(&self) -> Vec<String> {
        Right::ALL
            .iter()
            .map(|r| if self.has(*r) { "1" } else { "0" }.to_string())
            .collect()
    }

    /// Read the positional columns back. Missing columns count as unset,
    /// which keeps rows written by older versions readable.
    pub fn from_columns(cols: &[String]) -> Self {
        let mut set = RightSet::default();
        for (i, right) in Right::ALL.iter().enumerate() {
            if cols.get(i).map(|c| c == "1").unwrap_or(false) {
                set.set(*right, true);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_round_trip() {
        let mut set = RightSet::default();
        set.set(Right::Export, true);
        set.set(Right::DangerZone, true);
        let cols = set.to_columns();
        assert_eq!(cols, vec!["0", "1", "0", "0", "1"]);
        assert_eq!(RightSet::from_columns(&cols), set);
    }

    #[test]
    fn short_rows_read_as_unset() {
        let cols = vec!["1".to_string()];
        let set = RightSet::from_columns(&cols);
        assert!(set.summary);
        assert!(!set.export);
        assert!(!set.danger_zone);
    }

    #[test]
    fn code_round_trip() {
        for r in Right::ALL {
            assert_eq!(Right::from_code(r.code()), Some(r));
        }
        assert_eq!(Right::from_code("nope"), None);
    }
}
