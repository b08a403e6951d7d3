//! 排除规则

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 排除的板块/股票类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionKind {
    /// 科创板
    Kcb,
    /// 创业板
    Cyb,
    /// 北交所
    Bjs,
    /// ST 股
    St,
    /// 退市股
    Delist,
}

impl ExclusionKind {
    pub const ALL: [ExclusionKind; 5] = [
        ExclusionKind::Kcb,
        ExclusionKind::Cyb,
        ExclusionKind::Bjs,
        ExclusionKind::St,
        ExclusionKind::Delist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionKind::Kcb => "kcb",
            ExclusionKind::Cyb => "cyb",
            ExclusionKind::Bjs => "bjs",
            ExclusionKind::St => "st",
            ExclusionKind::Delist => "delist",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExclusionKind::Kcb => "排除科创板",
            ExclusionKind::Cyb => "排除创业板",
            ExclusionKind::Bjs => "排除北交所",
            ExclusionKind::St => "排除ST股",
            ExclusionKind::Delist => "排除退市股",
        }
    }
}

impl FromStr for ExclusionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kcb" => Ok(ExclusionKind::Kcb),
            "cyb" => Ok(ExclusionKind::Cyb),
            "bjs" => Ok(ExclusionKind::Bjs),
            "st" => Ok(ExclusionKind::St),
            "delist" => Ok(ExclusionKind::Delist),
            _ => Err(format!("Unknown exclusion: {}", s)),
        }
    }
}

/// 五个相互独立的排除开关，任意组合（包括全部关闭）都合法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExclusionSet {
    pub kcb: bool,
    pub cyb: bool,
    pub bjs: bool,
    pub st: bool,
    pub delist: bool,
}

impl ExclusionSet {
    pub fn all() -> Self {
        Self {
            kcb: true,
            cyb: true,
            bjs: true,
            st: true,
            delist: true,
        }
    }

    pub fn get(&self, kind: ExclusionKind) -> bool {
        match kind {
            ExclusionKind::Kcb => self.kcb,
            ExclusionKind::Cyb => self.cyb,
            ExclusionKind::Bjs => self.bjs,
            ExclusionKind::St => self.st,
            ExclusionKind::Delist => self.delist,
        }
    }

    pub fn set(&mut self, kind: ExclusionKind, checked: bool) {
        let slot = match kind {
            ExclusionKind::Kcb => &mut self.kcb,
            ExclusionKind::Cyb => &mut self.cyb,
            ExclusionKind::Bjs => &mut self.bjs,
            ExclusionKind::St => &mut self.st,
            ExclusionKind::Delist => &mut self.delist,
        };
        *slot = checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_independent() {
        let mut set = ExclusionSet::default();
        set.set(ExclusionKind::St, true);
        for kind in ExclusionKind::ALL {
            assert_eq!(set.get(kind), kind == ExclusionKind::St);
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(ExclusionSet::all()).unwrap();
        for kind in ExclusionKind::ALL {
            assert_eq!(value[kind.as_str()], serde_json::Value::Bool(true));
        }
    }
}
