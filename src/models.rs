use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 活动分类（由外部提供的静态列表）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// 默认分类列表
pub fn default_categories() -> Vec<Category> {
    vec![Category::new(1, "Food"), Category::new(2, "Exercise")]
}

/// 活动草稿记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub category: u32,
    pub name: String,
    pub calories: f64, // NaN 表示无法解析的输入
}

impl Default for Activity {
    fn default() -> Self {
        Self {
            category: 1,
            name: String::new(),
            calories: 0.0,
        }
    }
}

impl Activity {
    /// 名称去除首尾空白后非空，且卡路里严格大于 0
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.calories > 0.0
    }
}

/// 表单字段标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Category,
    Name,
    Calories,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Category => "category",
            FieldId::Name => "name",
            FieldId::Calories => "calories",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field id: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(FieldId::Category),
            "name" => Ok(FieldId::Name),
            "calories" => Ok(FieldId::Calories),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// 表单发往外部状态容器的命令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Command {
    SaveActivity {
        #[serde(rename = "newActivity")]
        new_activity: Activity,
    },
}
