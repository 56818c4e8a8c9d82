//! 接收表单命令的最小状态容器

use tracing::info;

use crate::models::{Activity, Command};

/// 已保存活动的内存列表
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一条命令
    pub fn reduce(&mut self, command: Command) {
        match command {
            Command::SaveActivity { new_activity } => {
                info!(
                    category = new_activity.category,
                    name = %new_activity.name,
                    calories = new_activity.calories,
                    "activity saved"
                );
                self.activities.push(new_activity);
            }
        }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save(name: &str, calories: f64) -> Command {
        Command::SaveActivity {
            new_activity: Activity {
                category: 1,
                name: name.to_string(),
                calories,
            },
        }
    }

    #[test]
    fn test_reduce_appends_in_order() {
        let mut store = ActivityStore::new();
        assert!(store.is_empty());

        store.reduce(save("Salad", 250.0));
        store.reduce(save("Orange Juice", 120.0));

        assert_eq!(store.len(), 2);
        let names: Vec<&str> = store.activities().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Salad", "Orange Juice"]);
    }
}
