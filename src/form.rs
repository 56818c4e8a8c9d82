//! 活动录入表单
//!
//! 表单持有一份草稿记录，逐字段更新，并在提交时通过注入的
//! dispatch 能力向外部状态容器发送 `save-activity` 命令。

use tracing::{debug, info, warn};

use crate::models::{Activity, Category, Command, FieldId};

/// 向外部状态容器发送命令的能力
pub trait Dispatch {
    fn dispatch(&mut self, command: Command);
}

impl<F> Dispatch for F
where
    F: FnMut(Command),
{
    fn dispatch(&mut self, command: Command) {
        self(command)
    }
}

/// 一次提交事件，宿主可以检查默认行为是否已被阻止
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[allow(dead_code)]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// 把数字输入框的原始文本转换为数值
///
/// 空白输入视为 0，无法解析的输入得到 NaN。
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // f64::from_str 还接受 "inf"/"nan" 等写法，这里只放行十进制字面量
    let is_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !is_literal {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

fn coerce_category_id(raw: &str) -> Option<u32> {
    let value = coerce_number(raw);
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// 纯函数：返回只更新了一个字段的新草稿
pub fn apply_change(draft: &Activity, field: FieldId, raw: &str) -> Activity {
    let mut next = draft.clone();
    match field {
        FieldId::Category => match coerce_category_id(raw) {
            Some(id) => next.category = id,
            None => warn!(raw, "ignoring category input that is not an id"),
        },
        FieldId::Name => next.name = raw.to_string(),
        FieldId::Calories => next.calories = coerce_number(raw),
    }
    next
}

/// 活动录入表单
pub struct ActivityForm<D> {
    categories: Vec<Category>,
    activity: Activity,
    initial: Activity,
    reset_after_submit: bool,
    dispatch: D,
}

impl<D: Dispatch> ActivityForm<D> {
    /// 创建表单，草稿为默认值
    pub fn new(categories: Vec<Category>, dispatch: D) -> Self {
        let mut initial = Activity::default();
        // 默认分类 1 不在列表中时退回到第一个分类
        if !categories.iter().any(|c| c.id == initial.category) {
            if let Some(first) = categories.first() {
                initial.category = first.id;
            }
        }

        Self {
            categories,
            activity: initial.clone(),
            initial,
            reset_after_submit: true,
            dispatch,
        }
    }

    /// 成功提交后是否把草稿恢复为默认值
    pub fn with_reset_after_submit(mut self, reset: bool) -> Self {
        self.reset_after_submit = reset;
        self
    }

    pub fn resets_after_submit(&self) -> bool {
        self.reset_after_submit
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// 当前草稿引用的分类
    pub fn selected_category(&self) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == self.activity.category)
    }

    /// 字段变更：只更新一个字段
    pub fn handle_change(&mut self, field: FieldId, raw: &str) {
        self.activity = apply_change(&self.activity, field, raw);
        debug!(field = %field, raw, "field changed");
    }

    pub fn is_valid(&self) -> bool {
        self.activity.is_valid()
    }

    /// 提交表单
    ///
    /// 总是阻止宿主的默认提交行为。草稿有效时发送一条
    /// `save-activity` 命令并返回 `true`；无效时什么都不发送。
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> bool {
        event.prevent_default();

        if !self.is_valid() {
            debug!(activity = ?self.activity, "submit ignored, draft is invalid");
            return false;
        }

        let command = Command::SaveActivity {
            new_activity: self.activity.clone(),
        };
        match serde_json::to_string(&command) {
            Ok(json) => info!(command = %json, "dispatching command"),
            Err(e) => info!(error = %e, "dispatching command"),
        }
        self.dispatch.dispatch(command);

        if self.reset_after_submit {
            self.reset();
        }
        true
    }

    /// 恢复为默认草稿
    pub fn reset(&mut self) {
        self.activity = self.initial.clone();
    }
}
