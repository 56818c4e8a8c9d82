//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::sync::mpsc::{self, Receiver};

use crate::config::AppConfig;
use crate::form::ActivityForm;
use crate::models::{Command, FieldId};
use crate::store::ActivityStore;

/// 表单使用的 dispatch 能力：把命令写入通道
pub type FormDispatch = Box<dyn FnMut(Command)>;

/// 应用状态
pub struct App {
    pub form: ActivityForm<FormDispatch>,
    pub store: ActivityStore,
    pub commands: Receiver<Command>,
    pub focus: Focus,
    pub name_input: String,
    pub calories_input: String,
    pub message: Option<String>,
}

/// 当前获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Category,
    Name,
    Calories,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Category, Focus::Name, Focus::Calories, Focus::Submit];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// 焦点对应的表单字段（提交按钮没有字段）
    pub fn field(self) -> Option<FieldId> {
        match self {
            Focus::Category => Some(FieldId::Category),
            Focus::Name => Some(FieldId::Name),
            Focus::Calories => Some(FieldId::Calories),
            Focus::Submit => None,
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let dispatch: FormDispatch = Box::new(move |command: Command| {
            if tx.send(command).is_err() {
                tracing::warn!("command channel closed, dropping command");
            }
        });

        let form = ActivityForm::new(config.categories.clone(), dispatch)
            .with_reset_after_submit(config.reset_after_submit);

        Self {
            form,
            store: ActivityStore::new(),
            commands: rx,
            focus: Focus::Category,
            name_input: String::new(),
            calories_input: String::new(),
            message: None,
        }
    }

    /// 获取文本字段的输入缓冲
    pub fn input_buffer_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Name => Some(&mut self.name_input),
            FieldId::Calories => Some(&mut self.calories_input),
            FieldId::Category => None,
        }
    }

    /// 当前选中分类在列表中的位置
    pub fn selected_category_index(&self) -> Option<usize> {
        let id = self.form.activity().category;
        self.form.categories().iter().position(|c| c.id == id)
    }
}
