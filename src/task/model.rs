/// Kind-specific part of a task
///
/// The kind is fixed at construction. Each variant carries the one extra
/// attribute that only makes sense for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Work task, tied to a project
    Work { project_name: String },
    /// Personal task, filed under a category
    Personal { category: String },
}

impl TaskKind {
    /// Label used for display and for the persisted record
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Work { .. } => "Work",
            TaskKind::Personal { .. } => "Personal",
        }
    }

    /// The project name or category, whichever this kind carries
    pub fn extra(&self) -> &str {
        match self {
            TaskKind::Work { project_name } => project_name,
            TaskKind::Personal { category } => category,
        }
    }
}

/// Human-readable label for a priority value
///
/// 1 is High and 2 is Medium. Every other value, including out-of-range
/// ones, displays as Low.
pub fn priority_label(priority: i32) -> &'static str {
    match priority {
        1 => "High",
        2 => "Medium",
        _ => "Low",
    }
}

/// A single task
///
/// Fields are private so that `kind` cannot change after creation and
/// `completed` can only move from false to true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    description: String,
    /// Free-form date text, not validated
    deadline: String,
    /// 1 = High, 2 = Medium, 3 = Low. Out-of-range values are kept as given.
    priority: i32,
    completed: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<String>,
        priority: i32,
        kind: TaskKind,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            deadline: deadline.into(),
            priority,
            completed: false,
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn priority_label(&self) -> &'static str {
        priority_label(self.priority)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn extra(&self) -> &str {
        self.kind.extra()
    }

    /// Mark the task as completed. Calling it again has no effect.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}
