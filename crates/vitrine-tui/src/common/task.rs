use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    ProductList,
    ProductDelete,
    ProductCreate,
    Login,
    Register,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted {
    pub id: TaskId,
    pub result: Box<UiEvent>,
}

/// Task lifecycle state (stored in TuiState, mutated only by reducer).
///
/// A completion whose id no longer matches `active` is discarded, so a
/// late response can never touch the state of a view that moved on.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub product_list: TaskState,
    pub product_delete: TaskState,
    pub product_create: TaskState,
    pub login: TaskState,
    pub register: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::ProductList => &self.product_list,
            TaskKind::ProductDelete => &self.product_delete,
            TaskKind::ProductCreate => &self.product_create,
            TaskKind::Login => &self.login,
            TaskKind::Register => &self.register,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::ProductList => &mut self.product_list,
            TaskKind::ProductDelete => &mut self.product_delete,
            TaskKind::ProductCreate => &mut self.product_create,
            TaskKind::Login => &mut self.login,
            TaskKind::Register => &mut self.register,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.product_list.is_running()
            || self.product_delete.is_running()
            || self.product_create.is_running()
            || self.login.is_running()
            || self.register.is_running()
    }
}
