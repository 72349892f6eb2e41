//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::models::TaskList;
use crate::storage::{KeyValueStore, StoreError};
use crate::task_store::TaskStore;

/// Task store over whichever slot the widget was mounted with
pub type DynTaskStore = TaskStore<Box<dyn KeyValueStore>>;

/// To-do widget signals provided via context
#[derive(Clone, Copy)]
pub struct TaskListContext {
    /// Trigger to reload tasks from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from storage - write
    set_reload_trigger: WriteSignal<u32>,
    store: StoredValue<DynTaskStore, LocalStorage>,
}

impl TaskListContext {
    pub fn new(store: DynTaskStore) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            store: StoredValue::new_local(store),
        }
    }

    /// Trigger a re-render of the list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Current stored tasks; tracks the reload trigger when read in a reactive scope
    pub fn tasks(&self) -> TaskList {
        self.reload_trigger.track();
        self.store.with_value(|store| store.load())
    }

    /// Add a task and re-render. Returns `false` when the text was empty.
    pub fn add(&self, text: &str) -> bool {
        match self.store.with_value(|store| store.add(text)) {
            Err(StoreError::EmptyText) => return false,
            Err(err) => tracing::error!(error = %err, "failed to save new task"),
            Ok(_) => {}
        }
        self.reload();
        true
    }

    pub fn toggle(&self, index: usize) {
        if let Err(err) = self.store.with_value(|store| store.toggle(index)) {
            tracing::error!(index, error = %err, "failed to save toggled task");
        }
        self.reload();
    }

    pub fn delete(&self, index: usize) {
        if let Err(err) = self.store.with_value(|store| store.delete(index)) {
            tracing::error!(index, error = %err, "failed to save after delete");
        }
        self.reload();
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.with_value(|store| store.clear()) {
            tracing::error!(error = %err, "failed to clear tasks");
        }
        self.reload();
    }
}

/// Toast contents plus a generation counter.
///
/// Each `show` starts a new generation; a hide scheduled for an older
/// generation is ignored, so only the latest countdown can hide the toast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    /// Make the toast visible with `text`; returns the generation to expire later
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = text.into();
        self.visible = true;
        self.generation
    }

    /// Hide the toast if `generation` is still the latest. Returns whether it was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}

/// The single reusable toast notification
#[derive(Clone, Copy)]
pub struct ToastContext {
    state: RwSignal<ToastState>,
    duration_ms: u32,
    /// Pending auto-hide; replacing it drops and cancels the previous one
    hide_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ToastContext {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
            duration_ms,
            hide_timer: StoredValue::new_local(None),
        }
    }

    pub fn message(&self) -> String {
        self.state.with(|s| s.message.clone())
    }

    pub fn visible(&self) -> bool {
        self.state.with(|s| s.visible)
    }

    /// Show `text` and restart the auto-hide countdown
    pub fn show(&self, text: impl Into<String>) {
        let mut generation = 0;
        self.state.update(|s| generation = s.show(text));

        let state = self.state;
        let timeout = Timeout::new(self.duration_ms, move || {
            state.maybe_update(|s| s.expire(generation));
        });
        self.hide_timer.set_value(Some(timeout));
    }
}
