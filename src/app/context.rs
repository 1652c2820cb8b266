use crate::ports::{TemplateStore, WorkflowSink};

/// Wires the ports a command needs for one invocation.
pub struct AppContext<T, S> {
    templates: T,
    sink: S,
}

impl<T: TemplateStore, S: WorkflowSink> AppContext<T, S> {
    pub fn new(templates: T, sink: S) -> Self {
        Self { templates, sink }
    }

    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
