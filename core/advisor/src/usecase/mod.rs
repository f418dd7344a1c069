pub(crate) mod app;
pub(crate) mod workbench;

pub(crate) use workbench::{Workbench, WorkbenchDeps};
