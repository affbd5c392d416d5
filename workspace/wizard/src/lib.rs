//! Carer profile-building wizard.
//!
//! The wizard is an ordered list of steps. Each step owns one typed form that
//! is stored under its own key; a shared completion map records which steps
//! were submitted. [`ProfileWizard`] is the single owner of that draft: it
//! validates and stores step forms, marks completion, works out navigation
//! from the step registry and refuses to overwrite a draft another window
//! changed in the meantime.
//!
//! Storage is abstracted behind [`KeyValueStorage`] so the same code runs
//! against `window.localStorage` in the browser and [`MemoryStorage`] in tests.

pub mod completion;
pub mod draft;
pub mod forms;
pub mod steps;
pub mod storage;
pub mod timeline;

pub use completion::{COMPLETION_KEY, CompletionStatus, CompletionStore};
pub use draft::{ProfileWizard, REVISION_KEY, StepOutcome, WizardError};
pub use forms::StepForm;
pub use steps::{PREVIEW_ROUTE, SidebarEntry, StepDescriptor, WIZARD_BASE_ROUTE};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use timeline::{Frame, Timeline, TimelineCursor};
