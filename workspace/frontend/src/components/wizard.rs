pub mod choices;
pub mod shell;
pub mod step_sidebar;
