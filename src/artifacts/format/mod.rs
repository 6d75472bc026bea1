pub mod composer;
pub mod shell;
pub mod template;
