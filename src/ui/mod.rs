// Source viewer UI collaborators.

pub mod console_view;
