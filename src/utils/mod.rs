//! Input validation shared by the library entry points and the CLI.

pub mod validation;
