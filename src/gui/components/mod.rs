// src/gui/components/mod.rs
//
// Self-contained pieces of the page. Each one draws from what it is given
// and reports clicks through actions; none keeps state of its own.

pub mod about;
pub mod changelog;
pub mod footer;
pub mod keyword_input;
pub mod language_toggle;
pub mod result_list;
pub mod submit_button;
