// StudyPalz - UI Module
//
// Screen flow (welcome, about, login, register, menu) on top of the
// credential store, plus a line-oriented terminal front-end for it.

mod screens;
mod terminal;

pub use screens::{App, Event, Popup, Screen, ABOUT_TEXT};
pub use terminal::run;
