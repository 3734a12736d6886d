// StudyPalz - Screen state machine
//
// The front-end's whole state is the current `Screen`. Input arrives as
// `Event`s; submits go to the credential store and their outcome comes back
// as a `Popup`.

use zeroize::Zeroizing;

use crate::store::{ClassLabel, CredentialStore};

pub const ABOUT_TEXT: &str = "StudyPalz is your personal learning companion, designed to help you \
stay focused, track your progress, and learn effectively.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    About,
    Login,
    Register,
    Menu { username: String },
}

/// User intent coming from the front-end.
pub enum Event {
    GetStarted,
    ShowAbout,
    Back,
    ShowRegister,
    SubmitLogin {
        username: String,
        password: Zeroizing<String>,
    },
    SubmitRegister {
        username: String,
        email: String,
        password: Zeroizing<String>,
        class: Option<ClassLabel>,
    },
    StartLearning,
    ViewProgress,
    Logout,
}

/// A message for the user: a short title and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: &'static str,
    pub message: String,
}

impl Popup {
    fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success",
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error",
            message: message.into(),
        }
    }

    fn coming_soon(message: &str) -> Self {
        Self {
            title: "Feature Coming Soon",
            message: message.to_string(),
        }
    }
}

pub struct App<S> {
    store: S,
    screen: Screen,
}

impl<S: CredentialStore> App<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            screen: Screen::Welcome,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn go(&mut self, next: Screen) {
        tracing::debug!(from = ?self.screen, to = ?next, "Screen transition");
        self.screen = next;
    }

    /// Apply one event. Events that make no sense on the current screen are
    /// ignored.
    pub fn handle(&mut self, event: Event) -> Option<Popup> {
        match (&self.screen, event) {
            (Screen::Welcome, Event::GetStarted) => {
                self.go(Screen::Login);
                None
            }
            (Screen::Welcome, Event::ShowAbout) => {
                self.go(Screen::About);
                None
            }
            (Screen::About, Event::Back) => {
                self.go(Screen::Welcome);
                None
            }
            (Screen::Login, Event::ShowRegister) => {
                self.go(Screen::Register);
                None
            }
            (Screen::Register, Event::Back) => {
                self.go(Screen::Login);
                None
            }
            (Screen::Login, Event::SubmitLogin { username, password }) => {
                match self.store.login(&username, &password) {
                    Ok(()) => {
                        let popup = Popup::success(format!("Welcome, {}!", username));
                        self.go(Screen::Menu { username });
                        Some(popup)
                    }
                    Err(e) => Some(Popup::error(e.to_string())),
                }
            }
            (
                Screen::Register,
                Event::SubmitRegister {
                    username,
                    email,
                    password,
                    class,
                },
            ) => {
                let class = class.map(|c| c.as_str()).unwrap_or("");
                match self.store.register(&username, &email, &password, class) {
                    Ok(()) => {
                        self.go(Screen::Login);
                        Some(Popup::success("Account created!"))
                    }
                    Err(e) => Some(Popup::error(e.to_string())),
                }
            }
            (Screen::Menu { .. }, Event::StartLearning) => Some(Popup::coming_soon(
                "Start learning feature is under development.",
            )),
            (Screen::Menu { .. }, Event::ViewProgress) => Some(Popup::coming_soon(
                "Progress tracking feature is under development.",
            )),
            (Screen::Menu { username }, Event::Logout) => {
                tracing::info!(username = %username, "User logged out");
                self.go(Screen::Login);
                None
            }
            _ => None,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
