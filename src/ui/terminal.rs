// StudyPalz - Terminal front-end
//
// Renders each screen as a numbered menu and turns the user's choice into an
// `Event`. Works over any reader/writer pair so it can be driven from tests.

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

use super::screens::{App, Event, Screen, ABOUT_TEXT};
use crate::store::{ClassLabel, CredentialStore};

enum Step {
    Event(Event),
    Unknown,
    Quit,
}

/// Run the interactive loop until the user quits or input ends.
pub fn run<S, R, W>(app: &mut App<S>, mut input: R, mut output: W) -> io::Result<()>
where
    S: CredentialStore,
    R: BufRead,
    W: Write,
{
    loop {
        render(app.screen(), &mut output)?;

        let Some(choice) = prompt(&mut input, &mut output, "> ")? else {
            break;
        };
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case("q") {
            break;
        }

        let event = match read_event(app.screen(), choice, &mut input, &mut output)? {
            Step::Event(event) => event,
            Step::Unknown => {
                writeln!(output, "Unknown option: {}", choice)?;
                continue;
            }
            Step::Quit => break,
        };

        if let Some(popup) = app.handle(event) {
            writeln!(output, "[{}] {}", popup.title, popup.message)?;
        }
    }

    writeln!(output, "Goodbye!")?;
    output.flush()
}

fn render<W: Write>(screen: &Screen, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    match screen {
        Screen::Welcome => {
            writeln!(out, "== Welcome to StudyPalz ==")?;
            writeln!(out, "  1) Get Started")?;
            writeln!(out, "  2) About Us")?;
        }
        Screen::About => {
            writeln!(out, "== About StudyPalz ==")?;
            writeln!(out, "{}", ABOUT_TEXT)?;
            writeln!(out, "  1) Back")?;
        }
        Screen::Login => {
            writeln!(out, "== Login ==")?;
            writeln!(out, "  1) Login")?;
            writeln!(out, "  2) Register")?;
        }
        Screen::Register => {
            writeln!(out, "== Register ==")?;
            writeln!(out, "  1) Register")?;
            writeln!(out, "  2) Back to Login")?;
        }
        Screen::Menu { username } => {
            writeln!(out, "== Menu ({}) ==", username)?;
            writeln!(out, "  1) Start Learning")?;
            writeln!(out, "  2) View Progress")?;
            writeln!(out, "  3) Logout")?;
        }
    }
    writeln!(out, "  q) Quit")
}

/// Print `label` and read one line without its line ending. `None` on EOF.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn read_event<R: BufRead, W: Write>(
    screen: &Screen,
    choice: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Step> {
    let step = match (screen, choice) {
        (Screen::Welcome, "1") => Step::Event(Event::GetStarted),
        (Screen::Welcome, "2") => Step::Event(Event::ShowAbout),
        (Screen::About, "1") => Step::Event(Event::Back),
        (Screen::Login, "1") => read_login(input, output)?,
        (Screen::Login, "2") => Step::Event(Event::ShowRegister),
        (Screen::Register, "1") => read_registration(input, output)?,
        (Screen::Register, "2") => Step::Event(Event::Back),
        (Screen::Menu { .. }, "1") => Step::Event(Event::StartLearning),
        (Screen::Menu { .. }, "2") => Step::Event(Event::ViewProgress),
        (Screen::Menu { .. }, "3") => Step::Event(Event::Logout),
        _ => Step::Unknown,
    };
    Ok(step)
}

fn read_login<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Step> {
    let Some(username) = prompt(input, output, "Username: ")? else {
        return Ok(Step::Quit);
    };
    let Some(password) = prompt(input, output, "Password: ")? else {
        return Ok(Step::Quit);
    };

    Ok(Step::Event(Event::SubmitLogin {
        username,
        password: Zeroizing::new(password),
    }))
}

fn read_registration<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Step> {
    let Some(username) = prompt(input, output, "Username: ")? else {
        return Ok(Step::Quit);
    };
    let Some(email) = prompt(input, output, "Email: ")? else {
        return Ok(Step::Quit);
    };
    let Some(password) = prompt(input, output, "Password: ")? else {
        return Ok(Step::Quit);
    };
    let password = Zeroizing::new(password);

    for (i, label) in ClassLabel::ALL.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, label)?;
    }
    let Some(class_choice) = prompt(input, output, "Select Class: ")? else {
        return Ok(Step::Quit);
    };
    // Anything that is not a listed option leaves the class unselected.
    let class = class_choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ClassLabel::ALL.get(i).copied());

    Ok(Step::Event(Event::SubmitRegister {
        username,
        email,
        password,
        class,
    }))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{HashingParams, SqliteCredentialStore, StoreConfig};
    use std::io::Cursor;
    use std::time::Duration;

    fn setup_app() -> (tempfile::TempDir, App<SqliteCredentialStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteCredentialStore::new(StoreConfig {
            path: dir.path().join("studypalz.db"),
            busy_timeout: Duration::from_millis(200),
            hashing: HashingParams {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
        });
        store.initialize().unwrap();
        (dir, App::new(store))
    }

    fn drive(app: &mut App<SqliteCredentialStore>, script: &str) -> String {
        let mut out = Vec::new();
        run(app, Cursor::new(script.as_bytes().to_vec()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_session() {
        let (_dir, mut app) = setup_app();
        let script = "1\n2\n1\nalice\nalice@example.com\npw123\n1\n1\nalice\npw123\n1\n3\nq\n";

        let out = drive(&mut app, script);
        assert!(out.contains("== Welcome to StudyPalz =="));
        assert!(out.contains("[Success] Account created!"));
        assert!(out.contains("[Success] Welcome, alice!"));
        assert!(out.contains("== Menu (alice) =="));
        assert!(out.contains("[Feature Coming Soon] Start learning feature is under development."));
        assert!(out.trim_end().ends_with("Goodbye!"));
        assert_eq!(app.screen(), &Screen::Login);
        assert_eq!(app.store().count().unwrap(), 1);
    }

    #[test]
    fn test_unselected_class_is_rejected() {
        let (_dir, mut app) = setup_app();
        let out = drive(&mut app, "1\n2\n1\nbob\nbob@example.com\npw\n9\n");

        assert!(out.contains("[Error] All fields are required!"));
        assert_eq!(app.screen(), &Screen::Register);
    }

    #[test]
    fn test_about_page_and_unknown_option() {
        let (_dir, mut app) = setup_app();
        let out = drive(&mut app, "2\n7\n1\n");

        assert!(out.contains(ABOUT_TEXT));
        assert!(out.contains("Unknown option: 7"));
        assert_eq!(app.screen(), &Screen::Welcome);
    }

    #[test]
    fn test_eof_mid_form_quits() {
        let (_dir, mut app) = setup_app();
        let out = drive(&mut app, "1\n1\nalice\n");

        assert!(out.contains("Password: "));
        assert!(out.trim_end().ends_with("Goodbye!"));
        assert_eq!(app.screen(), &Screen::Login);
    }

    #[test]
    fn test_password_is_not_echoed_back() {
        let (_dir, mut app) = setup_app();
        let out = drive(&mut app, "1\n1\nalice\nhunter2\nq\n");

        assert!(out.contains("[Error] Invalid credentials!"));
        assert!(!out.contains("hunter2"));
    }
}
