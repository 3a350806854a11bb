use crate::config::Config;
use crate::engine::session::Session;
use crate::engine::world::World;
use crate::map::loader::load_map;
use crate::tui::{input::{action_for_key, is_press}, renderer::render};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use ratatui::{backend::CrosstermBackend, Terminal};

use std::io;

pub fn run(config: &Config) -> Result<()> {
    let map_path = config.map_path();
    let loaded = load_map(&map_path)?;
    let malformed = loaded.malformed.len();

    let mut session = Session::new(World::new(loaded), config.map_name.clone());
    if malformed > 0 {
        session.push_log(format!("Warning: {} map cell(s) could not be read.", malformed));
    }

    let mut terminal = setup_terminal()?;
    let result = turn_loop(&mut terminal, &mut session);
    let restored = restore_terminal(&mut terminal);

    result.and(restored)
}

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode + alternate screen. Undoes whatever it managed if a later step fails.
fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("enabling raw mode")?;

    let attempt = (|| -> Result<Term> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(terminal)
    })();

    if attempt.is_err() {
        let undone = all_steps([
            ("leaving alternate screen", execute!(io::stdout(), LeaveAlternateScreen)),
            ("disabling raw mode", disable_raw_mode()),
        ]);
        if let Err(e) = undone {
            log::error!("Terminal not fully restored after failed setup: {:#}", e);
        }
    }
    attempt
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    all_steps([
        ("disabling raw mode", disable_raw_mode()),
        ("leaving alternate screen", execute!(terminal.backend_mut(), LeaveAlternateScreen)),
        ("showing cursor", terminal.show_cursor()),
    ])
}

/// Every step has already run; report the first failure.
fn all_steps<const N: usize>(steps: [(&'static str, io::Result<()>); N]) -> Result<()> {
    let mut first: Option<anyhow::Error> = None;
    for (what, res) in steps {
        if let Err(e) = res {
            log::warn!("{} failed: {}", what, e);
            if first.is_none() {
                first = Some(anyhow::Error::new(e).context(what));
            }
        }
    }
    match first {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Draw, block for one key, apply, repeat.
fn turn_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> Result<()> {
    let mut running = true;
    while running {
        terminal.draw(|f| render(f, session))?;

        match event::read()? {
            Event::Resize(_, _) => {
                terminal.autoresize()?;
                terminal.clear()?;
            }

            Event::Key(key) => {
                if !is_press(&key) {
                    continue;
                }
                running = session.apply(action_for_key(&key));
            }

            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(msg: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn test_all_steps_ok() {
        assert!(all_steps([("a", Ok(())), ("b", Ok(()))]).is_ok());
    }

    #[test]
    fn test_all_steps_reports_first_failure() {
        let err = all_steps([
            ("disabling raw mode", failed("no tty")),
            ("leaving alternate screen", Ok(())),
            ("showing cursor", failed("closed")),
        ])
        .unwrap_err();

        let msg = format!("{:#}", err);
        assert!(msg.starts_with("disabling raw mode"), "{msg}");
        assert!(msg.contains("no tty"), "{msg}");
    }

    #[test]
    fn test_later_step_failure_still_reported() {
        let err = all_steps([
            ("disabling raw mode", Ok(())),
            ("showing cursor", failed("closed")),
        ])
        .unwrap_err();
        assert!(format!("{:#}", err).contains("showing cursor"));
    }
}
