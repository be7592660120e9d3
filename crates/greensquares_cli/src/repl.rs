//! Interactive edit loop over one editor session.
//!
//! Each line is one action; the session (grid, history, year) lives until
//! `quit` or end of input. Nothing is written to disk without `save`.

use crate::render::render_chart;
use anyhow::{bail, Context as _};
use greensquares_core::pattern::is_supported;
use greensquares_core::randomizer::DEFAULT_INTENSITY;
use greensquares_core::{parse_iso_date, EditorSession, GridStore, Intensity, ShiftDirection};
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  show                 print the chart
  year <YYYY>          switch the displayed year
  click <YYYY-MM-DD>   cycle one day's level
  random [INTENSITY]   randomize the displayed year (0..=5)
  text <TEXT>          write TEXT onto the displayed year
  left | right         shift everything one week
  undo | redo
  save                 write non-empty days to the file
  quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Show,
    Year(i32),
    Click(chrono::NaiveDate),
    Random(f64),
    Text(String),
    Shift(ShiftDirection),
    Undo,
    Redo,
    Save,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parses one line. Blank lines yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "show" => Self::Show,
            "year" => Self::Year(rest.parse().with_context(|| format!("invalid year `{rest}`"))?),
            "click" => Self::Click(parse_iso_date(rest)?),
            "random" | "randomize" => Self::Random(if rest.is_empty() {
                DEFAULT_INTENSITY
            } else {
                rest.parse()
                    .with_context(|| format!("invalid intensity `{rest}`"))?
            }),
            "text" => {
                if rest.is_empty() {
                    bail!("text needs something to write");
                }
                if let Some(ch) = rest.chars().find(|ch| !is_supported(*ch)) {
                    bail!("cannot draw `{ch}`; use letters, digits and ! ? . , - + : ' /");
                }
                Self::Text(rest.to_string())
            }
            "left" => Self::Shift(ShiftDirection::Left),
            "right" => Self::Shift(ShiftDirection::Right),
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "save" => Self::Save,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("unknown command `{other}`; type `help`"),
        };
        Ok(Some(command))
    }
}

/// Runs the loop until `quit` or end of input.
///
/// Command errors are reported and the loop continues.
pub fn run<S, R, W, G>(
    session: &mut EditorSession<S>,
    input: R,
    output: &mut W,
    rng: &mut G,
) -> anyhow::Result<()>
where
    S: GridStore,
    R: BufRead,
    W: Write,
    G: Rng,
{
    writeln!(output, "{HELP}")?;
    print_chart(session, output)?;

    for line in input.lines() {
        let line = line?;
        let command = match ReplCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "error: {err:#}")?;
                continue;
            }
        };
        if command == ReplCommand::Quit {
            break;
        }
        if let Err(err) = execute(session, command, output, rng) {
            writeln!(output, "error: {err:#}")?;
        }
    }

    info!("event=repl_exit module=cli status=ok");
    Ok(())
}

fn execute<S, W, G>(
    session: &mut EditorSession<S>,
    command: ReplCommand,
    output: &mut W,
    rng: &mut G,
) -> anyhow::Result<()>
where
    S: GridStore,
    W: Write,
    G: Rng,
{
    match command {
        ReplCommand::Show => print_chart(session, output)?,
        ReplCommand::Year(year) => {
            session.set_selected_year(year)?;
            print_chart(session, output)?;
        }
        ReplCommand::Click(date) => {
            let level = session.click_cell(date);
            writeln!(output, "{date} -> level {level}")?;
        }
        ReplCommand::Random(value) => {
            let intensity = Intensity::new(value)?;
            session.randomize(intensity, rng);
            writeln!(output, "{}", intensity.status_text())?;
            print_chart(session, output)?;
        }
        ReplCommand::Text(text) => {
            let lit = session.apply_text_pattern(&text)?;
            writeln!(output, "lit {lit} cells")?;
            print_chart(session, output)?;
        }
        ReplCommand::Shift(direction) => {
            session.shift(direction);
            print_chart(session, output)?;
        }
        ReplCommand::Undo => {
            if !session.undo() {
                writeln!(output, "nothing to undo")?;
            }
            print_chart(session, output)?;
        }
        ReplCommand::Redo => {
            if !session.redo() {
                writeln!(output, "nothing to redo")?;
            }
            print_chart(session, output)?;
        }
        ReplCommand::Save => match session.save() {
            Ok(count) => writeln!(output, "saved {count} days")?,
            Err(err) => writeln!(output, "save failed: {err}")?,
        },
        ReplCommand::Help => writeln!(output, "{HELP}")?,
        ReplCommand::Quit => {}
    }
    Ok(())
}

fn print_chart<S: GridStore, W: Write>(
    session: &EditorSession<S>,
    output: &mut W,
) -> anyhow::Result<()> {
    for line in render_chart(&session.layout()) {
        writeln!(output, "{line}")?;
    }
    Ok(())
}
