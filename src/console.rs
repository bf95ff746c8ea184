//! Line-oriented front end
//!
//! Plays a whole session over any reader/writer pair: one command per line
//! while exploring, then one line holding the accused's name. Works on
//! plain terminals, pipes and in tests.

use crate::game::{Accusation, Command, Game, GamePhase};
use crate::Result;
use anyhow::Context;
use std::io::{BufRead, Write};

const PROMPT: &str = "Choose a path: (l) left, (r) right, (x) exit";

/// Run `game` to completion. Returns `None` if input ran out before anyone
/// was accused.
pub fn run<R, W>(game: &mut Game, mut input: R, output: &mut W) -> Result<Option<Accusation>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "=== {} ===", game.title)?;
    for message in &game.message_log {
        writeln!(output, "{}", message.message)?;
    }

    let mut line = String::new();
    while game.phase == GamePhase::Exploring {
        write!(output, "\n{}\n> ", PROMPT)?;
        output.flush()?;

        line.clear();
        let command = if input.read_line(&mut line).context("reading command")? == 0 {
            tracing::warn!("input closed while exploring; leaving the mansion");
            Command::Exit
        } else {
            Command::parse(&line)
        };

        for text in game.execute(&command) {
            writeln!(output, "{}", text)?;
        }
    }

    writeln!(output, "\n=== COLLECTED CLUES ===")?;
    for text in game.clue_listing() {
        writeln!(output, "{}", text)?;
    }

    writeln!(output, "\n=== FINAL PHASE ===")?;
    let suspects = game.index().suspects();
    if !suspects.is_empty() {
        writeln!(output, "Suspects on file: {}", suspects.join(", "))?;
    }

    let accused = loop {
        write!(output, "Name the suspect you accuse: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("reading accusation")? == 0 {
            writeln!(output, "\nNo accusation was made.")?;
            return Ok(None);
        }
        let name = line.trim();
        if !name.is_empty() {
            break name.to_string();
        }
    };

    let accusation = game.accuse(&accused)?;
    writeln!(output, "\nClues pointing at {}: {}", accusation.accused, accusation.matches)?;
    writeln!(output, "Decision: {}", accusation.summary())?;
    Ok(Some(accusation))
}
