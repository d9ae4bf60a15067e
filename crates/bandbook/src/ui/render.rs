//! Plain-text rendering of the displayed lists.

use std::fmt::Write;

use crate::app::commands::{CommandError, CommandOutcome};
use crate::app::logic::LogicError;
use crate::app::roster::Roster;

/// Render the feedback for one command, followed by the lists when they changed or
/// when a position missed them.
pub fn render_result(result: &Result<CommandOutcome, LogicError>, roster: &Roster) -> String {
    match result {
        Ok(outcome) if outcome.show_lists => {
            format!("{}\n{}", outcome.feedback, render_lists(roster))
        }
        Ok(outcome) => format!("{}\n", outcome.feedback),
        Err(err @ LogicError::Command(CommandError::OutOfRange(_))) => {
            format!("{err}\n{}", render_lists(roster))
        }
        Err(err) => format!("{err}\n"),
    }
}

/// Render the displayed bands and musicians with the positions commands refer to.
pub fn render_lists(roster: &Roster) -> String {
    let mut out = String::new();

    out.push_str("Bands:\n");
    if roster.displayed_bands().is_empty() {
        out.push_str("  (none)\n");
    }
    for (slot, id) in roster.displayed_bands().iter().enumerate() {
        let Some(band) = roster.band(*id) else {
            continue;
        };
        let _ = writeln!(out, "  {}. {band}", slot + 1);
        let members: Vec<String> = roster
            .members_of(*id)
            .into_iter()
            .filter_map(|member| roster.musician(member))
            .map(|member| member.name.to_string())
            .collect();
        if !members.is_empty() {
            let _ = writeln!(out, "     Members: {}", members.join(", "));
        }
    }

    out.push_str("Musicians:\n");
    if roster.displayed_musicians().is_empty() {
        out.push_str("  (none)\n");
    }
    for (slot, id) in roster.displayed_musicians().iter().enumerate() {
        if let Some(musician) = roster.musician(*id) {
            let _ = writeln!(out, "  {}. {musician}", slot + 1);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::logic::Logic;

    #[test]
    fn empty_roster_renders_placeholders() {
        assert_eq!(
            render_lists(&Roster::new()),
            "Bands:\n  (none)\nMusicians:\n  (none)\n"
        );
    }

    #[test]
    fn listing_commands_append_the_lists() {
        let mut logic = Logic::in_memory(Roster::new());
        let added = logic.execute("addb n/Queen");
        assert_eq!(
            render_result(&added, logic.roster()),
            "New band added: Queen\nBands:\n  1. Queen\nMusicians:\n  (none)\n"
        );

        let listed = logic.execute("list");
        assert_eq!(
            render_result(&listed, logic.roster()),
            "Listed all bands and musicians\nBands:\n  1. Queen\nMusicians:\n  (none)\n"
        );

        let failed = logic.execute("addm b/1 m/1");
        let rendered = render_result(&failed, logic.roster());
        assert!(rendered.starts_with("The index of musician"));
        assert!(rendered.ends_with("Bands:\n  1. Queen\nMusicians:\n  (none)\n"));

        let helped = logic.execute("help");
        assert!(!render_result(&helped, logic.roster()).contains("Bands:"));
    }

    #[test]
    fn delete_renumbers_the_lists_addm_then_refers_to() {
        let mut logic = Logic::in_memory(Roster::new());
        logic.execute("addb n/Queen").unwrap();
        logic.execute("add n/Alice p/12345678 e/alice@example.com").unwrap();
        logic.execute("add n/Bob p/87654321 e/bob@example.com").unwrap();

        let deleted = logic.execute("delete 1");
        let rendered = render_result(&deleted, logic.roster());
        assert!(rendered.starts_with("Deleted Musician: Alice"));
        assert!(rendered.ends_with(
            "Bands:\n  1. Queen\nMusicians:\n  1. Bob; Phone: 87654321; Email: bob@example.com\n"
        ));

        let stale = logic.execute("addm b/1 m/2");
        let rendered = render_result(&stale, logic.roster());
        assert!(rendered.starts_with("The index of musician is not found in the list below."));
        assert!(rendered.ends_with("  1. Bob; Phone: 87654321; Email: bob@example.com\n"));

        let added = logic.execute("addm b/1 m/1");
        let rendered = render_result(&added, logic.roster());
        assert!(rendered.starts_with("New musician added to band: Band: Queen; Musician: Bob\n"));
        assert!(rendered.contains("  1. Queen\n     Members: Bob\n"));
    }
}
