use bandbook::app::commands::{AddMusicianToBand, CommandError};
use bandbook::app::logic::{Logic, LogicError};
use bandbook::app::roster::Roster;
use bandbook::app::storage::RosterStore;

fn logic_with(lines: &[&str]) -> Logic {
    let mut logic = Logic::in_memory(Roster::new());
    for line in lines {
        logic.execute(line).expect("setup command");
    }
    logic
}

fn total_memberships(logic: &Logic) -> usize {
    let roster = logic.roster();
    roster.bands().map(|(id, _)| roster.members_of(id).len()).sum()
}

#[test]
fn one_band_two_musicians_scenario() {
    let mut logic = logic_with(&[
        "addb n/Queen",
        "add n/Freddie Mercury p/91234567 e/freddie@example.com",
        "add n/Brian May p/92345678 e/brian@example.com",
    ]);

    let added = logic.execute("addm b/1 m/1").expect("first add succeeds");
    assert_eq!(
        added.feedback,
        "New musician added to band: Band: Queen; Musician: Freddie Mercury"
    );
    assert_eq!(total_memberships(&logic), 1);

    match logic.execute("addm b/1 m/1") {
        Err(LogicError::Command(CommandError::DuplicateRelation(message))) => {
            assert_eq!(message, AddMusicianToBand::MESSAGE_DUPLICATE_MUSICIAN)
        }
        other => panic!("expected duplicate, got {other:?}"),
    }
    assert_eq!(total_memberships(&logic), 1);

    match logic.execute("addm b/1 m/5") {
        Err(LogicError::Command(CommandError::OutOfRange(message))) => {
            assert_eq!(message, AddMusicianToBand::MESSAGE_OUT_OF_BOUNDS)
        }
        other => panic!("expected out of range, got {other:?}"),
    }
    assert_eq!(total_memberships(&logic), 1);

    assert!(matches!(
        logic.execute("addm b/0 m/1"),
        Err(LogicError::Command(CommandError::InvalidArgument(_)))
    ));
}

#[test]
fn deleting_a_band_member_keeps_relation_consistent() {
    let mut logic = logic_with(&[
        "addb n/Queen",
        "addb n/Highly Suspect",
        "add n/Freddie p/91234567 e/freddie@example.com",
        "add n/Johnny p/92345678 e/johnny@example.com",
        "addm b/1 m/1",
        "addm b/2 m/1",
        "addm b/2 m/2",
    ]);
    assert_eq!(total_memberships(&logic), 3);

    logic.execute("delete 1").expect("delete succeeds");
    assert_eq!(total_memberships(&logic), 1);

    // Johnny moved up to position 1.
    assert!(matches!(
        logic.execute("addm b/2 m/1"),
        Err(LogicError::Command(CommandError::DuplicateRelation(_)))
    ));
    logic.execute("addm b/1 m/1").expect("Johnny joins Queen");
    assert_eq!(total_memberships(&logic), 2);
}

#[test]
fn filtered_views_survive_a_save_and_reload() {
    let temp = tempfile::tempdir().expect("temp dir");
    let store = RosterStore::new(temp.path().join("bandbook.json"));

    let mut logic = Logic::open(store.clone()).expect("open empty store");
    for line in [
        "addb n/Queen",
        "add n/Freddie p/91234567 e/freddie@example.com",
        "add n/Roger p/93456789 e/roger@example.com",
        "find roger",
        "addm b/1 m/1",
    ] {
        logic.execute(line).expect("command succeeds");
    }

    let reloaded = Logic::open(store).expect("reload");
    let roster = reloaded.roster();
    let (queen, _) = roster.bands().next().expect("band");
    let members: Vec<String> = roster
        .members_of(queen)
        .into_iter()
        .filter_map(|id| roster.musician(id))
        .map(|musician| musician.name.to_string())
        .collect();
    assert_eq!(members, vec!["Roger".to_string()]);
}
