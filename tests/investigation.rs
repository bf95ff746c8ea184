use mansion_mystery::game::{count_matches, decide, Command, GamePhase, Verdict};
use mansion_mystery::{console, CaseFile, ClueAssociation, ClueLedger, Game, Mansion, RoomSpec, SuspectIndex};
use std::io::Cursor;

fn game_for(rooms: Vec<RoomSpec>, associations: Vec<ClueAssociation>) -> Game {
    let case = CaseFile {
        title: "Test Case".to_string(),
        root: rooms[0].id.clone(),
        bucket_count: None,
        rooms,
        associations,
    };
    Game::from_case(&case, None).unwrap()
}

#[test]
fn single_clue_is_below_the_threshold() {
    let mut game = game_for(
        vec![
            RoomSpec::new("hall", "Hall").clue("Footprints").left("study"),
            RoomSpec::new("study", "Study"),
        ],
        vec![ClueAssociation::new("Footprints", "Carlos")],
    );

    game.execute(&Command::Exit);
    let accusation = game.accuse("Carlos").unwrap();
    assert_eq!(accusation.matches, 1);
    assert_eq!(accusation.verdict, Verdict::Insufficient);
    assert_eq!(game.phase, GamePhase::Closed(Verdict::Insufficient));
}

#[test]
fn two_clues_for_ana_convict_her() {
    let mut game = game_for(
        vec![
            RoomSpec::new("hall", "Hall").left("living"),
            RoomSpec::new("living", "Living Room").clue("Stained book").right("pantry"),
            RoomSpec::new("pantry", "Pantry").clue("Opened wrapper"),
        ],
        vec![
            ClueAssociation::new("Stained book", "Ana"),
            ClueAssociation::new("Opened wrapper", "Ana"),
        ],
    );

    for input in ["l", "r", "x"] {
        game.execute(&Command::parse(input));
    }
    let accusation = game.accuse("Ana").unwrap();
    assert_eq!(accusation.matches, 2);
    assert_eq!(accusation.verdict, Verdict::Guilty);
}

#[test]
fn repeated_clue_text_counts_every_time() {
    let mut game = game_for(
        vec![
            RoomSpec::new("hall", "Hall").clue("Ash on the floor").right("study"),
            RoomSpec::new("study", "Study").clue("Ash on the floor"),
        ],
        vec![ClueAssociation::new("Ash on the floor", "Beatriz")],
    );

    game.execute(&Command::parse("r"));
    game.execute(&Command::Exit);
    assert_eq!(game.clue_listing(), vec!["- Ash on the floor", "- Ash on the floor"]);

    let accusation = game.accuse("Beatriz").unwrap();
    assert_eq!(accusation.matches, 2);
    assert_eq!(accusation.verdict, Verdict::Guilty);
}

#[test]
fn ledger_and_index_compose_without_a_session() {
    let mut ledger = ClueLedger::new();
    for clue in ["C", "A", "B"] {
        ledger.insert(clue);
    }
    let associations = [
        ClueAssociation::new("A", "X"),
        ClueAssociation::new("B", "X"),
        ClueAssociation::new("C", "Y"),
    ];
    let index = SuspectIndex::from_associations(10, &associations).unwrap();

    assert_eq!(count_matches(&ledger, &index, "X"), 2);
    assert_eq!(count_matches(&ledger, &index, "Y"), 1);
    assert_eq!(count_matches(&ledger, &index, "Z"), 0);
    assert_eq!(decide(count_matches(&ledger, &index, "X")), Verdict::Guilty);
    assert_eq!(decide(count_matches(&ledger, &index, "Y")), Verdict::Insufficient);
}

#[test]
fn manor_affair_best_path_for_each_suspect() {
    // Carlos: hall, kitchen, cellar
    let mut game = Game::from_case(&CaseFile::manor_affair(), None).unwrap();
    let mut output = Vec::new();
    let accusation = console::run(&mut game, Cursor::new("r\nr\nx\nCarlos\n"), &mut output)
        .unwrap()
        .unwrap();
    assert_eq!((accusation.matches, accusation.verdict), (3, Verdict::Guilty));

    // Ana: living room only; the pantry is on the other branch
    let mut game = Game::from_case(&CaseFile::manor_affair(), None).unwrap();
    let accusation = console::run(&mut game, Cursor::new("l\nl\nx\nAna\n"), &mut Vec::new())
        .unwrap()
        .unwrap();
    assert_eq!((accusation.matches, accusation.verdict), (1, Verdict::Insufficient));
}

#[test]
fn nobody_home_reports_no_clues() {
    let mansion = Mansion::build("porch", &[RoomSpec::new("porch", "Porch")]).unwrap();
    let mut game = Game::new("Empty", mansion, SuspectIndex::new(1).unwrap());
    let mut output = Vec::new();
    let accusation = console::run(&mut game, Cursor::new("x\nCarlos\n"), &mut output)
        .unwrap()
        .unwrap();
    let transcript = String::from_utf8(output).unwrap();

    assert!(transcript.contains("No clue in this room."));
    assert!(transcript.contains("No clues were collected."));
    assert!(!transcript.contains("Suspects on file"));
    assert_eq!(accusation.matches, 0);
    assert_eq!(accusation.verdict, Verdict::Insufficient);
}

#[test]
fn case_file_from_disk_plays_through() {
    let path = std::env::temp_dir().join(format!("mansion-mystery-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "title": "Boathouse",
            "root": "dock",
            "bucket_count": 2,
            "rooms": [
                { "id": "dock", "name": "Dock", "clue": "Wet rope", "left": "hut" },
                { "id": "hut", "name": "Hut", "clue": "Oar with initials" }
            ],
            "associations": [
                { "clue": "Wet rope", "suspect": "Ana" },
                { "clue": "Oar with initials", "suspect": "Ana" }
            ]
        }"#,
    )
    .unwrap();

    let case = CaseFile::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut game = Game::from_case(&case, None).unwrap();
    assert_eq!(game.index().bucket_count(), 2);
    game.execute(&Command::parse("left"));
    game.execute(&Command::parse("exit"));
    assert!(game.accuse("Ana").unwrap().verdict.is_guilty());
}
