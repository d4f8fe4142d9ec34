use super::*;
use crate::io;
use pretty_assertions::assert_eq;

#[test]
fn user_workflow_open_edit_collapse_save() {
    // Given a file with a preface and two numbered sections
    let dir = create_test_dir();
    let source = create_test_file(
        &dir,
        "outline.txt",
        "Notes on the project\n\n1 Goals\n\nShip it\nKeep it small\n\n2 Risks\n\nScope creep",
    );
    let mut doc = Document::new();

    // When opening it
    let count = io::open_document(&mut doc, &source).unwrap();

    // Then titles and paragraphs are numbered independently
    assert_eq!(count, 6);
    let labels: Vec<_> = doc.blocks().iter().map(|b| b.display_number()).collect();
    assert_eq!(labels, vec!["1.", "Title 1", "2.", "3.", "Title 2", "4."]);

    // When the user edits, adds a paragraph and collapses the risks section
    let goals = doc.blocks()[1].id();
    let risks = doc.blocks()[4].id();
    let new_id = doc.add_empty_paragraph(doc.position(risks));
    doc.update_block_text(new_id, "Have fun");
    doc.toggle_title_expansion(risks);

    // Then the new paragraph sits under goals and the risks body is hidden
    assert_eq!(doc.position(new_id), Some(4));
    assert!(doc.block(new_id).unwrap().visible());
    assert!(!doc.is_collapsed(goals));

    let saved_path = dir.path().join("saved.txt");
    io::save_document(&doc, &saved_path).unwrap();
    assert_eq!(
        io::read_file(&saved_path).unwrap(),
        "Notes on the project\n\n1 Goals\n\nShip it\n\nKeep it small\n\nHave fun\n\n2 Risks"
    );

    // And stats only count what is visible
    let stats = doc.stats();
    assert_eq!(stats.total_blocks, 7);
    assert_eq!(stats.visible_blocks, 6);
    assert_eq!(stats.titles, 2);
    assert_eq!(stats.paragraphs, 4);
}

#[test]
fn user_workflow_saved_file_reopens_with_same_structure() {
    // Given a document where every block is separated by blank lines
    let dir = create_test_dir();
    let mut doc = Document::new();
    doc.process_original_text("Intro\n\n1 Part\n\nBody");
    let path = dir.path().join("roundtrip.txt");

    // When saving and reopening
    io::save_document(&doc, &path).unwrap();
    let mut reopened = Document::new();
    io::open_document(&mut reopened, &path).unwrap();

    // Then titles are detected the same way
    let shape = |d: &Document| -> Vec<(String, bool)> {
        d.blocks()
            .iter()
            .map(|b| (b.text().to_string(), b.is_title()))
            .collect()
    };
    assert_eq!(shape(&doc), shape(&reopened));
}

#[test]
fn user_workflow_retitle_and_outline() {
    // Given plain paragraphs with no detected titles
    let mut doc = Document::new();
    doc.process_original_text("Chapter one\nIt begins\nChapter two\nIt ends");
    assert!(doc.outline().is_empty());

    // When the user marks two lines as titles and collapses all
    let ids = ids(&doc);
    doc.toggle_title_status(ids[0], true);
    doc.toggle_title_status(ids[2], true);
    doc.collapse_all();

    // Then the outline shows both, collapsed
    let rendered: Vec<String> = doc.outline().iter().map(|e| e.to_string()).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    [+] Title 1: Chapter one
    [+] Title 2: Chapter two
    ");

    // When the user picks the second title in the outline
    doc.reveal(ids[2]);

    // Then only that section opens
    assert_eq!(visibility(&doc), vec![true, false, true, true]);
}

#[test]
fn user_workflow_clear_all() {
    let mut doc = Document::new();
    doc.process_original_text("1 A\n\nB");
    doc.collapse_all();

    doc.clear_all();

    assert!(doc.is_empty());
    assert!(doc.outline().is_empty());
    assert_eq!(doc.original_text(), "");
    assert!(matches!(
        io::save_document(&doc, &create_test_dir().path().join("x.txt")),
        Err(io::IoError::NothingToSave)
    ));
}
