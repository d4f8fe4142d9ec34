use pretty_assertions::assert_eq;
use rstest::rstest;
use textblocks_engine::{Block, Document};

fn load(text: &str) -> Document {
    let mut doc = Document::new();
    doc.process_original_text(text);
    doc
}

fn shape(doc: &Document) -> Vec<(&str, bool)> {
    doc.blocks()
        .iter()
        .map(|b| (b.text(), b.is_title()))
        .collect()
}

#[rstest]
#[case::first_line("1 Intro\n\nBody", vec![("1 Intro", true), ("Body", false)])]
#[case::interior("A\n\n2 Section\n\nB", vec![("A", false), ("2 Section", true), ("B", false)])]
#[case::single_line("3 NoBlankAround", vec![("3 NoBlankAround", false)])]
#[case::last_line("Body\n\n9 Appendix", vec![("Body", false), ("9 Appendix", true)])]
#[case::crlf("A\r\n\r\n2 Section\r\n\r\nB", vec![("A", false), ("2 Section", true), ("B", false)])]
fn title_detection(#[case] text: &str, #[case] expected: Vec<(&str, bool)>) {
    assert_eq!(shape(&load(text)), expected);
}

#[test]
fn numbering_is_independent_of_interleaving() {
    let doc = load("p\n\n1 a\n\np\np\n\n2 b\n\n3 c\n\np");

    let titles: Vec<&str> = doc
        .blocks()
        .iter()
        .filter(|b| b.is_title())
        .map(Block::display_number)
        .collect();
    let paragraphs: Vec<&str> = doc
        .blocks()
        .iter()
        .filter(|b| b.is_paragraph())
        .map(Block::display_number)
        .collect();

    assert_eq!(titles, vec!["Title 1", "Title 2", "Title 3"]);
    assert_eq!(paragraphs, vec!["1.", "2.", "3.", "4."]);
}

#[test]
fn collapsing_first_title_leaves_next_section_alone() {
    let mut doc = load("1 T1\n\nP1\nP2\n\n2 T2\n\nP3");
    let t1 = doc.blocks()[0].id();

    doc.toggle_title_expansion(t1);

    let visible: Vec<bool> = doc.blocks().iter().map(|b| b.visible()).collect();
    assert_eq!(visible, vec![true, false, false, true, true]);
}

#[test]
fn ids_survive_renumbering() {
    let mut doc = load("a\nb\nc");
    let c = doc.blocks()[2].id();

    doc.toggle_title_status(doc.blocks()[0].id(), true);
    doc.delete_block(doc.blocks()[1].id());

    assert_eq!(doc.position(c), Some(1));
    assert_eq!(doc.block(c).unwrap().display_number(), "1.");
}
