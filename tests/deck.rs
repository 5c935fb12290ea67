use demodeck::deck::{ProblemLayout, SlideContent};
use demodeck::{ContentConfig, SlideKind, build, generate, render};
use proptest::prelude::*;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn archive_names(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn read_member(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut member = archive.by_name(name).unwrap();
    let mut text = String::new();
    member.read_to_string(&mut text).unwrap();
    text
}

fn assert_well_formed(name: &str, xml: &str) {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    assert!(
        !xml.chars().any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r')),
        "{} carries a control character",
        name
    );
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("{} is not well-formed: {}", name, e),
        }
    }
}

fn write_png(path: &Path, width: u32, height: u32) {
    image::RgbImage::new(width, height).save(path).unwrap();
}

#[test]
fn acme_scanner_scenario() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("acme.pptx");

    let mut content = ContentConfig::default();
    content.title.product_name = "Acme Scanner".to_string();
    content.ask.title = "30 minutes of your time".to_string();

    let summary = generate(&content, "default", None, &out).unwrap();
    assert_eq!(summary.slides, 10);
    assert_eq!(summary.images, 0);

    let names = archive_names(&out);
    let slides = names
        .iter()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 10);
    assert!(!names.iter().any(|n| n.starts_with("ppt/media/")));

    let ask_number = SlideKind::Ask.number();
    let ask = read_member(&out, &format!("ppt/slides/slide{}.xml", ask_number));
    assert!(ask.contains("30 minutes of your time"));

    let cover = read_member(&out, "ppt/slides/slide1.xml");
    assert!(cover.contains("Acme Scanner"));
    let core = read_member(&out, "docProps/core.xml");
    assert!(core.contains("<dc:title>Acme Scanner</dc:title>"));
}

#[test]
fn package_lists_every_part() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("deck.pptx");
    generate(&ContentConfig::default(), "default", None, &out).unwrap();

    let mut archive = zip::ZipArchive::new(File::open(&out).unwrap()).unwrap();
    assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");
    assert_eq!(archive.by_index(1).unwrap().name(), "_rels/.rels");

    let names = archive_names(&out);

    let content_types = read_member(&out, "[Content_Types].xml");
    for name in &names {
        if name.ends_with(".xml") && !name.starts_with('[') {
            assert!(
                content_types.contains(&format!("PartName=\"/{}\"", name)),
                "{} missing from content types",
                name
            );
        }
    }

    for n in 1..=10 {
        assert!(names.contains(&format!("ppt/notesSlides/notesSlide{}.xml", n)));
        let rels = read_member(&out, &format!("ppt/slides/_rels/slide{}.xml.rels", n));
        assert!(rels.contains(&format!("../notesSlides/notesSlide{}.xml", n)));
    }

    let notes = read_member(&out, "ppt/notesSlides/notesSlide3.xml");
    assert!(notes.contains("<a:t>SAY: Make them feel the pain</a:t>"));
}

#[test]
fn iceberg_changes_problem_slide() {
    let content = ContentConfig::default();
    let plain = build(&content, "default", None).unwrap();
    let iceberg = build(&content, "iceberg", None).unwrap();

    let problem = |deck: &demodeck::Deck| deck.slide_of(SlideKind::Problem).cloned().unwrap();
    assert_ne!(problem(&plain), problem(&iceberg));

    match problem(&iceberg).content {
        SlideContent::Problem(ProblemLayout::Iceberg { sky, ocean, .. }) => assert_ne!(sky, ocean),
        other => panic!("expected iceberg layout, got {:?}", other),
    }

    // Other slides keep their content
    for kind in [SlideKind::Scale, SlideKind::Ask] {
        assert_eq!(
            plain.slide_of(kind).unwrap().content,
            iceberg.slide_of(kind).unwrap().content
        );
    }
}

#[test]
fn screenshot_lands_on_slide_four() {
    let tmp = TempDir::new().unwrap();
    let shots = tmp.path().join("shots");
    fs::create_dir(&shots).unwrap();
    write_png(&shots.join("4.png"), 64, 48);
    let out = tmp.path().join("deck.pptx");

    let summary = generate(&ContentConfig::default(), "default", Some(&shots), &out).unwrap();
    assert_eq!(summary.images, 1);

    let names = archive_names(&out);
    assert!(names.contains(&"ppt/media/image1.png".to_string()));
    let rels = read_member(&out, "ppt/slides/_rels/slide4.xml.rels");
    assert!(rels.contains("../media/image1.png"));
    let slide = read_member(&out, "ppt/slides/slide4.xml");
    assert!(slide.contains("<p:pic>"));
}

#[test]
fn unmatched_screenshots_are_ignored() {
    let tmp = TempDir::new().unwrap();
    write_png(&tmp.path().join("cover.png"), 10, 10);
    write_png(&tmp.path().join("slide_2.png"), 10, 10);
    fs::write(tmp.path().join("5.txt"), "not an image").unwrap();

    let deck = build(&ContentConfig::default(), "default", Some(tmp.path())).unwrap();
    assert_eq!(deck.image_count(), 0);
}

#[test]
fn missing_screenshot_dir_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let deck = build(
        &ContentConfig::default(),
        "default",
        Some(&tmp.path().join("does-not-exist")),
    )
    .unwrap();
    assert_eq!(deck.len(), 10);
    assert_eq!(deck.image_count(), 0);
}

#[test]
fn unknown_palette_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("neon.pptx");

    let err = generate(&ContentConfig::default(), "neon", None, &out).unwrap_err();
    assert!(err.is_configuration());
    assert!(!out.exists());
}

#[test]
fn render_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("deck.pptx");
    let deck = build(&ContentConfig::default(), "iceberg", None).unwrap();

    render(&deck, &out).unwrap();
    let first = fs::read(&out).unwrap();
    render(&deck, &out).unwrap();
    let second = fs::read(&out).unwrap();
    assert_eq!(first, second);
}

#[test]
fn xml_text_is_escaped() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("deck.pptx");
    let mut content = ContentConfig::default();
    content.title.product_name = "R&D <Tools>".to_string();

    generate(&content, "default", None, &out).unwrap();
    let cover = read_member(&out, "ppt/slides/slide1.xml");
    assert!(cover.contains("R&amp;D &lt;Tools&gt;"));
}

#[test]
fn control_characters_never_reach_parts() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("deck.pptx");
    let mut content = ContentConfig::default();
    content.title.product_name = "Acme\u{0B}Scanner".to_string();
    content.ask.title = "30 minutes\u{0}\u{1F} of your time".to_string();

    generate(&content, "default", None, &out).unwrap();

    for name in archive_names(&out).iter().filter(|n| n.ends_with(".xml") || n.ends_with(".rels")) {
        assert_well_formed(name, &read_member(&out, name));
    }
    assert!(read_member(&out, "ppt/slides/slide1.xml").contains("AcmeScanner"));
    assert!(read_member(&out, "docProps/core.xml").contains("<dc:title>AcmeScanner</dc:title>"));
    let ask = read_member(&out, &format!("ppt/slides/slide{}.xml", SlideKind::Ask.number()));
    assert!(ask.contains("30 minutes of your time"));
}

fn text_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9 &<>'\"]{0,24}", 0..6)
}

fn arb_content() -> impl Strategy<Value = ContentConfig> {
    (
        "[A-Za-z0-9 ]{0,30}",
        text_list(),
        text_list(),
        text_list(),
        text_list(),
        "[A-Za-z0-9 ?]{0,40}",
    )
        .prop_map(|(name, pains, stages, completed, gaps, ask)| {
            let mut content = ContentConfig::default();
            content.title.product_name = name;
            content.problem.pain_points = pains;
            content.solution.stages = stages;
            content.roadmap.completed = completed;
            content.roadmap.gaps = gaps;
            content.ask.title = ask;
            content
        })
}

proptest! {
    #[test]
    fn any_content_builds_ten_ordered_slides(
        content in arb_content(),
        palette in prop::sample::select(vec!["default", "iceberg", "ICEBERG", " default "]),
    ) {
        let deck = build(&content, palette, None).unwrap();
        let kinds: Vec<SlideKind> = deck.slides().iter().map(|s| s.kind()).collect();
        prop_assert_eq!(kinds, SlideKind::ALL.to_vec());
        for (i, slide) in deck.slides().iter().enumerate() {
            prop_assert_eq!(slide.number, i + 1);
        }
        prop_assert_eq!(deck.image_count(), 0);
    }
}
