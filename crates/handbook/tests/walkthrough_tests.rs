//! Walkthrough engine tests

use handbook::*;
use pretty_assertions::assert_eq;

fn presenting(rank: Rank, index: usize) -> WalkthroughState {
    WalkthroughState::Presenting { rank, index }
}

// ═══════════════════════════════════════════════════════════════════════
// Slide derivation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_every_rank_gets_five_slides_with_last_flag() {
    let model = ContentModel::builtin();
    for rank in Rank::ALL {
        let slides = derive_slides(rank, &model);
        assert_eq!(slides.len(), DECK_LEN, "{}", rank);
        let flags: Vec<bool> = slides.iter().map(|s| s.is_last).collect();
        assert_eq!(flags, [false, false, false, false, true]);
    }
}

#[test]
fn test_derivation_is_deterministic() {
    let model = ContentModel::builtin();
    for rank in Rank::ALL {
        assert_eq!(derive_slides(rank, &model), derive_slides(rank, &model));
    }
}

#[test]
fn test_slide_order_and_titles() {
    let model = ContentModel::builtin();
    let titles: Vec<String> = derive_slides(Rank::Moderator, &model)
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(
        titles,
        [
            "Welcome, Moderator!",
            "Core Values",
            "Your Responsibilities",
            "Your Toolkit",
            "You're Ready!",
        ]
    );
}

#[test]
fn test_junior_moderator_alias_lookups() {
    let model = ContentModel::builtin();
    let slides = derive_slides(Rank::JuniorModerator, &model);

    assert_eq!(slides[0].title, "Welcome, Junior Moderator!");
    assert_eq!(slides[2].subtitle, "What does a Junior Moderator do?");
    assert_eq!(
        slides[2].content,
        SlideContent::Items(vec![
            "Continue chat moderation duties".to_string(),
            "Handle intermediate level offenses".to_string(),
            "Use basic moderation tools to catch hackers".to_string(),
            "Assist with simple in-game issues".to_string(),
        ])
    );

    let expected = model
        .sub_section("commands", "Jr. Mod Commands")
        .and_then(|s| s.commands())
        .unwrap()
        .to_vec();
    assert_eq!(slides[3].content, SlideContent::Commands(expected));
}

#[test]
fn test_responsibilities_truncated_to_four() {
    let model = ContentModel::builtin();
    // Moderator has six responsibilities in the source
    let source = model.sub_section("roles", "Moderator").unwrap().list().unwrap();
    assert_eq!(source.len(), 6);

    let slides = derive_slides(Rank::Moderator, &model);
    match &slides[2].content {
        SlideContent::Items(items) => {
            assert_eq!(items.len(), 4);
            assert_eq!(items.as_slice(), &source[..4]);
        }
        other => panic!("expected items, got {:?}", other),
    }
}

#[test]
fn test_toolkit_is_not_truncated() {
    let model = ContentModel::builtin();
    let slides = derive_slides(Rank::Moderator, &model);
    match &slides[3].content {
        SlideContent::Commands(commands) => assert_eq!(commands.len(), 10),
        other => panic!("expected commands, got {:?}", other),
    }
}

#[test]
fn test_core_values_same_for_every_rank() {
    let model = ContentModel::builtin();
    let helper = derive_slides(Rank::Helper, &model);
    let moderator = derive_slides(Rank::Moderator, &model);
    assert_eq!(helper[1], moderator[1]);
    assert_eq!(helper[1].icon, Some(Icon::BookOpen));
}

#[test]
fn test_missing_sections_degrade_to_empty_content() {
    let model =
        ContentModel::new(vec![ContentSection::new("welcome", "Welcome", Icon::HeartHandshake)])
            .unwrap();

    let slides = derive_slides(Rank::Helper, &model);
    assert_eq!(slides.len(), DECK_LEN);
    assert_eq!(slides[1].title, "Core Values");
    assert_eq!(slides[1].icon, None);
    assert_eq!(slides[2].content, SlideContent::Items(vec![]));
    assert_eq!(slides[3].content, SlideContent::Commands(vec![]));
    assert!(slides[4].is_last);
}

#[test]
fn test_role_without_list_degrades_to_empty() {
    let roles = ContentSection::new("roles", "Roles", Icon::Users)
        .with_sub_section(SubSection::new("Helper").with_content("No list here"));
    let commands = ContentSection::new("commands", "Commands", Icon::Terminal)
        .with_sub_section(SubSection::new("Helper Commands").with_list(["not", "commands"]));
    let model = ContentModel::new(vec![roles, commands]).unwrap();

    let slides = derive_slides(Rank::Helper, &model);
    assert!(slides[2].content.is_empty());
    assert!(slides[3].content.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Engine transitions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_select_helper_starts_at_first_slide() {
    let model = ContentModel::builtin();
    let mut tour = Walkthrough::new(&model);
    tour.select(Rank::Helper);

    assert_eq!(tour.state(), presenting(Rank::Helper, 0));
    assert_eq!(tour.current_slide().unwrap().title, "Welcome, Helper!");
    assert_eq!(tour.progress_percent(), Some(20));
    assert!((tour.progress().unwrap() - 0.2).abs() < f64::EPSILON);
}

#[test]
fn test_next_on_last_slide_closes() {
    let model = ContentModel::builtin();
    let mut tour = Walkthrough::new(&model);
    tour.select(Rank::Helper);
    for _ in 0..4 {
        tour.next();
    }
    assert_eq!(tour.state(), presenting(Rank::Helper, 4));
    assert!(tour.current_slide().unwrap().is_last);
    assert_eq!(tour.progress_percent(), Some(100));

    tour.next();
    assert!(tour.is_closed());
    assert!(tour.current_slide().is_none());
    assert!(tour.slides().is_empty());
}

#[test]
fn test_back_stops_at_zero() {
    let model = ContentModel::builtin();
    let mut tour = Walkthrough::new(&model);
    tour.select(Rank::Moderator);
    tour.next();
    tour.next();
    assert_eq!(tour.index(), Some(2));

    tour.back();
    assert_eq!(tour.index(), Some(1));
    tour.back();
    assert_eq!(tour.index(), Some(0));
    tour.back();
    assert_eq!(tour.index(), Some(0));
}

#[test]
fn test_next_reaches_closed_after_remaining_count() {
    let model = ContentModel::builtin();
    for start in 0..DECK_LEN {
        let mut tour = Walkthrough::new(&model);
        tour.select(Rank::JuniorModerator);
        for _ in 0..start {
            tour.next();
        }
        for step in 0..(DECK_LEN - start) {
            assert!(!tour.is_closed(), "closed early at start {} step {}", start, step);
            tour.next();
        }
        assert!(tour.is_closed(), "not closed from start {}", start);
    }
}

#[test]
fn test_close_is_idempotent() {
    let model = ContentModel::builtin();
    let mut tour = Walkthrough::new(&model);
    tour.select(Rank::Helper);
    tour.close();
    tour.close();
    tour.handle(WalkthroughInput::Close);
    assert!(tour.is_closed());

    // Navigation inputs after close do nothing
    tour.handle(WalkthroughInput::Next);
    tour.handle(WalkthroughInput::Back);
    assert_eq!(tour.state(), WalkthroughState::Closed);
}

#[test]
fn test_key_names_drive_engine() {
    let model = ContentModel::builtin();
    let mut tour = Walkthrough::new(&model);
    tour.select(Rank::Helper);

    for key in ["ArrowRight", "ArrowRight", "ArrowLeft"] {
        tour.handle(key.parse().unwrap());
    }
    assert_eq!(tour.index(), Some(1));

    tour.handle("Escape".parse().unwrap());
    assert!(tour.is_closed());
}
