// tests/tooltip.rs
mod common;

use plotmap::model::Occupant;
use plotmap::progress::NullProgress;
use plotmap::status::compute_status;
use plotmap::store::{self, DataPaths, Tables};
use plotmap::tooltip::{StatusColor, Tooltip, TooltipStyle, format_tooltip, tooltip_for};

use common::*;

fn sample() -> Tables {
    let dir = tempfile::tempdir().unwrap();
    write_sample(dir.path());
    store::load_all(&DataPaths::in_dir(dir.path()), &mut NullProgress).unwrap()
}

fn lines(t: &Tooltip) -> Vec<String> {
    t.lines.iter().map(|l| l.text()).collect()
}

#[test]
fn basic_cya1_shows_gray_fully_occupied() {
    let t = sample();
    let tip = tooltip_for(&t, "CYA1", TooltipStyle::Basic).unwrap();
    assert_eq!(lines(&tip), ["Plot CYA1", "Section: Church Yard", "Status: Fully Occupied"]);

    let status_span = tip.lines[2].spans.iter().find(|s| s.color.is_some()).unwrap();
    assert_eq!(status_span.text, "Fully Occupied");
    assert_eq!(status_span.color, Some(StatusColor::Gray));
}

#[test]
fn occupants_cya1_lists_names_with_one_veteran() {
    let t = sample();
    let tip = tooltip_for(&t, "CYA1", TooltipStyle::Occupants).unwrap();
    let text = tip.to_plain_text();
    for name in ["Watson H. Thurston", "Eliza Thurston", "Mary Thurston", "John Thurston"] {
        assert!(text.contains(name), "missing {name}");
    }
    // "yes" in lowercase is not the flag
    assert_eq!(text.matches('⭐').count(), 1);
    assert!(text.contains("Watson H. Thurston ⭐"));
}

#[test]
fn occupants_nya5_empty_line() {
    let t = sample();
    let tip = tooltip_for(&t, "NYA5", TooltipStyle::Occupants).unwrap();
    assert_eq!(lines(&tip).last().map(String::as_str), Some("No occupants - 4 available"));
}

#[test]
fn detailed_counts_and_purchaser() {
    let t = sample();
    let cya1 = lines(&tooltip_for(&t, "CYA1", TooltipStyle::Detailed).unwrap());
    assert!(cya1.contains(&"Total lots: 4".to_string()));
    assert!(cya1.contains(&"Occupants: 4".to_string()));
    assert!(cya1.contains(&"Purchaser: Eliza Thurston".to_string()));
    assert!(!cya1.iter().any(|l| l.starts_with("Available:")));

    let nya5 = lines(&tooltip_for(&t, "NYA5", TooltipStyle::Detailed).unwrap());
    assert!(nya5.contains(&"Available: 4".to_string()));
    assert!(!nya5.iter().any(|l| l.starts_with("Occupants:") || l.starts_with("Purchaser:")));

    // "Unknown" purchaser is treated as missing
    let cya10 = lines(&tooltip_for(&t, "CYA10", TooltipStyle::Detailed).unwrap());
    assert!(!cya10.iter().any(|l| l.starts_with("Purchaser:")));
}

#[test]
fn full_shows_dates_photos_and_call_to_action() {
    let t = sample();
    let full = lines(&tooltip_for(&t, "CYA1", TooltipStyle::Full).unwrap());
    assert!(full.contains(&"Watson H. Thurston ⭐ (d. 1918)".to_string()));
    assert!(full.contains(&"John Thurston".to_string()));
    assert!(full.contains(&"Monument photos: 2".to_string()));
    assert!(full.contains(&"Available: 0".to_string()));
    assert_eq!(full.last().map(String::as_str), Some("Click for full plot details"));
    assert!(!full.iter().any(|l| l.ends_with(" more")));
}

fn full_lines_for(count: usize) -> Vec<String> {
    let occupants: Vec<Occupant> = (1..=count).map(|n| occupant("P1-L1", &format!("Person {n}"))).collect();
    let tables = Tables::new(vec![plot("P1", "Old Yard")], vec![lot("P1-L1", "Occupied")], occupants);
    let refs: Vec<&Occupant> = tables.occupants().iter().collect();
    let st = compute_status(&tables, "P1");
    lines(&format_tooltip(tables.plot("P1").unwrap(), &st, &refs, TooltipStyle::Full))
}

#[test]
fn full_with_exactly_five_has_no_remainder_line() {
    let text = full_lines_for(5);
    assert!(text.contains(&"Person 5".to_string()));
    assert!(!text.iter().any(|l| l.ends_with(" more")));
}

#[test]
fn full_with_six_shows_one_more() {
    let text = full_lines_for(6);
    assert!(text.contains(&"Person 5".to_string()));
    assert!(!text.contains(&"Person 6".to_string()));
    assert!(text.contains(&"+1 more".to_string()));
}

#[test]
fn full_truncates_after_five_occupants() {
    let mut occupants: Vec<Occupant> = (1..=8).map(|n| occupant("P1-L1", &format!("Person {n}"))).collect();
    occupants[6] = veteran("P1-L1", "Person 7");
    let tables = Tables::new(vec![plot("P1", "Old Yard")], vec![lot("P1-L1", "Occupied")], occupants);

    let refs: Vec<&Occupant> = tables.occupants().iter().collect();
    let st = compute_status(&tables, "P1");
    let tip = format_tooltip(tables.plot("P1").unwrap(), &st, &refs, TooltipStyle::Full);
    let text = lines(&tip);

    assert!(text.contains(&"Person 5".to_string()));
    assert!(!text.iter().any(|l| l.starts_with("Person 6") || l.starts_with("Person 7")));
    assert!(text.contains(&"+3 more".to_string()));
}

#[test]
fn formatting_is_pure() {
    let t = sample();
    for style in TooltipStyle::ALL {
        let a = tooltip_for(&t, "CYA1", style).unwrap();
        let b = tooltip_for(&t, "CYA1", style).unwrap();
        assert_eq!(a, b, "{style}");
        assert!(lines(&a)[0] == "Plot CYA1" && lines(&a)[1] == "Section: Church Yard");
    }
}

#[test]
fn missing_plot_has_no_tooltip() {
    let t = sample();
    assert!(tooltip_for(&t, "XYZ1", TooltipStyle::Full).is_none());
}

#[test]
fn style_names_parse() {
    assert_eq!("full".parse::<TooltipStyle>(), Ok(TooltipStyle::Full));
    assert_eq!(" Occupants ".parse::<TooltipStyle>(), Ok(TooltipStyle::Occupants));
    assert!("fancy".parse::<TooltipStyle>().is_err());
    assert_eq!(TooltipStyle::default(), TooltipStyle::Detailed);
}

#[test]
fn colour_hex() {
    assert_eq!(StatusColor::Teal.hex(), "#2EC4B6");
    assert_eq!(StatusColor::Red.hex(), "#EF476F");
}

#[test]
fn tooltip_json_carries_span_colours() {
    let t = sample();
    let tip = tooltip_for(&t, "NYA5", TooltipStyle::Basic).unwrap();
    let json = serde_json::to_value(&tip).unwrap();
    let status = &json["lines"][2]["spans"][1];
    assert_eq!(status["text"], "Available");
    assert_eq!(status["color"], "Teal");
    assert_eq!(status["strong"], true);
}
