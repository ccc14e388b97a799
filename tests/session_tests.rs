use calorielog::core::catalog::Catalog;
use calorielog::core::session::Session;
use calorielog::errors::AppError;
use calorielog::models::food_entry::FoodEntry;
use calorielog::store::records::SaveMode;
use calorielog::utils::date::{Period, date_stamp, stamp_to_date, today_stamp};
use chrono::NaiveDate;

fn fruit_catalog() -> Catalog {
    Catalog::new(vec![
        FoodEntry::new("Apple", "1 medium", 95.0),
        FoodEntry::new("Banana", "1 medium", 105.0),
        FoodEntry::new("Soup", "1 bowl", 62.5),
    ])
}

#[test]
fn test_apple_banana_scenario() {
    let mut s = Session::new(fruit_catalog(), 20240307).unwrap();

    s.select(0).unwrap();
    s.add();
    s.add();
    assert_eq!(s.running_total(), 190.0);

    s.select(1).unwrap();
    s.add();
    assert_eq!(s.running_total(), 295.0);
    assert_eq!(s.display(), "295.0");

    s.clear();
    assert_eq!(s.running_total(), 0.0);
    assert_eq!(s.display(), "0.0");
}

#[test]
fn test_first_entry_is_selected_at_start() {
    let mut s = Session::new(fruit_catalog(), 20240307).unwrap();
    assert_eq!(s.selected_index(), 0);
    assert_eq!(s.selected_calories(), 95.0);

    s.add();
    assert_eq!(s.running_total(), 95.0);
}

#[test]
fn test_total_is_sum_of_selected_values() {
    let mut s = Session::new(fruit_catalog(), 20240307).unwrap();
    let picks = [2, 0, 2, 1, 1, 0, 2];

    let mut expected = 0.0;
    for &i in &picks {
        expected += s.select(i).unwrap();
        s.add();
    }

    assert_eq!(s.running_total(), expected);
    assert_eq!(expected, 62.5 * 3.0 + 95.0 * 2.0 + 105.0 * 2.0);
    assert_eq!(s.display(), "587.5");
}

#[test]
fn test_selection_yields_catalog_value() {
    let catalog = fruit_catalog();
    let mut s = Session::new(catalog.clone(), 20240307).unwrap();

    for i in 0..catalog.len() {
        assert_eq!(s.select(i).unwrap(), catalog.entries()[i].calories);
        assert_eq!(s.selected_calories(), catalog.calories_at(i).unwrap());
    }
}

#[test]
fn test_invalid_selection_keeps_previous_one() {
    let mut s = Session::new(fruit_catalog(), 20240307).unwrap();
    s.select(1).unwrap();

    assert!(matches!(
        s.select(3),
        Err(AppError::InvalidSelection { index: 3, len: 3 })
    ));
    assert_eq!(s.selected_index(), 1);
    assert_eq!(s.add(), 105.0);
}

#[test]
fn test_save_mode_defaults_to_append() {
    let s = Session::new(fruit_catalog(), 20240307).unwrap();
    assert_eq!(s.save_mode(), SaveMode::Append);

    let s = s.with_overwrite(true);
    assert_eq!(s.save_mode(), SaveMode::Overwrite);
}

#[test]
fn test_date_stamp_encoding() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    assert_eq!(date_stamp(d), 20240307);

    let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    assert_eq!(date_stamp(d), 20000101);

    let d = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    assert_eq!(date_stamp(d), 19991231);
}

#[test]
fn test_today_stamp_is_local_calendar_day() {
    let before = date_stamp(chrono::Local::now().date_naive());
    let stamp = today_stamp();
    let after = date_stamp(chrono::Local::now().date_naive());

    // only differs when the call straddles midnight
    assert!(stamp == before || stamp == after);
    assert!(stamp_to_date(stamp).is_some());
}

#[test]
fn test_session_is_stamped_at_construction() {
    let before = today_stamp();
    let mut s = Session::for_today(fruit_catalog()).unwrap();
    let after = today_stamp();

    let stamp = s.date_stamp();
    assert!(stamp == before || stamp == after);

    // adding and clearing never touch the stamp
    s.add();
    s.clear();
    assert_eq!(s.date_stamp(), stamp);
}

#[test]
fn test_period_display_round_trips_through_parse() {
    for p in ["all", "2024", "2024-03", "2024-03-07"] {
        assert_eq!(Period::parse(p).unwrap().to_string(), p);
    }
}

#[test]
fn test_stamp_decoding() {
    assert_eq!(stamp_to_date(20240307), NaiveDate::from_ymd_opt(2024, 3, 7));
    assert_eq!(stamp_to_date(20240230), None);
    assert_eq!(stamp_to_date(0), None);
}

#[test]
fn test_period_filter() {
    let march = Period::parse("2024-03").unwrap();
    assert!(march.contains(20240307));
    assert!(!march.contains(20240407));

    assert!(Period::parse("2024").unwrap().contains(20241231));
    assert!(Period::parse("2024-03-07").unwrap().contains(20240307));
    assert!(!Period::parse("2024-03-07").unwrap().contains(20240308));

    assert!(Period::parse("all").unwrap().contains(12345));
    assert!(!march.contains(12345));

    assert!(matches!(
        Period::parse("March"),
        Err(AppError::InvalidPeriod(_))
    ));
    assert_eq!(Period::from_arg(None).unwrap(), Period::All);
}
