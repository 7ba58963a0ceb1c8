#![forbid(unsafe_code)]
use appel::{compose, Boarder, Leave, Snapshot};
use insta::assert_snapshot;

fn lee() -> Boarder {
    Boarder::absent("Lee", "1A")
}

fn ng() -> Boarder {
    Boarder::absent("Ng", "2C")
}

fn tan() -> Boarder {
    Boarder::on_leave("Tan", "3B", Leave::new("home leave", "6pm"))
}

#[test]
fn everyone_in_and_no_leave() {
    assert_eq!(
        compose(&[], &[]),
        "Hi BMs, all boarders are in and there is no one with leaves today.\nThank you!"
    );
}

#[test]
fn no_absentee_uses_raw_return_time() {
    let b = tan();
    let msg = compose(&[], &[&b]);
    assert!(msg.contains("- 3B Tan (6pm)"));
    assert!(!msg.contains("home leave"));
    assert_snapshot!(msg, @r"
    Hi BMs, all boarders are in, except for those with leaves:
    - 3B Tan (6pm)
    Thank you!
    ");
}

#[test]
fn no_absentee_lists_each_leave_on_its_own_line() {
    let a = tan();
    let b = Boarder::on_leave("Ong", "4D", Leave::new("", "Sun 8pm"));
    let msg = compose(&[], &[&a, &b]);
    let lines: Vec<&str> = msg.lines().collect();
    assert_eq!(lines[1], "- 3B Tan (6pm)");
    assert_eq!(lines[2], "- 4D Ong (Sun 8pm)");
    assert_eq!(lines.len(), 4);
}

#[test]
fn single_absentee_uses_singular_pronoun() {
    let a = lee();
    let msg = compose(&[&a], &[]);
    assert!(msg.contains("- 1A Lee"));
    assert!(msg.contains("him"));
    assert!(!msg.contains("those with leaves"));
    assert_snapshot!(msg, @r"
    Hi BMs, all boarders are in except:
    - 1A Lee
    I have asked him to scan at level 1, will update again later.
    Thank you!
    ");
}

#[test]
fn multiple_absentees_use_plural_pronoun() {
    let (a1, a2) = (lee(), ng());
    let msg = compose(&[&a1, &a2], &[]);
    assert!(msg.contains("- 1A Lee\n"));
    assert!(msg.contains("- 2C Ng\n"));
    assert!(msg.contains("them"));
    assert!(!msg.contains("him"));
}

#[test]
fn absentees_with_leave_use_message_string() {
    let (a1, a2, b) = (lee(), ng(), tan());
    let msg = compose(&[&a1, &a2], &[&b]);
    assert_snapshot!(msg, @r"
    Hi BMs, all boarders are in except:
    - 1A Lee
    - 2C Ng
    I have asked them to scan at level 1, will update again later.
    And those with leaves:
    - 3B Tan (home leave, back 6pm)
    Thank you!
    ");
    assert!(!msg.contains("(6pm)"));
}

#[test]
fn single_absentee_with_leave_keeps_section() {
    let (a, b) = (lee(), tan());
    let msg = compose(&[&a], &[&b]);
    assert!(msg.contains("him"));
    assert!(msg.ends_with("And those with leaves:\n- 3B Tan (home leave, back 6pm)\nThank you!"));
}

#[test]
fn input_order_is_preserved() {
    let (a1, a2) = (lee(), ng());
    let msg = compose(&[&a2, &a1], &[]);
    let ng_at = msg.find("- 2C Ng").unwrap();
    let lee_at = msg.find("- 1A Lee").unwrap();
    assert!(ng_at < lee_at);
}

#[test]
fn leave_section_keeps_input_order() {
    let (a1, a2) = (lee(), ng());
    let ong = Boarder::on_leave("Ong", "4D", Leave::new("", "Sun 8pm"));
    let b = tan();
    let msg = compose(&[&a1, &a2], &[&ong, &b]);
    assert!(msg.ends_with(
        "And those with leaves:\n\
         - 4D Ong (back Sun 8pm)\n\
         - 3B Tan (home leave, back 6pm)\n\
         Thank you!"
    ));
}

#[test]
fn compose_is_idempotent() {
    let (a1, a2, b) = (lee(), ng(), tan());
    assert_eq!(compose(&[&a1, &a2], &[&b]), compose(&[&a1, &a2], &[&b]));
}

#[test]
fn snapshot_classifies_roster_in_order() {
    let roster = vec![Boarder::new("Koh", "0Z"), ng(), tan(), lee()];
    let snapshot = Snapshot::from_boarders(&roster);
    let absent: Vec<&str> = snapshot.absent.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(absent, ["Ng", "Lee"]);
    assert_eq!(snapshot.on_leave.len(), 1);
    assert!(!snapshot.is_all_present());
    assert!(snapshot
        .compose()
        .starts_with("Hi BMs, all boarders are in except:\n- 2C Ng\n- 1A Lee\n"));
}

#[test]
fn large_roster_does_not_fail() {
    let roster: Vec<Boarder> = (0..500)
        .map(|i| Boarder::absent(format!("B{i}"), format!("{i}X")))
        .collect();
    let snapshot = Snapshot::from_boarders(&roster);
    let msg = snapshot.compose();
    assert_eq!(msg.lines().count(), 500 + 3);
}
