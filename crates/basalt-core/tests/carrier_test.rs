//! Carrier Integration Tests
//!
//! Drives the taxonomy, the outcome container, and the status carrier
//! together the way consuming crates do: produce, branch, extract or render.

use basalt_core::{BasaltError, BasaltResult, Domain, Kind, Outcome, Status};

fn parse_flag(text: &str) -> Outcome<bool> {
    match text {
        "on" => Outcome::Ok(true),
        "off" => Outcome::Ok(false),
        _ => Outcome::Err(BasaltError::BadCast),
    }
}

#[test]
fn produce_branch_extract() {
    let flag = parse_flag("on");
    assert!(flag.is_ok());
    assert!(flag.into_value());

    let flag = parse_flag("sideways");
    assert!(flag.is_err());
    assert_eq!(flag.code(), BasaltError::BadCast);
    assert_eq!(flag.message(), "[sdata][cast] Bad value cast");
}

#[test]
fn category_level_branching() {
    // recovery logic keyed on category rather than exact code
    let code = parse_flag("?").code();
    assert!(code.is_of_domain(Domain::Sdata));
    assert!(code.is_of_kind(Kind::Cast));
    assert!(!code.is_of(Domain::Fsys, Kind::Access));
}

#[test]
fn status_hand_off() {
    fn run(succeed: bool) -> Status {
        if succeed {
            Status::ok()
        } else {
            Status::err(BasaltError::Unimplemented)
        }
    }

    assert!(run(true).is_ok());

    let status = run(false);
    assert!(status.is_err());
    assert_eq!(status.message(), "Unimplemented");
}

#[test]
fn question_mark_bridge() -> BasaltResult<()> {
    let inverted = parse_flag("off").into_result().map(|flag| !flag)?;
    assert!(inverted);
    Ok(())
}

#[test]
fn rendered_diagnostics_reach_the_user_unchanged() {
    // what a top-level caller would print for each category shape
    let bare: Outcome<()> = Outcome::Err(BasaltError::Failure);
    assert_eq!(bare.message(), "Failure");

    let tagged: Outcome<()> = Outcome::Err(BasaltError::NoSuchParentDirectory);
    assert_eq!(tagged.message(), "[fsys][access] No such parent directory");
}
