//! `Subset` narrowing a superset with payload-carrying variants.

use casecheck_macros::Subset;

enum Event {
    Click { x: i32, y: i32 },
    KeyPress(char),
    Quit,
}

#[derive(Subset, Debug, PartialEq)]
#[subset(Event)]
enum Shutdown {
    Quit,
}

fn main() {
    assert_eq!(
        Shutdown::from_superset(&Event::Quit),
        Some(Shutdown::Quit)
    );
    assert_eq!(Shutdown::from_superset(&Event::Click { x: 1, y: 2 }), None);
    assert_eq!(Shutdown::from_superset(&Event::KeyPress('q')), None);
}
