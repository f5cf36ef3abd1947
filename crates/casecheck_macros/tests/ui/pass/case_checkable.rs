//! `CaseCheckable` on an enum mixing struct, tuple and unit variants.

use casecheck_macros::CaseCheckable;

#[derive(CaseCheckable)]
enum Payment {
    Card { number: String },
    Voucher(u32),
    Cash,
}

fn main() {
    let card = Payment::Card {
        number: "4111".to_owned(),
    };
    assert!(card.is_card());
    assert!(!card.is_voucher());
    assert!(!card.is_cash());
    assert_eq!(card.number().map(String::as_str), Some("4111"));

    let voucher = Payment::Voucher(7);
    assert!(voucher.is_voucher());
    assert_eq!(voucher.number(), None);

    let cash = Payment::Cash;
    assert!(cash.is_cash());
    assert_eq!(cash.number(), None);
}
