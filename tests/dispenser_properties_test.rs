use coffee_dispenser::{CupSize, Dispenser, ServeOutcome, Stock};

fn assert_rejected_without_change(dispenser: &mut Dispenser, size: CupSize, sugar: i32, expected: ServeOutcome) {
    let before = dispenser.stock();
    assert_eq!(dispenser.serve(size, sugar), expected);
    assert_eq!(dispenser.stock(), before);
}

#[test]
fn test_successful_serve_decrements_each_counter_once() {
    for size in CupSize::ALL {
        for sugar in [0, 1, 5] {
            let mut dispenser = Dispenser::new();
            let outcome = dispenser.serve(size, sugar);

            assert_eq!(
                outcome.message(),
                format!("Coffee {} served with {} sugar(s)", size.name(), sugar)
            );
            assert_eq!(
                dispenser.stock(),
                Stock {
                    cups: 9,
                    sugar: 20 - sugar as u32,
                    coffee: 50 - size.coffee_cost(),
                }
            );
        }
    }
}

#[test]
fn test_cup_exhaustion() {
    let mut dispenser = Dispenser::new();
    for _ in 0..10 {
        assert!(dispenser.serve(CupSize::Small, 0).is_served());
    }
    assert_eq!(dispenser.cups_remaining(), 0);

    assert_rejected_without_change(&mut dispenser, CupSize::Small, 0, ServeOutcome::OutOfCups);
    assert_rejected_without_change(&mut dispenser, CupSize::Large, 99, ServeOutcome::OutOfCups);
    assert_rejected_without_change(&mut dispenser, CupSize::Medium, -1, ServeOutcome::OutOfCups);
}

#[test]
fn test_coffee_exhaustion() {
    let mut dispenser = Dispenser::new();
    for _ in 0..7 {
        assert!(dispenser.serve(CupSize::Large, 0).is_served());
    }
    assert_eq!(dispenser.coffee_stock(), 1);

    assert_rejected_without_change(&mut dispenser, CupSize::Large, 0, ServeOutcome::OutOfCoffee);
    assert_rejected_without_change(&mut dispenser, CupSize::Small, 0, ServeOutcome::OutOfCoffee);
}

#[test]
fn test_sugar_exhaustion() {
    // 每杯只扣 3 單位咖啡，確保先用完的是糖
    let mut dispenser = Dispenser::new();
    for _ in 0..10 {
        assert!(dispenser.serve(CupSize::Small, 2).is_served());
    }
    assert_eq!(dispenser.sugar_stock(), 0);

    let mut dispenser = Dispenser::with_stock(Stock {
        cups: 20,
        ..Stock::default()
    });
    for _ in 0..10 {
        assert!(dispenser.serve(CupSize::Small, 2).is_served());
    }
    for sugar in [1, 2, 10] {
        assert_rejected_without_change(&mut dispenser, CupSize::Small, sugar, ServeOutcome::OutOfSugar);
    }
    assert!(dispenser.serve(CupSize::Small, 0).is_served());
}

#[test]
fn test_negative_sugar_is_invalid() {
    let mut dispenser = Dispenser::new();
    assert_rejected_without_change(
        &mut dispenser,
        CupSize::Medium,
        -1,
        ServeOutcome::InvalidSugarAmount,
    );
    assert_eq!(
        ServeOutcome::InvalidSugarAmount.message(),
        "Error: Invalid sugar amount"
    );
}

#[test]
fn test_check_order_is_cups_coffee_sugar_then_sign() {
    let empty = Stock {
        cups: 0,
        sugar: 0,
        coffee: 0,
    };
    let mut dispenser = Dispenser::with_stock(empty);
    assert_eq!(dispenser.serve(CupSize::Large, -3), ServeOutcome::OutOfCups);

    let mut dispenser = Dispenser::with_stock(Stock { cups: 1, ..empty });
    assert_eq!(dispenser.serve(CupSize::Small, -3), ServeOutcome::OutOfCoffee);

    let mut dispenser = Dispenser::with_stock(Stock {
        cups: 1,
        coffee: 3,
        sugar: 0,
    });
    assert_eq!(dispenser.serve(CupSize::Small, 1), ServeOutcome::OutOfSugar);
    assert_eq!(dispenser.serve(CupSize::Small, -3), ServeOutcome::InvalidSugarAmount);
}
