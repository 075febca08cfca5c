#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

use bazaar::application::BasketReplay;
use bazaar::infrastructure::{parse_script, FixedClock};
use bazaar::Basket;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Decoding and replaying arbitrary scripts should never panic
        if let Ok(actions) = parse_script(content, std::path::Path::new("script.json")) {
            let mut basket = Basket::with_clock(FixedClock::new(1_704_067_200_000));
            let _ = BasketReplay::new(Decimal::new(72, 3)).run(&mut basket, &actions);
        }
    }
});
