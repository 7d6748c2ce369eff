#![allow(dead_code)]

// Blocks taken from real accumulator updates (published 2023-10-24),
// both are proven against the same root.
pub const PRICE_UPDATE_1: &str = include_str!("../fixtures/price_update_1.hex");
pub const PRICE_UPDATES_8: &str = include_str!("../fixtures/price_updates_8.hex");
pub const ROOT_DIGEST: &str = "395b432f2ca397535577362552b290a98c25eb9f";

/// Feed of the first update of both blocks
pub const FIRST_FEED_ID: &str = "08f781a893bc9340140c5f89c8a96f438bcfae4d1474cc0f688e3a52892c7318";

pub struct ExpectedUpdate {
    pub price: i64,
    pub confidence: u64,
    pub exponent: i32,
    pub publish_time: u64,
    pub prev_publish_time: u64,
    pub ema_price: u64,
    pub ema_confidence: u64,
}

pub const PRICE_UPDATES_8_CONTENT: [ExpectedUpdate; 8] = [
    expected(9897745, 3624, -8, 1698164544, 1698164542, 9909526, 5247),
    expected(3389097999999, 1028000000, -8, 1698164546, 1698164544, 3394234400000, 1079686900),
    expected(178569500000, 44500000, -8, 1698164546, 1698164544, 179577606000, 59223633),
    expected(100001999, 32099, -8, 1698164546, 1698164545, 100001055, 26676),
    expected(100006050, 25049, -8, 1698164546, 1698164541, 100002942, 24828),
    expected(55953495, 19734, -8, 1698164548, 1698164546, 56282426, 22292),
    expected(2578000, 50260, -5, 1698164550, 1698164548, 2588666, 4105),
    expected(957000, 27203, -5, 1698164548, 1698164546, 966657, 1280),
];

const fn expected(
    price: i64,
    confidence: u64,
    exponent: i32,
    publish_time: u64,
    prev_publish_time: u64,
    ema_price: u64,
    ema_confidence: u64,
) -> ExpectedUpdate {
    ExpectedUpdate {
        price,
        confidence,
        exponent,
        publish_time,
        prev_publish_time,
        ema_price,
        ema_confidence,
    }
}

pub fn block(fixture: &str) -> Vec<u8> {
    hex::decode(fixture.trim()).unwrap()
}

pub fn merkle_root() -> [u8; 32] {
    let mut root = [0_u8; 32];
    root[..20].copy_from_slice(&hex::decode(ROOT_DIGEST).unwrap());
    root
}
