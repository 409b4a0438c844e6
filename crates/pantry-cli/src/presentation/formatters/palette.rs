/// Category chip colors, assigned to categories in tab order and cycled
/// when there are more categories than entries.
pub const CATEGORY_PALETTE: [(u8, u8, u8); 25] = [
    (0xff, 0x5e, 0x62),
    (0xff, 0x99, 0x66),
    (0x28, 0xa7, 0x45),
    (0xff, 0xc1, 0x07),
    (0x17, 0xa2, 0xb8),
    (0x6f, 0x42, 0xc1),
    (0xe8, 0x3e, 0x8c),
    (0x20, 0xc9, 0x97),
    (0xfd, 0x7e, 0x14),
    (0x66, 0x10, 0xf2),
    (0x0d, 0xca, 0xf0),
    (0x6c, 0x75, 0x7d),
    (0x19, 0x87, 0x54),
    (0x0d, 0x6e, 0xfd),
    (0x6f, 0x42, 0xc1),
    (0xd6, 0x33, 0x84),
    (0xff, 0xc1, 0x07),
    (0x0d, 0xca, 0xf0),
    (0xff, 0x6b, 0x6b),
    (0x4e, 0xcd, 0xc4),
    (0x45, 0xb7, 0xd1),
    (0x96, 0xce, 0xb4),
    (0xfe, 0xca, 0x57),
    (0xff, 0x9f, 0xf3),
    (0x54, 0xa0, 0xff),
];

pub fn palette_color(slot: usize) -> (u8, u8, u8) {
    CATEGORY_PALETTE[slot % CATEGORY_PALETTE.len()]
}
