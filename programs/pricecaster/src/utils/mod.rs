pub mod consts;
pub mod math;

/// Lists the bit positions (where LSB == 0) of all the set bits (i.e. `1`s) in the given byte.
/// NOTE: This is a non-critical helper used only for logging flag updates.
pub fn list_set_bit_positions(mut bits: u8) -> Vec<u8> {
    let mut positions = Vec::with_capacity(bits.count_ones() as usize);
    while bits != 0 {
        // trailing_zeros of a non-zero u8 is at most 7
        positions.push(bits.trailing_zeros() as u8);
        bits &= bits.wrapping_sub(1);
    }
    positions
}
