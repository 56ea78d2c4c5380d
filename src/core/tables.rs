//! Fixed pattern tables, indexed by digit value.

/// ITF narrow/wide patterns, `true` = wide.
pub const ITF_PATTERNS: [[bool; 5]; 10] = [
    [false, false, true, true, false], // 0 nnwwn
    [true, false, false, false, true], // 1 wnnnw
    [false, true, false, false, true], // 2 nwnnw
    [true, true, false, false, false], // 3 wwnnn
    [false, false, true, false, true], // 4 nnwnw
    [true, false, true, false, false], // 5 wnwnn
    [false, true, true, false, false], // 6 nwwnn
    [false, false, false, true, true], // 7 nnnww
    [true, false, false, true, false], // 8 wnnwn
    [false, true, false, true, false], // 9 nwnwn
];

pub const ITF_NARROW: u8 = 1;
pub const ITF_WIDE: u8 = 3;

/// bar, space, bar, space
pub const ITF_START: [u8; 4] = [1, 1, 1, 1];
/// bar, space, bar
pub const ITF_STOP: [u8; 3] = [3, 1, 1];

pub const EAN_SET_A: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011",
    "0110001", "0101111", "0111011", "0110111", "0001011",
];

pub const EAN_SET_B: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101",
    "0111001", "0000101", "0010001", "0001001", "0010111",
];

pub const EAN_SET_C: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100",
    "1001110", "1010000", "1000100", "1001000", "1110100",
];

/// EAN-13 left-half code set per leading digit.
pub const EAN13_PARITY: [&str; 10] = [
    "AAAAAA", "AABABB", "AABBAB", "AABBBA", "ABAABB",
    "ABBAAB", "ABBBAA", "ABABAB", "ABABBA", "ABBABA",
];

pub const EAN_START_GUARD: &str = "101";
pub const EAN_MIDDLE_GUARD: &str = "01010";
pub const EAN_END_GUARD: &str = "101";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itf_patterns_have_two_wide_elements() {
        for pattern in ITF_PATTERNS.iter() {
            assert_eq!(pattern.iter().filter(|w| **w).count(), 2);
        }
    }

    #[test]
    fn test_ean_sets_are_complementary() {
        for digit in 0..10 {
            // C 是 A 的反相，B 是 C 的反序
            let inverted: String = EAN_SET_A[digit]
                .chars()
                .map(|c| if c == '1' { '0' } else { '1' })
                .collect();
            assert_eq!(inverted, EAN_SET_C[digit]);
            let reversed: String = EAN_SET_C[digit].chars().rev().collect();
            assert_eq!(reversed, EAN_SET_B[digit]);
        }
    }
}
