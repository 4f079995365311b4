//! 罗马数字转换

use std::num::NonZeroU32;

use crate::error::SheetError;

const TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// 把正整数转换成罗马数字，0 返回 `InvalidArgument`
pub fn to_roman(num: u32) -> Result<String, SheetError> {
    NonZeroU32::new(num)
        .map(encode)
        .ok_or_else(|| SheetError::InvalidArgument(format!("罗马数字只支持正整数，当前输入: {}", num)))
}

/// 贪心法逐位减去表中的值
pub fn encode(num: NonZeroU32) -> String {
    let mut rest = num.get();
    let mut out = String::new();
    for (value, symbol) in TABLE {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    out
}

/// I 到 `max` 的全部罗马数字
pub fn numerals(max: NonZeroU32) -> impl Iterator<Item = String> {
    (1..=max.get()).filter_map(NonZeroU32::new).map(encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_roman(s: &str) -> u32 {
        let value = |c| match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => panic!("非法字符 {}", c),
        };
        let digits: Vec<u32> = s.chars().map(value).collect();
        let mut total = 0;
        for (i, d) in digits.iter().enumerate() {
            match digits.get(i + 1) {
                Some(next) if next > d => total -= *d as i64,
                _ => total += *d as i64,
            }
        }
        total as u32
    }

    #[test]
    fn test_known_values() {
        let cases = [
            (1, "I"),
            (4, "IV"),
            (9, "IX"),
            (14, "XIV"),
            (40, "XL"),
            (90, "XC"),
            (400, "CD"),
            (900, "CM"),
            (1994, "MCMXCIV"),
            (2024, "MMXXIV"),
            (3999, "MMMCMXCIX"),
        ];
        for (num, expected) in cases {
            assert_eq!(to_roman(num).unwrap(), expected);
        }
    }

    #[test]
    fn test_round_trip_up_to_3999() {
        for num in 1..=3999 {
            let roman = to_roman(num).unwrap();
            assert_eq!(from_roman(&roman), num, "{} -> {}", num, roman);
        }
    }

    #[test]
    fn test_zero_is_invalid() {
        assert!(matches!(to_roman(0), Err(SheetError::InvalidArgument(_))));
    }

    #[test]
    fn test_numerals_up_to_five() {
        let max = NonZeroU32::new(5).unwrap();
        assert_eq!(numerals(max).collect::<Vec<_>>(), vec!["I", "II", "III", "IV", "V"]);
    }
}
