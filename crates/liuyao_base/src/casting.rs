//! Deterministic conversions from resolved casting data into line codes.
//!
//! The randomness (coin tosses, chosen numbers, the moment of asking) is
//! supplied by the caller. Every method yields six codes, bottom line first.

use tracing::debug;

use crate::error::GuaError;
use crate::line::{ALL_LINE_CODES, LINE_COUNT, LineCode};

/// Line code for one three-coin toss, by number of heads (0..=3).
///
/// 0 heads → old yang, 1 → young yin, 2 → young yang, 3 → old yin.
pub fn line_from_heads(heads: u8) -> Result<LineCode, GuaError> {
    if heads > 3 {
        return Err(GuaError::invalid(format!(
            "a three-coin toss has 0-3 heads, got {heads}"
        )));
    }
    LineCode::from_code(heads)
}

/// Line code for one toss given each coin's face (true = heads).
pub fn line_from_coins(coins: [bool; 3]) -> LineCode {
    let heads = coins.iter().filter(|&&c| c).count() as u8;
    ALL_LINE_CODES[heads as usize]
}

/// Six tosses in casting order. The first toss builds the bottom line.
pub fn lines_from_coin_tosses(heads: &[u8]) -> Result<[LineCode; LINE_COUNT], GuaError> {
    if heads.len() != LINE_COUNT {
        return Err(GuaError::invalid(format!(
            "expected {LINE_COUNT} coin tosses, got {}",
            heads.len()
        )));
    }
    let mut out = [LineCode::YoungYang; LINE_COUNT];
    for (slot, &h) in out.iter_mut().zip(heads) {
        *slot = line_from_heads(h)?;
    }
    Ok(out)
}

/// Number casting: three numbers 1..=9, line i (0-based) = (a + b + c + i) mod 4.
pub fn lines_from_numbers(a: u8, b: u8, c: u8) -> Result<[LineCode; LINE_COUNT], GuaError> {
    for n in [a, b, c] {
        if !(1..=9).contains(&n) {
            return Err(GuaError::invalid(format!(
                "casting numbers must be 1-9, got {n}"
            )));
        }
    }
    let sum = u32::from(a) + u32::from(b) + u32::from(c);
    debug!(a, b, c, sum, "number casting");
    Ok(cycle_from(sum))
}

/// Civil date and hour used for time casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastingMoment {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// 1..=31
    pub day: u32,
    /// 0..=23
    pub hour: u32,
}

/// Time casting: (year mod 100 + month + day + hour + i) mod 4 for line i.
pub fn lines_from_time(moment: CastingMoment) -> Result<[LineCode; LINE_COUNT], GuaError> {
    let CastingMoment {
        year,
        month,
        day,
        hour,
    } = moment;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || hour > 23 {
        return Err(GuaError::invalid(format!(
            "casting moment out of range: {year}-{month}-{day} {hour}h"
        )));
    }
    let sum = year.rem_euclid(100) as u32 + month + day + hour;
    debug!(year, month, day, hour, sum, "time casting");
    Ok(cycle_from(sum))
}

fn cycle_from(sum: u32) -> [LineCode; LINE_COUNT] {
    std::array::from_fn(|i| ALL_LINE_CODES[((sum + i as u32) % 4) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use LineCode::*;

    #[test]
    fn heads_map_to_codes() {
        assert_eq!(line_from_heads(0).unwrap(), OldYang);
        assert_eq!(line_from_heads(1).unwrap(), YoungYin);
        assert_eq!(line_from_heads(2).unwrap(), YoungYang);
        assert_eq!(line_from_heads(3).unwrap(), OldYin);
        assert!(line_from_heads(4).unwrap_err().is_invalid_input());
    }

    #[test]
    fn coin_faces() {
        assert_eq!(line_from_coins([false, false, false]), OldYang);
        assert_eq!(line_from_coins([true, false, true]), YoungYang);
        assert_eq!(line_from_coins([true, true, true]), OldYin);
    }

    #[test]
    fn first_toss_is_bottom_line() {
        let lines = lines_from_coin_tosses(&[0, 1, 2, 2, 1, 3]).unwrap();
        assert_eq!(lines, [OldYang, YoungYin, YoungYang, YoungYang, YoungYin, OldYin]);
        assert!(lines_from_coin_tosses(&[1, 2]).is_err());
        assert!(lines_from_coin_tosses(&[1, 2, 2, 1, 2, 9]).is_err());
    }

    #[test]
    fn numbers_cycle_through_codes() {
        // 3 + 4 + 5 = 12 → 0,1,2,3,0,1
        let lines = lines_from_numbers(3, 4, 5).unwrap();
        assert_eq!(lines, [OldYang, YoungYin, YoungYang, OldYin, OldYang, YoungYin]);
        assert!(lines_from_numbers(0, 4, 5).is_err());
        assert!(lines_from_numbers(3, 10, 5).is_err());
    }

    #[test]
    fn time_casting() {
        // 25 + 11 + 29 + 14 = 79 → 3,0,1,2,3,0
        let m = CastingMoment {
            year: 2025,
            month: 11,
            day: 29,
            hour: 14,
        };
        let lines = lines_from_time(m).unwrap();
        assert_eq!(lines, [OldYin, OldYang, YoungYin, YoungYang, OldYin, OldYang]);
        assert!(lines_from_time(CastingMoment { hour: 24, ..m }).is_err());
        assert!(lines_from_time(CastingMoment { month: 0, ..m }).is_err());
    }
}
