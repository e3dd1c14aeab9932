use crate::core::CupSize;
use crate::utils::error::DispenserError;
use std::fmt;
use std::str::FromStr;

/// 命令列上的一筆點單，格式 `SIZE[:SUGAR]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub size: CupSize,
    pub sugar_spoons: i32,
}

impl FromStr for Order {
    type Err = DispenserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (size, sugar) = match s.split_once(':') {
            Some((size, sugar)) => (size, Some(sugar)),
            None => (s, None),
        };

        let size = size.parse::<CupSize>()?;
        // 負數照樣接受，交給咖啡機判斷
        let sugar_spoons = match sugar {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|e| DispenserError::ValidationError {
                    message: format!("Invalid sugar amount '{}' in order '{}': {}", raw, s, e),
                })?,
            None => 0,
        };

        Ok(Self { size, sugar_spoons })
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.size.name().to_lowercase(), self.sugar_spoons)
    }
}
