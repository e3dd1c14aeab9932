use crate::utils::error::DispenserError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CUPS: u32 = 10;
pub const DEFAULT_SUGAR: u32 = 20;
pub const DEFAULT_COFFEE: u32 = 50;

/// 杯子尺寸，每種尺寸消耗固定的咖啡單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CupSize {
    Small,
    Medium,
    Large,
}

impl CupSize {
    pub const ALL: [CupSize; 3] = [CupSize::Small, CupSize::Medium, CupSize::Large];

    pub fn coffee_cost(self) -> u32 {
        match self {
            CupSize::Small => 3,
            CupSize::Medium => 5,
            CupSize::Large => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CupSize::Small => "Small",
            CupSize::Medium => "Medium",
            CupSize::Large => "Large",
        }
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CupSize {
    type Err = DispenserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(CupSize::Small),
            "medium" | "m" => Ok(CupSize::Medium),
            "large" | "l" => Ok(CupSize::Large),
            other => Err(DispenserError::ValidationError {
                message: format!("Unknown cup size '{}', expected small, medium or large", other),
            }),
        }
    }
}

/// 剩餘庫存：杯子、糖、咖啡
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub cups: u32,
    pub sugar: u32,
    pub coffee: u32,
}

impl Default for Stock {
    fn default() -> Self {
        Self {
            cups: DEFAULT_CUPS,
            sugar: DEFAULT_SUGAR,
            coffee: DEFAULT_COFFEE,
        }
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cups: {}, sugar: {}, coffee: {}",
            self.cups, self.sugar, self.coffee
        )
    }
}

/// 一次出杯的結果。除了 `Served` 以外都不會動到庫存。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ServeOutcome {
    Served { size: CupSize, sugar_spoons: u32 },
    OutOfCups,
    OutOfCoffee,
    OutOfSugar,
    InvalidSugarAmount,
}

impl ServeOutcome {
    pub fn is_served(&self) -> bool {
        matches!(self, ServeOutcome::Served { .. })
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ServeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeOutcome::Served { size, sugar_spoons } => {
                write!(f, "Coffee {} served with {} sugar(s)", size, sugar_spoons)
            }
            ServeOutcome::OutOfCups => f.write_str("Error: No cups left"),
            ServeOutcome::OutOfCoffee => f.write_str("Error: Not enough coffee"),
            ServeOutcome::OutOfSugar => f.write_str("Error: Not enough sugar"),
            ServeOutcome::InvalidSugarAmount => f.write_str("Error: Invalid sugar amount"),
        }
    }
}
