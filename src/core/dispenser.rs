use crate::core::{CupSize, ServeOutcome, Stock};

/// 咖啡機本體：持有庫存，出杯前依序檢查，全部通過才扣庫存
#[derive(Debug, Clone, Default)]
pub struct Dispenser {
    stock: Stock,
}

impl Dispenser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(stock: Stock) -> Self {
        Self { stock }
    }

    /// 檢查順序固定：杯子、咖啡、糖量、糖量是否為負。
    /// 負數糖量一定會通過糖量檢查，所以由最後一關擋下。
    pub fn serve(&mut self, size: CupSize, sugar_spoons: i32) -> ServeOutcome {
        let cost = size.coffee_cost();

        if self.stock.cups == 0 {
            return ServeOutcome::OutOfCups;
        }

        if self.stock.coffee < cost {
            return ServeOutcome::OutOfCoffee;
        }

        if i64::from(self.stock.sugar) < i64::from(sugar_spoons) {
            return ServeOutcome::OutOfSugar;
        }

        let Ok(sugar) = u32::try_from(sugar_spoons) else {
            return ServeOutcome::InvalidSugarAmount;
        };

        self.stock.cups -= 1;
        self.stock.coffee -= cost;
        self.stock.sugar -= sugar;

        ServeOutcome::Served {
            size,
            sugar_spoons: sugar,
        }
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn cups_remaining(&self) -> u32 {
        self.stock.cups
    }

    pub fn sugar_stock(&self) -> u32 {
        self.stock.sugar
    }

    pub fn coffee_stock(&self) -> u32 {
        self.stock.coffee
    }
}
