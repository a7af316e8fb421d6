//! Weighted-average-cost position tracking.

/// Holding for a single ticker during one ledger replay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub quantity: f64,
    pub avg_cost: f64,
}

impl Position {
    /// (old_qty * old_avg + qty * price) / (old_qty + qty), or 0 when flat.
    pub fn buy(&mut self, price: f64, quantity: f64) {
        let total_cost = self.quantity * self.avg_cost + quantity * price;
        let new_quantity = self.quantity + quantity;
        self.avg_cost = if new_quantity > 0.0 {
            total_cost / new_quantity
        } else {
            0.0
        };
        self.quantity = new_quantity;
    }

    /// Closes up to `quantity` units at `price` and returns the realized P/L,
    /// or `None` when nothing is held. The average cost is left untouched.
    pub fn sell(&mut self, price: f64, quantity: f64) -> Option<f64> {
        if self.quantity <= 0.0 {
            return None;
        }
        let qty_to_sell = quantity.min(self.quantity);
        let pnl = (price - self.avg_cost) * qty_to_sell;
        self.quantity -= qty_to_sell;
        Some(pnl)
    }

    pub fn is_flat(&self) -> bool {
        self.quantity <= 0.0
    }
}
