use super::model::Product;

/// Ceiling applied to prices when they are displayed or aggregated on the
/// dashboard. It is not a validation rule: stored and submitted prices are
/// never capped.
pub const DISPLAY_PRICE_CEILING: f64 = 999_999.0;

/// Summary cards shown above the product table. Computed from the page that
/// is currently loaded, not from the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub product_count: usize,
    pub stock_value: f64,
    pub out_of_stock: usize,
    pub average_price: f64,
}

impl DashboardMetrics {
    pub fn from_products(products: &[Product]) -> Self {
        let stock_value = products
            .iter()
            .map(|p| display_price(p.price) * f64::from(p.stock))
            .sum();

        let total_price: f64 = products.iter().map(|p| display_price(p.price)).sum();
        let average_price = if products.is_empty() {
            0.0
        } else {
            total_price / products.len() as f64
        };

        Self {
            product_count: products.len(),
            stock_value,
            out_of_stock: products.iter().filter(|p| p.stock == 0).count(),
            average_price,
        }
    }
}

/// Above this many units a product counts as comfortably in stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Badge shown next to each product in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn of(stock: u32) -> Self {
        match stock {
            0 => StockStatus::OutOfStock,
            n if n > LOW_STOCK_THRESHOLD => StockStatus::InStock,
            _ => StockStatus::LowStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn display_price(price: f64) -> f64 {
    price.min(DISPLAY_PRICE_CEILING)
}

/// Formats an amount with two decimals and thousands separators,
/// e.g. `1234567.891` becomes `1,234,567.89`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, fraction)
}
