//! Price/tax calculator: modal state, the flat tax table, and quotes.

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;

/// Jurisdiction preselected when the calculator opens.
pub const DEFAULT_JURISDICTION: &str = "CA";

/// Flat rate applied when a jurisdiction code is not in the table.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Jurisdiction codes offered by the form, in display order.
pub const JURISDICTIONS: [&str; 4] = ["CA", "NY", "TX", "FL"];

/// Flat sales-tax rate for a jurisdiction code. Unknown codes fall back to
/// [`DEFAULT_TAX_RATE`].
pub fn tax_rate(code: &str) -> f64 {
    match code {
        "CA" => 0.08,
        "NY" => 0.088,
        "TX" => 0.0625,
        "FL" => 0.06,
        _ => DEFAULT_TAX_RATE,
    }
}

/// Parse the quantity field. Parse failures fall back to 1; zero and
/// negative quantities pass through unchanged.
pub fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(1)
}

/// The product a calculator interaction was opened for. The unit price is
/// captured at open time and scoped to this interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct CalcSession {
    pub product: String,
    pub unit_price: f64,
}

/// Calculator modal state; `session` is `Some` exactly while the modal is
/// open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorState {
    pub session: Option<CalcSession>,
}

impl CalculatorState {
    /// Open the modal for a product; its price becomes the active unit price.
    pub fn open(&mut self, product: &str, unit_price: f64) {
        self.session = Some(CalcSession { product: product.to_owned(), unit_price });
    }

    /// Hide the modal without computing anything.
    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }
}

/// A computed price quote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub subtotal: f64,
    pub rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl Quote {
    /// Price out `quantity` units at `unit_price` under `jurisdiction`.
    pub fn compute(unit_price: f64, quantity: i64, jurisdiction: &str) -> Quote {
        let rate = tax_rate(jurisdiction);
        let subtotal = unit_price * quantity as f64;
        let tax = subtotal * rate;
        Quote { subtotal, rate, tax, total: subtotal + tax }
    }

    /// Summary line rendered into the modal's result area: two-decimal
    /// currency values and a two-decimal percentage.
    pub fn summary(&self) -> String {
        format!(
            "Subtotal: ${:.2} \u{2022} Tax ({:.2}%): ${:.2} \u{2022} Total: ${:.2}",
            self.subtotal,
            self.rate * 100.0,
            self.tax,
            self.total
        )
    }
}
