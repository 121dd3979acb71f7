use serde::{Deserialize, Serialize};

use stocklist_core::{Entity, RecordId, ValueObject};

/// Currency symbol used when rendering prices.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Stock quantity: a whole number, or not-a-number when the entered text had
/// no leading digits.
///
/// Not-a-number orders below every number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Option<i64>);

impl Default for Quantity {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Quantity {
    pub const NAN: Self = Self(None);

    pub const fn new(value: i64) -> Self {
        Self(Some(value))
    }

    pub fn value(self) -> Option<i64> {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_none()
    }

    /// Lenient integer coercion.
    ///
    /// Skips leading whitespace, reads an optional sign and the longest run of
    /// digits, ignores the rest (`"12abc"` is 12, `"3.9"` is 3). No digits
    /// yields [`Quantity::NAN`]. Out-of-range values saturate.
    pub fn parse_lenient(text: &str) -> Self {
        let s = text.trim_start();
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let digits = count_digits(unsigned.as_bytes());
        if digits == 0 {
            return Self::NAN;
        }

        let magnitude = unsigned.as_bytes()[..digits].iter().fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

        Self::new(if negative { -magnitude } else { magnitude })
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("NaN"),
        }
    }
}

impl ValueObject for Quantity {}

/// Unit price. Not-a-number is a legal value (see [`Price::parse_lenient`]).
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Lenient decimal coercion.
    ///
    /// Skips leading whitespace and reads the longest prefix that forms a
    /// decimal number (optional sign, digits, fraction, exponent) or
    /// `Infinity`; the rest is ignored. No numeric prefix yields NaN.
    pub fn parse_lenient(text: &str) -> Self {
        Self(parse_float_prefix(text))
    }

    /// Plain numeric text, as staged in the edit form (`999.99`, `200`, `NaN`).
    pub fn to_input_text(self) -> String {
        if self.0.is_infinite() {
            return infinity_text(self.0).to_string();
        }
        self.0.to_string()
    }

    /// Table rendering: currency symbol and two decimals.
    pub fn display(self) -> String {
        format!("{CURRENCY_SYMBOL}{self}")
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0.is_infinite() {
            return f.write_str(infinity_text(self.0));
        }
        f.write_str(&two_decimals(self.0))
    }
}

impl ValueObject for Price {}

fn infinity_text(value: f64) -> &'static str {
    if value.is_sign_negative() {
        "-Infinity"
    } else {
        "Infinity"
    }
}

/// Two-decimal text with exact halves rounded away from zero (`0.125` is
/// `0.13`). `{:.2}` alone rounds those halves to even.
fn two_decimals(value: f64) -> String {
    // Only multiples of 1/8 can sit exactly on a half cent: odd eighths.
    let eighths = value * 8.0;
    let half_cent = eighths.fract() == 0.0
        && eighths.abs() < (1u64 << 48) as f64
        && eighths % 2.0 != 0.0;

    if half_cent {
        let cents = (value.abs() * 100.0 + 0.5).floor().copysign(value);
        format!("{:.2}", cents / 100.0)
    } else {
        format!("{value:.2}")
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn parse_float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Record fields without the identifier: what the form produces and what
/// `add`/`update` consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub category: String,
    pub quantity: Quantity,
    pub price: Price,
    pub description: String,
}

impl RecordDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: Quantity::new(quantity),
            price: Price::new(price),
            description: description.into(),
        }
    }
}

impl ValueObject for RecordDraft {}

/// One inventory record. The id is fixed at construction; every other field
/// is replaced as a whole through [`crate::RecordStore::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    id: RecordId,
    #[serde(flatten)]
    draft: RecordDraft,
}

impl InventoryRecord {
    pub fn new(id: RecordId, draft: RecordDraft) -> Self {
        Self { id, draft }
    }

    /// The id by value; [`Entity::id`] hands out a reference.
    pub fn record_id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn category(&self) -> &str {
        &self.draft.category
    }

    pub fn quantity(&self) -> Quantity {
        self.draft.quantity
    }

    pub fn price(&self) -> Price {
        self.draft.price
    }

    pub fn description(&self) -> &str {
        &self.draft.description
    }

    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    pub(crate) fn replace(&mut self, draft: RecordDraft) {
        self.draft = draft;
    }
}

impl Entity for InventoryRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_parses_leading_integer() {
        assert_eq!(Quantity::parse_lenient("42"), Quantity::new(42));
        assert_eq!(Quantity::parse_lenient("  7 units"), Quantity::new(7));
        assert_eq!(Quantity::parse_lenient("3.9"), Quantity::new(3));
        assert_eq!(Quantity::parse_lenient("-4"), Quantity::new(-4));
        assert_eq!(Quantity::parse_lenient("+0012"), Quantity::new(12));
    }

    #[test]
    fn quantity_without_digits_is_nan() {
        assert!(Quantity::parse_lenient("").is_nan());
        assert!(Quantity::parse_lenient("abc").is_nan());
        assert!(Quantity::parse_lenient("-").is_nan());
        assert!(Quantity::parse_lenient(".5").is_nan());
    }

    #[test]
    fn quantity_saturates_on_overflow() {
        let q = Quantity::parse_lenient("99999999999999999999999");
        assert_eq!(q, Quantity::new(i64::MAX));
    }

    #[test]
    fn nan_quantity_orders_below_numbers() {
        assert!(Quantity::NAN < Quantity::new(i64::MIN));
        assert!(Quantity::new(5) < Quantity::new(15));
        assert_eq!(Quantity::NAN.to_string(), "NaN");
    }

    #[test]
    fn price_parses_decimal_prefix() {
        assert_eq!(Price::parse_lenient("249.99").value(), 249.99);
        assert_eq!(Price::parse_lenient(" 12.5kg").value(), 12.5);
        assert_eq!(Price::parse_lenient(".5").value(), 0.5);
        assert_eq!(Price::parse_lenient("5.").value(), 5.0);
        assert_eq!(Price::parse_lenient("1e3").value(), 1000.0);
        assert_eq!(Price::parse_lenient("2e").value(), 2.0);
        assert_eq!(Price::parse_lenient("-3.25").value(), -3.25);
        assert_eq!(Price::parse_lenient("Infinity").value(), f64::INFINITY);
    }

    #[test]
    fn price_without_digits_is_nan() {
        assert!(Price::parse_lenient("").is_nan());
        assert!(Price::parse_lenient("free").is_nan());
        assert!(Price::parse_lenient(".").is_nan());
        assert!(Price::parse_lenient("-e5").is_nan());
    }

    #[test]
    fn price_renders_two_decimals_with_symbol() {
        assert_eq!(Price::new(999.99).display(), "₹999.99");
        assert_eq!(Price::new(5.0).display(), "₹5.00");
        assert_eq!(Price::new(12.3456).to_string(), "12.35");
        assert_eq!(Price::new(f64::NAN).display(), "₹NaN");
    }

    #[test]
    fn record_id_matches_entity_id() {
        let id = RecordId::new();
        let record = InventoryRecord::new(id, RecordDraft::default());
        assert_eq!(record.record_id(), id);
        assert_eq!(record.id(), &id);
    }

    #[test]
    fn price_rounds_exact_halves_away_from_zero() {
        assert_eq!(Price::new(0.125).display(), "₹0.13");
        assert_eq!(Price::new(10.125).display(), "₹10.13");
        assert_eq!(Price::new(2.375).display(), "₹2.38");
        assert_eq!(Price::new(-0.125).to_string(), "-0.13");
        // Not an exact half in binary: 1.005 is stored just below it.
        assert_eq!(Price::new(1.005).display(), "₹1.00");
        assert_eq!(Price::new(0.25).display(), "₹0.25");
        assert_eq!(Price::new(f64::NAN).display(), "₹NaN");
    }

    #[test]
    fn price_input_text_is_plain_number() {
        assert_eq!(Price::new(999.99).to_input_text(), "999.99");
        assert_eq!(Price::new(200.0).to_input_text(), "200");
        assert_eq!(Price::new(f64::NAN).to_input_text(), "NaN");
    }

    #[test]
    fn record_serializes_flat() {
        let id = RecordId::new();
        let record = InventoryRecord::new(
            id,
            RecordDraft::new("Laptop", "Electronics", 5, 999.99, "fast"),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], serde_json::json!(id.to_string()));
        assert_eq!(json["name"], "Laptop");
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["price"], 999.99);
    }
}
