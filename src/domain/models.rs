use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(thiserror::Error, Debug)]
#[error("invalid hex color '{0}': expected #RRGGBB")]
pub struct ColorParseError(pub String);

/// An RGB color carried on the wire as an uppercase `#RRGGBB` string.
///
/// Parsing accepts an optional `#` prefix, either letter case, and
/// surrounding whitespace; formatting always normalizes to `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let raw = input.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(input.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(input.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(D::Error::custom)
    }
}

/// The in-progress jersey configuration for one session.
///
/// Mutators replace fields unconditionally. Quantity is coerced from free
/// text and may legitimately hold 0 mid-session; [`Self::order_quantity`]
/// clamps it before any checkout submission.
#[derive(Debug, Clone, Serialize)]
pub struct DesignState {
    pub front: HexColor,
    pub back: HexColor,
    pub accent: HexColor,
    pub quantity: u32,
}

impl Default for DesignState {
    fn default() -> Self {
        Self {
            front: HexColor::new(0x0A, 0x66, 0xC2),
            back: HexColor::new(0x0A, 0x66, 0xC2),
            accent: HexColor::new(0xFF, 0x6F, 0x00),
            quantity: 12,
        }
    }
}

impl DesignState {
    pub fn set_front(&mut self, color: HexColor) {
        self.front = color;
    }

    pub fn set_back(&mut self, color: HexColor) {
        self.back = color;
    }

    pub fn set_accent(&mut self, color: HexColor) {
        self.accent = color;
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Coerces free-text quantity input. Unparseable input yields 0; callers
    /// submitting an order must go through [`Self::order_quantity`].
    pub fn set_quantity_input(&mut self, input: &str) {
        self.quantity = input.trim().parse().unwrap_or(0);
    }

    /// The quantity an order is allowed to carry: never below 1.
    pub fn order_quantity(&self) -> u32 {
        self.quantity.max(1)
    }
}

/// Buyer identity and shipping fields, sourced from explicit input.
#[derive(Debug, Clone, Serialize)]
pub struct BuyerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub shipping_address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewPanel {
    pub label: String,
    pub fill: HexColor,
    pub accent_wash: HexColor,
}

#[derive(Debug, Clone, Serialize)]
pub struct JerseyPreview {
    pub front: PreviewPanel,
    pub back: PreviewPanel,
}

#[derive(Debug, Serialize)]
pub struct RosterCheckReport {
    pub file: String,
    pub data_rows: usize,
    pub bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_accepts_common_forms() {
        assert_eq!(HexColor::from_hex("#FF0000").unwrap(), HexColor::new(255, 0, 0));
        assert_eq!(HexColor::from_hex("00ff00").unwrap(), HexColor::new(0, 255, 0));
        assert_eq!(
            HexColor::from_hex("  #0A66C2  ").unwrap(),
            HexColor::new(0x0A, 0x66, 0xC2)
        );
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        for bad in ["", "#", "#FFF", "#FFFFFFF", "GGGGGG", "#12345Z"] {
            assert!(HexColor::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn hex_round_trips() {
        let original = HexColor::new(123, 45, 67);
        assert_eq!(HexColor::from_hex(&original.to_hex()).unwrap(), original);
    }

    #[test]
    fn serializes_as_uppercase_hex_string() {
        let value = serde_json::to_value(HexColor::new(0x0A, 0x66, 0xC2)).unwrap();
        assert_eq!(value, serde_json::json!("#0A66C2"));

        let parsed: HexColor = serde_json::from_value(serde_json::json!("#ff6f00")).unwrap();
        assert_eq!(parsed, HexColor::new(0xFF, 0x6F, 0x00));
    }

    #[test]
    fn deserialize_rejects_invalid_color() {
        assert!(serde_json::from_value::<HexColor>(serde_json::json!("teal")).is_err());
    }

    #[test]
    fn design_defaults_match_demo_jersey() {
        let design = DesignState::default();
        assert_eq!(design.front.to_hex(), "#0A66C2");
        assert_eq!(design.back.to_hex(), "#0A66C2");
        assert_eq!(design.accent.to_hex(), "#FF6F00");
        assert_eq!(design.quantity, 12);
    }

    #[test]
    fn mutators_replace_fields() {
        let mut design = DesignState::default();
        design.set_front(HexColor::new(1, 2, 3));
        design.set_accent(HexColor::new(4, 5, 6));
        design.set_quantity(30);
        assert_eq!(design.front, HexColor::new(1, 2, 3));
        assert_eq!(design.accent, HexColor::new(4, 5, 6));
        assert_eq!(design.quantity, 30);
    }

    #[test]
    fn quantity_input_coerces_free_text() {
        let mut design = DesignState::default();
        design.set_quantity_input("12");
        assert_eq!(design.quantity, 12);
        design.set_quantity_input(" 7 ");
        assert_eq!(design.quantity, 7);
        design.set_quantity_input("");
        assert_eq!(design.quantity, 0);
        design.set_quantity_input("a dozen");
        assert_eq!(design.quantity, 0);
        design.set_quantity_input("-3");
        assert_eq!(design.quantity, 0);
    }

    #[test]
    fn order_quantity_never_drops_below_one() {
        let mut design = DesignState::default();
        design.set_quantity_input("nonsense");
        assert_eq!(design.quantity, 0);
        assert_eq!(design.order_quantity(), 1);
        design.set_quantity(25);
        assert_eq!(design.order_quantity(), 25);
    }
}
