//! Named mask patterns for common formatted inputs.

pub const PHONE_US: &str = "(###) ###-####";
pub const PHONE_US_WITH_EXT: &str = "(###) ###-#### ext. #####";
pub const PHONE_INTERNATIONAL: &str = "+## (###) ###-####";
pub const CREDIT_CARD: &str = "#### #### #### ####";
pub const CREDIT_CARD_AMEX: &str = "#### ###### #####";
pub const DATE_US: &str = "##/##/####";
pub const DATE_ISO: &str = "####-##-##";
pub const DATE_EU: &str = "##.##.####";
pub const TIME_12H: &str = "##:## AM";
pub const TIME_24H: &str = "##:##";
pub const DATETIME_US: &str = "##/##/#### ##:##";
pub const SSN: &str = "###-##-####";
pub const BRAZILIAN_CPF: &str = "###.###.###-##";
pub const ZIP_US: &str = "#####";
pub const ZIP_US_PLUS4: &str = "#####-####";
pub const IPV4: &str = "###.###.###.###";
pub const MAC_ADDRESS: &str = "##:##:##:##:##:##";
// The leading '#' is a digit slot, not a literal hash.
pub const HEX_COLOR: &str = "#******";

const PRESETS: &[(&str, &str)] = &[
    ("PHONE_US", PHONE_US),
    ("PHONE_US_WITH_EXT", PHONE_US_WITH_EXT),
    ("PHONE_INTERNATIONAL", PHONE_INTERNATIONAL),
    ("CREDIT_CARD", CREDIT_CARD),
    ("CREDIT_CARD_AMEX", CREDIT_CARD_AMEX),
    ("DATE_US", DATE_US),
    ("DATE_ISO", DATE_ISO),
    ("DATE_EU", DATE_EU),
    ("TIME_12H", TIME_12H),
    ("TIME_24H", TIME_24H),
    ("DATETIME_US", DATETIME_US),
    ("SSN", SSN),
    ("BRAZILIAN_CPF", BRAZILIAN_CPF),
    ("ZIP_US", ZIP_US),
    ("ZIP_US_PLUS4", ZIP_US_PLUS4),
    ("IPV4", IPV4),
    ("MAC_ADDRESS", MAC_ADDRESS),
    ("HEX_COLOR", HEX_COLOR),
];

pub fn all() -> &'static [(&'static str, &'static str)] {
    PRESETS
}

pub fn lookup(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, pattern)| *pattern)
}

/// A preset name resolves to its pattern; anything else is taken as a
/// pattern string.
pub fn resolve(name_or_pattern: &str) -> &str {
    lookup(name_or_pattern).unwrap_or(name_or_pattern)
}
