//! Shop location and outbound contact links.

use serde::Serialize;

/// Street address shown on the location page and used for map links.
pub const ADDRESS: &str = "Maipu 1270, Grand Bourg, Buenos Aires, Argentina";

/// Phone number as displayed.
pub const PHONE: &str = "+54 11 2519-2502";

/// General messaging deep link, without a prefilled message.
pub const WHATSAPP_URL: &str = "https://wa.me/541125192502";

/// Prefix of the per-product inquiry link. The product name is appended
/// percent-encoded.
const INQUIRY_PREFIX: &str = "https://wa.me/541125192502?text=Hola,%20me%20interesa%20el%20producto:%20";

/// Opening hours, one line per range of days.
pub const OPENING_HOURS: [&str; 3] = [
    "Lunes a Viernes: 8:00 - 18:00",
    "Sábados: 8:00 - 13:00",
    "Domingos: Cerrado",
];

/// Deep link that opens a chat prefilled with an inquiry about `product_name`.
///
/// ```
/// use herreria_core::contact::inquiry_url;
///
/// assert_eq!(
///     inquiry_url("Reja 2x1"),
///     "https://wa.me/541125192502?text=Hola,%20me%20interesa%20el%20producto:%20Reja%202x1"
/// );
/// ```
#[must_use]
pub fn inquiry_url(product_name: &str) -> String {
    format!("{INQUIRY_PREFIX}{}", urlencoding::encode(product_name))
}

/// Map search for the shop address.
#[must_use]
pub fn map_search_url() -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(ADDRESS)
    )
}

/// Driving directions to the shop address.
#[must_use]
pub fn directions_url() -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={}",
        urlencoding::encode(ADDRESS)
    )
}

/// Everything the location page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationInfo {
    pub address: &'static str,
    pub phone: &'static str,
    pub opening_hours: Vec<&'static str>,
    pub whatsapp_url: &'static str,
    pub map_url: String,
    pub directions_url: String,
}

impl LocationInfo {
    /// The shop's fixed contact details.
    #[must_use]
    pub fn shop() -> Self {
        Self {
            address: ADDRESS,
            phone: PHONE,
            opening_hours: OPENING_HOURS.to_vec(),
            whatsapp_url: WHATSAPP_URL,
            map_url: map_search_url(),
            directions_url: directions_url(),
        }
    }
}
