/// Host and path prefix Steam serves community app icons from.
pub const STEAM_MEDIA_BASE: &str = "https://media.steampowered.com/steamcommunity/public/images/apps";

/// Builds the image address for an app icon.
///
/// Only formats the string: the token is not checked, so an empty token still
/// yields an address (which will not resolve). Callers that treat the icon as
/// optional must check the token first.
pub fn game_icon_url(app_id: u64, icon_token: &str) -> String {
    format!("{}/{}/{}.jpg", STEAM_MEDIA_BASE, app_id, icon_token)
}
