//! One-shot image loading that gates the first frame

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

pub const BACKGROUND_SRC: &str = "assets/bg3.png";
pub const PLAYER_SRC: &str = "assets/player.png";
pub const SHADOW_SRC: &str = "assets/shadow.png";

/// Loaded images; a missing one means "draw the fallback shape"
#[derive(Default)]
pub struct Assets {
    pub background: Option<HtmlImageElement>,
    pub player: Option<HtmlImageElement>,
    pub shadow: Option<HtmlImageElement>,
}

impl Assets {
    /// Start every download at once, then wait for each to settle
    pub async fn load() -> Self {
        let background = start_image(BACKGROUND_SRC);
        let player = start_image(PLAYER_SRC);
        let shadow = start_image(SHADOW_SRC);

        Self {
            background: finish_image(background, BACKGROUND_SRC).await,
            player: finish_image(player, PLAYER_SRC).await,
            shadow: finish_image(shadow, SHADOW_SRC).await,
        }
    }
}

type Pending = Option<(HtmlImageElement, js_sys::Promise)>;

fn start_image(src: &str) -> Pending {
    let img = HtmlImageElement::new().ok()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);
    Some((img, promise))
}

async fn finish_image(pending: Pending, src: &str) -> Option<HtmlImageElement> {
    let (img, promise) = pending?;
    let result = JsFuture::from(promise).await;
    img.set_onload(None);
    img.set_onerror(None);
    match result {
        Ok(_) => Some(img),
        Err(_) => {
            crate::console_log!("Failed to load {}, using fallback shape", src);
            None
        }
    }
}
