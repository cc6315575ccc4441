//! One-time readiness gate run before the sketch starts.
//!
//! Layout rectangles are only right once web fonts have loaded and every
//! image has decoded, so the sketch is not constructed until both settle.
//! A rejected promise aborts startup before anything is bound.

use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fonts_ready(document: &web::Document) -> anyhow::Result<()> {
    let ready = document
        .fonts()
        .ready()
        .map_err(|e| anyhow::anyhow!("fonts.ready unavailable: {:?}", e))?;
    JsFuture::from(ready)
        .await
        .map_err(|e| anyhow::anyhow!("font loading failed: {:?}", e))?;
    Ok(())
}

pub async fn images_decoded(images: &[web::HtmlImageElement]) -> anyhow::Result<()> {
    let decodes: Vec<_> = images
        .iter()
        .map(|img| (img.src(), JsFuture::from(img.decode())))
        .collect();
    for (src, decode) in decodes {
        decode
            .await
            .map_err(|e| anyhow::anyhow!("image {src} failed to decode: {:?}", e))?;
    }
    Ok(())
}

/// Wait for fonts and images; returns the images once all are ready.
pub async fn await_ready(
    document: &web::Document,
    images: Vec<web::HtmlImageElement>,
) -> anyhow::Result<Vec<web::HtmlImageElement>> {
    fonts_ready(document).await?;
    images_decoded(&images).await?;
    log::info!("[startup] fonts and {} images ready", images.len());
    Ok(images)
}
