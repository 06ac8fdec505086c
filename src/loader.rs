use crate::constants::{
    DEFAULT_MODEL_URLS, LOAD_MAX_ATTEMPTS, LOAD_RETRY_BACKOFF_MS, LOAD_TIMEOUT_MS,
    MODEL_TARGET_SIZE,
};
use crate::dom;
use crate::mesh::{parse_stl, MeshData};
use crate::util;
use anyhow::{anyhow, Context};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const MODEL_URL_ATTRS: [&str; 2] = ["data-model-a", "data-model-b"];

/// Model URLs for the scene. `data-model-a` / `data-model-b` on the canvas
/// override the defaults.
pub fn model_urls(canvas: &web::HtmlCanvasElement) -> [String; 2] {
    let pick = |i: usize| {
        canvas
            .get_attribute(MODEL_URL_ATTRS[i])
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_URLS[i].to_string())
    };
    [pick(0), pick(1)]
}

/// Fetch `url` as bytes. Headers and body share one deadline; when it passes
/// the request is aborted.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let abort = web::AbortController::new().map_err(js_err)?;
    let read = read_body(url, abort.signal());
    match util::within(read, dom::sleep_ms(LOAD_TIMEOUT_MS)).await {
        Some(result) => result,
        None => {
            abort.abort();
            Err(anyhow!("timed out after {} ms", LOAD_TIMEOUT_MS))
        }
    }
}

async fn read_body(url: &str, signal: web::AbortSignal) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let init = web::RequestInit::new();
    init.set_signal(Some(&signal));
    let resp_value = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        return Err(anyhow!("HTTP {} for {}", resp.status(), url));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch, decode and normalise one model, retrying with a growing pause.
pub async fn load_mesh(url: &str) -> anyhow::Result<MeshData> {
    let mut attempt = 1;
    loop {
        match fetch_mesh(url).await {
            Ok(mesh) => {
                log::info!(
                    "[loader] {} ready: {} triangles",
                    url,
                    mesh.triangle_count()
                );
                return Ok(mesh);
            }
            Err(e) if attempt < LOAD_MAX_ATTEMPTS => {
                log::warn!("[loader] {} attempt {} failed: {:#}", url, attempt, e);
                dom::sleep_ms(LOAD_RETRY_BACKOFF_MS * attempt as i32).await;
                attempt += 1;
            }
            Err(e) => {
                return Err(e.context(format!("{url} failed after {attempt} attempts")));
            }
        }
    }
}

async fn fetch_mesh(url: &str) -> anyhow::Result<MeshData> {
    let bytes = fetch_bytes(url).await?;
    let mut mesh = parse_stl(&bytes).with_context(|| format!("decoding {url}"))?;
    mesh.normalize(MODEL_TARGET_SIZE);
    Ok(mesh)
}

/// Load both models concurrently. Resolves once both are ready; the first
/// failure fails the whole load.
pub async fn load_models(urls: &[String; 2]) -> anyhow::Result<[MeshData; 2]> {
    let (a, b) = futures::future::try_join(load_mesh(&urls[0]), load_mesh(&urls[1])).await?;
    Ok([a, b])
}

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}
