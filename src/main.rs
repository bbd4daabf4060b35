// src/main.rs
//
// Calculatrice à précédence — points d’entrée
// -------------------------------------------
// - NATIF : fenêtre eframe, logs via env_logger (RUST_LOG=debug : jetons, sous-expressions, réductions)
// - WEB   : WebRunner sur <canvas id="the_canvas_id"> ; pas de backend de logs (la façade reste muette)
//
// Dans les deux cas la session démarre sur un AppCalc neuf (creer_app).

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (fenêtre native + onglet web).
const TITRE_APP: &str = "Calculatrice à précédence";

/// Session neuve, commune aux deux cibles.
fn creer_app(_cc: &eframe::CreationContext<'_>) -> Box<dyn eframe::App> {
    log::info!("nouvelle session");
    Box::<AppCalc>::default()
}

/* ------------------------ NATIF ------------------------ */

/// Fenêtre : assez haute pour entrée + pavé + démarche sans défilement.
#[cfg(not(target_arch = "wasm32"))]
fn options_natives() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 700.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Par défaut : avertissements seulement (erreurs d’évaluation).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    eframe::run_native(
        TITRE_APP,
        options_natives(),
        Box::new(|cc| Ok(creer_app(cc))),
    )
}

/* ------------------------ WEB ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // démarrage réel : web::start() (wasm_bindgen start)
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{creer_app, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{window, HtmlCanvasElement};

    const CANVAS_ID: &str = "the_canvas_id";

    /// Titre d’onglet + canvas, puis la même session qu’en natif.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let canvas = canvas_calculatrice()?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(creer_app(cc))),
            )
            .await
    }

    /// Récupère le canvas de la page (et renomme l’onglet au passage).
    fn canvas_calculatrice() -> Result<HtmlCanvasElement, JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document indisponible"))?;

        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas de la calculatrice introuvable"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("l’élément trouvé n’est pas un <canvas>"))
    }
}
