//! Drives a map widget from a GeoJSON document: sources, styled layers, popups and the initial
//! camera.
//!
//! The widget itself lives behind [`MapHost`]; everything here is bookkeeping on top of the
//! geometry functions in the crate root.

mod options;
pub mod style;

pub use options::LoaderOptions;
pub use style::LayerSpec;

use crate::{anchor_for, compute_bounds, flatten, popup_html};
use crate::{Bounds, Feature, FeatureCollection, Geometry, LngLat};

/// The map widget, as seen by [`MapLoader`].
pub trait MapHost {
    fn add_source(&mut self, id: &str, data: &FeatureCollection);
    fn add_layer(&mut self, layer: LayerSpec);
    fn has_layer(&self, id: &str) -> bool;
    /// Start delivering click and hover events for `layer_id` to [`MapLoader::on_click`],
    /// [`MapLoader::on_mouse_enter`] and [`MapLoader::on_mouse_leave`].
    fn enable_interaction(&mut self, layer_id: &str);
    fn center(&self) -> LngLat;
    fn fly_to(&mut self, camera: Camera);
    fn fit_bounds(&mut self, bounds: &Bounds, options: FitBoundsOptions);
    fn show_popup(&mut self, at: LngLat, html: &str);
    fn set_cursor(&mut self, cursor: Cursor);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: LngLat,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBoundsOptions {
    pub padding: f64,
    pub max_zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

/// What happened to the camera during a load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    /// Nothing with coordinates to look at.
    Unchanged,
    FlyTo(LngLat),
    Fit(Bounds),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub feature_count: usize,
    /// Features pulled out of geometry collections into their own source.
    pub extracted_count: usize,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, Default)]
pub struct MapLoader {
    options: LoaderOptions,
}

impl MapLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Registers `document` with the host and points the camera at it.
    pub fn load<H: MapHost>(&self, host: &mut H, document: &FeatureCollection) -> LoadSummary {
        host.add_source(&self.options.source_id, document);
        for layer in style::base_layers(&self.options.source_id) {
            host.add_layer(layer);
        }

        let extracted = flatten(document.features());
        if extracted.is_empty() {
            debug!("no geometry collections to split out");
        } else {
            host.add_source(
                &self.options.collection_source_id,
                &FeatureCollection::new(extracted.clone()),
            );
            for layer in style::collection_layers(&self.options.collection_source_id) {
                host.add_layer(layer);
            }
        }

        for layer_id in style::INTERACTIVE_LAYERS {
            if host.has_layer(layer_id) {
                host.enable_interaction(layer_id);
            }
        }

        let viewport = self.fit_viewport(host, document.features());
        info!(
            "loaded {} features ({} extracted from collections), viewport: {viewport:?}",
            document.len(),
            extracted.len()
        );
        LoadSummary {
            feature_count: document.len(),
            extracted_count: extracted.len(),
            viewport,
        }
    }

    fn fit_viewport<H: MapHost>(&self, host: &mut H, features: &[Feature]) -> Viewport {
        if let [only] = features {
            if let Some(Geometry::Point(point)) = only.geometry() {
                host.fly_to(Camera {
                    center: *point,
                    zoom: self.options.single_point_zoom,
                    pitch: self.options.pitch,
                    bearing: self.options.bearing,
                });
                return Viewport::FlyTo(*point);
            }
        }

        let Some(bounds) = compute_bounds(features) else {
            return Viewport::Unchanged;
        };
        host.fit_bounds(
            &bounds,
            FitBoundsOptions {
                padding: self.options.fit_padding,
                max_zoom: self.options.max_zoom,
                pitch: self.options.pitch,
                bearing: self.options.bearing,
            },
        );
        Viewport::Fit(bounds)
    }

    /// Shows a popup for the first of the clicked features.
    pub fn on_click<H: MapHost>(&self, host: &mut H, features: &[Feature]) {
        let Some(feature) = features.first() else {
            return;
        };
        let anchor = anchor_for(feature, host.center());
        host.show_popup(anchor, &popup_html(feature));
    }

    pub fn on_mouse_enter<H: MapHost>(&self, host: &mut H) {
        host.set_cursor(Cursor::Pointer);
    }

    pub fn on_mouse_leave<H: MapHost>(&self, host: &mut H) {
        host.set_cursor(Cursor::Default);
    }
}
